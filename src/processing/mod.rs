//! Operations over collections of networks.
//!
//! - [`summarize`] - Bounding supernet of a list of networks

mod summarize;

// Re-export public functions
pub use summarize::{summarize, summarize_cidrs};
