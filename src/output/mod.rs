//! Output formatting for reports and listings.
//!
//! This module handles formatting and outputting IPv4 data:
//! - [`report`] - Address/network and mask reports (terminal or JSON)
//! - [`terminal`] - Terminal field and row formatting

mod report;
mod terminal;

pub use report::{MaskReport, Report};
pub use terminal::{format_field, format_list_row, format_row};
