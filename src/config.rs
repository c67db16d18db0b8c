//! Settings for the `ipv4kit` binary.
//!
//! Values come from the process environment, which `main` first populates
//! from a `.env` file with `dotenv`:
//! - `IPV4KIT_BINARY_GAP` - gap between network and host bits in binary output
//! - `IPV4KIT_HOST_LIMIT` - maximum number of hosts/subnets listed
//! - `IPV4KIT_OUTPUT` - `terminal` or `json`

use std::str::FromStr;

pub const ENV_BINARY_GAP: &str = "IPV4KIT_BINARY_GAP";
pub const ENV_HOST_LIMIT: &str = "IPV4KIT_HOST_LIMIT";
pub const ENV_OUTPUT: &str = "IPV4KIT_OUTPUT";

const DEFAULT_BINARY_GAP: &str = " ";
const DEFAULT_HOST_LIMIT: usize = 16;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<OutputFormat, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" | "text" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub binary_gap: String,
    pub host_limit: usize,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            binary_gap: DEFAULT_BINARY_GAP.to_string(),
            host_limit: DEFAULT_HOST_LIMIT,
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Read the configuration from environment variables.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup, falling back to defaults
    /// for missing or invalid values.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(gap) = lookup(ENV_BINARY_GAP) {
            config.binary_gap = gap;
        }

        if let Some(limit) = lookup(ENV_HOST_LIMIT) {
            match limit.trim().parse::<usize>() {
                Ok(limit) => config.host_limit = limit,
                Err(e) => log::warn!(
                    "Ignoring {ENV_HOST_LIMIT}={limit:?} ({e}), using {}",
                    config.host_limit
                ),
            }
        }

        if let Some(output) = lookup(ENV_OUTPUT) {
            match output.parse::<OutputFormat>() {
                Ok(output) => config.output = output,
                Err(e) => log::warn!("Ignoring {ENV_OUTPUT}: {e}"),
            }
        }

        log::debug!("Config: {config:?}");
        config
    }
}
