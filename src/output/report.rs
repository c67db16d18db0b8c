//! Address and mask reports for the `ipv4kit` binary.

use super::terminal::format_row;
use crate::error::Result;
use crate::models::{Address, Mask, Network};
use serde::Serialize;

const LABEL_WIDTH: usize = 14;

/// Everything worth knowing about one address/mask pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub input: String,
    pub address: Address,
    pub network: Network,
    pub prefix: u8,
    pub subnet_mask: String,
    pub host_mask: String,
    pub host_id: String,
    pub broadcast: String,
    pub first_ip: Option<String>,
    pub last_ip: Option<String>,
    pub size: u64,
    pub class: String,
    pub private: bool,
    pub loopback: bool,
    pub link_local: bool,
    pub multicast: bool,
    pub reserved: bool,
    pub binary: String,
}

impl Report {
    /// Build a report for `"ip"` or `"ip/mask"`.
    ///
    /// # Arguments
    /// * `input` - Address literal, optionally with a mask in any notation
    /// * `gap` - Separator placed between network and host bits in `binary`
    pub fn new(input: &str, gap: &str) -> Result<Report> {
        let address = Address::from_cidr(input)?;
        let network = address.network();
        let mask = address.mask();

        Ok(Report {
            input: input.trim().to_string(),
            address,
            network,
            prefix: mask.prefix(),
            subnet_mask: mask.subnet_mask(),
            host_mask: mask.host_mask(),
            host_id: address.host_id(),
            broadcast: network.broadcast().address(),
            first_ip: network.first_ip().ok().map(|ip| ip.address()),
            last_ip: network.last_ip().ok().map(|ip| ip.address()),
            size: network.size(),
            class: address.class().to_string(),
            private: address.is_private(),
            loopback: address.is_loopback(),
            link_local: address.is_link_local(),
            multicast: address.is_multicast(),
            reserved: address.is_reserved(),
            binary: address.to_formatted_binary(Some(gap)),
        })
    }

    /// Ordered `(label, value)` rows for display.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let none = || "-".to_string();
        let mut flags = Vec::new();
        for (set, name) in [
            (self.loopback, "loopback"),
            (self.link_local, "link-local"),
            (self.multicast, "multicast"),
            (self.reserved, "reserved"),
        ] {
            if set {
                flags.push(name);
            }
        }

        vec![
            ("address", self.address.address()),
            ("network", self.network.to_string()),
            ("prefix", format!("/{}", self.prefix)),
            ("subnet mask", self.subnet_mask.clone()),
            ("host mask", self.host_mask.clone()),
            ("host id", self.host_id.clone()),
            ("broadcast", self.broadcast.clone()),
            ("first ip", self.first_ip.clone().unwrap_or_else(none)),
            ("last ip", self.last_ip.clone().unwrap_or_else(none)),
            ("hosts", self.size.to_string()),
            ("class", self.class.clone()),
            (
                "scope",
                if self.private { "private" } else { "public" }.to_string(),
            ),
            (
                "flags",
                if flags.is_empty() {
                    none()
                } else {
                    flags.join(",")
                },
            ),
            ("binary", self.binary.clone()),
        ]
    }

    /// Render for a terminal, one labelled row per line.
    pub fn render_terminal(&self) -> String {
        render_rows(&self.rows())
    }

    /// Render as pretty-printed JSON.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Every notation of a single mask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskReport {
    pub prefix: u8,
    pub subnet_mask: String,
    pub host_mask: String,
    pub network_size: u64,
    pub binary: String,
}

impl MaskReport {
    pub fn new(input: &str, gap: &str) -> Result<MaskReport> {
        let mask: Mask = input.parse()?;
        Ok(MaskReport {
            prefix: mask.prefix(),
            subnet_mask: mask.subnet_mask(),
            host_mask: mask.host_mask(),
            network_size: mask.network_size(),
            binary: mask.to_formatted_binary(Some(gap)),
        })
    }

    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("prefix", format!("/{}", self.prefix)),
            ("subnet mask", self.subnet_mask.clone()),
            ("host mask", self.host_mask.clone()),
            ("hosts", self.network_size.to_string()),
            ("binary", self.binary.clone()),
        ]
    }

    pub fn render_terminal(&self) -> String {
        render_rows(&self.rows())
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn render_rows(rows: &[(&'static str, String)]) -> String {
    rows.iter()
        .map(|(label, value)| format_row(label, value, LABEL_WIDTH))
        .collect::<Vec<String>>()
        .join("\n")
}
