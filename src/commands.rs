//! Command dispatch for the `ipv4kit` binary.
//!
//! Each command returns the text to print so it can be tested without
//! capturing stdout.

use crate::config::{Config, OutputFormat};
use crate::models::{Address, Mask, Network};
use crate::output::{format_list_row, MaskReport, Report};
use crate::processing::summarize_cidrs;
use serde::Serialize;
use std::error::Error;

pub const USAGE: &str = "\
usage: ipv4kit <command> [args]

commands:
  info <ip[/mask]>          address, network, masks, range and binary form
  mask <mask>               prefix, subnet mask, host mask and host count
  hosts <ip/mask>           usable hosts of the network
  subnets <ip/mask> <mask>  split the network at a longer mask
  classful <ip/mask>        classful network split at the current mask
  summarize <ip/mask>...    smallest network spanning all given networks";

/// Run one command.
///
/// # Arguments
/// * `args` - Command name followed by its arguments (program name excluded)
/// * `config` - Output settings
///
/// # Returns
/// * `Ok(String)` - Text to print
/// * `Err` - Parse errors, illegal operations, or usage errors
pub fn run(args: &[String], config: &Config) -> Result<String, Box<dyn Error>> {
    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (command.as_str(), rest),
        None => return Err(USAGE.into()),
    };
    log::debug!("run({command}) args={rest:?}");

    match (command, rest) {
        ("info", [input]) => {
            let report = Report::new(input, &config.binary_gap)?;
            Ok(match config.output {
                OutputFormat::Terminal => report.render_terminal(),
                OutputFormat::Json => report.render_json()?,
            })
        }
        ("mask", [input]) => {
            let report = MaskReport::new(input, &config.binary_gap)?;
            Ok(match config.output {
                OutputFormat::Terminal => report.render_terminal(),
                OutputFormat::Json => report.render_json()?,
            })
        }
        ("hosts", [cidr]) => {
            let network = Network::from_cidr(cidr)?;
            let all_hosts = network.hosts();
            let total = all_hosts.size_hint().0 as u64;
            let hosts: Vec<Address> = all_hosts.take(config.host_limit).collect();
            listing(&hosts, total, config)
        }
        ("subnets", [cidr, mask]) => {
            let network = Network::from_cidr(cidr)?;
            let mask: Mask = mask.parse()?;
            let total = network.subnets_count(mask)?;
            let subnets: Vec<Network> = network.subnets(mask)?.take(config.host_limit).collect();
            listing(&subnets, total, config)
        }
        ("classful", [cidr]) => {
            let network = Network::from_cidr(cidr)?;
            let total = network.classful_subnets_count()?;
            let subnets: Vec<Network> = network
                .classful_subnets()?
                .take(config.host_limit)
                .collect();
            listing(&subnets, total, config)
        }
        ("summarize", cidrs) if !cidrs.is_empty() => {
            let supernet = summarize_cidrs(cidrs)?;
            Ok(match config.output {
                OutputFormat::Terminal => supernet.to_string(),
                OutputFormat::Json => serde_json::to_string_pretty(&supernet)?,
            })
        }
        _ => Err(format!("invalid command or arguments: {}\n\n{USAGE}", args.join(" ")).into()),
    }
}

/// Numbered listing of the first items of a possibly longer sequence.
fn listing<T>(items: &[T], total: u64, config: &Config) -> Result<String, Box<dyn Error>>
where
    T: Serialize + ToString,
{
    if total > items.len() as u64 {
        log::warn!(
            "Listing {} of {} entries, raise IPV4KIT_HOST_LIMIT to see more",
            items.len(),
            total
        );
    }

    match config.output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Terminal => {
            let mut lines: Vec<String> = items
                .iter()
                .enumerate()
                .map(|(i, item)| format_list_row(i + 1, item.to_string()))
                .collect();
            if total > items.len() as u64 {
                lines.push(format!("# ... {} more", total - items.len() as u64));
            }
            Ok(lines.join("\n"))
        }
    }
}
