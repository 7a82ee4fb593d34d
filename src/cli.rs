//! Argument dispatch for the `cheatsheet` binary
//!
//! ```text
//! cheatsheet mask <input> <template> [symbol]
//! cheatsheet split <input>...
//! cheatsheet blocks <input> <size>...
//! ```

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::text::{format_blocks, mask, CaseStyle};

pub const USAGE: &str = "usage: cheatsheet mask <input> <template> [symbol]\n       cheatsheet split <input>...\n       cheatsheet blocks <input> <size>...";

/// Run one command and return the lines to print
pub fn run<S: AsRef<str>>(args: &[S], config: &Config) -> Result<Vec<String>> {
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    let Some((&command, rest)) = args.split_first() else {
        bail!(USAGE);
    };

    match command {
        "mask" => {
            let [input, template, extra @ ..] = rest else {
                bail!(USAGE);
            };
            let symbol = match extra.first() {
                Some(s) => s.chars().next().context("mask symbol must not be empty")?,
                None => config.masking.symbol,
            };
            Ok(vec![mask(input, template, symbol)])
        }
        "split" => {
            if rest.is_empty() {
                bail!(USAGE);
            }
            Ok(rest
                .iter()
                .map(|input| match CaseStyle::detect(input) {
                    Some(style) => {
                        debug!(%input, %style, "detected case style");
                        style.split_and_normalize(input).join(" ")
                    }
                    None => {
                        info!(%input, "no case style recognised");
                        String::new()
                    }
                })
                .collect())
        }
        "blocks" => {
            let Some((input, sizes)) = rest.split_first() else {
                bail!(USAGE);
            };
            let sizes = sizes
                .iter()
                .map(|s| s.parse::<usize>().with_context(|| format!("invalid block size {s:?}")))
                .collect::<Result<Vec<_>>>()?;
            Ok(vec![format_blocks(
                input,
                &sizes,
                &config.formatting.block_separator,
            )])
        }
        other => bail!("unknown command {other:?}\n{USAGE}"),
    }
}
