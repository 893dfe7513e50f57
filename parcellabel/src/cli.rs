//! Command-line interface definition and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Request a shipping label for one sales order.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (TOML or JSON).
    #[arg(short, long, env = "APP_CONFIG")]
    pub config: Option<PathBuf>,

    /// The order number to create a label for.
    #[arg(value_parser = non_blank)]
    pub order_number: String,

    /// The user the label is created for; becomes part of the file name.
    #[arg(value_parser = trimmed)]
    pub username: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn import() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

fn trimmed(value: &str) -> Result<String, String> {
    Ok(value.trim().to_owned())
}

fn non_blank(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Err("must not be blank".to_owned())
    } else {
        Ok(value.to_owned())
    }
}
