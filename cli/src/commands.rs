pub mod resolve;

use std::path::PathBuf;

use clap::Parser;
use vendor6_common::config::{Config, DEFAULT_OUI_FILE, IEEE_OUI_URL};

const LONG_ABOUT: &str = "\
Identify the vendor of a device from its EUI-64 IPv6 address.

Each address given as an argument is resolved and the vendor printed.
Without arguments an interactive session starts; type \"exit\" to leave it.

The IEEE OUI registry is downloaded to the --oui-file location on first use.";

#[derive(Parser)]
#[command(name = "vendor6")]
#[command(about = "Identify vendors by IPv6 address.")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
pub struct CommandLine {
    /// IPv6 addresses to resolve
    pub addresses: Vec<String>,

    /// Path of the OUI registry file
    #[arg(short = 'f', long = "oui-file", default_value = DEFAULT_OUI_FILE)]
    pub oui_file: PathBuf,

    /// Print all information of the OUI record
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Where to download the registry from when it is missing
    #[arg(long, default_value = IEEE_OUI_URL)]
    pub url: String,

    /// Download the registry again even if a cached copy exists
    #[arg(long)]
    pub refresh: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            oui_file: self.oui_file.clone(),
            source_url: self.url.clone(),
            verbose: self.all,
            refresh: self.refresh,
        }
    }
}
