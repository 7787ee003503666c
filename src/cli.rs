//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse a string as a hex or decimal u32
fn parse_hex_u32(s: &str) -> Result<u32, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex value: {}", e))
    } else {
        s.parse::<u32>().map_err(|e| format!("Invalid number: {}", e))
    }
}

#[derive(Parser)]
#[command(name = "rpinmux")]
#[command(author, version, about = "Pinmux and GPIO register analyzer", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the pinmux reports come from
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// Pinctrl device directory in debugfs
    #[arg(long, default_value = rpinmux_debugfs::DEFAULT_PINMUX_DIR)]
    pub pinmux_dir: PathBuf,

    /// Read the function table from this file instead (captured pinmux-functions)
    #[arg(long)]
    pub functions_file: Option<PathBuf>,

    /// Read the pin table from this file instead (captured pinmux-pins)
    #[arg(long)]
    pub pins_file: Option<PathBuf>,
}

/// Which pins to show
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only show these pin indices (comma-separated or repeated)
    #[arg(long = "pin", value_delimiter = ',')]
    pub pins: Vec<u32>,

    /// Only show pins resolved to this function
    #[arg(long)]
    pub function: Option<String>,

    /// Only show pins owned by a GPIO controller
    #[arg(long)]
    pub gpio_only: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze every pin: function, owners and GPIO register addresses
    Analyze {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export the pin analysis as TOML
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the pinmux function table
    Functions {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Compute register addresses for a single GPIO line
    Resolve {
        /// Controller-relative GPIO number (hex or decimal)
        #[arg(value_parser = parse_hex_u32)]
        gpio: u32,

        /// GPIO controller driver name
        #[arg(short, long, default_value = "tegra-gpio")]
        controller: String,
    },

    /// List pinctrl devices found in debugfs
    ListControllers {
        /// Debugfs pinctrl root
        #[arg(long, default_value = rpinmux_debugfs::PINCTRL_DEBUGFS_ROOT)]
        root: PathBuf,
    },

    /// List GPIO controllers with known register bases
    ListGpioControllers,
}
