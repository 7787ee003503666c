//! rpinmux - Pinmux and GPIO register analyzer
//!
//! Reads the pinctrl debugfs reports of a Tegra SoC (Xavier NX by default)
//! and shows, for every physical pin, the mux function it is routed to,
//! who owns it, and for pins in GPIO mode the bank/bit position and the
//! addresses of the CNF/OE/OUT/IN registers controlling it.
//!
//! # Architecture
//!
//! - `rpinmux-core` parses the reports and computes register addresses
//!   without touching hardware
//! - `rpinmux-debugfs` reads the reports from
//!   `/sys/kernel/debug/pinctrl/<device>/` or from captured files
//!
//! Register contents are never read; only their addresses are reported.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, SourceArgs};
use rpinmux_core::ReportKind;
use rpinmux_debugfs::DebugfsSource;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logger(cli.verbose).init();

    match cli.command {
        Commands::Analyze { source, filter } => {
            commands::analyze::cmd_analyze(&open_source(&source), &filter)
        }
        Commands::Export { source, output } => {
            commands::export::cmd_export(&open_source(&source), output.as_deref())
        }
        Commands::Functions { source } => commands::functions::cmd_functions(&open_source(&source)),
        Commands::Resolve { gpio, controller } => commands::resolve::cmd_resolve(gpio, &controller),
        Commands::ListControllers { root } => commands::list_controllers(&root),
        Commands::ListGpioControllers => Ok(commands::list_gpio_controllers()?),
    }
}

/// Log level forced by `-v` flags, `None` leaves `RUST_LOG` (default info) in charge
fn verbosity_level(verbose: u8) -> Option<log::LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    }
}

fn logger(verbose: u8) -> env_logger::Builder {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = verbosity_level(verbose) {
        builder.filter_level(level);
    }
    builder
}

/// Build the report source described by the command line
fn open_source(args: &SourceArgs) -> DebugfsSource {
    let mut source = DebugfsSource::new(&args.pinmux_dir);

    if let Some(path) = &args.functions_file {
        source = source.with_override(ReportKind::PinmuxFunctions, path);
    }
    if let Some(path) = &args.pins_file {
        source = source.with_override(ReportKind::PinmuxPins, path);
    }

    for kind in ReportKind::ALL {
        log::debug!("Reading {} from {}", kind, source.report_path(kind).display());
    }
    source
}
