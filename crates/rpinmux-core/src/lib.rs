//! rpinmux-core - Core library for pinmux report analysis
//!
//! This crate turns the two text reports exported by a Linux pinctrl driver
//! (`pinmux-functions` and `pinmux-pins`) into one enriched descriptor per
//! physical pin. For pins owned by a Tegra GPIO controller it also computes
//! the bank/bit position and the absolute addresses of the per-bank control
//! registers.
//!
//! Nothing in this crate touches hardware. Register addresses are computed,
//! never dereferenced, and register values are always reported as
//! unavailable.
//!
//! # Pipeline
//!
//! ```text
//! ReportSource ──► report::functions ──┐
//!              └─► report::pins ───────┴─► describe ──► Vec<PinDescriptor>
//!                                             │
//!                                   classify ─┤
//!                                       gpio ─┘
//! ```
//!
//! # Example
//!
//! ```
//! use rpinmux_core::{analyze, MemorySource, ReportKind};
//!
//! let source = MemorySource::new()
//!     .with_report(ReportKind::PinmuxFunctions, "function: uart3,\n groups = uart3_tx_pw0\n")
//!     .with_report(
//!         ReportKind::PinmuxPins,
//!         "pin 1 (uart3_tx_pw0): (MUX 3110000.serial) (GPIO UNCLAIMED)\n",
//!     );
//!
//! let pins = analyze(&source)?;
//! assert_eq!(pins[0].function, "uart3");
//! # Ok::<(), rpinmux_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod classify;
pub mod describe;
pub mod error;
pub mod gpio;
pub mod report;

pub use classify::{classify, UNASSIGNED};
pub use describe::{
    analyze, annotate, build_descriptors, gpio_line, load_tables, HeuristicNote, NoteRule,
    PinDescriptor,
};
pub use error::{Error, ParseErrorKind, Result};
pub use gpio::{resolve, resolve_by_name, GpioAddressSet, GpioController, GpioRegister};
pub use report::functions::{parse_functions, PinFunction, PinFunctionTable};
pub use report::pins::{parse_pins, PinRecord, PinTable};
pub use report::{MemorySource, ReportKind, ReportSource};
