//! TOML export of the pin analysis
//!
//! ```toml
//! pin_count = 1
//! gpio_count = 1
//!
//! [[pin]]
//! index = 5
//! name = "soc_gpio05"
//! mux_owner = "gpio"
//! gpio_owner = "tegra-gpio-aon: gpio5"
//! function = "UNASSIGNED"
//!
//! [pin.gpio]
//! controller = "tegra-gpio-aon"
//! gpio = 5
//! bank = 0
//! bit = 5
//! cnf = "0x0C2F00C0"
//! oe = "0x0C2F00D0"
//! out = "0x0C2F00E0"
//! in = "0x0C2F0100"
//!
//! [pin.note]
//! rule = "soc-gpio"
//! text = "General purpose SOC GPIO"
//! ```

use rpinmux_core::{analyze, GpioAddressSet, HeuristicNote, PinDescriptor, ReportSource};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct ExportFile<'a> {
    pin_count: usize,
    gpio_count: usize,
    pin: Vec<ExportPin<'a>>,
}

#[derive(Serialize)]
struct ExportPin<'a> {
    index: u32,
    name: &'a str,
    mux_owner: &'a str,
    gpio_owner: &'a str,
    function: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    gpio: Option<&'a GpioAddressSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a HeuristicNote>,
}

impl<'a> From<&'a PinDescriptor> for ExportPin<'a> {
    fn from(d: &'a PinDescriptor) -> Self {
        Self {
            index: d.pin,
            name: &d.record.name,
            mux_owner: &d.record.mux_owner,
            gpio_owner: &d.record.gpio_owner,
            function: &d.function,
            gpio: d.gpio.as_ref(),
            note: d.note.as_ref(),
        }
    }
}

/// Render descriptors as a TOML document
pub fn to_toml_string(pins: &[PinDescriptor]) -> Result<String, toml::ser::Error> {
    let file = ExportFile {
        pin_count: pins.len(),
        gpio_count: pins.iter().filter(|d| d.gpio.is_some()).count(),
        pin: pins.iter().map(ExportPin::from).collect(),
    };
    toml::to_string(&file)
}

/// Analyze all pins and export them as TOML
pub fn cmd_export(
    source: &impl ReportSource,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let pins = analyze(source)?;
    let content = to_toml_string(&pins)?;

    if let Some(out) = output {
        fs::write(out, content)?;
        println!("Saved analysis of {} pins to {:?}", pins.len(), out);
    } else {
        print!("{}", content);
    }

    Ok(())
}
