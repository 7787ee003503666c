//! Pin analysis report

use crate::cli::FilterArgs;
use rpinmux_core::{analyze, GpioAddressSet, PinDescriptor, ReportSource};
use std::io::{self, Write};

/// Analyze all pins and print the ones selected by the filter
pub fn cmd_analyze(
    source: &impl ReportSource,
    filter: &FilterArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let pins = analyze(source)?;
    let selected: Vec<PinDescriptor> =
        pins.into_iter().filter(|d| is_selected(filter, d)).collect();

    if selected.is_empty() {
        log::warn!("No pins match the given filter");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &selected)?;
    Ok(())
}

fn is_selected(filter: &FilterArgs, pin: &PinDescriptor) -> bool {
    if !filter.pins.is_empty() && !filter.pins.contains(&pin.pin) {
        return false;
    }
    if let Some(function) = &filter.function {
        if pin.function != *function {
            return false;
        }
    }
    !filter.gpio_only || pin.gpio.is_some()
}

/// Write the full text report
pub fn write_report(out: &mut impl Write, pins: &[PinDescriptor]) -> io::Result<()> {
    writeln!(out, "Pin Analysis")?;
    writeln!(out, "============")?;

    for pin in pins {
        writeln!(out)?;
        write_pin(out, pin)?;
    }

    let gpio_count = pins.iter().filter(|d| d.gpio.is_some()).count();
    writeln!(out)?;
    writeln!(out, "{} pin(s), {} in GPIO mode", pins.len(), gpio_count)?;
    Ok(())
}

/// Write one pin block
pub fn write_pin(out: &mut impl Write, pin: &PinDescriptor) -> io::Result<()> {
    writeln!(out, "PIN {}: {}", pin.pin, pin.record.name)?;
    writeln!(out, "  MUX Owner : {}", pin.record.mux_owner)?;
    writeln!(out, "  GPIO Owner: {}", pin.record.gpio_owner)?;
    writeln!(out, "  Function  : {}", pin.function)?;

    if let Some(gpio) = &pin.gpio {
        write_gpio(out, gpio)?;
    }

    if let Some(note) = &pin.note {
        writeln!(out, "  Info      : {} (heuristic)", note)?;
    }
    Ok(())
}

/// Write the GPIO number, bank position and register addresses
pub fn write_gpio(out: &mut impl Write, gpio: &GpioAddressSet) -> io::Result<()> {
    writeln!(out, "  GPIO Num  : {} ({})", gpio.gpio, gpio.controller)?;
    writeln!(out, "  Bank/Bit  : bank={}  bit={}", gpio.bank, gpio.bit)?;
    for (reg, addr) in gpio.registers() {
        writeln!(out, "  {:<3} reg   : 0x{:08X}", reg.name(), addr)?;
    }
    Ok(())
}
