//! List commands implementation

use rpinmux_core::gpio::{GPIO_BANK_STRIDE, GPIO_LINES_PER_BANK};
use rpinmux_core::GpioController;
use rpinmux_debugfs::list_pinctrl_devices;
use std::io::{self, Write};
use std::path::Path;

/// List pinctrl devices exporting pinmux reports
pub fn list_controllers(root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let devices = list_pinctrl_devices(root)?;

    if devices.is_empty() {
        println!("No pinctrl devices with pinmux reports in {}", root.display());
        return Ok(());
    }

    println!("Pinctrl devices in {}:", root.display());
    println!();
    for device in devices {
        println!("  {}", device);
    }
    Ok(())
}

/// List GPIO controllers with compiled-in register bases
pub fn list_gpio_controllers() -> io::Result<()> {
    let stdout = io::stdout();
    write_gpio_controllers(&mut stdout.lock())
}

/// Write the GPIO controller table
pub fn write_gpio_controllers(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Known GPIO controllers:")?;
    writeln!(out)?;
    writeln!(out, "{:<16} {:>12}", "Controller", "Base")?;
    writeln!(out, "{}", "-".repeat(29))?;

    for controller in GpioController::ALL {
        let base = format!("0x{:08X}", controller.base_address());
        writeln!(out, "{:<16} {:>12}", controller.name(), base)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} lines per bank, 0x{:X} bytes per bank",
        GPIO_LINES_PER_BANK, GPIO_BANK_STRIDE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_gpio_controllers() {
        let mut out = Vec::new();
        write_gpio_controllers(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let rows: Vec<&str> = text.lines().skip(4).take(2).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("tegra-gpio "));
        assert!(rows[0].ends_with("0x02200000"));
        assert!(rows[1].starts_with("tegra-gpio-aon"));
        assert!(rows[1].ends_with("0x0C2F0000"));
        assert!(text.ends_with("8 lines per bank, 0x1000 bytes per bank\n"));
    }
}
