//! Single GPIO address resolution

use super::analyze::write_gpio;
use rpinmux_core::{resolve_by_name, GpioController};
use std::io::{self, Write};

/// Print bank position and register addresses for one GPIO line
pub fn cmd_resolve(gpio: u32, controller: &str) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    write_resolution(&mut stdout.lock(), gpio, controller)
}

/// Write the register block of `gpio` on the controller named `controller`
pub fn write_resolution(
    out: &mut impl Write,
    gpio: u32,
    controller: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(regs) = resolve_by_name(gpio, controller) else {
        let known: Vec<&str> = GpioController::ALL.iter().map(|c| c.name()).collect();
        return Err(format!(
            "No register base known for GPIO controller '{}' (known: {})",
            controller,
            known.join(", ")
        )
        .into());
    };

    write_gpio(out, &regs)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_resolution() {
        let mut out = Vec::new();
        write_resolution(&mut out, 18, "tegra-gpio").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("bank=2  bit=2"));
        assert!(text.contains("0x022020C0"));
    }

    #[test]
    fn test_unknown_controller_lists_known() {
        let mut out = Vec::new();
        let err = write_resolution(&mut out, 18, "tegra-gpio-main").unwrap_err();

        assert_eq!(
            err.to_string(),
            "No register base known for GPIO controller 'tegra-gpio-main' \
             (known: tegra-gpio, tegra-gpio-aon)"
        );
        assert!(out.is_empty());
    }
}
