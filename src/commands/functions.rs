//! Function table listing

use rpinmux_core::{parse_functions, PinFunctionTable, ReportKind, ReportSource};
use std::io::{self, Write};

/// Print the function table of a pin controller
pub fn cmd_functions(source: &impl ReportSource) -> Result<(), Box<dyn std::error::Error>> {
    let table = parse_functions(&source.read_report(ReportKind::PinmuxFunctions)?)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_functions(&mut out, &table)?;
    Ok(())
}

/// Write one line per function with its group count and groups
pub fn write_functions(out: &mut impl Write, table: &PinFunctionTable) -> io::Result<()> {
    writeln!(out, "Pinmux functions ({}):", table.len())?;
    writeln!(out)?;
    writeln!(out, "{:<20} {:>6}  {}", "Function", "Groups", "Members")?;
    writeln!(out, "{}", "-".repeat(60))?;

    for function in table {
        writeln!(
            out,
            "{:<20} {:>6}  {}",
            function.name,
            function.groups.len(),
            function.groups.join(" ")
        )?;
    }
    Ok(())
}
