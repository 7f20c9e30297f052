use std::io::{self, Write};

/// Writes the generated `value` on its own line to standard output.
pub fn print_generated(value: &str) -> io::Result<()> {
    write_generated(&mut io::stdout().lock(), value)
}

fn write_generated(out: &mut impl Write, value: &str) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}
