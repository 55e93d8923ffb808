// src/csv.rs
use std::io::{self, Write};

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer. RFC-style quoting, UTF-8.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, ",")?; } else { first = false; }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header row from static column names.
pub fn write_header<W: Write>(w: W, columns: &[&str]) -> io::Result<()> {
    let owned: Vec<String> = columns.iter().map(|c| s!(*c)).collect();
    write_row(w, &owned)
}
