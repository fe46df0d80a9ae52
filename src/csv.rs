// src/csv.rs
use std::io::{self, Write};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Full export text: header line first, then one line per row.
pub fn to_export_string(headers: &[String], rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    // Writing into a Vec<u8> cannot fail.
    let _ = write_row(&mut buf, headers, sep);
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn quotes_only_when_needed() {
        let mut out = Vec::new();
        write_row(&mut out, &strings(&["plain", "a, b", "say \"hi\"", "two\nlines"]), ',').unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "plain,\"a, b\",\"say \"\"hi\"\"\",\"two\nlines\"\n"
        );
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let mut out = Vec::new();
        write_row(&mut out, &strings(&["a, b", "c\td"]), '\t').unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a, b\t\"c\td\"\n");
    }

    #[test]
    fn export_string_starts_with_headers() {
        let s = to_export_string(
            &strings(&["Codice", "Modalità d'esame"]),
            &[strings(&["80001", "Scritto, orale"])],
            ',',
        );
        assert_eq!(s, "Codice,Modalità d'esame\n80001,\"Scritto, orale\"\n");
    }
}
