// tests/export.rs
use std::fs;
use std::path::PathBuf;

use unige_scrape::config::options::{ExportFormat, ExportOptions};
use unige_scrape::data::Table;
use unige_scrape::error::ExportError;
use unige_scrape::file::export_table;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("unige_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn export_to(path: &PathBuf, format: ExportFormat) -> ExportOptions {
    let mut export = ExportOptions::default();
    export.format = format;
    export.set_path(path.to_str().unwrap());
    export
}

#[test]
fn misshapen_row_is_rejected_before_writing() {
    let out = tmp_dir("shape").join("output.csv");
    let table = Table::new(
        strings(&["Codice", "Nome", "Modalità d'esame"]),
        vec![strings(&["1", "A", "orale"]), strings(&["2", "B"])],
    );

    let err = export_table(&table, &export_to(&out, ExportFormat::Csv)).unwrap_err();
    assert!(matches!(err, ExportError::Shape { row: 1, expected: 3, found: 2 }));
    assert!(!out.exists());
}

#[test]
fn empty_table_is_no_data() {
    let out = tmp_dir("empty").join("output.csv");
    let table = Table::new(strings(&["Codice"]), vec![]);

    let err = export_table(&table, &export_to(&out, ExportFormat::Csv)).unwrap_err();
    assert!(matches!(err, ExportError::NoData));
    assert!(!out.exists());
}

#[test]
fn csv_quotes_commas_quotes_and_newlines() {
    let out = tmp_dir("quoting").join("nested").join("out.csv");
    let table = Table::new(
        strings(&["Codice", "Docenti", "Modalità d'esame"]),
        vec![strings(&["1", "Rossi, Bianchi", "scritto \"finale\"\norale"])],
    );

    let written = export_table(&table, &export_to(&out, ExportFormat::Csv)).unwrap();
    assert_eq!(written, out);
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "Codice,Docenti,Modalità d'esame\n1,\"Rossi, Bianchi\",\"scritto \"\"finale\"\"\norale\"\n"
    );
}

#[test]
fn tsv_uses_tabs_and_leaves_commas_alone() {
    let out = tmp_dir("tsv").join("out.tsv");
    let table = Table::new(
        strings(&["Codice", "Docenti"]),
        vec![strings(&["1", "Rossi, Bianchi"])],
    );

    export_table(&table, &export_to(&out, ExportFormat::Tsv)).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "Codice\tDocenti\n1\tRossi, Bianchi\n");
}

#[test]
fn file_in_the_way_of_parent_directory_is_reported() {
    let dir = tmp_dir("blocked");
    let blocker = dir.join("blocker");
    fs::write(&blocker, "x").unwrap();
    let out = blocker.join("out.csv");
    let table = Table::new(strings(&["A"]), vec![strings(&["1"])]);

    let err = export_table(&table, &export_to(&out, ExportFormat::Csv)).unwrap_err();
    assert!(matches!(err, ExportError::NotADirectory(_)));
}
