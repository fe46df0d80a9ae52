// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::data::Table;
use crate::error::ExportError;

/// Validate, then write the table to `export.out_path()`.
/// Nothing is written when the table is empty or misshapen.
/// Returns the final path written to.
pub fn export_table(table: &Table, export: &ExportOptions) -> Result<PathBuf, ExportError> {
    if table.is_empty() {
        return Err(ExportError::NoData);
    }
    table.check_shape()?;

    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(&table.headers, &table.rows, export.format.delim());
    fs::write(&path, contents)?;
    logf!("Export: wrote {} rows → {}", table.nrows(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
