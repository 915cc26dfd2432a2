//! Merges the per-ticker CSV files of a run into one XLSX workbook.
//!
//! Files that cannot be read are skipped with a warning. Only an empty sheet
//! set or a failure writing the workbook itself fails the combine.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{ColNum, RowNum, Workbook, Worksheet, XlsxError};
use thiserror::Error;

use crate::run_dir::RunDirError;
use crate::writer::CSV_EXTENSION;

/// One worksheet's worth of data: every CSV record, header included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub records: Vec<Vec<String>>,
}

/// Why a candidate file contributed no sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,
    Empty,
    Parse(String),
    Other(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotFound => write!(f, "file does not exist"),
            SkipReason::Empty => write!(f, "file is empty"),
            SkipReason::Parse(msg) => write!(f, "failed to parse: {}", msg),
            SkipReason::Other(msg) => write!(f, "{}", msg),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skipped {
    pub file: String,
    pub reason: SkipReason,
}

/// Outcome of a successful combine.
#[derive(Debug)]
pub struct CombineReport {
    pub output: PathBuf,
    /// Sheet names in workbook order.
    pub sheets: Vec<String>,
    pub skipped: Vec<Skipped>,
}

#[derive(Error, Debug)]
pub enum CombineError {
    #[error("No valid CSV files were processed")]
    NoValidFiles { skipped: Vec<Skipped> },
    #[error("Permission denied when trying to write to {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("An error occurred while writing the Excel file: {0}")]
    Write(String),
    #[error(transparent)]
    Listing(#[from] RunDirError),
}

/// Sheet name for a file: the name with its `.csv` suffix removed.
pub fn sheet_name(file_name: &str) -> &str {
    file_name
        .strip_suffix(&format!(".{}", CSV_EXTENSION))
        .unwrap_or(file_name)
}

/// Reads one CSV file into a [`Sheet`].
pub fn read_sheet(path: &Path) -> Result<Sheet, SkipReason> {
    if !path.exists() {
        return Err(SkipReason::NotFound);
    }
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = sheet_name(&file_name).to_string();
    // Worksheet names are restricted (length, characters); check before reading.
    if let Err(e) = Worksheet::new().set_name(name.as_str()) {
        return Err(SkipReason::Other(format!("invalid sheet name '{}': {}", name, e)));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(read_error)?;
    let mut records = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(read_error)?;
        records.push(record.iter().map(str::to_string).collect());
    }
    if records.is_empty() {
        return Err(SkipReason::Empty);
    }
    Ok(Sheet { name, records })
}

fn read_error(e: csv::Error) -> SkipReason {
    match e.kind() {
        csv::ErrorKind::Io(io) if io.kind() == io::ErrorKind::NotFound => SkipReason::NotFound,
        csv::ErrorKind::Io(io) => SkipReason::Other(io.to_string()),
        _ => SkipReason::Parse(e.to_string()),
    }
}

/// Reads every candidate in `files` (names relative to `dir`), in order.
///
/// A later file mapping to an existing sheet name replaces that sheet's
/// content in place.
pub fn collect_sheets(dir: &Path, files: &[String]) -> (Vec<Sheet>, Vec<Skipped>) {
    let mut sheets: Vec<Sheet> = Vec::new();
    let mut skipped = Vec::new();
    for file in files {
        let path = dir.join(file);
        match read_sheet(&path) {
            Ok(sheet) => match sheets.iter_mut().find(|s| s.name == sheet.name) {
                Some(existing) => *existing = sheet,
                None => sheets.push(sheet),
            },
            Err(reason) => {
                tracing::warn!("Skipping {}: {}", path.display(), reason);
                skipped.push(Skipped {
                    file: file.clone(),
                    reason,
                });
            }
        }
    }
    (sheets, skipped)
}

/// Writes `sheets` to a new workbook at `output`, cells as text, no index
/// column.
pub fn write_workbook(sheets: &[Sheet], output: &Path) -> Result<(), CombineError> {
    let mut workbook = Workbook::new();
    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(sheet.name.as_str())
            .map_err(|e| write_error(e, output))?;
        for (r, record) in sheet.records.iter().enumerate() {
            for (c, field) in record.iter().enumerate() {
                let (row, col) = cell_position(r, c)?;
                worksheet
                    .write_string(row, col, field.as_str())
                    .map_err(|e| write_error(e, output))?;
            }
        }
    }
    workbook.save(output).map_err(|e| write_error(e, output))
}

/// Zero-based record and field indexes as worksheet coordinates.
fn cell_position(record: usize, field: usize) -> Result<(RowNum, ColNum), CombineError> {
    let row = RowNum::try_from(record)
        .map_err(|_| CombineError::Write(format!("row {} is out of range", record)))?;
    let col = ColNum::try_from(field)
        .map_err(|_| CombineError::Write(format!("column {} is out of range", field)))?;
    Ok((row, col))
}

fn write_error(e: XlsxError, output: &Path) -> CombineError {
    match e {
        XlsxError::IoError(io) if io.kind() == io::ErrorKind::PermissionDenied => {
            CombineError::PermissionDenied(output.to_path_buf())
        }
        other => CombineError::Write(other.to_string()),
    }
}

/// Combines the readable CSV files among `files` into a workbook at `output`.
pub fn combine(dir: &Path, files: &[String], output: &Path) -> Result<CombineReport, CombineError> {
    let (sheets, skipped) = collect_sheets(dir, files);
    if sheets.is_empty() {
        return Err(CombineError::NoValidFiles { skipped });
    }
    write_workbook(&sheets, output)?;
    tracing::info!("Wrote {} sheets to {}", sheets.len(), output.display());
    Ok(CombineReport {
        output: output.to_path_buf(),
        sheets: sheets.into_iter().map(|s| s.name).collect(),
        skipped,
    })
}
