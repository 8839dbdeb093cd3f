use anyhow::{Context, Result};
use calamine::{Reader, Sheets, open_workbook_auto};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::excel::Sheet;

/// Read access to the sheets of a workbook.
pub trait SheetSource {
    /// Sheet names in the order the file declares them.
    fn sheet_names(&self) -> Vec<String>;

    fn load_sheet(&mut self, name: &str) -> Result<Sheet>;

    fn load_first_sheet(&mut self) -> Result<Sheet> {
        let first = self
            .sheet_names()
            .into_iter()
            .next()
            .context("No worksheets found in file")?;
        self.load_sheet(&first)
    }
}

pub struct Workbook {
    inner: Sheets<BufReader<File>>,
    file_path: String,
}

pub fn open_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path_str = path.as_ref().to_string_lossy().to_string();

    let inner = open_workbook_auto(&path)
        .with_context(|| format!("Unable to parse Excel file: {}", path_str))?;

    debug!(path = %path_str, sheets = inner.sheet_names().len(), "opened workbook");

    Ok(Workbook {
        inner,
        file_path: path_str,
    })
}

impl SheetSource for Workbook {
    fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names()
    }

    // Sheets are read fresh on every call; nothing is cached between sheets.
    fn load_sheet(&mut self, name: &str) -> Result<Sheet> {
        let range = self
            .inner
            .worksheet_range(name)
            .with_context(|| format!("Unable to read worksheet: {}", name))?;

        let sheet = Sheet::from_range(name, &range);
        debug!(
            file = %self.file_path,
            sheet = name,
            rows = sheet.rows.len(),
            columns = sheet.columns.len(),
            "loaded worksheet"
        );

        Ok(sheet)
    }
}
