use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::excel::{SheetSource, open_workbook};
use crate::report::{print_workbook, render_table};

/// Print the report for the workbook at `path`. Never fails: every error
/// ends up as text in `out`.
pub fn run<W: Write>(path: &Path, out: &mut W) {
    run_with(|| open_workbook(path), out);
}

/// Print the full report from a freshly opened source. If anything goes
/// wrong, reopen the source and dump only its first sheet unfiltered.
pub fn run_with<S, F, W>(mut open: F, out: &mut W)
where
    S: SheetSource,
    F: FnMut() -> Result<S>,
    W: Write,
{
    let primary = open().and_then(|mut source| print_workbook(&mut source, &mut *out));

    let Err(err) = primary else {
        return;
    };

    debug!(error = %format!("{:#}", err), "full report failed, dumping first sheet");

    // A broken output stream leaves nowhere to report to.
    let _ = writeln!(out, "Error reading Excel file: {:#}", err);
    let _ = writeln!(out, "\nTrying alternative approach...");

    if let Err(err) = dump_first_sheet(&mut open, out) {
        debug!(error = %format!("{:#}", err), "first sheet dump failed");
        let _ = writeln!(out, "Excel file could not be read");
    }
}

fn dump_first_sheet<S, F, W>(open: &mut F, out: &mut W) -> Result<()>
where
    S: SheetSource,
    F: FnMut() -> Result<S>,
    W: Write,
{
    let sheet = open()?.load_first_sheet()?;

    writeln!(out, "\n=== First Sheet Content ===\n")?;
    writeln!(out, "{}", render_table(&sheet))?;

    Ok(())
}
