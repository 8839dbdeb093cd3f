use anyhow::Result;
use std::io::Write;

use crate::excel::{CellValue, SheetSource};
use crate::utils::helpers::label_list;

pub const BANNER: &str = "=== SELLER NET SHEET 2025 ===";

/// Print every sheet in declared order. The first failure aborts the whole
/// report; sheets already printed stay printed.
pub fn print_workbook<S, W>(source: &mut S, out: &mut W) -> Result<()>
where
    S: SheetSource + ?Sized,
    W: Write,
{
    writeln!(out, "{}\n", BANNER)?;

    for name in source.sheet_names() {
        print_sheet(source, &name, out)?;
    }

    Ok(())
}

pub fn print_sheet<S, W>(source: &mut S, name: &str, out: &mut W) -> Result<()>
where
    S: SheetSource + ?Sized,
    W: Write,
{
    writeln!(out, "\n--- Sheet: {} ---\n", name)?;

    let sheet = source.load_sheet(name)?;

    writeln!(out, "Columns: {}", label_list(&sheet.columns))?;
    writeln!(out)?;

    for (row_idx, row) in sheet.non_empty_rows() {
        writeln!(out, "Row {}:", row_idx + 1)?;

        for (column, value) in sheet.columns.iter().zip(row) {
            if value.is_present() {
                writeln!(out, "  {}: {}", column, value)?;
            }
        }

        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::excel::Sheet;
    use anyhow::anyhow;

    /// In-memory workbook; sheets named in `broken` fail to load.
    pub(crate) struct MemorySource {
        pub sheets: Vec<Sheet>,
        pub broken: Vec<String>,
    }

    impl MemorySource {
        pub fn new(sheets: Vec<Sheet>) -> Self {
            Self {
                sheets,
                broken: Vec::new(),
            }
        }
    }

    impl SheetSource for MemorySource {
        fn sheet_names(&self) -> Vec<String> {
            self.sheets.iter().map(|s| s.name.clone()).collect()
        }

        fn load_sheet(&mut self, name: &str) -> Result<Sheet> {
            if self.broken.iter().any(|b| b == name) {
                return Err(anyhow!("Unable to read worksheet: {}", name));
            }
            self.sheets
                .iter()
                .find(|s| s.name == name)
                .cloned()
                .ok_or_else(|| anyhow!("Unknown sheet: {}", name))
        }
    }

    pub(crate) fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    pub(crate) fn price_sheet() -> Sheet {
        Sheet::new(
            "Sheet1",
            vec![text("Price"), text("Notes")],
            vec![
                vec![CellValue::Number(100.0), CellValue::Absent],
                vec![CellValue::Absent, CellValue::Absent],
                vec![CellValue::Number(200.0), text("ok")],
            ],
        )
    }

    fn render(source: &mut MemorySource) -> (String, Result<()>) {
        let mut out = Vec::new();
        let result = print_workbook(source, &mut out);
        (String::from_utf8(out).unwrap(), result)
    }

    #[test]
    fn prints_present_cells_and_skips_empty_rows() {
        let mut source = MemorySource::new(vec![price_sheet()]);
        let (output, result) = render(&mut source);

        assert!(result.is_ok());
        assert_eq!(
            output,
            "=== SELLER NET SHEET 2025 ===\n\n\
             \n--- Sheet: Sheet1 ---\n\n\
             Columns: ['Price', 'Notes']\n\n\
             Row 1:\n  Price: 100\n\n\
             Row 3:\n  Price: 200\n  Notes: ok\n\n"
        );
    }

    #[test]
    fn one_header_per_sheet_in_declared_order() {
        let sheets = ["Summary", "Costs", "Notes"]
            .iter()
            .map(|name| Sheet::new(name, vec![text("A")], vec![]))
            .collect();
        let mut source = MemorySource::new(sheets);
        let (output, _) = render(&mut source);

        let headers: Vec<&str> = output
            .lines()
            .filter(|line| line.starts_with("--- Sheet: "))
            .collect();
        assert_eq!(
            headers,
            vec![
                "--- Sheet: Summary ---",
                "--- Sheet: Costs ---",
                "--- Sheet: Notes ---"
            ]
        );
    }

    #[test]
    fn broken_sheet_stops_the_report() {
        let mut source = MemorySource::new(vec![
            price_sheet(),
            Sheet::new("Bad", vec![], vec![]),
            Sheet::new("Later", vec![], vec![]),
        ]);
        source.broken.push("Bad".to_string());

        let (output, result) = render(&mut source);

        assert!(result.is_err());
        assert!(output.contains("--- Sheet: Bad ---"));
        assert!(!output.contains("--- Sheet: Later ---"));
    }

    #[test]
    fn sheet_without_rows_prints_only_columns() {
        let mut source = MemorySource::new(vec![Sheet::new("Empty", vec![], vec![])]);
        let (output, _) = render(&mut source);

        assert!(output.ends_with("--- Sheet: Empty ---\n\nColumns: []\n\n"));
    }
}
