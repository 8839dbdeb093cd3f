use calamine::{Data, Range};
use std::collections::{HashMap, HashSet};

use crate::excel::CellValue;

/// One worksheet split into a header row and data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<CellValue>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Build a sheet from labelled columns. Short rows are padded with
    /// absent cells so every row has one value per column.
    pub fn new(name: &str, columns: Vec<CellValue>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Absent);
                row
            })
            .collect();

        Self {
            name: name.to_string(),
            columns: label_columns(columns),
            rows,
        }
    }

    /// The first row of the used range holds the column labels. Columns
    /// left of the used range are kept as blank columns so labels and
    /// positions match the worksheet from column A.
    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let leading_cols = range.start().map_or(0, |(_, col)| col as usize);

        let mut rows = range.rows().map(|row| {
            std::iter::repeat_n(CellValue::Absent, leading_cols)
                .chain(row.iter().map(CellValue::from))
                .collect::<Vec<_>>()
        });

        let columns = rows.next().unwrap_or_default();
        let rows = rows.collect();

        Self::new(name, columns, rows)
    }

    pub fn column_labels(&self) -> Vec<String> {
        self.columns.iter().map(ToString::to_string).collect()
    }

    /// Data rows with at least one present cell, with their 0-based index.
    pub fn non_empty_rows(&self) -> impl Iterator<Item = (usize, &[CellValue])> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().any(CellValue::is_present))
            .map(|(idx, row)| (idx, row.as_slice()))
    }
}

// Missing labels become "Unnamed: <idx>" and repeats get ".1", ".2", ...
fn label_columns(columns: Vec<CellValue>) -> Vec<CellValue> {
    let mut seen: HashSet<String> = HashSet::with_capacity(columns.len());
    let mut counts: HashMap<String, usize> = HashMap::new();

    columns
        .into_iter()
        .enumerate()
        .map(|(idx, label)| {
            let label = if label.is_present() {
                label
            } else {
                CellValue::Text(format!("Unnamed: {}", idx))
            };

            let key = label.to_string();
            if seen.insert(key.clone()) {
                return label;
            }

            let count = counts.entry(key.clone()).or_insert(0);
            let renamed = loop {
                *count += 1;
                let candidate = format!("{}.{}", key, count);
                if !seen.contains(&candidate) {
                    break candidate;
                }
            };
            seen.insert(renamed.clone());
            CellValue::Text(renamed)
        })
        .collect()
}
