use crate::excel::Sheet;

/// Render a whole sheet as one aligned text grid, every row and every
/// column included. Absent cells show as `NaN`.
pub fn render_table(sheet: &Sheet) -> String {
    let labels = sheet.column_labels();

    if sheet.rows.is_empty() || labels.is_empty() {
        let index: Vec<String> = (0..sheet.rows.len()).map(|i| i.to_string()).collect();
        return format!(
            "Empty DataFrame\nColumns: [{}]\nIndex: [{}]",
            labels.join(", "),
            index.join(", ")
        );
    }

    let cells: Vec<Vec<String>> = sheet
        .rows
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    let index_width = (sheet.rows.len() - 1).to_string().len();
    let widths: Vec<usize> = labels
        .iter()
        .enumerate()
        .map(|(col, label)| {
            cells
                .iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(cells.len() + 1);

    let mut header = " ".repeat(index_width);
    for (label, width) in labels.iter().zip(&widths) {
        push_right(&mut header, label, *width);
    }
    lines.push(header);

    for (row_idx, row) in cells.iter().enumerate() {
        let mut line = format!("{:<width$}", row_idx, width = index_width);
        for (value, width) in row.iter().zip(&widths) {
            push_right(&mut line, value, *width);
        }
        lines.push(line);
    }

    lines.join("\n")
}

fn push_right(line: &mut String, value: &str, width: usize) {
    line.push_str("  ");
    let pad = width.saturating_sub(value.chars().count());
    line.extend(std::iter::repeat_n(' ', pad));
    line.push_str(value);
}
