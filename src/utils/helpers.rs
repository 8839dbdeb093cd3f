use crate::excel::CellValue;

/// Format a float the way a spreadsheet user expects to read it:
/// whole numbers lose their fractional part.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Quote a text label as a single-quoted literal, switching to double
/// quotes when the text holds a single quote but no double quote.
#[must_use]
pub fn quote_label(label: &str) -> String {
    let quote = if label.contains('\'') && !label.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(label.len() + 2);
    quoted.push(quote);
    for c in label.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == quote => {
                quoted.push('\\');
                quoted.push(c);
            }
            c => quoted.push(c),
        }
    }
    quoted.push(quote);

    quoted
}

// Format the column list, e.g. ['Price', 'Notes']
#[must_use]
pub fn label_list(columns: &[CellValue]) -> String {
    let labels: Vec<String> = columns
        .iter()
        .map(|label| match label {
            CellValue::Text(s) => quote_label(s),
            other => other.to_string(),
        })
        .collect();

    format!("[{}]", labels.join(", "))
}
