use calamine::Data;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fmt;

use crate::utils::helpers::format_number;

/// A single value read from a worksheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Int(i64),
    Boolean(bool),
    DateTime(NaiveDateTime),
    /// Excel error code such as `#DIV/0!`
    Error(String),
    Absent,
}

impl CellValue {
    pub fn is_present(&self) -> bool {
        !matches!(self, CellValue::Absent)
    }
}

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Empty => CellValue::Absent,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Int(*i),
            Data::Bool(b) => CellValue::Boolean(*b),
            Data::Error(e) => CellValue::Error(e.to_string()),
            Data::DateTime(dt) => match excel_serial_to_datetime(dt.as_f64()) {
                Some(datetime) => CellValue::DateTime(datetime),
                None => CellValue::Number(dt.as_f64()),
            },
            // ISO strings come from ods files and are already readable
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => f.write_str(&format_number(*n)),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Boolean(true) => f.write_str("True"),
            CellValue::Boolean(false) => f.write_str("False"),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Error(code) => f.write_str(code),
            CellValue::Absent => f.write_str("NaN"),
        }
    }
}

/// Convert an Excel serial date (1900 date system) to a datetime.
///
/// Excel counts 1900-01-01 as day 1 and believes 1900 was a leap year, so
/// serials after 59 are one day ahead of the calendar.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    let days = if serial > 59.0 { serial - 1.0 } else { serial };

    let base = NaiveDate::from_ymd_opt(1899, 12, 31)?.and_hms_opt(0, 0, 0)?;
    let whole_days = days.trunc() as i64;
    let seconds = (days.fract() * 86_400.0).round() as i64;

    base.checked_add_signed(Duration::try_days(whole_days)?)?
        .checked_add_signed(Duration::try_seconds(seconds)?)
}
