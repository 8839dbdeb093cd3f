mod fallback;
mod printer;
mod table;

pub use fallback::{run, run_with};
pub use printer::{BANNER, print_sheet, print_workbook};
pub use table::render_table;

/// Workbook read from the working directory.
pub const DEFAULT_FILE: &str = "Seller Net Sheet 2025.xlsx";
