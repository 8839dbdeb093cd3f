pub mod excel;
pub mod report;
pub mod utils;
