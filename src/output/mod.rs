//! Output formatting for calculation results.
//!
//! Presentation adapters that consume only the result types:
//! - [`report`] - ordered key/value lines shared by the formats below
//! - [`terminal`] - aligned text and subnet table
//! - [`csv`] - CSV rows
//! - [`json`] - JSON document

mod csv;
mod json;
mod report;
mod terminal;

pub use csv::{partition_csv, report_csv};
pub use json::{render_json, CalculationReport};
pub use report::{report_lines, ReportLine};
pub use terminal::{format_field, render_subnet_table, render_text};
