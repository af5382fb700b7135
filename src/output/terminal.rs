//! Terminal output.
//!
//! Renders the report as aligned `key: value` lines and a subnet table.

use colored::Colorize;

use super::report::ReportLine;
use crate::models::SubnetPartition;

/// Left-align `value` in a field of at least `width` characters.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:<width$}")
    }
}

/// Render report lines as text. Section titles are bold when `color` is set.
pub fn render_text(lines: &[ReportLine], color: bool) -> String {
    let mut out = String::new();
    for line in lines {
        match line {
            ReportLine::Header(title) => {
                let title = format!("--- {title} ---");
                if color {
                    out.push_str(&format!("{}\n", title.bold().cyan()));
                } else {
                    out.push_str(&format!("{title}\n"));
                }
            }
            ReportLine::Field(key, value) => {
                out.push_str(&format!("{}: {value}\n", format_field(key, 25)));
            }
        }
    }
    out
}

/// Render every child of a partition, one row per subnet in address order.
pub fn render_subnet_table(partition: &SubnetPartition) -> String {
    let mut out = format!(
        "{}{}{}{}{}\n",
        format_field("#", 7),
        format_field("Subnet", 45),
        format_field("First Usable", 41),
        format_field("Last Usable", 41),
        "Usable"
    );
    for (i, child) in partition.children().iter().enumerate() {
        out.push_str(&format!(
            "{}{}{}{}{}\n",
            format_field(i + 1, 7),
            format_field(child.network_cidr(), 45),
            format_field(child.first_usable(), 41),
            format_field(child.last_usable(), 41),
            child.usable_addresses()
        ));
    }
    out
}
