//! Ordered key/value view of a calculation, shared by every output format.

use crate::models::{IpVersion, ResultModel, SubnetSummary};

/// One line of a calculation report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// Section title.
    Header(&'static str),
    /// Parameter name and display value.
    Field(&'static str, String),
}

/// Build the report for `result`, followed by the subnetting section when a
/// summary is given.
pub fn report_lines(result: &ResultModel, summary: Option<&SubnetSummary>) -> Vec<ReportLine> {
    let field = |key, value: String| ReportLine::Field(key, value);
    let mut lines = vec![
        ReportLine::Header("Network"),
        field("IP Version", result.version().to_string()),
        field("Address", result.original_input_address().to_string()),
        field("Network Address", result.network_address().to_string()),
        field("CIDR", result.cidr_notation()),
        field("Netmask", result.netmask().to_string()),
        field("Wildcard Mask", result.wildcard_mask().to_string()),
    ];

    match result.version() {
        IpVersion::V4 => {
            if let Some(broadcast) = result.broadcast_address() {
                lines.push(field("Broadcast Address", broadcast.to_string()));
            }
        }
        IpVersion::V6 => {
            lines.push(field("Last Address", result.last_address().to_string()));
            lines.push(field("Exploded Network", result.network_address().exploded()));
        }
    }

    lines.push(field("Total Addresses", result.total_addresses().to_string()));
    lines.push(field("Usable Hosts", result.usable_addresses().to_string()));
    lines.push(field(
        "Usable Host Range",
        format!("{} - {}", result.first_usable(), result.last_usable()),
    ));

    if let Some(summary) = summary {
        let first = summary.first_subnet();
        lines.push(ReportLine::Header("Subnetting"));
        lines.push(field(
            "Number of Subnets",
            format!("{} (using /{})", summary.subnet_count(), summary.new_prefix()),
        ));
        lines.push(field(
            "Addresses per Subnet",
            summary.addresses_per_subnet().to_string(),
        ));
        lines.push(field(
            "First Subnet Range",
            format!("{} - {}", first.base_address(), first.last_address()),
        ));
    }

    lines
}
