//! CSV rendering of a calculation.

use itertools::Itertools;

use super::report::ReportLine;
use crate::models::SubnetPartition;

fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        // enclose in double quotes and double any quotes inside
        // also excel does not like spaces after comma between fields
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

fn csv_row<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|field| escape_csv_field(field.as_ref()))
        .join(",")
}

/// `Parameter,Value` rows for the report. Section titles are skipped.
pub fn report_csv(lines: &[ReportLine]) -> String {
    let mut out = String::from("Parameter,Value\n");
    for line in lines {
        if let ReportLine::Field(key, value) = line {
            out.push_str(&csv_row([*key, value.as_str()]));
            out.push('\n');
        }
    }
    out
}

/// One row per child subnet, in address order.
pub fn partition_csv(partition: &SubnetPartition) -> String {
    let mut out = String::from(
        "index,network,cidr,first_usable,last_usable,broadcast_or_last,usable_addresses\n",
    );
    for (i, child) in partition.children().iter().enumerate() {
        let end = child.broadcast_address().unwrap_or(child.last_address());
        out.push_str(&csv_row([
            (i + 1).to_string(),
            child.network_address().to_string(),
            child.cidr_notation(),
            child.first_usable().to_string(),
            child.last_usable().to_string(),
            end.to_string(),
            child.usable_addresses().to_string(),
        ]));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report_lines;
    use crate::processing::{compute, parse, subdivide, summarize};

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("plain"), "plain");
        assert_eq!(escape_csv_field("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_report_csv() {
        let result = compute(&parse("192.168.1.1", "24").unwrap());
        let summary = summarize(&result.network(), 26).unwrap();
        let csv = report_csv(&report_lines(&result, Some(&summary)));
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows[0], "Parameter,Value");
        assert_eq!(rows[1], "IP Version,IPv4");
        assert!(rows.contains(&"Broadcast Address,192.168.1.255"));
        assert!(rows.contains(&"Number of Subnets,4 (using /26)"));
        assert!(!csv.contains("---"));
    }

    #[test]
    fn test_partition_csv_order() {
        let result = compute(&parse("10.0.0.0", "30").unwrap());
        let partition = subdivide(&result.network(), 31).unwrap();
        assert_eq!(
            partition_csv(&partition),
            "index,network,cidr,first_usable,last_usable,broadcast_or_last,usable_addresses\n\
             1,10.0.0.0,/31,10.0.0.0,10.0.0.1,10.0.0.1,2\n\
             2,10.0.0.2,/31,10.0.0.2,10.0.0.3,10.0.0.3,2\n"
        );
    }

    #[test]
    fn test_partition_csv_v6_uses_last_address() {
        let result = compute(&parse("2001:db8::", "126").unwrap());
        let partition = subdivide(&result.network(), 127).unwrap();
        let csv = partition_csv(&partition);
        assert!(csv.contains("1,2001:db8::,/127,2001:db8::,2001:db8::1,2001:db8::1,2\n"));
    }
}
