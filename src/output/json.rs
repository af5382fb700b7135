//! JSON rendering of a calculation.

use serde::Serialize;

use crate::models::{ResultModel, SubnetPartition, SubnetSummary};

/// Everything one calculation produced.
#[derive(Serialize, Debug)]
pub struct CalculationReport<'a> {
    pub result: &'a ResultModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<&'a SubnetSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<&'a SubnetPartition>,
}

pub fn render_json(report: &CalculationReport<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
