use crate::types::report::ProfileReport;

pub fn to_json(report: &ProfileReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
