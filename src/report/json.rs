use serde::Serialize;

use crate::config::AuditVerdict;
use crate::error::Result;
use crate::ir::ShareAuditRecord;

#[derive(Serialize)]
struct JsonReport<'a> {
    records: &'a [ShareAuditRecord],
    verdict: &'a AuditVerdict,
}

/// Render audit records as a JSON report.
pub fn render(records: &[ShareAuditRecord], verdict: &AuditVerdict) -> Result<String> {
    let report = JsonReport { records, verdict };
    let json = serde_json::to_string_pretty(&report)?;
    Ok(json)
}
