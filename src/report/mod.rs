pub mod console;
pub mod csv;
pub mod json;

use serde::{Deserialize, Serialize};

use crate::config::AuditVerdict;
use crate::error::Result;
use crate::ir::ShareAuditRecord;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "console" | "text" => Some(Self::Console),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Render audit records into the specified format.
pub fn render(
    records: &[ShareAuditRecord],
    verdict: &AuditVerdict,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Console => Ok(console::render(records, verdict)),
        OutputFormat::Json => json::render(records, verdict),
        OutputFormat::Csv => Ok(csv::render(records)),
    }
}
