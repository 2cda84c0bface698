use crate::config::AuditVerdict;
use crate::ir::ShareAuditRecord;
use crate::risk::RiskLevel;

/// Render audit records as console output, worst shares first.
pub fn render(records: &[ShareAuditRecord], verdict: &AuditVerdict) -> String {
    let mut output = String::new();

    if records.is_empty() {
        output.push_str("\n  No shares exposed on this host.\n\n");
        output.push_str(&verdict_line(verdict));
        return output;
    }

    let mut sorted: Vec<&ShareAuditRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        b.risk_level
            .cmp(&a.risk_level)
            .then_with(|| a.share_name.cmp(&b.share_name))
    });

    output.push_str(&format!("\n  {} share(s) audited:\n\n", records.len()));

    for record in &sorted {
        let tier_tag = match record.risk_level {
            RiskLevel::Critical => "[CRITICAL]",
            RiskLevel::High => "[HIGH]    ",
            RiskLevel::Mid => "[MID]     ",
            RiskLevel::Low => "[LOW]     ",
        };

        output.push_str(&format!(
            "  {} {} ({})\n",
            tier_tag, record.share_name, record.share_path
        ));
        output.push_str(&format!("           {}\n", record.risk_reason));
        output.push_str(&format!(
            "           effective: Everyone={} AuthUsers={} Users={}\n",
            record.effective.everyone, record.effective.authenticated_users, record.effective.users
        ));
        output.push('\n');
    }

    output.push_str(&verdict_line(verdict));
    output
}

fn verdict_line(verdict: &AuditVerdict) -> String {
    let status = if verdict.pass { "PASS" } else { "FAIL" };
    format!(
        "  Result: {} (overall risk: {}, threshold: {})\n\n",
        status, verdict.overall_risk, verdict.fail_threshold
    )
}
