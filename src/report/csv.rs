use crate::ir::ShareAuditRecord;

/// Column order matches the audit sheet consumers expect: identity, share
/// layer, filesystem layer, effective layer, risk.
const HEADER: &[&str] = &[
    "Hostname",
    "Domain",
    "OS",
    "OSVersion",
    "IP",
    "ShareName",
    "SharePath",
    "Share_Everyone",
    "Share_AuthenticatedUsers",
    "Share_Users",
    "Share_Admins",
    "NTFS_Everyone",
    "NTFS_AuthenticatedUsers",
    "NTFS_Users",
    "NTFS_Admins",
    "NTFS_OtherWrite",
    "Effective_Everyone",
    "Effective_AuthenticatedUsers",
    "Effective_Users",
    "Risk_Level",
    "Risk_Reason",
];

/// Render audit records as CSV, one row per share. Deny renders as the
/// literal `DENY`; the other-write flag as TRUE/FALSE.
pub fn render(records: &[ShareAuditRecord]) -> String {
    let mut output = String::new();
    output.push_str(&HEADER.join(","));
    output.push('\n');

    for r in records {
        let fields = [
            r.host.hostname.clone(),
            r.host.domain.clone(),
            r.host.os.clone(),
            r.host.os_version.clone(),
            r.host.ip.clone(),
            r.share_name.clone(),
            r.share_path.clone(),
            r.share.everyone.to_string(),
            r.share.authenticated_users.to_string(),
            r.share.users.to_string(),
            r.share.admins.to_string(),
            r.fs.everyone.to_string(),
            r.fs.authenticated_users.to_string(),
            r.fs.users.to_string(),
            r.fs.admins.to_string(),
            if r.fs.other_write { "TRUE" } else { "FALSE" }.to_string(),
            r.effective.everyone.to_string(),
            r.effective.authenticated_users.to_string(),
            r.effective.users.to_string(),
            r.risk_level.to_string(),
            r.risk_reason.clone(),
        ];
        let row: Vec<String> = fields.iter().map(|f| escape(f)).collect();
        output.push_str(&row.join(","));
        output.push('\n');
    }

    output
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
