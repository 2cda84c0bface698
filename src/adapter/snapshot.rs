use std::path::Path;

use super::SnapshotSource;
use crate::error::{GuardError, Result};
use crate::ir::HostSnapshot;

/// Loads the JSON snapshot emitted by the platform collector.
pub struct JsonSnapshotSource;

impl SnapshotSource for JsonSnapshotSource {
    fn detect(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn load(&self, path: &Path) -> Result<HostSnapshot> {
        let content = std::fs::read_to_string(path)?;
        let mut snapshot: HostSnapshot =
            serde_json::from_str(&content).map_err(|e| GuardError::Snapshot {
                file: path.display().to_string(),
                message: e.to_string(),
            })?;

        // Administrative and hidden shares (trailing $: ADMIN$, C$, IPC$,
        // plus anything an operator hid deliberately) are not part of the
        // audit surface.
        let before = snapshot.shares.len();
        snapshot
            .shares
            .retain(|s| !s.name.ends_with('$') && !s.name.is_empty() && !s.path.is_empty());
        let dropped = before - snapshot.shares.len();
        if dropped > 0 {
            tracing::debug!(dropped, "filtered administrative/hidden shares");
        }

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acl::{normalize_fs_acl, FsRights, PermissionLevel};
    use std::io::Write;

    fn write_snapshot(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    const SNAPSHOT: &str = r#"{
        "host": {"hostname": "FILESRV01", "domain": "CORP", "os": "Windows Server 2019", "os_version": "10.0.17763", "ip": "10.0.0.5"},
        "collected_at": "2026-08-20T09:30:00Z",
        "shares": [
            {"name": "Public", "path": "D:\\Shares\\Public"},
            {"name": "ADMIN$", "path": "C:\\Windows"},
            {"name": "C$", "path": "C:\\"}
        ]
    }"#;

    #[test]
    fn loads_and_filters_admin_shares() {
        let file = write_snapshot(SNAPSHOT);
        let snapshot = load(&file);
        assert_eq!(snapshot.shares.len(), 1);
        assert_eq!(snapshot.shares[0].name, "Public");
        assert_eq!(snapshot.host.hostname, "FILESRV01");
    }

    #[test]
    fn missing_acls_default_to_empty_available() {
        let file = write_snapshot(SNAPSHOT);
        let snapshot = load(&file);
        assert!(!snapshot.shares[0].share_acl.is_unavailable());
        assert!(snapshot.shares[0].share_acl.entries().is_empty());
    }

    #[test]
    fn unavailable_acl_round_trips() {
        let file = write_snapshot(
            r#"{
            "host": {"hostname": "H"},
            "collected_at": "2026-08-20T09:30:00Z",
            "shares": [
                {"name": "Public", "path": "D:\\P", "fs_acl": {"status": "unavailable"}}
            ]
        }"#,
        );
        let snapshot = load(&file);
        assert!(snapshot.shares[0].fs_acl.is_unavailable());
    }

    #[test]
    fn fs_ace_rights_parse_from_flag_names() {
        // Collectors emit rights in the flags-string form, not raw bits.
        let file = write_snapshot(
            r#"{
            "host": {"hostname": "H"},
            "collected_at": "2026-08-20T09:30:00Z",
            "shares": [
                {"name": "Public", "path": "D:\\P", "fs_acl": {"status": "available", "entries": [
                    {"sid": "S-1-5-21-1-2-3-1104", "name": "CORP\\Finance", "rights": "WRITE_DATA | DELETE", "is_deny": false},
                    {"sid": "S-1-1-0", "name": "Everyone", "rights": "READ", "is_deny": false}
                ]}}
            ]
        }"#,
        );
        let snapshot = load(&file);
        let fs_acl = &snapshot.shares[0].fs_acl;
        assert_eq!(
            fs_acl.entries()[0].rights,
            FsRights::WRITE_DATA | FsRights::DELETE
        );

        let set = normalize_fs_acl(fs_acl);
        assert!(set.other_write);
        assert_eq!(set.everyone, PermissionLevel::Read);
    }

    #[test]
    fn malformed_json_is_a_snapshot_error() {
        let file = write_snapshot("{ not json");
        let err = JsonSnapshotSource.load(file.path()).unwrap_err();
        assert!(matches!(err, GuardError::Snapshot { .. }));
    }

    fn load(file: &tempfile::NamedTempFile) -> HostSnapshot {
        JsonSnapshotSource.load(file.path()).unwrap()
    }
}
