//! Shareguard — SMB share permission auditor.
//!
//! Normalizes share-level and NTFS ACLs into a small permission lattice,
//! computes the effective permission per principal category, and classifies
//! each share into a ransomware-propagation risk tier.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use shareguard::{audit_file, AuditOptions};
//!
//! let options = AuditOptions::default();
//! let report = audit_file(Path::new("./host-snapshot.json"), &options).unwrap();
//! println!("Overall: {}, shares: {}", report.verdict.overall_risk, report.records.len());
//! ```

pub mod acl;
pub mod adapter;
pub mod config;
pub mod error;
pub mod ir;
pub mod report;
pub mod risk;

use std::path::Path;

use acl::{combine, normalize_fs_acl, normalize_share_acl};
use config::{AuditVerdict, Config};
use error::Result;
use ir::{HostSnapshot, ShareAuditRecord, ShareInput};
use report::OutputFormat;

/// Options for an audit invocation.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Path to config file (defaults to `.shareguard.toml` next to the snapshot).
    pub config_path: Option<std::path::PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// CLI override for the fail_on threshold.
    pub fail_on_override: Option<risk::RiskLevel>,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            format: OutputFormat::Console,
            fail_on_override: None,
        }
    }
}

/// Complete audit report for one host.
#[derive(Debug)]
pub struct AuditReport {
    pub records: Vec<ShareAuditRecord>,
    pub verdict: AuditVerdict,
}

/// Audit one share: normalize both layers, intersect, classify.
pub fn audit_share(snapshot: &HostSnapshot, share: &ShareInput) -> ShareAuditRecord {
    if share.share_acl.is_unavailable() {
        tracing::warn!(share = %share.name, "share ACL unavailable, normalizing to NONE");
    }
    if share.fs_acl.is_unavailable() {
        tracing::warn!(share = %share.name, path = %share.path, "filesystem ACL unavailable, normalizing to NONE");
    }

    let share_set = normalize_share_acl(&share.share_acl);
    let fs_set = normalize_fs_acl(&share.fs_acl);
    let effective = combine(&share_set, &fs_set);
    let (risk_level, risk_reason) = risk::evaluate(&share_set, &fs_set, &effective);

    ShareAuditRecord {
        host: snapshot.host.clone(),
        share_name: share.name.clone(),
        share_path: share.path.clone(),
        share: share_set,
        fs: fs_set,
        effective,
        risk_level,
        risk_reason,
    }
}

/// Audit every share in a snapshot and evaluate the exit policy.
pub fn audit(snapshot: &HostSnapshot, options: &AuditOptions) -> Result<AuditReport> {
    let config_path = options
        .config_path
        .clone()
        .unwrap_or_else(|| std::path::PathBuf::from(".shareguard.toml"));
    let mut config = Config::load(&config_path)?;

    if let Some(fail_on) = options.fail_on_override {
        config.policy.fail_on = fail_on;
    }

    let records: Vec<ShareAuditRecord> = snapshot
        .shares
        .iter()
        .map(|share| audit_share(snapshot, share))
        .collect();

    let verdict = config.policy.evaluate(&records);

    Ok(AuditReport { records, verdict })
}

/// Load a collector snapshot from disk and audit it.
pub fn audit_file(path: &Path, options: &AuditOptions) -> Result<AuditReport> {
    let snapshot = adapter::load_snapshot(path)?;
    audit(&snapshot, options)
}

/// Render an audit report in the specified format.
pub fn render_report(report: &AuditReport, format: OutputFormat) -> Result<String> {
    report::render(&report.records, &report.verdict, format)
}
