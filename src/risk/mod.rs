//! Ransomware-propagation risk classification.
//!
//! A fixed, ordered rule cascade over the normalized and effective
//! permissions; the first matching rule wins. Host-level risk is the worst
//! tier across all of the host's shares.

use serde::{Deserialize, Serialize};

use crate::acl::{EffectivePermissions, NormalizedPermissionSet, PermissionLevel};
use crate::ir::ShareAuditRecord;

/// Risk tier for one share, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Mid,
    High,
    Critical,
}

impl RiskLevel {
    /// Lenient parse for legacy spellings at the serialization boundary.
    /// `MEDIUM` maps to `Mid`; anything unrecognized degrades to `Low`.
    pub fn from_str_lenient(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "CRITICAL" => Self::Critical,
            "HIGH" => Self::High,
            "MID" | "MEDIUM" => Self::Mid,
            _ => Self::Low,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Mid => write!(f, "Mid"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// Classify one share. Rules are checked in order; rule 1 firing means
/// rule 4 is never consulted.
pub fn evaluate(
    share: &NormalizedPermissionSet,
    fs: &NormalizedPermissionSet,
    effective: &EffectivePermissions,
) -> (RiskLevel, String) {
    if effective.everyone.is_write() {
        return (
            RiskLevel::Critical,
            "Everyone can write via SMB (effective)".into(),
        );
    }
    if effective.authenticated_users.is_write() {
        return (
            RiskLevel::Critical,
            "Authenticated Users can write via SMB (effective)".into(),
        );
    }
    if effective.users.is_write() {
        return (
            RiskLevel::Critical,
            "Users can write via SMB (effective)".into(),
        );
    }
    if fs.other_write {
        return (
            RiskLevel::High,
            "Unexpected NTFS write permission detected (other principals)".into(),
        );
    }
    // Share Everyone=FULL with a currently strict NTFS layer is still an
    // operational smell: one NTFS drift away from Critical.
    if share.everyone == PermissionLevel::Full {
        return (
            RiskLevel::Mid,
            "Share permission has Everyone=FULL; ensure NTFS is strictly controlled".into(),
        );
    }
    (
        RiskLevel::Low,
        "No SMB write permission for common user principals".into(),
    )
}

/// Worst tier across a host's records; `Low` when there are none.
pub fn overall_risk(records: &[ShareAuditRecord]) -> RiskLevel {
    records
        .iter()
        .map(|r| r.risk_level)
        .max()
        .unwrap_or(RiskLevel::Low)
}
