//! Typed input and output records for the audit pipeline.
//!
//! The platform collector materializes raw ACL data into these structures
//! before the core ever sees it; nothing here touches a host API.

pub mod record;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use record::ShareAuditRecord;

use crate::acl::rights::FsRights;

/// A share-level access control entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareAce {
    /// Stable identifier (SID string), when the collector could resolve one.
    pub sid: Option<String>,
    /// Display name, usually `DOMAIN\Name`.
    pub name: Option<String>,
    /// Raw share access mask.
    pub access_mask: u32,
    #[serde(default)]
    pub is_deny: bool,
}

/// A filesystem-level access control entry, inherited entries included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FsAce {
    pub sid: Option<String>,
    pub name: Option<String>,
    pub rights: FsRights,
    #[serde(default)]
    pub is_deny: bool,
}

/// Result of one ACL enumeration: either the entries, or an explicit signal
/// that the collector could not read them (permission denied, path gone,
/// platform call failure). Normalizers treat `Unavailable` like an empty
/// list so one unreadable share never aborts the rest of the audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", content = "entries", rename_all = "snake_case")]
pub enum AclEntries<T> {
    Available(Vec<T>),
    Unavailable,
}

impl<T> AclEntries<T> {
    pub fn entries(&self) -> &[T] {
        match self {
            Self::Available(entries) => entries,
            Self::Unavailable => &[],
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

impl<T> Default for AclEntries<T> {
    fn default() -> Self {
        Self::Available(Vec::new())
    }
}

/// One exposed share as collected from the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareInput {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub share_acl: AclEntries<ShareAce>,
    #[serde(default)]
    pub fs_acl: AclEntries<FsAce>,
}

/// Identity of the audited host, carried through to every record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostIdentity {
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub os_version: String,
    #[serde(default)]
    pub ip: String,
}

/// Everything the collector gathered from one host in one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostSnapshot {
    pub host: HostIdentity,
    pub collected_at: DateTime<Utc>,
    #[serde(default)]
    pub shares: Vec<ShareInput>,
}
