use serde::{Deserialize, Serialize};

use super::HostIdentity;
use crate::acl::{EffectivePermissions, NormalizedPermissionSet};
use crate::risk::RiskLevel;

/// One audited share: identity, both normalized layers, the effective
/// intersection, and the risk verdict. Built once by the pipeline and
/// consumed read-only by the report renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareAuditRecord {
    #[serde(flatten)]
    pub host: HostIdentity,
    pub share_name: String,
    pub share_path: String,
    pub share: NormalizedPermissionSet,
    pub fs: NormalizedPermissionSet,
    pub effective: EffectivePermissions,
    pub risk_level: RiskLevel,
    pub risk_reason: String,
}
