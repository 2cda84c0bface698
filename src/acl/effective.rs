use serde::{Deserialize, Serialize};

use super::level::PermissionLevel;
use super::normalize::NormalizedPermissionSet;
use super::principal::PrincipalCategory;

/// The access a network client actually has per category: the more
/// restrictive of the share gate and the filesystem gate, with Deny
/// dominating. Admins are normalized upstream but not combined; an
/// administrator with write access is not a misconfiguration signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectivePermissions {
    pub everyone: PermissionLevel,
    pub authenticated_users: PermissionLevel,
    pub users: PermissionLevel,
}

/// Intersect the two layers category-wise with the lattice `min`.
pub fn combine(
    share: &NormalizedPermissionSet,
    fs: &NormalizedPermissionSet,
) -> EffectivePermissions {
    let gate = |category: PrincipalCategory| share.level(category).min(fs.level(category));
    EffectivePermissions {
        everyone: gate(PrincipalCategory::Everyone),
        authenticated_users: gate(PrincipalCategory::AuthenticatedUsers),
        users: gate(PrincipalCategory::Users),
    }
}
