//! Permission normalization: the lattice, rights translation, principal
//! categorization, per-layer ACL folding, and the share∧filesystem
//! intersection. Everything here is a pure transformation over values the
//! adapter already materialized.

pub mod effective;
pub mod level;
pub mod normalize;
pub mod principal;
pub mod rights;

pub use effective::{combine, EffectivePermissions};
pub use level::PermissionLevel;
pub use normalize::{normalize_fs_acl, normalize_share_acl, NormalizedPermissionSet};
pub use principal::PrincipalCategory;
pub use rights::FsRights;
