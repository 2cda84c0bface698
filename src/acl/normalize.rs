use serde::{Deserialize, Serialize};

use super::level::PermissionLevel;
use super::principal::PrincipalCategory;
use super::rights::{level_from_fs_rights, level_from_share_mask};
use crate::ir::{AclEntries, FsAce, ShareAce};

/// One permission level per tracked principal category, as normalized from
/// a single ACL layer. `other_write` is only meaningful for the filesystem
/// layer: the share layer ignores untracked principals entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedPermissionSet {
    pub everyone: PermissionLevel,
    pub authenticated_users: PermissionLevel,
    pub users: PermissionLevel,
    pub admins: PermissionLevel,
    /// An untracked principal holds write capability on this layer.
    #[serde(default)]
    pub other_write: bool,
}

impl Default for NormalizedPermissionSet {
    fn default() -> Self {
        Self {
            everyone: PermissionLevel::None,
            authenticated_users: PermissionLevel::None,
            users: PermissionLevel::None,
            admins: PermissionLevel::None,
            other_write: false,
        }
    }
}

impl NormalizedPermissionSet {
    pub fn level(&self, category: PrincipalCategory) -> PermissionLevel {
        match category {
            PrincipalCategory::Everyone => self.everyone,
            PrincipalCategory::AuthenticatedUsers => self.authenticated_users,
            PrincipalCategory::Users => self.users,
            PrincipalCategory::Admins => self.admins,
            PrincipalCategory::Other => PermissionLevel::None,
        }
    }
}

/// Per-category fold state: running allow maximum plus a deny-write latch.
#[derive(Debug, Default)]
struct Accumulator {
    allow: [Option<PermissionLevel>; 4],
    deny_write: [bool; 4],
}

impl Accumulator {
    fn slot(category: PrincipalCategory) -> Option<usize> {
        match category {
            PrincipalCategory::Everyone => Some(0),
            PrincipalCategory::AuthenticatedUsers => Some(1),
            PrincipalCategory::Users => Some(2),
            PrincipalCategory::Admins => Some(3),
            PrincipalCategory::Other => None,
        }
    }

    fn allow_max(&mut self, category: PrincipalCategory, level: PermissionLevel) {
        if let Some(i) = Self::slot(category) {
            let cur = self.allow[i].unwrap_or(PermissionLevel::None);
            self.allow[i] = Some(cur.max(level));
        }
    }

    fn mark_deny_write(&mut self, category: PrincipalCategory) {
        if let Some(i) = Self::slot(category) {
            self.deny_write[i] = true;
        }
    }

    fn finish(self, other_write: bool) -> NormalizedPermissionSet {
        let merged = |i: usize| {
            PermissionLevel::merge_allow_deny(
                self.allow[i].unwrap_or(PermissionLevel::None),
                self.deny_write[i],
            )
        };
        NormalizedPermissionSet {
            everyone: merged(0),
            authenticated_users: merged(1),
            users: merged(2),
            admins: merged(3),
            other_write,
        }
    }
}

/// Fold share-level ACEs into per-category levels.
///
/// Untracked principals are skipped: the share layer carries no other-write
/// signal. An unavailable ACL normalizes to all-NONE.
pub fn normalize_share_acl(acl: &AclEntries<ShareAce>) -> NormalizedPermissionSet {
    let mut acc = Accumulator::default();

    for ace in acl.entries() {
        let category = PrincipalCategory::categorize(ace.sid.as_deref(), ace.name.as_deref());
        if category == PrincipalCategory::Other {
            continue;
        }

        let level = level_from_share_mask(ace.access_mask);
        if ace.is_deny {
            if level.is_write() {
                acc.mark_deny_write(category);
            }
        } else {
            acc.allow_max(category, level);
        }
    }

    acc.finish(false)
}

/// Fold filesystem ACEs into per-category levels plus the other-write latch.
///
/// Unlike the share layer, an allow entry for an untracked principal is not
/// dropped: if it translates to a write-capable level it sets `other_write`,
/// which stays set for the rest of the fold.
pub fn normalize_fs_acl(acl: &AclEntries<FsAce>) -> NormalizedPermissionSet {
    let mut acc = Accumulator::default();
    let mut other_write = false;

    for ace in acl.entries() {
        let category = PrincipalCategory::categorize(ace.sid.as_deref(), ace.name.as_deref());
        let level = level_from_fs_rights(ace.rights);

        if category == PrincipalCategory::Other {
            if !ace.is_deny && level.is_write() {
                other_write = true;
            }
            continue;
        }

        if ace.is_deny {
            if level.is_write() {
                acc.mark_deny_write(category);
            }
        } else {
            acc.allow_max(category, level);
        }
    }

    acc.finish(other_write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acl::rights::FsRights;
    use pretty_assertions::assert_eq;

    fn share_ace(sid: &str, mask: u32, is_deny: bool) -> ShareAce {
        ShareAce {
            sid: Some(sid.into()),
            name: None,
            access_mask: mask,
            is_deny,
        }
    }

    fn fs_ace(sid: &str, rights: FsRights, is_deny: bool) -> FsAce {
        FsAce {
            sid: Some(sid.into()),
            name: None,
            rights,
            is_deny,
        }
    }

    const FULL_MASK: u32 = 0x001F_01FF;
    const CHANGE_MASK: u32 = 0x0013_01BF;
    const READ_MASK: u32 = 0x0012_00A9;

    #[test]
    fn level_accessor_covers_every_category() {
        let set = NormalizedPermissionSet {
            everyone: PermissionLevel::Full,
            authenticated_users: PermissionLevel::Change,
            users: PermissionLevel::Read,
            admins: PermissionLevel::Deny,
            other_write: true,
        };
        assert_eq!(set.level(PrincipalCategory::Everyone), PermissionLevel::Full);
        assert_eq!(
            set.level(PrincipalCategory::AuthenticatedUsers),
            PermissionLevel::Change
        );
        assert_eq!(set.level(PrincipalCategory::Users), PermissionLevel::Read);
        assert_eq!(set.level(PrincipalCategory::Admins), PermissionLevel::Deny);
        // Untracked principals have no per-category level.
        assert_eq!(set.level(PrincipalCategory::Other), PermissionLevel::None);
    }

    #[test]
    fn empty_acl_is_all_none() {
        let set = normalize_share_acl(&AclEntries::Available(vec![]));
        assert_eq!(set, NormalizedPermissionSet::default());
    }

    #[test]
    fn unavailable_acl_is_all_none() {
        let set = normalize_share_acl(&AclEntries::Unavailable);
        assert_eq!(set, NormalizedPermissionSet::default());

        let set = normalize_fs_acl(&AclEntries::Unavailable);
        assert_eq!(set, NormalizedPermissionSet::default());
        assert!(!set.other_write);
    }

    #[test]
    fn allow_entries_fold_with_max() {
        let acl = AclEntries::Available(vec![
            share_ace("S-1-1-0", READ_MASK, false),
            share_ace("S-1-1-0", CHANGE_MASK, false),
            share_ace("S-1-1-0", READ_MASK, false),
        ]);
        let set = normalize_share_acl(&acl);
        assert_eq!(set.everyone, PermissionLevel::Change);
    }

    #[test]
    fn deny_write_overrides_any_allow() {
        let acl = AclEntries::Available(vec![
            share_ace("S-1-1-0", FULL_MASK, false),
            share_ace("S-1-1-0", CHANGE_MASK, true),
        ]);
        let set = normalize_share_acl(&acl);
        assert_eq!(set.everyone, PermissionLevel::Deny);
    }

    #[test]
    fn deny_read_does_not_latch() {
        // Only deny entries with write capability mark the category denied.
        let acl = AclEntries::Available(vec![
            share_ace("S-1-1-0", READ_MASK, true),
            share_ace("S-1-1-0", READ_MASK, false),
        ]);
        let set = normalize_share_acl(&acl);
        assert_eq!(set.everyone, PermissionLevel::Read);
    }

    #[test]
    fn untracked_principal_ignored_on_share_layer() {
        let acl = AclEntries::Available(vec![share_ace(
            "S-1-5-21-1004336348-1177238915-682003330-1104",
            FULL_MASK,
            false,
        )]);
        let set = normalize_share_acl(&acl);
        assert_eq!(set, NormalizedPermissionSet::default());
    }

    #[test]
    fn untracked_write_sets_other_write_on_fs_layer() {
        let acl = AclEntries::Available(vec![fs_ace(
            "S-1-5-21-1004336348-1177238915-682003330-1104",
            FsRights::WRITE_DATA,
            false,
        )]);
        let set = normalize_fs_acl(&acl);
        assert!(set.other_write);
        assert_eq!(set.everyone, PermissionLevel::None);
    }

    #[test]
    fn untracked_read_or_deny_does_not_set_other_write() {
        let acl = AclEntries::Available(vec![
            fs_ace("S-1-5-21-1-2-3-1104", FsRights::READ, false),
            fs_ace("S-1-5-21-1-2-3-1105", FsRights::MODIFY, true),
        ]);
        let set = normalize_fs_acl(&acl);
        assert!(!set.other_write);
    }

    #[test]
    fn other_write_stays_latched() {
        let acl = AclEntries::Available(vec![
            fs_ace("S-1-5-21-1-2-3-1104", FsRights::WRITE_DATA, false),
            fs_ace("S-1-5-21-1-2-3-1105", FsRights::READ, false),
        ]);
        assert!(normalize_fs_acl(&acl).other_write);
    }

    #[test]
    fn fs_categories_normalize_independently() {
        let acl = AclEntries::Available(vec![
            fs_ace("S-1-1-0", FsRights::READ, false),
            fs_ace("S-1-5-11", FsRights::MODIFY, false),
            fs_ace("S-1-5-32-545", FsRights::FULL_CONTROL, false),
            fs_ace("S-1-5-32-544", FsRights::FULL_CONTROL, false),
        ]);
        let set = normalize_fs_acl(&acl);
        assert_eq!(set.everyone, PermissionLevel::Read);
        assert_eq!(set.authenticated_users, PermissionLevel::Change);
        assert_eq!(set.users, PermissionLevel::Full);
        assert_eq!(set.admins, PermissionLevel::Full);
    }

    #[test]
    fn fs_deny_write_wins_per_category() {
        let acl = AclEntries::Available(vec![
            fs_ace("S-1-1-0", FsRights::FULL_CONTROL, false),
            fs_ace("S-1-1-0", FsRights::WRITE, true),
            fs_ace("S-1-5-32-545", FsRights::READ, false),
        ]);
        let set = normalize_fs_acl(&acl);
        assert_eq!(set.everyone, PermissionLevel::Deny);
        assert_eq!(set.users, PermissionLevel::Read);
    }
}
