use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::level::PermissionLevel;

/// Composite access masks produced by the share permission dialog's three
/// named presets. Almost all real share ACLs use one of these.
const SHARE_MASK_FULL: u32 = 0x001F_01FF;
const SHARE_MASK_CHANGE: u32 = 0x0013_01BF;
const SHARE_MASK_READ: u32 = 0x0012_00A9;

const FILE_WRITE_DATA: u32 = 0x0000_0002;
const FILE_APPEND_DATA: u32 = 0x0000_0004;

bitflags! {
    /// NTFS filesystem rights, as carried by a directory ACE.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FsRights: u32 {
        const READ_DATA = 0x0000_0001;
        const WRITE_DATA = 0x0000_0002;
        const APPEND_DATA = 0x0000_0004;
        const READ_EXTENDED_ATTRIBUTES = 0x0000_0008;
        const WRITE_EXTENDED_ATTRIBUTES = 0x0000_0010;
        const EXECUTE_FILE = 0x0000_0020;
        const DELETE_SUBDIRECTORIES_AND_FILES = 0x0000_0040;
        const READ_ATTRIBUTES = 0x0000_0080;
        const WRITE_ATTRIBUTES = 0x0000_0100;
        const DELETE = 0x0001_0000;
        const READ_PERMISSIONS = 0x0002_0000;
        const CHANGE_PERMISSIONS = 0x0004_0000;
        const TAKE_OWNERSHIP = 0x0008_0000;
        const SYNCHRONIZE = 0x0010_0000;

        /// The "Read" composite shown in the security dialog.
        const READ = Self::READ_DATA.bits()
            | Self::READ_EXTENDED_ATTRIBUTES.bits()
            | Self::READ_ATTRIBUTES.bits()
            | Self::READ_PERMISSIONS.bits()
            | Self::SYNCHRONIZE.bits();

        /// The "Write" composite.
        const WRITE = Self::WRITE_DATA.bits()
            | Self::APPEND_DATA.bits()
            | Self::WRITE_EXTENDED_ATTRIBUTES.bits()
            | Self::WRITE_ATTRIBUTES.bits();

        /// The "Modify" composite (read + write + execute + delete).
        const MODIFY = Self::READ.bits()
            | Self::WRITE.bits()
            | Self::EXECUTE_FILE.bits()
            | Self::DELETE.bits();

        const FULL_CONTROL = 0x001F_01FF;
    }
}

impl FsRights {
    /// Create/write aliases used when translating to a permission level.
    const CREATE_FILES: Self = Self::WRITE_DATA;
    const CREATE_DIRECTORIES: Self = Self::APPEND_DATA;
}

/// Map a share-level access mask onto the permission scale.
///
/// The three named presets are matched superset-wise in priority order.
/// An unrecognized mask falls back to its write-indicating bits, and an
/// unknown read-ish mask classifies as READ rather than NONE: for audit
/// purposes absence of information must over-report access, never hide it.
pub fn level_from_share_mask(mask: u32) -> PermissionLevel {
    if mask & SHARE_MASK_FULL == SHARE_MASK_FULL {
        return PermissionLevel::Full;
    }
    if mask & SHARE_MASK_CHANGE == SHARE_MASK_CHANGE {
        return PermissionLevel::Change;
    }
    if mask & SHARE_MASK_READ == SHARE_MASK_READ {
        return PermissionLevel::Read;
    }
    if mask & FILE_WRITE_DATA != 0 || mask & FILE_APPEND_DATA != 0 {
        return PermissionLevel::Change;
    }
    PermissionLevel::Read
}

/// Map NTFS rights flags onto the permission scale.
///
/// Check order matters: FullControl and Modify are composites that also set
/// several of the individual write bits, so they must be tested first.
pub fn level_from_fs_rights(rights: FsRights) -> PermissionLevel {
    if rights.contains(FsRights::FULL_CONTROL) {
        return PermissionLevel::Full;
    }
    if rights.contains(FsRights::MODIFY) {
        return PermissionLevel::Change;
    }

    let write_bits = FsRights::WRITE_DATA
        | FsRights::APPEND_DATA
        | FsRights::CREATE_FILES
        | FsRights::CREATE_DIRECTORIES
        | FsRights::WRITE_ATTRIBUTES
        | FsRights::WRITE_EXTENDED_ATTRIBUTES
        | FsRights::DELETE
        | FsRights::DELETE_SUBDIRECTORIES_AND_FILES;

    if rights.intersects(write_bits) {
        return PermissionLevel::Write;
    }
    PermissionLevel::Read
}
