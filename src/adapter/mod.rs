pub mod snapshot;

use std::path::Path;

use crate::error::Result;
use crate::ir::HostSnapshot;

/// A source of collected host data. The platform-specific collector runs on
/// the audited machine and materializes raw ACLs; a source only has to
/// deserialize its output and hand the core a typed snapshot.
pub trait SnapshotSource {
    /// Check if this source can handle the given path.
    fn detect(&self, path: &Path) -> bool;

    /// Load the snapshot, dropping shares the core should never see.
    fn load(&self, path: &Path) -> Result<HostSnapshot>;
}

/// Load a host snapshot from a collector output file.
pub fn load_snapshot(path: &Path) -> Result<HostSnapshot> {
    let source = snapshot::JsonSnapshotSource;
    if !source.detect(path) {
        return Err(crate::error::GuardError::NoSnapshot(
            path.display().to_string(),
        ));
    }
    source.load(path)
}
