pub mod changed;
pub mod sync;
pub mod validate;

use actsync_sync::pipeline::SyncScope;

/// `--all` wins over positional folders; neither means "changed by the commit".
pub(crate) fn scope_from(all: bool, folders: Vec<String>) -> SyncScope {
    if all {
        SyncScope::All
    } else if folders.is_empty() {
        SyncScope::Changed
    } else {
        SyncScope::Folders(folders)
    }
}
