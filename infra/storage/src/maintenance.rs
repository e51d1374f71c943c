use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};
use walkdir::{DirEntry, WalkDir};

/// Marker embedded in temp file names written by the atomic swap.
pub(crate) const TMP_MARKER: &str = ".cptgtmp.";

/// Temp files younger than this may still belong to an in-flight write.
const STALE_AFTER: Duration = Duration::from_secs(300);

/// Removes orphaned temp files left behind by interrupted writes.
///
/// Returns `(removed, failed)`.
pub(crate) fn purge_tmp(root: &Path) -> (usize, usize) {
    let now = SystemTime::now();
    let mut removed = 0;
    let mut failed = 0;

    WalkDir::new(root)
        .into_iter()
        .flatten()
        .filter(|entry| is_tmp(entry) && is_stale(entry, now))
        .for_each(|entry| match std::fs::remove_file(entry.path()) {
            Ok(()) => removed += 1,
            Err(err) => {
                warn!(path = %entry.path().display(), error = %err, "Temp file removal failed");
                failed += 1;
            },
        });

    if removed > 0 || failed > 0 {
        info!(removed, failed, "Cleaned up temporary files");
    }

    (removed, failed)
}

fn is_tmp(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry.file_name().to_str().is_some_and(|name| name.contains(TMP_MARKER))
}

fn is_stale(entry: &DirEntry, now: SystemTime) -> bool {
    entry
        .metadata()
        .ok()
        .and_then(|m| m.modified().ok())
        .and_then(|modified| now.duration_since(modified).ok())
        .is_none_or(|age| age > STALE_AFTER)
}
