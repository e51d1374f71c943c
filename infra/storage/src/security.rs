use crate::error::StorageError;
use std::path::{Component, Path, PathBuf};

/// Collapses `.` and `..` lexically, refusing anything that climbs above the root.
fn normalize_relative(path: &Path) -> Result<PathBuf, StorageError> {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::Normal(seg) => out.push(seg),
            Component::ParentDir if out.pop() => {},
            Component::ParentDir => {
                return Err(StorageError::PathTraversalAttempt {
                    message: path.display().to_string().into(),
                    context: Some("Path attempted to escape sandbox via '..'".into()),
                });
            },
            Component::RootDir | Component::Prefix(_) => {
                return Err(StorageError::PathTraversalAttempt {
                    message: path.display().to_string().into(),
                    context: Some("Absolute paths are not allowed in sandbox".into()),
                });
            },
        }
    }

    if out.as_os_str().is_empty() {
        return Err(StorageError::FileNotFound {
            message: path.display().to_string().into(),
            context: Some("Target must be a file".into()),
        });
    }

    Ok(out)
}

/// Joins `path` onto the canonical `root` and proves the result stays inside it.
///
/// The target does not have to exist; its closest existing ancestor is
/// canonicalized instead so a symlinked parent cannot point out of the sandbox.
pub(crate) fn resolve_path(root: &Path, path: impl AsRef<Path>) -> Result<PathBuf, StorageError> {
    let joined = root.join(normalize_relative(path.as_ref())?);

    let mut ancestor = Some(joined.as_path());
    while let Some(current) = ancestor {
        if current == root {
            return Ok(joined);
        }
        if current.exists() {
            let canonical = current.canonicalize().map_err(|source| StorageError::Io {
                source,
                context: Some(format!("Failed to verify {}", current.display()).into()),
            })?;
            if canonical.starts_with(root) {
                return Ok(joined);
            }
            return Err(StorageError::PathTraversalAttempt {
                message: canonical.display().to_string().into(),
                context: Some("Existing ancestor resolves outside sandbox".into()),
            });
        }
        ancestor = current.parent();
    }

    Err(StorageError::PathTraversalAttempt {
        message: joined.display().to_string().into(),
        context: Some("No valid parent directory found within sandbox".into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_parent_dirs_collapse() {
        let out = normalize_relative(Path::new("a/./b/../c.slot")).unwrap();
        assert_eq!(out, PathBuf::from("a/c.slot"));
    }

    #[test]
    fn escaping_parent_dirs_are_rejected() {
        let err = normalize_relative(Path::new("a/../../c")).unwrap_err();
        assert!(matches!(err, StorageError::PathTraversalAttempt { .. }));
    }

    #[test]
    fn empty_target_is_not_a_file() {
        let err = normalize_relative(Path::new("./")).unwrap_err();
        assert!(matches!(err, StorageError::FileNotFound { .. }));
    }
}
