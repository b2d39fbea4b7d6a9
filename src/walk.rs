//! Directory traversal with explicit per-entry outcomes.
//!
//! Both pipeline passes enumerate the same source trees, so traversal lives
//! in one place with one contract: every regular file beneath the root is
//! yielded exactly once, depth-first, in directory-listing order. Entries
//! that cannot be read (permissions, dangling symlinks mid-walk) do not
//! abort the walk — they are returned as [`Visit::Skipped`] values so callers
//! can report them, and their subtrees are not descended into. Directories
//! themselves are never yielded, and symlinks are not followed.
//!
//! The one failure that does propagate is the root itself being unreadable
//! or missing: a configured source path that cannot be opened is a
//! misconfiguration, not a per-entry hiccup.

use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of visiting one directory entry.
#[derive(Debug)]
pub enum Visit {
    /// A regular file eligible for processing.
    File(PathBuf),
    /// An entry that could not be read; its subtree was not descended into.
    Skipped(Skip),
}

/// A traversal entry left unvisited, with the reason it was skipped.
#[derive(Debug, Clone)]
pub struct Skip {
    /// Path of the unreadable entry, when the underlying error carried one.
    pub path: Option<PathBuf>,
    /// Human-readable description of why the entry was skipped.
    pub reason: String,
}

/// Enumerate every regular file under `root`, depth-first.
///
/// Per-entry read failures become [`Visit::Skipped`] items; only a failure
/// to read `root` itself returns `Err`.
pub fn walk_tree(root: &Path) -> io::Result<Vec<Visit>> {
    let mut visits = Vec::new();
    for entry in WalkDir::new(root) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    visits.push(Visit::File(entry.into_path()));
                }
            }
            Err(err) => {
                if err.depth() == 0 || err.path() == Some(root) {
                    return Err(err.into());
                }
                visits.push(Visit::Skipped(Skip {
                    path: err.path().map(Path::to_path_buf),
                    reason: err.to_string(),
                }));
            }
        }
    }
    Ok(visits)
}

/// The files from a walk, ignoring skipped entries. Test convenience.
#[cfg(test)]
pub(crate) fn files_only(visits: Vec<Visit>) -> Vec<PathBuf> {
    visits
        .into_iter()
        .filter_map(|v| match v {
            Visit::File(path) => Some(path),
            Visit::Skipped(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_file;
    use tempfile::TempDir;

    #[test]
    fn finds_files_at_every_depth() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "top.txt", b"a");
        write_file(tmp.path(), "sub/mid.txt", b"b");
        write_file(tmp.path(), "sub/deeper/leaf.txt", b"c");

        let mut files = files_only(walk_tree(tmp.path()).unwrap());
        files.sort();

        assert_eq!(
            files,
            vec![
                tmp.path().join("sub/deeper/leaf.txt"),
                tmp.path().join("sub/mid.txt"),
                tmp.path().join("top.txt"),
            ]
        );
    }

    #[test]
    fn directories_are_never_yielded() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "sub/leaf.txt", b"x");
        std::fs::create_dir_all(tmp.path().join("empty/nested")).unwrap();

        let files = files_only(walk_tree(tmp.path()).unwrap());
        assert_eq!(files, vec![tmp.path().join("sub/leaf.txt")]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let result = walk_tree(&tmp.path().join("does-not-exist"));
        assert!(result.is_err());
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(walk_tree(tmp.path()).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_visited_as_files() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "real.txt", b"x");
        std::os::unix::fs::symlink(
            tmp.path().join("real.txt"),
            tmp.path().join("link.txt"),
        )
        .unwrap();
        std::os::unix::fs::symlink(
            tmp.path().join("nowhere"),
            tmp.path().join("dangling"),
        )
        .unwrap();

        let files = files_only(walk_tree(tmp.path()).unwrap());
        assert_eq!(files, vec![tmp.path().join("real.txt")]);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_becomes_a_skip() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "visible.txt", b"x");
        write_file(tmp.path(), "locked/hidden.txt", b"y");
        let locked = tmp.path().join("locked");
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        let visits = walk_tree(tmp.path()).unwrap();
        let skips: Vec<&Skip> = visits
            .iter()
            .filter_map(|v| match v {
                Visit::Skipped(s) => Some(s),
                Visit::File(_) => None,
            })
            .collect();

        // Restore permissions so TempDir cleanup succeeds.
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        // Root can run tests with CAP_DAC_OVERRIDE, in which case the
        // directory stays readable; only assert when the skip actually
        // happened.
        if !skips.is_empty() {
            assert_eq!(skips[0].path.as_deref(), Some(locked.as_path()));
        }
        assert!(
            visits
                .iter()
                .any(|v| matches!(v, Visit::File(p) if p.ends_with("visible.txt")))
        );
    }
}
