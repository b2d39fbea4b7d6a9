//! Pass 2: rewrite references to fingerprinted assets.
//!
//! Walks the same source trees a second time, after the rename map is fully
//! built. Stylesheets and markup files are scanned for references; every
//! reference that resolves (lexically, against the containing file's
//! directory) to a mapped source path is substituted with its public path.
//! Files where at least one substitution happened are written to the same
//! output location pass 1 used, making the pass-2 write authoritative for
//! content. Files with no substitutions are left to their pass-1 copies.
//!
//! Substitution is a plain first-occurrence substring replacement of the
//! trimmed, query-stripped reference text, with match positions taken from
//! the original content while edits accumulate in a working copy. If the
//! same literal appears earlier in the file for unrelated reasons, that
//! occurrence is replaced instead of the matched one. This fragility is
//! inherited behavior, kept deliberately and pinned by tests.
//!
//! Pass 2 is the only place content is treated as text: bytes are decoded
//! lossily as UTF-8 for scanning, and rewritten files are written back as
//! UTF-8. Everything pass 1 touches stays binary.

use crate::config::Config;
use crate::map::RenameMap;
use crate::materialize::rel_slash;
use crate::scanner::{self, FileCategory};
use crate::walk::{self, Skip, Visit};
use serde::Serialize;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walked file is outside the base directory: {0}")]
    OutsideBaseDir(PathBuf),
}

/// One file whose references were rewritten.
#[derive(Debug, Clone, Serialize)]
pub struct RewrittenFile {
    /// Path relative to `base_dir`, forward slashes.
    pub source_rel: String,
    /// Number of substitutions applied.
    pub replacements: usize,
}

/// Result of the rewrite pass.
#[derive(Debug, Default)]
pub struct RewriteReport {
    pub files: Vec<RewrittenFile>,
    pub skipped: Vec<Skip>,
}

/// Run pass 2 over every configured source path, in order. `map` is the
/// rename map built by [`crate::materialize::materialize`] and is read-only
/// here.
pub fn rewrite(config: &Config, map: &RenameMap) -> Result<RewriteReport, RewriteError> {
    let mut report = RewriteReport::default();

    for sub in &config.paths {
        let root = config.base_dir.join(sub);
        for visit in walk::walk_tree(&root)? {
            match visit {
                Visit::Skipped(skip) => report.skipped.push(skip),
                Visit::File(path) => {
                    // Every file is read; only classified ones are scanned.
                    let bytes = fs::read(&path)?;
                    let Some(category) = FileCategory::classify(&path) else {
                        continue;
                    };
                    let Some((content, replacements)) =
                        substitute(category, &bytes, &path, &config.base_dir, map)
                    else {
                        continue;
                    };

                    let rel = path
                        .strip_prefix(&config.base_dir)
                        .map_err(|_| RewriteError::OutsideBaseDir(path.clone()))?;
                    let dest = config.output_dir.join(rel);
                    fs::write(&dest, content.as_bytes())?;
                    report.files.push(RewrittenFile {
                        source_rel: rel_slash(rel),
                        replacements,
                    });
                }
            }
        }
    }

    Ok(report)
}

/// Scan `bytes` for references and substitute every one that resolves to a
/// mapped source path. Returns the rewritten text and the substitution
/// count, or `None` when nothing matched.
fn substitute(
    category: FileCategory,
    bytes: &[u8],
    path: &Path,
    base_dir: &Path,
    map: &RenameMap,
) -> Option<(String, usize)> {
    let original = String::from_utf8_lossy(bytes).into_owned();
    let mut content = original.clone();
    let mut replacements = 0;

    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    for captured in scanner::find_references(category, &original) {
        let name = captured.trim();
        let name = match name.split_once(['?', '#']) {
            Some((before, _)) => before,
            None => name,
        };
        let Some(rel) = resolve_reference(dir, name, base_dir) else {
            continue;
        };
        let Some(public) = map.get(&rel) else {
            continue;
        };
        // First textual occurrence, wherever it is. See module docs.
        if let Some(pos) = content.find(name) {
            content.replace_range(pos..pos + name.len(), public);
            replacements += 1;
        }
    }

    (replacements > 0).then_some((content, replacements))
}

/// Lexically resolve `reference` against `dir` and express it relative to
/// `base_dir`. Pure path math — the filesystem is never consulted, so a
/// reference to a nonexistent file still resolves (and then misses the
/// map). Returns `None` when the reference escapes the base directory.
fn resolve_reference(dir: &Path, reference: &str, base_dir: &Path) -> Option<String> {
    let target = Path::new(reference);
    let joined = if target.is_absolute() {
        target.to_path_buf()
    } else {
        dir.join(target)
    };
    let resolved = normalize(&joined);
    let rel = resolved.strip_prefix(normalize(base_dir)).ok()?;
    Some(rel_slash(rel))
}

/// Collapse `.` and `..` components without touching the filesystem. `..`
/// at the root stays clamped; leading `..` on a relative path is kept.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}
