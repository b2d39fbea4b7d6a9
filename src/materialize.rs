//! Pass 1: fingerprint, copy, and build the rename map.
//!
//! For every configured source subdirectory, walks the tree and copies each
//! file into the output directory, mirroring its structure relative to the
//! base directory. Files whose extension is in the configured set get a
//! fingerprinted filename, `<stem>_<hash7>.<ext>`; everything else keeps its
//! name. Along the way the pass records every non-excluded file in the
//! [`RenameMap`] that the rewrite pass consumes.
//!
//! Content is treated as opaque bytes throughout — pass 1 never decodes
//! anything. Unreadable directory entries are skipped by the walker and
//! reported; read/write failures on a file that *was* reachable propagate
//! and halt the run. There is no cleanup of partially written output.

use crate::config::Config;
use crate::hash;
use crate::map::RenameMap;
use crate::walk::{self, Skip, Visit};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaterializeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walked file is outside the base directory: {0}")]
    OutsideBaseDir(PathBuf),
}

/// One file written to the output tree.
#[derive(Debug, Clone, Serialize)]
pub struct WrittenFile {
    /// Path relative to `base_dir`, forward slashes, original filename.
    pub source_rel: String,
    /// Path relative to `output_dir`, forward slashes, output filename.
    pub output_rel: String,
    /// Whether the filename embeds a content hash.
    pub fingerprinted: bool,
}

/// Result of the materialize pass: the rename map plus a report of what
/// was written and what the walker had to skip.
#[derive(Debug)]
pub struct Materialized {
    pub map: RenameMap,
    pub files: Vec<WrittenFile>,
    pub skipped: Vec<Skip>,
}

/// Run pass 1 over every configured source path, in order.
pub fn materialize(config: &Config) -> Result<Materialized, MaterializeError> {
    let mut map = RenameMap::new(config.domain.clone());
    let mut files = Vec::new();
    let mut skipped = Vec::new();

    for sub in &config.paths {
        let root = config.base_dir.join(sub);
        for visit in walk::walk_tree(&root)? {
            match visit {
                Visit::Skipped(skip) => skipped.push(skip),
                Visit::File(path) => {
                    let rel = path
                        .strip_prefix(&config.base_dir)
                        .map_err(|_| MaterializeError::OutsideBaseDir(path.clone()))?;
                    let content = fs::read(&path)?;

                    let original_name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    let output_name = output_file_name(&path, &content, &config.exts);
                    let fingerprinted = output_name != original_name;

                    let out_rel = rel.with_file_name(&output_name);
                    let dest = config.output_dir.join(&out_rel);
                    if let Some(parent) = dest.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(&dest, &content)?;

                    let source_rel = rel_slash(rel);
                    let output_rel = rel_slash(&out_rel);
                    map.record(&source_rel, &output_rel);
                    files.push(WrittenFile {
                        source_rel,
                        output_rel,
                        fingerprinted,
                    });
                }
            }
        }
    }

    Ok(Materialized {
        map,
        files,
        skipped,
    })
}

/// Output filename for a source file: `<stem>_<hash7>.<ext>` when the dotted
/// extension is configured for fingerprinting, the original name otherwise.
fn output_file_name(path: &Path, content: &[u8], exts: &[String]) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return name;
    };
    let dotted = format!(".{ext}");
    if !exts.iter().any(|e| *e == dotted) {
        return name;
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    format!("{}_{}.{}", stem, hash::fingerprint(content), ext)
}

/// Render a relative path with forward slashes regardless of platform.
pub(crate) fn rel_slash(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
