//! The rename map: source-relative paths to public output paths.
//!
//! Built once per run by the materialize pass and read-only afterwards, the
//! map is the only state shared between the two pipeline passes. It is a
//! plain owned value handed from pass 1 to pass 2 — no globals.
//!
//! Keys are paths relative to the base directory, always forward-slash
//! separated. Values are the fingerprinted relative path with its first
//! segment stripped (the public projection of the output tree), prefixed
//! with the configured domain when one is set.

use std::collections::BTreeMap;

/// Path markers identifying platform junk files. Files matching one are
/// still copied to the output tree but never recorded in the map.
/// Substring match, case-sensitive.
pub const OS_ARTIFACT_MARKERS: &[&str] = &["__MACOSX", ".DS_Store", "Thumbs.db"];

/// Run-scoped mapping from original relative path to public path.
#[derive(Debug, Clone, Default)]
pub struct RenameMap {
    domain: String,
    entries: BTreeMap<String, String>,
}

impl RenameMap {
    /// Create an empty map. `domain` prefixes every public path when
    /// non-empty; an empty domain means bare relative public paths.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Record one materialized file.
    ///
    /// `source_rel` is the original path relative to the base directory;
    /// `renamed_rel` is the same path carrying the output (possibly
    /// fingerprinted) filename. Both use forward slashes. The stored public
    /// path strips the first segment of `renamed_rel`. Recording is skipped
    /// when that stripped path contains an OS-artifact marker; a repeated
    /// `source_rel` overwrites the earlier entry.
    pub fn record(&mut self, source_rel: &str, renamed_rel: &str) {
        let public = strip_first_segment(renamed_rel);
        if OS_ARTIFACT_MARKERS.iter().any(|m| public.contains(m)) {
            return;
        }
        let value = if self.domain.is_empty() {
            public.to_string()
        } else {
            format!("{}/{}", self.domain, public)
        };
        self.entries.insert(source_rel.to_string(), value);
    }

    /// Look up the public path for a source-relative path.
    pub fn get(&self, source_rel: &str) -> Option<&str> {
        self.entries.get(source_rel).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order, for display and serialization.
    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}

/// Drop the first `/`-separated segment. A single-segment path strips to
/// the empty string.
fn strip_first_segment(rel: &str) -> &str {
    rel.split_once('/').map_or("", |(_, rest)| rest)
}
