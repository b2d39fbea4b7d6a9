//! Shared test utilities for the revstamp test suite.
//!
//! Fixtures are built programmatically in temp directories — each test
//! describes exactly the tree it needs and gets an isolated copy it can
//! mutate without affecting other tests.

use crate::config::Config;
use std::fs;
use std::path::Path;

/// Write `content` at `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A complete config for the given roots, paths, and fingerprint
/// extensions, with no domain.
pub fn test_config(base_dir: &Path, output_dir: &Path, paths: &[&str], exts: &[&str]) -> Config {
    Config {
        base_dir: base_dir.to_path_buf(),
        paths: paths.iter().map(|p| p.to_string()).collect(),
        output_dir: output_dir.to_path_buf(),
        exts: exts.iter().map(|e| e.to_string()).collect(),
        domain: String::new(),
    }
}
