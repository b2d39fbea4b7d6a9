//! # revstamp
//!
//! Content-hash fingerprinting and reference rewriting for static asset
//! trees. Point it at a source directory and it produces a deployable copy
//! where `app.js` becomes `app_3f2a1bc.js` and every stylesheet `url(...)`
//! or markup `src=...` that pointed at a renamed file is updated to match.
//!
//! # Architecture: Two-Pass Pipeline
//!
//! The pipeline runs two sequential passes over the same configured source
//! paths:
//!
//! ```text
//! 1. Materialize   base_dir/<paths>  →  output_dir/   (+ rename map)
//! 2. Rewrite       base_dir/<paths>  →  output_dir/   (references → map values)
//! ```
//!
//! The ordering is the one piece of real coupling: references can only be
//! rewritten once every target already has its fingerprinted name, so the
//! rename map must be complete before the second pass reads it. The map is
//! a plain value owned by one [`pipeline::run`] call and handed to pass 2
//! by reference — there is no ambient state, and nothing survives a run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pipeline`] | Orchestration — the `run` entry point, the no-op gate for incomplete configs, and the `plan` dry run |
//! | [`materialize`] | Pass 1 — walk, fingerprint matching extensions, copy into the output tree, build the rename map |
//! | [`rewrite`] | Pass 2 — walk again, scan stylesheets and markup, substitute mapped references |
//! | [`map`] | The rename map: source-relative path → public path, with OS-artifact exclusion and domain prefixing |
//! | [`scanner`] | Reference scanning: file-category classification and the per-category capture patterns |
//! | [`walk`] | Depth-first traversal with explicit per-entry skip outcomes |
//! | [`hash`] | Truncated MD5 content hashing for fingerprinted filenames |
//! | [`config`] | `revstamp.toml` loading, defaults, and validation |
//! | [`output`] | CLI display — pure `format_*` functions plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Seven Hex Characters of MD5
//!
//! Fingerprints exist to bust caches, not to authenticate content. A 28-bit
//! prefix collides only when two versions of the *same file path* hash to
//! the same 7 characters, which is vanishingly rare at asset-pipeline
//! scale and merely serves a stale file if it ever happens. Strong
//! uniqueness is explicitly out of scope.
//!
//! ## Regex Scanning, Not Parsing
//!
//! References are found with two regexes (`url(...)` for stylesheets,
//! `src=...` for markup), not a CSS or HTML parser. This keeps the scanner
//! trivially predictable and fast, at the cost of well-understood blind
//! spots: substitution is a first-occurrence substring replacement, so a
//! comment containing the same literal text ahead of the real reference
//! will soak up the rewrite. The behavior is pinned by tests as a known
//! limitation.
//!
//! ## Binary Pass, Text Pass
//!
//! Pass 1 never decodes anything — bytes in, bytes out, so images and
//! fonts fingerprint and copy losslessly. Pass 2 is the only place content
//! is treated as text: files are decoded as UTF-8 (lossily) for scanning
//! and rewritten files are written back as UTF-8. Files the scanner has no
//! vocabulary for are never rewritten, so the asymmetry only ever touches
//! stylesheets and markup.
//!
//! ## Errors Skip Entries, Not Runs
//!
//! An unreadable directory entry is a per-entry [`walk::Visit::Skipped`]
//! outcome — reported, never fatal. A failed read or write of a file that
//! *was* reachable propagates and halts the run, leaving whatever was
//! already written in place. There are no retries and no rollback.

pub mod config;
pub mod hash;
pub mod map;
pub mod materialize;
pub mod output;
pub mod pipeline;
pub mod rewrite;
pub mod scanner;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
