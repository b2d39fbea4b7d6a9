//! Pipeline orchestration: the two passes, in order, behind one entry point.
//!
//! [`run`] is the whole programmatic surface: materialize first (building
//! the rename map), then rewrite with a shared reference to the finished
//! map. The ordering is load-bearing — rewriting can only substitute
//! references whose targets already have fingerprinted names — so the two
//! stage functions are never exposed in a way that lets them interleave.
//!
//! A config missing `base_dir` or `paths` short-circuits into an empty
//! [`RunSummary`] with `no_op` set: not an error, no effect on disk. This
//! mirrors how the pipeline behaves when dropped into a build that hasn't
//! opted in yet.
//!
//! [`plan`] is the read-only companion used by `revstamp check`: same walk,
//! same classification, nothing written.

use crate::config::Config;
use crate::map::RenameMap;
use crate::materialize::{self, MaterializeError, WrittenFile};
use crate::rewrite::{self, RewriteError, RewrittenFile};
use crate::scanner::FileCategory;
use crate::walk::{self, Skip, Visit};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("rename pass failed: {0}")]
    Materialize(#[from] MaterializeError),
    #[error("rewrite pass failed: {0}")]
    Rewrite(#[from] RewriteError),
}

/// Everything one [`run`] produced: the rename map and both pass reports.
#[derive(Debug)]
pub struct RunSummary {
    /// True when the config was incomplete and nothing was done.
    pub no_op: bool,
    /// Source-relative path → public path, owned by this run.
    pub map: RenameMap,
    /// Files written by the materialize pass.
    pub written: Vec<WrittenFile>,
    /// Files rewritten by the rewrite pass.
    pub rewritten: Vec<RewrittenFile>,
    /// Entries skipped by traversal, across both passes.
    pub skipped: Vec<Skip>,
}

impl RunSummary {
    fn empty_no_op() -> Self {
        Self {
            no_op: true,
            map: RenameMap::default(),
            written: Vec::new(),
            rewritten: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Run the full pipeline for `config`.
///
/// Missing `base_dir` or empty `paths` is a silent no-op. Everything else
/// runs pass 1 to completion over all configured paths, then pass 2.
pub fn run(config: &Config) -> Result<RunSummary, PipelineError> {
    if !config.is_complete() {
        return Ok(RunSummary::empty_no_op());
    }

    let materialized = materialize::materialize(config)?;
    let rewritten = rewrite::rewrite(config, &materialized.map)?;

    let mut skipped = materialized.skipped;
    skipped.extend(rewritten.skipped);

    Ok(RunSummary {
        no_op: false,
        map: materialized.map,
        written: materialized.files,
        rewritten: rewritten.files,
        skipped,
    })
}

/// What a build would do, without doing it.
#[derive(Debug)]
pub struct Plan {
    /// True when the config was incomplete.
    pub no_op: bool,
    /// Source-relative paths that would get fingerprinted names.
    pub fingerprint: Vec<String>,
    /// Source-relative paths that would be copied unchanged.
    pub copy: Vec<String>,
    /// Source-relative paths the rewrite pass would scan for references.
    pub scan: Vec<String>,
    /// Entries traversal could not read.
    pub skipped: Vec<Skip>,
}

/// Dry run for the `check` command: walk and classify without reading file
/// contents or writing anything.
pub fn plan(config: &Config) -> Result<Plan, MaterializeError> {
    let mut plan = Plan {
        no_op: !config.is_complete(),
        fingerprint: Vec::new(),
        copy: Vec::new(),
        scan: Vec::new(),
        skipped: Vec::new(),
    };
    if plan.no_op {
        return Ok(plan);
    }

    for sub in &config.paths {
        let root = config.base_dir.join(sub);
        for visit in walk::walk_tree(&root)? {
            match visit {
                Visit::Skipped(skip) => plan.skipped.push(skip),
                Visit::File(path) => {
                    let rel = path
                        .strip_prefix(&config.base_dir)
                        .map_err(|_| MaterializeError::OutsideBaseDir(path.clone()))?;
                    let rel = materialize::rel_slash(rel);

                    let dotted = path
                        .extension()
                        .and_then(|e| e.to_str())
                        .map(|e| format!(".{e}"));
                    if dotted.is_some_and(|d| config.exts.contains(&d)) {
                        plan.fingerprint.push(rel.clone());
                    } else {
                        plan.copy.push(rel.clone());
                    }
                    if FileCategory::classify(&path).is_some() {
                        plan.scan.push(rel);
                    }
                }
            }
        }
    }

    Ok(plan)
}
