//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` and a
//! `print_*` wrapper that writes to stdout. Format functions are pure — no
//! I/O, no side effects — so tests can assert on exact lines.
//!
//! Display is information-first: the primary line for every file is its
//! source-relative identity, with the outcome (`→ new name`, replacement
//! count, skip reason) as the detail.

use crate::map::RenameMap;
use crate::pipeline::{Plan, RunSummary};
use crate::walk::Skip;

/// Indentation: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn skip_lines(skipped: &[Skip], lines: &mut Vec<String>) {
    if skipped.is_empty() {
        return;
    }
    lines.push("Skipped".to_string());
    for skip in skipped {
        let path = skip
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        lines.push(format!("{}{} ({})", indent(1), path, skip.reason));
    }
}

// ============================================================================
// build
// ============================================================================

pub fn format_build_output(summary: &RunSummary) -> Vec<String> {
    if summary.no_op {
        return vec!["Nothing to do: base_dir and paths are not configured".to_string()];
    }

    let mut lines = Vec::new();

    let fingerprinted: Vec<_> = summary.written.iter().filter(|f| f.fingerprinted).collect();
    if !fingerprinted.is_empty() {
        lines.push("Fingerprinted".to_string());
        for file in &fingerprinted {
            lines.push(format!(
                "{}{} → {}",
                indent(1),
                file.source_rel,
                file.output_rel
            ));
        }
    }

    let copied: Vec<_> = summary.written.iter().filter(|f| !f.fingerprinted).collect();
    if !copied.is_empty() {
        lines.push("Copied".to_string());
        for file in &copied {
            lines.push(format!("{}{}", indent(1), file.source_rel));
        }
    }

    if !summary.rewritten.is_empty() {
        lines.push("Rewritten".to_string());
        for file in &summary.rewritten {
            let plural = if file.replacements == 1 { "" } else { "s" };
            lines.push(format!(
                "{}{} ({} reference{})",
                indent(1),
                file.source_rel,
                file.replacements,
                plural
            ));
        }
    }

    skip_lines(&summary.skipped, &mut lines);

    lines.push(String::new());
    lines.push(format!(
        "{} written ({} fingerprinted), {} rewritten, {} mapped",
        summary.written.len(),
        fingerprinted.len(),
        summary.rewritten.len(),
        summary.map.len()
    ));
    lines
}

pub fn print_build_output(summary: &RunSummary) {
    for line in format_build_output(summary) {
        println!("{line}");
    }
}

// ============================================================================
// check
// ============================================================================

pub fn format_check_output(plan: &Plan) -> Vec<String> {
    if plan.no_op {
        return vec!["Nothing to do: base_dir and paths are not configured".to_string()];
    }

    let mut lines = Vec::new();

    if !plan.fingerprint.is_empty() {
        lines.push("Would fingerprint".to_string());
        for rel in &plan.fingerprint {
            lines.push(format!("{}{}", indent(1), rel));
        }
    }
    if !plan.copy.is_empty() {
        lines.push("Would copy".to_string());
        for rel in &plan.copy {
            lines.push(format!("{}{}", indent(1), rel));
        }
    }
    if !plan.scan.is_empty() {
        lines.push("Would scan for references".to_string());
        for rel in &plan.scan {
            lines.push(format!("{}{}", indent(1), rel));
        }
    }
    skip_lines(&plan.skipped, &mut lines);

    lines.push(String::new());
    lines.push(format!(
        "{} to fingerprint, {} to copy, {} to scan",
        plan.fingerprint.len(),
        plan.copy.len(),
        plan.scan.len()
    ));
    lines
}

pub fn print_check_output(plan: &Plan) {
    for line in format_check_output(plan) {
        println!("{line}");
    }
}

// ============================================================================
// rename map
// ============================================================================

pub fn format_map_text(map: &RenameMap) -> Vec<String> {
    if map.is_empty() {
        return Vec::new();
    }
    let mut lines = vec!["Map".to_string()];
    for (source, public) in map.entries() {
        lines.push(format!("{}{} → {}", indent(1), source, public));
    }
    lines
}

pub fn print_map_text(map: &RenameMap) {
    for line in format_map_text(map) {
        println!("{line}");
    }
}

pub fn format_map_json(map: &RenameMap) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(map.entries())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materialize::WrittenFile;
    use crate::rewrite::RewrittenFile;

    fn sample_summary() -> RunSummary {
        let mut map = RenameMap::new("");
        map.record("a/app.js", "a/app_9001509.js");
        RunSummary {
            no_op: false,
            map,
            written: vec![
                WrittenFile {
                    source_rel: "a/app.js".into(),
                    output_rel: "a/app_9001509.js".into(),
                    fingerprinted: true,
                },
                WrittenFile {
                    source_rel: "a/site.css".into(),
                    output_rel: "a/site.css".into(),
                    fingerprinted: false,
                },
            ],
            rewritten: vec![RewrittenFile {
                source_rel: "a/site.css".into(),
                replacements: 2,
            }],
            skipped: vec![],
        }
    }

    #[test]
    fn build_output_sections() {
        let lines = format_build_output(&sample_summary());
        assert_eq!(
            lines,
            vec![
                "Fingerprinted".to_string(),
                "    a/app.js → a/app_9001509.js".to_string(),
                "Copied".to_string(),
                "    a/site.css".to_string(),
                "Rewritten".to_string(),
                "    a/site.css (2 references)".to_string(),
                String::new(),
                "2 written (1 fingerprinted), 1 rewritten, 1 mapped".to_string(),
            ]
        );
    }

    #[test]
    fn no_op_summary_prints_one_line() {
        let summary = RunSummary {
            no_op: true,
            map: RenameMap::default(),
            written: vec![],
            rewritten: vec![],
            skipped: vec![],
        };
        let lines = format_build_output(&summary);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Nothing to do"));
    }

    #[test]
    fn singular_reference_count() {
        let mut summary = sample_summary();
        summary.rewritten[0].replacements = 1;
        let lines = format_build_output(&summary);
        assert!(lines.contains(&"    a/site.css (1 reference)".to_string()));
    }

    #[test]
    fn skips_are_reported_with_reason() {
        let mut summary = sample_summary();
        summary.skipped.push(Skip {
            path: Some("a/locked".into()),
            reason: "permission denied".into(),
        });
        let lines = format_build_output(&summary);
        assert!(lines.contains(&"Skipped".to_string()));
        assert!(lines.contains(&"    a/locked (permission denied)".to_string()));
    }

    #[test]
    fn map_text_lists_entries_in_order() {
        let mut map = RenameMap::new("");
        map.record("b/two.js", "b/two_2222222.js");
        map.record("a/one.js", "a/one_1111111.js");
        assert_eq!(
            format_map_text(&map),
            vec![
                "Map".to_string(),
                "    a/one.js → one_1111111.js".to_string(),
                "    b/two.js → two_2222222.js".to_string(),
            ]
        );
    }

    #[test]
    fn map_json_round_trips() {
        let mut map = RenameMap::new("");
        map.record("a/app.js", "a/app_9001509.js");
        let json = format_map_json(&map).unwrap();
        let parsed: std::collections::BTreeMap<String, String> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.get("a/app.js").map(String::as_str), Some("app_9001509.js"));
    }

    #[test]
    fn empty_map_formats_to_nothing() {
        assert!(format_map_text(&RenameMap::default()).is_empty());
    }
}
