//! Reference scanning for text assets.
//!
//! The rewrite pass does not parse CSS or HTML — it scans for reference
//! patterns with regexes and treats whatever the capture group holds as a
//! path. Files are grouped into two categories, each with its own pattern:
//! stylesheets match `url(...)`, markup matches `src=...`. Everything else
//! is outside the scanner's vocabulary.
//!
//! Captures are returned raw: quoting and surrounding whitespace survive in
//! the capture and are the caller's problem, as are query strings and
//! fragments.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static STYLESHEET_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)url\s*\(\s*['"]*\s*([^)"']*)\s*['"]*\s*\)"#).unwrap()
});

static MARKUP_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)src\s*=\s*['"]*\s*([^>"']*)\s*['"]*\s*"#).unwrap()
});

/// Which reference vocabulary a file speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    /// `.css`, `.less`, `.sass` — references appear as `url(...)`.
    Stylesheet,
    /// `.mustache`, `.html` — references appear as `src=...`.
    Markup,
}

impl FileCategory {
    /// Classify a file by extension. Case-sensitive: `.CSS` is not a
    /// stylesheet. Files outside both families return `None` and are
    /// no-ops for the rewrite pass.
    pub fn classify(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("css" | "less" | "sass") => Some(Self::Stylesheet),
            Some("mustache" | "html") => Some(Self::Markup),
            _ => None,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Stylesheet => &STYLESHEET_REF,
            Self::Markup => &MARKUP_REF,
        }
    }
}

/// All captured reference strings in `text`, in match order. Non-overlapping
/// global scan; duplicates are preserved.
pub fn find_references(category: FileCategory, text: &str) -> Vec<&str> {
    category
        .pattern()
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str())
        .collect()
}
