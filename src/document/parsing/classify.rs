//! Paragraph classification.
//!
//! Tags each paragraph as a heading, list item, or plain text. Headings
//! come from the paragraph style; list items come from explicit Word
//! numbering properties or from a recognized text marker, and have their
//! marker stripped from the stored text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::models::RawParagraph;

/// Classification result for one paragraph.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ParagraphKind {
    Heading { level: u8, text: String },
    ListItem { depth: usize, text: String },
    Plain { text: String },
}

/// Leading list markers in detection priority order: bullet glyphs and
/// dash/asterisk/plus bullets, decimal numbers, single letters, roman
/// numerals. Single-letter romans ("i.") are caught by the letter
/// pattern first, so exactly one marker is stripped either way.
static LIST_MARKER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^[•◦▪▫‣⁃\-\*\+]\s*").unwrap(),
        Regex::new(r"^\d+[.)]\s*").unwrap(),
        Regex::new(r"^[a-zA-Z][.)]\s*").unwrap(),
        Regex::new(r"(?i)^[ivxlcdm]+[.)]\s*").unwrap(),
    ]
});

/// Classifies a paragraph. Whitespace-only paragraphs yield `None` and
/// are dropped by the caller without disturbing surrounding list runs.
pub(crate) fn classify(para: &RawParagraph) -> Option<ParagraphKind> {
    let trimmed = para.text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(level) = heading_level(para.style.as_deref()) {
        return Some(ParagraphKind::Heading {
            level,
            text: trimmed.to_string(),
        });
    }

    if let Some(depth) = list_depth(para, trimmed) {
        return Some(ParagraphKind::ListItem {
            depth,
            text: strip_list_marker(trimmed),
        });
    }

    Some(ParagraphKind::Plain {
        text: trimmed.to_string(),
    })
}

/// Heading level from the paragraph style id. Accepts both the id form
/// ("Heading1") and the display form ("Heading 1"); an unparseable or
/// zero suffix falls back to level 1.
pub(crate) fn heading_level(style: Option<&str>) -> Option<u8> {
    let style = style?;
    let suffix = style
        .strip_prefix("Heading")
        .or_else(|| style.strip_prefix("heading"))?;
    Some(
        suffix
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|level| *level >= 1)
            .unwrap_or(1),
    )
}

/// List detection: explicit numbering properties win; otherwise the
/// trimmed text must begin with a recognized marker and the depth is
/// estimated from leading whitespace, four columns per level.
fn list_depth(para: &RawParagraph, trimmed: &str) -> Option<usize> {
    if let Some(level) = para.numbering {
        return Some(level);
    }

    if !LIST_MARKER_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(trimmed))
    {
        return None;
    }

    let leading = para
        .text
        .chars()
        .take_while(|c| c.is_whitespace())
        .count();
    Some(leading / 4)
}

/// Removes the leading list marker from already-trimmed item text. At
/// most one marker is stripped; the first matching pattern wins.
pub(crate) fn strip_list_marker(text: &str) -> String {
    for pattern in LIST_MARKER_PATTERNS.iter() {
        if pattern.is_match(text) {
            return pattern.replace(text, "").trim().to_string();
        }
    }
    text.trim().to_string()
}
