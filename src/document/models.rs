//! Core data structures for converted document content.
//!
//! This module defines the block sequence a conversion produces and the
//! intermediate paragraph record the classifier consumes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One table data row, keyed by header text in column order.
pub type TableRow = IndexMap<String, CellValue>;

/// One semantic unit of converted content. The serialized form carries a
/// `type` tag followed by the variant fields in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Heading {
        text: String,
        level: u8,
    },
    Paragraph {
        text: String,
    },
    List {
        items: Vec<ListItem>,
    },
    Table {
        rows: Vec<TableRow>,
    },
    Image {
        name: String,
        description: String,
    },
}

/// A single list entry; `children` is omitted when the item has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ListItem>>,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: None,
        }
    }
}

/// Table cell content: a plain string for simple cells, a nested block
/// sequence when the cell holds several paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Blocks(Vec<Block>),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Text(text) => text.is_empty(),
            CellValue::Blocks(blocks) => blocks.is_empty(),
        }
    }
}

/// Classifier input: the paragraph state extracted from the document,
/// detached from the docx-rs object graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawParagraph {
    /// Paragraph text with original leading whitespace intact.
    pub text: String,
    /// Paragraph style id, e.g. "Heading1".
    pub style: Option<String>,
    /// Explicit list nesting level; `Some(0)` when the paragraph carries
    /// numbering properties without an indent level.
    pub numbering: Option<usize>,
}

impl RawParagraph {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn styled(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Some(style.into()),
            numbering: None,
        }
    }

    pub fn numbered(text: impl Into<String>, level: usize) -> Self {
        Self {
            text: text.into(),
            style: None,
            numbering: Some(level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_skipped_when_absent() {
        let yaml = serde_yaml::to_string(&ListItem::new("solo")).unwrap();
        assert!(yaml.contains("text: solo"));
        assert!(!yaml.contains("children"));
    }

    #[test]
    fn cell_value_emptiness() {
        assert!(CellValue::Text(String::new()).is_empty());
        assert!(CellValue::Blocks(Vec::new()).is_empty());
        assert!(!CellValue::Text("x".to_string()).is_empty());
        assert!(!CellValue::Blocks(vec![Block::Paragraph { text: "x".to_string() }]).is_empty());
    }

    #[test]
    fn block_type_tags() {
        let yaml = serde_yaml::to_string(&Block::Heading {
            text: "Overview".to_string(),
            level: 2,
        })
        .unwrap();
        assert!(yaml.starts_with("type: heading"));
    }
}
