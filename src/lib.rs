//! plainify: convert .docx documents into structured YAML.
//!
//! This library parses Microsoft Word documents and produces an ordered
//! sequence of semantic blocks (headings, paragraphs, nested lists,
//! tables, images) suitable for downstream AI consumption, serialized
//! as YAML. Image descriptions are optional and supplied by an injected
//! [`vision::DescribeImage`] implementation.

use std::path::Path;

pub mod document;
pub mod error;
pub mod export;
pub mod vision;

// Re-export commonly used types
pub use document::{load_document, Block, CellValue, ListItem, RawParagraph, TableRow};
pub use error::{ConvertError, Result};

/// Converts a .docx file and writes the YAML output in one step.
pub fn convert_file(
    input: &Path,
    output: &Path,
    describer: Option<&dyn vision::DescribeImage>,
) -> Result<()> {
    let blocks = load_document(input, describer)?;
    export::write_yaml(&blocks, output)
}
