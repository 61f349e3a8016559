//! Document loading and conversion orchestration.
//!
//! This module contains the main `load_document()` function that walks
//! the document body in order, coordinating the specialized parsing
//! modules to turn a .docx file into the final block sequence.

use std::path::Path;

use log::{debug, info, warn};

use crate::error::Result;
use crate::vision::DescribeImage;

use super::images::extract_image_parts;
use super::io::validate_docx_file;
use super::models::{Block, RawParagraph};
use super::parsing::list::{merge_adjacent_lists, reconstruct};
use super::parsing::table::convert_table;
use super::parsing::text::raw_paragraph;

/// Converts a .docx file into an ordered block sequence.
///
/// Paragraphs accumulate until a table (or the end of the body) forces
/// them through list reconstruction, so tables stay in document order.
/// Adjacent list blocks are merged afterwards. When a describer is
/// supplied, every embedded image is described and appended after the
/// body content.
pub fn load_document(
    file_path: &Path,
    describer: Option<&dyn DescribeImage>,
) -> Result<Vec<Block>> {
    validate_docx_file(file_path)?;

    info!("converting {}", file_path.display());

    let file_data = std::fs::read(file_path)?;
    let docx = docx_rs::read_docx(&file_data)?;

    let mut blocks = Vec::new();
    let mut pending: Vec<RawParagraph> = Vec::new();

    for child in &docx.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => {
                pending.push(raw_paragraph(para));
            }
            docx_rs::DocumentChild::Table(table) => {
                blocks.extend(reconstruct(&pending));
                pending.clear();
                if let Some(block) = convert_table(table) {
                    blocks.push(block);
                }
            }
            // Section properties, bookmarks, and comment anchors carry
            // no convertible content.
            _ => {}
        }
    }
    blocks.extend(reconstruct(&pending));

    let mut blocks = merge_adjacent_lists(blocks);

    if let Some(describer) = describer {
        blocks.extend(describe_images(&file_data, describer));
    }

    debug!("produced {} blocks", blocks.len());
    Ok(blocks)
}

/// Describes every embedded image. A failed description becomes a
/// placeholder block and a failed extraction yields no image blocks at
/// all; neither aborts the conversion.
fn describe_images(file_data: &[u8], describer: &dyn DescribeImage) -> Vec<Block> {
    let parts = match extract_image_parts(file_data) {
        Ok(parts) => parts,
        Err(e) => {
            warn!("error processing images: {e}");
            return Vec::new();
        }
    };

    parts
        .into_iter()
        .map(|(name, bytes)| {
            debug!("describing image {name} ({} bytes)", bytes.len());
            let description = match describer.describe(&bytes) {
                Ok(description) => description,
                Err(e) => {
                    log::error!("failed to describe {name}: {e}");
                    format!("Error generating image description: {e}")
                }
            };
            Block::Image { name, description }
        })
        .collect()
}
