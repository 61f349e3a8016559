//! Table extraction.
//!
//! Converts docx-rs tables into header-keyed row records. The first row
//! supplies the headers; data cells are keyed positionally.

use indexmap::IndexMap;

use crate::document::models::{Block, CellValue, RawParagraph};

use super::list::reconstruct;
use super::text::{paragraph_text, raw_paragraph};

/// Converts a table into a block. Returns `None` when the table has no
/// rows or its header row is entirely empty.
pub(crate) fn convert_table(table: &docx_rs::Table) -> Option<Block> {
    let mut rows_iter = table.rows.iter().map(|table_child| {
        let docx_rs::TableChild::TableRow(row) = table_child;
        row
    });

    let headers: Vec<String> = cells_of(rows_iter.next()?).map(cell_text).collect();
    if headers.iter().all(|header| header.is_empty()) {
        return None;
    }

    let mut rows = Vec::new();
    for row in rows_iter {
        let mut row_data = IndexMap::new();
        for (i, cell) in cells_of(row).enumerate() {
            // Cells beyond the header width have no key and are ignored.
            if i < headers.len() {
                row_data.insert(headers[i].clone(), convert_cell(cell));
            }
        }
        if row_data.values().any(|value| !value.is_empty()) {
            rows.push(row_data);
        }
    }

    Some(Block::Table { rows })
}

fn cells_of(row: &docx_rs::TableRow) -> impl Iterator<Item = &docx_rs::TableCell> {
    row.cells.iter().map(|row_child| {
        let docx_rs::TableRowChild::TableCell(cell) = row_child;
        cell
    })
}

fn cell_paragraphs(cell: &docx_rs::TableCell) -> impl Iterator<Item = &docx_rs::Paragraph> {
    cell.children.iter().filter_map(|content| match content {
        docx_rs::TableCellContent::Paragraph(para) => Some(para.as_ref()),
        _ => None,
    })
}

/// Joined text of every paragraph in the cell, trimmed.
fn cell_text(cell: &docx_rs::TableCell) -> String {
    let texts: Vec<String> = cell_paragraphs(cell).map(paragraph_text).collect();
    texts.join("\n").trim().to_string()
}

/// A cell with one effective paragraph stays a plain string; a cell
/// holding several becomes a block sequence, classified the same way as
/// body paragraphs, falling back to the joined text if nothing survives.
fn convert_cell(cell: &docx_rs::TableCell) -> CellValue {
    let effective: Vec<RawParagraph> = cell_paragraphs(cell)
        .map(raw_paragraph)
        .filter(|para| !para.text.trim().is_empty())
        .collect();

    match effective.as_slice() {
        [] => CellValue::Text(String::new()),
        [only] => CellValue::Text(only.text.trim().to_string()),
        _ => {
            let blocks = reconstruct(&effective);
            if blocks.is_empty() {
                CellValue::Text(cell_text(cell))
            } else {
                CellValue::Blocks(blocks)
            }
        }
    }
}
