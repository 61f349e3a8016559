//! Text extraction from docx-rs paragraphs and runs.

use crate::document::models::RawParagraph;

/// Builds the classifier input for a body or cell paragraph. Text keeps
/// its leading whitespace so indentation-based list depth still works.
pub(crate) fn raw_paragraph(para: &docx_rs::Paragraph) -> RawParagraph {
    RawParagraph {
        text: paragraph_text(para),
        style: para.property.style.as_ref().map(|style| style.val.clone()),
        numbering: para
            .property
            .numbering_property
            .as_ref()
            .map(|num| num.level.as_ref().map(|level| level.val).unwrap_or(0)),
    }
}

pub(crate) fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                text.push_str(&run_text(run));
            }
            docx_rs::ParagraphChild::Insert(insert) => {
                for insert_child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = insert_child {
                        text.push_str(&run_text(run));
                    }
                }
            }
            docx_rs::ParagraphChild::Delete(_) => {
                // Skip deleted text in track changes
            }
            _ => {}
        }
    }
    text
}

fn run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();
    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(t) => text.push_str(&t.text),
            docx_rs::RunChild::Tab(_) => text.push('\t'),
            docx_rs::RunChild::Break(_) => text.push('\n'),
            // Inline drawings carry no text; images surface as package
            // parts through the describer instead.
            _ => {}
        }
    }
    text
}
