//! List structure reconstruction.
//!
//! Rebuilds nested list trees from the flat paragraph stream. Maximal
//! runs of list-classified paragraphs collapse into one list block each;
//! headings and plain paragraphs pass through in document order.

use crate::document::models::{Block, ListItem, RawParagraph};

use super::classify::{classify, ParagraphKind};

/// Converts an ordered paragraph sequence into blocks.
pub(crate) fn reconstruct(paragraphs: &[RawParagraph]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut run: Vec<(usize, String)> = Vec::new();

    for para in paragraphs {
        match classify(para) {
            Some(ParagraphKind::ListItem { depth, text }) => run.push((depth, text)),
            Some(ParagraphKind::Heading { level, text }) => {
                flush_run(&mut run, &mut blocks);
                blocks.push(Block::Heading { text, level });
            }
            Some(ParagraphKind::Plain { text }) => {
                flush_run(&mut run, &mut blocks);
                blocks.push(Block::Paragraph { text });
            }
            // Whitespace-only paragraphs neither emit a block nor end a run.
            None => {}
        }
    }
    flush_run(&mut run, &mut blocks);

    blocks
}

fn flush_run(run: &mut Vec<(usize, String)>, blocks: &mut Vec<Block>) {
    if run.is_empty() {
        return;
    }
    if let Some(list) = build_list(std::mem::take(run)) {
        blocks.push(list);
    }
}

/// Builds one list block from a run of (depth, cleaned text) items.
///
/// Depth tracking uses a stack of ancestor item lists. Moving deeper
/// pushes the current level and redirects insertion into the children of
/// its last item; moving shallower pops one level per depth step, and a
/// jump that skips more levels than the stack holds resumes at the top
/// level without synthesizing intermediates. Items whose cleaned text is
/// empty are dropped before any depth bookkeeping.
fn build_list(entries: Vec<(usize, String)>) -> Option<Block> {
    let mut items: Vec<ListItem> = Vec::new();
    let mut stack: Vec<Vec<ListItem>> = Vec::new();
    let mut current_depth = 0usize;

    for (depth, text) in entries {
        if text.is_empty() {
            continue;
        }

        if depth > current_depth {
            if !items.is_empty() {
                let inherited = items
                    .last_mut()
                    .and_then(|item| item.children.take())
                    .unwrap_or_default();
                stack.push(std::mem::take(&mut items));
                items = inherited;
            }
            current_depth = depth;
        } else if depth < current_depth {
            while !stack.is_empty() && depth < current_depth {
                attach_to_parent(&mut stack, &mut items);
                current_depth -= 1;
            }
        }

        items.push(ListItem::new(text));
    }

    while !stack.is_empty() {
        attach_to_parent(&mut stack, &mut items);
    }

    if items.is_empty() {
        return None;
    }
    Some(Block::List { items })
}

/// Pops one level: the accumulated items become the children of the
/// parent level's last item. The stack only ever holds non-empty levels,
/// so the parent always exists.
fn attach_to_parent(stack: &mut Vec<Vec<ListItem>>, items: &mut Vec<ListItem>) {
    if let Some(mut parent) = stack.pop() {
        if let Some(last) = parent.last_mut() {
            last.children = Some(std::mem::take(items));
        }
        *items = parent;
    }
}

/// Coalesces adjacent list blocks, preserving item order. Adjacency only
/// arises across gaps left by dropped elements, such as an all-empty
/// table between two list runs.
pub(crate) fn merge_adjacent_lists(blocks: Vec<Block>) -> Vec<Block> {
    let mut merged = Vec::new();
    let mut pending: Vec<ListItem> = Vec::new();

    for block in blocks {
        match block {
            Block::List { items } => pending.extend(items),
            other => {
                if !pending.is_empty() {
                    merged.push(Block::List {
                        items: std::mem::take(&mut pending),
                    });
                }
                merged.push(other);
            }
        }
    }
    if !pending.is_empty() {
        merged.push(Block::List { items: pending });
    }

    merged
}
