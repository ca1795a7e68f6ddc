//! Command-line splitting.
//!
//! Authors stack commands on adjacent lines without blank lines between
//! them:
//!
//! ```text
//! \returns 0 - Value 0.
//! \returns 1 - Value 1.
//! ```
//!
//! The markup parser sees one paragraph there. Before segmentation, each
//! top-level paragraph is split at interior lines that begin with a
//! *recognized* command token, so every command gets its own block and
//! continuation lines stay attached to the command above them. Lines
//! starting with an unrecognized `\name` do not split; they remain literal
//! text.
//!
//! Metadata commands are line-scoped: their arguments end at the line break,
//! so a split also happens *after* a metadata command line and the following
//! lines become ordinary content again.

use crate::markup::{Block, Inline};

use super::scanner;

/// Splits top-level paragraphs at recognized command lines. `is_command`
/// decides recognition (built-ins plus the caller's vocabulary);
/// `is_line_scoped` marks the commands whose arguments end at the line break.
pub fn split_command_lines<F, G>(blocks: &[Block], is_command: &F, is_line_scoped: &G) -> Vec<Block>
where
    F: Fn(&str) -> bool,
    G: Fn(&str) -> bool,
{
    let mut out = Vec::with_capacity(blocks.len());
    for block in blocks {
        match block {
            Block::Paragraph(inlines) => {
                out.extend(split_paragraph(inlines, is_command, is_line_scoped));
            }
            other => out.push(other.clone()),
        }
    }
    out
}

fn split_paragraph<F, G>(inlines: &[Inline], is_command: &F, is_line_scoped: &G) -> Vec<Block>
where
    F: Fn(&str) -> bool,
    G: Fn(&str) -> bool,
{
    let mut paragraphs = Vec::new();
    let mut current: Vec<Inline> = Vec::new();
    let mut line_scoped = line_scoped_command(inlines.first(), is_command, is_line_scoped);

    let mut iter = inlines.iter().peekable();
    while let Some(node) = iter.next() {
        let is_break = matches!(node, Inline::SoftBreak | Inline::HardBreak);
        if is_break {
            let next = iter.peek().copied();
            if starts_recognized_command(next, is_command) || line_scoped {
                // Drop the break; the next line starts a paragraph of its
                // own, either because it is a command or because the
                // line-scoped command above it just ended.
                if !current.is_empty() {
                    paragraphs.push(Block::Paragraph(std::mem::take(&mut current)));
                }
                line_scoped = line_scoped_command(next, is_command, is_line_scoped);
                continue;
            }
        }
        current.push(node.clone());
    }
    if !current.is_empty() {
        paragraphs.push(Block::Paragraph(current));
    }

    // An all-break paragraph (degenerate input) must still survive as one
    // block so indices stay meaningful.
    if paragraphs.is_empty() {
        paragraphs.push(Block::Paragraph(inlines.to_vec()));
    }
    paragraphs
}

fn starts_recognized_command<F>(node: Option<&Inline>, is_command: &F) -> bool
where
    F: Fn(&str) -> bool,
{
    match node {
        Some(Inline::Text(text)) => scanner::command_name(text).is_some_and(is_command),
        _ => false,
    }
}

fn line_scoped_command<F, G>(node: Option<&Inline>, is_command: &F, is_line_scoped: &G) -> bool
where
    F: Fn(&str) -> bool,
    G: Fn(&str) -> bool,
{
    match node {
        Some(Inline::Text(text)) => scanner::command_name(text)
            .is_some_and(|name| is_command(name) && is_line_scoped(name)),
        _ => false,
    }
}
