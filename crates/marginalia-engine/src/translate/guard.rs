//! Forbidden-construct guard.
//!
//! Documentation comments may not contain raw embedded markup or images.
//! This runs before anything else so a bad comment fails whole, with the
//! index of the offending top-level block, instead of mis-rendering.

use crate::error::{ForbiddenKind, TranslationError};
use crate::markup::{Block, Inline};

/// Walks the whole tree once and fails on the first forbidden node.
pub fn check(blocks: &[Block]) -> Result<(), TranslationError> {
    for (index, block) in blocks.iter().enumerate() {
        check_block(block, index)?;
    }
    Ok(())
}

fn check_block(block: &Block, top: usize) -> Result<(), TranslationError> {
    match block {
        Block::HtmlBlock(_) => Err(forbidden(ForbiddenKind::RawMarkup, top)),
        Block::Paragraph(inlines) | Block::Heading { content: inlines, .. } => {
            check_inlines(inlines, top)
        }
        Block::List { items, .. } => {
            for item in items {
                for child in item {
                    check_block(child, top)?;
                }
            }
            Ok(())
        }
        Block::BlockQuote(children) => {
            for child in children {
                check_block(child, top)?;
            }
            Ok(())
        }
        Block::CodeBlock { .. } | Block::ThematicBreak => Ok(()),
    }
}

fn check_inlines(inlines: &[Inline], top: usize) -> Result<(), TranslationError> {
    for inline in inlines {
        match inline {
            Inline::Html(_) => return Err(forbidden(ForbiddenKind::RawMarkup, top)),
            Inline::Image { .. } => return Err(forbidden(ForbiddenKind::Image, top)),
            Inline::Emphasis(children)
            | Inline::Strong(children)
            | Inline::Link {
                content: children, ..
            } => check_inlines(children, top)?,
            Inline::Text(_) | Inline::Code(_) | Inline::SoftBreak | Inline::HardBreak => {}
        }
    }
    Ok(())
}

fn forbidden(kind: ForbiddenKind, block: usize) -> TranslationError {
    TranslationError::ForbiddenConstruct { kind, block }
}
