//! Markup-to-section-content conversion.
//!
//! Re-wraps generic markup nodes into the translated content types, running
//! every link through the classifier on the way. The guard has already
//! rejected forbidden nodes; hitting one here still errors rather than
//! panicking.

use crate::error::{ForbiddenKind, TranslationError};
use crate::markup::{Block, Inline};
use crate::model::{ContentBlock, InlineNode};

use super::links;

pub fn convert_block(block: &Block, top: usize) -> Result<ContentBlock, TranslationError> {
    Ok(match block {
        Block::Paragraph(inlines) => ContentBlock::Paragraph(convert_inlines(inlines, top)?),
        Block::List { ordered, items } => {
            let mut converted = Vec::with_capacity(items.len());
            for item in items {
                converted.push(convert_blocks(item, top)?);
            }
            if *ordered {
                ContentBlock::OrderedList(converted)
            } else {
                ContentBlock::UnorderedList(converted)
            }
        }
        Block::BlockQuote(children) => ContentBlock::BlockQuote(convert_blocks(children, top)?),
        Block::CodeBlock { language, text } => ContentBlock::CodeBlock {
            language: language.clone(),
            text: text.clone(),
        },
        Block::Heading { level, content } => ContentBlock::Heading {
            level: *level,
            content: convert_inlines(content, top)?,
        },
        Block::ThematicBreak => ContentBlock::ThematicBreak,
        Block::HtmlBlock(_) => {
            return Err(TranslationError::ForbiddenConstruct {
                kind: ForbiddenKind::RawMarkup,
                block: top,
            });
        }
    })
}

pub fn convert_blocks(blocks: &[Block], top: usize) -> Result<Vec<ContentBlock>, TranslationError> {
    blocks.iter().map(|b| convert_block(b, top)).collect()
}

pub fn convert_inlines(
    inlines: &[Inline],
    top: usize,
) -> Result<Vec<InlineNode>, TranslationError> {
    inlines.iter().map(|i| convert_inline(i, top)).collect()
}

fn convert_inline(inline: &Inline, top: usize) -> Result<InlineNode, TranslationError> {
    Ok(match inline {
        Inline::Text(text) => InlineNode::Text(text.clone()),
        Inline::Code(text) => InlineNode::Code(text.clone()),
        Inline::Emphasis(children) => InlineNode::Emphasis(convert_inlines(children, top)?),
        Inline::Strong(children) => InlineNode::Strong(convert_inlines(children, top)?),
        Inline::SoftBreak => InlineNode::SoftBreak,
        Inline::HardBreak => InlineNode::HardBreak,
        Inline::Link {
            destination,
            title,
            content,
        } => InlineNode::Link(links::classify(
            destination,
            title,
            convert_inlines(content, top)?,
        )),
        Inline::Html(_) => {
            return Err(TranslationError::ForbiddenConstruct {
                kind: ForbiddenKind::RawMarkup,
                block: top,
            });
        }
        Inline::Image { .. } => {
            return Err(TranslationError::ForbiddenConstruct {
                kind: ForbiddenKind::Image,
                block: top,
            });
        }
    })
}
