//! The comment translation engine.
//!
//! Turns a generic markup tree into a [`TranslatedAst`]: optional brief,
//! ordered typed sections, validated entity metadata. Stages, in order:
//! forbidden-construct guard, command-line splitting, then a single fold of
//! the block sequence through the section segmenter (which drives the
//! command scanner, the list-item builder, the metadata processor and the
//! link classifier).

mod content;
mod guard;
mod items;
mod metadata;
mod scanner;
mod segmenter;
mod splitter;

pub mod links;

pub use scanner::{COMMAND_SIGIL, Command, scan};

use crate::error::TranslationError;
use crate::markup::{Block, parse_markup};
use crate::model::TranslatedAst;
use crate::vocabulary::CommandVocabulary;

use segmenter::Segmenter;

/// Translates one comment's markup tree.
///
/// Pure and synchronous: reads only the given tree, allocates only the
/// result. Any error aborts the whole comment; no partial AST escapes.
pub fn translate(
    blocks: &[Block],
    vocabulary: &CommandVocabulary,
) -> Result<TranslatedAst, TranslationError> {
    guard::check(blocks)?;

    let is_command = |name: &str| {
        name == "brief"
            || name == "details"
            || metadata::is_metadata_command(name)
            || vocabulary.kind_of(name).is_some()
    };
    // Metadata arguments end at the line break; section command content runs
    // to the end of its block.
    let blocks =
        splitter::split_command_lines(blocks, &is_command, &metadata::is_metadata_command);

    let mut segmenter = Segmenter::new(vocabulary);
    for (index, block) in blocks.iter().enumerate() {
        segmenter.push(index, block)?;
    }
    Ok(segmenter.finish())
}

/// Convenience entry point: parse markup, then translate.
pub fn translate_comment(
    text: &str,
    vocabulary: &CommandVocabulary,
) -> Result<TranslatedAst, TranslationError> {
    translate(&parse_markup(text), vocabulary)
}
