//! Section segmenter.
//!
//! A state machine folded over the top-level block sequence. One block at a
//! time it decides: does this start a command, and if so what does that do to
//! the currently open section? Sections never nest, so the state is exactly
//! the one open section plus the brief flag.
//!
//! Open/close rules:
//! - The first plain paragraph (no brief yet) is the implicit brief, exactly
//!   one paragraph.
//! - `\brief` opens an accumulating brief that runs until the next command.
//! - An inline section's content is its command block's remainder; the next
//!   plain block closes it and opens a fresh details section. Contiguous
//!   plain content merges, content separated by a section never does.
//! - A list section stays open across plain blocks: they extend the last
//!   item's description. Only a command (or the end of the comment) closes
//!   it.
//! - Metadata commands are invisible to sectioning.

use crate::error::TranslationError;
use crate::markup::{Block, Inline};
use crate::model::{ContentBlock, ListItem, Section, TranslatedAst};
use crate::vocabulary::{CommandVocabulary, SectionCommand};

use super::content;
use super::items;
use super::metadata::{self, MetadataBuilder};
use super::scanner;

/// The currently open section accumulator.
#[derive(Debug)]
enum OpenSection {
    None,
    /// `\brief` seen; plain blocks extend the brief until the next command.
    Brief,
    Details(Vec<ContentBlock>),
    Inline {
        name: String,
        content: Vec<ContentBlock>,
    },
    List {
        name: String,
        items: Vec<ListItem>,
    },
}

pub struct Segmenter<'v> {
    vocabulary: &'v CommandVocabulary,
    open: OpenSection,
    brief: Vec<ContentBlock>,
    brief_taken: bool,
    sections: Vec<Section>,
    metadata: MetadataBuilder,
}

impl<'v> Segmenter<'v> {
    pub fn new(vocabulary: &'v CommandVocabulary) -> Self {
        Self {
            vocabulary,
            open: OpenSection::None,
            brief: vec![],
            brief_taken: false,
            sections: vec![],
            metadata: MetadataBuilder::new(),
        }
    }

    /// Feeds the next top-level block, in document order.
    pub fn push(&mut self, index: usize, block: &Block) -> Result<(), TranslationError> {
        if let Some(command) = scanner::scan(block) {
            if metadata::is_metadata_command(&command.name) {
                return self.metadata.apply(&command.name, &command.remainder, index);
            }
            match command.name.as_str() {
                "brief" => return self.open_brief(command.remainder, index),
                "details" => {
                    self.flush();
                    self.open = OpenSection::Details(seed_content(&command.remainder, index)?);
                    return Ok(());
                }
                name => match self.vocabulary.kind_of(name) {
                    Some(SectionCommand::Inline) => {
                        self.flush();
                        self.open = OpenSection::Inline {
                            name: name.to_string(),
                            content: seed_content(&command.remainder, index)?,
                        };
                        return Ok(());
                    }
                    Some(SectionCommand::List) => {
                        let item = items::parse_item(&command.remainder, index)?;
                        match &mut self.open {
                            OpenSection::List { name: open, items } if open.as_str() == name => {
                                items.push(item);
                            }
                            _ => {
                                self.flush();
                                self.open = OpenSection::List {
                                    name: name.to_string(),
                                    items: vec![item],
                                };
                            }
                        }
                        return Ok(());
                    }
                    // Unrecognized name: the whole block, sigil included, is
                    // literal content.
                    None => {}
                },
            }
        }
        self.push_plain(index, block)
    }

    /// Final flush at end of comment.
    pub fn finish(mut self) -> TranslatedAst {
        self.flush();
        let brief = (!self.brief.is_empty()).then(|| Section::Brief {
            content: self.brief,
        });
        TranslatedAst {
            brief,
            sections: self.sections,
            metadata: self.metadata.finish(),
        }
    }

    fn push_plain(&mut self, index: usize, block: &Block) -> Result<(), TranslationError> {
        let converted = content::convert_block(block, index)?;
        match &mut self.open {
            OpenSection::None => {
                if !self.brief_taken && matches!(block, Block::Paragraph(_)) {
                    // The implicit brief: exactly this one paragraph, not
                    // open for accumulation.
                    self.brief.push(converted);
                    self.brief_taken = true;
                } else {
                    self.open = OpenSection::Details(vec![converted]);
                }
            }
            OpenSection::Brief => self.brief.push(converted),
            OpenSection::Details(blocks) => blocks.push(converted),
            // Plain content after an inline section is a new details
            // section; same-kind sections never merge across the gap.
            OpenSection::Inline { .. } => {
                self.flush();
                self.open = OpenSection::Details(vec![converted]);
            }
            OpenSection::List { items, .. } => {
                // Still open: the block extends the last item's description,
                // keeping its own paragraph boundary.
                if let Some(last) = items.last_mut() {
                    last.description.push(converted);
                }
            }
        }
        Ok(())
    }

    fn open_brief(
        &mut self,
        remainder: Vec<Inline>,
        index: usize,
    ) -> Result<(), TranslationError> {
        if self.brief_taken {
            return Err(TranslationError::DuplicateCommand {
                command: "brief".to_string(),
                block: index,
            });
        }
        self.flush();
        self.brief = seed_content(&remainder, index)?;
        self.brief_taken = true;
        self.open = OpenSection::Brief;
        Ok(())
    }

    /// Closes the open section into the emitted sequence. Sections that
    /// gathered no content are dropped.
    fn flush(&mut self) {
        match std::mem::replace(&mut self.open, OpenSection::None) {
            OpenSection::None | OpenSection::Brief => {}
            OpenSection::Details(content) => {
                if !content.is_empty() {
                    self.sections.push(Section::Details { content });
                }
            }
            OpenSection::Inline { name, content } => {
                if !content.is_empty() {
                    self.sections.push(Section::Inline { name, content });
                }
            }
            OpenSection::List { name, items } => {
                if !items.is_empty() {
                    self.sections.push(Section::List { name, items });
                }
            }
        }
    }
}

fn seed_content(
    remainder: &[Inline],
    index: usize,
) -> Result<Vec<ContentBlock>, TranslationError> {
    if remainder.is_empty() {
        return Ok(vec![]);
    }
    Ok(vec![ContentBlock::Paragraph(content::convert_inlines(
        remainder, index,
    )?)])
}
