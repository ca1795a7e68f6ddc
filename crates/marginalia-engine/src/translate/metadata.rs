//! Metadata command processor.
//!
//! Singleton entity-level commands: validated independently, recorded once,
//! duplicate occurrences are hard errors. These never touch sectioning.

use crate::error::TranslationError;
use crate::markup::Inline;
use crate::model::{ExcludeMode, GroupSpec, Metadata};

/// The fixed set of metadata command names.
pub const METADATA_COMMANDS: &[&str] = &[
    "exclude",
    "unique_name",
    "synopsis",
    "group",
    "module",
    "output_section",
];

pub fn is_metadata_command(name: &str) -> bool {
    METADATA_COMMANDS.contains(&name)
}

/// Collects metadata commands for one comment.
#[derive(Debug, Default)]
pub struct MetadataBuilder {
    metadata: Metadata,
}

impl MetadataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> Metadata {
        self.metadata
    }

    /// Applies one occurrence of a metadata command. `block` is the index of
    /// the top-level block it came from, for error reporting.
    pub fn apply(
        &mut self,
        name: &str,
        remainder: &[Inline],
        block: usize,
    ) -> Result<(), TranslationError> {
        let words = words_of(remainder);
        match name {
            "exclude" => {
                let mode = match words.as_slice() {
                    [] => ExcludeMode::Entity,
                    ["target"] => ExcludeMode::Target,
                    ["return"] => ExcludeMode::ReturnType,
                    [other, ..] => {
                        return Err(invalid(
                            name,
                            format!("expected nothing, `target` or `return`, got `{other}`"),
                            block,
                        ));
                    }
                };
                set_once(&mut self.metadata.exclude, mode, name, block)
            }
            "unique_name" => {
                let word = one_word(name, &words, block)?;
                set_once(&mut self.metadata.unique_name, word, name, block)
            }
            "module" => {
                let word = one_word(name, &words, block)?;
                set_once(&mut self.metadata.module, word, name, block)
            }
            "synopsis" => {
                let text = free_text(name, &words, block)?;
                set_once(&mut self.metadata.synopsis, text, name, block)
            }
            "output_section" => {
                let text = free_text(name, &words, block)?;
                set_once(&mut self.metadata.output_section, text, name, block)
            }
            "group" => {
                let group = parse_group(&words, block)?;
                set_once(&mut self.metadata.group, group, name, block)
            }
            // The segmenter only delegates names from METADATA_COMMANDS.
            _ => Ok(()),
        }
    }
}

fn parse_group(words: &[&str], block: usize) -> Result<GroupSpec, TranslationError> {
    let Some(raw) = words.first() else {
        return Err(invalid("group", "a group needs a name".into(), block));
    };
    let (name, output_section) = match raw.strip_prefix('-') {
        Some(stripped) if !stripped.is_empty() => (stripped.to_string(), None),
        Some(_) => return Err(invalid("group", "a group needs a name".into(), block)),
        None => (raw.to_string(), Some(raw.to_string())),
    };
    let heading = (words.len() > 1).then(|| words[1..].join(" "));
    Ok(GroupSpec {
        name,
        heading,
        output_section,
    })
}

fn one_word(name: &str, words: &[&str], block: usize) -> Result<String, TranslationError> {
    match words {
        [word] => Ok((*word).to_string()),
        _ => Err(invalid(
            name,
            format!("expected exactly one word, got {}", words.len()),
            block,
        )),
    }
}

fn free_text(name: &str, words: &[&str], block: usize) -> Result<String, TranslationError> {
    if words.is_empty() {
        return Err(invalid(name, "expected at least one word".into(), block));
    }
    Ok(words.join(" "))
}

fn set_once<T>(
    slot: &mut Option<T>,
    value: T,
    name: &str,
    block: usize,
) -> Result<(), TranslationError> {
    if slot.is_some() {
        return Err(TranslationError::DuplicateCommand {
            command: name.to_string(),
            block,
        });
    }
    *slot = Some(value);
    Ok(())
}

fn invalid(name: &str, reason: String, block: usize) -> TranslationError {
    TranslationError::InvalidArguments {
        command: name.to_string(),
        reason,
        block,
    }
}

/// Flattens a remainder into whitespace-separated words. Only the textual
/// content matters for metadata arguments; breaks count as whitespace.
fn words_of(remainder: &[Inline]) -> Vec<&str> {
    let mut words = Vec::new();
    for node in remainder {
        match node {
            Inline::Text(text) | Inline::Code(text) => {
                words.extend(text.split_whitespace());
            }
            Inline::SoftBreak | Inline::HardBreak => {}
            Inline::Emphasis(children) | Inline::Strong(children) => {
                words.extend(words_of(children));
            }
            Inline::Link { content, .. } | Inline::Image { content, .. } => {
                words.extend(words_of(content));
            }
            Inline::Html(_) => {}
        }
    }
    words
}
