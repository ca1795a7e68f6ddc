//! Command scanner.
//!
//! Decides whether a top-level block begins with a command token. Only the
//! name is extracted here; whether that name means anything is the
//! segmenter's business, so unrecognized names can still fall back to
//! literal text.

use crate::markup::{Block, Inline};

pub const COMMAND_SIGIL: char = '\\';

/// A command block as found by the scanner: the name after the sigil and the
/// remaining inline content of the block, not re-parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub name: String,
    pub remainder: Vec<Inline>,
}

/// Scans one top-level block for a leading command token.
///
/// A block is a command only if it is a paragraph whose very first character
/// is the sigil; a sigil anywhere else is literal text. Commands inside block
/// quotes, lists or headings never reach this function as paragraphs of their
/// own, so they stay literal too.
pub fn scan(block: &Block) -> Option<Command> {
    let Block::Paragraph(inlines) = block else {
        return None;
    };
    let Some(Inline::Text(first)) = inlines.first() else {
        return None;
    };
    let name = command_name(first)?.to_string();

    let mut remainder = Vec::with_capacity(inlines.len());
    let tail = first[COMMAND_SIGIL.len_utf8() + name.len()..].trim_start();
    if !tail.is_empty() {
        remainder.push(Inline::Text(tail.to_string()));
    }
    remainder.extend(inlines[1..].iter().cloned());

    // A command alone on its first line leaves a dangling break in front of
    // the real content.
    while matches!(
        remainder.first(),
        Some(Inline::SoftBreak) | Some(Inline::HardBreak)
    ) {
        remainder.remove(0);
    }

    Some(Command { name, remainder })
}

/// The command name at the very start of `text`: the maximal identifier run
/// after the sigil, or `None` if `text` does not begin with one.
pub(crate) fn command_name(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(COMMAND_SIGIL)?;
    let name_len = rest
        .char_indices()
        .find(|(_, c)| !is_identifier_char(*c))
        .map_or(rest.len(), |(i, _)| i);
    (name_len > 0).then(|| &rest[..name_len])
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
