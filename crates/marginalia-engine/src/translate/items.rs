//! List-item builder.
//!
//! Parses the remainder of a repeatable key/value command into an optional
//! term and a description. The separator is the first hyphen found in a
//! top-level text node, surrounding spaces trimmed; hyphens inside code
//! spans or nested emphasis never separate.

use crate::error::TranslationError;
use crate::markup::Inline;
use crate::model::{ContentBlock, ListItem};

use super::content;

pub const SEPARATOR: char = '-';

pub fn parse_item(remainder: &[Inline], top: usize) -> Result<ListItem, TranslationError> {
    let Some((node_index, byte_index)) = find_separator(remainder) else {
        return Ok(ListItem {
            term: None,
            description: description_from(content::convert_inlines(remainder, top)?),
        });
    };

    let mut before: Vec<Inline> = remainder[..node_index].to_vec();
    let mut after: Vec<Inline> = Vec::new();
    if let Inline::Text(text) = &remainder[node_index] {
        let head = text[..byte_index].trim_end();
        if !head.is_empty() {
            before.push(Inline::Text(head.to_string()));
        }
        let tail = text[byte_index + SEPARATOR.len_utf8()..].trim_start();
        if !tail.is_empty() {
            after.push(Inline::Text(tail.to_string()));
        }
    }
    after.extend(remainder[node_index + 1..].iter().cloned());

    let term = if before.is_empty() {
        None
    } else {
        Some(content::convert_inlines(&before, top)?)
    };

    Ok(ListItem {
        term,
        description: description_from(content::convert_inlines(&after, top)?),
    })
}

fn find_separator(remainder: &[Inline]) -> Option<(usize, usize)> {
    for (node_index, node) in remainder.iter().enumerate() {
        if let Inline::Text(text) = node
            && let Some(byte_index) = text.find(SEPARATOR)
        {
            return Some((node_index, byte_index));
        }
    }
    None
}

fn description_from(inlines: Vec<crate::model::InlineNode>) -> Vec<ContentBlock> {
    if inlines.is_empty() {
        vec![]
    } else {
        vec![ContentBlock::Paragraph(inlines)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InlineNode, Link, Resolution};

    fn text(s: &str) -> Inline {
        Inline::Text(s.into())
    }

    fn paragraph(s: &str) -> Vec<ContentBlock> {
        vec![ContentBlock::Paragraph(vec![InlineNode::Text(s.into())])]
    }

    #[test]
    fn no_separator_means_no_term() {
        let item = parse_item(&[text("Default returns.")], 0).unwrap();
        assert_eq!(item.term, None);
        assert_eq!(item.description, paragraph("Default returns."));
    }

    #[test]
    fn spaced_separator_splits_term_and_description() {
        let item = parse_item(&[text("0 - Value 0.")], 0).unwrap();
        assert_eq!(item.term, Some(vec![InlineNode::Text("0".into())]));
        assert_eq!(item.description, paragraph("Value 0."));
    }

    #[test]
    fn bare_separator_splits_too() {
        let item = parse_item(&[text("1-Value 1.")], 0).unwrap();
        assert_eq!(item.term, Some(vec![InlineNode::Text("1".into())]));
        assert_eq!(item.description, paragraph("Value 1."));
    }

    #[test]
    fn continuation_lines_stay_in_the_description() {
        let item = parse_item(
            &[
                text("1-Value 1."),
                Inline::SoftBreak,
                text("It requires extra long description."),
            ],
            0,
        )
        .unwrap();
        assert_eq!(
            item.description,
            vec![ContentBlock::Paragraph(vec![
                InlineNode::Text("Value 1.".into()),
                InlineNode::SoftBreak,
                InlineNode::Text("It requires extra long description.".into()),
            ])]
        );
    }

    #[test]
    fn link_term_with_empty_description() {
        // \see [bar]-
        let remainder = [
            Inline::Link {
                destination: String::new(),
                title: String::new(),
                content: vec![text("bar")],
            },
            text("-"),
        ];
        let item = parse_item(&remainder, 0).unwrap();
        assert_eq!(
            item.term,
            Some(vec![InlineNode::Link(Link::Internal {
                title: None,
                content: vec![InlineNode::Text("bar".into())],
                resolution: Resolution::Unresolved("bar".into()),
            })])
        );
        assert_eq!(item.description, vec![]);
    }

    #[test]
    fn separator_with_nothing_before_means_no_term() {
        let item = parse_item(&[text("- only description")], 0).unwrap();
        assert_eq!(item.term, None);
        assert_eq!(item.description, paragraph("only description"));
    }

    #[test]
    fn hyphen_inside_code_span_does_not_separate() {
        let item = parse_item(&[Inline::Code("a-b".into()), text(" stays whole")], 0).unwrap();
        assert_eq!(item.term, None);
        assert_eq!(
            item.description,
            vec![ContentBlock::Paragraph(vec![
                InlineNode::Code("a-b".into()),
                InlineNode::Text(" stays whole".into()),
            ])]
        );
    }
}
