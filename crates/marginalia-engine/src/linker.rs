//! Post-translation link resolution.
//!
//! Translation leaves every internal link as an unresolved name; mapping the
//! name to a concrete entity is the job of whatever symbol index the
//! consuming system has. This module keeps the two phases decoupled: the
//! resolver is a pure second pass over a finished AST, so no temporal
//! coupling with index construction can creep in.

use crate::model::{
    ContentBlock, EntityId, InlineNode, Link, ListItem, Resolution, Section, TranslatedAst,
};

/// Maps internal-link names to concrete entities.
pub trait Linker {
    /// Resolves `name` as seen from `context` (the entity owning the
    /// comment, if any). `None` means the linker knows no such target.
    fn resolve(&self, context: Option<&EntityId>, name: &str) -> Option<(EntityId, String)>;
}

/// An internal link the linker could not match. Reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkWarning {
    pub name: String,
}

/// Rewrites every resolvable internal link to [`Resolution::Resolved`] and
/// reports the rest as warnings.
pub fn resolve_links(
    mut ast: TranslatedAst,
    context: Option<&EntityId>,
    linker: &dyn Linker,
) -> (TranslatedAst, Vec<LinkWarning>) {
    let mut resolver = Resolver {
        context,
        linker,
        warnings: vec![],
    };
    if let Some(brief) = ast.brief.as_mut() {
        resolver.section(brief);
    }
    for section in &mut ast.sections {
        resolver.section(section);
    }
    (ast, resolver.warnings)
}

struct Resolver<'a> {
    context: Option<&'a EntityId>,
    linker: &'a dyn Linker,
    warnings: Vec<LinkWarning>,
}

impl Resolver<'_> {
    fn section(&mut self, section: &mut Section) {
        match section {
            Section::Brief { content }
            | Section::Details { content }
            | Section::Inline { content, .. } => self.blocks(content),
            Section::List { items, .. } => {
                for item in items {
                    self.item(item);
                }
            }
        }
    }

    fn item(&mut self, item: &mut ListItem) {
        if let Some(term) = item.term.as_mut() {
            self.inlines(term);
        }
        self.blocks(&mut item.description);
    }

    fn blocks(&mut self, blocks: &mut [ContentBlock]) {
        for block in blocks {
            match block {
                ContentBlock::Paragraph(inlines)
                | ContentBlock::Heading {
                    content: inlines, ..
                } => self.inlines(inlines),
                ContentBlock::UnorderedList(items) | ContentBlock::OrderedList(items) => {
                    for item in items {
                        self.blocks(item);
                    }
                }
                ContentBlock::BlockQuote(children) => self.blocks(children),
                ContentBlock::CodeBlock { .. } | ContentBlock::ThematicBreak => {}
            }
        }
    }

    fn inlines(&mut self, inlines: &mut [InlineNode]) {
        for inline in inlines {
            match inline {
                InlineNode::Emphasis(children) | InlineNode::Strong(children) => {
                    self.inlines(children)
                }
                InlineNode::Link(link) => self.link(link),
                InlineNode::Text(_)
                | InlineNode::Code(_)
                | InlineNode::SoftBreak
                | InlineNode::HardBreak => {}
            }
        }
    }

    fn link(&mut self, link: &mut Link) {
        match link {
            Link::External { content, .. } => self.inlines(content),
            Link::Internal {
                content,
                resolution,
                ..
            } => {
                self.inlines(content);
                if let Resolution::Unresolved(name) = resolution {
                    match self.linker.resolve(self.context, name) {
                        Some((id, url)) => *resolution = Resolution::Resolved { id, url },
                        None => self.warnings.push(LinkWarning { name: name.clone() }),
                    }
                }
            }
        }
    }
}
