//! Adapter over the external markup parser.
//!
//! `pulldown-cmark` hands us a flat event stream; the engine wants an owned
//! block/inline tree. This module folds the one into the other and does
//! nothing else: no command handling, no validation, no link classification.

use pulldown_cmark::{
    BrokenLink, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd,
};

use super::types::{Block, Inline};

/// Parses raw comment text into the generic block tree.
///
/// Shortcut references without a definition (`[name]`) are kept as links with
/// an empty destination instead of falling back to literal text, so the link
/// classifier can later treat them as internal references.
pub fn parse_markup(text: &str) -> Vec<Block> {
    let parser =
        Parser::new_with_broken_link_callback(text, Options::empty(), Some(keep_shortcut_links));

    let mut builder = TreeBuilder::new();
    for event in parser {
        builder.push(event);
    }
    builder.finish()
}

fn keep_shortcut_links<'input>(
    _link: BrokenLink<'input>,
) -> Option<(CowStr<'input>, CowStr<'input>)> {
    Some((CowStr::Borrowed(""), CowStr::Borrowed("")))
}

/// Nested block container currently being filled.
#[derive(Debug)]
enum BlockFrame {
    Root(Vec<Block>),
    Quote(Vec<Block>),
    Item(Vec<Block>),
    List { ordered: bool, items: Vec<Vec<Block>> },
}

/// Inline span currently being filled.
#[derive(Debug)]
enum InlineKind {
    Paragraph,
    Heading(u8),
    Emphasis,
    Strong,
    Link { destination: String, title: String },
    Image { destination: String, title: String },
}

#[derive(Debug)]
struct InlineFrame {
    kind: InlineKind,
    content: Vec<Inline>,
    /// Opened by us rather than by a `Start(Paragraph)` event. Tight list
    /// items emit bare inline events; we wrap them in a paragraph so item
    /// content is uniform either way.
    implicit: bool,
}

#[derive(Debug)]
struct TreeBuilder {
    blocks: Vec<BlockFrame>,
    inlines: Vec<InlineFrame>,
    code: Option<(Option<String>, String)>,
    html: Option<String>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            blocks: vec![BlockFrame::Root(vec![])],
            inlines: vec![],
            code: None,
            html: None,
        }
    }

    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if let Some((_, buffer)) = self.code.as_mut() {
                    buffer.push_str(&text);
                } else if let Some(buffer) = self.html.as_mut() {
                    buffer.push_str(&text);
                } else {
                    self.push_inline(Inline::Text(text.into_string()));
                }
            }
            Event::Code(text) => self.push_inline(Inline::Code(text.into_string())),
            Event::InlineHtml(html) => self.push_inline(Inline::Html(html.into_string())),
            Event::Html(html) => match self.html.as_mut() {
                Some(buffer) => buffer.push_str(&html),
                None => self.push_block(Block::HtmlBlock(html.into_string())),
            },
            Event::SoftBreak => self.push_inline(Inline::SoftBreak),
            Event::HardBreak => self.push_inline(Inline::HardBreak),
            Event::Rule => {
                self.close_implicit_paragraph();
                self.push_block(Block::ThematicBreak);
            }
            // Footnotes, tables, math and task lists are behind options we
            // never enable.
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                self.close_implicit_paragraph();
                self.open_inline(InlineKind::Paragraph, false);
            }
            Tag::Heading { level, .. } => {
                self.close_implicit_paragraph();
                self.open_inline(InlineKind::Heading(level as u8), false);
            }
            Tag::BlockQuote(_) => {
                self.close_implicit_paragraph();
                self.blocks.push(BlockFrame::Quote(vec![]));
            }
            Tag::List(start) => {
                self.close_implicit_paragraph();
                self.blocks.push(BlockFrame::List {
                    ordered: start.is_some(),
                    items: vec![],
                });
            }
            Tag::Item => {
                self.close_implicit_paragraph();
                self.blocks.push(BlockFrame::Item(vec![]));
            }
            Tag::CodeBlock(kind) => {
                self.close_implicit_paragraph();
                let language = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().map(str::to_string)
                    }
                    CodeBlockKind::Indented => None,
                };
                self.code = Some((language, String::new()));
            }
            Tag::HtmlBlock => {
                self.close_implicit_paragraph();
                self.html = Some(String::new());
            }
            Tag::Emphasis => self.open_inline(InlineKind::Emphasis, false),
            Tag::Strong => self.open_inline(InlineKind::Strong, false),
            Tag::Link {
                dest_url, title, ..
            } => self.open_inline(
                InlineKind::Link {
                    destination: dest_url.into_string(),
                    title: title.into_string(),
                },
                false,
            ),
            Tag::Image {
                dest_url, title, ..
            } => self.open_inline(
                InlineKind::Image {
                    destination: dest_url.into_string(),
                    title: title.into_string(),
                },
                false,
            ),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph
            | TagEnd::Heading(_)
            | TagEnd::Emphasis
            | TagEnd::Strong
            | TagEnd::Link
            | TagEnd::Image => self.close_inline(),
            TagEnd::Item => {
                self.close_implicit_paragraph();
                if let Some(BlockFrame::Item(item)) = self.blocks.pop() {
                    if let Some(BlockFrame::List { items, .. }) = self.blocks.last_mut() {
                        items.push(item);
                    }
                }
            }
            TagEnd::List(_) => {
                if let Some(BlockFrame::List { ordered, items }) = self.blocks.pop() {
                    self.push_block(Block::List { ordered, items });
                }
            }
            TagEnd::BlockQuote(_) => {
                self.close_implicit_paragraph();
                if let Some(BlockFrame::Quote(children)) = self.blocks.pop() {
                    self.push_block(Block::BlockQuote(children));
                }
            }
            TagEnd::CodeBlock => {
                if let Some((language, text)) = self.code.take() {
                    self.push_block(Block::CodeBlock { language, text });
                }
            }
            TagEnd::HtmlBlock => {
                if let Some(html) = self.html.take() {
                    self.push_block(Block::HtmlBlock(html));
                }
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.close_implicit_paragraph();
        // Unbalanced frames only happen on parser bugs; fold their content
        // outward rather than losing it.
        while self.blocks.len() > 1 {
            match self.blocks.pop() {
                Some(BlockFrame::Quote(children))
                | Some(BlockFrame::Item(children))
                | Some(BlockFrame::Root(children)) => {
                    for child in children {
                        self.push_block(child);
                    }
                }
                Some(BlockFrame::List { ordered, items }) => {
                    self.push_block(Block::List { ordered, items });
                }
                None => break,
            }
        }
        match self.blocks.pop() {
            Some(BlockFrame::Root(blocks)) => blocks,
            _ => vec![],
        }
    }

    fn open_inline(&mut self, kind: InlineKind, implicit: bool) {
        // Inline spans outside any paragraph (tight list items) get an
        // implicit one so downstream code sees uniform item content.
        if self.inlines.is_empty() && !matches!(kind, InlineKind::Paragraph | InlineKind::Heading(_))
        {
            self.inlines.push(InlineFrame {
                kind: InlineKind::Paragraph,
                content: vec![],
                implicit: true,
            });
        }
        self.inlines.push(InlineFrame {
            kind,
            content: vec![],
            implicit,
        });
    }

    fn close_inline(&mut self) {
        let Some(frame) = self.inlines.pop() else {
            return;
        };
        match frame.kind {
            InlineKind::Paragraph => self.push_block(Block::Paragraph(frame.content)),
            InlineKind::Heading(level) => self.push_block(Block::Heading {
                level,
                content: frame.content,
            }),
            InlineKind::Emphasis => self.push_inline(Inline::Emphasis(frame.content)),
            InlineKind::Strong => self.push_inline(Inline::Strong(frame.content)),
            InlineKind::Link { destination, title } => self.push_inline(Inline::Link {
                destination,
                title,
                content: frame.content,
            }),
            InlineKind::Image { destination, title } => self.push_inline(Inline::Image {
                destination,
                title,
                content: frame.content,
            }),
        }
    }

    fn close_implicit_paragraph(&mut self) {
        if matches!(self.inlines.last(), Some(frame) if frame.implicit) {
            self.close_inline();
        }
    }

    fn push_inline(&mut self, inline: Inline) {
        if self.inlines.is_empty() {
            self.inlines.push(InlineFrame {
                kind: InlineKind::Paragraph,
                content: vec![],
                implicit: true,
            });
        }
        if let Some(frame) = self.inlines.last_mut() {
            // The parser chops text runs at special characters (a literal
            // backslash arrives as its own event); merge them back so a
            // `\command` token is always one text node.
            if let Inline::Text(text) = &inline
                && let Some(Inline::Text(last)) = frame.content.last_mut()
            {
                last.push_str(text);
                return;
            }
            frame.content.push(inline);
        }
    }

    fn push_block(&mut self, block: Block) {
        match self.blocks.last_mut() {
            Some(BlockFrame::Root(blocks))
            | Some(BlockFrame::Quote(blocks))
            | Some(BlockFrame::Item(blocks)) => blocks.push(block),
            // A block arriving while a list frame is on top means the parser
            // skipped the item wrapper; keep the content as its own item.
            Some(BlockFrame::List { items, .. }) => items.push(vec![block]),
            None => self.blocks.push(BlockFrame::Root(vec![block])),
        }
    }
}
