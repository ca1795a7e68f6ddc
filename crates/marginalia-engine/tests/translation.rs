//! End-to-end translation tests: raw comment text in, translated AST out.

use marginalia_engine::{
    CommandVocabulary, ContentBlock, ExcludeMode, ForbiddenKind, InlineNode, Link, ListItem,
    Resolution, Section, TranslatedAst, TranslationError, translate_comment,
};
use pretty_assertions::assert_eq;

fn translate(text: &str) -> TranslatedAst {
    translate_comment(text, &CommandVocabulary::default()).unwrap()
}

fn translate_err(text: &str) -> TranslationError {
    translate_comment(text, &CommandVocabulary::default()).unwrap_err()
}

fn text(s: &str) -> InlineNode {
    InlineNode::Text(s.into())
}

fn paragraph(nodes: Vec<InlineNode>) -> ContentBlock {
    ContentBlock::Paragraph(nodes)
}

fn kind_names(ast: &TranslatedAst) -> Vec<String> {
    ast.sections
        .iter()
        .map(|s| match s {
            Section::Brief { .. } => "brief".into(),
            Section::Details { .. } => "details".into(),
            Section::Inline { name, .. } => format!("inline:{name}"),
            Section::List { name, .. } => format!("list:{name}"),
        })
        .collect()
}

#[test]
fn translation_is_idempotent() {
    let comment = "A brief.\n\n\\details Body.\n\n\\returns 0 - Zero.\n\\see [foo]\n\n\\group g A heading";
    assert_eq!(translate(comment), translate(comment));
}

#[test]
fn brief_never_appears_in_sections() {
    for comment in [
        "Just a brief.",
        "\\brief Explicit.\n\nDetails.",
        "Implicit.\n\n\\effects E.\n\nMore.",
    ] {
        let ast = translate(comment);
        assert!(ast.brief.is_some());
        assert!(
            ast.sections
                .iter()
                .all(|s| !matches!(s, Section::Brief { .. })),
            "brief leaked into sections for {comment:?}"
        );
    }
}

#[test]
fn implicit_brief_and_gap_rule() {
    let ast = translate("Implicit brief.\n\nImplicit details.\nStill details.");
    assert_eq!(
        ast.brief,
        Some(Section::Brief {
            content: vec![paragraph(vec![text("Implicit brief.")])],
        })
    );
    assert_eq!(
        ast.sections,
        vec![Section::Details {
            content: vec![paragraph(vec![
                text("Implicit details."),
                InlineNode::SoftBreak,
                text("Still details."),
            ])],
        }]
    );
}

#[test]
fn sections_do_not_merge_across_a_gap() {
    let ast = translate(
        "\\details Explicit details.\n\nStill details.\n\n\\effects Explicit effects.\n\nDetails again.",
    );
    assert_eq!(
        ast.sections,
        vec![
            Section::Details {
                content: vec![
                    paragraph(vec![text("Explicit details.")]),
                    paragraph(vec![text("Still details.")]),
                ],
            },
            Section::Inline {
                name: "effects".into(),
                content: vec![paragraph(vec![text("Explicit effects.")])],
            },
            Section::Details {
                content: vec![paragraph(vec![text("Details again.")])],
            },
        ]
    );
}

#[test]
fn section_order_follows_the_source() {
    let ast = translate(
        "brief\n\nbody\n\n\\effects E.\n\n\\returns R.\n\n\\notes N.\n\nclosing details",
    );
    assert_eq!(
        kind_names(&ast),
        vec![
            "details",
            "inline:effects",
            "list:returns",
            "inline:notes",
            "details"
        ]
    );
}

#[test]
fn list_item_without_term() {
    let ast = translate("\\returns Default returns.");
    assert_eq!(
        ast.sections,
        vec![Section::List {
            name: "returns".into(),
            items: vec![ListItem {
                term: None,
                description: vec![paragraph(vec![text("Default returns.")])],
            }],
        }]
    );
}

#[test]
fn key_value_split() {
    let ast = translate("\\returns 0 - Value 0.");
    assert_eq!(
        ast.sections,
        vec![Section::List {
            name: "returns".into(),
            items: vec![ListItem {
                term: Some(vec![text("0")]),
                description: vec![paragraph(vec![text("Value 0.")])],
            }],
        }]
    );
}

#[test]
fn stacked_key_value_commands() {
    // Commands on adjacent lines, continuation lines, terminating command,
    // link terms, and a trailing plain block extending the open list.
    let comment = "\\returns 0 - Value 0.\n\\returns 1-Value 1.\nIt requires extra long description.\n\\returns Default returns.\n\\notes This terminates.\n\n\\see [foo] - Optional description.\n\\see [bar]-\n\nStill the last item.";
    let ast = translate(comment);

    assert_eq!(
        kind_names(&ast),
        vec!["list:returns", "inline:notes", "list:see"]
    );

    let Section::List { items, .. } = &ast.sections[0] else {
        panic!("expected returns list");
    };
    assert_eq!(
        items[0],
        ListItem {
            term: Some(vec![text("0")]),
            description: vec![paragraph(vec![text("Value 0.")])],
        }
    );
    assert_eq!(
        items[1],
        ListItem {
            term: Some(vec![text("1")]),
            description: vec![paragraph(vec![
                text("Value 1."),
                InlineNode::SoftBreak,
                text("It requires extra long description."),
            ])],
        }
    );
    assert_eq!(
        items[2],
        ListItem {
            term: None,
            description: vec![paragraph(vec![text("Default returns.")])],
        }
    );

    let Section::List { items, .. } = &ast.sections[2] else {
        panic!("expected see list");
    };
    let internal = |name: &str| {
        InlineNode::Link(Link::Internal {
            title: None,
            content: vec![text(name)],
            resolution: Resolution::Unresolved(name.into()),
        })
    };
    assert_eq!(
        items[0],
        ListItem {
            term: Some(vec![internal("foo")]),
            description: vec![paragraph(vec![text("Optional description.")])],
        }
    );
    // The blank-line paragraph extends the open list's last item.
    assert_eq!(
        items[1],
        ListItem {
            term: Some(vec![internal("bar")]),
            description: vec![paragraph(vec![text("Still the last item.")])],
        }
    );
}

#[test]
fn group_parsing() {
    let ast = translate("\\group -b");
    let group = ast.metadata.group.unwrap();
    assert_eq!(group.name, "b");
    assert_eq!(group.heading, None);
    assert_eq!(group.output_section, None);

    let ast = translate("\\group c a heading");
    let group = ast.metadata.group.unwrap();
    assert_eq!(group.name, "c");
    assert_eq!(group.heading, Some("a heading".into()));
    assert_eq!(group.output_section, Some("c".into()));
}

#[test]
fn singleton_metadata_enforcement() {
    let ast = translate("foo\nbar");
    assert_eq!(ast.metadata.exclude, None);
    assert_eq!(ast.metadata.unique_name, None);
    assert_eq!(ast.metadata.synopsis, None);

    let ast = translate("\\exclude return\n\n\\unique_name new\n\n\\synopsis a b c");
    assert_eq!(ast.metadata.exclude, Some(ExcludeMode::ReturnType));
    assert_eq!(ast.metadata.unique_name, Some("new".into()));
    assert_eq!(ast.metadata.synopsis, Some("a b c".into()));

    assert_eq!(
        translate_err("\\exclude\n\n\\exclude"),
        TranslationError::DuplicateCommand {
            command: "exclude".into(),
            block: 1,
        }
    );
    assert!(matches!(
        translate_err("\\module a b c"),
        TranslationError::InvalidArguments { command, .. } if command == "module"
    ));
}

#[test]
fn forbidden_content_fails_whole_translation() {
    for comment in [
        "Text <span>inline HTML</span>.",
        "<p>block HTML</p>",
        "Fine.\n\n![an image](img.png)",
        "Fine.\n\n> * deep ![img](i.png)",
    ] {
        let error = translate_err(comment);
        assert!(
            matches!(error, TranslationError::ForbiddenConstruct { .. }),
            "expected forbidden-construct error for {comment:?}, got {error:?}"
        );
    }
    assert_eq!(
        translate_err("Fine.\n\n![an image](img.png)"),
        TranslationError::ForbiddenConstruct {
            kind: ForbiddenKind::Image,
            block: 1,
        }
    );
}

#[test]
fn metadata_commands_are_line_scoped() {
    let ast = translate(
        "ignore brief\n\n\\synopsis Ignore all lines starting with a command.\nBut please include me.\n\n\\exclude target\nSome details.",
    );
    assert_eq!(
        ast.metadata.synopsis,
        Some("Ignore all lines starting with a command.".into())
    );
    assert_eq!(ast.metadata.exclude, Some(ExcludeMode::Target));
    // The lines after each command line return to ordinary content.
    assert_eq!(
        ast.sections,
        vec![Section::Details {
            content: vec![
                paragraph(vec![text("But please include me.")]),
                paragraph(vec![text("Some details.")]),
            ],
        }]
    );
}

#[test]
fn unknown_command_passthrough() {
    let ast = translate("ignore brief\n\n\\unknown Ignore unknown commands.");
    assert_eq!(
        ast.sections,
        vec![Section::Details {
            content: vec![paragraph(vec![text("\\unknown Ignore unknown commands.")])],
        }]
    );
}

#[test]
fn commands_in_quotes_and_lists_are_literal() {
    let ast = translate("ignore brief\n\n> \\effects In block quote.\n\n* \\effects In list.");
    assert_eq!(kind_names(&ast), vec!["details"]);
    let Section::Details { content } = &ast.sections[0] else {
        panic!("expected details");
    };
    assert_eq!(
        content,
        &vec![
            ContentBlock::BlockQuote(vec![paragraph(vec![text("\\effects In block quote.")])]),
            ContentBlock::UnorderedList(vec![vec![paragraph(vec![text(
                "\\effects In list."
            )])]]),
        ]
    );
}

#[test]
fn markup_structure_is_preserved_in_details() {
    let ast = translate(
        "ignore brief\n\ntext\n`code`\n*emphasis with `code`*\n\n```cpp\nA code block.\n```\n\n---\n\nAfter the break.",
    );
    let Section::Details { content } = &ast.sections[0] else {
        panic!("expected details");
    };
    assert_eq!(
        content,
        &vec![
            paragraph(vec![
                text("text"),
                InlineNode::SoftBreak,
                InlineNode::Code("code".into()),
                InlineNode::SoftBreak,
                InlineNode::Emphasis(vec![
                    text("emphasis with "),
                    InlineNode::Code("code".into()),
                ]),
            ]),
            ContentBlock::CodeBlock {
                language: Some("cpp".into()),
                text: "A code block.\n".into(),
            },
            ContentBlock::ThematicBreak,
            paragraph(vec![text("After the break.")]),
        ]
    );
}

#[test]
fn link_classification_end_to_end() {
    let ast = translate(
        "ignore brief\n\n[external link](http://example.org)\n[external 2](http://example.org/ \"title\")\n[internal link](<> \"name\")\n[internal 2](doc://name/ \"title\")\n[name]()",
    );
    let Section::Details { content } = &ast.sections[0] else {
        panic!("expected details");
    };
    let ContentBlock::Paragraph(inlines) = &content[0] else {
        panic!("expected paragraph");
    };
    let links: Vec<&Link> = inlines
        .iter()
        .filter_map(|node| match node {
            InlineNode::Link(link) => Some(link),
            _ => None,
        })
        .collect();

    assert_eq!(
        links[0],
        &Link::External {
            url: "http://example.org".into(),
            title: None,
            content: vec![text("external link")],
        }
    );
    assert_eq!(
        links[1],
        &Link::External {
            url: "http://example.org/".into(),
            title: Some("title".into()),
            content: vec![text("external 2")],
        }
    );
    assert_eq!(
        links[2],
        &Link::Internal {
            title: None,
            content: vec![text("internal link")],
            resolution: Resolution::Unresolved("name".into()),
        }
    );
    assert_eq!(
        links[3],
        &Link::Internal {
            title: Some("title".into()),
            content: vec![text("internal 2")],
            resolution: Resolution::Unresolved("name".into()),
        }
    );
    assert_eq!(
        links[4],
        &Link::Internal {
            title: None,
            content: vec![text("name")],
            resolution: Resolution::Unresolved("name".into()),
        }
    );
}

#[test]
fn custom_vocabulary_drives_recognition() {
    let vocabulary = CommandVocabulary::empty()
        .with_inline_section("rationale")
        .with_list_section("parameters");

    let ast = translate_comment(
        "brief\n\n\\rationale Why.\n\n\\parameters x - the x\n\\parameters y - the y\n\n\\effects Not a section here.",
        &vocabulary,
    )
    .unwrap();

    assert_eq!(
        kind_names(&ast),
        vec!["inline:rationale", "list:parameters", "details"]
    );
    // `effects` is not in this vocabulary, so it is literal text.
    let Section::Details { content } = &ast.sections[2] else {
        panic!("expected details");
    };
    assert_eq!(
        content,
        &vec![paragraph(vec![text("\\effects Not a section here.")])]
    );
}
