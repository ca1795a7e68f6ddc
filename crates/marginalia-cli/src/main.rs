use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use marginalia_config::Config;
use marginalia_engine::{
    CommandVocabulary, ContentBlock, InlineNode, Link, Resolution, Section, TranslatedAst,
    translate_comment,
};
use std::io::Read;
use std::path::PathBuf;

/// Translate a documentation comment into its typed documentation AST.
#[derive(Parser)]
#[command(name = "marginalia", version, about)]
struct Args {
    /// Comment file to translate; stdin when omitted.
    input: Option<PathBuf>,

    /// Vocabulary config file (TOML). Without it the default vocabulary is
    /// used.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "outline")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Human-readable section outline.
    Outline,
    /// The full AST as JSON.
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let comment = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let vocabulary = match &args.config {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file {} does not exist", path.display()))?
            .into_vocabulary()?,
        None => CommandVocabulary::default(),
    };

    let ast = translate_comment(&comment, &vocabulary)?;

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&ast)?),
        Format::Outline => print_outline(&ast),
    }
    Ok(())
}

fn print_outline(ast: &TranslatedAst) {
    if let Some(Section::Brief { content }) = &ast.brief {
        println!("brief: {}", blocks_text(content));
    }
    for section in &ast.sections {
        match section {
            Section::Brief { .. } => unreachable!("brief is stored separately"),
            Section::Details { content } => println!("details: {}", blocks_text(content)),
            Section::Inline { name, content } => {
                println!("{name}: {}", blocks_text(content));
            }
            Section::List { name, items } => {
                println!("{name}:");
                for item in items {
                    match &item.term {
                        Some(term) => println!(
                            "  {} - {}",
                            inlines_text(term),
                            blocks_text(&item.description)
                        ),
                        None => println!("  {}", blocks_text(&item.description)),
                    }
                }
            }
        }
    }

    let metadata = &ast.metadata;
    if let Some(exclude) = &metadata.exclude {
        println!("exclude: {exclude:?}");
    }
    if let Some(unique_name) = &metadata.unique_name {
        println!("unique_name: {unique_name}");
    }
    if let Some(synopsis) = &metadata.synopsis {
        println!("synopsis: {synopsis}");
    }
    if let Some(group) = &metadata.group {
        println!("group: {} {:?}", group.name, group.heading);
    }
    if let Some(module) = &metadata.module {
        println!("module: {module}");
    }
    if let Some(output_section) = &metadata.output_section {
        println!("output_section: {output_section}");
    }
}

fn blocks_text(blocks: &[ContentBlock]) -> String {
    let mut parts = Vec::new();
    for block in blocks {
        match block {
            ContentBlock::Paragraph(inlines) | ContentBlock::Heading { content: inlines, .. } => {
                parts.push(inlines_text(inlines));
            }
            ContentBlock::UnorderedList(items) | ContentBlock::OrderedList(items) => {
                for item in items {
                    parts.push(blocks_text(item));
                }
            }
            ContentBlock::BlockQuote(children) => parts.push(blocks_text(children)),
            ContentBlock::CodeBlock { text, .. } => parts.push(text.trim_end().to_string()),
            ContentBlock::ThematicBreak => {}
        }
    }
    parts.join(" / ")
}

fn inlines_text(inlines: &[InlineNode]) -> String {
    let mut text = String::new();
    for inline in inlines {
        match inline {
            InlineNode::Text(t) | InlineNode::Code(t) => text.push_str(t),
            InlineNode::Emphasis(children) | InlineNode::Strong(children) => {
                text.push_str(&inlines_text(children));
            }
            InlineNode::SoftBreak | InlineNode::HardBreak => text.push(' '),
            InlineNode::Link(link) => match link {
                Link::External { url, content, .. } => {
                    text.push_str(&inlines_text(content));
                    text.push_str(&format!(" <{url}>"));
                }
                Link::Internal {
                    content,
                    resolution,
                    ..
                } => {
                    text.push_str(&inlines_text(content));
                    match resolution {
                        Resolution::Unresolved(name) => text.push_str(&format!(" [{name}?]")),
                        Resolution::Resolved { url, .. } => text.push_str(&format!(" [{url}]")),
                    }
                }
            },
        }
    }
    text
}
