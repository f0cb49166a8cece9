//! Convert the typed page tree to the Markdown block model
//!
//! This module walks a parsed page in document order and emits the blocks
//! defined in onenote-md-core.

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::{Document, ListKind, Node, Paragraph};
use crate::normalize::normalize_with;
use crate::service::ConvertOptions;
use crate::style::BlockStyle;
use crate::text::{extract_text, paragraph_text, run_text};
use onenote_md_core::Block;

/// Lowercase sub-ordinals like `a.` inside a numbering string
static SUB_ORDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]\.").unwrap());

/// Per-conversion settings shared by the walk
pub(crate) struct Context<'a> {
    pub options: &'a ConvertOptions,
    pub translate: &'a dyn Fn(&str) -> String,
}

impl Context<'_> {
    fn normalize(&self, text: &str) -> String {
        normalize_with(text, self.translate)
    }

    fn style(&self, paragraph: &Paragraph) -> BlockStyle {
        if self.options.style_headings {
            BlockStyle::resolve(paragraph.style_index.as_deref())
        } else {
            BlockStyle::Paragraph
        }
    }
}

/// Convert a page to a Markdown block document.
///
/// The title comes first, then every outline in document order.
pub(crate) fn convert(document: &Document, ctx: &Context) -> Block {
    let mut blocks = Vec::new();

    // Title text is emitted verbatim, without normalization
    let title = extract_text(document.title());
    if title.is_empty() {
        debug!("page has no title text");
    } else {
        blocks.push(Block::Title(title));
    }

    for (i, outline) in document.outlines().enumerate() {
        trace!("walking outline {}", i);
        walk(outline, ctx, &mut blocks);
    }

    let document = Block::Document(blocks);
    if document.is_empty() {
        debug!("page produced no blocks");
    } else {
        debug!("converted page into {} blocks", document.len());
    }
    document
}

/// Visit nodes in order, emitting blocks for paragraphs and text
fn walk(nodes: &[Node], ctx: &Context, out: &mut Vec<Block>) {
    for node in nodes {
        match node {
            Node::ParagraphChildren(children) | Node::Outline(children) => {
                walk(children, ctx, out)
            }
            Node::Paragraph(paragraph) => convert_paragraph(paragraph, ctx, out),
            Node::Text(run) => push_paragraph(&run_text(run), ctx, out),
            Node::List(_) | Node::Title(_) => {}
        }
    }
}

fn convert_paragraph(paragraph: &Paragraph, ctx: &Context, out: &mut Vec<Block>) {
    if let Some(list) = paragraph.list() {
        convert_list_item(paragraph, list, ctx, out);
        walk_nested(paragraph, ctx, out);
        return;
    }

    if let Some(level) = ctx.style(paragraph).heading_level() {
        let text = normalized_text(paragraph, ctx);
        if !text.is_empty() {
            // A formula styled as a heading stays a formula
            if text.starts_with("$$") {
                out.push(Block::MathBlock(text));
            } else {
                out.push(Block::Heading { level, text });
            }
        }
        walk_nested(paragraph, ctx, out);
        return;
    }

    // Plain paragraph: own text and nested outline elements in document order
    walk(&paragraph.children, ctx, out);
}

fn convert_list_item(paragraph: &Paragraph, list: &ListKind, ctx: &Context, out: &mut Vec<Block>) {
    let text = normalized_text(paragraph, ctx);
    if text.is_empty() {
        debug!("list item without text, skipping");
        return;
    }

    // Display math would be centered out of the list
    let text = text.replace("$$", "$");

    out.push(match list {
        ListKind::Number { text: number } => Block::NumberedItem {
            ordinal: SUB_ORDINAL.replace_all(number, "-").into_owned(),
            text,
        },
        ListKind::Bullet => Block::BulletItem(text),
    });
}

fn walk_nested(paragraph: &Paragraph, ctx: &Context, out: &mut Vec<Block>) {
    for nested in paragraph.nested() {
        walk(nested, ctx, out);
    }
}

/// The paragraph's own text, normalized. Empty text skips normalization.
fn normalized_text(paragraph: &Paragraph, ctx: &Context) -> String {
    let raw = paragraph_text(paragraph);
    if raw.is_empty() {
        return raw;
    }
    ctx.normalize(&raw)
}

fn push_paragraph(raw: &str, ctx: &Context, out: &mut Vec<Block>) {
    if raw.is_empty() {
        return;
    }
    let text = ctx.normalize(raw);
    if !text.is_empty() {
        out.push(Block::Paragraph(text));
    }
}
