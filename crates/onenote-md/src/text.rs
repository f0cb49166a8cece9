//! Literal text extraction.

use crate::node::{Node, Paragraph, TextRun};

/// Concatenate all literal text under `node` in document order.
///
/// Returns an empty string for an absent node. Segments consisting of a single
/// line feed are pretty-printing artifacts and are skipped. List descriptors
/// carry no text.
pub fn extract_text(node: Option<&Node>) -> String {
    let mut out = String::new();
    if let Some(node) = node {
        collect(node, &mut out);
    }
    out
}

/// Text of a paragraph's own `T` children, ignoring nested paragraphs
pub fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut out = String::new();
    for run in paragraph.texts() {
        push_run(run, &mut out);
    }
    out
}

/// Text of a single run
pub fn run_text(run: &TextRun) -> String {
    let mut out = String::new();
    push_run(run, &mut out);
    out
}

fn collect(node: &Node, out: &mut String) {
    match node {
        Node::Text(run) => push_run(run, out),
        Node::List(_) => {}
        _ => {
            for child in node.children() {
                collect(child, out);
            }
        }
    }
}

fn push_run(run: &TextRun, out: &mut String) {
    for segment in &run.segments {
        if segment != "\n" {
            out.push_str(segment);
        }
    }
}
