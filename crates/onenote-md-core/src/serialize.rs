//! Markdown block serialization
//!
//! Renders blocks verbatim in order. Every block except the title is followed
//! by a blank line; the title line is followed by a single newline.

use crate::ast::Block;
use crate::options::Options;

/// Serialize a block to Markdown string
pub fn serialize(block: &Block, options: &Options) -> String {
    let mut output = String::with_capacity(4096);
    serialize_block(block, options, &mut output);
    output
}

fn serialize_block(block: &Block, options: &Options, out: &mut String) {
    if block.is_blank() {
        return;
    }

    match block {
        Block::Document(blocks) => {
            for block in blocks {
                serialize_block(block, options, out);
            }
        }

        Block::Title(text) => {
            out.push_str("# ");
            out.push_str(text);
            out.push('\n');
        }

        Block::Heading { level, text } => {
            for _ in 0..*level {
                out.push('#');
            }
            out.push(' ');
            push_block(text, out);
        }

        Block::Paragraph(text) | Block::MathBlock(text) => push_block(text, out),

        Block::BulletItem(text) => {
            out.push(options.bullet_list_marker);
            out.push(' ');
            push_block(text, out);
        }

        Block::NumberedItem { ordinal, text } => {
            out.push_str(ordinal);
            out.push(' ');
            push_block(text, out);
        }
    }
}

fn push_block(text: &str, out: &mut String) {
    out.push_str(text);
    out.push_str("\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_options() -> Options {
        Options::default()
    }

    #[test]
    fn test_paragraph() {
        let block = Block::Paragraph("Hello World".to_string());
        let result = serialize(&block, &default_options());
        assert_eq!(result, "Hello World\n\n");
    }

    #[test]
    fn test_title_single_newline() {
        let block = Block::Title("Notes".to_string());
        assert_eq!(serialize(&block, &default_options()), "# Notes\n");
    }

    #[test]
    fn test_headings() {
        let h2 = Block::Heading {
            level: 2,
            text: "Intro".to_string(),
        };
        let h3 = Block::Heading {
            level: 3,
            text: "Detail".to_string(),
        };
        assert_eq!(serialize(&h2, &default_options()), "## Intro\n\n");
        assert_eq!(serialize(&h3, &default_options()), "### Detail\n\n");
    }

    #[test]
    fn test_bullet_marker_option() {
        let block = Block::BulletItem("item".to_string());
        assert_eq!(serialize(&block, &default_options()), "- item\n\n");

        let options = Options {
            bullet_list_marker: '*',
        };
        assert_eq!(serialize(&block, &options), "* item\n\n");
    }

    #[test]
    fn test_numbered_item() {
        let block = Block::NumberedItem {
            ordinal: "1.".to_string(),
            text: "first".to_string(),
        };
        assert_eq!(serialize(&block, &default_options()), "1. first\n\n");
    }

    #[test]
    fn test_math_block_verbatim() {
        let block = Block::MathBlock("$$E=mc^2$$".to_string());
        assert_eq!(serialize(&block, &default_options()), "$$E=mc^2$$\n\n");
    }

    #[test]
    fn test_document_skips_blank_blocks() {
        let doc = Block::Document(vec![
            Block::Title("Notes".to_string()),
            Block::Paragraph(String::new()),
            Block::Heading {
                level: 2,
                text: "Intro".to_string(),
            },
            Block::Paragraph("Hello world".to_string()),
        ]);
        assert_eq!(
            serialize(&doc, &default_options()),
            "# Notes\n## Intro\n\nHello world\n\n"
        );
    }
}
