//! Markdown block model
//!
//! A converted page is a flat, ordered sequence of blocks. Nesting in the
//! source outline is flattened by the tree walker, so blocks carry their
//! final text and only the marker that precedes it.

/// A block-level Markdown node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Root container, blocks in emission order
    Document(Vec<Block>),

    /// Page title, rendered as a level-1 heading line
    Title(String),

    /// Section heading (level 2 or 3)
    Heading { level: u8, text: String },

    /// Plain paragraph text
    Paragraph(String),

    /// Bullet list item
    BulletItem(String),

    /// Numbered list item with its literal ordinal (e.g. `1.` or `-`)
    NumberedItem { ordinal: String, text: String },

    /// Standalone display math (`$$...$$`)
    MathBlock(String),
}

impl Block {
    /// Check if this block has nothing to render
    pub fn is_blank(&self) -> bool {
        match self {
            Block::Document(blocks) => blocks.iter().all(|b| b.is_blank()),
            Block::Title(text)
            | Block::Heading { text, .. }
            | Block::Paragraph(text)
            | Block::BulletItem(text)
            | Block::NumberedItem { text, .. }
            | Block::MathBlock(text) => text.is_empty(),
        }
    }

    /// Number of leaf blocks (documents are not counted)
    pub fn len(&self) -> usize {
        match self {
            Block::Document(blocks) => blocks.iter().map(|b| b.len()).sum(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_blocks() {
        assert!(Block::Paragraph(String::new()).is_blank());
        assert!(Block::Document(vec![]).is_blank());
        assert!(!Block::BulletItem("x".to_string()).is_blank());
        assert!(Block::NumberedItem {
            ordinal: "1.".to_string(),
            text: String::new(),
        }
        .is_blank());
    }

    #[test]
    fn test_len_flattens_documents() {
        let doc = Block::Document(vec![
            Block::Title("T".to_string()),
            Block::Document(vec![
                Block::Paragraph("a".to_string()),
                Block::Paragraph("b".to_string()),
            ]),
        ]);
        assert_eq!(doc.len(), 3);
        assert!(!doc.is_empty());
        assert!(Block::Document(vec![]).is_empty());
    }
}
