//! Quick style index to Markdown block type.

use log::trace;

/// Markdown block type chosen by a paragraph's quick style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockStyle {
    /// `quickStyleIndex="1"`
    Heading2,
    /// `quickStyleIndex="3"`
    Heading3,
    /// Anything else, including a missing index
    #[default]
    Paragraph,
}

impl BlockStyle {
    /// Resolve a style index. Unknown values fall back to [`BlockStyle::Paragraph`].
    pub fn resolve(index: Option<&str>) -> Self {
        match index {
            Some("1") => BlockStyle::Heading2,
            Some("3") => BlockStyle::Heading3,
            Some(other) => {
                trace!("unrecognized quickStyleIndex {:?}, treating as paragraph", other);
                BlockStyle::Paragraph
            }
            None => BlockStyle::Paragraph,
        }
    }

    /// Markdown heading level, if this is a heading style
    pub fn heading_level(self) -> Option<u8> {
        match self {
            BlockStyle::Heading2 => Some(2),
            BlockStyle::Heading3 => Some(3),
            BlockStyle::Paragraph => None,
        }
    }
}

impl From<Option<&str>> for BlockStyle {
    fn from(index: Option<&str>) -> Self {
        Self::resolve(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_indices() {
        assert_eq!(BlockStyle::resolve(Some("1")), BlockStyle::Heading2);
        assert_eq!(BlockStyle::resolve(Some("3")), BlockStyle::Heading3);
    }

    #[test]
    fn test_everything_else_is_paragraph() {
        for index in ["0", "2", "4", "10", "", " 1", "1 ", "01", "h1", "-1"] {
            assert_eq!(
                BlockStyle::resolve(Some(index)),
                BlockStyle::Paragraph,
                "index {:?}",
                index
            );
        }
        assert_eq!(BlockStyle::resolve(None), BlockStyle::Paragraph);
        assert_eq!(BlockStyle::default(), BlockStyle::Paragraph);
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(BlockStyle::from(Some("1")).heading_level(), Some(2));
        assert_eq!(BlockStyle::from(Some("3")).heading_level(), Some(3));
        assert_eq!(BlockStyle::from(None).heading_level(), None);
    }
}
