//! Configuration options for Markdown serialization

/// Options for Markdown serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Bullet list marker
    pub bullet_list_marker: char,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bullet_list_marker: '-',
        }
    }
}
