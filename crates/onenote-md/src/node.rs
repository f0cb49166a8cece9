//! Typed document tree for OneNote page exports.
//!
//! The parser maps the export's elements onto a closed set of node kinds.
//! Everything else in the export (sizes, positions, metadata, ink) is dropped
//! during parsing, so the walker only ever sees these variants.

/// A parsed page: its top-level `Title` and `Outline` sections in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub sections: Vec<Node>,
}

impl Document {
    pub fn new(sections: Vec<Node>) -> Self {
        Self { sections }
    }

    /// The first `Title` section, if any
    pub fn title(&self) -> Option<&Node> {
        self.sections.iter().find(|n| matches!(n, Node::Title(_)))
    }

    /// Children of every `Outline` section, one slice per outline
    pub fn outlines(&self) -> impl Iterator<Item = &[Node]> {
        self.sections.iter().filter_map(|n| match n {
            Node::Outline(children) => Some(children.as_slice()),
            _ => None,
        })
    }
}

/// Node kinds of a page export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Page title section (`one:Title`)
    Title(Vec<Node>),
    /// Outline section holding a forest of paragraphs (`one:Outline`)
    Outline(Vec<Node>),
    /// Outline element (`one:OE`)
    Paragraph(Paragraph),
    /// Nested outline elements (`one:OEChildren`)
    ParagraphChildren(Vec<Node>),
    /// List descriptor of a paragraph (`one:List`)
    List(ListKind),
    /// Literal text (`one:T`)
    Text(TextRun),
}

impl Node {
    /// Create a text node from a single literal segment
    pub fn text(content: &str) -> Self {
        Node::Text(TextRun::new(content))
    }

    /// Child nodes (empty for leaves)
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Title(children) | Node::Outline(children) | Node::ParagraphChildren(children) => {
                children.as_slice()
            }
            Node::Paragraph(p) => p.children.as_slice(),
            Node::List(_) | Node::Text(_) => &[],
        }
    }
}

/// An outline element: style hint plus ordered children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Raw `quickStyleIndex` attribute value
    pub style_index: Option<String>,
    pub children: Vec<Node>,
}

impl Paragraph {
    /// Create a paragraph with an optional style index
    pub fn new(style_index: Option<&str>) -> Self {
        Self {
            style_index: style_index.map(str::to_string),
            children: Vec::new(),
        }
    }

    /// Create an unstyled paragraph holding one text child
    pub fn with_text(content: &str) -> Self {
        let mut p = Self::new(None);
        p.add_child(Node::text(content));
        p
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) -> &mut Self {
        self.children.push(child);
        self
    }

    /// The list descriptor, if this paragraph is a list item
    pub fn list(&self) -> Option<&ListKind> {
        self.children.iter().find_map(|c| match c {
            Node::List(kind) => Some(kind),
            _ => None,
        })
    }

    /// Direct text children
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.children.iter().filter_map(|c| match c {
            Node::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Nested `OEChildren` subtrees
    pub fn nested(&self) -> impl Iterator<Item = &[Node]> {
        self.children.iter().filter_map(|c| match c {
            Node::ParagraphChildren(children) => Some(children.as_slice()),
            _ => None,
        })
    }

    pub fn has_nested(&self) -> bool {
        self.nested().next().is_some()
    }
}

/// List descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListKind {
    /// Numbered item with its literal numbering string (e.g. `1.`, `a.`)
    Number { text: String },
    /// Bulleted item
    Bullet,
}

/// Literal text segments of a `one:T`, in document order.
///
/// A segment is one XML text node: the CDATA body, or the text and tail text
/// around any inline elements that appear inside the `T`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRun {
    pub segments: Vec<String>,
}

impl TextRun {
    pub fn new(content: &str) -> Self {
        Self {
            segments: vec![content.to_string()],
        }
    }

    pub fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }
}
