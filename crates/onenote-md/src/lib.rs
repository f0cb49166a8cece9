//! # onenote-md
//!
//! Convert OneNote page exports to Markdown.
//!
//! A page export is an XML tree of nested outline elements. The converter
//! walks it in document order, maps each paragraph's quick style to a
//! Markdown block, and rewrites embedded MathML as LaTeX math.
//!
//! ## Design
//!
//! - **Typed tree**: the XML is parsed once into a closed set of node kinds
//!   ([`Node`]), so the walker dispatches on a sum type rather than probing
//!   element names.
//! - **Best effort**: only malformed XML is fatal. Missing titles, empty text
//!   and unknown styles degrade to empty output for that branch.
//! - **No shared state**: every conversion owns its tree and output, so
//!   independent pages may be converted in parallel.
//!
//! ## Example
//!
//! ```rust
//! use onenote_md::ConverterService;
//!
//! let xml = r#"<one:Page xmlns:one="http://schemas.microsoft.com/office/onenote/2013/onenote">
//!   <one:Title><one:OE><one:T><![CDATA[Notes]]></one:T></one:OE></one:Title>
//!   <one:Outline><one:OEChildren>
//!     <one:OE quickStyleIndex="1"><one:T><![CDATA[Intro]]></one:T></one:OE>
//!     <one:OE><one:T><![CDATA[Hello world]]></one:T></one:OE>
//!   </one:OEChildren></one:Outline>
//! </one:Page>"#;
//!
//! let service = ConverterService::new();
//! let markdown = service.convert(xml).unwrap();
//! assert_eq!(markdown, "# Notes\n## Intro\n\nHello world\n\n");
//! ```

mod convert;
pub mod fallback;
pub mod math;
pub mod node;
pub mod normalize;
mod parse;
mod service;
pub mod style;
pub mod text;

pub use node::{Document, ListKind, Node, Paragraph, TextRun};
pub use parse::parse_document;
pub use service::{ConvertOptions, ConverterService, MathTranslatorFn, ONENOTE_NAMESPACE};
pub use style::BlockStyle;

/// Error type for conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Malformed XML: {0}")]
    Structural(#[from] roxmltree::Error),

    #[error("Outline nesting exceeds {limit} levels")]
    TooDeep { limit: usize },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
