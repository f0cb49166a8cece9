//! onenote-md-core - Markdown block model and serialization
//!
//! This crate provides the output side of the OneNote to Markdown converter:
//! the flat sequence of Markdown blocks a page turns into, and the serializer
//! that renders them. It knows nothing about XML; `onenote-md` builds the
//! blocks from a parsed page export.
//!
//! # Architecture
//!
//! ```text
//! Page XML ──parse──▶ Document tree ──walk──▶ ┌────────┐
//!                                             │ Blocks │ ──▶ Markdown String
//!                                             └────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use onenote_md_core::{serialize, Block, Options};
//!
//! let doc = Block::Document(vec![
//!     Block::Title("Notes".to_string()),
//!     Block::Heading {
//!         level: 2,
//!         text: "Intro".to_string(),
//!     },
//!     Block::Paragraph("Hello world".to_string()),
//! ]);
//!
//! let markdown = serialize(&doc, &Options::default());
//! assert_eq!(markdown, "# Notes\n## Intro\n\nHello world\n\n");
//! ```

mod ast;
mod options;
mod serialize;

pub use ast::Block;
pub use options::Options;
pub use serialize::serialize;
