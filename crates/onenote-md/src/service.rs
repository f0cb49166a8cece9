//! ConverterService - the main entry point for page export to Markdown conversion.

use log::debug;

use crate::convert::{convert, Context};
use crate::math::mathml_to_latex;
use crate::node::Document;
use crate::parse::parse_document;
use crate::Result;
use onenote_md_core::{serialize, Block, Options};

/// Namespace of OneNote 2013 page exports
pub const ONENOTE_NAMESPACE: &str = "http://schemas.microsoft.com/office/onenote/2013/onenote";

/// Type alias for math translation functions
pub type MathTranslatorFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Options for ConverterService
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Element namespace to match; `None` matches any namespace
    pub namespace: Option<String>,

    /// Map quick styles 1 and 3 to `##` and `###` headings
    pub style_headings: bool,

    /// Deepest element nesting accepted before failing
    pub max_depth: usize,

    /// Markdown serialization options
    pub markdown: Options,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            namespace: Some(ONENOTE_NAMESPACE.to_string()),
            style_headings: true,
            max_depth: 256,
            markdown: Options::default(),
        }
    }
}

/// The main service for converting page exports to Markdown
pub struct ConverterService {
    options: ConvertOptions,
    translate: MathTranslatorFn,
}

impl ConverterService {
    /// Create a new ConverterService with default options
    pub fn new() -> Self {
        Self::with_options(ConvertOptions::default())
    }

    /// Create a ConverterService with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self {
            options,
            translate: Box::new(mathml_to_latex),
        }
    }

    /// Replace the MathML translator
    pub fn set_math_translator<F>(&mut self, translate: F) -> &mut Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.translate = Box::new(translate);
        self
    }

    /// Convert a page export to Markdown
    pub fn convert(&self, xml: &str) -> Result<String> {
        let document = parse_document(xml, &self.options)?;
        Ok(self.convert_document(&document))
    }

    /// Convert an already parsed page
    pub fn convert_document(&self, document: &Document) -> String {
        let blocks = self.to_blocks(document);
        let markdown = serialize(&blocks, &self.options.markdown);
        debug!("rendered {} bytes of markdown", markdown.len());
        markdown
    }

    /// Build the Markdown block document for a parsed page
    pub fn to_blocks(&self, document: &Document) -> Block {
        let ctx = Context {
            options: &self.options,
            translate: self.translate.as_ref(),
        };
        convert(document, &ctx)
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }
}

impl Default for ConverterService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConvertError;

    fn page(body: &str) -> String {
        format!(
            r#"<?xml version="1.0"?>
<one:Page xmlns:one="{}" ID="{{1}}" name="Notes">
  <one:Title lang="en-US">
    <one:OE><one:T><![CDATA[Notes]]></one:T></one:OE>
  </one:Title>
  <one:Outline>
    <one:OEChildren>
{}
    </one:OEChildren>
  </one:Outline>
</one:Page>"#,
            ONENOTE_NAMESPACE, body
        )
    }

    #[test]
    fn test_end_to_end() {
        let service = ConverterService::new();
        let xml = page(
            r#"<one:OE quickStyleIndex="1"><one:T><![CDATA[Intro]]></one:T></one:OE>
               <one:OE><one:T><![CDATA[Hello world]]></one:T></one:OE>"#,
        );
        assert_eq!(
            service.convert(&xml).unwrap(),
            "# Notes\n## Intro\n\nHello world\n\n"
        );
    }

    #[test]
    fn test_conversion_is_repeatable() {
        let service = ConverterService::new();
        let xml = page(
            r#"<one:OE><one:List><one:Bullet bullet="2"/></one:List><one:T><![CDATA[$$x$$]]></one:T></one:OE>"#,
        );
        let first = service.convert(&xml).unwrap();
        let second = service.convert(&xml).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "# Notes\n- $x$\n\n");
    }

    #[test]
    fn test_malformed_input() {
        let service = ConverterService::new();
        let err = service.convert("<one:Page").unwrap_err();
        assert!(matches!(err, ConvertError::Structural(_)));
    }

    #[test]
    fn test_custom_math_translator() {
        let mut service = ConverterService::new();
        service.set_math_translator(|text| text.replace("<eq/>", "$$\\alpha$$"));
        let xml = page(r#"<one:OE quickStyleIndex="3"><one:T><![CDATA[<eq/>]]></one:T></one:OE>"#);
        assert_eq!(service.convert(&xml).unwrap(), "# Notes\n$$\\alpha$$\n\n");
    }

    #[test]
    fn test_bullet_marker_option() {
        let mut service = ConverterService::new();
        service.options_mut().markdown.bullet_list_marker = '*';
        let xml = page(
            r#"<one:OE><one:List><one:Bullet bullet="2"/></one:List><one:T>item</one:T></one:OE>"#,
        );
        assert_eq!(service.convert(&xml).unwrap(), "# Notes\n* item\n\n");
    }

    #[test]
    fn test_to_blocks() {
        let service = ConverterService::default();
        let xml = page(r#"<one:OE><one:T>a</one:T></one:OE>"#);
        let doc = parse_document(&xml, service.options()).unwrap();
        assert_eq!(
            service.to_blocks(&doc),
            Block::Document(vec![
                Block::Title("Notes".to_string()),
                Block::Paragraph("a".to_string()),
            ])
        );
    }
}
