//! XML parsing into the typed document tree.

use log::{debug, trace};
use roxmltree::Node as XmlNode;

use crate::node::{Document, ListKind, Node, Paragraph, TextRun};
use crate::service::ConvertOptions;
use crate::{ConvertError, Result};

/// Element kinds the converter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Title,
    Outline,
    Paragraph,
    ParagraphChildren,
    List,
    Number,
    Bullet,
    Text,
}

/// Parse a page export into a [`Document`].
///
/// Only `Title` and `Outline` sections directly under the root element are
/// kept. Fails with [`ConvertError::Structural`] when the input is not
/// well-formed XML.
///
/// # Example
///
/// ```rust
/// use onenote_md::{parse_document, ConvertOptions, Node};
///
/// let xml = r#"<Page><Title><OE><T>Notes</T></OE></Title></Page>"#;
/// let options = ConvertOptions {
///     namespace: None,
///     ..Default::default()
/// };
/// let doc = parse_document(xml, &options).unwrap();
/// assert!(matches!(doc.title(), Some(Node::Title(_))));
/// ```
pub fn parse_document(xml: &str, options: &ConvertOptions) -> Result<Document> {
    let doc = roxmltree::Document::parse(xml)?;
    let parser = Parser {
        namespace: options.namespace.as_deref(),
        max_depth: options.max_depth,
    };

    let mut sections = Vec::new();
    for child in doc.root_element().children().filter(|n| n.is_element()) {
        match parser.kind(child) {
            Some(Kind::Title) => sections.push(Node::Title(parser.children(child, 1)?)),
            Some(Kind::Outline) => sections.push(Node::Outline(parser.children(child, 1)?)),
            _ => trace!("skipping section <{}>", child.tag_name().name()),
        }
    }

    debug!("parsed page with {} sections", sections.len());
    Ok(Document::new(sections))
}

struct Parser<'a> {
    namespace: Option<&'a str>,
    max_depth: usize,
}

impl Parser<'_> {
    fn kind(&self, node: XmlNode) -> Option<Kind> {
        if !node.is_element() {
            return None;
        }

        let tag = node.tag_name();
        if let Some(ns) = self.namespace {
            if tag.namespace() != Some(ns) {
                return None;
            }
        }

        match tag.name() {
            "Title" => Some(Kind::Title),
            "Outline" => Some(Kind::Outline),
            "OE" => Some(Kind::Paragraph),
            "OEChildren" => Some(Kind::ParagraphChildren),
            "List" => Some(Kind::List),
            "Number" => Some(Kind::Number),
            "Bullet" => Some(Kind::Bullet),
            "T" => Some(Kind::Text),
            _ => None,
        }
    }

    fn children(&self, node: XmlNode, depth: usize) -> Result<Vec<Node>> {
        if depth > self.max_depth {
            return Err(ConvertError::TooDeep {
                limit: self.max_depth,
            });
        }

        let mut nodes = Vec::new();
        for child in node.children() {
            if let Some(converted) = self.convert(child, depth)? {
                nodes.push(converted);
            }
        }
        Ok(nodes)
    }

    fn convert(&self, node: XmlNode, depth: usize) -> Result<Option<Node>> {
        let Some(kind) = self.kind(node) else {
            if node.is_element() {
                trace!("dropping <{}>", node.tag_name().name());
            }
            return Ok(None);
        };

        let converted = match kind {
            Kind::Title => Node::Title(self.children(node, depth + 1)?),
            Kind::Outline => Node::Outline(self.children(node, depth + 1)?),
            Kind::ParagraphChildren => Node::ParagraphChildren(self.children(node, depth + 1)?),
            Kind::Paragraph => Node::Paragraph(Paragraph {
                style_index: node.attribute("quickStyleIndex").map(str::to_string),
                children: self.children(node, depth + 1)?,
            }),
            Kind::List => match self.list_kind(node) {
                Some(list) => Node::List(list),
                None => {
                    debug!("list descriptor without Number or Bullet, ignoring");
                    return Ok(None);
                }
            },
            Kind::Text => Node::Text(text_run(node)),
            // Only meaningful inside a List
            Kind::Number | Kind::Bullet => return Ok(None),
        };

        Ok(Some(converted))
    }

    fn list_kind(&self, node: XmlNode) -> Option<ListKind> {
        node.children().find_map(|child| match self.kind(child)? {
            Kind::Number => Some(ListKind::Number {
                text: child.attribute("text").unwrap_or_default().to_string(),
            }),
            Kind::Bullet => Some(ListKind::Bullet),
            _ => None,
        })
    }
}

/// Every text node under a `T`, including tail text after inline elements
fn text_run(node: XmlNode) -> TextRun {
    TextRun::from_segments(
        node.descendants()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .map(str::to_string)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::ONENOTE_NAMESPACE;

    fn page(body: &str) -> String {
        format!(
            r#"<one:Page xmlns:one="{}" name="p">{}</one:Page>"#,
            ONENOTE_NAMESPACE, body
        )
    }

    fn parse(body: &str) -> Document {
        parse_document(&page(body), &ConvertOptions::default()).unwrap()
    }

    #[test]
    fn test_malformed_xml_is_structural_error() {
        let err = parse_document("<one:Page><one:Title>", &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Structural(_)));
    }

    #[test]
    fn test_sections_and_decorations() {
        let doc = parse(
            r#"<one:TagDef index="0"/>
               <one:Title><one:OE><one:T><![CDATA[Notes]]></one:T></one:OE></one:Title>
               <one:Outline>
                 <one:Position x="36" y="86"/>
                 <one:OEChildren><one:OE><one:T>Hi</one:T></one:OE></one:OEChildren>
               </one:Outline>"#,
        );

        assert_eq!(doc.sections.len(), 2);
        let outline: Vec<_> = doc.outlines().collect();
        assert_eq!(outline.len(), 1);
        assert_eq!(outline[0].len(), 1);
        assert!(matches!(outline[0][0], Node::ParagraphChildren(_)));
    }

    #[test]
    fn test_paragraph_style_and_list() {
        let doc = parse(
            r#"<one:Outline><one:OEChildren>
                 <one:OE quickStyleIndex="3">
                   <one:List><one:Number text="2." fontSize="11"/></one:List>
                   <one:T>item</one:T>
                 </one:OE>
               </one:OEChildren></one:Outline>"#,
        );

        let outline = doc.outlines().next().unwrap();
        let Node::ParagraphChildren(items) = &outline[0] else {
            panic!("expected OEChildren");
        };
        let Node::Paragraph(p) = &items[0] else {
            panic!("expected OE");
        };
        assert_eq!(p.style_index.as_deref(), Some("3"));
        assert_eq!(
            p.list(),
            Some(&ListKind::Number {
                text: "2.".to_string()
            })
        );
        assert_eq!(p.texts().count(), 1);
    }

    #[test]
    fn test_empty_list_descriptor_dropped() {
        let doc = parse(
            r#"<one:Outline><one:OEChildren>
                 <one:OE><one:List/><one:T>x</one:T></one:OE>
               </one:OEChildren></one:Outline>"#,
        );
        let outline = doc.outlines().next().unwrap();
        let Node::Paragraph(p) = &outline[0].children()[0] else {
            panic!("expected OE");
        };
        assert!(p.list().is_none());
    }

    #[test]
    fn test_text_run_keeps_tail_text() {
        let doc = parse(
            r#"<one:Outline><one:OEChildren><one:OE>
                 <one:T>a<b>bold</b>tail</one:T>
               </one:OE></one:OEChildren></one:Outline>"#,
        );
        let outline = doc.outlines().next().unwrap();
        let Node::Paragraph(p) = &outline[0].children()[0] else {
            panic!("expected OE");
        };
        let run = p.texts().next().unwrap();
        assert_eq!(run.segments, vec!["a", "bold", "tail"]);
    }

    #[test]
    fn test_namespace_is_matched() {
        let foreign = r#"<Page><Outline><OEChildren><OE><T>x</T></OE></OEChildren></Outline></Page>"#;

        let strict = parse_document(foreign, &ConvertOptions::default()).unwrap();
        assert!(strict.sections.is_empty());

        let options = ConvertOptions {
            namespace: None,
            ..Default::default()
        };
        let any = parse_document(foreign, &options).unwrap();
        assert_eq!(any.sections.len(), 1);
    }

    #[test]
    fn test_depth_limit() {
        let options = ConvertOptions {
            max_depth: 2,
            ..Default::default()
        };
        let xml = page(
            r#"<one:Outline><one:OEChildren><one:OE><one:OEChildren>
                 <one:OE><one:T>deep</one:T></one:OE>
               </one:OEChildren></one:OE></one:OEChildren></one:Outline>"#,
        );
        let err = parse_document(&xml, &options).unwrap_err();
        assert!(matches!(err, ConvertError::TooDeep { limit: 2 }));
    }
}
