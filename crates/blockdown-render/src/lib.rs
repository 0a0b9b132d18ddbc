//! Markdown to Notion block renderer.
//!
//! Converts a Markdown document into the block objects and rich-text runs of
//! the Notion API. The pipeline has two stages:
//!
//! 1. [`parse_markdown`] builds a [`SyntaxNode`] tree with `pulldown-cmark`
//! 2. [`render_document`] walks the tree and produces [`Block`]s
//!
//! Constructs the block schema cannot express (images, tables, quotes, code
//! blocks, thematic breaks, headings deeper than level 3) are degraded to an
//! approved fallback and reported as [`Diagnostic`]s instead of failing.
//!
//! # Example
//!
//! ```
//! use blockdown_render::{BlockKind, markdown_to_blocks};
//!
//! let output = markdown_to_blocks("# Title\n\n- **bold** item\n  - nested").unwrap();
//! assert_eq!(output.blocks[0].kind(), BlockKind::Heading1);
//! assert_eq!(output.blocks[1].kind(), BlockKind::BulletedListItem);
//! assert_eq!(output.blocks[1].children().len(), 1);
//! ```

mod block;
mod context;
mod diagnostics;
mod error;
pub mod parser;
mod renderer;
mod rich_text;
mod syntax;
mod util;

pub use block::{Block, BlockKind};
pub use context::{ListKind, RenderContext};
pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use error::RenderError;
pub use parser::parse_markdown;
pub use renderer::{Fragment, RenderOutput, Renderer, render_document};
pub use rich_text::{Annotation, Annotations, RichText};
pub use syntax::{NodeKind, SyntaxNode};

/// Parse and render Markdown text in one step.
pub fn markdown_to_blocks(markdown: &str) -> Result<RenderOutput, RenderError> {
    let document = parse_markdown(markdown)?;
    Ok(render_document(&document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render(markdown: &str) -> RenderOutput {
        markdown_to_blocks(markdown).unwrap()
    }

    #[test]
    fn test_nested_list_round_trip() {
        let output = render("- a\n  - b");

        let inner = Block::list_item(ListKind::Bulleted, vec![RichText::plain("b")], Vec::new());
        let outer = Block::list_item(ListKind::Bulleted, vec![RichText::plain("a")], vec![inner]);
        assert_eq!(output.blocks, vec![outer]);
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn test_loose_list_item_concatenates_paragraphs() {
        let output = render("- first\n\n  second\n");

        assert_eq!(output.blocks.len(), 1);
        assert_eq!(
            output.blocks[0].text(),
            &[RichText::plain("first"), RichText::plain("second")]
        );
    }

    #[test]
    fn test_numbered_list_with_nested_bullets() {
        let output = render("1. one\n   - sub\n2. two\n");
        let kinds: Vec<_> = output.blocks.iter().map(Block::kind).collect();

        assert_eq!(
            kinds,
            vec![BlockKind::NumberedListItem, BlockKind::NumberedListItem]
        );
        assert_eq!(
            output.blocks[0].children()[0].kind(),
            BlockKind::BulletedListItem
        );
    }

    #[test]
    fn test_bold_italic_commute_from_markdown() {
        let expected = vec![
            RichText::plain("x")
                .with(Annotation::Bold)
                .with(Annotation::Italic),
        ];
        assert_eq!(render("***x***").blocks[0].text(), expected.as_slice());
        assert_eq!(render("_**x**_").blocks[0].text(), expected.as_slice());
        assert_eq!(render("**_x_**").blocks[0].text(), expected.as_slice());
    }

    #[test]
    fn test_heading_clamp_from_markdown() {
        let output = render("##### Five");
        assert_eq!(output.blocks[0].kind(), BlockKind::Heading3);
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].kind, NodeKind::Heading);
    }

    #[test]
    fn test_linked_image_keeps_outer_link() {
        let output = render("[![logo](logo.png)](https://example.com)");
        assert_eq!(
            output.blocks[0].text(),
            &[RichText::linked("logo", "https://example.com")]
        );
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].kind, NodeKind::Image);
    }

    #[test]
    fn test_degraded_document_reports_each_construct() {
        let markdown = "\
> quote

```
code
```

---

| a |
|---|
| 1 |

![img](i.png)
";
        let output = render(markdown);
        let kinds: Vec<_> = output.diagnostics.iter().map(|d| d.kind).collect();

        assert_eq!(
            kinds,
            vec![
                NodeKind::Quote,
                NodeKind::BlockCode,
                NodeKind::ThematicBreak,
                NodeKind::Table,
                NodeKind::Image,
            ]
        );
        let texts: Vec<_> = output.blocks.iter().map(Block::plain_text).collect();
        assert_eq!(texts, vec!["quote", "code", "img"]);
    }

    #[test]
    fn test_document_wire_shape() {
        let output = render("# Hi\n\nSee [docs](https://docs.rs) and `code`.");
        let value = serde_json::to_value(&output.blocks).unwrap();

        assert_eq!(
            value,
            json!([
                {
                    "object": "block",
                    "type": "heading_1",
                    "heading_1": {"text": [{"type": "text", "text": {"content": "Hi"}}]}
                },
                {
                    "object": "block",
                    "type": "paragraph",
                    "paragraph": {"text": [
                        {"type": "text", "text": {"content": "See "}},
                        {
                            "type": "text",
                            "text": {"content": "docs"},
                            "link": {"type": "url", "url": "https://docs.rs"}
                        },
                        {"type": "text", "text": {"content": " and "}},
                        {
                            "type": "text",
                            "text": {"content": "code"},
                            "annotations": {"code": true}
                        },
                        {"type": "text", "text": {"content": "."}}
                    ]}
                }
            ])
        );
    }

    #[test]
    fn test_email_autolink_wire_shape() {
        let output = render("<foo@example.com>");
        let value = serde_json::to_value(&output.blocks[0].text()[0]).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "text",
                "text": {"content": "foo@example.com"},
                "link": {"type": "url", "url": "mailto:foo@example.com"}
            })
        );
    }

    #[test]
    fn test_unsupported_input_fails_without_output() {
        let events = pulldown_cmark::Parser::new_ext("$x$", pulldown_cmark::Options::ENABLE_MATH);
        let result = parser::build_tree(events);
        assert!(matches!(
            result,
            Err(RenderError::UnsupportedNodeKind { .. })
        ));
    }

    #[test]
    fn test_empty_document_renders_nothing() {
        let output = render("");
        assert!(output.blocks.is_empty());
        assert!(output.diagnostics.is_empty());
    }
}
