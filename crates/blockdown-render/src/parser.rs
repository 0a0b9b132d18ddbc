//! Markdown front end: `pulldown-cmark` events to a [`SyntaxNode`] tree.
//!
//! Events map onto the node catalogue one-to-one where possible. A few
//! shapes are normalized on the way:
//!
//! - inline content directly inside a list item (tight lists) is wrapped in
//!   an implicit paragraph, so every item's own text arrives as paragraphs
//! - adjacent text events are merged into one `RawText`
//! - raw HTML is kept as literal text
//! - table header rows become ordinary table rows
//!
//! Events with no node kind (footnotes, math, task markers, definition lists,
//! metadata blocks, super/subscript) fail with
//! [`RenderError::UnsupportedNodeKind`].

use pulldown_cmark::{CodeBlockKind, Event, LinkType, Options, Parser, Tag, TagEnd};

use crate::error::RenderError;
use crate::syntax::{MAILTO, SyntaxNode};
use crate::util::heading_level_to_num;

/// Parser options used by [`parse_markdown`].
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
}

/// Parse Markdown text into a document tree.
pub fn parse_markdown(markdown: &str) -> Result<SyntaxNode, RenderError> {
    build_tree(Parser::new_ext(markdown, parser_options()))
}

/// Build a document tree from a stream of parser events.
///
/// Accepts events from a caller-configured parser; extensions outside the
/// node catalogue are rejected.
pub fn build_tree<'a, I>(events: I) -> Result<SyntaxNode, RenderError>
where
    I: IntoIterator<Item = Event<'a>>,
{
    let mut builder = TreeBuilder::new();
    for event in events {
        builder.process_event(event)?;
    }
    Ok(builder.finish())
}

/// Container still waiting for its end tag.
#[derive(Debug)]
enum Open {
    Document,
    Paragraph,
    Heading(u8),
    Quote,
    BlockCode(Option<String>),
    HtmlBlock,
    List(Option<u64>),
    Item,
    Table,
    TableRow,
    TableCell,
    Emphasis,
    Strong,
    Strikethrough,
    Link(String),
    AutoLink(String),
    Image(String),
}

#[derive(Debug)]
struct Frame {
    open: Open,
    children: Vec<SyntaxNode>,
}

struct TreeBuilder {
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Frame {
                open: Open::Document,
                children: Vec::new(),
            }],
        }
    }

    fn process_event(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        match event {
            Event::Start(tag) => self.start_tag(tag)?,
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => self.text(&text),
            Event::Code(code) => self.push(SyntaxNode::InlineCode(vec![SyntaxNode::RawText(
                code.into_string(),
            )])),
            Event::SoftBreak | Event::HardBreak => self.push(SyntaxNode::LineBreak),
            Event::Rule => self.push(SyntaxNode::ThematicBreak),
            Event::FootnoteReference(_) => return Err(unsupported("footnote reference")),
            Event::InlineMath(_) => return Err(unsupported("inline math")),
            Event::DisplayMath(_) => return Err(unsupported("display math")),
            Event::TaskListMarker(_) => return Err(unsupported("task list marker")),
        }
        Ok(())
    }

    fn start_tag(&mut self, tag: Tag<'_>) -> Result<(), RenderError> {
        let open = match tag {
            Tag::Paragraph => Open::Paragraph,
            Tag::Heading { level, .. } => Open::Heading(heading_level_to_num(level)),
            Tag::BlockQuote(_) => Open::Quote,
            Tag::CodeBlock(kind) => Open::BlockCode(match kind {
                CodeBlockKind::Fenced(info) => info
                    .split_whitespace()
                    .next()
                    .map(ToOwned::to_owned),
                CodeBlockKind::Indented => None,
            }),
            Tag::HtmlBlock => Open::HtmlBlock,
            Tag::List(start) => Open::List(start),
            Tag::Item => Open::Item,
            Tag::Table(_) => Open::Table,
            Tag::TableHead | Tag::TableRow => Open::TableRow,
            Tag::TableCell => Open::TableCell,
            Tag::Emphasis => Open::Emphasis,
            Tag::Strong => Open::Strong,
            Tag::Strikethrough => Open::Strikethrough,
            Tag::Link {
                link_type: LinkType::Autolink,
                dest_url,
                ..
            } => Open::AutoLink(dest_url.into_string()),
            Tag::Link {
                link_type: LinkType::Email,
                dest_url,
                ..
            } => Open::AutoLink(format!("{MAILTO}{dest_url}")),
            Tag::Link { dest_url, .. } => Open::Link(dest_url.into_string()),
            Tag::Image { dest_url, .. } => Open::Image(dest_url.into_string()),
            Tag::FootnoteDefinition(_) => return Err(unsupported("footnote definition")),
            Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition => return Err(unsupported("definition list")),
            Tag::MetadataBlock(_) => return Err(unsupported("metadata block")),
            Tag::Superscript => return Err(unsupported("superscript")),
            Tag::Subscript => return Err(unsupported("subscript")),
        };
        self.stack.push(Frame {
            open,
            children: Vec::new(),
        });
        Ok(())
    }

    fn end_tag(&mut self, _tag: TagEnd) {
        // Never pop the document frame; a stray end tag is ignored.
        if self.stack.len() < 2 {
            return;
        }
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let node = close(frame);
        self.push(node);
    }

    fn text(&mut self, text: &str) {
        let Some(frame) = self.stack.last_mut() else {
            return;
        };
        if let Some(SyntaxNode::RawText(last)) = frame.children.last_mut() {
            last.push_str(text);
        } else {
            frame.children.push(SyntaxNode::RawText(text.to_owned()));
        }
    }

    fn push(&mut self, node: SyntaxNode) {
        if let Some(frame) = self.stack.last_mut() {
            frame.children.push(node);
        }
    }

    /// Close any containers left open and return the document.
    fn finish(mut self) -> SyntaxNode {
        while self.stack.len() > 1 {
            if let Some(frame) = self.stack.pop() {
                let node = close(frame);
                self.push(node);
            }
        }
        match self.stack.pop() {
            Some(frame) => SyntaxNode::Document(frame.children),
            None => SyntaxNode::Document(Vec::new()),
        }
    }
}

fn close(frame: Frame) -> SyntaxNode {
    let children = frame.children;
    match frame.open {
        Open::Document => SyntaxNode::Document(children),
        Open::Paragraph => SyntaxNode::Paragraph(children),
        Open::Heading(level) => SyntaxNode::Heading { level, children },
        Open::Quote => SyntaxNode::Quote(children),
        Open::BlockCode(language) => SyntaxNode::BlockCode {
            language,
            children: trim_trailing_newline(children),
        },
        Open::HtmlBlock => SyntaxNode::Paragraph(trim_trailing_newline(children)),
        Open::List(start) => SyntaxNode::List { start, children },
        Open::Item => SyntaxNode::ListItem(wrap_inline_runs(children)),
        Open::Table => SyntaxNode::Table(children),
        Open::TableRow => SyntaxNode::TableRow(children),
        Open::TableCell => SyntaxNode::TableCell(children),
        Open::Emphasis => SyntaxNode::Emphasis(children),
        Open::Strong => SyntaxNode::Strong(children),
        Open::Strikethrough => SyntaxNode::Strikethrough(children),
        Open::Link(target) => SyntaxNode::Link { target, children },
        Open::AutoLink(target) => SyntaxNode::AutoLink { target },
        Open::Image(src) => SyntaxNode::Image { src, children },
    }
}

/// Group consecutive inline nodes into implicit paragraphs.
fn wrap_inline_runs(children: Vec<SyntaxNode>) -> Vec<SyntaxNode> {
    let mut wrapped = Vec::with_capacity(children.len());
    let mut inline = Vec::new();

    for child in children {
        if child.is_inline() {
            inline.push(child);
        } else {
            if !inline.is_empty() {
                wrapped.push(SyntaxNode::Paragraph(std::mem::take(&mut inline)));
            }
            wrapped.push(child);
        }
    }
    if !inline.is_empty() {
        wrapped.push(SyntaxNode::Paragraph(inline));
    }
    wrapped
}

fn trim_trailing_newline(mut children: Vec<SyntaxNode>) -> Vec<SyntaxNode> {
    if let Some(SyntaxNode::RawText(text)) = children.last_mut()
        && text.ends_with('\n')
    {
        text.pop();
        if text.is_empty() {
            children.pop();
        }
    }
    children
}

fn unsupported(kind: &str) -> RenderError {
    RenderError::UnsupportedNodeKind {
        kind: kind.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(text: &str) -> SyntaxNode {
        SyntaxNode::RawText(text.to_owned())
    }

    fn parse(markdown: &str) -> Vec<SyntaxNode> {
        match parse_markdown(markdown).unwrap() {
            SyntaxNode::Document(children) => children,
            other => panic!("expected document, got {other:?}"),
        }
    }

    #[test]
    fn test_paragraph_with_inline_styles() {
        assert_eq!(
            parse("Hello **bold** and *it*"),
            vec![SyntaxNode::Paragraph(vec![
                raw("Hello "),
                SyntaxNode::Strong(vec![raw("bold")]),
                raw(" and "),
                SyntaxNode::Emphasis(vec![raw("it")]),
            ])]
        );
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(
            parse("##### Deep"),
            vec![SyntaxNode::Heading {
                level: 5,
                children: vec![raw("Deep")],
            }]
        );
    }

    #[test]
    fn test_tight_list_items_get_implicit_paragraphs() {
        assert_eq!(
            parse("- a\n  - b"),
            vec![SyntaxNode::List {
                start: None,
                children: vec![SyntaxNode::ListItem(vec![
                    SyntaxNode::Paragraph(vec![raw("a")]),
                    SyntaxNode::List {
                        start: None,
                        children: vec![SyntaxNode::ListItem(vec![SyntaxNode::Paragraph(vec![
                            raw("b"),
                        ])])],
                    },
                ])],
            }]
        );
    }

    #[test]
    fn test_ordered_list_start() {
        let nodes = parse("3. three\n4. four");
        let SyntaxNode::List { start, children } = &nodes[0] else {
            panic!("expected list, got {nodes:?}");
        };
        assert_eq!(*start, Some(3));
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_code_block_trailing_newline_removed() {
        assert_eq!(
            parse("```rust\nfn main() {}\n```"),
            vec![SyntaxNode::BlockCode {
                language: Some("rust".to_owned()),
                children: vec![raw("fn main() {}")],
            }]
        );
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(
            parse("use `x`"),
            vec![SyntaxNode::Paragraph(vec![
                raw("use "),
                SyntaxNode::InlineCode(vec![raw("x")]),
            ])]
        );
    }

    #[test]
    fn test_autolink_and_link() {
        assert_eq!(
            parse("<https://wikipedia.org> [docs](https://docs.rs)"),
            vec![SyntaxNode::Paragraph(vec![
                SyntaxNode::AutoLink {
                    target: "https://wikipedia.org".to_owned()
                },
                raw(" "),
                SyntaxNode::Link {
                    target: "https://docs.rs".to_owned(),
                    children: vec![raw("docs")],
                },
            ])]
        );
    }

    #[test]
    fn test_email_autolink_gets_mailto_target() {
        assert_eq!(
            parse("<foo@example.com>"),
            vec![SyntaxNode::Paragraph(vec![SyntaxNode::AutoLink {
                target: "mailto:foo@example.com".to_owned()
            }])]
        );
    }

    #[test]
    fn test_image_alt_text_children() {
        assert_eq!(
            parse("![a cat](cat.png)"),
            vec![SyntaxNode::Paragraph(vec![SyntaxNode::Image {
                src: "cat.png".to_owned(),
                children: vec![raw("a cat")],
            }])]
        );
    }

    #[test]
    fn test_soft_break_becomes_line_break() {
        assert_eq!(
            parse("one\ntwo"),
            vec![SyntaxNode::Paragraph(vec![
                raw("one"),
                SyntaxNode::LineBreak,
                raw("two"),
            ])]
        );
    }

    #[test]
    fn test_escaped_text_is_merged() {
        assert_eq!(
            parse(r"a \*b\*"),
            vec![SyntaxNode::Paragraph(vec![raw("a *b*")])]
        );
    }

    #[test]
    fn test_quote_rule_and_table() {
        let nodes = parse("> quoted\n\n---\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        let kinds: Vec<_> = nodes.iter().map(SyntaxNode::kind).collect();
        assert_eq!(
            kinds,
            vec![
                crate::NodeKind::Quote,
                crate::NodeKind::ThematicBreak,
                crate::NodeKind::Table
            ]
        );
        let SyntaxNode::Table(rows) = &nodes[2] else {
            panic!("expected table");
        };
        assert!(rows.iter().all(|row| matches!(row, SyntaxNode::TableRow(_))));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_strikethrough_enabled() {
        assert_eq!(
            parse("~~gone~~"),
            vec![SyntaxNode::Paragraph(vec![SyntaxNode::Strikethrough(vec![
                raw("gone")
            ])])]
        );
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let events = Parser::new_ext("text[^1]\n\n[^1]: note", Options::ENABLE_FOOTNOTES);
        let err = build_tree(events).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedNodeKind { .. }));
        assert!(err.to_string().contains("footnote"));
    }

    #[test]
    fn test_task_list_marker_is_rejected() {
        let events = Parser::new_ext("- [x] done", Options::ENABLE_TASKLISTS);
        let err = build_tree(events).unwrap_err();
        assert!(err.to_string().contains("task list marker"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Vec::new());
    }
}
