//! Markdown syntax tree consumed by the block renderer.
//!
//! The catalogue of node kinds is closed: every kind the renderer understands
//! is a variant of [`SyntaxNode`], and the renderer matches on it exhaustively.
//! Input that cannot be expressed as one of these variants is rejected where
//! the tree is built (see [`crate::parser`]).

use std::fmt;

/// Scheme of email autolink targets.
pub(crate) const MAILTO: &str = "mailto:";

/// A node of a parsed Markdown document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxNode {
    /// Document root.
    Document(Vec<SyntaxNode>),
    /// Paragraph of inline content.
    Paragraph(Vec<SyntaxNode>),
    /// ATX or setext heading. `level` is 1-6 as written in the source.
    Heading { level: u8, children: Vec<SyntaxNode> },
    /// `**strong**` span.
    Strong(Vec<SyntaxNode>),
    /// `*emphasis*` span.
    Emphasis(Vec<SyntaxNode>),
    /// `~~strikethrough~~` span.
    Strikethrough(Vec<SyntaxNode>),
    /// `` `code` `` span.
    InlineCode(Vec<SyntaxNode>),
    /// Image; children are the alt text.
    Image { src: String, children: Vec<SyntaxNode> },
    /// Inline link; children are the link text.
    Link { target: String, children: Vec<SyntaxNode> },
    /// `<https://...>` autolink. Email autolinks carry a `mailto:` target.
    AutoLink { target: String },
    /// Ordered list when `start` is present, bullet list otherwise.
    List {
        start: Option<u64>,
        children: Vec<SyntaxNode>,
    },
    /// List item; children are block nodes.
    ListItem(Vec<SyntaxNode>),
    /// Block quote.
    Quote(Vec<SyntaxNode>),
    /// Fenced or indented code block.
    BlockCode {
        language: Option<String>,
        children: Vec<SyntaxNode>,
    },
    /// `---`
    ThematicBreak,
    /// Hard or soft line break.
    LineBreak,
    /// Table.
    Table(Vec<SyntaxNode>),
    /// Table row (header rows included).
    TableRow(Vec<SyntaxNode>),
    /// Table cell.
    TableCell(Vec<SyntaxNode>),
    /// Literal text.
    RawText(String),
    /// Backslash escape; children hold the escaped text.
    EscapeSequence(Vec<SyntaxNode>),
}

impl SyntaxNode {
    /// Kind tag of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Document(_) => NodeKind::Document,
            Self::Paragraph(_) => NodeKind::Paragraph,
            Self::Heading { .. } => NodeKind::Heading,
            Self::Strong(_) => NodeKind::Strong,
            Self::Emphasis(_) => NodeKind::Emphasis,
            Self::Strikethrough(_) => NodeKind::Strikethrough,
            Self::InlineCode(_) => NodeKind::InlineCode,
            Self::Image { .. } => NodeKind::Image,
            Self::Link { .. } => NodeKind::Link,
            Self::AutoLink { .. } => NodeKind::AutoLink,
            Self::List { .. } => NodeKind::List,
            Self::ListItem(_) => NodeKind::ListItem,
            Self::Quote(_) => NodeKind::Quote,
            Self::BlockCode { .. } => NodeKind::BlockCode,
            Self::ThematicBreak => NodeKind::ThematicBreak,
            Self::LineBreak => NodeKind::LineBreak,
            Self::Table(_) => NodeKind::Table,
            Self::TableRow(_) => NodeKind::TableRow,
            Self::TableCell(_) => NodeKind::TableCell,
            Self::RawText(_) => NodeKind::RawText,
            Self::EscapeSequence(_) => NodeKind::EscapeSequence,
        }
    }

    /// Child nodes in source order. Leaf nodes return an empty slice.
    #[must_use]
    pub fn children(&self) -> &[SyntaxNode] {
        match self {
            Self::Document(children)
            | Self::Paragraph(children)
            | Self::Heading { children, .. }
            | Self::Strong(children)
            | Self::Emphasis(children)
            | Self::Strikethrough(children)
            | Self::InlineCode(children)
            | Self::Image { children, .. }
            | Self::Link { children, .. }
            | Self::List { children, .. }
            | Self::ListItem(children)
            | Self::Quote(children)
            | Self::BlockCode { children, .. }
            | Self::Table(children)
            | Self::TableRow(children)
            | Self::TableCell(children)
            | Self::EscapeSequence(children) => children,
            Self::AutoLink { .. } | Self::ThematicBreak | Self::LineBreak | Self::RawText(_) => {
                &[]
            }
        }
    }

    /// Whether this node belongs in inline (span) position.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        self.kind().is_inline()
    }
}

/// Kind tag of a [`SyntaxNode`], used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Paragraph,
    Heading,
    Strong,
    Emphasis,
    Strikethrough,
    InlineCode,
    Image,
    Link,
    AutoLink,
    List,
    ListItem,
    Quote,
    BlockCode,
    ThematicBreak,
    LineBreak,
    Table,
    TableRow,
    TableCell,
    RawText,
    EscapeSequence,
}

impl NodeKind {
    /// Every kind in the catalogue.
    pub const ALL: [NodeKind; 21] = [
        Self::Document,
        Self::Paragraph,
        Self::Heading,
        Self::Strong,
        Self::Emphasis,
        Self::Strikethrough,
        Self::InlineCode,
        Self::Image,
        Self::Link,
        Self::AutoLink,
        Self::List,
        Self::ListItem,
        Self::Quote,
        Self::BlockCode,
        Self::ThematicBreak,
        Self::LineBreak,
        Self::Table,
        Self::TableRow,
        Self::TableCell,
        Self::RawText,
        Self::EscapeSequence,
    ];

    /// Snake-case name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Paragraph => "paragraph",
            Self::Heading => "heading",
            Self::Strong => "strong",
            Self::Emphasis => "emphasis",
            Self::Strikethrough => "strikethrough",
            Self::InlineCode => "inline_code",
            Self::Image => "image",
            Self::Link => "link",
            Self::AutoLink => "auto_link",
            Self::List => "list",
            Self::ListItem => "list_item",
            Self::Quote => "quote",
            Self::BlockCode => "block_code",
            Self::ThematicBreak => "thematic_break",
            Self::LineBreak => "line_break",
            Self::Table => "table",
            Self::TableRow => "table_row",
            Self::TableCell => "table_cell",
            Self::RawText => "raw_text",
            Self::EscapeSequence => "escape_sequence",
        }
    }

    /// Whether nodes of this kind appear in inline (span) position.
    #[must_use]
    pub const fn is_inline(self) -> bool {
        matches!(
            self,
            Self::Strong
                | Self::Emphasis
                | Self::Strikethrough
                | Self::InlineCode
                | Self::Image
                | Self::Link
                | Self::AutoLink
                | Self::LineBreak
                | Self::RawText
                | Self::EscapeSequence
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
