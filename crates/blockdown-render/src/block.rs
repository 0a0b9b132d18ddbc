//! Notion block objects.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::context::ListKind;
use crate::rich_text::RichText;

/// Block type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    BulletedListItem,
    NumberedListItem,
}

impl BlockKind {
    /// Deepest heading level the platform supports.
    pub const MAX_HEADING_LEVEL: u8 = 3;

    /// Heading kind for a Markdown heading level, clamped to `1..=3`.
    #[must_use]
    pub const fn heading(level: u8) -> Self {
        match level {
            0 | 1 => Self::Heading1,
            2 => Self::Heading2,
            _ => Self::Heading3,
        }
    }

    /// Wire name, also the key of the block body.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading1 => "heading_1",
            Self::Heading2 => "heading_2",
            Self::Heading3 => "heading_3",
            Self::BulletedListItem => "bulleted_list_item",
            Self::NumberedListItem => "numbered_list_item",
        }
    }

    #[must_use]
    pub const fn is_heading(self) -> bool {
        matches!(self, Self::Heading1 | Self::Heading2 | Self::Heading3)
    }

    /// List items are the only kinds whose body carries `children`.
    #[must_use]
    pub const fn is_list_item(self) -> bool {
        matches!(self, Self::BulletedListItem | Self::NumberedListItem)
    }
}

impl From<ListKind> for BlockKind {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Bulleted => Self::BulletedListItem,
            ListKind::Numbered => Self::NumberedListItem,
        }
    }
}

/// A block: kind tag plus body.
///
/// Constructors keep the body shape tied to the kind: only list items
/// carry nested children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    kind: BlockKind,
    text: Vec<RichText>,
    children: Vec<Block>,
}

impl Block {
    #[must_use]
    pub fn paragraph(text: Vec<RichText>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text,
            children: Vec::new(),
        }
    }

    /// Heading block; `level` is clamped to the supported range.
    #[must_use]
    pub fn heading(level: u8, text: Vec<RichText>) -> Self {
        Self {
            kind: BlockKind::heading(level),
            text,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn list_item(kind: ListKind, text: Vec<RichText>, children: Vec<Block>) -> Self {
        Self {
            kind: kind.into(),
            text,
            children,
        }
    }

    #[must_use]
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &[RichText] {
        &self.text
    }

    /// Nested blocks. Always empty for non-list-item kinds.
    #[must_use]
    pub fn children(&self) -> &[Block] {
        &self.children
    }

    /// Take the text runs out of the block.
    #[must_use]
    pub fn into_text(self) -> Vec<RichText> {
        self.text
    }

    /// Concatenated plain content of all runs.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.text.iter().map(|run| run.content.as_str()).collect()
    }
}

#[derive(serde::Serialize)]
struct BlockBody<'a> {
    text: &'a [RichText],
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<&'a [Block]>,
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind.as_str();
        let body = BlockBody {
            text: &self.text,
            children: self.kind.is_list_item().then_some(&self.children[..]),
        };

        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("object", "block")?;
        map.serialize_entry("type", kind)?;
        map.serialize_entry(kind, &body)?;
        map.end()
    }
}
