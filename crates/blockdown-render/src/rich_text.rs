//! Rich-text runs.
//!
//! A [`RichText`] is one run of text with a set of style annotations and an
//! optional link. Serializes to the Notion rich-text object:
//!
//! ```json
//! {"type": "text", "text": {"content": "x"},
//!  "annotations": {"bold": true}, "link": {"type": "url", "url": "..."}}
//! ```
//!
//! `annotations` and `link` are omitted when empty.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Boolean style tag attachable to a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Annotation {
    Bold,
    Italic,
    Strikethrough,
    Code,
}

impl Annotation {
    /// Every tag, in wire order.
    pub const ALL: [Annotation; 4] = [Self::Bold, Self::Italic, Self::Strikethrough, Self::Code];

    /// Key used in the `annotations` object.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Strikethrough => "strikethrough",
            Self::Code => "code",
        }
    }
}

/// Set of annotations carried by a run. Only ever grows.
///
/// Serializes as `{<tag>: true, ...}` listing only the tags present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Annotations {
    bold: bool,
    italic: bool,
    strikethrough: bool,
    code: bool,
}

impl Annotations {
    /// Build a set from a list of tags.
    #[must_use]
    pub fn of(tags: &[Annotation]) -> Self {
        let mut set = Self::default();
        for &tag in tags {
            set.insert(tag);
        }
        set
    }

    /// Add a tag. Adding a tag twice is a no-op.
    pub fn insert(&mut self, tag: Annotation) {
        match tag {
            Annotation::Bold => self.bold = true,
            Annotation::Italic => self.italic = true,
            Annotation::Strikethrough => self.strikethrough = true,
            Annotation::Code => self.code = true,
        }
    }

    #[must_use]
    pub fn contains(&self, tag: Annotation) -> bool {
        match tag {
            Annotation::Bold => self.bold,
            Annotation::Italic => self.italic,
            Annotation::Strikethrough => self.strikethrough,
            Annotation::Code => self.code,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Tags present, in wire order.
    pub fn iter(&self) -> impl Iterator<Item = Annotation> + '_ {
        Annotation::ALL.into_iter().filter(|&tag| self.contains(tag))
    }
}

impl Serialize for Annotations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for tag in self.iter() {
            map.serialize_entry(tag.as_str(), &true)?;
        }
        map.end()
    }
}

/// Inline run of styled text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RichText {
    /// Text content.
    pub content: String,
    /// Style annotations.
    pub annotations: Annotations,
    /// Link target URL.
    pub link: Option<String>,
}

impl RichText {
    /// Unstyled run without a link.
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Unstyled run linking to `url`.
    #[must_use]
    pub fn linked(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            annotations: Annotations::default(),
            link: Some(url.into()),
        }
    }

    /// Builder-style [`Annotations::insert`].
    #[must_use]
    pub fn with(mut self, tag: Annotation) -> Self {
        self.annotations.insert(tag);
        self
    }
}

#[derive(serde::Serialize)]
struct TextObject<'a> {
    content: &'a str,
}

#[derive(serde::Serialize)]
struct LinkObject<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    url: &'a str,
}

impl Serialize for RichText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let has_annotations = !self.annotations.is_empty();
        let len = 2 + usize::from(has_annotations) + usize::from(self.link.is_some());

        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", "text")?;
        map.serialize_entry(
            "text",
            &TextObject {
                content: &self.content,
            },
        )?;
        if has_annotations {
            map.serialize_entry("annotations", &self.annotations)?;
        }
        if let Some(url) = &self.link {
            map.serialize_entry("link", &LinkObject { kind: "url", url })?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = Annotations::default();
        set.insert(Annotation::Bold);
        set.insert(Annotation::Bold);
        assert_eq!(set, Annotations::of(&[Annotation::Bold]));
        assert!(set.contains(Annotation::Bold));
        assert!(!set.contains(Annotation::Italic));
    }

    #[test]
    fn test_plain_run_wire_shape() {
        let value = serde_json::to_value(RichText::plain("hello")).unwrap();
        assert_eq!(value, json!({"type": "text", "text": {"content": "hello"}}));
    }

    #[test]
    fn test_annotated_linked_run_wire_shape() {
        let run = RichText::linked("docs", "https://example.com")
            .with(Annotation::Bold)
            .with(Annotation::Code);
        let value = serde_json::to_value(run).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "text",
                "text": {"content": "docs"},
                "annotations": {"bold": true, "code": true},
                "link": {"type": "url", "url": "https://example.com"}
            })
        );
    }

    #[test]
    fn test_annotations_serialize_present_tags_in_order() {
        let set = Annotations::of(&[Annotation::Code, Annotation::Strikethrough, Annotation::Italic]);

        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Annotation::Italic, Annotation::Strikethrough, Annotation::Code]
        );
        assert_eq!(
            serde_json::to_value(set).unwrap(),
            json!({"italic": true, "strikethrough": true, "code": true})
        );
    }

    #[test]
    fn test_empty_annotations() {
        let set = Annotations::default();
        assert!(set.is_empty());
        assert_eq!(serde_json::to_value(set).unwrap(), json!({}));
    }
}
