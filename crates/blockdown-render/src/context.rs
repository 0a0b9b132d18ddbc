//! Per-render state threaded through the tree walk.

/// Kind of list the walk is currently inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListKind {
    Bulleted,
    Numbered,
}

impl ListKind {
    /// A list that declares a start ordinal is numbered.
    #[must_use]
    pub const fn from_start(start: Option<u64>) -> Self {
        if start.is_some() {
            Self::Numbered
        } else {
            Self::Bulleted
        }
    }
}

/// State for one render pass.
///
/// Passed by value into every recursive call, so descending into a list
/// never leaks the list kind back to the caller and independent renders
/// never share state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderContext {
    list_kind: Option<ListKind>,
}

impl RenderContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Innermost enclosing list kind, `None` outside any list.
    #[must_use]
    pub fn list_kind(&self) -> Option<ListKind> {
        self.list_kind
    }

    /// Context for the children of a list node.
    #[must_use]
    pub fn enter_list(self, start: Option<u64>) -> Self {
        Self {
            list_kind: Some(ListKind::from_start(start)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_outside_lists() {
        assert_eq!(RenderContext::new().list_kind(), None);
    }

    #[test]
    fn test_start_ordinal_selects_numbered() {
        assert_eq!(ListKind::from_start(Some(1)), ListKind::Numbered);
        // A zero start ordinal still marks an ordered list.
        assert_eq!(ListKind::from_start(Some(0)), ListKind::Numbered);
        assert_eq!(ListKind::from_start(None), ListKind::Bulleted);
    }

    #[test]
    fn test_nested_lists_restore_enclosing_kind() {
        let outer = RenderContext::new().enter_list(None);
        let inner = outer.enter_list(Some(3));
        assert_eq!(inner.list_kind(), Some(ListKind::Numbered));
        assert_eq!(outer.list_kind(), Some(ListKind::Bulleted));
    }
}
