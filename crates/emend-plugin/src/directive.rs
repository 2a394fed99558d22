//! Handler result type
//!
//! A handler's return value is an explicit sum type: keep the current
//! content, replace it with text, or replace it with raw bytes. Making the
//! three outcomes variants (instead of probing the runtime shape of an
//! arbitrary value) lets the editor apply its acceptance rules as an
//! exhaustive match.

/// Requested edit for one artifact
///
/// Whether a replacement is actually applied depends on the artifact kind:
/// chunks accept only [`Text`](EditDirective::Text), assets accept both
/// [`Text`](EditDirective::Text) and [`Raw`](EditDirective::Raw). A
/// directive the kind does not accept is a silent no-op, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditDirective {
    /// Leave the current content untouched
    #[default]
    Keep,
    /// Replace content with the given text
    Text(String),
    /// Replace content with the given bytes (assets only)
    Raw(Vec<u8>),
}

impl EditDirective {
    /// Text replacement
    #[inline]
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        EditDirective::Text(text.into())
    }

    /// Binary replacement
    #[inline]
    #[must_use]
    pub fn raw(bytes: impl Into<Vec<u8>>) -> Self {
        EditDirective::Raw(bytes.into())
    }

    /// Check whether this directive requests no change
    #[inline]
    #[must_use]
    pub fn is_keep(&self) -> bool {
        matches!(self, EditDirective::Keep)
    }
}

impl From<String> for EditDirective {
    #[inline]
    fn from(text: String) -> Self {
        EditDirective::Text(text)
    }
}

impl From<&str> for EditDirective {
    #[inline]
    fn from(text: &str) -> Self {
        EditDirective::Text(text.to_string())
    }
}

impl From<Vec<u8>> for EditDirective {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        EditDirective::Raw(bytes)
    }
}

impl From<&[u8]> for EditDirective {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        EditDirective::Raw(bytes.to_vec())
    }
}

// `None` maps to Keep, mirroring handlers that return nothing when they
// want no change.
impl<T: Into<EditDirective>> From<Option<T>> for EditDirective {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(EditDirective::Keep, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_keep() {
        assert!(EditDirective::default().is_keep());
    }

    #[test]
    fn from_text_types() {
        assert_eq!(EditDirective::from("a"), EditDirective::Text("a".to_string()));
        assert_eq!(
            EditDirective::from("b".to_string()),
            EditDirective::Text("b".to_string())
        );
    }

    #[test]
    fn from_byte_types() {
        assert_eq!(EditDirective::from(vec![1, 2]), EditDirective::Raw(vec![1, 2]));
        assert_eq!(
            EditDirective::from([3u8, 4].as_slice()),
            EditDirective::Raw(vec![3, 4])
        );
    }

    #[test]
    fn from_option() {
        assert_eq!(EditDirective::from(None::<String>), EditDirective::Keep);
        assert_eq!(
            EditDirective::from(Some("x")),
            EditDirective::Text("x".to_string())
        );
    }
}
