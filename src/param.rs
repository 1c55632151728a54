use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A query parameter to be appended to a URI.
///
/// The value is optional: a parameter without a value is rendered as
/// a bare name, with no `'='`.
///
/// # Examples
///
/// ```
/// use uri_encoder::Param;
///
/// let p = Param::new("page", "2");
/// assert_eq!(p.name(), "page");
/// assert_eq!(p.value(), Some("2"));
///
/// let flag = Param::bare("verbose");
/// assert_eq!(flag.value(), None);
///
/// let p: Param = ("q", "rust").into();
/// assert_eq!(p, Param::optional("q", Some("rust")));
/// assert_eq!(Param::optional::<&str>("q", None), Param::bare("q"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Param {
    name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    value: Option<String>,
}

impl Param {
    /// Creates a parameter with a value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Creates a parameter without a value.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Creates a parameter whose value may be absent.
    pub fn optional<V: Into<String>>(name: impl Into<String>, value: Option<V>) -> Self {
        Self {
            name: name.into(),
            value: value.map(Into::into),
        }
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns an upper bound of the bytes this parameter takes up
    /// unencoded in a query, including the trailing `'&'`.
    pub(crate) fn raw_len(&self) -> usize {
        self.name.len() + self.value.as_ref().map_or(0, |v| v.len() + 1) + 1
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Param {
    fn from((name, value): (K, V)) -> Self {
        Self::new(name, value)
    }
}
