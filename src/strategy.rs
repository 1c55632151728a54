use crate::{
    error::ParseStrategyError,
    pct_enc::{
        self,
        encoder::{Query, QueryElement},
        EString,
    },
    Param,
};
use alloc::{borrow::Cow, string::String};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The policy applied to the path and the query when encoding a URI.
///
/// A strategy is chosen once, typically from client configuration
/// (see [`from_disable_url_encoding`]), and then reused for every request.
///
/// [`from_disable_url_encoding`]: Self::from_disable_url_encoding
///
/// # Examples
///
/// ```
/// use uri_encoder::{EncodingStrategy, Param};
///
/// let params = [Param::new("na me", "v&al")];
///
/// let q = EncodingStrategy::Strict.combine_query_and_params(Some("a=1"), &params);
/// assert_eq!(q.as_deref(), Some("a=1&na%20me=v%26al"));
///
/// let q = EncodingStrategy::Raw.combine_query_and_params(Some("a=1"), &params);
/// assert_eq!(q.as_deref(), Some("a=1&na me=v&al"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum EncodingStrategy {
    /// Percent-encodes the path, the existing query and every parameter.
    ///
    /// All of them are treated as content that may contain unsafe characters.
    #[default]
    Strict,
    /// Leaves the path, the existing query and every parameter as is.
    ///
    /// The caller is responsible for supplying properly encoded content.
    Raw,
}

impl EncodingStrategy {
    /// Selects [`Raw`] if URL encoding is disabled, or [`Strict`] otherwise.
    ///
    /// [`Raw`]: Self::Raw
    /// [`Strict`]: Self::Strict
    #[must_use]
    pub const fn from_disable_url_encoding(disable_url_encoding: bool) -> Self {
        if disable_url_encoding {
            Self::Raw
        } else {
            Self::Strict
        }
    }

    /// Returns the lowercase name of the strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Raw => "raw",
        }
    }

    /// Encodes a path.
    ///
    /// `'/'` and existing percent-encoded octets are preserved by [`Strict`].
    ///
    /// [`Strict`]: Self::Strict
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_encoder::EncodingStrategy;
    ///
    /// assert_eq!(EncodingStrategy::Strict.encode_path("/a b"), "/a%20b");
    /// assert_eq!(EncodingStrategy::Raw.encode_path("/a b"), "/a b");
    /// ```
    #[must_use]
    pub fn encode_path(self, path: &str) -> Cow<'_, str> {
        match self {
            Self::Strict => pct_enc::encode_path(path),
            Self::Raw => Cow::Borrowed(path),
        }
    }

    /// Encodes an existing query string, without the leading `'?'`.
    ///
    /// [`Strict`] keeps `'&'`, `'='` and `'%'` so that the structure of the
    /// query and the octets already percent-encoded survive.
    ///
    /// [`Strict`]: Self::Strict
    #[must_use]
    pub fn encode_query_only(self, query: &str) -> Cow<'_, str> {
        match self {
            Self::Strict => pct_enc::encode_query(query),
            Self::Raw => Cow::Borrowed(query),
        }
    }

    /// Combines an existing query string with additional parameters.
    ///
    /// Returns the resulting query string without the leading `'?'`,
    /// or `None` if the existing query is absent or empty and there
    /// are no parameters.
    ///
    /// Each parameter is rendered as `name=value`, or as a bare `name`
    /// if it has no value. Parameters are joined with `'&'` in order,
    /// and joined to a non-empty existing query with a single `'&'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_encoder::{EncodingStrategy, Param};
    ///
    /// let params = [Param::bare("a"), Param::new("b", "2")];
    /// let q = EncodingStrategy::Raw.combine_query_and_params(None, &params);
    /// assert_eq!(q.as_deref(), Some("a&b=2"));
    ///
    /// let q = EncodingStrategy::Strict.combine_query_and_params(Some(""), &[]);
    /// assert_eq!(q, None);
    /// ```
    #[must_use]
    pub fn combine_query_and_params<'a>(
        self,
        query: Option<&'a str>,
        params: &[Param],
    ) -> Option<Cow<'a, str>> {
        let query = query.filter(|q| !q.is_empty());

        if params.is_empty() {
            return query.map(|q| self.encode_query_only(q));
        }

        let cap = query.map_or(0, |q| q.len() + 1)
            + params.iter().map(Param::raw_len).sum::<usize>();

        let buf = match self {
            Self::Strict => {
                let mut buf = EString::<Query>::with_capacity(cap);
                if let Some(query) = query {
                    buf.encode_str::<Query>(query);
                    buf.push('&');
                }
                encode_and_append_params(&mut buf, params);
                buf.pop();
                buf.into_string()
            }
            Self::Raw => {
                let mut buf = String::with_capacity(cap);
                if let Some(query) = query {
                    buf.push_str(query);
                    buf.push('&');
                }
                append_raw_params(&mut buf, params);
                buf.pop();
                buf
            }
        };
        Some(Cow::Owned(buf))
    }
}

/// Appends every parameter followed by `'&'`.
fn encode_and_append_params(buf: &mut EString<Query>, params: &[Param]) {
    for param in params {
        buf.encode_str::<QueryElement>(param.name());
        if let Some(value) = param.value() {
            buf.push('=');
            buf.encode_str::<QueryElement>(value);
        }
        buf.push('&');
    }
}

/// Appends every parameter followed by `'&'`.
fn append_raw_params(buf: &mut String, params: &[Param]) {
    for param in params {
        buf.push_str(param.name());
        if let Some(value) = param.value() {
            buf.push('=');
            buf.push_str(value);
        }
        buf.push('&');
    }
}

impl FromStr for EncodingStrategy {
    type Err = ParseStrategyError;

    /// Parses a strategy from its name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("strict") {
            Ok(Self::Strict)
        } else if s.eq_ignore_ascii_case("raw") {
            Ok(Self::Raw)
        } else {
            Err(ParseStrategyError::new(s))
        }
    }
}
