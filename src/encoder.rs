use crate::{EncoderConfig, EncodingStrategy, Param, UriParts};
use alloc::borrow::Cow;

/// Encodes the path and the query of a URI under a fixed [`EncodingStrategy`].
///
/// A `QueryEncoder` holds no state besides its strategy, so it can be
/// copied freely and shared between threads.
///
/// # Examples
///
/// ```
/// use uri_encoder::{Param, QueryEncoder, UriParts};
///
/// let uri = UriParts::new("https", "example.com")
///     .with_path("/search results")
///     .with_query("lang=en");
/// let params = [Param::new("q", "fish & chips"), Param::bare("safe")];
///
/// let encoded = QueryEncoder::STRICT.encode(&uri, &params);
/// assert_eq!(encoded.path(), Some("/search%20results"));
/// assert_eq!(encoded.query(), Some("lang=en&q=fish%20%26%20chips&safe"));
/// assert_eq!(
///     encoded.to_string(),
///     "https://example.com/search%20results?lang=en&q=fish%20%26%20chips&safe"
/// );
///
/// let encoded = QueryEncoder::RAW.encode(&uri, &params);
/// assert_eq!(encoded.query(), Some("lang=en&q=fish & chips&safe"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct QueryEncoder {
    strategy: EncodingStrategy,
}

impl QueryEncoder {
    /// An encoder with the [`Strict`](EncodingStrategy::Strict) strategy.
    pub const STRICT: Self = Self::new(EncodingStrategy::Strict);

    /// An encoder with the [`Raw`](EncodingStrategy::Raw) strategy.
    pub const RAW: Self = Self::new(EncodingStrategy::Raw);

    /// Creates an encoder with the given strategy.
    #[must_use]
    pub const fn new(strategy: EncodingStrategy) -> Self {
        Self { strategy }
    }

    /// Creates an encoder with the strategy selected by the configuration.
    #[must_use]
    pub const fn from_config(config: &EncoderConfig) -> Self {
        Self::new(config.strategy())
    }

    /// Returns the strategy of this encoder.
    #[must_use]
    pub const fn strategy(&self) -> EncodingStrategy {
        self.strategy
    }

    /// Encodes the path of `uri` and combines its query with `params`.
    ///
    /// Returns a new `UriParts` with the scheme, userinfo, host and port
    /// of `uri` and the encoded path and query. An absent path stays absent.
    /// The query is absent if and only if `uri` has no non-empty query
    /// and `params` is empty.
    #[must_use]
    pub fn encode(&self, uri: &UriParts, params: &[Param]) -> UriParts {
        let path = uri
            .path()
            .map(|path| self.strategy.encode_path(path).into_owned());

        let query = match uri.query() {
            Some(query) if !query.is_empty() => {
                self.strategy.combine_query_and_params(Some(query), params)
            }
            _ if !params.is_empty() => self.strategy.combine_query_and_params(None, params),
            _ => None,
        };

        uri.with_path_and_query(path, query.map(Cow::into_owned))
    }
}

impl From<EncodingStrategy> for QueryEncoder {
    fn from(strategy: EncodingStrategy) -> Self {
        Self::new(strategy)
    }
}
