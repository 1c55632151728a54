use crate::EncodingStrategy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Encoding options of an HTTP client.
///
/// Every field has a default, so a partial configuration can be
/// deserialized when the `serde` feature is enabled.
///
/// # Examples
///
/// ```
/// use uri_encoder::{EncoderConfig, EncodingStrategy};
///
/// let config = EncoderConfig::default();
/// assert_eq!(config.strategy(), EncodingStrategy::Strict);
///
/// let config = EncoderConfig { disable_url_encoding: true };
/// assert_eq!(config.strategy(), EncodingStrategy::Raw);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct EncoderConfig {
    /// Whether the path and the query are sent as is.
    ///
    /// Set this when the caller already percent-encodes everything.
    pub disable_url_encoding: bool,
}

impl EncoderConfig {
    /// Returns the strategy selected by this configuration.
    #[must_use]
    pub const fn strategy(&self) -> EncodingStrategy {
        EncodingStrategy::from_disable_url_encoding(self.disable_url_encoding)
    }
}
