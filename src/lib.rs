#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    clippy::semicolon_if_nothing_returned
)]
#![cfg_attr(not(feature = "std"), no_std)]

//! Percent-encoding of URI paths and query parameters for HTTP clients.
//!
//! An HTTP client holds a [`UriParts`] for the request target and a list of
//! extra query [`Param`]s. A [`QueryEncoder`] turns both into the [`UriParts`]
//! that is actually sent, under one of two [`EncodingStrategy`]s:
//!
//! - [`Strict`] percent-encodes the path, the existing query and every
//!   parameter name and value.
//! - [`Raw`] leaves everything as is and only joins the query and the
//!   parameters, for callers that encode their data themselves.
//!
//! ```
//! use uri_encoder::{EncoderConfig, Param, QueryEncoder, UriParts};
//!
//! let encoder = QueryEncoder::from_config(&EncoderConfig::default());
//!
//! let uri = UriParts::new("http", "example.com").with_path("/a b");
//! let encoded = encoder.encode(&uri, &[Param::new("na me", "v&al")]);
//! assert_eq!(encoded.to_string(), "http://example.com/a%20b?na%20me=v%26al");
//! ```
//!
//! The percent-encoding primitives are exposed in the [`pct_enc`] module.
//!
//! [`Strict`]: EncodingStrategy::Strict
//! [`Raw`]: EncodingStrategy::Raw
//!
//! # Feature flags
//!
//! All features except `std` are disabled by default.
//!
//! - `std`: Enables `std` support. This includes [`Error`] implementations.
//!
//! - `impl-error`: Enables [`Error`] implementations (enabled by `std`).
//!
//! - `serde`: Enables [`serde`] support. This includes `Serialize` and `Deserialize`
//!   implementations on [`UriParts`], [`Param`], [`EncodingStrategy`] and [`EncoderConfig`].
//!
//! [`Error`]: core::error::Error
//! [`serde`]: https://docs.rs/serde

extern crate alloc;

#[cfg(feature = "impl-error")]
use core::error::Error;

pub mod pct_enc;

mod config;
mod encoder;
mod error;
mod fmt;
mod param;
mod strategy;
mod uri;

pub use config::EncoderConfig;
pub use encoder::QueryEncoder;
pub use error::ParseStrategyError;
pub use param::Param;
pub use strategy::EncodingStrategy;
pub use uri::UriParts;
