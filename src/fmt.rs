use crate::{
    error::ParseStrategyError,
    pct_enc::{EStr, EString, Encoder},
    EncodingStrategy, UriParts,
};
use core::fmt;

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown encoding strategy {:?}, expected \"strict\" or \"raw\"",
            self.input
        )
    }
}

impl fmt::Display for EncodingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<E: Encoder> fmt::Debug for EStr<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<E: Encoder> fmt::Display for EStr<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl<E: Encoder> fmt::Debug for EString<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<E: Encoder> fmt::Display for EString<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

/// Renders `scheme://[userinfo@]host[:port][path][?query]`.
impl fmt::Display for UriParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://", self.scheme())?;
        if let Some(user_info) = self.user_info() {
            write!(f, "{user_info}@")?;
        }
        f.write_str(self.host())?;
        if let Some(port) = self.port() {
            write!(f, ":{port}")?;
        }
        if let Some(path) = self.path() {
            f.write_str(path)?;
        }
        if let Some(query) = self.query() {
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}
