//! Percent-encoding utilities.

pub mod encoder;
mod estring;
pub mod table;

pub use estring::EString;
pub use table::Table;

use alloc::{borrow::Cow, string::String};
use core::{iter::FusedIterator, marker::PhantomData, str};
use encoder::{Path, Query, QueryElement};
use ref_cast::{ref_cast_custom, RefCastCustom};

/// A trait used by [`EStr`] and [`EString`] to specify the table used for encoding.
///
/// # Sub-encoders
///
/// A sub-encoder `SubE` of `E` is an encoder such that `SubE::TABLE` is a [subset] of `E::TABLE`.
///
/// [subset]: Table::is_subset
pub trait Encoder: 'static {
    /// The table used for encoding.
    const TABLE: Table;
}

/// Percent-encoded string slices.
///
/// The owned counterpart of `EStr` is [`EString`].
///
/// The underlying string of an `EStr<E>` slice contains only characters
/// that `E::TABLE` [allows](Table::allows).
///
/// # Examples
///
/// Inspect the parameters of an encoded query:
///
/// ```
/// use uri_encoder::pct_enc::{encoder::Query, EStr};
///
/// let query = EStr::<Query>::new_or_panic("a=1&b&c=%20");
/// let pairs: Vec<_> = query
///     .split('&')
///     .map(|s| s.split_once('=').unwrap_or((s, EStr::EMPTY)))
///     .map(|(k, v)| (k.as_str(), v.as_str()))
///     .collect();
/// assert_eq!(pairs, [("a", "1"), ("b", ""), ("c", "%20")]);
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct EStr<E: Encoder> {
    encoder: PhantomData<E>,
    inner: str,
}

struct Assert<L: Encoder, R: Encoder> {
    _marker: PhantomData<(L, R)>,
}

impl<L: Encoder, R: Encoder> Assert<L, R> {
    const L_IS_SUB_ENCODER_OF_R: () = assert!(L::TABLE.is_subset(R::TABLE), "not a sub-encoder");
}

impl<E: Encoder> EStr<E> {
    const ASSERT_ALLOWS_PCT_ENCODED: () = assert!(
        E::TABLE.allows_pct_encoded(),
        "table does not allow percent-encoded octets"
    );

    /// Converts a string slice to an `EStr` slice assuming validity.
    #[ref_cast_custom]
    pub(crate) const fn new_validated(s: &str) -> &Self;

    /// An empty `EStr` slice.
    pub const EMPTY: &'static Self = Self::new_validated("");

    /// Converts a string slice to an `EStr` slice.
    ///
    /// # Panics
    ///
    /// Panics if the string contains any character not allowed by `E::TABLE`.
    /// For a non-panicking variant, use [`new`](Self::new).
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Self {
        match Self::new(s) {
            Some(s) => s,
            None => panic!("improperly encoded string"),
        }
    }

    /// Converts a string slice to an `EStr` slice, returning `None` if the conversion fails.
    #[must_use]
    pub const fn new(s: &str) -> Option<&Self> {
        if E::TABLE.validate(s.as_bytes()) {
            Some(Self::new_validated(s))
        } else {
            None
        }
    }

    /// Percent-encodes the given byte to an `EStr` slice.
    ///
    /// # Panics
    ///
    /// Panics at compile time if `E::TABLE` does not [allow percent-encoded octets].
    ///
    /// [allow percent-encoded octets]: Table::allows_pct_encoded
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_encoder::pct_enc::{encoder::Query, EStr};
    ///
    /// assert_eq!(EStr::<Query>::encode_byte(b'&'), "%26");
    /// ```
    #[must_use]
    pub fn encode_byte(x: u8) -> &'static Self {
        () = Self::ASSERT_ALLOWS_PCT_ENCODED;
        Self::new_validated(encode_byte(x))
    }

    /// Yields the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the length of the `EStr` slice in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks whether the `EStr` slice is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over subslices of the `EStr` slice separated by the given delimiter.
    ///
    /// # Panics
    ///
    /// Panics if the delimiter is not a [reserved] character.
    ///
    /// [reserved]: https://datatracker.ietf.org/doc/html/rfc3986#section-2.2
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_encoder::pct_enc::{encoder::Query, EStr};
    ///
    /// assert!(EStr::<Query>::new_or_panic("a&b&c").split('&').eq(["a", "b", "c"]));
    /// assert!(EStr::<Query>::EMPTY.split('&').eq([""]));
    /// ```
    pub fn split(&self, delim: char) -> Split<'_, E> {
        assert!(
            table::RESERVED.allows(delim),
            "splitting with non-reserved character"
        );
        Split {
            inner: self.inner.split(delim),
            encoder: PhantomData,
        }
    }

    /// Splits the `EStr` slice on the first occurrence of the given delimiter and
    /// returns prefix before delimiter and suffix after delimiter.
    ///
    /// Returns `None` if the delimiter is not found.
    ///
    /// # Panics
    ///
    /// Panics if the delimiter is not a [reserved] character.
    ///
    /// [reserved]: https://datatracker.ietf.org/doc/html/rfc3986#section-2.2
    #[must_use]
    pub fn split_once(&self, delim: char) -> Option<(&Self, &Self)> {
        assert!(
            table::RESERVED.allows(delim),
            "splitting with non-reserved character"
        );
        self.inner
            .split_once(delim)
            .map(|(a, b)| (Self::new_validated(a), Self::new_validated(b)))
    }
}

impl<E: Encoder> AsRef<str> for EStr<E> {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl<E: Encoder> PartialEq for EStr<E> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<E: Encoder> PartialEq<str> for EStr<E> {
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl<E: Encoder> PartialEq<EStr<E>> for str {
    fn eq(&self, other: &EStr<E>) -> bool {
        self == &other.inner
    }
}

impl<E: Encoder> Eq for EStr<E> {}

pub(crate) fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

/// An iterator used to percent-encode a string slice.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub(crate) struct Encode<'s> {
    table: Table,
    source: &'s str,
    to_enc: &'s [u8],
}

impl<'s> Encode<'s> {
    pub(crate) fn new(table: Table, source: &'s str) -> Self {
        Self {
            table,
            source,
            to_enc: &[],
        }
    }
}

/// An item returned by the [`Encode`] iterator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EncodedChunk<'a> {
    /// An unencoded subslice.
    Unencoded(&'a str),
    /// A byte, percent-encoded (for example, `0x20` encoded as `"%20"`).
    PctEncoded(&'static str),
}

impl<'a> EncodedChunk<'a> {
    pub(crate) fn as_str(self) -> &'a str {
        match self {
            Self::Unencoded(s) | Self::PctEncoded(s) => s,
        }
    }
}

impl<'a> Iterator for Encode<'a> {
    type Item = EncodedChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let [x, rem @ ..] = self.to_enc {
            self.to_enc = rem;
            return Some(EncodedChunk::PctEncoded(encode_byte(*x)));
        }

        if self.source.is_empty() {
            return None;
        }

        let mut iter = self.source.char_indices();

        let first_unallowed_i = iter
            .find_map(|(i, ch)| (!self.table.allows(ch)).then_some(i))
            .unwrap_or(self.source.len());

        let next_allowed_i = iter
            .find_map(|(i, ch)| self.table.allows(ch).then_some(i))
            .unwrap_or(self.source.len());

        let unallowed = &self.source.as_bytes()[first_unallowed_i..next_allowed_i];

        if first_unallowed_i == 0 {
            // Non-empty, since the first character is not allowed.
            let (x, rem) = match unallowed {
                [x, rem @ ..] => (*x, rem),
                [] => unreachable!(),
            };
            self.to_enc = rem;
            self.source = &self.source[next_allowed_i..];

            Some(EncodedChunk::PctEncoded(encode_byte(x)))
        } else {
            let allowed = &self.source[..first_unallowed_i];
            self.to_enc = unallowed;
            self.source = &self.source[next_allowed_i..];

            Some(EncodedChunk::Unencoded(allowed))
        }
    }
}

impl FusedIterator for Encode<'_> {}

/// Percent-encodes a string with the given table.
///
/// Borrows the input when every character is allowed by the table.
pub(crate) fn encode_with(table: Table, s: &str) -> Cow<'_, str> {
    let Some(i) = table.first_unallowed(s.as_bytes()) else {
        return Cow::Borrowed(s);
    };

    // Each unallowed byte grows into three.
    let mut buf = String::with_capacity(s.len() + (s.len() - i) * 2);
    buf.push_str(&s[..i]);
    for chunk in Encode::new(table, &s[i..]) {
        buf.push_str(chunk.as_str());
    }
    Cow::Owned(buf)
}

/// Percent-encodes a path.
///
/// `'/'` is kept as the segment separator and `'%'` is kept so that
/// existing percent-encoded octets are not encoded twice.
///
/// # Examples
///
/// ```
/// use uri_encoder::pct_enc;
///
/// assert_eq!(pct_enc::encode_path("/a b/c%20d"), "/a%20b/c%20d");
/// assert_eq!(pct_enc::encode_path("/caf\u{e9}?"), "/caf%C3%A9%3F");
/// ```
#[must_use]
pub fn encode_path(s: &str) -> Cow<'_, str> {
    encode_with(Path::TABLE, s)
}

/// Percent-encodes a whole query string.
///
/// The delimiters `'&'` and `'='` are kept, and so is `'%'`.
///
/// # Examples
///
/// ```
/// use uri_encoder::pct_enc;
///
/// assert_eq!(pct_enc::encode_query("a=1&b=x y"), "a=1&b=x%20y");
/// assert_eq!(pct_enc::encode_query("q=#"), "q=%23");
/// ```
#[must_use]
pub fn encode_query(s: &str) -> Cow<'_, str> {
    encode_with(Query::TABLE, s)
}

/// Percent-encodes a single name or value of a query parameter.
///
/// Everything but `ALPHA / DIGIT / "-" / "." / "_" / "*"` is encoded,
/// including `'&'`, `'='`, `'+'` and `'%'`. Space is encoded as `"%20"`.
///
/// # Examples
///
/// ```
/// use uri_encoder::pct_enc;
///
/// assert_eq!(pct_enc::encode_query_element("v&al=1+1"), "v%26al%3D1%2B1");
/// assert_eq!(pct_enc::encode_query_element("na me"), "na%20me");
/// ```
#[must_use]
pub fn encode_query_element(s: &str) -> Cow<'_, str> {
    encode_with(QueryElement::TABLE, s)
}

/// An iterator over subslices of an [`EStr`] slice separated by a delimiter.
///
/// This struct is created by [`EStr::split`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Split<'a, E: Encoder> {
    inner: str::Split<'a, char>,
    encoder: PhantomData<E>,
}

impl<'a, E: Encoder> Iterator for Split<'a, E> {
    type Item = &'a EStr<E>;

    fn next(&mut self) -> Option<&'a EStr<E>> {
        self.inner.next().map(EStr::new_validated)
    }
}

impl<'a, E: Encoder> DoubleEndedIterator for Split<'a, E> {
    fn next_back(&mut self) -> Option<&'a EStr<E>> {
        self.inner.next_back().map(EStr::new_validated)
    }
}

impl<E: Encoder> FusedIterator for Split<'_, E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn encode_chunks() {
        let chunks: Vec<_> = Encode::new(table::QUERY_ELEMENT, "a b\u{e9}c").collect();
        assert_eq!(
            chunks,
            [
                EncodedChunk::Unencoded("a"),
                EncodedChunk::PctEncoded("%20"),
                EncodedChunk::Unencoded("b"),
                EncodedChunk::PctEncoded("%C3"),
                EncodedChunk::PctEncoded("%A9"),
                EncodedChunk::Unencoded("c"),
            ]
        );
    }

    #[test]
    fn encode_borrows_when_clean() {
        assert!(matches!(encode_path("/a/b"), Cow::Borrowed("/a/b")));
        assert!(matches!(encode_query_element(""), Cow::Borrowed("")));
        assert!(matches!(encode_query_element("a b"), Cow::Owned(_)));
    }

    #[test]
    fn encode_byte_table() {
        assert_eq!(encode_byte(0), "%00");
        assert_eq!(encode_byte(b' '), "%20");
        assert_eq!(encode_byte(0xff), "%FF");
    }
}
