//! Byte pattern tables used for percent-encoding.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 5234] where the rule comes from [RFC 3986].
//!
//! [RFC 5234]: https://datatracker.ietf.org/doc/html/rfc5234
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986

const MASK_PCT: u64 = 1 << b'%';

/// A table specifying the ASCII characters left unencoded in a string.
///
/// Every character not allowed by a table is percent-encoded as the
/// `%XX` triples of its UTF-8 bytes. Non-ASCII characters are never allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table(u64, u64);

impl Table {
    /// Creates a table that only allows the given unencoded bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII or equals `b'%'`.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(
                !matches!(cur, b'%' | 128..),
                "cannot allow non-ASCII byte or %"
            );
            table |= 1u128.wrapping_shl(*cur as u32);
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the characters allowed
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Marks this table as leaving the percent character `'%'` as is.
    ///
    /// Encoding with such a table never re-encodes an existing
    /// percent-encoded octet. Note that a lone `'%'` is kept as well.
    #[must_use]
    pub const fn or_pct_encoded(self) -> Self {
        Self(self.0 | MASK_PCT, self.1)
    }

    /// Subtracts from this table.
    ///
    /// Returns a new table that allows all the characters allowed
    /// by `self` but not allowed by `other`.
    #[must_use]
    pub const fn sub(self, other: Self) -> Self {
        Self(self.0 & !other.0, self.1 & !other.1)
    }

    /// Checks whether the table is a subset of another, i.e., `other`
    /// allows at least all the characters allowed by `self`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0 && self.1 & other.1 == self.1
    }

    #[inline]
    pub(crate) const fn allows_ascii(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0
        } else if x < 128 {
            self.1
        } else {
            0
        };
        table & 1u64.wrapping_shl(x as u32) != 0
    }

    /// Checks whether the given unencoded character is allowed by the table.
    #[inline]
    #[must_use]
    pub const fn allows(self, ch: char) -> bool {
        ch.is_ascii() && self.allows_ascii(ch as u8)
    }

    /// Checks whether `'%'` is left as is by the table.
    #[inline]
    #[must_use]
    pub const fn allows_pct_encoded(self) -> bool {
        self.0 & MASK_PCT != 0
    }

    /// Returns the byte index of the first character not allowed by the table.
    pub(crate) const fn first_unallowed(self, s: &[u8]) -> Option<usize> {
        let mut i = 0;
        while i < s.len() {
            if !self.allows_ascii(s[i]) {
                return Some(i);
            }
            i += 1;
        }
        None
    }

    /// Validates the given string with the table.
    pub(crate) const fn validate(self, s: &[u8]) -> bool {
        self.first_unallowed(s).is_none()
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `DIGIT = %x30-39`
pub const DIGIT: Table = new(b"0123456789");

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub const UNRESERVED: Table = ALPHA.or(DIGIT).or(new(b"-._~"));

/// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
pub const GEN_DELIMS: Table = new(b":/?#[]@");

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///             / "*" / "+" / "," / ";" / "="`
pub const SUB_DELIMS: Table = new(b"!$&'()*+,;=");

/// `reserved = gen-delims / sub-delims`
pub const RESERVED: Table = GEN_DELIMS.or(SUB_DELIMS);

/// `pchar = unreserved / sub-delims / ":" / "@"`, without `pct-encoded`.
pub const PCHAR: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":@"));

/// `path = *( pchar / "/" )`, with `'%'` left as is.
pub const PATH: Table = PCHAR.or(new(b"/")).or_pct_encoded();

/// `query = *( pchar / "/" / "?" )`, with `'%'` left as is.
pub const QUERY: Table = PATH.or(new(b"?"));

/// `ALPHA / DIGIT / "-" / "." / "_" / "*"`
///
/// These are the characters left unencoded in a name or a value
/// of a query parameter, as in `application/x-www-form-urlencoded`.
/// Notably, `'&'`, `'='` and `'+'` are all encoded.
pub const QUERY_ELEMENT: Table = ALPHA.or(DIGIT).or(new(b"-._*"));
