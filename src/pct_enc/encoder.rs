//! Percent-encoders for URI components.

use super::{table, Encoder, Table};

/// An encoder for the path component.
///
/// Existing percent-encoded octets are left as is.
#[derive(Clone, Copy, Debug)]
pub struct Path(());

/// An encoder for a whole query string.
///
/// The delimiters `'&'` and `'='` and existing percent-encoded octets
/// are left as is.
#[derive(Clone, Copy, Debug)]
pub struct Query(());

/// An encoder for a single name or value within a query string.
///
/// This is a sub-encoder of [`Query`].
#[derive(Clone, Copy, Debug)]
pub struct QueryElement(());

impl Encoder for Path {
    const TABLE: Table = table::PATH;
}

impl Encoder for Query {
    const TABLE: Table = table::QUERY;
}

impl Encoder for QueryElement {
    const TABLE: Table = table::QUERY_ELEMENT;
}
