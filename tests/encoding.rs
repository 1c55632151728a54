use uri_encoder::pct_enc::{
    encode_path, encode_query, encode_query_element,
    encoder::{Path, Query, QueryElement},
    EStr, EString, Encoder, Table,
};

const RAW: &str = "te😃a 测1`~!@试#$%st^&+=";

#[test]
fn encode() {
    assert_eq!(
        encode_query_element(RAW),
        "te%F0%9F%98%83a%20%E6%B5%8B1%60%7E%21%40%E8%AF%95%23%24%25st%5E%26%2B%3D"
    );
    assert_eq!(
        encode_query(RAW),
        "te%F0%9F%98%83a%20%E6%B5%8B1%60~!@%E8%AF%95%23$%st%5E&+="
    );
    assert_eq!(
        encode_path(RAW),
        "te%F0%9F%98%83a%20%E6%B5%8B1%60~!@%E8%AF%95%23$%st%5E&+="
    );
    assert_eq!(encode_path("/?"), "/%3F");
    assert_eq!(encode_query("/?"), "/?");
}

#[test]
fn estring() {
    let mut buf = EString::<Query>::with_capacity(16);
    assert!(buf.is_empty());
    assert!(buf.capacity() >= 16);

    buf.encode_str::<Query>("a=1 2");
    buf.push('&');
    buf.encode_str::<QueryElement>("b=&");
    buf.push('&');
    assert_eq!(buf, "a=1%202&b%3D%26&");

    assert_eq!(buf.pop(), Some('&'));
    assert_eq!(buf.as_estr(), EStr::<Query>::new_or_panic("a=1%202&b%3D%26"));
    assert!(buf.split('&').eq(["a=1%202", "b%3D%26"]));

    buf.push_estr(EStr::encode_byte(b'#'));
    assert_eq!(buf.to_string(), "a=1%202&b%3D%26%23");
    assert_eq!(format!("{buf:?}"), "\"a=1%202&b%3D%26%23\"");

    buf.clear();
    assert_eq!(buf.into_string(), "");
}

#[test]
fn estring_compare() {
    let mut a = EString::<Query>::new();
    a.encode_str::<QueryElement>("x y");
    let mut b = a.clone();
    assert_eq!(a, b);

    b.push('&');
    assert_ne!(a, b);
    assert_eq!(AsRef::<str>::as_ref(&b), "x%20y&");
    assert_eq!(AsRef::<EStr<Query>>::as_ref(&a), "x%20y");
    assert_eq!(*"x%20y", *a.as_estr());
}

#[test]
#[should_panic = "table does not allow the char"]
fn push_unallowed() {
    EString::<Path>::new().push('?');
}

#[test]
fn estr_new() {
    assert!(EStr::<Path>::new("/a/%20").is_some());
    assert!(EStr::<Path>::new("/a b").is_none());
    assert!(EStr::<QueryElement>::new("a%20").is_none());
    assert!(EStr::<Query>::EMPTY.is_empty());

    let (k, v) = EStr::<Query>::new_or_panic("k=v=w").split_once('=').unwrap();
    assert_eq!(k, "k");
    assert_eq!(v, "v=w");
    assert_eq!(v.len(), 3);
}

#[test]
#[should_panic = "splitting with non-reserved character"]
fn split_unreserved() {
    let _ = EStr::<Query>::new_or_panic("a-b").split('-');
}

#[test]
fn custom_encoder() {
    struct PathSegment;

    impl Encoder for PathSegment {
        const TABLE: Table = Path::TABLE.sub(Table::new(b"/"));
    }

    let mut path = EString::<Path>::new();
    path.push('/');
    path.encode_str::<PathSegment>("foo/bar");
    assert_eq!(path, "/foo%2Fbar");
}
