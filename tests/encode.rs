use uri_encoder::{EncoderConfig, EncodingStrategy, Param, QueryEncoder, UriParts};

const STRATEGIES: [EncodingStrategy; 2] = [EncodingStrategy::Strict, EncodingStrategy::Raw];

fn base() -> UriParts {
    UriParts::new("http", "example.com")
}

#[test]
fn empty_input() {
    for strategy in STRATEGIES {
        let out = QueryEncoder::new(strategy).encode(&base(), &[]);
        assert_eq!(out, base());
        assert_eq!(out.path(), None);
        assert_eq!(out.query(), None);
        assert_eq!(out.to_string(), "http://example.com");
    }
}

#[test]
fn empty_query_is_absent() {
    for strategy in STRATEGIES {
        let uri = base().with_path("/").with_query("");
        let out = QueryEncoder::new(strategy).encode(&uri, &[]);
        assert_eq!(out.query(), None);
        assert_eq!(out.to_string(), "http://example.com/");

        let out = QueryEncoder::new(strategy).encode(&uri, &[Param::new("a", "1")]);
        assert_eq!(out.query(), Some("a=1"));
    }
}

#[test]
fn keeps_other_components() {
    let uri = UriParts::new("https", "[::1]")
        .with_user_info("us er")
        .with_port(8443)
        .with_path("/p")
        .with_query("q");

    for strategy in STRATEGIES {
        let out = QueryEncoder::new(strategy).encode(&uri, &[Param::bare("x")]);
        assert_eq!(out.scheme(), "https");
        assert_eq!(out.user_info(), Some("us er"));
        assert_eq!(out.host(), "[::1]");
        assert_eq!(out.port(), Some(8443));
        assert_eq!(out.path(), Some("/p"));
        assert_eq!(out.query(), Some("q&x"));
    }
    // The input is left untouched.
    assert_eq!(uri.query(), Some("q"));
}

#[test]
fn strict() {
    let e = QueryEncoder::STRICT;

    let out = e.encode(&base().with_path("/a b"), &[]);
    assert_eq!(out.path(), Some("/a%20b"));
    assert_eq!(out.query(), None);

    let out = e.encode(&base(), &[Param::new("na me", "v&al")]);
    assert_eq!(out.path(), None);
    assert_eq!(out.query(), Some("na%20me=v%26al"));

    let out = e.encode(
        &base().with_path("/caf\u{e9}/men\u{fc}").with_query("x=1 2"),
        &[Param::new("k", "a=b+c"), Param::bare("flag")],
    );
    assert_eq!(out.path(), Some("/caf%C3%A9/men%C3%BC"));
    assert_eq!(out.query(), Some("x=1%202&k=a%3Db%2Bc&flag"));
    assert_eq!(
        out.to_string(),
        "http://example.com/caf%C3%A9/men%C3%BC?x=1%202&k=a%3Db%2Bc&flag"
    );
}

#[test]
fn raw() {
    let e = QueryEncoder::RAW;

    let out = e.encode(
        &base().with_path("/a b").with_query("foo=bar"),
        &[Param::new("baz", "qux")],
    );
    assert_eq!(out.path(), Some("/a b"));
    assert_eq!(out.query(), Some("foo=bar&baz=qux"));

    let out = e.encode(&base(), &[Param::bare("a"), Param::new("b", "2")]);
    assert_eq!(out.query(), Some("a&b=2"));

    let out = e.encode(&base().with_query("%zz&a"), &[]);
    assert_eq!(out.query(), Some("%zz&a"));
}

#[test]
fn from_config() {
    let e = QueryEncoder::from_config(&EncoderConfig::default());
    assert_eq!(e, QueryEncoder::STRICT);
    assert_eq!(QueryEncoder::default(), QueryEncoder::STRICT);

    let e = QueryEncoder::from_config(&EncoderConfig {
        disable_url_encoding: true,
    });
    assert_eq!(e.strategy(), EncodingStrategy::Raw);
    assert_eq!(QueryEncoder::from(EncodingStrategy::Raw), e);
}

#[test]
fn shared_between_threads() {
    let e = QueryEncoder::STRICT;
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let uri = UriParts::new("http", "example.com").with_path("/a b");
                e.encode(&uri, &[Param::new("i", i.to_string())])
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let out = handle.join().unwrap();
        assert_eq!(out.path(), Some("/a%20b"));
        assert_eq!(out.query(), Some(&*format!("i={i}")));
    }
}
