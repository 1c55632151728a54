#![no_main]
use libfuzzer_sys::{
    arbitrary::{self, Arbitrary},
    fuzz_target,
};
use uri_encoder::{
    pct_enc::{encoder::Query, EStr},
    EncodingStrategy, Param, QueryEncoder, UriParts,
};

#[derive(Arbitrary, Debug)]
struct Input {
    raw: bool,
    path: Option<String>,
    query: Option<String>,
    params: Vec<(String, Option<String>)>,
}

fuzz_target!(|input: Input| {
    let strategy = EncodingStrategy::from_disable_url_encoding(input.raw);

    let mut uri = UriParts::new("http", "example.com");
    if let Some(path) = &input.path {
        uri = uri.with_path(path);
    }
    if let Some(query) = &input.query {
        uri = uri.with_query(query);
    }
    let params: Vec<Param> = input
        .params
        .iter()
        .map(|(name, value)| Param::optional(name, value.as_deref()))
        .collect();

    let out = QueryEncoder::new(strategy).encode(&uri, &params);

    assert_eq!(out.path().is_some(), input.path.is_some());
    let has_query = input.query.as_deref().is_some_and(|q| !q.is_empty());
    assert_eq!(out.query().is_some(), has_query || !params.is_empty());

    let Some(query) = out.query() else { return };
    match strategy {
        EncodingStrategy::Strict => {
            let query = EStr::<Query>::new(query).expect("strict output must be encoded");
            // Encoded names and values never contain '&' or '=', so the
            // last segments map one-to-one onto the parameters.
            let prefix = usize::from(has_query);
            assert!(query.split('&').count() >= params.len() + prefix);
            for (seg, param) in query.split('&').rev().zip(params.iter().rev()) {
                assert_eq!(seg.split_once('=').is_some(), param.value().is_some());
            }
        }
        EncodingStrategy::Raw => {
            if params.is_empty() {
                assert_eq!(Some(query), input.query.as_deref());
            }
        }
    }
});
