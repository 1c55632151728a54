use uri_encoder::{EncodingStrategy, Param, QueryEncoder, UriParts};

fn main() {
    let uri = UriParts::new("http", "example.com")
        .with_port(8080)
        .with_path("/search results/caf\u{e9}")
        .with_query("lang=en&sort=a b");
    let params = [
        Param::new("q", "fish & chips"),
        Param::bare("safe"),
        Param::new("expr", "1+1=2"),
    ];

    for strategy in [EncodingStrategy::Strict, EncodingStrategy::Raw] {
        let encoded = QueryEncoder::new(strategy).encode(&uri, &params);
        println!("{strategy}: {encoded}");
        println!("{encoded:#?}");
    }
}
