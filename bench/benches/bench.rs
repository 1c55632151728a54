use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uri_encoder::{pct_enc, Param, QueryEncoder, UriParts};

criterion_group!(
    benches,
    bench_enc_query_element,
    bench_enc_path_clean,
    bench_strict,
    bench_raw,
    bench_strict_many_params,
);
criterion_main!(benches);

const ENC_CASE: &str = "te😃a 测1`~!@试#$%st^&+=";

fn bench_enc_query_element(c: &mut Criterion) {
    c.bench_function("enc_query_element", |b| {
        b.iter(|| pct_enc::encode_query_element(black_box(ENC_CASE)))
    });
}

fn bench_enc_path_clean(c: &mut Criterion) {
    c.bench_function("enc_path_clean", |b| {
        b.iter(|| pct_enc::encode_path(black_box("/foo/bar/baz/index.html")))
    });
}

fn uri() -> UriParts {
    UriParts::new("https", "example.com")
        .with_path("/search results/page 1")
        .with_query("lang=en&sort=desc")
}

fn params(n: usize) -> Vec<Param> {
    (0..n)
        .map(|i| Param::new(format!("key {i}"), ENC_CASE))
        .collect()
}

fn bench_strict(c: &mut Criterion) {
    let (uri, params) = (uri(), params(4));
    c.bench_function("strict", |b| {
        b.iter(|| QueryEncoder::STRICT.encode(black_box(&uri), black_box(&params)))
    });
}

fn bench_raw(c: &mut Criterion) {
    let (uri, params) = (uri(), params(4));
    c.bench_function("raw", |b| {
        b.iter(|| QueryEncoder::RAW.encode(black_box(&uri), black_box(&params)))
    });
}

fn bench_strict_many_params(c: &mut Criterion) {
    let (uri, params) = (uri(), params(1000));
    c.bench_function("strict_many_params", |b| {
        b.iter(|| QueryEncoder::STRICT.encode(black_box(&uri), black_box(&params)))
    });
}
