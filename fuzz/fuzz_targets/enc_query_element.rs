#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_encoder::pct_enc::{encode_query_element, encoder::QueryElement, Encoder};

fuzz_target!(|data: &str| {
    let enc = encode_query_element(data);

    let mut decoded = Vec::with_capacity(data.len());
    let mut bytes = enc.bytes();
    while let Some(x) = bytes.next() {
        if x == b'%' {
            let hi = bytes.next().expect("incomplete octet");
            let lo = bytes.next().expect("incomplete octet");
            let hex = [hi, lo];
            let hex = std::str::from_utf8(&hex).unwrap();
            decoded.push(u8::from_str_radix(hex, 16).unwrap());
        } else {
            assert!(QueryElement::TABLE.allows(x as char));
            decoded.push(x);
        }
    }
    assert_eq!(decoded, data.as_bytes());
});
