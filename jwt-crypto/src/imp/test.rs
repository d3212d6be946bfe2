use rstest::rstest;

use crate::{Encoding, EncodingError, HashAlgorithm, Hasher};

#[rstest]
#[case(Encoding::Base64, b"f", "Zg==")]
#[case(Encoding::Base64, b"fo", "Zm8=")]
#[case(Encoding::Base64, b"foo", "Zm9v")]
#[case(Encoding::Base64, &[0xfb, 0xff], "+/8=")]
#[case(Encoding::Base64Url, b"f", "Zg")]
#[case(Encoding::Base64Url, b"fo", "Zm8")]
#[case(Encoding::Base64Url, b"foo", "Zm9v")]
#[case(Encoding::Base64Url, &[0xfb, 0xff], "-_8")]
#[case(Encoding::Base64Url, &[0xfb, 0xff, 0xbf], "-_-_")]
fn test_encode_decode(
    #[case] encoding: Encoding,
    #[case] input: &[u8],
    #[case] expected: &str,
) {
    let encoded = encoding.encode(input).unwrap();
    assert_eq!(encoded, expected);

    let decoded = encoding.decode(&encoded).unwrap();
    assert_eq!(decoded, input);
}

#[rstest]
fn test_round_trip_all_padding_lengths(
    #[values(Encoding::Base64, Encoding::Base64Url)] encoding: Encoding,
    #[values("", "a", "ab", "abc", "abcd", "{\"sub\":\"1234567890\"}", "zażółć")] input: &str,
) {
    let encoded = encoding.encode_str(input).unwrap();
    assert_eq!(encoding.decode_to_string(&encoded).unwrap(), input);
}

#[test]
fn test_url_encoding_has_no_padding_or_standard_symbols() {
    let encoded = Encoding::Base64Url
        .encode(&[0xfb, 0xef, 0xbe, 0xff, 0x00])
        .unwrap();

    assert!(!encoded.contains(['+', '/', '=']));
}

#[test]
fn test_decode_malformed() {
    assert!(matches!(
        Encoding::Base64.decode("not base64!"),
        Err(EncodingError::NonBase64String(_))
    ));
    assert!(matches!(
        Encoding::Base64Url.decode("a.b"),
        Err(EncodingError::NonBase64String(_))
    ));
}

#[test]
fn test_decode_to_string_non_utf8() {
    let encoded = Encoding::Base64Url.encode(&[0xff, 0xfe]).unwrap();

    assert_eq!(
        Encoding::Base64Url.decode_to_string(&encoded),
        Err(EncodingError::NonUtf8String)
    );
}

#[test]
fn test_encoding_names() {
    assert_eq!(Encoding::default(), Encoding::Base64Url);
    assert_eq!(Encoding::Base64.to_string(), "BASE64");
    assert_eq!("BASE64URL".parse::<Encoding>().unwrap(), Encoding::Base64Url);
}

#[rstest]
#[case(
    HashAlgorithm::Sha256,
    "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
)]
#[case(
    HashAlgorithm::Sha384,
    "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
)]
#[case(
    HashAlgorithm::Sha512,
    "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
)]
fn test_hash_known_answers(#[case] algorithm: HashAlgorithm, #[case] expected: &str) {
    let digest = algorithm.hash(b"abc").unwrap();

    assert_eq!(hex::encode(digest), expected);
}

#[test]
fn test_hash_empty_input() {
    let hasher: &dyn Hasher = &HashAlgorithm::Sha256;

    assert_eq!(
        hex::encode(hasher.hash(b"").unwrap()),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}
