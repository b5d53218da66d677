use super::sources::decode_source;

#[test]
fn test_decode_utf8() {
    assert_eq!(decode_source(b"let a = 1;".to_vec()).expect("utf-8"), "let a = 1;");
}

#[test]
fn test_utf8_byte_order_mark_is_kept() {
    let bytes = b"\xEF\xBB\xBFlet a;".to_vec();
    assert_eq!(decode_source(bytes).expect("utf-8"), "\u{feff}let a;");
}

#[test]
fn test_decode_utf16() {
    let mut little = vec![0xFF, 0xFE];
    little.extend("x;".encode_utf16().flat_map(u16::to_le_bytes));
    assert_eq!(decode_source(little).expect("utf-16le"), "x;");

    let mut big = vec![0xFE, 0xFF];
    big.extend("y;".encode_utf16().flat_map(u16::to_be_bytes));
    assert_eq!(decode_source(big).expect("utf-16be"), "y;");
}

#[test]
fn test_invalid_utf8_is_an_error() {
    let err = decode_source(vec![b'a', 0xC3, 0x28]).expect_err("invalid");
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}
