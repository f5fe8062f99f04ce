use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mydex_client::application::auth::basic_auth_header;
use percent_encoding::percent_decode_str;

fn decode_basic(header: &str) -> (String, String) {
    let encoded = header.strip_prefix("Basic ").expect("Basic prefix");
    let raw = String::from_utf8(STANDARD.decode(encoded).expect("valid base64")).unwrap();
    let (id, secret) = raw.split_once(':').expect("colon separator");
    (
        percent_decode_str(id).decode_utf8().unwrap().into_owned(),
        percent_decode_str(secret).decode_utf8().unwrap().into_owned(),
    )
}

#[test]
fn test_basic_auth_header_sample_credentials() {
    assert_eq!(
        basic_auth_header("abcd1234-abcd-1234-abcd-123456abcdef", "CHANGEME"),
        "Basic YWJjZDEyMzQtYWJjZC0xMjM0LWFiY2QtMTIzNDU2YWJjZGVmOkNIQU5HRU1F"
    );
}

#[test]
fn test_basic_auth_header_escapes_reserved_characters() {
    // "my client" / "s:c/r+t" become "my%20client:s%3Ac%2Fr%2Bt" before base64
    assert_eq!(
        basic_auth_header("my client", "s:c/r+t"),
        "Basic bXklMjBjbGllbnQ6cyUzQWMlMkZyJTJCdA=="
    );
}

#[test]
fn test_basic_auth_header_keeps_unreserved_characters() {
    let header = basic_auth_header("a-b.c_d~e", "x");
    let encoded = header.strip_prefix("Basic ").unwrap();
    let raw = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
    assert_eq!(raw, "a-b.c_d~e:x");
}

#[test]
fn test_basic_auth_header_round_trips_to_credentials() {
    let cases = [
        ("client", "secret"),
        ("id:with:colons", "p@ss w/rd?&="),
        ("ünïcødé", "秘密"),
        ("", ""),
    ];
    for (id, secret) in cases {
        let (decoded_id, decoded_secret) = decode_basic(&basic_auth_header(id, secret));
        assert_eq!(decoded_id, id);
        assert_eq!(decoded_secret, secret);
    }
}
