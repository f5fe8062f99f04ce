use mydex_client::utils::hashing::connection_token_hash;

#[test]
fn test_sha512_known_vector() {
    // FIPS 180-2 test vector for "abc"
    assert_eq!(
        connection_token_hash("abc"),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
}

#[test]
fn test_sha512_of_empty_string() {
    assert_eq!(
        connection_token_hash(""),
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
         47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
    );
}

#[test]
fn test_sample_connection_token_hash() {
    assert_eq!(
        connection_token_hash("abcdefghijklmnopqrstuvwxyz123456789"),
        "21ccb4a5be8ed466b65eb73cf0695881888a9391cf10b18bc321207bd9fd6e55\
         fa8f2e80c2f931fc42a84df00c6125a0773aa7395ad54ad84973271c92c5e3f5"
    );
}
