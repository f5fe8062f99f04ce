/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use sha2::{Digest, Sha512};

/// Hashes a connection token the way the PDX identify endpoint expects it
///
/// The token is hashed with SHA-512 over its UTF-8 bytes and returned as a
/// lowercase hex string of 128 characters.
#[must_use]
pub fn connection_token_hash(connection_token: &str) -> String {
    hex::encode(Sha512::digest(connection_token.as_bytes()))
}
