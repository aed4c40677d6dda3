//! Session token generation

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use rand::rngs::OsRng;

use crate::models::SessionToken;

/// Fewest random bytes a token may carry
pub const MIN_TOKEN_BYTES: usize = 16;

/// Generate an unguessable session token
///
/// `bytes` of OS randomness (at least [`MIN_TOKEN_BYTES`]), base64url-encoded
/// without padding.
pub fn generate_session_token(bytes: usize) -> SessionToken {
    let mut buf = vec![0u8; bytes.max(MIN_TOKEN_BYTES)];
    OsRng.fill_bytes(&mut buf);
    SessionToken::new(URL_SAFE_NO_PAD.encode(buf))
}
