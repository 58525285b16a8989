mod app;
mod base64;
mod error;
mod hash;
mod hex;
mod hmac;
mod mac;
mod payload;
mod sha1;
mod signer;

pub use app::{run, EXIT_ALGORITHM_UNAVAILABLE, EXIT_INVALID_ENCODING, EXIT_SUCCESS};
pub use base64::{base64_decode, base64_encode};
pub use error::{DecodeError, SignError};
pub use hash::Hasher;
pub use hex::{bytes_to_hex, hex_to_bytes};
pub use hmac::{Hmac, HmacSha1};
pub use mac::{InitialisedMac, Mac, MacAlgorithm, MAC_ALGORITHM_DEFAULT};
pub use payload::{Payload, BODY, GREETING, TOKEN};
pub use sha1::{Sha1, SHA1_LEN};
pub use signer::{sign, sign_line, sign_with};
