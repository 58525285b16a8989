use crate::{sign_line, sign_with, Payload, GREETING};

use std::io::Write;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_INVALID_ENCODING: u8 = 1;
pub const EXIT_ALGORITHM_UNAVAILABLE: u8 = 3;

/// Print the greeting and the `sign:` line for `body_b64` signed under
/// `token`, returning the process exit status.
pub fn run(
    token: &str,
    body_b64: &str,
    algorithm: &str,
    out: &mut impl Write,
) -> std::io::Result<u8> {
    writeln!(out, "{GREETING}")?;

    let payload = match Payload::new(token, body_b64) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("cannot decode body: {e}");
            return Ok(EXIT_INVALID_ENCODING);
        }
    };

    let result = sign_with(algorithm, payload.key(), payload.message());
    writeln!(out, "{}", sign_line(&result))?;

    // Decoding already succeeded, so only the MAC can fail here.
    if let Err(e) = result {
        tracing::error!("signing failed: {e}");
        return Ok(EXIT_ALGORITHM_UNAVAILABLE);
    }
    Ok(EXIT_SUCCESS)
}
