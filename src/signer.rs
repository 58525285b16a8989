use crate::{bytes_to_hex, Mac, SignError, MAC_ALGORITHM_DEFAULT};

const SIGN_PREFIX: &str = "sign:";
const SIGN_SENTINEL: &str = "null";

/// Sign `message` with HMAC-SHA1 under `key`, returning the lowercase hex
/// digest.
pub fn sign(key: &[u8], message: &[u8]) -> Result<String, SignError> {
    sign_with(MAC_ALGORITHM_DEFAULT, key, message)
}

pub fn sign_with(algorithm: &str, key: &[u8], message: &[u8]) -> Result<String, SignError> {
    let mac = Mac::get_instance(algorithm)?.init(key)?;
    Ok(bytes_to_hex(&mac.do_final(message)))
}

/// Render the `sign:` output line. Any failure renders as the `null`
/// sentinel.
pub fn sign_line(result: &Result<String, SignError>) -> String {
    match result {
        Ok(hex) => format!("{SIGN_PREFIX}{hex}"),
        Err(_) => format!("{SIGN_PREFIX}{SIGN_SENTINEL}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Payload;

    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rstest::rstest;

    const EMBEDDED_SIGNATURE: &str = "7df3f9acab5a1883e205f281c4a8ccbe147d978d";

    #[test]
    fn sign_matches_rfc_2202_vector_for_empty_message() {
        let signature = sign(b"key", b"").unwrap();

        assert_eq!(signature, "f42bb0eeb018ebbd4597ae7213711ec60760843f");
    }

    #[test]
    fn sign_embedded_payload_returns_golden_signature() {
        let payload = Payload::embedded().unwrap();

        let signature = sign(payload.key(), payload.message()).unwrap();

        assert_eq!(signature, EMBEDDED_SIGNATURE);
        assert_eq!(
            sign_line(&Ok(signature)),
            format!("sign:{EMBEDDED_SIGNATURE}")
        );
    }

    #[test]
    fn sign_is_deterministic() {
        let payload = Payload::embedded().unwrap();

        let first = sign(payload.key(), payload.message()).unwrap();
        let second = sign(payload.key(), payload.message()).unwrap();

        assert_eq!(first, second);
    }

    #[rstest]
    #[case(b"k", b"")]
    #[case(b"key", b"a")]
    #[case(&[0xff; 65], &[0u8; 1000])]
    #[case(b"660719b4a7591769583a7c8d20c6dfa4", b"{\"data\":{}}")]
    fn sign_returns_40_lowercase_hex_chars(#[case] key: &[u8], #[case] message: &[u8]) {
        let signature = sign(key, message).unwrap();

        assert_eq!(signature.len(), 40);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn flipping_a_message_bit_changes_signature() {
        let payload = Payload::embedded().unwrap();
        let original = sign(payload.key(), payload.message()).unwrap();

        let mut rng = StdRng::seed_from_u64(101);
        for _ in 0..32 {
            let mut mutated = payload.message().to_vec();
            let byte_idx = rng.gen_range(0..mutated.len());
            mutated[byte_idx] ^= 1u8 << rng.gen_range(0..8u32);

            let signature = sign(payload.key(), &mutated).unwrap();

            assert_ne!(signature, original);
        }
    }

    #[test]
    fn sign_with_empty_key_is_algorithm_unavailable() {
        let result = sign(b"", b"message");

        assert!(matches!(result, Err(SignError::AlgorithmUnavailable { .. })));
        assert_eq!(sign_line(&result), "sign:null");
    }

    #[test]
    fn sign_with_unknown_algorithm_is_algorithm_unavailable() {
        let result = sign_with("HmacMD5", b"key", b"message");

        assert!(matches!(result, Err(SignError::AlgorithmUnavailable { .. })));
        assert_eq!(sign_line(&result), "sign:null");
    }
}
