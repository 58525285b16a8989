pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .fold(String::with_capacity(bytes.len() * 2), |s, hb| s + &hb)
}

pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, String> {
    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(format!("invalid hex digit '{c}'"));
    }
    if hex.len() % 2 != 0 {
        return Err(format!("odd number of hex digits ({})", hex.len()));
    }
    let chars: Vec<char> = hex.chars().collect();
    chars.chunks(2).map(hex_item_to_byte).collect()
}

fn hex_item_to_byte(item: &[char]) -> Result<u8, String> {
    u8::from_str_radix(&item.iter().collect::<String>(), 16).map_err(|e| format!("{e}"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&[], "")]
    #[case(&[0x0a, 0x3f], "0a3f")]
    #[case(&[0xde, 0xad, 0xbe, 0xef], "deadbeef")]
    fn bytes_to_hex_is_lowercase_without_separators(#[case] bytes: &[u8], #[case] expected: &str) {
        assert_eq!(bytes_to_hex(bytes), expected);
    }

    #[test]
    fn hex_to_bytes_accepts_either_case() {
        assert_eq!(hex_to_bytes("0A3f").unwrap(), vec![0x0a, 0x3f]);
    }

    #[rstest]
    #[case("abc")]
    #[case("zz")]
    fn hex_to_bytes_rejects_malformed_input(#[case] hex: &str) {
        assert!(hex_to_bytes(hex).is_err());
    }
}
