//! Implementation of standard (RFC 4648) base64 encode and decode.
use crate::DecodeError;

const BASE64_CHARS: &[u8] =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/".as_bytes();
const PAD: char = '=';

pub fn base64_encode(bytes: &[u8]) -> String {
    let encode_len = bytes.len().div_ceil(3) * 4;
    let mut b64 = String::with_capacity(encode_len);
    for bit_idx in BitIter::new(bytes) {
        b64.push(BASE64_CHARS[bit_idx as usize] as char);
    }
    for _ in 0..((bytes.len() * 2) % 3) {
        b64.push(PAD);
    }
    b64
}

/// Decode padded base64, rejecting anything that `base64_encode` could not
/// have produced.
pub fn base64_decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    if s.len() % 4 != 0 {
        return Err(DecodeError::InvalidLength(s.len()));
    }
    let body = s.trim_end_matches(PAD);
    if s.len() - body.len() > 2 {
        return Err(DecodeError::InvalidPadding);
    }

    let indices = body
        .char_indices()
        .map(|(index, c)| match char_to_base64_index(c) {
            Some(idx) => Ok(idx),
            None if c == PAD => Err(DecodeError::InvalidPadding),
            None => Err(DecodeError::InvalidCharacter {
                character: c,
                index,
            }),
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let mut bytes = Vec::with_capacity(indices.len() * 3 / 4);
    for chunk in indices.chunks(4) {
        // Pack up to four 6-bit groups into the low 24 bits of a word.
        let word = chunk
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, &idx)| acc | (u32::from(idx) << (18 - 6 * i)));
        let [_, b1, b2, b3] = word.to_be_bytes();
        let group = [b1, b2, b3];
        let n_bytes = chunk.len() - 1;
        if group[n_bytes..].iter().any(|&b| b != 0) {
            // Left-over bits in a short final group must be zero.
            return Err(DecodeError::InvalidPadding);
        }
        bytes.extend_from_slice(&group[..n_bytes]);
    }
    Ok(bytes)
}

fn char_to_base64_index(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A'),
        'a'..='z' => Some(c as u8 - b'a' + 26),
        '0'..='9' => Some(c as u8 - b'0' + 52),
        '+' => Some(62),
        '/' => Some(63),
        _ => None,
    }
}

struct BitIter<'a> {
    bytes: &'a [u8],
    /// Current bit position in the entire byte stream
    bit_pos: usize,
}
impl<'a> BitIter<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, bit_pos: 0 }
    }
}
impl<'a> Iterator for BitIter<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let byte_idx = self.bit_pos / 8;
        let bit_offset = self.bit_pos % 8;
        if byte_idx >= self.bytes.len() {
            return None;
        }

        self.bit_pos += 6;

        if bit_offset == 0 {
            return Some(self.bytes[byte_idx] >> 2);
        }
        let byte_mask = 0b11111100 >> bit_offset;
        let from_byte = (self.bytes[byte_idx] & byte_mask) << (bit_offset - 2);

        // Bits spilling over from the next byte, if there is one.
        if bit_offset > 2 && byte_idx + 1 < self.bytes.len() {
            let from_next_byte = self.bytes[byte_idx + 1] >> (10 - bit_offset);
            return Some(from_byte | from_next_byte);
        }
        Some(from_byte)
    }
}
