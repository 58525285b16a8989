use crate::Hasher;

const BUFFER_SIZE: usize = 64;
const INITIALISATION_CONSTANTS: [u32; 5] =
    [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];
pub const SHA1_LEN: usize = 20;

#[derive(Debug, Clone)]
pub struct Sha1 {
    buffer: [u8; BUFFER_SIZE],
    buffer_len: usize,
    digest: [u32; 5],
    message_bit_len: u64,
}

impl Sha1 {
    fn md_pad(&mut self) {
        let bit_len_bytes = self.message_bit_len.to_be_bytes();

        self.update(&[0x80]);

        // Pad with zeros until length is 56 mod 64
        let len_mod = self.buffer_len % BUFFER_SIZE;
        let padding_len = if len_mod <= 56 {
            56 - len_mod
        } else {
            64 + 56 - len_mod
        };
        self.update(&vec![0u8; padding_len]);
        self.update(&bit_len_bytes);
    }

    fn process_chunk(&mut self) {
        let mut w = [0u32; 80];
        for (i, chunk) in self.buffer.chunks_exact(4).enumerate() {
            w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = self.digest;
        for (i, &word) in w.iter().enumerate() {
            let (f, k) = match i {
                0..=19 => ((b & c) | ((!b) & d), 0x5A827999),
                20..=39 => (b ^ c ^ d, 0x6ED9EBA1),
                40..=59 => ((b & c) | (b & d) | (c & d), 0x8F1BBCDC),
                _ => (b ^ c ^ d, 0xCA62C1D6),
            };

            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(word);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        let state = [a, b, c, d, e];
        for (i, val) in state.iter().enumerate() {
            self.digest[i] = self.digest[i].wrapping_add(*val);
        }
        self.buffer_len = 0;
    }
}

impl Hasher<SHA1_LEN> for Sha1 {
    const BLOCK_SIZE: usize = BUFFER_SIZE;

    fn update(&mut self, message: &[u8]) {
        self.message_bit_len = self
            .message_bit_len
            .wrapping_add((message.len() as u64).wrapping_mul(8));

        let mut offset = 0;
        if self.buffer_len > 0 {
            let needed = BUFFER_SIZE - self.buffer_len;
            let to_copy = needed.min(message.len());
            self.buffer[self.buffer_len..self.buffer_len + to_copy]
                .copy_from_slice(&message[..to_copy]);
            self.buffer_len += to_copy;
            offset += to_copy;

            if self.buffer_len == BUFFER_SIZE {
                self.process_chunk();
            }
        }

        while offset + BUFFER_SIZE <= message.len() {
            self.buffer
                .copy_from_slice(&message[offset..offset + BUFFER_SIZE]);
            self.process_chunk();
            offset += BUFFER_SIZE;
        }

        if offset < message.len() {
            self.buffer[..message.len() - offset].copy_from_slice(&message[offset..]);
            self.buffer_len = message.len() - offset;
        }
    }

    fn digest(mut self) -> [u8; SHA1_LEN] {
        self.md_pad();
        let mut out = [0u8; SHA1_LEN];
        for (dst, word) in out.chunks_exact_mut(4).zip(self.digest) {
            dst.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self {
            buffer: [0u8; BUFFER_SIZE],
            buffer_len: 0,
            digest: INITIALISATION_CONSTANTS,
            message_bit_len: 0,
        }
    }
}
