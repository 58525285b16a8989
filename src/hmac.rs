use crate::{Hasher, Sha1, SHA1_LEN};

const O_PAD: u8 = 0x5c;
const I_PAD: u8 = 0x36;

pub type HmacSha1 = Hmac<Sha1, SHA1_LEN>;

/// RFC 2104 HMAC over any block-based [`Hasher`].
#[derive(Debug, Clone)]
pub struct Hmac<H: Hasher<N>, const N: usize> {
    inner_hasher: H,
    outer_hasher: H,
}

impl<H: Hasher<N>, const N: usize> Hmac<H, N> {
    pub fn new(key: &[u8]) -> Self {
        let key_block = H::block_sized_key(key);

        let mut inner_hasher = H::default();
        inner_hasher.update(&xor_with_pad(&key_block, I_PAD));

        let mut outer_hasher = H::default();
        outer_hasher.update(&xor_with_pad(&key_block, O_PAD));

        Self {
            inner_hasher,
            outer_hasher,
        }
    }

    pub fn digest_message(key: &[u8], message: &[u8]) -> [u8; N] {
        let mut hmac = Self::new(key);
        hmac.update(message);
        hmac.digest()
    }

    pub fn update(&mut self, message: &[u8]) {
        self.inner_hasher.update(message);
    }

    pub fn update_and_digest(mut self, message: &[u8]) -> [u8; N] {
        self.inner_hasher.update(message);
        self.digest()
    }

    pub fn digest(self) -> [u8; N] {
        self.outer_hasher
            .chain_update(&self.inner_hasher.digest())
            .digest()
    }
}

fn xor_with_pad(key_block: &[u8], pad: u8) -> Vec<u8> {
    key_block.iter().map(|b| b ^ pad).collect()
}
