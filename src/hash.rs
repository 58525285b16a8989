/// A Merkle-Damgard style hash absorbing input in `BLOCK_SIZE` chunks and
/// producing an `N` byte digest.
pub trait Hasher<const N: usize>: Default {
    const BLOCK_SIZE: usize;

    fn update(&mut self, data: &[u8]);

    fn digest(self) -> [u8; N];

    fn chain_update(mut self, data: &[u8]) -> Self {
        self.update(data);
        self
    }

    fn digest_message(message: &[u8]) -> [u8; N] {
        Self::default().chain_update(message).digest()
    }

    /// Fit a key of any length to exactly one block: short keys are
    /// zero-padded, keys longer than a block are hashed first.
    fn block_sized_key(key: &[u8]) -> Vec<u8> {
        let mut block = vec![0; Self::BLOCK_SIZE];
        if key.len() > Self::BLOCK_SIZE {
            block[..N].copy_from_slice(&Self::digest_message(key));
        } else {
            block[..key.len()].copy_from_slice(key);
        }
        block
    }
}
