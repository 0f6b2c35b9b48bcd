use rand::RngCore;

pub const DEFAULT_TOKEN_BYTES: usize = 20;

/// Produces opaque bearer token keys: random bytes, hex encoded.
#[derive(Debug, Clone, Copy)]
pub struct TokenGenerator {
    num_bytes: usize,
}

impl TokenGenerator {
    pub fn new(num_bytes: usize) -> Self {
        Self { num_bytes }
    }

    pub fn generate(&self) -> String {
        let mut bytes = vec![0u8; self.num_bytes];
        rand::rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Length of the generated key in characters.
    pub fn key_len(&self) -> usize {
        self.num_bytes * 2
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_BYTES)
    }
}
