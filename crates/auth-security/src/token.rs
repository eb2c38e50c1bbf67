//! Session id generation

use rand::Rng;

use auth_shared::constants::SESSION_ID_LENGTH;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Capability for minting opaque session identifiers.
pub trait SessionIdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Lower-case base-36 tokens drawn from the thread-local CSPRNG.
#[derive(Debug, Clone)]
pub struct Base36SessionIdGenerator {
    length: usize,
}

impl Base36SessionIdGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for Base36SessionIdGenerator {
    fn default() -> Self {
        Self::new(SESSION_ID_LENGTH)
    }
}

impl SessionIdGenerator for Base36SessionIdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| BASE36_ALPHABET[rng.random_range(0..BASE36_ALPHABET.len())] as char)
            .collect()
    }
}
