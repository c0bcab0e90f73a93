//! Stretches a shared secret into a symmetric key by iterated SHA-512.
//!
//! The working buffer starts as the big-endian bytes of the secret and is
//! replaced by its own SHA-512 digest once per iteration. The final buffer is
//! base64 encoded (standard alphabet, padded) and the encoding is cut to the
//! requested number of characters.

use base64::{engine::general_purpose::STANDARD, Engine};
use num_bigint::BigUint;
use sha2::{Digest, Sha512};

/// Number of base64 characters kept by default.
pub const DEFAULT_KEY_SIZE: usize = 32;

/// Number of hash rounds applied by default (2^18).
pub const DEFAULT_ITERATIONS: u32 = 1 << 18;

/// Stateless key derivation service carrying its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecretStretcher {
    key_size: usize,
    iterations: u32,
}

impl Default for SecretStretcher {
    fn default() -> Self {
        Self {
            key_size: DEFAULT_KEY_SIZE,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl SecretStretcher {
    pub fn new(key_size: usize, iterations: u32) -> Self {
        Self { key_size, iterations }
    }

    pub fn with_key_size(mut self, key_size: usize) -> Self {
        self.key_size = key_size;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn key_size(&self) -> usize {
        self.key_size
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn derive_key(&self, secret: &BigUint) -> String {
        derive_key(secret, self.key_size, self.iterations)
    }

    pub fn derive_key_from_bytes(&self, secret: &[u8]) -> String {
        derive_key_from_bytes(secret, self.key_size, self.iterations)
    }
}

/// Derives a `key_size`-character key from a shared secret integer.
///
/// Zero is encoded as the single byte `0x00`.
pub fn derive_key(secret: &BigUint, key_size: usize, iterations: u32) -> String {
    derive_key_from_bytes(&secret.to_bytes_be(), key_size, iterations)
}

/// Derives a key from the raw big-endian bytes of a secret.
///
/// A `key_size` beyond the encoded length returns the whole encoding.
pub fn derive_key_from_bytes(secret: &[u8], key_size: usize, iterations: u32) -> String {
    log::trace!(
        "stretching {}-byte secret: {} rounds, {} key chars",
        secret.len(),
        iterations,
        key_size
    );

    let mut buffer = secret.to_vec();
    for _ in 0..iterations {
        buffer = Sha512::digest(&buffer).to_vec();
    }

    let mut encoded = STANDARD.encode(&buffer);
    // base64 output is ASCII, so any index is a char boundary.
    encoded.truncate(key_size);
    encoded
}
