use sha2::{Digest, Sha256};

/// Short hex tag of a derived key: the first 4 bytes of its SHA-256 digest.
///
/// Both parties can read it aloud to confirm they hold the same key.
pub fn fingerprint(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    hex::encode(&digest[..4])
}
