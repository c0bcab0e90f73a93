pub mod crypto;
pub mod error;

pub use crypto::entropy::{secure_random_in_range, EntropySource, DEFAULT_EXPONENT_BYTES};
pub use crypto::fingerprint::fingerprint;
pub use crypto::group::DhParameters;
pub use crypto::key_exchange_traits::KeyAgreement;
pub use crypto::party::KeyAgreementParty;
pub use crypto::stretcher::{
    derive_key, derive_key_from_bytes, SecretStretcher, DEFAULT_ITERATIONS, DEFAULT_KEY_SIZE,
};
pub use error::{DhError, Result};
