//! Cryptographic algorithms and traits.

pub mod entropy;
pub mod fingerprint;
pub mod group;
pub mod key_exchange_traits;
pub mod party;
pub mod stretcher;

// Re-export main components for easier access from outside the crypto module.
pub use self::entropy::{secure_random_in_range, EntropySource};
pub use self::group::DhParameters;
pub use self::key_exchange_traits::KeyAgreement;
pub use self::party::KeyAgreementParty;
pub use self::stretcher::SecretStretcher;
