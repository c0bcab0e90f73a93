use num_bigint::BigUint;

/// One side of a two-party key agreement.
///
/// `derive_shared_secret` must not depend on whether the public value has
/// been computed yet.
pub trait KeyAgreement {
    type SharedSecret;

    fn compute_public_value(&mut self) -> &BigUint;
    fn public_value(&self) -> Option<&BigUint>;
    fn derive_shared_secret(&self, peer_public_value: &BigUint) -> Self::SharedSecret;
}
