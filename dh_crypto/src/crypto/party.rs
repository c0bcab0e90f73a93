use crate::crypto::entropy::{secure_random_in_range, EntropySource, DEFAULT_EXPONENT_BYTES};
use crate::crypto::group::DhParameters;
use crate::crypto::key_exchange_traits::KeyAgreement;
use crate::error::{DhError, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::rngs::OsRng;
use std::fmt;
use std::sync::Arc;

/// One participant of a Diffie-Hellman exchange.
///
/// The private exponent is drawn once at construction and never changes. The
/// public value `g^x mod p` is absent until [`compute_public_value`] runs.
///
/// [`compute_public_value`]: KeyAgreementParty::compute_public_value
pub struct KeyAgreementParty {
    group: Arc<DhParameters>,
    private_exponent: BigUint,
    public_value: Option<BigUint>,
}

impl KeyAgreementParty {
    /// Creates a party whose exponent comes from the operating system CSPRNG.
    pub fn new(group: Arc<DhParameters>) -> Result<Self> {
        Self::with_entropy(group, &mut OsRng, DEFAULT_EXPONENT_BYTES)
    }

    pub fn with_entropy<S>(group: Arc<DhParameters>, source: &mut S, byte_length: usize) -> Result<Self>
    where
        S: EntropySource + ?Sized,
    {
        let private_exponent = secure_random_in_range(source, byte_length)?;
        log::debug!(
            "created key agreement party: {}-bit exponent over {}-bit group",
            private_exponent.bits(),
            group.bits()
        );
        Ok(Self {
            group,
            private_exponent,
            public_value: None,
        })
    }

    /// Builds a party around a known exponent. Intended for known-answer tests.
    #[doc(hidden)]
    pub fn from_private_exponent(group: Arc<DhParameters>, private_exponent: BigUint) -> Result<Self> {
        if private_exponent.is_zero() {
            return Err(DhError::InvalidPrivateExponent);
        }
        Ok(Self {
            group,
            private_exponent,
            public_value: None,
        })
    }

    pub fn group(&self) -> &Arc<DhParameters> {
        &self.group
    }

    /// Computes and stores `g^x mod p`. Calling it again yields the same value.
    pub fn compute_public_value(&mut self) -> &BigUint {
        let value = self.group.g().modpow(&self.private_exponent, self.group.p());
        log::debug!("computed {}-bit public value", value.bits());
        self.public_value.insert(value)
    }

    pub fn public_value(&self) -> Option<&BigUint> {
        self.public_value.as_ref()
    }

    /// Returns `peer^x mod p`.
    ///
    /// Any peer value is accepted. Values at or above `p` are reduced by the
    /// exponentiation, and the trivial values 0, 1 and `p - 1` yield secrets
    /// an attacker can predict. Use [`derive_shared_secret_strict`] to refuse
    /// them instead.
    ///
    /// [`derive_shared_secret_strict`]: KeyAgreementParty::derive_shared_secret_strict
    pub fn derive_shared_secret(&self, peer_public_value: &BigUint) -> BigUint {
        peer_public_value.modpow(&self.private_exponent, self.group.p())
    }

    /// Like [`derive_shared_secret`](KeyAgreementParty::derive_shared_secret),
    /// but rejects peer values outside `[2, p - 2]`.
    pub fn derive_shared_secret_strict(&self, peer_public_value: &BigUint) -> Result<BigUint> {
        let two = BigUint::from(2u32);
        let p_minus_1 = self.group.p() - BigUint::one();

        if *peer_public_value < two || *peer_public_value >= p_minus_1 {
            log::warn!("rejecting peer public value outside [2, p-2]");
            return Err(DhError::InvalidPeerValue);
        }

        Ok(self.derive_shared_secret(peer_public_value))
    }
}

impl KeyAgreement for KeyAgreementParty {
    type SharedSecret = BigUint;

    fn compute_public_value(&mut self) -> &BigUint {
        KeyAgreementParty::compute_public_value(self)
    }

    fn public_value(&self) -> Option<&BigUint> {
        KeyAgreementParty::public_value(self)
    }

    fn derive_shared_secret(&self, peer_public_value: &BigUint) -> BigUint {
        KeyAgreementParty::derive_shared_secret(self, peer_public_value)
    }
}

impl fmt::Debug for KeyAgreementParty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyAgreementParty")
            .field("group", &self.group)
            .field("private_exponent", &"<redacted>")
            .field("public_value", &self.public_value)
            .finish()
    }
}
