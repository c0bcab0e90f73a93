use crate::error::{DhError, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};

const RFC3526_GROUP14_P: &str = "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7EDEE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C62F356208552BB9ED529077096966D670C354E4ABC9804F1746C08CA18217C32905E462E36CE3BE39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF6955817183995497CEA956AE515D2261898FA051015728E5A8AACAA68FFFFFFFFFFFFFFFF";

/// Prime modulus `p` and generator `g` shared by every party of one agreement.
///
/// Neither the primality of `p` nor the primitive-root property of `g` is
/// checked. Only the values for which modular exponentiation degenerates are
/// rejected: `p <= 1`, `g == 0` and `g ≡ 0 (mod p)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DhParameters {
    p: BigUint,
    g: BigUint,
}

impl DhParameters {
    pub fn new(p: BigUint, g: BigUint) -> Result<Self> {
        if p <= BigUint::one() {
            return Err(DhError::InvalidParameters("prime modulus must be greater than 1"));
        }
        if g.is_zero() {
            return Err(DhError::InvalidParameters("generator must be non-zero"));
        }
        if (&g % &p).is_zero() {
            return Err(DhError::InvalidParameters("generator must not be a multiple of the modulus"));
        }
        Ok(Self { p, g })
    }

    /// Parses both values from hexadecimal strings.
    pub fn from_hex(p_hex: &str, g_hex: &str) -> Result<Self> {
        let p = parse_hex(p_hex)?;
        let g = parse_hex(g_hex)?;
        Self::new(p, g)
    }

    /// The 523 / 7 group. Only suitable for demonstrations.
    pub fn toy() -> Self {
        Self {
            p: BigUint::from(523u32),
            g: BigUint::from(7u32),
        }
    }

    /// RFC 3526 2048-bit MODP group (group 14), `g = 2`.
    pub fn rfc3526_group14() -> Self {
        // The constant is a valid hex literal, so parsing cannot fail.
        let p = BigUint::parse_bytes(RFC3526_GROUP14_P.as_bytes(), 16).unwrap_or_default();
        Self {
            p,
            g: BigUint::from(2u32),
        }
    }

    pub fn p(&self) -> &BigUint {
        &self.p
    }

    pub fn g(&self) -> &BigUint {
        &self.g
    }

    pub fn bits(&self) -> u64 {
        self.p.bits()
    }
}

fn parse_hex(value: &str) -> Result<BigUint> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| DhError::ParseError(format!("'{}' is not a hexadecimal number", value)))
}
