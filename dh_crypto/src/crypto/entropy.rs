//! Secure random integers for private exponents.
//!
//! Randomness itself comes from a CSPRNG supplied by the caller. Any
//! `rand` generator that is marked [`CryptoRng`] is an [`EntropySource`], so
//! production code hands in `OsRng` while tests hand in a seeded `StdRng`.

use crate::error::{DhError, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

/// Byte length of a freshly generated private exponent (1024 bits).
pub const DEFAULT_EXPONENT_BYTES: usize = 128;

/// Upper bound on zero-valued draws before the source is declared broken.
pub const MAX_DRAW_ATTEMPTS: usize = 64;

pub trait EntropySource {
    fn fill_secure(&mut self, dest: &mut [u8]) -> Result<()>;
}

impl<R: RngCore + CryptoRng + ?Sized> EntropySource for R {
    fn fill_secure(&mut self, dest: &mut [u8]) -> Result<()> {
        self.try_fill_bytes(dest)?;
        Ok(())
    }
}

/// Draws `byte_length` random bytes and reads them as a big-endian integer.
///
/// The result lies in `[1, 256^byte_length)`. A zero draw is discarded and
/// drawn again, up to [`MAX_DRAW_ATTEMPTS`] times.
pub fn secure_random_in_range<S>(source: &mut S, byte_length: usize) -> Result<BigUint>
where
    S: EntropySource + ?Sized,
{
    if byte_length == 0 {
        return Err(DhError::InvalidByteLength);
    }

    let mut buf = vec![0u8; byte_length];
    for attempt in 1..=MAX_DRAW_ATTEMPTS {
        source.fill_secure(&mut buf)?;
        let value = BigUint::from_bytes_be(&buf);
        if !value.is_zero() {
            return Ok(value);
        }
        log::trace!("discarding zero draw {} of {}", attempt, MAX_DRAW_ATTEMPTS);
    }

    Err(DhError::EntropyExhausted {
        attempts: MAX_DRAW_ATTEMPTS,
    })
}
