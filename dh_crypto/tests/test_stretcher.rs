use dh_crypto::{derive_key, derive_key_from_bytes, fingerprint, SecretStretcher};
use num_bigint::BigUint;
use quickcheck::quickcheck;
use std::collections::HashSet;

const FAST_ROUNDS: u32 = 64;
const FULL_ENCODED_LEN: usize = 88;

#[test]
fn test_derivation_is_deterministic() {
    let secret = BigUint::from(99u32);
    let first = derive_key(&secret, 32, FAST_ROUNDS);
    let second = derive_key(&secret, 32, FAST_ROUNDS);
    assert_eq!(first, second);
}

#[test]
fn test_distinct_secrets_give_distinct_keys() {
    let keys: HashSet<String> = (1u32..=32)
        .map(|s| derive_key(&BigUint::from(s), 32, FAST_ROUNDS))
        .collect();
    assert_eq!(keys.len(), 32);
}

#[test]
fn test_iteration_count_changes_key() {
    let secret = BigUint::from(99u32);
    assert_ne!(derive_key(&secret, 32, 1), derive_key(&secret, 32, 2));
}

#[test]
fn test_oversized_key_returns_full_encoding() {
    let key = derive_key(&BigUint::from(12345u32), 1000, FAST_ROUNDS);
    assert_eq!(key.len(), FULL_ENCODED_LEN);
    assert!(key.ends_with("=="));
}

#[test]
fn test_key_uses_base64_alphabet() {
    let key = derive_key(&BigUint::from(7u32), FULL_ENCODED_LEN, FAST_ROUNDS);
    assert!(key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
}

#[test]
fn test_matching_keys_share_fingerprint() {
    let stretcher = SecretStretcher::new(32, FAST_ROUNDS);
    let a = stretcher.derive_key(&BigUint::from(99u32));
    let b = stretcher.derive_key_from_bytes(&[99]);
    assert_eq!(a, b);
    assert_eq!(fingerprint(&a), fingerprint(&b));
}

quickcheck! {
    fn prop_truncation_is_prefix(secret: u64, key_size: u8) -> bool {
        let secret = BigUint::from(secret);
        let full = derive_key(&secret, usize::MAX, 4);
        let key = derive_key(&secret, key_size as usize, 4);
        key.len() == (key_size as usize).min(FULL_ENCODED_LEN) && full.starts_with(&key)
    }

    fn prop_sensitivity(a: u64, b: u64) -> bool {
        if a == b {
            return true;
        }
        derive_key(&BigUint::from(a), 32, 4) != derive_key(&BigUint::from(b), 32, 4)
    }

    fn prop_bytes_and_integer_agree(bytes: Vec<u8>) -> bool {
        // Leading zeros vanish in the integer form, so compare on the trimmed bytes.
        let trimmed: Vec<u8> = bytes.iter().copied().skip_while(|b| *b == 0).collect();
        if trimmed.is_empty() {
            return true;
        }
        let secret = BigUint::from_bytes_be(&trimmed);
        derive_key(&secret, 32, 2) == derive_key_from_bytes(&trimmed, 32, 2)
    }
}
