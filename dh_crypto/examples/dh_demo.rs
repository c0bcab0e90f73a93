use dh_crypto::{fingerprint, DhError, DhParameters, KeyAgreementParty, SecretStretcher};
use num_bigint::BigUint;
use std::sync::Arc;

fn short_hex(value: &BigUint) -> String {
    let hex = value.to_str_radix(16);
    if hex.len() > 32 {
        format!("{}...", &hex[..32])
    } else {
        hex
    }
}

fn run_exchange(name: &str, params: DhParameters, stretcher: SecretStretcher) -> Result<(), DhError> {
    println!("=== {} ===", name);
    println!("  Prime p ({} bits): {}", params.bits(), short_hex(params.p()));
    println!("  Generator g: {}\n", params.g());

    let params = Arc::new(params);

    // 1. Each client picks a private exponent and publishes g^x mod p
    let mut alice = KeyAgreementParty::new(Arc::clone(&params))?;
    let mut bob = KeyAgreementParty::new(Arc::clone(&params))?;
    let alice_public = alice.compute_public_value().clone();
    let bob_public = bob.compute_public_value().clone();
    println!("  Alice's public value: {}", short_hex(&alice_public));
    println!("  Bob's public value:   {}\n", short_hex(&bob_public));

    // 2. Public values cross the wire; each side derives the same secret
    let secret_alice = alice.derive_shared_secret(&bob_public);
    let secret_bob = bob.derive_shared_secret(&alice_public);
    println!("  Alice's shared secret: {}", short_hex(&secret_alice));
    println!("  Bob's shared secret:   {}\n", short_hex(&secret_bob));

    // 3. Stretch the secret into a symmetric key
    let key_alice = stretcher.derive_key(&secret_alice);
    let key_bob = stretcher.derive_key(&secret_bob);
    println!("  Alice's key fingerprint: {}", fingerprint(&key_alice));
    println!("  Bob's key fingerprint:   {}", fingerprint(&key_bob));

    if key_alice == key_bob {
        println!("  SUCCESS: derived keys match!\n");
    } else {
        println!("  ERROR: derived keys DO NOT match!\n");
    }
    Ok(())
}

fn main() -> Result<(), DhError> {
    env_logger::init();

    let stretcher = SecretStretcher::default();
    // Small group for readability. Never use a prime below 2^2047 in practice.
    run_exchange("Toy group (p = 523, g = 7)", DhParameters::toy(), stretcher)?;
    run_exchange("RFC 3526 group 14", DhParameters::rfc3526_group14(), stretcher)?;
    Ok(())
}
