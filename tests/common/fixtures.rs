//! Test fixtures shared by the integration, property and stress tests.
//!
//! RSA key generation dominates test time, so one pair is generated lazily and
//! reused by every test that only needs *a* key pair.

#![allow(dead_code)]

use crypto_actions::{Crypto, CryptoAction, KeyMaterial, SecretKey, Term};
use std::sync::{Arc, LazyLock};

// ============================================================================
// Values
// ============================================================================

pub const TEST_STRING: &str = "test string";

pub const UNICODE_STRING: &str = "Hello 世界 🚀 Rust";

/// One value of every encodable kind
pub fn sample_values() -> Vec<Term> {
    vec![
        Term::from(TEST_STRING),
        Term::from(UNICODE_STRING),
        Term::from(""),
        Term::Int(12345),
        Term::Int(i32::MIN),
        Term::Long(-9_876_543_210),
        Term::Float(1.5),
        Term::Double(-0.25),
        Term::Bool(true),
        Term::Bool(false),
        Term::Bytes(vec![0, 1, 2, 0xfe, 0xff]),
    ]
}

// ============================================================================
// Keys
// ============================================================================

/// Fixed DES key with odd parity
pub const TEST_DES_KEY: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];

/// Fixed AES-256 key
pub const TEST_AES_KEY: [u8; 32] = [
    0x3e, 0x5a, 0x89, 0x7f, 0x2c, 0x1d, 0x4b, 0x91, 0xa2, 0x6f, 0x3c, 0xd4, 0x8e, 0x5b, 0x72, 0x19,
    0xf6, 0x4a, 0x21, 0x98, 0xc7, 0x65, 0x3d, 0xb0, 0x84, 0x59, 0x2e, 0xd1, 0xa6, 0x7b, 0x30, 0xe5,
];

pub fn des_key() -> Term {
    Term::from(KeyMaterial::Secret(SecretKey::from_bytes("des", TEST_DES_KEY)))
}

pub fn aes_key() -> Term {
    Term::from(KeyMaterial::Secret(SecretKey::from_bytes("aes", TEST_AES_KEY)))
}

/// Key minted by a mechanism outside the registry
pub fn hmac_key() -> Term {
    Term::from(KeyMaterial::Secret(SecretKey::from_bytes(
        "HmacSHA1",
        vec![0x0b; 20],
    )))
}

static RSA_PAIR: LazyLock<(Term, Term)> = LazyLock::new(|| {
    let keys = create_keys("rsa");
    assert_eq!(keys.len(), 2, "rsa yields a public and a private key");
    (keys[0].clone(), keys[1].clone())
});

/// Shared `(public, private)` RSA pair
pub fn rsa_pair() -> (Term, Term) {
    RSA_PAIR.clone()
}

// ============================================================================
// Helpers
// ============================================================================

/// Route the crate's `log` records to the test harness (`RUST_LOG=debug`)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn run(action: CryptoAction, args: &[Term]) -> Vec<Term> {
    init_logging();
    let mut out = Vec::new();
    Crypto::default()
        .execute(action, args, &mut out)
        .unwrap_or_else(|e| panic!("{action} failed: {e}"));
    out
}

pub fn create_keys(algorithm: &str) -> Vec<Term> {
    run(CryptoAction::CreateKey, &[Term::from(algorithm)])
}

pub fn encrypt(key: &Term, values: &[Term]) -> Vec<Term> {
    let mut args = vec![key.clone()];
    args.extend_from_slice(values);
    run(CryptoAction::Encrypt, &args)
}

pub fn decrypt(key: &Term, tokens: &[Term]) -> Vec<Term> {
    let mut args = vec![key.clone()];
    args.extend_from_slice(tokens);
    run(CryptoAction::Decrypt, &args)
}

pub fn key_material(term: &Term) -> Arc<KeyMaterial> {
    match term {
        Term::Key(key) => Arc::clone(key),
        other => panic!("expected a key, got {}", other.type_name()),
    }
}
