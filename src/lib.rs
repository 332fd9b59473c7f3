//! # crypto-actions
//!
//! Digest, key generation and cipher actions for script interpreters, over a
//! closed registry of algorithms.
//!
//! Every action takes an ordered list of [`Term`] arguments and appends its
//! results to a caller-owned sink. A failing call appends nothing.
//!
//! ## Actions
//!
//! | Action | Arguments | Results |
//! |:-------|:----------|:--------|
//! | `crypto/hash` | algorithm name, values... | one lowercase hex digest per value |
//! | `crypto/createkey` | algorithm name | one key (`des`, `aes`) or `public, private` (`rsa`) |
//! | `crypto/encrypt` | key, values... | one token per value |
//! | `crypto/decrypt` | key, tokens... | the original value per token |
//!
//! ## Algorithms
//!
//! | Name | Family | Notes |
//! |:-----|:-------|:------|
//! | `adler-32`, `crc-32`, `crc-32c` | checksum | 4-byte digests |
//! | `murmur3-32`, `murmur3-128` | checksum | seed 0 |
//! | `siphash-2-4` | checksum | fixed key `00..0f` |
//! | `des` | symmetric | CBC, PKCS#7 padding |
//! | `aes` | symmetric | GCM, 128 or 256-bit keys |
//! | `rsa` | asymmetric | PKCS#1 v1.5, public encrypts, private decrypts |
//!
//! RSA encrypts each value as a single block, so `crypto/encrypt` under an RSA
//! key accepts only short values. A block holds the modulus size in bytes
//! minus 11 bytes of padding, and the sealed payload spends about 16 of those
//! on its checksum and type tag. With the default 2048-bit modulus that leaves
//! roughly 225 bytes of text; longer values fail with `IllegalState`. Use
//! `aes` or `des` for anything larger.
//!
//! ## Quick Start
//!
//! ```rust
//! use crypto_actions::{Crypto, CryptoAction, Term};
//!
//! let crypto = Crypto::default();
//! let mut out = Vec::new();
//!
//! crypto
//!     .execute(CryptoAction::Hash, &["crc-32".into(), Term::Int(1234)], &mut out)
//!     .unwrap();
//! assert_eq!(out, vec![Term::from("29369833")]);
//! ```
//!
//! ## Round Trip
//!
//! ```rust
//! use crypto_actions::{Crypto, CryptoAction, Term};
//!
//! let crypto = Crypto::default();
//!
//! let mut keys = Vec::new();
//! crypto.execute(CryptoAction::CreateKey, &["aes".into()], &mut keys).unwrap();
//! let key = keys.remove(0);
//!
//! let mut tokens = Vec::new();
//! crypto
//!     .execute(CryptoAction::Encrypt, &[key.clone(), "secret".into()], &mut tokens)
//!     .unwrap();
//!
//! let mut values = Vec::new();
//! let mut args = vec![key];
//! args.extend(tokens);
//! crypto.execute(CryptoAction::Decrypt, &args, &mut values).unwrap();
//! assert_eq!(values, vec![Term::from("secret")]);
//! ```

#![forbid(unsafe_code)]

// Algorithm registry
pub mod registry;
pub use registry::{AlgorithmFamily, CipherAlgorithm, HashAlgorithm, RegistryError};

// Interpreter values and keys
pub mod keys;
pub mod term;
pub use keys::{KeyMaterial, KeyRole, SecretKey, generate_keys};
pub use term::Term;

// Configuration
pub mod config;
pub use config::{ConfigError, CryptoConfig};

// Value encodings and token format
pub mod codec;
pub use codec::CodecError;

// Digest engine
pub mod digest;
pub use digest::hash_term;

// Cipher engine
pub mod cipher;
pub use cipher::{CipherError, CipherKey};

// Action surface
pub mod action;
pub mod error;
pub use action::{Crypto, CryptoAction};
pub use error::{ActionError, ErrorKind};
