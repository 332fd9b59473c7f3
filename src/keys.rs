//! Key material and key generation
//!
//! Keys are immutable once created. Symmetric secrets are zeroized on drop;
//! RSA private keys zeroize their own limbs.

use crate::cipher::{CipherError, random_bytes};
use crate::config::CryptoConfig;
use crate::registry::{AlgorithmFamily, CipherAlgorithm};
use rand::rngs::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// DES key size in bytes (56 key bits plus 8 parity bits)
pub const DES_KEY_LEN: usize = 8;

/// Role of one half of an asymmetric key pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    Public,
    Private,
}

impl KeyRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyRole::Public => "public",
            KeyRole::Private => "private",
        }
    }
}

/// Raw symmetric key bytes tagged with the mechanism they belong to
///
/// The mechanism is free text so that keys minted elsewhere (a MAC key, say)
/// can be carried through the interpreter; cipher calls reject mechanisms the
/// registry does not know.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    #[zeroize(skip)]
    mechanism: String,
    material: Vec<u8>,
}

impl SecretKey {
    pub fn from_bytes(mechanism: impl Into<String>, material: impl Into<Vec<u8>>) -> Self {
        Self {
            mechanism: mechanism.into(),
            material: material.into(),
        }
    }

    pub fn mechanism(&self) -> &str {
        &self.mechanism
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.material
    }

    pub fn len(&self) -> usize {
        self.material.len()
    }

    pub fn is_empty(&self) -> bool {
        self.material.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("mechanism", &self.mechanism)
            .field("len", &self.material.len())
            .finish_non_exhaustive()
    }
}

/// Opaque key object handed to and from the interpreter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    Secret(SecretKey),
    Public(RsaPublicKey),
    Private(RsaPrivateKey),
}

impl KeyMaterial {
    /// Name of the mechanism that produced this key
    pub fn mechanism(&self) -> &str {
        match self {
            KeyMaterial::Secret(secret) => secret.mechanism(),
            KeyMaterial::Public(_) | KeyMaterial::Private(_) => CipherAlgorithm::Rsa.name(),
        }
    }

    /// Registry entry for this key, if the mechanism is one the registry knows
    pub fn algorithm(&self) -> Option<CipherAlgorithm> {
        match self {
            KeyMaterial::Secret(secret) => CipherAlgorithm::from_name(secret.mechanism())
                .ok()
                .filter(|algorithm| algorithm.family() == AlgorithmFamily::Symmetric),
            KeyMaterial::Public(_) | KeyMaterial::Private(_) => Some(CipherAlgorithm::Rsa),
        }
    }

    pub fn family(&self) -> Option<AlgorithmFamily> {
        self.algorithm().map(|algorithm| algorithm.family())
    }

    /// Public/private role; `None` for symmetric secrets
    pub fn role(&self) -> Option<KeyRole> {
        match self {
            KeyMaterial::Secret(_) => None,
            KeyMaterial::Public(_) => Some(KeyRole::Public),
            KeyMaterial::Private(_) => Some(KeyRole::Private),
        }
    }
}

impl fmt::Display for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role() {
            Some(role) => write!(f, "{} {} key", self.mechanism(), role.as_str()),
            None => write!(f, "{} secret key", self.mechanism()),
        }
    }
}

/// Generate fresh key material for `algorithm`
///
/// Symmetric algorithms return one key; RSA returns `[public, private]`.
pub fn generate_keys(
    algorithm: CipherAlgorithm,
    config: &CryptoConfig,
) -> Result<Vec<KeyMaterial>, CipherError> {
    match algorithm {
        CipherAlgorithm::Des => {
            let mut material = random_bytes(DES_KEY_LEN)?;
            set_odd_parity(&mut material);
            Ok(vec![KeyMaterial::Secret(SecretKey::from_bytes(
                algorithm.name(),
                material,
            ))])
        }
        CipherAlgorithm::Aes => {
            let material = random_bytes(config.aes_key_bits / 8)?;
            Ok(vec![KeyMaterial::Secret(SecretKey::from_bytes(
                algorithm.name(),
                material,
            ))])
        }
        CipherAlgorithm::Rsa => {
            let private = RsaPrivateKey::new(&mut OsRng, config.rsa_modulus_bits)
                .map_err(|e| CipherError::KeyGenerationFailed(e.to_string()))?;
            let public = RsaPublicKey::from(&private);
            Ok(vec![KeyMaterial::Public(public), KeyMaterial::Private(private)])
        }
    }
}

/// Force the low bit of every byte so each byte has an odd number of set bits
fn set_odd_parity(key: &mut [u8]) {
    for byte in key.iter_mut() {
        let high = *byte & 0xfe;
        *byte = if high.count_ones() % 2 == 0 { high | 1 } else { high };
    }
}
