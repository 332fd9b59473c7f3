//! Cipher engine
//!
//! A [`CipherKey`] is a [`KeyMaterial`] that passed family validation. Only a
//! validated key can encrypt or decrypt, so a foreign key is rejected before
//! any value is touched.

pub mod aes;
pub mod des;
pub mod rsa;

use crate::codec::CodecError;
use crate::codec::payload;
use crate::codec::token::{CipherToken, TOKEN_VERSION};
use crate::keys::{DES_KEY_LEN, KeyMaterial};
use crate::registry::{AlgorithmFamily, CipherAlgorithm};
use crate::term::Term;
use ::rsa::{RsaPrivateKey, RsaPublicKey};
use ring::rand::{SecureRandom, SystemRandom};
use thiserror::Error;

/// Errors that can occur during key generation, encryption or decryption
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("unsupported key: {0}")]
    UnsupportedKey(String),

    #[error("invalid {algorithm} key length: {len} bytes")]
    InvalidKeyLength {
        algorithm: CipherAlgorithm,
        len: usize,
    },

    #[error("token was produced by {found}, key belongs to {expected}")]
    AlgorithmMismatch {
        expected: CipherAlgorithm,
        found: CipherAlgorithm,
    },

    #[error("a public key cannot decrypt")]
    PublicKeyDecrypt,

    #[error("payload of {len} bytes exceeds the {max} bytes this key can encrypt")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("authentication verification failed")]
    AuthenticationFailed,

    #[error("random number generation failed")]
    RngFailure,

    #[error("key generation failed: {0}")]
    KeyGenerationFailed(String),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

pub(crate) fn random_bytes(len: usize) -> Result<Vec<u8>, CipherError> {
    let rng = SystemRandom::new();
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes).map_err(|_| CipherError::RngFailure)?;
    Ok(bytes)
}

/// Key material validated against the registry
#[derive(Debug, Clone, Copy)]
pub enum CipherKey<'a> {
    Des(&'a [u8]),
    Aes(&'a [u8]),
    RsaPublic(&'a RsaPublicKey),
    RsaPrivate(&'a RsaPrivateKey),
}

impl<'a> CipherKey<'a> {
    /// Check the key's family and shape
    pub fn resolve(key: &'a KeyMaterial) -> Result<Self, CipherError> {
        let secret = match key {
            KeyMaterial::Public(public) => return Ok(CipherKey::RsaPublic(public)),
            KeyMaterial::Private(private) => return Ok(CipherKey::RsaPrivate(private)),
            KeyMaterial::Secret(secret) => secret,
        };

        let algorithm = key.algorithm().ok_or_else(|| {
            CipherError::UnsupportedKey(format!(
                "mechanism {:?} is not a registered symmetric cipher",
                secret.mechanism()
            ))
        })?;

        let material = secret.as_bytes();
        match algorithm {
            CipherAlgorithm::Des if material.len() == DES_KEY_LEN => Ok(CipherKey::Des(material)),
            CipherAlgorithm::Aes if matches!(material.len(), 16 | 32) => {
                Ok(CipherKey::Aes(material))
            }
            _ => Err(CipherError::InvalidKeyLength {
                algorithm,
                len: material.len(),
            }),
        }
    }

    pub fn algorithm(&self) -> CipherAlgorithm {
        match self {
            CipherKey::Des(_) => CipherAlgorithm::Des,
            CipherKey::Aes(_) => CipherAlgorithm::Aes,
            CipherKey::RsaPublic(_) | CipherKey::RsaPrivate(_) => CipherAlgorithm::Rsa,
        }
    }

    pub fn family(&self) -> AlgorithmFamily {
        self.algorithm().family()
    }

    /// Encrypt one value into token text
    pub fn encrypt(&self, term: &Term) -> Result<String, CipherError> {
        let algorithm = self.algorithm();
        let plaintext = payload::seal(term)?;

        let body = match self {
            CipherKey::Des(key) => des::seal(key, &plaintext)?,
            CipherKey::Aes(key) => aes::seal(key, &plaintext, &header_aad(algorithm))?,
            CipherKey::RsaPublic(key) => rsa::seal(key, &plaintext)?,
            CipherKey::RsaPrivate(key) => rsa::seal_with_private(key, &plaintext)?,
        };

        Ok(CipherToken::new(algorithm, body).encode())
    }

    /// Decrypt token text back into the value it was made from
    pub fn decrypt(&self, token: &str) -> Result<Term, CipherError> {
        self.open_token(CipherToken::decode(token)?)
    }

    /// Decrypt a token given as its raw framed bytes
    pub fn decrypt_bytes(&self, token: &[u8]) -> Result<Term, CipherError> {
        self.open_token(CipherToken::from_bytes(token)?)
    }

    fn open_token(&self, token: CipherToken) -> Result<Term, CipherError> {
        let expected = self.algorithm();
        if token.algorithm != expected {
            return Err(CipherError::AlgorithmMismatch {
                expected,
                found: token.algorithm,
            });
        }

        let plaintext = match self {
            CipherKey::Des(key) => des::open(key, &token.body)?,
            CipherKey::Aes(key) => aes::open(key, &token.body, &header_aad(expected))?,
            CipherKey::RsaPublic(_) => return Err(CipherError::PublicKeyDecrypt),
            CipherKey::RsaPrivate(key) => rsa::open(key, &token.body)?,
        };

        Ok(payload::open(&plaintext)?)
    }
}

/// Token header bytes, authenticated by AEAD ciphers
fn header_aad(algorithm: CipherAlgorithm) -> [u8; 2] {
    [TOKEN_VERSION, algorithm.id()]
}
