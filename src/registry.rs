//! Closed algorithm registry
//!
//! Two enumerations cover every algorithm this crate knows about:
//! [`HashAlgorithm`] for digests and checksums, [`CipherAlgorithm`] for key
//! generation and encryption. Names resolve case-insensitively against exactly
//! one entry; there is no aliasing, no whitespace trimming and no fallback.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when an algorithm name does not resolve
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown hash algorithm: {0:?}")]
    UnknownHash(String),

    #[error("unknown cipher algorithm: {0:?}")]
    UnknownCipher(String),

    #[error("unknown cipher algorithm id: {0}")]
    UnknownCipherId(u8),
}

/// Family an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    /// Checksums and non-cryptographic hashes
    Checksum,
    /// Single shared secret key
    Symmetric,
    /// Public/private key pair
    Asymmetric,
}

impl AlgorithmFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmFamily::Checksum => "checksum-hash",
            AlgorithmFamily::Symmetric => "symmetric-cipher",
            AlgorithmFamily::Asymmetric => "asymmetric-cipher",
        }
    }
}

impl fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Digest algorithms available to the `hash` action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Adler32,
    Crc32,
    Crc32c,
    Murmur3_32,
    Murmur3_128,
    SipHash24,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 6] = [
        HashAlgorithm::Adler32,
        HashAlgorithm::Crc32,
        HashAlgorithm::Crc32c,
        HashAlgorithm::Murmur3_32,
        HashAlgorithm::Murmur3_128,
        HashAlgorithm::SipHash24,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Adler32 => "adler-32",
            HashAlgorithm::Crc32 => "crc-32",
            HashAlgorithm::Crc32c => "crc-32c",
            HashAlgorithm::Murmur3_32 => "murmur3-32",
            HashAlgorithm::Murmur3_128 => "murmur3-128",
            HashAlgorithm::SipHash24 => "siphash-2-4",
        }
    }

    /// Digest size in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Adler32
            | HashAlgorithm::Crc32
            | HashAlgorithm::Crc32c
            | HashAlgorithm::Murmur3_32 => 4,
            HashAlgorithm::SipHash24 => 8,
            HashAlgorithm::Murmur3_128 => 16,
        }
    }

    /// Length of the lowercase hex rendering of a digest
    pub fn hex_len(&self) -> usize {
        self.digest_len() * 2
    }

    pub fn family(&self) -> AlgorithmFamily {
        AlgorithmFamily::Checksum
    }

    /// Resolve a name against the registry (ASCII case-insensitive)
    pub fn from_name(name: &str) -> Result<Self, RegistryError> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| RegistryError::UnknownHash(name.to_string()))
    }
}

impl FromStr for HashAlgorithm {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key generation and cipher algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherAlgorithm {
    Des,
    Aes,
    Rsa,
}

impl CipherAlgorithm {
    pub const ALL: [CipherAlgorithm; 3] =
        [CipherAlgorithm::Des, CipherAlgorithm::Aes, CipherAlgorithm::Rsa];

    pub fn name(&self) -> &'static str {
        match self {
            CipherAlgorithm::Des => "des",
            CipherAlgorithm::Aes => "aes",
            CipherAlgorithm::Rsa => "rsa",
        }
    }

    pub fn family(&self) -> AlgorithmFamily {
        match self {
            CipherAlgorithm::Des | CipherAlgorithm::Aes => AlgorithmFamily::Symmetric,
            CipherAlgorithm::Rsa => AlgorithmFamily::Asymmetric,
        }
    }

    /// Number of key objects `createKey` emits for this algorithm
    pub fn key_count(&self) -> usize {
        match self.family() {
            AlgorithmFamily::Asymmetric => 2,
            _ => 1,
        }
    }

    /// Algorithm byte stored in token headers
    pub fn id(&self) -> u8 {
        match self {
            CipherAlgorithm::Des => 1,
            CipherAlgorithm::Aes => 2,
            CipherAlgorithm::Rsa => 3,
        }
    }

    pub fn from_id(id: u8) -> Result<Self, RegistryError> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.id() == id)
            .ok_or(RegistryError::UnknownCipherId(id))
    }

    /// Resolve a name against the registry (ASCII case-insensitive)
    pub fn from_name(name: &str) -> Result<Self, RegistryError> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| RegistryError::UnknownCipher(name.to_string()))
    }
}

impl FromStr for CipherAlgorithm {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Property: algorithm ids are a bijection onto the cipher registry
    #[kani::proof]
    fn verify_cipher_id_roundtrip() {
        let id: u8 = kani::any();
        if let Ok(algorithm) = CipherAlgorithm::from_id(id) {
            assert_eq!(algorithm.id(), id);
            assert!(id != 0);
        }
    }
}
