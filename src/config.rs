//! Tunables for key generation
//!
//! The embedder owns loading (file, environment, interpreter settings); this
//! module only defines the shape, the defaults and the accepted ranges.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_RSA_MODULUS_BITS: usize = 2048;
pub const MIN_RSA_MODULUS_BITS: usize = 1024;
pub const MAX_RSA_MODULUS_BITS: usize = 4096;

pub const DEFAULT_AES_KEY_BITS: usize = 256;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("RSA modulus must be a multiple of 8 between 1024 and 4096 bits, got {0}")]
    InvalidRsaModulus(usize),

    #[error("AES key size must be 128 or 256 bits, got {0}")]
    InvalidAesKeySize(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptoConfig {
    /// Modulus size for generated RSA key pairs
    pub rsa_modulus_bits: usize,
    /// Size of generated AES keys
    pub aes_key_bits: usize,
}

impl CryptoConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_RSA_MODULUS_BITS..=MAX_RSA_MODULUS_BITS).contains(&self.rsa_modulus_bits)
            || self.rsa_modulus_bits % 8 != 0
        {
            return Err(ConfigError::InvalidRsaModulus(self.rsa_modulus_bits));
        }

        if !matches!(self.aes_key_bits, 128 | 256) {
            return Err(ConfigError::InvalidAesKeySize(self.aes_key_bits));
        }

        Ok(())
    }
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            rsa_modulus_bits: DEFAULT_RSA_MODULUS_BITS,
            aes_key_bits: DEFAULT_AES_KEY_BITS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(CryptoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rsa_bounds() {
        for bits in [512, 1020, 8192] {
            let config = CryptoConfig {
                rsa_modulus_bits: bits,
                ..CryptoConfig::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::InvalidRsaModulus(bits)));
        }
    }

    #[test]
    fn test_aes_sizes() {
        let config = CryptoConfig {
            aes_key_bits: 192,
            ..CryptoConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidAesKeySize(192)));
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: CryptoConfig = serde_json::from_str(r#"{"aes_key_bits": 128}"#).unwrap();
        assert_eq!(config.aes_key_bits, 128);
        assert_eq!(config.rsa_modulus_bits, DEFAULT_RSA_MODULUS_BITS);
    }
}
