//! Byte encodings of interpreter values
//!
//! - [`canonical`]: stable byte form fed to digest algorithms
//! - [`payload`]: checksummed MessagePack form sealed inside cipher tokens
//! - [`token`]: versioned, base64 text framing of ciphertexts

pub mod canonical;
pub mod payload;
pub mod token;

use thiserror::Error;

/// Errors raised while encoding or decoding values and tokens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("value of type {0} cannot be encoded")]
    UnencodableValue(&'static str),

    #[error("payload serialization failed: {0}")]
    SerializationFailed(String),

    #[error("payload deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("payload integrity check failed")]
    ChecksumMismatch,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("unsupported token version: {0}")]
    UnsupportedVersion(u8),

    #[error("unknown token algorithm: {0}")]
    UnknownAlgorithm(u8),
}
