//! Error taxonomy seen by the calling interpreter
//!
//! Every engine error maps onto exactly one of three kinds:
//!
//! | Kind              | Meaning                                                   |
//! |:------------------|:----------------------------------------------------------|
//! | `Execution`       | the computation could not proceed (unknown digest name)   |
//! | `IllegalArgument` | a value outside the accepted domain (unknown cipher, foreign key, wrong argument type) |
//! | `IllegalState`    | well-formed inputs that are jointly inconsistent at runtime (wrong key for a token) |

use crate::cipher::CipherError;
use crate::codec::CodecError;
use crate::config::ConfigError;
use crate::registry::RegistryError;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Execution,
    IllegalArgument,
    IllegalState,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Execution => "execution error",
            ErrorKind::IllegalArgument => "illegal argument",
            ErrorKind::IllegalState => "illegal state",
        })
    }
}

/// Failure of a crypto action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("execution error: {0}")]
    Execution(String),

    #[error("illegal argument: {0}")]
    IllegalArgument(String),

    #[error("illegal state: {0}")]
    IllegalState(String),
}

impl ActionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActionError::Execution(_) => ErrorKind::Execution,
            ActionError::IllegalArgument(_) => ErrorKind::IllegalArgument,
            ActionError::IllegalState(_) => ErrorKind::IllegalState,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ActionError::Execution(message)
            | ActionError::IllegalArgument(message)
            | ActionError::IllegalState(message) => message,
        }
    }
}

impl From<RegistryError> for ActionError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::UnknownHash(_) => ActionError::Execution(e.to_string()),
            RegistryError::UnknownCipher(_) => ActionError::IllegalArgument(e.to_string()),
            RegistryError::UnknownCipherId(_) => ActionError::IllegalState(e.to_string()),
        }
    }
}

impl From<CodecError> for ActionError {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::UnencodableValue(_) => ActionError::IllegalArgument(e.to_string()),
            CodecError::SerializationFailed(_)
            | CodecError::DeserializationFailed(_)
            | CodecError::ChecksumMismatch
            | CodecError::InvalidToken(_)
            | CodecError::UnsupportedVersion(_)
            | CodecError::UnknownAlgorithm(_) => ActionError::IllegalState(e.to_string()),
        }
    }
}

impl From<CipherError> for ActionError {
    fn from(e: CipherError) -> Self {
        match e {
            CipherError::Codec(codec) => codec.into(),
            CipherError::UnsupportedKey(_) | CipherError::InvalidKeyLength { .. } => {
                ActionError::IllegalArgument(e.to_string())
            }
            CipherError::AlgorithmMismatch { .. }
            | CipherError::PublicKeyDecrypt
            | CipherError::PayloadTooLarge { .. }
            | CipherError::EncryptionFailed(_)
            | CipherError::DecryptionFailed(_)
            | CipherError::AuthenticationFailed => ActionError::IllegalState(e.to_string()),
            CipherError::RngFailure | CipherError::KeyGenerationFailed(_) => {
                ActionError::Execution(e.to_string())
            }
        }
    }
}

impl From<ConfigError> for ActionError {
    fn from(e: ConfigError) -> Self {
        ActionError::IllegalArgument(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CipherAlgorithm;

    #[test]
    fn test_registry_axes_differ() {
        let hash: ActionError = RegistryError::UnknownHash("xxx".into()).into();
        let cipher: ActionError = RegistryError::UnknownCipher("xxx".into()).into();
        assert_eq!(hash.kind(), ErrorKind::Execution);
        assert_eq!(cipher.kind(), ErrorKind::IllegalArgument);
    }

    #[test]
    fn test_cipher_error_kinds() {
        let cases = [
            (CipherError::UnsupportedKey("HmacSHA1".into()), ErrorKind::IllegalArgument),
            (
                CipherError::InvalidKeyLength {
                    algorithm: CipherAlgorithm::Des,
                    len: 3,
                },
                ErrorKind::IllegalArgument,
            ),
            (CipherError::PublicKeyDecrypt, ErrorKind::IllegalState),
            (CipherError::AuthenticationFailed, ErrorKind::IllegalState),
            (CipherError::DecryptionFailed("pad".into()), ErrorKind::IllegalState),
            (CipherError::RngFailure, ErrorKind::Execution),
            (
                CipherError::Codec(CodecError::ChecksumMismatch),
                ErrorKind::IllegalState,
            ),
            (
                CipherError::Codec(CodecError::UnencodableValue("key")),
                ErrorKind::IllegalArgument,
            ),
        ];
        for (error, kind) in cases {
            assert_eq!(ActionError::from(error).kind(), kind);
        }
    }

    #[test]
    fn test_message_kept() {
        let error: ActionError = RegistryError::UnknownHash("xxx".into()).into();
        assert!(error.message().contains("xxx"));
        assert!(error.to_string().starts_with("execution error"));
    }
}
