//! Text framing of cipher output
//!
//! Token text is standard base64 over `[version(1)][algorithm(1)][body]`.
//! The body layout is owned by the cipher named in the algorithm byte.

use super::CodecError;
use crate::registry::CipherAlgorithm;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

pub const TOKEN_VERSION: u8 = 1;
pub const HEADER_SIZE: usize = 2;

/// A decoded token: which cipher produced it plus that cipher's body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherToken {
    pub algorithm: CipherAlgorithm,
    pub body: Vec<u8>,
}

impl CipherToken {
    pub fn new(algorithm: CipherAlgorithm, body: Vec<u8>) -> Self {
        Self { algorithm, body }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_SIZE + self.body.len());
        bytes.push(TOKEN_VERSION);
        bytes.push(self.algorithm.id());
        bytes.extend_from_slice(&self.body);
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() < HEADER_SIZE {
            return Err(CodecError::InvalidToken("token too short".into()));
        }

        let version = bytes[0];
        if version != TOKEN_VERSION {
            return Err(CodecError::UnsupportedVersion(version));
        }

        let algorithm = CipherAlgorithm::from_id(bytes[1])
            .map_err(|_| CodecError::UnknownAlgorithm(bytes[1]))?;

        Ok(Self {
            algorithm,
            body: bytes[HEADER_SIZE..].to_vec(),
        })
    }

    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    pub fn decode(text: &str) -> Result<Self, CodecError> {
        let bytes = STANDARD
            .decode(text)
            .map_err(|e| CodecError::InvalidToken(e.to_string()))?;
        Self::from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_roundtrip() {
        let token = CipherToken::new(CipherAlgorithm::Aes, vec![9u8; 40]);
        let decoded = CipherToken::decode(&token.encode()).unwrap();
        assert_eq!(decoded, token);
    }

    #[test]
    fn test_header_layout() {
        let bytes = CipherToken::new(CipherAlgorithm::Rsa, vec![0xAA]).to_bytes();
        assert_eq!(bytes, vec![TOKEN_VERSION, CipherAlgorithm::Rsa.id(), 0xAA]);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            CipherToken::decode("not base64!"),
            Err(CodecError::InvalidToken(_))
        ));
        assert!(matches!(
            CipherToken::from_bytes(&[TOKEN_VERSION]),
            Err(CodecError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_version_and_algorithm() {
        assert_eq!(
            CipherToken::from_bytes(&[9, 1, 0]),
            Err(CodecError::UnsupportedVersion(9))
        );
        assert_eq!(
            CipherToken::from_bytes(&[TOKEN_VERSION, 99, 0]),
            Err(CodecError::UnknownAlgorithm(99))
        );
    }
}

// Bounded proofs over the token header
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Property: any 3-byte input parses or fails cleanly, and a parse keeps
    /// the header it was given
    #[kani::proof]
    #[kani::unwind(4)]
    fn verify_header_parse_total() {
        let bytes: [u8; 3] = kani::any();
        let len: usize = kani::any();
        kani::assume(len <= 3);

        if let Ok(token) = CipherToken::from_bytes(&bytes[..len]) {
            assert!(len >= HEADER_SIZE);
            assert_eq!(bytes[0], TOKEN_VERSION);
            assert_eq!(token.algorithm.id(), bytes[1]);
            assert_eq!(token.body.len(), len - HEADER_SIZE);
        }
    }
}
