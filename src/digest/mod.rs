//! Digest engine
//!
//! Every digest is rendered as lowercase hex of its canonical byte form:
//! 32-bit checksums and the 64-bit SipHash are little-endian, MurMur3-128 is
//! `h1` then `h2`, each little-endian.

pub mod checksum;
pub mod murmur3;

use crate::codec::CodecError;
use crate::codec::canonical::canonical_bytes;
use crate::registry::HashAlgorithm;
use crate::term::Term;

impl HashAlgorithm {
    /// Digest raw bytes; output length is always [`HashAlgorithm::digest_len`]
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Adler32 => checksum::adler32(data).to_le_bytes().to_vec(),
            HashAlgorithm::Crc32 => checksum::crc32(data).to_le_bytes().to_vec(),
            HashAlgorithm::Crc32c => checksum::crc32c(data).to_le_bytes().to_vec(),
            HashAlgorithm::Murmur3_32 => murmur3::murmur3_32(data, 0).to_le_bytes().to_vec(),
            HashAlgorithm::Murmur3_128 => {
                let (h1, h2) = murmur3::murmur3_x64_128(data, 0);
                let mut out = Vec::with_capacity(16);
                out.extend_from_slice(&h1.to_le_bytes());
                out.extend_from_slice(&h2.to_le_bytes());
                out
            }
            HashAlgorithm::SipHash24 => checksum::siphash24(data).to_le_bytes().to_vec(),
        }
    }

    /// Digest raw bytes as lowercase hex
    pub fn digest_hex(&self, data: &[u8]) -> String {
        hex::encode(self.digest(data))
    }
}

/// Digest one interpreter value under `algorithm`
pub fn hash_term(algorithm: HashAlgorithm, term: &Term) -> Result<String, CodecError> {
    let bytes = canonical_bytes(term)?;
    Ok(algorithm.digest_hex(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_lengths_match_registry() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(algorithm.digest(b"abc").len(), algorithm.digest_len());
            assert_eq!(algorithm.digest_hex(b"abc").len(), algorithm.hex_len());
        }
    }

    #[test]
    fn test_text_vectors() {
        let cases = [
            (HashAlgorithm::Adler32, "7804c01a"),
            (HashAlgorithm::Crc32, "45154713"),
            (HashAlgorithm::Crc32c, "387e0716"),
            (HashAlgorithm::Murmur3_32, "306202a8"),
            (HashAlgorithm::Murmur3_128, "636cc4ff5f7ed59b51f29d6d949b4709"),
            (HashAlgorithm::SipHash24, "4f27c08e5981bc5a"),
        ];
        for (algorithm, expected) in cases {
            assert_eq!(
                hash_term(algorithm, &Term::from("test string")).unwrap(),
                expected,
                "{algorithm}"
            );
        }
    }

    #[test]
    fn test_integer_vectors() {
        let cases = [
            (HashAlgorithm::Adler32, "911c63b0"),
            (HashAlgorithm::Crc32, "29369833"),
            (HashAlgorithm::Crc32c, "4411bf68"),
            (HashAlgorithm::Murmur3_32, "08b9852d"),
            (HashAlgorithm::Murmur3_128, "f4459439308d1248efc0532fb4cd6d79"),
            (HashAlgorithm::SipHash24, "82ee572bf0a0dde4"),
        ];
        for (algorithm, expected) in cases {
            assert_eq!(hash_term(algorithm, &Term::Int(1234)).unwrap(), expected, "{algorithm}");
        }
    }

    #[test]
    fn test_lowercase_hex() {
        let digest = hash_term(HashAlgorithm::Murmur3_128, &Term::from("x")).unwrap();
        assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
