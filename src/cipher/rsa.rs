//! RSA with PKCS#1 v1.5 encryption padding
//!
//! Body format: one ciphertext block the size of the modulus. The public key
//! encrypts and the private key decrypts; a private key may also encrypt (its
//! public half is derived on the fly), a public key can never decrypt.

use super::CipherError;
use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

/// PKCS#1 v1.5 type 2 padding overhead
pub const PADDING_OVERHEAD: usize = 11;

/// Largest plaintext the key can take in one block
pub fn max_plaintext_len(key: &RsaPublicKey) -> usize {
    key.size().saturating_sub(PADDING_OVERHEAD)
}

pub fn seal(key: &RsaPublicKey, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
    let max = max_plaintext_len(key);
    if plaintext.len() > max {
        return Err(CipherError::PayloadTooLarge {
            len: plaintext.len(),
            max,
        });
    }

    key.encrypt(&mut OsRng, Pkcs1v15Encrypt, plaintext)
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))
}

pub fn seal_with_private(key: &RsaPrivateKey, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
    seal(&key.to_public_key(), plaintext)
}

pub fn open(key: &RsaPrivateKey, body: &[u8]) -> Result<Zeroizing<Vec<u8>>, CipherError> {
    if body.len() != key.size() {
        return Err(CipherError::DecryptionFailed(format!(
            "ciphertext of {} bytes does not match a {}-byte modulus",
            body.len(),
            key.size()
        )));
    }

    key.decrypt(Pkcs1v15Encrypt, body)
        .map(Zeroizing::new)
        .map_err(|e| CipherError::DecryptionFailed(e.to_string()))
}
