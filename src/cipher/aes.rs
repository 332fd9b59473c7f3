//! AES-GCM via ring
//!
//! Body format: `[nonce(12)][ciphertext+auth_tag(16)]`
//!
//! Nonces are drawn fresh from the system RNG for every seal. Keys live for as
//! long as the interpreter holds them and no per-key counter survives between
//! calls, so a random 96-bit nonce is the only stateless choice.

use super::{CipherError, random_bytes};
use crate::registry::CipherAlgorithm;
use ring::aead::{AES_128_GCM, AES_256_GCM, Aad, LessSafeKey, NONCE_LEN, Nonce, UnboundKey};
use zeroize::Zeroizing;

pub const TAG_LEN: usize = 16;

fn aead_key(key: &[u8]) -> Result<LessSafeKey, CipherError> {
    let algorithm = match key.len() {
        16 => &AES_128_GCM,
        32 => &AES_256_GCM,
        len => {
            return Err(CipherError::InvalidKeyLength {
                algorithm: CipherAlgorithm::Aes,
                len,
            });
        }
    };
    let unbound_key = UnboundKey::new(algorithm, key).map_err(|_| CipherError::InvalidKeyLength {
        algorithm: CipherAlgorithm::Aes,
        len: key.len(),
    })?;
    Ok(LessSafeKey::new(unbound_key))
}

/// Encrypt `plaintext`, binding `aad` into the authentication tag
pub fn seal(key: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, CipherError> {
    let aead_key = aead_key(key)?;

    let nonce_bytes: [u8; NONCE_LEN] = random_bytes(NONCE_LEN)?
        .try_into()
        .map_err(|_| CipherError::RngFailure)?;
    let nonce = Nonce::assume_unique_for_key(nonce_bytes);

    let mut ciphertext = Vec::with_capacity(plaintext.len() + TAG_LEN);
    ciphertext.extend_from_slice(plaintext);
    aead_key
        .seal_in_place_append_tag(nonce, Aad::from(aad), &mut ciphertext)
        .map_err(|e| CipherError::EncryptionFailed(format!("AES-GCM seal failed: {e:?}")))?;

    let mut body = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    body.extend_from_slice(&nonce_bytes);
    body.extend_from_slice(&ciphertext);
    Ok(body)
}

/// Decrypt a body produced by [`seal`] under the same key and `aad`
pub fn open(key: &[u8], body: &[u8], aad: &[u8]) -> Result<Zeroizing<Vec<u8>>, CipherError> {
    let aead_key = aead_key(key)?;

    if body.len() < NONCE_LEN + TAG_LEN {
        return Err(CipherError::DecryptionFailed("ciphertext too short".into()));
    }

    let (nonce_bytes, encrypted) = body.split_at(NONCE_LEN);
    let nonce = Nonce::try_assume_unique_for_key(nonce_bytes)
        .map_err(|_| CipherError::DecryptionFailed("invalid nonce".into()))?;

    let mut plaintext = Zeroizing::new(encrypted.to_vec());
    let len = aead_key
        .open_in_place(nonce, Aad::from(aad), &mut plaintext)
        .map_err(|_| CipherError::AuthenticationFailed)?
        .len();
    plaintext.truncate(len);

    Ok(plaintext)
}
