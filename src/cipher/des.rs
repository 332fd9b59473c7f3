//! DES in CBC mode with PKCS#7 padding
//!
//! Body format: `[iv(8)][ciphertext]`, ciphertext a whole number of blocks.
//! DES has no authentication; wrong keys are caught by the padding check or,
//! failing that, by the payload checksum one layer up.

use super::{CipherError, random_bytes};
use crate::keys::DES_KEY_LEN;
use crate::registry::CipherAlgorithm;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use zeroize::Zeroizing;

type DesCbcEnc = cbc::Encryptor<des::Des>;
type DesCbcDec = cbc::Decryptor<des::Des>;

pub const BLOCK_LEN: usize = 8;

fn check_key(key: &[u8]) -> Result<(), CipherError> {
    if key.len() != DES_KEY_LEN {
        return Err(CipherError::InvalidKeyLength {
            algorithm: CipherAlgorithm::Des,
            len: key.len(),
        });
    }
    Ok(())
}

pub fn seal(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
    check_key(key)?;
    let iv = random_bytes(BLOCK_LEN)?;

    let ciphertext = DesCbcEnc::new_from_slices(key, &iv)
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut body = Vec::with_capacity(BLOCK_LEN + ciphertext.len());
    body.extend_from_slice(&iv);
    body.extend_from_slice(&ciphertext);
    Ok(body)
}

pub fn open(key: &[u8], body: &[u8]) -> Result<Zeroizing<Vec<u8>>, CipherError> {
    check_key(key)?;

    if body.len() < 2 * BLOCK_LEN || body.len() % BLOCK_LEN != 0 {
        return Err(CipherError::DecryptionFailed(format!(
            "ciphertext of {} bytes is not a whole number of blocks",
            body.len()
        )));
    }

    let (iv, ciphertext) = body.split_at(BLOCK_LEN);
    let plaintext = DesCbcDec::new_from_slices(key, iv)
        .map_err(|e| CipherError::DecryptionFailed(e.to_string()))?
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CipherError::DecryptionFailed("invalid padding".into()))?;

    Ok(Zeroizing::new(plaintext))
}
