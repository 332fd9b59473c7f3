//! Typed payload sealed inside cipher tokens
//!
//! Format: `[xxh3_64(msgpack)(8, big-endian)][msgpack(Payload)]`
//!
//! The checksum lets decryption tell a wrong key from a right one even for
//! unauthenticated ciphers: garbage that happens to unpad cleanly still fails
//! here and surfaces as an integrity error instead of a bogus value.

use super::CodecError;
use crate::term::Term;
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;
use zeroize::Zeroizing;

const CHECKSUM_SIZE: usize = 8;

/// Wire mirror of the encodable [`Term`] variants, decoding side
#[derive(Debug, Deserialize)]
enum Payload {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Text(String),
    Bytes(Vec<u8>),
}

/// Encoding side of [`Payload`]: same variants in the same order, borrowing
/// text and bytes so no unzeroized plaintext copy is made
#[derive(Debug, Serialize)]
enum PayloadRef<'a> {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> TryFrom<&'a Term> for PayloadRef<'a> {
    type Error = CodecError;

    fn try_from(term: &'a Term) -> Result<Self, Self::Error> {
        Ok(match term {
            Term::Bool(v) => PayloadRef::Bool(*v),
            Term::Int(v) => PayloadRef::Int(*v),
            Term::Long(v) => PayloadRef::Long(*v),
            Term::Float(v) => PayloadRef::Float(*v),
            Term::Double(v) => PayloadRef::Double(*v),
            Term::Text(v) => PayloadRef::Text(v),
            Term::Bytes(v) => PayloadRef::Bytes(v),
            Term::Key(_) => return Err(CodecError::UnencodableValue(term.type_name())),
        })
    }
}

impl From<Payload> for Term {
    fn from(payload: Payload) -> Self {
        match payload {
            Payload::Bool(v) => Term::Bool(v),
            Payload::Int(v) => Term::Int(v),
            Payload::Long(v) => Term::Long(v),
            Payload::Float(v) => Term::Float(v),
            Payload::Double(v) => Term::Double(v),
            Payload::Text(v) => Term::Text(v),
            Payload::Bytes(v) => Term::Bytes(v),
        }
    }
}

/// Encode `term` into checksummed plaintext ready for a cipher
pub fn seal(term: &Term) -> Result<Zeroizing<Vec<u8>>, CodecError> {
    let payload = PayloadRef::try_from(term)?;
    let body = Zeroizing::new(
        rmp_serde::to_vec(&payload).map_err(|e| CodecError::SerializationFailed(e.to_string()))?,
    );

    let mut sealed = Zeroizing::new(Vec::with_capacity(CHECKSUM_SIZE + body.len()));
    sealed.extend_from_slice(&xxh3_64(&body).to_be_bytes());
    sealed.extend_from_slice(&body);
    Ok(sealed)
}

/// Verify and decode plaintext produced by [`seal`]
pub fn open(sealed: &[u8]) -> Result<Term, CodecError> {
    if sealed.len() < CHECKSUM_SIZE {
        return Err(CodecError::DeserializationFailed("payload too short".into()));
    }

    let (checksum, body) = sealed.split_at(CHECKSUM_SIZE);
    // Not secret: the checksum guards against wrong keys, not forgery
    if checksum != xxh3_64(body).to_be_bytes() {
        return Err(CodecError::ChecksumMismatch);
    }

    let payload: Payload = rmp_serde::from_slice(body)
        .map_err(|e| CodecError::DeserializationFailed(e.to_string()))?;
    Ok(payload.into())
}
