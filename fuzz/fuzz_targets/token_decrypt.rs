#![no_main]

use arbitrary::Arbitrary;
use crypto_actions::{Crypto, CryptoAction, ErrorKind, KeyMaterial, SecretKey, Term};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum TokenForm {
    Text(String),
    Raw(Vec<u8>),
}

#[derive(Arbitrary, Debug)]
struct DecryptInput {
    mechanism: String,
    key: Vec<u8>,
    tokens: Vec<TokenForm>,
}

fuzz_target!(|input: DecryptInput| {
    // Attack: arbitrary keys and tokens fed straight to decrypt
    // Validates: no panics, failures commit nothing, only the documented kinds surface

    let DecryptInput { mechanism, key, tokens } = input;

    let mut args = vec![Term::from(KeyMaterial::Secret(SecretKey::from_bytes(mechanism, key)))];
    args.extend(tokens.into_iter().map(|token| match token {
        TokenForm::Text(text) => Term::Text(text),
        TokenForm::Raw(raw) => Term::Bytes(raw),
    }));

    let mut out = Vec::new();
    match Crypto::default().execute(CryptoAction::Decrypt, &args, &mut out) {
        Ok(()) => {
            // Forging a checksummed payload by chance is not a realistic outcome,
            // but if it happens every token must have produced exactly one value
            assert_eq!(out.len(), args.len() - 1);
        }
        Err(error) => {
            assert!(out.is_empty(), "failed decrypt must not emit values");
            assert!(matches!(
                error.kind(),
                ErrorKind::IllegalArgument | ErrorKind::IllegalState
            ));
        }
    }
});
