//! Dispatch shell binding the four crypto actions to the interpreter's
//! calling convention
//!
//! Every action reads an ordered argument slice and appends results to a
//! caller-owned sink. Results are collected first and appended only once the
//! whole call succeeded, so a failing call leaves the sink untouched.

use crate::cipher::CipherKey;
use crate::config::CryptoConfig;
use crate::digest::hash_term;
use crate::error::ActionError;
use crate::keys::{KeyMaterial, generate_keys};
use crate::registry::{CipherAlgorithm, HashAlgorithm};
use crate::term::Term;
use log::{debug, trace};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// The actions this crate exposes to an interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CryptoAction {
    Hash,
    CreateKey,
    Encrypt,
    Decrypt,
}

impl CryptoAction {
    pub const ALL: [CryptoAction; 4] = [
        CryptoAction::Hash,
        CryptoAction::CreateKey,
        CryptoAction::Encrypt,
        CryptoAction::Decrypt,
    ];

    /// Name under which the interpreter registers the action
    pub fn name(&self) -> &'static str {
        match self {
            CryptoAction::Hash => "crypto/hash",
            CryptoAction::CreateKey => "crypto/createkey",
            CryptoAction::Encrypt => "crypto/encrypt",
            CryptoAction::Decrypt => "crypto/decrypt",
        }
    }

    /// Arguments required before the action can run
    pub fn minimal_arguments(&self) -> usize {
        1
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(name))
    }
}

impl FromStr for CryptoAction {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| ActionError::IllegalArgument(format!("unknown action: {s:?}")))
    }
}

impl fmt::Display for CryptoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stateless executor for the crypto actions
///
/// Holds only configuration; every call is independent and `Crypto` can be
/// shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Crypto {
    config: CryptoConfig,
}

impl Crypto {
    pub fn new(config: CryptoConfig) -> Result<Self, ActionError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CryptoConfig {
        &self.config
    }

    /// Run `action` over `arguments`, appending its results to `output`
    pub fn execute<O>(
        &self,
        action: CryptoAction,
        arguments: &[Term],
        output: &mut O,
    ) -> Result<(), ActionError>
    where
        O: Extend<Term>,
    {
        match action {
            CryptoAction::Hash => self.hash(arguments, output),
            CryptoAction::CreateKey => self.create_key(arguments, output),
            CryptoAction::Encrypt => self.encrypt(arguments, output),
            CryptoAction::Decrypt => self.decrypt(arguments, output),
        }
    }

    /// `hash(algorithm, value...)`: one lowercase hex digest per value
    pub fn hash<O>(&self, arguments: &[Term], output: &mut O) -> Result<(), ActionError>
    where
        O: Extend<Term>,
    {
        let (head, values) = split_head(CryptoAction::Hash, arguments)?;
        let algorithm = HashAlgorithm::from_name(algorithm_name(CryptoAction::Hash, head)?)?;

        let digests = values
            .iter()
            .map(|value| hash_term(algorithm, value).map(Term::Text))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("{}: {} digest(s) under {algorithm}", CryptoAction::Hash, digests.len());
        output.extend(digests);
        Ok(())
    }

    /// `createKey(algorithm)`: one key for symmetric ciphers, `public, private` for RSA
    pub fn create_key<O>(&self, arguments: &[Term], output: &mut O) -> Result<(), ActionError>
    where
        O: Extend<Term>,
    {
        let (head, rest) = split_head(CryptoAction::CreateKey, arguments)?;
        let algorithm =
            CipherAlgorithm::from_name(algorithm_name(CryptoAction::CreateKey, head)?)?;
        if !rest.is_empty() {
            return Err(ActionError::IllegalArgument(format!(
                "{} takes exactly one argument, got {}",
                CryptoAction::CreateKey,
                arguments.len()
            )));
        }

        let keys = generate_keys(algorithm, &self.config)?;
        debug_assert_eq!(keys.len(), algorithm.key_count());

        debug!("{}: generated {} {algorithm} key(s)", CryptoAction::CreateKey, keys.len());
        output.extend(keys.into_iter().map(|key| Term::Key(Arc::new(key))));
        Ok(())
    }

    /// `encrypt(key, value...)`: one token per value
    pub fn encrypt<O>(&self, arguments: &[Term], output: &mut O) -> Result<(), ActionError>
    where
        O: Extend<Term>,
    {
        let (head, values) = split_head(CryptoAction::Encrypt, arguments)?;
        let cipher = CipherKey::resolve(key_argument(CryptoAction::Encrypt, head)?)?;

        let tokens = values
            .iter()
            .map(|value| cipher.encrypt(value).map(Term::Text))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "{}: {} value(s) under {}",
            CryptoAction::Encrypt,
            tokens.len(),
            cipher.algorithm()
        );
        output.extend(tokens);
        Ok(())
    }

    /// `decrypt(key, token...)`: the original value for each token
    pub fn decrypt<O>(&self, arguments: &[Term], output: &mut O) -> Result<(), ActionError>
    where
        O: Extend<Term>,
    {
        let (head, tokens) = split_head(CryptoAction::Decrypt, arguments)?;
        let cipher = CipherKey::resolve(key_argument(CryptoAction::Decrypt, head)?)?;

        let values = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                trace!("{}: opening token {}", CryptoAction::Decrypt, index + 1);
                match token {
                    Term::Text(text) => Ok(cipher.decrypt(text)?),
                    Term::Bytes(raw) => Ok(cipher.decrypt_bytes(raw)?),
                    other => Err(ActionError::IllegalArgument(format!(
                        "{} argument {} must be a token, got {}",
                        CryptoAction::Decrypt,
                        index + 1,
                        other.type_name()
                    ))),
                }
            })
            .collect::<Result<Vec<_>, ActionError>>()?;

        debug!(
            "{}: {} value(s) under {}",
            CryptoAction::Decrypt,
            values.len(),
            cipher.algorithm()
        );
        output.extend(values);
        Ok(())
    }
}

fn split_head(action: CryptoAction, arguments: &[Term]) -> Result<(&Term, &[Term]), ActionError> {
    arguments.split_first().ok_or_else(|| {
        ActionError::IllegalArgument(format!(
            "{action} needs at least {} argument(s)",
            action.minimal_arguments()
        ))
    })
}

fn algorithm_name(action: CryptoAction, term: &Term) -> Result<&str, ActionError> {
    term.as_str().ok_or_else(|| {
        ActionError::IllegalArgument(format!(
            "{action} expects an algorithm name, got {}",
            term.type_name()
        ))
    })
}

fn key_argument(action: CryptoAction, term: &Term) -> Result<&KeyMaterial, ActionError> {
    term.as_key().ok_or_else(|| {
        ActionError::IllegalArgument(format!("{action} expects a key, got {}", term.type_name()))
    })
}
