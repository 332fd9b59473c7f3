//! Concurrent Cipher Stress Tests
//!
//! Actions are stateless and keys are immutable, so one `Crypto` and one key
//! shared across many threads must behave exactly like a single thread: no
//! corrupted tokens, no cross-talk between threads, no repeated nonces.

mod common;

use common::fixtures::*;
use crypto_actions::{Crypto, CryptoAction, Term};
use std::collections::HashSet;
use std::sync::{Arc, Barrier, Mutex};
use std::thread;

const THREADS: usize = 16;
const ROUNDS: usize = 50;

#[test]
fn test_concurrent_symmetric_roundtrips() {
    let crypto = Arc::new(Crypto::default());
    let keys = Arc::new([des_key(), aes_key()]);
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let crypto = Arc::clone(&crypto);
            let keys = Arc::clone(&keys);
            let barrier = Arc::clone(&barrier);

            thread::spawn(move || {
                barrier.wait();
                for round in 0..ROUNDS {
                    let key = &keys[round % keys.len()];
                    let value = Term::from(format!("thread-{thread_id}-round-{round}"));

                    let mut tokens = Vec::new();
                    crypto
                        .execute(CryptoAction::Encrypt, &[key.clone(), value.clone()], &mut tokens)
                        .expect("encrypt should succeed");

                    let mut args = vec![key.clone()];
                    args.extend(tokens);
                    let mut values = Vec::new();
                    crypto
                        .execute(CryptoAction::Decrypt, &args, &mut values)
                        .expect("decrypt should succeed");

                    assert_eq!(values, vec![value]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread should complete");
    }
}

#[test]
fn test_concurrent_tokens_are_unique() {
    let crypto = Arc::new(Crypto::default());
    let key = aes_key();
    let seen = Arc::new(Mutex::new(HashSet::new()));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let crypto = Arc::clone(&crypto);
            let key = key.clone();
            let seen = Arc::clone(&seen);
            let barrier = Arc::clone(&barrier);

            thread::spawn(move || {
                barrier.wait();
                let mut args = vec![key];
                args.extend((0..ROUNDS).map(|_| Term::from(TEST_STRING)));

                let mut tokens = Vec::new();
                crypto
                    .execute(CryptoAction::Encrypt, &args, &mut tokens)
                    .expect("encrypt should succeed");

                let mut seen = seen.lock().expect("lock poisoned");
                for token in tokens {
                    let text = token.as_str().expect("token is text").to_owned();
                    assert!(seen.insert(text), "token repeated across threads");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread should complete");
    }

    assert_eq!(seen.lock().unwrap().len(), THREADS * ROUNDS);
}

#[test]
fn test_concurrent_rsa_shared_pair() {
    let (public, private) = rsa_pair();
    let pair = Arc::new((public, private));

    let handles: Vec<_> = (0..4)
        .map(|thread_id| {
            let pair = Arc::clone(&pair);
            thread::spawn(move || {
                for round in 0..5 {
                    let value = Term::Long((thread_id * 100 + round) as i64);
                    let tokens = encrypt(&pair.0, &[value.clone()]);
                    assert_eq!(decrypt(&pair.1, &tokens), vec![value]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread should complete");
    }
}

#[test]
fn test_concurrent_hash_matches_sequential() {
    let values = sample_values();
    let mut args = vec![Term::from("murmur3-128")];
    args.extend(values);
    let expected = run(CryptoAction::Hash, &args);
    let args = Arc::new(args);

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let args = Arc::clone(&args);
            thread::spawn(move || run(CryptoAction::Hash, &args))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread should complete"), expected);
    }
}
