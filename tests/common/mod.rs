//! Shared fixtures for the crypto-actions integration tests.

pub mod fixtures;
