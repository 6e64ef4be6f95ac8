//! Keyring module
//!
//! This module implements the account keyring:
//! - Secret URI / mnemonic parsing and deterministic key derivation
//! - Insertion-ordered key pair storage with typed address lookup
//! - Provisioning from a declarative account configuration

pub mod pair;
pub mod provision;
pub mod store;
pub mod suri;

pub use pair::{verify_with_pubkey_hex, KeyPair};
pub use provision::provision;
pub use store::Keyring;
pub use suri::{DeriveJunction, SecretUri, DEV_PHRASE};
