pub mod config;
pub mod encoding;
pub mod error;
pub mod keyring;
pub mod registry;
pub mod signer;
pub mod types;

pub use config::{AccountSpec, AccountsConfig, HdAccount};
pub use error::SignerError;
pub use keyring::{KeyPair, Keyring};
pub use registry::{AccountId, BasicRegistry, TypeRegistry};
pub use signer::{Signer, TransactionSigner};
pub use types::{SignerPayload, SignerPayloadRaw, SignerResult};
