//! Signing service: resolves addresses through the keyring and answers the
//! two-operation signer protocol with monotonically numbered results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::debug;

use crate::config::AccountSpec;
use crate::error::SignerError;
use crate::keyring::{provision, KeyPair, Keyring};
use crate::registry::{BasicRegistry, TypeRegistry};
use crate::types::{SignerPayload, SignerPayloadRaw, SignerResult};

/// The wallet-signer protocol consumed by the transaction-submission layer.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    async fn sign_raw(&self, raw: &SignerPayloadRaw) -> Result<SignerResult, SignerError>;
    async fn sign_payload(&self, payload: &SignerPayload) -> Result<SignerResult, SignerError>;
}

/// In-process signer backed by the keyring.
///
/// Precondition: `provision` runs to completion before the first signing
/// call; concurrent provisioning and signing is not supported.
pub struct Signer {
    keyring: Mutex<Keyring>,
    registry: Arc<dyn TypeRegistry>,
    next_id: AtomicU64,
}

impl Signer {
    pub fn new(registry: Arc<dyn TypeRegistry>) -> Self {
        Signer {
            keyring: Mutex::new(Keyring::new()),
            registry,
            next_id: AtomicU64::new(0),
        }
    }

    /// Populate the keyring from the account configuration.
    pub fn provision(&self, specs: &[AccountSpec]) -> Result<(), SignerError> {
        let mut keyring = self.keyring.lock().expect("keyring lock poisoned");
        provision(&mut keyring, specs)
    }

    /// Insert a pair directly, returning the stored pair for chaining.
    pub fn add_pair(&self, pair: KeyPair) -> KeyPair {
        self.keyring
            .lock()
            .expect("keyring lock poisoned")
            .add_pair(pair)
    }

    /// Snapshot of all stored pairs in insertion order.
    pub fn pairs(&self) -> Vec<KeyPair> {
        self.keyring
            .lock()
            .expect("keyring lock poisoned")
            .pairs()
            .to_vec()
    }

    /// Resolve an address to its key pair via the registry's account-id
    /// equality. Fails with `AddressNotFound`.
    pub fn find_pair(&self, address: &str) -> Result<KeyPair, SignerError> {
        let keyring = self.keyring.lock().expect("keyring lock poisoned");
        keyring
            .find_by_address(address, self.registry.as_ref())
            .cloned()
    }

    // Ids are handed out only after a successful signature, so the sequence
    // stays gap-free across both call kinds.
    fn next_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for Signer {
    fn default() -> Self {
        Signer::new(Arc::new(BasicRegistry))
    }
}

#[async_trait]
impl TransactionSigner for Signer {
    async fn sign_raw(&self, raw: &SignerPayloadRaw) -> Result<SignerResult, SignerError> {
        let pair = self.find_pair(&raw.address)?;

        let stripped = raw.data.strip_prefix("0x").unwrap_or(&raw.data);
        let data = hex::decode(stripped)
            .map_err(|e| SignerError::Encoding(format!("bad raw data: {}", e)))?;

        let signature = pair.sign(&data)?;
        let id = self.next_request_id();
        debug!(id, address = %raw.address, "signed raw data");

        Ok(SignerResult {
            id,
            signature: format!("0x{}", hex::encode(signature.to_bytes())),
        })
    }

    async fn sign_payload(&self, payload: &SignerPayload) -> Result<SignerResult, SignerError> {
        let pair = self.find_pair(&payload.address)?;

        // Payload-to-bytes encoding belongs to the registry; its failures
        // propagate unchanged.
        let bytes = self.registry.encode_payload(payload)?;

        let signature = pair.sign(&bytes)?;
        let id = self.next_request_id();
        debug!(id, address = %payload.address, version = payload.version, "signed payload");

        Ok(SignerResult {
            id,
            signature: format!("0x{}", hex::encode(signature.to_bytes())),
        })
    }
}
