use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use rand::RngCore;

use super::suri::SecretUri;
use crate::error::SignerError;

/// A key pair plus its derived address and keyring metadata.
#[derive(Clone)]
pub struct KeyPair {
    pub signing_key: SigningKey,
    /// Hex-encoded public key. Always a pure function of the public key.
    pub address: String,
    /// Human-readable label for diagnostics only, not part of the address.
    pub name: Option<String>,
    /// Original secret URI this pair was derived from, kept so the pair can
    /// be re-derived independently in a future process.
    pub suri: Option<String>,
    /// When set, secret-key operations are refused.
    pub locked: bool,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("address", &self.address)
            .field("name", &self.name)
            .field("locked", &self.locked)
            .finish()
    }
}

impl KeyPair {
    fn from_seed(seed: [u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(&seed);
        let address = hex::encode(signing_key.verifying_key().to_bytes());
        KeyPair {
            signing_key,
            address,
            name: None,
            suri: None,
            locked: false,
        }
    }

    /// Generate a fresh random pair (no recorded secret URI).
    pub fn generate() -> Self {
        let mut seed = [0u8; 32];
        let mut csprng = OsRng;
        csprng.fill_bytes(&mut seed);
        Self::from_seed(seed)
    }

    /// Generate a new 12-word mnemonic
    pub fn generate_mnemonic() -> String {
        let mut entropy = [0u8; 16]; // 128 bits = 12 words
        let mut csprng = OsRng;
        csprng.fill_bytes(&mut entropy);
        let mnemonic = bip39::Mnemonic::from_entropy(&entropy).expect("valid entropy length");
        mnemonic.to_string()
    }

    /// Derive a pair from a secret URI (mnemonic, hex seed, or dev `//name`
    /// form, with optional derivation junctions appended). Deterministic:
    /// the same URI always yields the same pair.
    pub fn from_suri(suri: &str) -> Result<Self, SignerError> {
        let parsed = SecretUri::parse(suri).map_err(|e| SignerError::invalid_secret(suri, e))?;
        let mut seed = parsed
            .seed()
            .map_err(|e| SignerError::invalid_secret(suri, e))?;

        for junction in &parsed.junctions {
            seed = junction.apply(&seed);
        }

        let mut pair = Self::from_seed(seed);
        pair.suri = Some(suri.to_string());
        Ok(pair)
    }

    /// Derive a child pair at `path` from this pair's seed. The child is
    /// re-derivable from `self.suri + path`.
    pub fn derive(&self, path: &str) -> Result<KeyPair, SignerError> {
        let junctions =
            SecretUri::parse_path(path).map_err(|e| SignerError::invalid_secret(path, e))?;

        let mut seed = self.signing_key.to_bytes();
        for junction in &junctions {
            seed = junction.apply(&seed);
        }

        let mut child = Self::from_seed(seed);
        child.suri = self.suri.as_ref().map(|s| format!("{}{}", s, path));
        Ok(child)
    }

    /// Sign a message with the private key (pair must be unlocked)
    pub fn sign(&self, message: &[u8]) -> Result<Signature, SignerError> {
        if self.locked {
            return Err(SignerError::PairLocked(self.address.clone()));
        }
        Ok(self.signing_key.sign(message))
    }

    /// Verify a signature against a message using this pair's public key
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.signing_key
            .verifying_key()
            .verify(message, signature)
            .is_ok()
    }

    /// Verify a hex signature string against a message using this pair's public key
    pub fn verify_hex(&self, message: &[u8], signature_hex: &str) -> bool {
        let stripped = signature_hex.strip_prefix("0x").unwrap_or(signature_hex);
        if let Ok(bytes) = hex::decode(stripped) {
            if let Ok(signature) = Signature::from_slice(&bytes) {
                return self.verify(message, &signature);
            }
        }
        false
    }

    /// Get the public key
    pub fn public_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// Get public key as hex string
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key().to_bytes())
    }

    /// Disable secret-key operations for this pair.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Re-enable secret-key operations for this pair.
    pub fn unlock(&mut self) {
        self.locked = false;
    }
}

/// Verify a signature against a message with a provided public key (hex)
pub fn verify_with_pubkey_hex(message: &[u8], signature_hex: &str, pubkey_hex: &str) -> bool {
    let sig_hex = signature_hex.strip_prefix("0x").unwrap_or(signature_hex);
    let pk_hex = pubkey_hex.strip_prefix("0x").unwrap_or(pubkey_hex);

    if let (Ok(sig_bytes), Ok(pk_bytes)) = (hex::decode(sig_hex), hex::decode(pk_hex)) {
        let pk_arr: Result<[u8; 32], _> = pk_bytes.try_into();
        if let (Ok(signature), Ok(pk_arr)) = (Signature::from_slice(&sig_bytes), pk_arr) {
            if let Ok(pubkey) = VerifyingKey::from_bytes(&pk_arr) {
                return pubkey.verify(message, &signature).is_ok();
            }
        }
    }
    false
}
