//! Account-identifier codec and extrinsic-payload encoding seam.
//!
//! The signing subsystem does not define address encoding or payload layout
//! itself; it consumes both through the `TypeRegistry` trait. `BasicRegistry`
//! is the default implementation used by tests and dev networks.

use crate::encoding::CanonicalSerialize;
use crate::error::SignerError;
use crate::types::SignerPayload;

/// Typed 32-byte account identifier. Two textual encodings of the same
/// account (0x prefix, hex case) compare equal once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    pub fn from_hex(s: &str) -> Result<Self, SignerError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped)
            .map_err(|e| SignerError::Encoding(format!("bad account id '{}': {}", s, e)))?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| SignerError::Encoding(format!("account id '{}' must be 32 bytes", s)))?;
        Ok(AccountId(arr))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// Externally supplied type registry: address equality and payload encoding.
pub trait TypeRegistry: Send + Sync {
    /// Parse a textual address into the chain's typed account identifier.
    fn account_id(&self, address: &str) -> Result<AccountId, SignerError>;

    /// Encode a structured payload to signable bytes, parameterized by the
    /// payload's declared protocol version.
    fn encode_payload(&self, payload: &SignerPayload) -> Result<Vec<u8>, SignerError>;
}

/// Payload versions `BasicRegistry` understands. V4 adds the transaction
/// version to the signed material.
pub const PAYLOAD_V3: u32 = 3;
pub const PAYLOAD_V4: u32 = 4;

#[derive(Debug, Default, Clone)]
pub struct BasicRegistry;

impl TypeRegistry for BasicRegistry {
    fn account_id(&self, address: &str) -> Result<AccountId, SignerError> {
        AccountId::from_hex(address)
    }

    fn encode_payload(&self, payload: &SignerPayload) -> Result<Vec<u8>, SignerError> {
        if payload.version != PAYLOAD_V3 && payload.version != PAYLOAD_V4 {
            return Err(SignerError::Encoding(format!(
                "unsupported payload version {}",
                payload.version
            )));
        }

        let mut buf = Vec::new();
        buf.extend(payload.version.to_bytes());
        buf.extend(decode_hex_field("method", &payload.method)?.to_bytes());
        buf.extend(decode_hex_field("era", &payload.era)?.to_bytes());
        buf.extend(payload.nonce.to_bytes());
        buf.extend(payload.tip.to_bytes());
        buf.extend(payload.spec_version.to_bytes());
        if payload.version == PAYLOAD_V4 {
            buf.extend(payload.transaction_version.to_bytes());
        }
        buf.extend_from_slice(&decode_hash_field("genesisHash", &payload.genesis_hash)?);
        buf.extend_from_slice(&decode_hash_field("blockHash", &payload.block_hash)?);

        Ok(buf)
    }
}

fn decode_hex_field(field: &str, value: &str) -> Result<Vec<u8>, SignerError> {
    let stripped = value.strip_prefix("0x").unwrap_or(value);
    hex::decode(stripped).map_err(|e| SignerError::Encoding(format!("bad {} '{}': {}", field, value, e)))
}

fn decode_hash_field(field: &str, value: &str) -> Result<[u8; 32], SignerError> {
    decode_hex_field(field, value)?
        .try_into()
        .map_err(|_| SignerError::Encoding(format!("{} must be 32 bytes", field)))
}
