//! Signer-protocol wire types

use serde::{Deserialize, Serialize};

/// Raw-bytes signing request: `data` is 0x-prefixed hex.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SignerPayloadRaw {
    pub address: String,
    pub data: String,
}

/// Structured extrinsic payload. `version` selects the registry encoding.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SignerPayload {
    pub address: String,
    /// 0x-prefixed hex of the encoded call.
    pub method: String,
    pub nonce: u64,
    #[serde(default = "default_era")]
    pub era: String,
    #[serde(default)]
    pub tip: u128,
    pub spec_version: u32,
    pub transaction_version: u32,
    pub genesis_hash: String,
    pub block_hash: String,
    pub version: u32,
}

fn default_era() -> String {
    // Immortal era
    "0x00".to_string()
}

/// Result of either signing operation: the monotonic request id plus the
/// 0x-prefixed hex signature.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SignerResult {
    pub id: u64,
    pub signature: String,
}
