use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignerError {
    #[error("Invalid secret URI '{uri}': {reason}")]
    InvalidSecret { uri: String, reason: String },
    #[error("Can't find the keyring pair for {0}")]
    AddressNotFound(String),
    #[error("Key pair for {0} is locked")]
    PairLocked(String),
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl SignerError {
    pub fn invalid_secret(uri: &str, reason: impl ToString) -> Self {
        SignerError::InvalidSecret {
            uri: uri.to_string(),
            reason: reason.to_string(),
        }
    }
}
