//! Secret URI parsing: `phrase//hard/soft` style derivation strings

use bip39::{Language, Mnemonic};
use sha2::{Digest, Sha256};

/// Well-known development phrase used when a secret URI has no phrase part,
/// so that `//Alice` style URIs resolve to stable dev accounts.
pub const DEV_PHRASE: &str =
    "bottom drive obey lake curtain smoke basket hold race lonely fit walk";

/// A single step in a derivation path. `//name` is hard, `/name` is soft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeriveJunction {
    pub name: String,
    pub hard: bool,
}

impl DeriveJunction {
    /// Mix this junction into a parent seed.
    /// careful: This must be deterministic across platforms/versions.
    pub fn apply(&self, seed: &[u8; 32]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(b"ed25519-hdkd");
        hasher.update(seed);
        hasher.update([self.hard as u8]);
        hasher.update((self.name.len() as u32).to_le_bytes());
        hasher.update(self.name.as_bytes());
        hasher.finalize().into()
    }
}

/// A parsed secret URI: the seed phrase plus the derivation junctions
/// appended to it.
#[derive(Debug, Clone)]
pub struct SecretUri {
    pub phrase: String,
    pub junctions: Vec<DeriveJunction>,
}

impl SecretUri {
    /// Parse a full secret URI. Everything before the first `/` is the
    /// phrase (empty phrase selects `DEV_PHRASE`), the rest is junctions.
    pub fn parse(suri: &str) -> Result<Self, String> {
        let (phrase, path) = match suri.find('/') {
            Some(i) => (&suri[..i], &suri[i..]),
            None => (suri, ""),
        };

        Ok(SecretUri {
            phrase: phrase.to_string(),
            junctions: parse_junctions(path)?,
        })
    }

    /// Parse a bare derivation path (no phrase part).
    pub fn parse_path(path: &str) -> Result<Vec<DeriveJunction>, String> {
        if !path.starts_with('/') {
            return Err(format!("derivation path '{}' must start with '/'", path));
        }
        parse_junctions(path)
    }

    /// Resolve the phrase part to a 32-byte seed. Accepts a 0x-prefixed
    /// 32-byte hex seed or a BIP39 English mnemonic.
    pub fn seed(&self) -> Result<[u8; 32], String> {
        if let Some(hex_seed) = self.phrase.strip_prefix("0x") {
            let bytes = hex::decode(hex_seed).map_err(|e| format!("invalid hex seed: {}", e))?;
            return bytes
                .try_into()
                .map_err(|_| "hex seed must be exactly 32 bytes".to_string());
        }

        let phrase = if self.phrase.is_empty() {
            DEV_PHRASE
        } else {
            self.phrase.as_str()
        };

        let mnemonic = Mnemonic::parse_in_normalized(Language::English, phrase)
            .map_err(|e| format!("invalid mnemonic: {}", e))?;
        let seed = mnemonic.to_seed("");

        // Use first 32 bytes for the Ed25519 secret key
        let mut out = [0u8; 32];
        out.copy_from_slice(&seed[0..32]);
        Ok(out)
    }
}

fn parse_junctions(path: &str) -> Result<Vec<DeriveJunction>, String> {
    let mut junctions = Vec::new();
    let mut rest = path;

    while !rest.is_empty() {
        let hard = rest.starts_with("//");
        rest = &rest[if hard { 2 } else { 1 }..];

        let end = rest.find('/').unwrap_or(rest.len());
        let name = &rest[..end];
        if name.is_empty() {
            return Err(format!("empty junction in derivation path '{}'", path));
        }

        junctions.push(DeriveJunction {
            name: name.to_string(),
            hard,
        });
        rest = &rest[end..];
    }

    Ok(junctions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dev_uri() {
        let uri = SecretUri::parse("//Alice").unwrap();
        assert_eq!(uri.phrase, "");
        assert_eq!(uri.junctions.len(), 1);
        assert_eq!(uri.junctions[0].name, "Alice");
        assert!(uri.junctions[0].hard);
    }

    #[test]
    fn test_parse_mnemonic_with_path() {
        let uri = SecretUri::parse(&format!("{}//test/2", DEV_PHRASE)).unwrap();
        assert_eq!(uri.phrase, DEV_PHRASE);
        assert_eq!(uri.junctions.len(), 2);
        assert!(uri.junctions[0].hard);
        assert_eq!(uri.junctions[0].name, "test");
        assert!(!uri.junctions[1].hard);
        assert_eq!(uri.junctions[1].name, "2");
    }

    #[test]
    fn test_parse_rejects_empty_junction() {
        assert!(SecretUri::parse("//").is_err());
        assert!(SecretUri::parse("///x").is_err());
        assert!(SecretUri::parse_path("test/0").is_err());
    }

    #[test]
    fn test_seed_is_deterministic() {
        let uri = SecretUri::parse("//Alice").unwrap();
        assert_eq!(uri.seed().unwrap(), uri.seed().unwrap());
    }

    #[test]
    fn test_junction_application_differs_by_name_and_hardness() {
        let seed = [7u8; 32];
        let hard_a = DeriveJunction { name: "a".into(), hard: true };
        let soft_a = DeriveJunction { name: "a".into(), hard: false };
        let hard_b = DeriveJunction { name: "b".into(), hard: true };

        assert_ne!(hard_a.apply(&seed), soft_a.apply(&seed));
        assert_ne!(hard_a.apply(&seed), hard_b.apply(&seed));
        assert_eq!(hard_a.apply(&seed), hard_a.apply(&seed));
    }

    #[test]
    fn test_invalid_phrase_rejected() {
        let uri = SecretUri::parse("not-a-valid-secret").unwrap();
        assert!(uri.seed().is_err());

        let short = SecretUri::parse("0xdeadbeef").unwrap();
        assert!(short.seed().is_err());
    }
}
