use super::pair::KeyPair;
use crate::error::SignerError;
use crate::registry::TypeRegistry;

/// Insertion-ordered collection of key pairs, looked up by typed address
/// equality rather than raw string comparison.
#[derive(Debug, Default)]
pub struct Keyring {
    pairs: Vec<KeyPair>,
}

impl Keyring {
    pub fn new() -> Self {
        Keyring { pairs: Vec::new() }
    }

    /// Insert a pair, returning the stored pair for chaining. Re-inserting
    /// at an existing address replaces that entry in place; the address pins
    /// the public key, so this can only be the same pair.
    pub fn add_pair(&mut self, pair: KeyPair) -> KeyPair {
        if let Some(existing) = self.pairs.iter_mut().find(|p| p.address == pair.address) {
            *existing = pair.clone();
        } else {
            self.pairs.push(pair.clone());
        }
        pair
    }

    /// All stored pairs in insertion order.
    pub fn pairs(&self) -> &[KeyPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Find the pair whose address equals `address` under the registry's
    /// account-identifier equality. An address that cannot be parsed at all
    /// cannot match any stored pair.
    pub fn find_by_address(
        &self,
        address: &str,
        registry: &dyn TypeRegistry,
    ) -> Result<&KeyPair, SignerError> {
        let target = match registry.account_id(address) {
            Ok(target) => target,
            Err(_) => return Err(SignerError::AddressNotFound(address.to_string())),
        };

        self.pairs
            .iter()
            .find(|pair| {
                registry
                    .account_id(&pair.address)
                    .map(|id| id == target)
                    .unwrap_or(false)
            })
            .ok_or_else(|| SignerError::AddressNotFound(address.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BasicRegistry;

    #[test]
    fn test_insertion_order_preserved() {
        let mut keyring = Keyring::new();
        let alice = keyring.add_pair(KeyPair::from_suri("//Alice").unwrap());
        let bob = keyring.add_pair(KeyPair::from_suri("//Bob").unwrap());

        let addresses: Vec<_> = keyring.pairs().iter().map(|p| p.address.clone()).collect();
        assert_eq!(addresses, vec![alice.address, bob.address]);
    }

    #[test]
    fn test_reinsert_same_address_does_not_duplicate() {
        let mut keyring = Keyring::new();
        keyring.add_pair(KeyPair::from_suri("//Alice").unwrap());
        keyring.add_pair(KeyPair::from_suri("//Alice").unwrap());

        assert_eq!(keyring.len(), 1);
    }

    #[test]
    fn test_find_by_address_normalizes_encoding() {
        let registry = BasicRegistry;
        let mut keyring = Keyring::new();
        let alice = keyring.add_pair(KeyPair::from_suri("//Alice").unwrap());

        let prefixed = format!("0x{}", alice.address);
        let upper = alice.address.to_uppercase();

        assert_eq!(
            keyring.find_by_address(&prefixed, &registry).unwrap().address,
            alice.address
        );
        assert_eq!(
            keyring.find_by_address(&upper, &registry).unwrap().address,
            alice.address
        );
    }

    #[test]
    fn test_find_by_address_misses() {
        let registry = BasicRegistry;
        let mut keyring = Keyring::new();
        keyring.add_pair(KeyPair::from_suri("//Alice").unwrap());

        let stranger = KeyPair::generate();
        assert!(matches!(
            keyring.find_by_address(&stranger.address, &registry),
            Err(SignerError::AddressNotFound(_))
        ));
        assert!(matches!(
            keyring.find_by_address("not-an-address", &registry),
            Err(SignerError::AddressNotFound(_))
        ));
    }
}
