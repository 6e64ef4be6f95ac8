//! Account provisioning: populate a keyring from a declarative account list.

use tracing::{error, info};

use super::pair::KeyPair;
use super::store::Keyring;
use crate::config::{AccountSpec, HdAccount};
use crate::error::SignerError;

/// Provision the keyring from the account specs, in order. Fails fast on the
/// first bad secret; pairs inserted for earlier specs stay in place.
pub fn provision(keyring: &mut Keyring, specs: &[AccountSpec]) -> Result<(), SignerError> {
    for spec in specs {
        match spec {
            AccountSpec::Uri(uri) => provision_uri(keyring, uri)?,
            AccountSpec::Hd(hd) => provision_hd(keyring, hd)?,
        }
    }
    Ok(())
}

fn provision_uri(keyring: &mut Keyring, uri: &str) -> Result<(), SignerError> {
    let mut pair = KeyPair::from_suri(uri).map_err(|e| {
        error!("bad secret URI: {}", e);
        e
    })?;

    // Diagnostic label only, never part of the address
    pair.name = Some(uri.replace("//", "_").to_lowercase());
    pair.suri = Some(uri.to_string());
    // Deterministic dev/test workflow: pairs are permanently unlocked
    pair.locked = false;

    info!(address = %pair.address, name = ?pair.name, "provisioned account");
    keyring.add_pair(pair);
    Ok(())
}

fn provision_hd(keyring: &mut Keyring, hd: &HdAccount) -> Result<(), SignerError> {
    let mut root = KeyPair::from_suri(&hd.mnemonic).map_err(|e| {
        error!("bad HD mnemonic: {}", e);
        SignerError::invalid_secret(&hd.mnemonic, e)
    })?;
    root.suri = Some(hd.mnemonic.clone());
    root.locked = false;

    let Some(path) = &hd.path else {
        // No path: store the root itself. With a path, only the derived
        // children are stored and the root is just the derivation base.
        info!(address = %root.address, "provisioned HD root account");
        keyring.add_pair(root);
        return Ok(());
    };

    if hd.initial_index >= hd.count {
        // Explicit degenerate range: nothing to derive, not an error
        return Ok(());
    }

    for i in hd.initial_index..hd.count {
        let derived_path = format!("{}/{}", path, i);
        let mut child = root.derive(&derived_path).map_err(|e| {
            error!("HD derivation failed at {}: {}", derived_path, e);
            SignerError::invalid_secret(&hd.mnemonic, e)
        })?;

        child.suri = Some(format!("{}{}", hd.mnemonic, derived_path));
        child.locked = false;
        keyring.add_pair(child);
    }

    info!(
        path = %path,
        count = hd.count - hd.initial_index,
        "provisioned HD accounts"
    );
    Ok(())
}
