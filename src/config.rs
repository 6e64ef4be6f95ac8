use serde::{Deserialize, Serialize};

/// One entry in the network accounts configuration: either a bare secret URI
/// string or an HD expansion descriptor. The variant is decided when the
/// configuration is parsed, not at each use site.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum AccountSpec {
    Uri(String),
    Hd(HdAccount),
}

/// HD account descriptor: a mnemonic expanded at `path/i` for each index in
/// `[initial_index, count)`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HdAccount {
    pub mnemonic: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "default_initial_index", rename = "initialIndex")]
    pub initial_index: u32,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_initial_index() -> u32 {
    0
}

fn default_count() -> u32 {
    20
}

/// Ordered account list supplied by an external config loader.
pub type AccountsConfig = Vec<AccountSpec>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_config() {
        let json = r#"["//Alice", {"mnemonic": "one two three", "path": "//test", "count": 5}]"#;
        let config: AccountsConfig = serde_json::from_str(json).unwrap();

        assert!(matches!(&config[0], AccountSpec::Uri(uri) if uri == "//Alice"));
        match &config[1] {
            AccountSpec::Hd(hd) => {
                assert_eq!(hd.path.as_deref(), Some("//test"));
                assert_eq!(hd.initial_index, 0); // default
                assert_eq!(hd.count, 5);
            }
            other => panic!("expected HD spec, got {:?}", other),
        }
    }

    #[test]
    fn test_hd_defaults() {
        let json = r#"{"mnemonic": "one two three"}"#;
        let hd: HdAccount = serde_json::from_str(json).unwrap();
        assert_eq!(hd.initial_index, 0);
        assert_eq!(hd.count, 20);
        assert!(hd.path.is_none());
    }
}
