use crate::alphabet::Alphabet;
use serde::Deserialize;
use std::collections::HashMap;

/// A named alphabet as declared in `alphabets.toml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AlphabetConfig {
    pub symbols: String,
}

impl AlphabetConfig {
    /// Builds the runtime alphabet for this entry.
    pub fn build(&self) -> Result<Alphabet, String> {
        Alphabet::from_str(&self.symbols)
    }
}

/// The set of alphabets available to the pipelines.
#[derive(Debug, Deserialize)]
pub struct AlphabetRegistry {
    pub alphabets: HashMap<String, AlphabetConfig>,
}

impl AlphabetRegistry {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load registry from a custom file path
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load the registry with user overrides from standard locations
    /// 1. Start with built-in alphabets
    /// 2. Override with ~/.config/motif-index/alphabets.toml if it exists
    /// 3. Override with ./alphabets.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut registry = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("motif-index").join("alphabets.toml");
            if user_config_path.exists() {
                match Self::load_from_file(&user_config_path) {
                    Ok(user_registry) => {
                        registry.merge(user_registry);
                    }
                    Err(e) => {
                        eprintln!(
                            "Warning: Failed to load user config from {:?}: {}",
                            user_config_path, e
                        );
                    }
                }
            }
        }

        let local_config_path = std::path::Path::new("alphabets.toml");
        if local_config_path.exists() {
            match Self::load_from_file(local_config_path) {
                Ok(local_registry) => {
                    registry.merge(local_registry);
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load local config from {:?}: {}",
                        local_config_path, e
                    );
                }
            }
        }

        Ok(registry)
    }

    /// Merge another registry into this one, overriding existing alphabets
    pub fn merge(&mut self, other: AlphabetRegistry) {
        for (name, alphabet) in other.alphabets {
            self.alphabets.insert(name, alphabet);
        }
    }

    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }
}
