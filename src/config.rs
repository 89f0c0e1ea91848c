//! Configuration handling for the TUI

use crate::host::ListingOptions;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CATEGORIES: &[&str] = &[
    "Electronics",
    "Furniture",
    "Clothing",
    "Books",
    "Sports",
    "Garden",
    "Toys",
];

const DEFAULT_LOCATIONS: &[&str] = &[
    "Warsaw",
    "Krakow",
    "Lodz",
    "Wroclaw",
    "Poznan",
    "Gdansk",
    "Szczecin",
    "Lublin",
];

const DEFAULT_VOIVODESHIPS: &[&str] = &[
    "Dolnośląskie",
    "Kujawsko-Pomorskie",
    "Lubelskie",
    "Lubuskie",
    "Łódzkie",
    "Małopolskie",
    "Mazowieckie",
    "Opolskie",
    "Podkarpackie",
    "Podlaskie",
    "Pomorskie",
    "Śląskie",
    "Świętokrzyskie",
    "Warmińsko-Mazurskie",
    "Wielkopolskie",
    "Zachodniopomorskie",
];

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Categories offered in the category picker
    pub categories: Option<Vec<String>>,
    /// Locations offered in the location picker
    pub locations: Option<Vec<String>>,
    /// Regions offered in the region picker
    pub voivodeships: Option<Vec<String>>,
}

fn list_or_default(list: &Option<Vec<String>>, default: &[&str]) -> Vec<String> {
    match list {
        Some(items) if !items.is_empty() => items.clone(),
        _ => default.iter().map(|s| s.to_string()).collect(),
    }
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "listing", "listing-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load the config, writing one with the built-in option lists on first run
    /// so the lists can be edited in place
    pub fn load_or_init() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if path.exists() {
            return Self::load(&path);
        }

        let config = Self::with_default_lists();
        if let Err(err) = config.save(&path) {
            tracing::warn!("Could not write default config to {}: {err}", path.display());
        }
        Ok(config)
    }

    /// Load configuration from file; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::info!("Wrote config to {}", path.display());
        Ok(())
    }

    /// Config with every list spelled out
    fn with_default_lists() -> Self {
        let options = Self::default().listing_options();
        Self {
            categories: Some(options.categories),
            locations: Some(options.locations),
            voivodeships: Some(options.voivodeships),
        }
    }

    /// Option lists for the modal; missing or empty lists fall back to defaults
    pub fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            categories: list_or_default(&self.categories, DEFAULT_CATEGORIES),
            locations: list_or_default(&self.locations, DEFAULT_LOCATIONS),
            voivodeships: list_or_default(&self.voivodeships, DEFAULT_VOIVODESHIPS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.categories.is_none());
        assert!(config.locations.is_none());
        assert!(config.voivodeships.is_none());
    }

    #[test]
    fn test_default_options_are_filled() {
        let options = TuiConfig::default().listing_options();
        assert_eq!(options.categories.len(), DEFAULT_CATEGORIES.len());
        assert_eq!(options.locations[0], "Warsaw");
        assert_eq!(options.voivodeships.len(), 16);
    }

    #[test]
    fn test_configured_lists_keep_order() {
        let config = TuiConfig {
            categories: Some(vec!["Zebra".to_string(), "Aardvark".to_string()]),
            ..Default::default()
        };
        let options = config.listing_options();
        assert_eq!(options.categories, vec!["Zebra", "Aardvark"]);
        assert_eq!(options.locations.len(), DEFAULT_LOCATIONS.len());
    }

    #[test]
    fn test_empty_list_falls_back_to_default() {
        let config = TuiConfig {
            locations: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(
            config.listing_options().locations.len(),
            DEFAULT_LOCATIONS.len()
        );
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            categories: Some(vec!["Books".to_string()]),
            locations: Some(vec!["Gdansk".to_string()]),
            voivodeships: Some(vec!["Pomorskie".to_string()]),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.categories, Some(vec!["Books".to_string()]));
        assert_eq!(parsed.locations, Some(vec!["Gdansk".to_string()]));
        assert_eq!(parsed.voivodeships, Some(vec!["Pomorskie".to_string()]));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.categories.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"categories": ["Books"], "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.categories, Some(vec!["Books".to_string()]));
    }

    #[test]
    fn test_config_path_is_json_file() {
        if let Some(path) = TuiConfig::config_path() {
            assert_eq!(path.file_name().unwrap(), "config.json");
        }
    }

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("listing-tui-config-{}-{name}", std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let path = temp_config_path("round-trip");
        let config = TuiConfig {
            categories: Some(vec!["Books".to_string()]),
            ..Default::default()
        };

        config.save(&path).unwrap();
        let loaded = TuiConfig::load(&path).unwrap();
        assert_eq!(loaded.categories, Some(vec!["Books".to_string()]));
        assert!(loaded.locations.is_none());

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let loaded = TuiConfig::load(&temp_config_path("missing")).unwrap();
        assert!(loaded.categories.is_none());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let path = temp_config_path("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(TuiConfig::load(&path).is_err());
        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_default_lists_are_spelled_out() {
        let config = TuiConfig::with_default_lists();
        assert_eq!(config.voivodeships.as_ref().map(Vec::len), Some(16));
        assert_eq!(
            config.categories.as_ref().map(Vec::len),
            Some(DEFAULT_CATEGORIES.len())
        );
    }
}
