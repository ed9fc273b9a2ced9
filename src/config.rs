//! Configuration module for swapr
//!
//! Manages application configuration including catalog snapshot paths.
//! Configuration is stored in the user's config directory.

use crate::catalog::DEFAULT_PAGE_SIZE;
use crate::store::CatalogSnapshot;
use config::{Config, ConfigError, File, FileFormat};
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SwaprConfig {
    /// Map of catalog names to their snapshot file paths
    #[serde(default)]
    pub catalogs: HashMap<String, PathBuf>,

    /// The default catalog to use when none is specified
    #[serde(default)]
    pub default_catalog: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Page size used when a command does not specify one
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for SwaprConfig {
    fn default() -> Self {
        Self {
            catalogs: HashMap::new(),
            default_catalog: None,
            quiet: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SwaprConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        let swapr_config_dir = config_dir.join("swapr");
        Ok(swapr_config_dir.join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Add a catalog to the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn add_catalog(&mut self, name: String, path: PathBuf) -> Result<(), ConfigError> {
        self.catalogs.insert(name, path);
        self.save()
    }

    /// Remove a catalog from the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn remove_catalog(&mut self, name: &str) -> Result<Option<PathBuf>, ConfigError> {
        let removed = self.catalogs.remove(name);
        self.save()?;
        Ok(removed)
    }

    /// Get a catalog snapshot path by name
    #[must_use]
    pub fn get_catalog(&self, name: &str) -> Option<&PathBuf> {
        self.catalogs.get(name)
    }

    /// List all catalog names
    #[must_use]
    pub fn list_catalogs(&self) -> Vec<&String> {
        self.catalogs.keys().collect()
    }

    /// Set the default catalog
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the catalog name doesn't exist in the
    /// configuration or if saving the configuration fails.
    pub fn set_default_catalog(&mut self, name: String) -> Result<(), ConfigError> {
        if !self.catalogs.contains_key(&name) {
            return Err(ConfigError::Message(format!(
                "Catalog '{name}' does not exist in configuration"
            )));
        }
        self.default_catalog = Some(name);
        self.save()
    }

    /// Get the default catalog name
    #[must_use]
    pub const fn get_default_catalog(&self) -> Option<&String> {
        self.default_catalog.as_ref()
    }

    /// Interactive first-time setup - prompts for a catalog name and location
    ///
    /// Offers to seed the snapshot file with the sample catalog when it does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if user input cannot be read, the sample snapshot
    /// cannot be written, or saving the configuration fails.
    pub fn first_time_setup() -> Result<Self, ConfigError> {
        println!("Welcome to swapr! Let's set up your first catalog.\n");

        let default_data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?
            .join("swapr");

        let catalog_name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Catalog name")
            .default("default".to_string())
            .interact_text()
            .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

        let default_path = default_data_dir.join(format!("{catalog_name}.json"));
        let snapshot_path_str: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Snapshot file location")
            .default(default_path.to_string_lossy().to_string())
            .interact_text()
            .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

        let snapshot_path = PathBuf::from(snapshot_path_str);

        if !snapshot_path.exists() {
            let seed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt("Snapshot does not exist yet. Create it with sample data?")
                .default(true)
                .interact()
                .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

            if seed {
                CatalogSnapshot::sample().save(&snapshot_path).map_err(|e| {
                    ConfigError::Message(format!("Failed to write sample snapshot: {e}"))
                })?;
                println!("Sample catalog written to {}", snapshot_path.display());
            }
        }

        let mut config = Self::default();
        config.catalogs.insert(catalog_name.clone(), snapshot_path);
        config.default_catalog = Some(catalog_name);

        config.save()?;

        println!("\nConfiguration saved successfully!");
        Ok(config)
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load()
        } else {
            Self::first_time_setup()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SwaprConfig::default();
        assert!(config.catalogs.is_empty());
        assert!(config.default_catalog.is_none());
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_add_catalog() {
        let mut config = SwaprConfig::default();
        config
            .catalogs
            .insert("main".to_string(), PathBuf::from("/tmp/main.json"));

        assert_eq!(config.catalogs.len(), 1);
        assert_eq!(
            config.get_catalog("main"),
            Some(&PathBuf::from("/tmp/main.json"))
        );
    }

    #[test]
    fn test_remove_catalog_from_config() {
        let mut config = SwaprConfig::default();
        let path = PathBuf::from("/tmp/remove-me.json");

        config.catalogs.insert("remove-me".to_string(), path.clone());
        assert_eq!(config.catalogs.len(), 1);

        let removed = config.catalogs.remove("remove-me");
        assert_eq!(removed, Some(path));
        assert!(config.catalogs.is_empty());
    }

    #[test]
    fn test_remove_nonexistent_catalog() {
        let mut config = SwaprConfig::default();
        assert_eq!(config.catalogs.remove("nonexistent"), None);
    }

    #[test]
    fn test_list_catalogs() {
        let mut config = SwaprConfig::default();
        config
            .catalogs
            .insert("alpha".to_string(), PathBuf::from("/tmp/alpha.json"));
        config
            .catalogs
            .insert("beta".to_string(), PathBuf::from("/tmp/beta.json"));

        let names = config.list_catalogs();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&&"alpha".to_string()));
        assert!(names.contains(&&"beta".to_string()));
    }

    #[test]
    fn test_default_catalog_survives_removal() {
        let mut config = SwaprConfig::default();
        config
            .catalogs
            .insert("main".to_string(), PathBuf::from("/tmp/main.json"));
        config.default_catalog = Some("main".to_string());

        config.catalogs.remove("main");

        assert!(config.get_catalog("main").is_none());
        assert_eq!(config.get_default_catalog(), Some(&"main".to_string()));
    }

    #[test]
    fn test_page_size_deserialization_default() {
        let config: SwaprConfig = toml::from_str("quiet = true").unwrap();
        assert!(config.quiet);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }
}
