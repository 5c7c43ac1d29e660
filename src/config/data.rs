//! Data file configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Locations of the two directory documents
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Per-university profile document
    #[serde(default = "default_profiles_path")]
    pub profiles_path: PathBuf,

    /// Flat tag taxonomy document
    #[serde(default = "default_tags_path")]
    pub tags_path: PathBuf,
}

impl DataConfig {
    /// Validate data configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.profiles_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("data.profiles_path"));
        }
        if self.tags_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("data.tags_path"));
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            profiles_path: default_profiles_path(),
            tags_path: default_tags_path(),
        }
    }
}

fn default_profiles_path() -> PathBuf {
    PathBuf::from("data/prod.json")
}

fn default_tags_path() -> PathBuf {
    PathBuf::from("data/index_en.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_bundled_data() {
        let config = DataConfig::default();
        assert_eq!(config.profiles_path, PathBuf::from("data/prod.json"));
        assert_eq!(config.tags_path, PathBuf::from("data/index_en.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_paths_are_rejected() {
        let config = DataConfig {
            profiles_path: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("data.profiles_path"))
        );

        let config = DataConfig {
            tags_path: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("data.tags_path"))
        );
    }
}
