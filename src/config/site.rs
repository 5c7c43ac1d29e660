//! Public site configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Settings used when rendering absolute URLs and page chrome
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Public origin, without trailing slash (used by robots.txt and sitemap.xml)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Site name shown in page titles
    #[serde(default = "default_name")]
    pub name: String,
}

impl SiteConfig {
    /// Absolute URL for a site-relative path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Validate site configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.base_url.ends_with('/') {
            return Err(ValidationError::BaseUrlTrailingSlash);
        }
        if *environment == Environment::Production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::BaseUrlMustBeHttps);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("site.name"));
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            name: default_name(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_name() -> String {
    "Expert Directory".to_string()
}
