//! Filesystem adapter for the directory JSON documents

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::directory::{ExpertCatalog, TagTaxonomy};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::DirectorySource;

/// Reads the profile and tag documents from JSON files on disk.
pub struct FsDirectorySource {
    profiles_path: PathBuf,
    tags_path: PathBuf,
}

impl FsDirectorySource {
    pub fn new(profiles_path: impl AsRef<Path>, tags_path: impl AsRef<Path>) -> Self {
        Self {
            profiles_path: profiles_path.as_ref().to_path_buf(),
            tags_path: tags_path.as_ref().to_path_buf(),
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T, DomainError> {
        tracing::debug!("Reading directory data from {}", path.display());

        let raw = fs::read_to_string(path).await.map_err(|e| {
            DomainError::new(
                ErrorCode::DataSourceUnavailable,
                format!("Failed to read {}: {}", path.display(), e),
            )
            .with_detail("path", path.display().to_string())
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            DomainError::new(
                ErrorCode::DataFormatInvalid,
                format!("Failed to parse {}: {}", path.display(), e),
            )
            .with_detail("path", path.display().to_string())
            .with_detail("line", e.line().to_string())
            .with_detail("column", e.column().to_string())
        })
    }
}

#[async_trait]
impl DirectorySource for FsDirectorySource {
    async fn load_catalog(&self) -> Result<ExpertCatalog, DomainError> {
        self.read_json(&self.profiles_path).await
    }

    async fn load_taxonomy(&self) -> Result<TagTaxonomy, DomainError> {
        self.read_json(&self.tags_path).await
    }

    fn describe(&self) -> String {
        format!(
            "files (profiles: {}, tags: {})",
            self.profiles_path.display(),
            self.tags_path.display()
        )
    }
}
