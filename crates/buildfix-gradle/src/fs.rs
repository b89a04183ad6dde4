//! Filesystem collaborator for project existence probes.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

/// Async existence probe for project directories.
///
/// The mapper checks that a derived project root still exists before offering
/// a wrapper upgrade. Absence is a normal `Ok(false)`; only a probe that
/// cannot answer (permissions, unreadable parent) surfaces as an error.
#[async_trait]
pub trait ProjectFs: Send + Sync {
    async fn path_exists(&self, path: &Path) -> Result<bool>;
}

/// Production probe backed by `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

#[async_trait]
impl ProjectFs for TokioFs {
    async fn path_exists(&self, path: &Path) -> Result<bool> {
        Ok(tokio::fs::try_exists(path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(TokioFs.path_exists(dir.path()).await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-project");
        assert!(!TokioFs.path_exists(&missing).await.unwrap());
    }
}
