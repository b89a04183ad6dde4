//! Command identifiers shared with the Java language client.

use async_trait::async_trait;
use tower_lsp_server::ls_types::Uri;

use crate::error::Result;

/// Client-side command that re-imports the project configuration.
pub const CONFIGURATION_UPDATE: &str = "java.projectConfiguration.update";

/// Command that rewrites the Gradle wrapper to a supported version.
pub const UPGRADE_GRADLE_WRAPPER: &str = "java.project.upgradeGradle";

/// External routine that performs the actual wrapper upgrade.
///
/// The mapper only decides that an upgrade should be offered; running it goes
/// through this seam.
#[async_trait]
pub trait WrapperUpgrader: Send + Sync {
    async fn upgrade(&self, project_uri: &Uri) -> Result<()>;
}
