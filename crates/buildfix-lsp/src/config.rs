//! Server configuration, received via LSP initialization options.

use serde::Deserialize;

/// Top-level configuration block.
///
/// Unknown fields are ignored so clients can ship richer settings objects.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildfixConfig {
    pub actions: ActionsConfig,
}

/// Quick-fix settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionsConfig {
    /// Master switch for offering quick fixes.
    pub enabled: bool,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
