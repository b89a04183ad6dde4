//! Delegation target for the wrapper upgrade command.
//!
//! The server never rewrites the wrapper itself. Accepted upgrade commands
//! are forwarded to the client, which owns the actual upgrade routine.

use async_trait::async_trait;
use buildfix_gradle::{Result, WrapperUpgrader};
use serde::{Deserialize, Serialize};
use tower_lsp_server::Client;
use tower_lsp_server::ls_types::Uri;
use tower_lsp_server::ls_types::notification::Notification;

/// `buildfix/upgradeGradleWrapper` notification sent to the client.
#[derive(Debug)]
pub enum UpgradeGradleWrapper {}

/// Payload: the root of the project whose wrapper should be upgraded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeGradleWrapperParams {
    pub project_uri: Uri,
}

impl Notification for UpgradeGradleWrapper {
    type Params = UpgradeGradleWrapperParams;
    const METHOD: &'static str = "buildfix/upgradeGradleWrapper";
}

/// Production [`WrapperUpgrader`]: hands the project over to the client.
pub struct ClientUpgrader {
    client: Client,
}

impl ClientUpgrader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WrapperUpgrader for ClientUpgrader {
    async fn upgrade(&self, project_uri: &Uri) -> Result<()> {
        tracing::info!("delegating wrapper upgrade for {:?}", project_uri);
        self.client
            .send_notification::<UpgradeGradleWrapper>(UpgradeGradleWrapperParams {
                project_uri: project_uri.clone(),
            })
            .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_method() {
        assert_eq!(UpgradeGradleWrapper::METHOD, "buildfix/upgradeGradleWrapper");
    }

    #[test]
    fn test_params_wire_shape() {
        let params = UpgradeGradleWrapperParams {
            project_uri: Uri::from_file_path("/home/user/myproject").unwrap(),
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["projectUri"], "file:///home/user/myproject");
    }
}
