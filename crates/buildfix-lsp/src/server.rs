use std::sync::Arc;

use buildfix_gradle::{
    BuildfixError, GRADLE_QUICKFIX_KIND, ProjectFs, TokioFs, UPGRADE_GRADLE_WRAPPER,
    WrapperUpgrader, is_java_diagnostic_batch, provide_gradle_actions,
};
use serde_json::Value;
use tokio::sync::RwLock;
use tower_lsp_server::ls_types::{
    CodeActionOptions, CodeActionParams, CodeActionProviderCapability, CodeActionResponse,
    ExecuteCommandOptions, ExecuteCommandParams, InitializeParams, InitializeResult,
    InitializedParams, MessageType, ServerCapabilities, ServerInfo, Uri,
};
use tower_lsp_server::{Client, LanguageServer, jsonrpc};

use crate::config::BuildfixConfig;
use crate::upgrade::ClientUpgrader;

pub struct Backend {
    client: Client,
    config: Arc<RwLock<BuildfixConfig>>,
    fs: Arc<dyn ProjectFs>,
    upgrader: Arc<dyn WrapperUpgrader>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        let upgrader = Arc::new(ClientUpgrader::new(client.clone()));
        Self::with_collaborators(client, Arc::new(TokioFs), upgrader)
    }

    /// Injection point for swapping the filesystem probe or the upgrade
    /// routine.
    pub fn with_collaborators(
        client: Client,
        fs: Arc<dyn ProjectFs>,
        upgrader: Arc<dyn WrapperUpgrader>,
    ) -> Self {
        Self {
            client,
            config: Arc::new(RwLock::new(BuildfixConfig::default())),
            fs,
            upgrader,
        }
    }

    fn server_capabilities() -> ServerCapabilities {
        ServerCapabilities {
            code_action_provider: Some(CodeActionProviderCapability::Options(CodeActionOptions {
                code_action_kinds: Some(vec![GRADLE_QUICKFIX_KIND]),
                ..Default::default()
            })),
            execute_command_provider: Some(ExecuteCommandOptions {
                commands: vec![UPGRADE_GRADLE_WRAPPER.into()],
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> jsonrpc::Result<InitializeResult> {
        tracing::info!("initializing buildfix-lsp server");

        // Parse initialization options
        if let Some(init_options) = params.initialization_options {
            if let Ok(config) = serde_json::from_value::<BuildfixConfig>(init_options) {
                tracing::debug!("loaded configuration: {:?}", config);
                *self.config.write().await = config;
            }
        }

        Ok(InitializeResult {
            capabilities: Self::server_capabilities(),
            server_info: Some(ServerInfo {
                name: "buildfix-lsp".into(),
                version: Some(env!("CARGO_PKG_VERSION").into()),
            }),
            offset_encoding: None,
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("buildfix-lsp server initialized");
        self.client
            .log_message(MessageType::INFO, "buildfix-lsp ready")
            .await;
    }

    async fn shutdown(&self) -> jsonrpc::Result<()> {
        tracing::info!("shutting down buildfix-lsp server");
        Ok(())
    }

    async fn code_action(
        &self,
        params: CodeActionParams,
    ) -> jsonrpc::Result<Option<CodeActionResponse>> {
        let uri = params.text_document.uri;
        let diagnostics = params.context.diagnostics;

        tracing::info!(
            "code_action request: uri={:?}, {} diagnostics",
            uri,
            diagnostics.len()
        );

        if !self.config.read().await.actions.enabled {
            return Ok(Some(vec![]));
        }

        if !is_java_diagnostic_batch(&diagnostics) {
            return Ok(Some(vec![]));
        }

        let actions = provide_gradle_actions(self.fs.as_ref(), &uri, &diagnostics)
            .await
            .map_err(to_rpc_error)?;
        Ok(Some(actions))
    }

    async fn execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> jsonrpc::Result<Option<Value>> {
        match params.command.as_str() {
            UPGRADE_GRADLE_WRAPPER => {
                let project_uri = project_uri_argument(&params.arguments).map_err(to_rpc_error)?;
                self.upgrader
                    .upgrade(&project_uri)
                    .await
                    .map_err(to_rpc_error)?;
                Ok(None)
            }
            other => {
                tracing::warn!("unknown command: {}", other);
                Err(jsonrpc::Error::method_not_found())
            }
        }
    }
}

/// The upgrade command carries the project root URI as its only argument.
fn project_uri_argument(arguments: &[Value]) -> buildfix_gradle::Result<Uri> {
    let raw = arguments
        .first()
        .and_then(Value::as_str)
        .ok_or_else(|| BuildfixError::InvalidArguments("expected a project URI".into()))?;
    raw.parse::<Uri>()
        .map_err(|_| BuildfixError::InvalidUri(raw.into()))
}

fn to_rpc_error(err: BuildfixError) -> jsonrpc::Error {
    tracing::error!("request failed: {}", err);
    let mut rpc = jsonrpc::Error::internal_error();
    rpc.message = err.to_string().into();
    rpc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_advertise_gradle_quickfix() {
        let capabilities = Backend::server_capabilities();

        let Some(CodeActionProviderCapability::Options(options)) =
            capabilities.code_action_provider
        else {
            panic!("code action provider not advertised");
        };
        assert_eq!(options.code_action_kinds, Some(vec![GRADLE_QUICKFIX_KIND]));

        let commands = capabilities
            .execute_command_provider
            .expect("execute command provider not advertised")
            .commands;
        assert_eq!(commands, vec![UPGRADE_GRADLE_WRAPPER.to_string()]);
    }

    #[test]
    fn test_project_uri_argument_round_trip() {
        let uri = Uri::from_file_path("/home/user/myproject").unwrap();
        let parsed = project_uri_argument(&[serde_json::json!(uri)]).unwrap();
        assert_eq!(parsed, uri);
    }

    #[test]
    fn test_project_uri_argument_missing() {
        let result = project_uri_argument(&[]);
        assert!(matches!(result, Err(BuildfixError::InvalidArguments(_))));
    }

    #[test]
    fn test_project_uri_argument_not_a_string() {
        let result = project_uri_argument(&[serde_json::json!(42)]);
        assert!(matches!(result, Err(BuildfixError::InvalidArguments(_))));
    }

    #[test]
    fn test_rpc_error_keeps_message() {
        let err = BuildfixError::InvalidArguments("expected a project URI".into());
        let rpc = to_rpc_error(err);
        assert!(rpc.message.contains("expected a project URI"));
    }
}
