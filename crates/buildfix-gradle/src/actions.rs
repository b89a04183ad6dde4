//! Diagnostic-to-action mapping for Gradle build problems.
//!
//! The Java language server attaches diagnostics to Gradle build files; this
//! module turns a batch of them into quick fixes:
//! - "Reload project" when a build file was edited after the last import
//! - "Upgrade Gradle Wrapper" when the wrapper descriptor pins an unsupported
//!   Gradle version and the enclosing project still exists on disk

use std::path::{Path, PathBuf};

use tower_lsp_server::ls_types::{
    CodeAction, CodeActionKind, CodeActionOrCommand, Command, Diagnostic, NumberOrString, Uri,
};

use crate::commands::{CONFIGURATION_UPDATE, UPGRADE_GRADLE_WRAPPER};
use crate::error::Result;
use crate::fs::ProjectFs;

/// Diagnostic source published by the Java language server.
pub const JAVA_DIAGNOSTIC_SOURCE: &str = "Java";

/// Message prefix for diagnostics about build files edited since the last
/// project import.
pub const BUILD_FILE_CHANGED_PREFIX: &str = "The build file has been changed";

/// Wrapper descriptor location relative to the project root.
pub const WRAPPER_PROPERTIES_DESCRIPTOR: &str = "gradle/wrapper/gradle-wrapper.properties";

/// Base problem id for Gradle issues reported by the language server.
pub const GRADLE_PROBLEM_ID: u32 = 0x0008_0000;

/// Problem id for a wrapper descriptor pinning an unsupported Gradle version.
pub const GRADLE_INVALID_TYPE_CODE_ID: u32 = GRADLE_PROBLEM_ID + 1;

/// Code action kind advertised in the server capabilities.
pub const GRADLE_QUICKFIX_KIND: CodeActionKind = CodeActionKind::new("quickfix.gradle");

const RELOAD_PROJECT_TITLE: &str = "Reload project";
const UPGRADE_WRAPPER_TITLE: &str = "Upgrade Gradle Wrapper";

/// Routing gate: only batches published by the Java language server are
/// inspected, decided on the first diagnostic.
pub fn is_java_diagnostic_batch(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.first().and_then(|d| d.source.as_deref()) == Some(JAVA_DIAGNOSTIC_SOURCE)
}

/// Maps diagnostics to quick fixes, preserving input order.
///
/// Each diagnostic yields at most one action and the first matching rule
/// wins; diagnostics matching neither rule are skipped. The only error path
/// is the existence probe itself: a probe answering `false` skips the
/// diagnostic silently, a failing probe aborts the whole request.
pub async fn provide_gradle_actions<F>(
    fs: &F,
    uri: &Uri,
    diagnostics: &[Diagnostic],
) -> Result<Vec<CodeActionOrCommand>>
where
    F: ProjectFs + ?Sized,
{
    let mut actions = Vec::new();
    let document_path = uri.path().to_string();

    for diagnostic in diagnostics {
        if diagnostic.message.starts_with(BUILD_FILE_CHANGED_PREFIX) {
            actions.push(reload_project_action(uri));
            continue;
        }

        if document_path.ends_with(WRAPPER_PROPERTIES_DESCRIPTOR)
            && code_matches(diagnostic, GRADLE_INVALID_TYPE_CODE_ID)
        {
            let Some(wrapper_path) = uri.to_file_path() else {
                tracing::debug!("wrapper diagnostic on non-file URI: {:?}", uri);
                continue;
            };
            let Some(project_root) = project_root_from_wrapper(&wrapper_path) else {
                continue;
            };
            if fs.path_exists(&project_root).await? {
                if let Some(action) = upgrade_wrapper_action(&project_root) {
                    actions.push(action);
                }
            } else {
                tracing::debug!("project root does not exist: {:?}", project_root);
            }
        }
    }

    Ok(actions)
}

/// The wrapper descriptor lives exactly three levels below the project root:
/// `<root>/gradle/wrapper/gradle-wrapper.properties`.
fn project_root_from_wrapper(wrapper_path: &Path) -> Option<PathBuf> {
    wrapper_path.ancestors().nth(3).map(Path::to_path_buf)
}

/// The language server publishes the numeric problem id as a string code, so
/// comparison happens in string form.
fn code_matches(diagnostic: &Diagnostic, id: u32) -> bool {
    match &diagnostic.code {
        Some(NumberOrString::String(code)) => *code == id.to_string(),
        Some(NumberOrString::Number(code)) => code.to_string() == id.to_string(),
        None => false,
    }
}

fn reload_project_action(uri: &Uri) -> CodeActionOrCommand {
    CodeActionOrCommand::CodeAction(CodeAction {
        title: RELOAD_PROJECT_TITLE.into(),
        kind: Some(CodeActionKind::QUICKFIX),
        command: Some(Command {
            title: "Reload Project".into(),
            command: CONFIGURATION_UPDATE.into(),
            arguments: Some(vec![serde_json::json!(uri)]),
        }),
        ..CodeAction::default()
    })
}

fn upgrade_wrapper_action(project_root: &Path) -> Option<CodeActionOrCommand> {
    let project_uri = Uri::from_file_path(project_root)?;
    Some(CodeActionOrCommand::CodeAction(CodeAction {
        title: UPGRADE_WRAPPER_TITLE.into(),
        kind: Some(GRADLE_QUICKFIX_KIND),
        command: Some(Command {
            title: UPGRADE_WRAPPER_TITLE.into(),
            command: UPGRADE_GRADLE_WRAPPER.into(),
            arguments: Some(vec![serde_json::json!(project_uri)]),
        }),
        ..CodeAction::default()
    }))
}
