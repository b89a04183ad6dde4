//! Gradle build integration quick fixes.
//!
//! Maps diagnostics published by the Java language server onto two
//! remediations:
//! - reloading a project whose build file changed after the last import
//! - upgrading a Gradle wrapper pinned to an unsupported version
//!
//! The crate only decides which fixes to surface. Executing them is delegated
//! to the client command registry and the [`WrapperUpgrader`] seam.

pub mod actions;
pub mod commands;
pub mod error;
pub mod fs;

pub use actions::{
    BUILD_FILE_CHANGED_PREFIX, GRADLE_INVALID_TYPE_CODE_ID, GRADLE_PROBLEM_ID,
    GRADLE_QUICKFIX_KIND, JAVA_DIAGNOSTIC_SOURCE, WRAPPER_PROPERTIES_DESCRIPTOR,
    is_java_diagnostic_batch, provide_gradle_actions,
};
pub use commands::{CONFIGURATION_UPDATE, UPGRADE_GRADLE_WRAPPER, WrapperUpgrader};
pub use error::{BuildfixError, Result};
pub use fs::{ProjectFs, TokioFs};
