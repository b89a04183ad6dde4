pub mod config;
pub mod server;
pub mod upgrade;

// Re-export from buildfix-gradle
pub use buildfix_gradle::{BuildfixError, Result};

// Re-export server
pub use server::Backend;
