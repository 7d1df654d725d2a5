//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod article;
pub mod completions;
pub mod config;
pub mod fetch;
pub mod search;

// Re-export argument types for use in mod.rs
pub use article::ArticleArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use fetch::FetchArgs;
pub use search::SearchArgs;
