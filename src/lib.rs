pub mod assembler;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod github;
pub mod i18n;
pub mod llm;
pub mod registry;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{ComposerError, Result};
pub use generator::workflow::launch;
pub use registry::SectionRegistry;
pub use store::ComposerStore;
pub use types::{Document, Section, SectionKey};
