//! tidyext - sort a flat directory into category folders by file extension
//!
//! The library exposes the three pieces of a pass (directory reading,
//! extension classification and relocation) plus the orchestration that ties
//! them together and the optional filter configuration.

pub mod cli;
pub mod config;
pub mod error;
pub mod file_category;
pub mod file_organizer;
pub mod output;
pub mod scanner;

pub use config::{CompiledFilters, ConfigError, FilterConfig};
pub use error::{OrganizeError, OrganizeResult};
pub use file_category::{Category, FileMapper, classify};
pub use file_organizer::{FileOrganizer, Relocation};
pub use scanner::{DirectoryEntry, read_entries};

pub use cli::{OrganizeCommand, OrganizeReport, run_cli, run_cli_with_config};
