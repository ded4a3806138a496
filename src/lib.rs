//! shelve - organize a folder's files into category subfolders
//!
//! This library classifies files by extension against a fixed category table,
//! resolves collision-free destination paths, and moves files into category
//! subdirectories within a single target directory.

pub mod cli;
pub mod file_category;
pub mod file_organizer;
pub mod output;

pub use cli::{Cli, organize_directory, run};
pub use file_category::{CategoryTable, FALLBACK_CATEGORY, TableError};
pub use file_organizer::{
    FileOrganizer, OrganizeError, RunSummary, resolve_destination, split_extension,
};
