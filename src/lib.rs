//! dirsort - sort files into category subdirectories
//!
//! This library classifies files by extension using a fixed category table
//! and relocates each one into a per-category subdirectory, recursing through
//! the whole tree. The organizing logic is a plain function of the root path
//! to a report, so it is equally callable from the bundled CLI, a test
//! harness, or any other caller.

pub mod category;
pub mod cli;
pub mod organizer;
pub mod output;

pub use category::CategoryTable;
pub use organizer::{
    OrganizeError, OrganizeReport, OrganizeResult, OrganizeSummary, Organizer, organize,
};

pub use cli::{Cli, run};
