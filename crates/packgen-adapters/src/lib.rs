//! Infrastructure adapters for packgen.
//!
//! This crate implements the ports defined in `packgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod git_cli;
pub mod npm;
pub mod shell;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use git_cli::GitCli;
pub use npm::NpmVersionResolver;
pub use shell::ShellRunner;
