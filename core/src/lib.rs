//! Core library for the directory navigator.
//!
//! [`fs`] lists, filters, and orders one directory through a host-supplied enumeration
//! capability; [`browser`] keeps the stack of visited frames on top of it.

#![deny(missing_debug_implementations)]

pub mod browser;
pub mod config;
pub mod error;
pub mod fs;
pub mod log;
pub mod types;

pub type Result<T> = std::result::Result<T, anyhow::Error>;

pub use browser::Navigator;
pub use config::BrowserConfig;
pub use error::BrowseError;
pub use fs::{DirSource, ExtensionFilter, MemoryDirSource, StdDirSource, parse_directory};
pub use types::{Entry, EntryKind, Frame, Listing};

/// Returns the version of the core crate for diagnostics.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
