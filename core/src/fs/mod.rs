//! Directory listing layer: host enumeration, extension filtering, and ordering.

pub mod filter;
pub mod listing;
pub mod sort;
pub mod source;

pub use filter::{ExtensionFilter, extension, matches};
pub use listing::parse_directory;
pub use sort::{compare_entries, compare_names, sort_entries};
pub use source::{DirSource, MemoryDirSource, MemoryEntries, RawEntry, RawKind, StdDirSource, StdEntries};
