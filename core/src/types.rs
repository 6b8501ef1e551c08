//! Shared data structures exchanged between the lister, the navigator, and front ends.

use std::path::{Path, PathBuf};

use crate::fs::ExtensionFilter;

/// Kind of a listed directory member. Anything else the host reports is dropped before it
/// reaches a [`Listing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    RegularFile,
}

/// One surviving member of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self { name: name.into(), kind }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Directory)
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::RegularFile)
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Ordered, filtered contents of one directory. Directories precede regular files.
pub type Listing = Vec<Entry>;

/// One level of browsing history: the directory shown and the filter to reapply on return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub path: PathBuf,
    pub filter: ExtensionFilter,
}

impl Frame {
    pub fn new(path: impl Into<PathBuf>, filter: ExtensionFilter) -> Self {
        Self { path: path.into(), filter }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
