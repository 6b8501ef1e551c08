//! Directory enumeration capability supplied by the host.
//!
//! A [`DirSource`] opens a directory and hands back an iterator of [`RawEntry`] values. The
//! iterator is the open handle: `next` reads one member, `None` ends the stream, and dropping it
//! closes the handle.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

/// Kind reported by the host for a directory member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawKind {
    Directory,
    RegularFile,
    /// Sockets, devices, symlinks and anything else the lister does not show.
    Other,
}

/// Unfiltered directory member as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawEntry {
    pub name: String,
    pub kind: RawKind,
}

impl RawEntry {
    pub fn new(name: impl Into<String>, kind: RawKind) -> Self {
        Self { name: name.into(), kind }
    }
}

pub trait DirSource {
    type Entries: Iterator<Item = RawEntry>;

    /// Open `path` for enumeration. Any failure is reported as an I/O error.
    fn open(&self, path: &Path) -> io::Result<Self::Entries>;
}

impl<S: DirSource + ?Sized> DirSource for &S {
    type Entries = S::Entries;

    fn open(&self, path: &Path) -> io::Result<Self::Entries> {
        (**self).open(path)
    }
}

/// Host enumeration backed by [`std::fs::read_dir`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDirSource;

impl DirSource for StdDirSource {
    type Entries = StdEntries;

    fn open(&self, path: &Path) -> io::Result<StdEntries> {
        Ok(StdEntries { inner: fs::read_dir(path)?, done: false })
    }
}

#[derive(Debug)]
pub struct StdEntries {
    inner: fs::ReadDir,
    done: bool,
}

impl Iterator for StdEntries {
    type Item = RawEntry;

    fn next(&mut self) -> Option<RawEntry> {
        if self.done {
            return None;
        }

        match self.inner.next()? {
            Ok(entry) => {
                let kind = match entry.file_type() {
                    Ok(ft) if ft.is_dir() => RawKind::Directory,
                    Ok(ft) if ft.is_file() => RawKind::RegularFile,
                    _ => RawKind::Other,
                };
                let name = entry
                    .file_name()
                    .into_string()
                    .unwrap_or_else(|raw| raw.to_string_lossy().into_owned());
                Some(RawEntry { name, kind })
            }
            // A failed read ends the stream, same as an empty read.
            Err(err) => {
                debug!(error = %err, "directory read failed, ending enumeration");
                self.done = true;
                None
            }
        }
    }
}

/// In-memory host: every directory is registered up front with its raw members.
///
/// Entries are returned in registration order, so callers can simulate whatever order (and
/// whatever `.`/`..` or special-file members) a real platform would report.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirSource {
    dirs: HashMap<PathBuf, Vec<RawEntry>>,
    open_handles: Arc<AtomicUsize>,
}

impl MemoryDirSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` with the given members, replacing anything registered before.
    pub fn insert<I>(&mut self, path: impl Into<PathBuf>, entries: I)
    where
        I: IntoIterator<Item = RawEntry>,
    {
        self.dirs.insert(path.into(), entries.into_iter().collect());
    }

    pub fn with_dir<I>(mut self, path: impl Into<PathBuf>, entries: I) -> Self
    where
        I: IntoIterator<Item = RawEntry>,
    {
        self.insert(path, entries);
        self
    }

    pub fn remove(&mut self, path: &Path) -> Option<Vec<RawEntry>> {
        self.dirs.remove(path)
    }

    /// Number of handles opened through this source that have not been dropped yet.
    pub fn open_handles(&self) -> usize {
        self.open_handles.load(Ordering::SeqCst)
    }
}

impl DirSource for MemoryDirSource {
    type Entries = MemoryEntries;

    fn open(&self, path: &Path) -> io::Result<MemoryEntries> {
        let entries = self.dirs.get(path).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} is not registered", path.display()))
        })?;

        self.open_handles.fetch_add(1, Ordering::SeqCst);
        Ok(MemoryEntries {
            inner: entries.clone().into_iter(),
            open_handles: Arc::clone(&self.open_handles),
        })
    }
}

#[derive(Debug)]
pub struct MemoryEntries {
    inner: std::vec::IntoIter<RawEntry>,
    open_handles: Arc<AtomicUsize>,
}

impl Iterator for MemoryEntries {
    type Item = RawEntry;

    fn next(&mut self) -> Option<RawEntry> {
        self.inner.next()
    }
}

impl Drop for MemoryEntries {
    fn drop(&mut self) {
        self.open_handles.fetch_sub(1, Ordering::SeqCst);
    }
}
