//! Directory parsing: enumerate, filter, and order one directory.

use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::BrowseError;
use crate::types::{Entry, EntryKind, Listing};

use super::filter::ExtensionFilter;
use super::sort::sort_entries;
use super::source::{DirSource, RawEntry, RawKind};

const SELF_REFERENCE: &str = ".";

/// Enumerate `path` through `source` and return the surviving entries in display order.
///
/// Only directories and regular files survive; `.` is dropped while `..` passes through like any
/// other directory. Regular files must satisfy `filter`. The directory handle is released before
/// sorting starts.
pub fn parse_directory<S>(
    source: &S,
    path: &Path,
    filter: &ExtensionFilter,
) -> Result<Listing, BrowseError>
where
    S: DirSource + ?Sized,
{
    if path.as_os_str().is_empty() {
        let err = io::Error::new(io::ErrorKind::InvalidInput, "empty directory path");
        warn!("refusing to open an empty directory path");
        return Err(BrowseError::open_failed(path, err));
    }

    let handle = source.open(path).map_err(|err| {
        warn!(path = %path.display(), error = %err, "failed to open directory");
        BrowseError::open_failed(path, err)
    })?;

    let mut dropped = 0usize;
    let mut entries: Listing = Vec::new();
    for raw in handle {
        match keep(raw, filter) {
            Some(entry) => entries.push(entry),
            None => dropped += 1,
        }
    }

    sort_entries(&mut entries);
    debug!(
        path = %path.display(),
        filter = %filter,
        entries = entries.len(),
        dropped,
        "parsed directory"
    );
    Ok(entries)
}

fn keep(raw: RawEntry, filter: &ExtensionFilter) -> Option<Entry> {
    let kind = match raw.kind {
        RawKind::Directory if raw.name == SELF_REFERENCE => return None,
        RawKind::Directory => EntryKind::Directory,
        RawKind::RegularFile if filter.matches(&raw.name) => EntryKind::RegularFile,
        RawKind::RegularFile | RawKind::Other => return None,
    };
    Some(Entry { name: raw.name, kind })
}
