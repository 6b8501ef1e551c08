use std::cmp::Ordering;

use crate::types::{Entry, EntryKind};

/// ASCII case-insensitive name comparison.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|byte| byte.to_ascii_lowercase());
    let b = b.bytes().map(|byte| byte.to_ascii_lowercase());
    a.cmp(b)
}

/// Directories first, then names compared without regard to case.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    match (a.kind, b.kind) {
        (EntryKind::Directory, EntryKind::RegularFile) => Ordering::Less,
        (EntryKind::RegularFile, EntryKind::Directory) => Ordering::Greater,
        _ => compare_names(&a.name, &b.name),
    }
}

/// Stable sort over the whole slice; names equal up to case keep their input order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare_entries);
}
