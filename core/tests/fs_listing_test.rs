use std::fs;
use std::path::Path;

use dirnav_core::fs::{ExtensionFilter, StdDirSource, matches, parse_directory};
use dirnav_core::{BrowseError, EntryKind};
use tempfile::tempdir;

fn touch(root: &Path, names: &[&str]) {
    for name in names {
        fs::write(root.join(name), b"demo").unwrap();
    }
}

#[test]
fn directories_sort_before_files_case_insensitively() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(root, &["b.txt", "a.txt", "C.txt"]);
    fs::create_dir(root.join("A")).unwrap();
    fs::create_dir(root.join("zoo")).unwrap();

    let listing = parse_directory(&StdDirSource, root, &ExtensionFilter::accept_all()).unwrap();
    let names: Vec<&str> = listing.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, vec!["A", "zoo", "a.txt", "b.txt", "C.txt"]);
    assert!(listing.iter().all(|entry| entry.name != "."));
}

#[test]
fn extension_filter_selects_matching_files() {
    let dir = tempdir().unwrap();
    touch(dir.path(), &["x.png", "y.gif", "z.jpg", "W.PNG", "noext"]);

    let listing = parse_directory(&StdDirSource, dir.path(), &"png|jpg".into()).unwrap();
    let names: Vec<&str> = listing.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, vec!["x.png", "z.jpg"]);
}

#[test]
fn listing_never_places_a_directory_after_a_file() {
    let dir = tempdir().unwrap();
    touch(dir.path(), &["0.bin", "m.bin", "Z.bin"]);
    for sub in ["b", "Y", "_"] {
        fs::create_dir(dir.path().join(sub)).unwrap();
    }

    let listing = parse_directory(&StdDirSource, dir.path(), &ExtensionFilter::accept_all()).unwrap();
    for pair in listing.windows(2) {
        assert!(!(pair[0].kind == EntryKind::RegularFile && pair[1].kind == EntryKind::Directory));
    }
}

#[cfg(unix)]
#[test]
fn symlinks_are_not_listed() {
    let dir = tempdir().unwrap();
    touch(dir.path(), &["target.txt"]);
    std::os::unix::fs::symlink(dir.path().join("target.txt"), dir.path().join("link.txt")).unwrap();

    let listing = parse_directory(&StdDirSource, dir.path(), &ExtensionFilter::accept_all()).unwrap();
    let names: Vec<&str> = listing.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, vec!["target.txt"]);
}

#[test]
fn missing_directory_reports_open_failure() {
    let dir = tempdir().unwrap();
    let err = parse_directory(&StdDirSource, &dir.path().join("gone"), &ExtensionFilter::accept_all())
        .unwrap_err();
    assert!(matches!(err, BrowseError::OpenFailed { .. }));
}

#[test]
fn filter_spec_properties() {
    assert!(matches("anything.at.all", ""));
    assert!(matches("a.png", "jpg|png"));
    assert!(!matches("a.PNG", "png"));
    assert!(!matches("noext", "png"));
    assert!(matches("noext", ""));
}
