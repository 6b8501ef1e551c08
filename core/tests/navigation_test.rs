use std::fs;
use std::path::Path;

use dirnav_core::{BrowseError, ExtensionFilter, Navigator, StdDirSource};
use tempfile::tempdir;

fn names(nav: &Navigator) -> Vec<String> {
    nav.listing().iter().map(|entry| entry.name.clone()).collect()
}

fn build_tree(root: &Path) {
    fs::create_dir_all(root.join("photos/raw")).unwrap();
    for name in ["cover.png", "notes.txt"] {
        fs::write(root.join(name), b"x").unwrap();
    }
    for name in ["b.png", "a.jpg", "c.gif"] {
        fs::write(root.join("photos").join(name), b"x").unwrap();
    }
}

#[test]
fn push_and_pop_preserve_filters() {
    let dir = tempdir().unwrap();
    build_tree(dir.path());
    let filter = ExtensionFilter::parse("png|jpg");

    let mut nav = Navigator::new(StdDirSource, dir.path(), filter.clone());
    nav.refresh().unwrap();
    assert_eq!(names(&nav), vec!["photos", "cover.png"]);
    let root_listing = names(&nav);

    nav.select(0);
    assert!(nav.enter_selected().unwrap());
    assert_eq!(nav.depth(), 1);
    assert_eq!(names(&nav), vec!["raw", "a.jpg", "b.png"]);

    nav.pop().unwrap();
    assert_eq!(nav.depth(), 0);
    assert_eq!(names(&nav), root_listing);

    let mut fresh = Navigator::new(StdDirSource, dir.path(), ExtensionFilter::accept_all());
    fresh.reset(dir.path(), filter).unwrap();
    assert_eq!(names(&fresh), root_listing);
}

#[test]
fn pop_at_root_is_a_reparse() {
    let dir = tempdir().unwrap();
    build_tree(dir.path());

    let mut nav = Navigator::new(StdDirSource, dir.path(), ExtensionFilter::accept_all());
    nav.refresh().unwrap();
    let before = names(&nav);

    fs::write(dir.path().join("added.txt"), b"x").unwrap();
    nav.pop().unwrap();
    assert_eq!(nav.depth(), 0);
    assert_eq!(names(&nav).len(), before.len() + 1);
}

#[test]
fn failed_push_can_be_recovered_with_pop() {
    let dir = tempdir().unwrap();
    build_tree(dir.path());

    let mut nav = Navigator::new(StdDirSource, dir.path(), ExtensionFilter::accept_all());
    nav.refresh().unwrap();

    let err = nav.push(dir.path().join("notes.txt"), ExtensionFilter::accept_all()).unwrap_err();
    assert!(matches!(err, BrowseError::OpenFailed { .. }));
    assert!(nav.listing().is_empty());

    nav.pop().unwrap();
    assert_eq!(names(&nav), vec!["photos", "cover.png", "notes.txt"]);
}
