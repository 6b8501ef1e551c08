//! Navigation stack over the directory lister.
//!
//! The [`Navigator`] keeps one [`Frame`] per level of browsing history. Every navigation event
//! (`reset`, `push`, `pop`, `refresh`) drops the current listing, re-parses the frame that ends up
//! on top, and moves the cursor back to the first entry.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::BrowseError;
use crate::fs::{DirSource, ExtensionFilter, StdDirSource, parse_directory};
use crate::types::{Entry, Frame, Listing};

const PARENT_REFERENCE: &str = "..";

#[derive(Debug)]
pub struct Navigator<S: DirSource = StdDirSource> {
    source: S,
    frames: Vec<Frame>,
    listing: Listing,
    selected: usize,
    max_depth: Option<usize>,
}

impl<S: DirSource> Navigator<S> {
    /// Create a navigator rooted at `path` and parse it straight away. Fails when the root cannot
    /// be opened; use [`Navigator::new`] plus [`Navigator::refresh`] to keep a navigator around
    /// after a bad start directory.
    pub fn open(
        source: S,
        path: impl Into<PathBuf>,
        filter: ExtensionFilter,
    ) -> Result<Self, BrowseError> {
        let mut nav = Self::new(source, path, filter);
        nav.reload()?;
        Ok(nav)
    }

    /// Create a navigator rooted at `path` without reading it. The listing stays empty until
    /// [`Navigator::refresh`] or another navigation call.
    pub fn new(source: S, path: impl Into<PathBuf>, filter: ExtensionFilter) -> Self {
        Self {
            source,
            frames: vec![Frame::new(path, filter)],
            listing: Vec::new(),
            selected: 0,
            max_depth: None,
        }
    }

    /// Bound the deepest reachable depth. The root sits at depth 0.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    // Accessors

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Index of the current frame.
    pub fn depth(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn current_frame(&self) -> &Frame {
        // `frames` is never empty: it starts with a root and `pop` never removes it.
        &self.frames[self.depth()]
    }

    pub fn current_path(&self) -> &Path {
        self.current_frame().path()
    }

    pub fn listing(&self) -> &[Entry] {
        &self.listing
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.listing.get(self.selected)
    }

    // Navigation

    /// Drop all history and start over at `path`.
    pub fn reset(
        &mut self,
        path: impl Into<PathBuf>,
        filter: ExtensionFilter,
    ) -> Result<(), BrowseError> {
        self.frames.clear();
        self.frames.push(Frame::new(path, filter));
        info!(path = %self.current_path().display(), "navigator reset");
        self.reload()
    }

    /// Descend into `path`. On an open failure the attempted frame stays on top with an empty
    /// listing; `pop` returns to its parent.
    pub fn push(
        &mut self,
        path: impl Into<PathBuf>,
        filter: ExtensionFilter,
    ) -> Result<(), BrowseError> {
        if let Some(limit) = self.max_depth
            && self.depth() >= limit
        {
            return Err(BrowseError::DepthExceeded { limit });
        }

        self.frames.push(Frame::new(path, filter));
        debug!(depth = self.depth(), path = %self.current_path().display(), "pushed frame");
        self.reload()
    }

    /// Ascend one level and replay the stored filter. At the root this re-parses the root.
    pub fn pop(&mut self) -> Result<(), BrowseError> {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
        debug!(depth = self.depth(), path = %self.current_path().display(), "popped frame");
        self.reload()
    }

    /// Re-parse the current frame.
    pub fn refresh(&mut self) -> Result<(), BrowseError> {
        self.reload()
    }

    /// Swap the current frame's filter and re-parse. Later pops back to this frame replay the
    /// new filter.
    pub fn refilter(&mut self, filter: ExtensionFilter) -> Result<(), BrowseError> {
        let depth = self.depth();
        self.frames[depth].filter = filter;
        self.reload()
    }

    /// Act on the selected entry: `..` pops, any other directory is pushed with the current
    /// filter, files are left alone. Returns whether a navigation happened.
    pub fn enter_selected(&mut self) -> Result<bool, BrowseError> {
        let Some(entry) = self.selected_entry() else {
            return Ok(false);
        };
        if !entry.is_dir() {
            return Ok(false);
        }

        if entry.name == PARENT_REFERENCE {
            self.pop()?;
        } else {
            let frame = self.current_frame();
            let target = frame.path.join(&entry.name);
            let filter = frame.filter.clone();
            self.push(target, filter)?;
        }
        Ok(true)
    }

    // Cursor

    /// Move the cursor up one entry, wrapping to the bottom. Returns `false` on an empty listing.
    pub fn move_up(&mut self) -> bool {
        let len = self.listing.len();
        if len == 0 {
            return false;
        }
        self.selected = if self.selected == 0 { len - 1 } else { self.selected - 1 };
        true
    }

    /// Move the cursor down one entry, wrapping to the top. Returns `false` on an empty listing.
    pub fn move_down(&mut self) -> bool {
        let len = self.listing.len();
        if len == 0 {
            return false;
        }
        self.selected = (self.selected + 1) % len;
        true
    }

    /// Place the cursor at `index`, clamped to the last entry.
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.listing.len().saturating_sub(1));
    }

    fn reload(&mut self) -> Result<(), BrowseError> {
        self.listing.clear();
        self.selected = 0;

        let frame = &self.frames[self.depth()];
        self.listing = parse_directory(&self.source, &frame.path, &frame.filter)?;
        Ok(())
    }
}
