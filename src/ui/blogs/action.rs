//! Actions for the blog list view.

use crate::api::Blog;
use crate::store::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum BlogListAction {
    /// A (re)load went out to the backend.
    Loading,
    /// The cache delivered the collection.
    Loaded { blogs: Vec<Blog> },
    /// The load failed; the list keeps its last-known-good contents.
    LoadFailed,
    /// Move the cursor within the visible list.
    MoveSelection { delta: i32 },
    /// Expand or collapse the details of the selected entry.
    ToggleExpand,
    /// Switch to the next sort mode.
    CycleSort,
    /// Begin editing the author filter.
    StartFilter,
    /// Type one character into the filter.
    FilterInput { ch: char },
    /// Delete the last filter character.
    FilterBackspace,
    /// Stop editing the filter, keeping its value.
    EndFilter,
    /// Drop the filter entirely.
    ClearFilter,
    /// Back to the initial state (on logout).
    Reset,
}

impl Action for BlogListAction {}
