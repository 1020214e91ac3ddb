//! State for the blog list view.

use std::cmp::Reverse;

use crate::api::Blog;
use crate::store::StoreState;

/// Sort modes for the list, cycled in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Title,
    Author,
    Likes,
}

impl SortMode {
    pub fn next(self) -> Self {
        match self {
            SortMode::Title => SortMode::Author,
            SortMode::Author => SortMode::Likes,
            SortMode::Likes => SortMode::Title,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Title => "title",
            SortMode::Author => "author",
            SortMode::Likes => "likes",
        }
    }
}

/// Client-side view over the cached collection: author filter, sort
/// mode, cursor, and which entry has its details expanded.
///
/// `selected` indexes into the visible (filtered and sorted) list, not
/// the raw collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlogListState {
    pub blogs: Vec<Blog>,
    pub sort: SortMode,
    pub filter: String,
    pub selected: usize,
    /// Id of the entry whose details are expanded, if any.
    pub expanded: Option<String>,
    /// True while the author filter is being edited.
    pub editing_filter: bool,
    pub loading: bool,
}

impl StoreState for BlogListState {}

impl BlogListState {
    /// The collection as presented: filtered by author, then sorted.
    ///
    /// Likes sort descending; title and author ascending,
    /// case-insensitively. Ties keep their collection order (the sorts
    /// are stable).
    pub fn visible(&self) -> Vec<&Blog> {
        let mut visible: Vec<&Blog> = self
            .blogs
            .iter()
            .filter(|blog| self.matches_filter(blog))
            .collect();

        match self.sort {
            SortMode::Likes => visible.sort_by_key(|blog| Reverse(blog.likes)),
            SortMode::Author => visible.sort_by_cached_key(|blog| blog.author.to_lowercase()),
            SortMode::Title => visible.sort_by_cached_key(|blog| blog.title.to_lowercase()),
        }
        visible
    }

    pub fn selected_blog(&self) -> Option<&Blog> {
        self.visible().get(self.selected).copied()
    }

    /// An empty filter matches everything; otherwise the author must
    /// contain the filter, ignoring case.
    fn matches_filter(&self, blog: &Blog) -> bool {
        if self.filter.is_empty() {
            return true;
        }
        blog.author
            .to_lowercase()
            .contains(&self.filter.to_lowercase())
    }
}
