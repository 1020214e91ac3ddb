//! State for the new-blog form.

use crate::api::BlogDraft;
use crate::store::StoreState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeField {
    #[default]
    Title,
    Author,
    Url,
    Likes,
}

impl ComposeField {
    pub fn next(self) -> Self {
        match self {
            ComposeField::Title => ComposeField::Author,
            ComposeField::Author => ComposeField::Url,
            ComposeField::Url => ComposeField::Likes,
            ComposeField::Likes => ComposeField::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            ComposeField::Title => ComposeField::Likes,
            ComposeField::Author => ComposeField::Title,
            ComposeField::Url => ComposeField::Author,
            ComposeField::Likes => ComposeField::Url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComposeFormState {
    pub title: String,
    pub author: String,
    pub url: String,
    /// Kept as text while editing; parsed on submit. Only digits are
    /// accepted, so parsing can at worst overflow to zero.
    pub likes: String,
    pub focus: ComposeField,
}

impl ComposeFormState {
    /// The draft to send, or None while a required field is empty.
    pub fn draft(&self) -> Option<BlogDraft> {
        let title = self.title.trim();
        let author = self.author.trim();
        let url = self.url.trim();
        if title.is_empty() || author.is_empty() || url.is_empty() {
            return None;
        }
        Some(BlogDraft {
            title: title.to_string(),
            author: author.to_string(),
            url: url.to_string(),
            likes: self.likes.trim().parse().unwrap_or(0),
        })
    }
}

impl StoreState for ComposeFormState {}
