//! Blog list view: store and rendering.

mod action;
mod reducer;
mod state;
mod view;

pub use action::BlogListAction;
pub use reducer::BlogListReducer;
pub use state::{BlogListState, SortMode};
pub use view::BlogListView;
