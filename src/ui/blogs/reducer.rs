//! Reducer for the blog list view.

use crate::store::Reduce;

use super::action::BlogListAction;
use super::state::BlogListState;

pub struct BlogListReducer;

impl Reduce for BlogListReducer {
    type State = BlogListState;
    type Action = BlogListAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            BlogListAction::Loading => {
                state.loading = true;
                state
            }
            BlogListAction::Loaded { blogs } => {
                state.blogs = blogs;
                state.loading = false;
                let expanded_still_there = state
                    .expanded
                    .as_ref()
                    .map(|id| state.blogs.iter().any(|blog| &blog.id == id))
                    .unwrap_or(false);
                if !expanded_still_there {
                    state.expanded = None;
                }
                clamp_selection(&mut state);
                state
            }
            BlogListAction::LoadFailed => {
                state.loading = false;
                state
            }
            BlogListAction::MoveSelection { delta } => {
                let len = state.visible().len();
                if len == 0 {
                    state.selected = 0;
                    return state;
                }
                let current = state.selected.min(len - 1) as i32;
                state.selected = (current + delta).clamp(0, len as i32 - 1) as usize;
                state
            }
            BlogListAction::ToggleExpand => {
                let selected_id = state.selected_blog().map(|blog| blog.id.clone());
                state.expanded = match (state.expanded.take(), selected_id) {
                    (Some(open), Some(id)) if open == id => None,
                    (_, id) => id,
                };
                state
            }
            BlogListAction::CycleSort => {
                let followed = state.selected_blog().map(|blog| blog.id.clone());
                state.sort = state.sort.next();
                state.selected = position_of(&state, followed.as_deref());
                state
            }
            BlogListAction::StartFilter => {
                state.editing_filter = true;
                state
            }
            BlogListAction::FilterInput { ch } => {
                state.filter.push(ch);
                state.selected = 0;
                state
            }
            BlogListAction::FilterBackspace => {
                state.filter.pop();
                state.selected = 0;
                state
            }
            BlogListAction::EndFilter => {
                state.editing_filter = false;
                state
            }
            BlogListAction::ClearFilter => {
                state.filter.clear();
                state.editing_filter = false;
                state.selected = 0;
                state
            }
            BlogListAction::Reset => BlogListState::default(),
        }
    }
}

/// Keep the cursor on the entry it was on, falling back to the top.
fn position_of(state: &BlogListState, id: Option<&str>) -> usize {
    id.and_then(|id| {
        state
            .visible()
            .iter()
            .position(|blog| blog.id == id)
    })
    .unwrap_or(0)
}

fn clamp_selection(state: &mut BlogListState) {
    let len = state.visible().len();
    if len == 0 {
        state.selected = 0;
    } else if state.selected >= len {
        state.selected = len - 1;
    }
}
