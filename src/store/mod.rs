//! Reducer primitives shared by the client-side stores.
//!
//! The session, notification, and list-view stores all follow the same
//! unidirectional contract:
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! There are no ambient globals: each store is an explicit state value
//! owned by the application struct, and every transition is a pure
//! function of the previous state and exactly one action.

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reduce;
pub use state::StoreState;
