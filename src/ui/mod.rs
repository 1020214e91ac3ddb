//! Terminal view: widgets, input routing, and the event loop.

pub mod app;
pub mod blogs;
pub mod compose;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod login;
pub mod notice;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod users;
