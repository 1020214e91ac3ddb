//! Terminal client for a blog-list REST service.
//!
//! The crate mirrors a single-page application: a handful of pure
//! reducer stores (session, notice, form and list state), a remote
//! data cache that keeps the blog collection consistent with the
//! backend, and a ratatui view loop bridged to a tokio worker for all
//! network I/O.

pub mod api;
pub mod cache;
pub mod config;
pub mod logging;
pub mod notify;
pub mod session;
pub mod store;
pub mod ui;
pub mod worker;
