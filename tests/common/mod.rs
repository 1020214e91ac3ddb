//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use blogdeck::api::ApiClient;
use blogdeck::cache::BlogCache;
use blogdeck::config::ServerConfig;
use blogdeck::ui::events::AppEvent;
use mock_api::MockApi;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Server settings pointed at a test backend, with timeouts short
/// enough that failure tests finish quickly.
pub fn server_config(base_url: &str) -> ServerConfig {
    ServerConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

pub fn client_for(mock: &MockApi) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(&server_config(&mock.base_url())))
}

pub fn cache_for(mock: &MockApi) -> (Arc<ApiClient>, Arc<BlogCache>) {
    let api = client_for(mock);
    let cache = Arc::new(BlogCache::new(Arc::clone(&api)));
    (api, cache)
}

/// Write a config file into a fresh temp dir.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, contents).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Variant name for panic messages in event-order assertions.
pub fn event_name(event: &AppEvent) -> &'static str {
    match event {
        AppEvent::Input(_) => "Input",
        AppEvent::Tick => "Tick",
        AppEvent::Resize(_, _) => "Resize",
        AppEvent::LoginDone(_) => "LoginDone",
        AppEvent::BlogsLoaded(_) => "BlogsLoaded",
        AppEvent::BlogCreated(_) => "BlogCreated",
        AppEvent::BlogUpdated(_) => "BlogUpdated",
        AppEvent::BlogDeleted { .. } => "BlogDeleted",
        AppEvent::UsersLoaded(_) => "UsersLoaded",
        AppEvent::NoticeExpired { .. } => "NoticeExpired",
    }
}
