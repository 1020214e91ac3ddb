//! Mock blog backend for integration tests.
//!
//! Serves the REST surface the client talks to, backed by in-memory
//! state. Tests can seed accounts and blogs, inspect captured
//! requests, and flip the whole server into a failure mode.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub bearer: Option<String>,
}

/// A registered account.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub name: String,
    pub password: String,
}

/// A stored blog entry. `owner` is the owning account's id.
#[derive(Debug, Clone)]
pub struct BlogRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u32,
    pub owner: String,
}

#[derive(Debug, Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct CreateBody {
    title: Option<String>,
    author: Option<String>,
    url: Option<String>,
    likes: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct UpdateBody {
    title: Option<String>,
    author: Option<String>,
    url: Option<String>,
    likes: Option<u32>,
}

#[derive(Clone)]
struct MockState {
    users: Arc<Mutex<Vec<UserRecord>>>,
    blogs: Arc<Mutex<Vec<BlogRecord>>>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    failure: Arc<Mutex<Option<(u16, String)>>>,
    delay_ms: Arc<Mutex<u64>>,
    next_id: Arc<Mutex<u64>>,
}

impl MockState {
    /// Capture the request, apply the configured delay, and short
    /// circuit with the injected failure when one is armed.
    async fn intercept(&self, method: &str, path: &str, headers: &HeaderMap) -> Option<Response> {
        self.requests.lock().await.push(CapturedRequest {
            method: method.to_string(),
            path: path.to_string(),
            bearer: bearer(headers),
        });

        let delay = *self.delay_ms.lock().await;
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let failure = self.failure.lock().await.clone();
        failure.map(|(status, message)| error_response(status, &message))
    }

    async fn user_for_token(&self, headers: &HeaderMap) -> Option<UserRecord> {
        let token = bearer(headers)?;
        let username = token.strip_prefix("token-")?.to_string();
        self.users
            .lock()
            .await
            .iter()
            .find(|user| user.username == username)
            .cloned()
    }

    async fn fresh_id(&self, prefix: &str) -> String {
        let mut next = self.next_id.lock().await;
        *next += 1;
        format!("{}{}", prefix, *next)
    }
}

/// Mock blog server for testing.
pub struct MockApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    /// Start a new mock server on an ephemeral port.
    pub async fn start() -> Self {
        let state = MockState {
            users: Arc::new(Mutex::new(Vec::new())),
            blogs: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            delay_ms: Arc::new(Mutex::new(0)),
            next_id: Arc::new(Mutex::new(0)),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/api/login", post(login))
            .route("/api/blogs", get(list_blogs).post(create_blog))
            .route(
                "/api/blogs/{id}",
                get(get_blog).put(update_blog).delete(delete_blog),
            )
            .route("/api/users", get(list_users))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Get the base URL for this mock server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// The bearer token the login endpoint hands out for a username.
    pub fn token_for(&self, username: &str) -> String {
        format!("token-{}", username)
    }

    /// Register an account and return its id.
    pub async fn add_user(&self, username: &str, name: &str, password: &str) -> String {
        let id = self.state.fresh_id("u").await;
        self.state.users.lock().await.push(UserRecord {
            id: id.clone(),
            username: username.to_string(),
            name: name.to_string(),
            password: password.to_string(),
        });
        id
    }

    /// Store a blog owned by a registered account and return its id.
    pub async fn seed_blog(
        &self,
        title: &str,
        author: &str,
        url: &str,
        likes: u32,
        owner_username: &str,
    ) -> String {
        let owner = self
            .state
            .users
            .lock()
            .await
            .iter()
            .find(|user| user.username == owner_username)
            .map(|user| user.id.clone())
            .expect("seed_blog owner must be registered first");
        let id = self.state.fresh_id("b").await;
        self.state.blogs.lock().await.push(BlogRecord {
            id: id.clone(),
            title: title.to_string(),
            author: author.to_string(),
            url: url.to_string(),
            likes,
            owner,
        });
        id
    }

    /// Get all captured requests.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    /// How many requests hit `method path` so far.
    pub async fn request_count(&self, method: &str, path: &str) -> usize {
        self.state
            .requests
            .lock()
            .await
            .iter()
            .filter(|req| req.method == method && req.path == path)
            .count()
    }

    /// Answer every subsequent request with the given error until
    /// [`MockApi::restore`] is called.
    pub async fn fail_requests(&self, status: u16, message: &str) {
        *self.state.failure.lock().await = Some((status, message.to_string()));
    }

    /// Drop the injected failure.
    pub async fn restore(&self) {
        *self.state.failure.lock().await = None;
    }

    /// Delay every response by `ms` milliseconds.
    pub async fn set_delay(&self, ms: u64) {
        *self.state.delay_ms.lock().await = ms;
    }

    /// Snapshot of the server-side blog store.
    pub async fn blogs(&self) -> Vec<BlogRecord> {
        self.state.blogs.lock().await.clone()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

fn error_response(status: u16, message: &str) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": message }))).into_response()
}

/// Populated blog json, the shape list and update responses use.
fn blog_json(blog: &BlogRecord, users: &[UserRecord]) -> Value {
    let owner = users.iter().find(|user| user.id == blog.owner);
    json!({
        "id": blog.id,
        "title": blog.title,
        "author": blog.author,
        "url": blog.url,
        "likes": blog.likes,
        "user": owner.map(|user| json!({
            "id": user.id,
            "username": user.username,
            "name": user.name,
        })),
    })
}

async fn login(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<LoginBody>,
) -> Response {
    if let Some(response) = state.intercept("POST", "/api/login", &headers).await {
        return response;
    }

    let users = state.users.lock().await;
    match users
        .iter()
        .find(|user| user.username == body.username && user.password == body.password)
    {
        Some(user) => Json(json!({
            "id": user.id,
            "username": user.username,
            "name": user.name,
            "token": format!("token-{}", user.username),
        }))
        .into_response(),
        None => error_response(401, "invalid username or password"),
    }
}

async fn list_blogs(State(state): State<MockState>, headers: HeaderMap) -> Response {
    if let Some(response) = state.intercept("GET", "/api/blogs", &headers).await {
        return response;
    }

    let users = state.users.lock().await;
    let blogs = state.blogs.lock().await;
    let body: Vec<Value> = blogs.iter().map(|blog| blog_json(blog, &users)).collect();
    Json(body).into_response()
}

async fn create_blog(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<CreateBody>,
) -> Response {
    if let Some(response) = state.intercept("POST", "/api/blogs", &headers).await {
        return response;
    }

    let Some(owner) = state.user_for_token(&headers).await else {
        return error_response(401, "token missing or invalid");
    };

    let (Some(title), Some(url)) = (body.title, body.url) else {
        return error_response(400, "title and url are required");
    };

    let id = state.fresh_id("b").await;
    let blog = BlogRecord {
        id: id.clone(),
        title,
        author: body.author.unwrap_or_default(),
        url,
        likes: body.likes.unwrap_or(0),
        owner: owner.id.clone(),
    };
    state.blogs.lock().await.push(blog.clone());

    // Create responses carry the owner as a bare id, the way the real
    // backend answers before any populate step.
    (
        StatusCode::CREATED,
        Json(json!({
            "id": blog.id,
            "title": blog.title,
            "author": blog.author,
            "url": blog.url,
            "likes": blog.likes,
            "user": owner.id,
        })),
    )
        .into_response()
}

async fn get_blog(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let path = format!("/api/blogs/{}", id);
    if let Some(response) = state.intercept("GET", &path, &headers).await {
        return response;
    }

    let users = state.users.lock().await;
    let blogs = state.blogs.lock().await;
    match blogs.iter().find(|blog| blog.id == id) {
        Some(blog) => Json(blog_json(blog, &users)).into_response(),
        None => error_response(404, "blog not found"),
    }
}

async fn update_blog(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<UpdateBody>,
) -> Response {
    let path = format!("/api/blogs/{}", id);
    if let Some(response) = state.intercept("PUT", &path, &headers).await {
        return response;
    }

    let users = state.users.lock().await;
    let mut blogs = state.blogs.lock().await;
    let Some(blog) = blogs.iter_mut().find(|blog| blog.id == id) else {
        return error_response(404, "blog not found");
    };

    if let Some(title) = body.title {
        blog.title = title;
    }
    if let Some(author) = body.author {
        blog.author = author;
    }
    if let Some(url) = body.url {
        blog.url = url;
    }
    if let Some(likes) = body.likes {
        blog.likes = likes;
    }

    Json(blog_json(blog, &users)).into_response()
}

async fn delete_blog(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let path = format!("/api/blogs/{}", id);
    if let Some(response) = state.intercept("DELETE", &path, &headers).await {
        return response;
    }

    let Some(caller) = state.user_for_token(&headers).await else {
        return error_response(401, "token missing or invalid");
    };

    let mut blogs = state.blogs.lock().await;
    let Some(index) = blogs.iter().position(|blog| blog.id == id) else {
        return error_response(404, "blog not found");
    };
    if blogs[index].owner != caller.id {
        return error_response(403, "only the creator can delete a blog");
    }

    blogs.remove(index);
    StatusCode::NO_CONTENT.into_response()
}

async fn list_users(State(state): State<MockState>, headers: HeaderMap) -> Response {
    if let Some(response) = state.intercept("GET", "/api/users", &headers).await {
        return response;
    }

    let users = state.users.lock().await;
    let blogs = state.blogs.lock().await;
    let body: Vec<Value> = users
        .iter()
        .map(|user| {
            let owned: Vec<Value> = blogs
                .iter()
                .filter(|blog| blog.owner == user.id)
                .map(|blog| json!({ "id": blog.id, "title": blog.title }))
                .collect();
            json!({
                "id": user.id,
                "username": user.username,
                "name": user.name,
                "blogs": owned,
            })
        })
        .collect();
    Json(body).into_response()
}
