//! HTTP client for the blog backend.
//!
//! A thin typed wrapper over the REST endpoints. All methods share one
//! connection pool and the bearer token installed after login.

mod error;
mod types;

pub use error::ApiError;
pub use types::{
    Blog, BlogDraft, BlogPatch, BlogStub, Credentials, Owner, OwnerRef, Session, UserSummary,
};

use std::time::Duration;

use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::time::timeout;
use tracing::debug;

use crate::config::ServerConfig;

/// Error body shape the backend uses for non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

pub struct ApiClient {
    http: Client,
    base_url: String,
    token: RwLock<Option<String>>,
    request_timeout: Duration,
}

impl ApiClient {
    pub fn new(server: &ServerConfig) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(server.connect_timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: server.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
            request_timeout: Duration::from_secs(server.timeout_seconds),
        }
    }

    /// Install (or clear) the bearer token attached to every request.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        debug!("logging in as {}", credentials.username);
        self.execute(self.http.post(self.url("/api/login")).json(credentials))
            .await
    }

    pub async fn list_blogs(&self) -> Result<Vec<Blog>, ApiError> {
        debug!("fetching blog collection");
        self.execute(self.authorized(self.http.get(self.url("/api/blogs"))))
            .await
    }

    pub async fn get_blog(&self, id: &str) -> Result<Blog, ApiError> {
        self.execute(self.authorized(self.http.get(self.url(&format!("/api/blogs/{}", id)))))
            .await
    }

    pub async fn create_blog(&self, draft: &BlogDraft) -> Result<Blog, ApiError> {
        debug!("creating blog '{}'", draft.title);
        self.execute(self.authorized(self.http.post(self.url("/api/blogs")).json(draft)))
            .await
    }

    pub async fn update_blog(&self, id: &str, patch: &BlogPatch) -> Result<Blog, ApiError> {
        debug!("updating blog {}", id);
        self.execute(
            self.authorized(
                self.http
                    .put(self.url(&format!("/api/blogs/{}", id)))
                    .json(patch),
            ),
        )
        .await
    }

    pub async fn delete_blog(&self, id: &str) -> Result<(), ApiError> {
        debug!("deleting blog {}", id);
        self.execute_empty(self.authorized(self.http.delete(self.url(&format!("/api/blogs/{}", id)))))
            .await
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        debug!("fetching user summaries");
        self.execute(self.authorized(self.http.get(self.url("/api/users"))))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = self.token.read().clone();
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Run a request under the configured budget and decode the body.
    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let seconds = self.request_timeout.as_secs();
        let fut = async move {
            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::transport(e, seconds))?;
            let response = Self::check(response).await?;
            response.json::<T>().await.map_err(|source| {
                if source.is_decode() {
                    ApiError::Decode { source }
                } else {
                    ApiError::transport(source, seconds)
                }
            })
        };

        match timeout(self.request_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout { seconds }),
        }
    }

    /// Same budget handling for endpoints that answer with no body.
    async fn execute_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let seconds = self.request_timeout.as_secs();
        let fut = async move {
            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::transport(e, seconds))?;
            Self::check(response).await.map(|_| ())
        };

        match timeout(self.request_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout { seconds }),
        }
    }

    /// Map non-success statuses to typed errors, extracting the
    /// backend's `{"error": "..."}` body when present.
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized { message });
        }
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
