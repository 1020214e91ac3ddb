//! Client-side mirror of the server's blog collection.
//!
//! The cache is read-through: reads serve cached contents while they
//! are fresh and refetch once they go stale. Mutations never write
//! provisional data; a successful create marks the collection stale so
//! the next read picks up server-assigned fields, while successful
//! updates and deletes splice the server's authoritative response into
//! place. A failed mutation or fetch leaves the cache in its
//! last-known-good state.
//!
//! Concurrent reads share one request: the first caller becomes the
//! leader and everyone arriving while it is in flight waits on the same
//! outcome, errors included.

use std::collections::HashMap;
use std::mem;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError, Blog, BlogDraft, BlogPatch};

/// Fetch outcomes are shared between the leader and its followers, so
/// errors travel behind an `Arc`.
pub type CacheResult<T> = Result<T, Arc<ApiError>>;

type FetchOutcome = CacheResult<Vec<Blog>>;

/// Lifecycle of the cached collection.
enum Collection {
    /// Nothing fetched yet.
    Missing,
    /// A fetch is in flight. `prev` holds the last-known-good contents,
    /// `invalidated` records a mutation that landed mid-flight, and
    /// followers wait on `rx`.
    Fetching {
        prev: Option<Vec<Blog>>,
        invalidated: bool,
        rx: watch::Receiver<Option<FetchOutcome>>,
    },
    /// Contents mirror the server as of the last resolved response.
    /// Once `stale` is set, the next read refetches.
    Cached { blogs: Vec<Blog>, stale: bool },
}

struct CacheInner {
    collection: Collection,
    by_id: HashMap<String, Blog>,
}

impl CacheInner {
    /// Replace the matching entry wherever the collection currently
    /// lives. Entries under other ids are left untouched.
    fn patch_entry(&mut self, updated: &Blog) {
        let blogs = match &mut self.collection {
            Collection::Cached { blogs, .. } => blogs,
            Collection::Fetching {
                prev: Some(blogs), ..
            } => blogs,
            _ => return,
        };
        for blog in blogs.iter_mut() {
            if blog.id == updated.id {
                *blog = updated.clone();
            }
        }
    }

    fn remove_entry(&mut self, id: &str) {
        match &mut self.collection {
            Collection::Cached { blogs, .. } => blogs.retain(|blog| blog.id != id),
            Collection::Fetching {
                prev: Some(blogs), ..
            } => blogs.retain(|blog| blog.id != id),
            _ => {}
        }
    }
}

/// What a caller of [`BlogCache::fetch_all`] turned out to be.
enum Role {
    Hit(Vec<Blog>),
    Follower(watch::Receiver<Option<FetchOutcome>>),
    Leader(watch::Sender<Option<FetchOutcome>>),
}

pub struct BlogCache {
    api: Arc<ApiClient>,
    inner: Mutex<CacheInner>,
}

impl BlogCache {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            inner: Mutex::new(CacheInner {
                collection: Collection::Missing,
                by_id: HashMap::new(),
            }),
        }
    }

    /// Current collection, fetching if needed.
    ///
    /// Fresh contents are returned without a request. While a fetch is
    /// in flight every additional caller joins it instead of issuing
    /// another, and all of them observe the same outcome.
    pub async fn fetch_all(&self) -> CacheResult<Vec<Blog>> {
        let role = {
            let mut inner = self.inner.lock();
            match &mut inner.collection {
                Collection::Cached {
                    blogs,
                    stale: false,
                } => Role::Hit(blogs.clone()),
                Collection::Fetching { rx, .. } => Role::Follower(rx.clone()),
                state => {
                    let (tx, rx) = watch::channel(None);
                    let prev = match mem::replace(state, Collection::Missing) {
                        Collection::Cached { blogs, .. } => Some(blogs),
                        _ => None,
                    };
                    *state = Collection::Fetching {
                        prev,
                        invalidated: false,
                        rx,
                    };
                    Role::Leader(tx)
                }
            }
        };

        match role {
            Role::Hit(blogs) => Ok(blogs),
            Role::Follower(mut rx) => loop {
                let outcome = rx.borrow_and_update().clone();
                if let Some(outcome) = outcome {
                    return outcome;
                }
                if rx.changed().await.is_err() {
                    return Err(Arc::new(ApiError::Interrupted));
                }
            },
            Role::Leader(tx) => {
                debug!("collection fetch started");
                let outcome = self.complete_fetch(self.api.list_blogs().await);
                let _ = tx.send(Some(outcome.clone()));
                outcome
            }
        }
    }

    /// Read-through lookup of a single entry.
    pub async fn get(&self, id: &str) -> CacheResult<Blog> {
        let cached = self.inner.lock().by_id.get(id).cloned();
        if let Some(blog) = cached {
            return Ok(blog);
        }

        let blog = self.api.get_blog(id).await.map_err(Arc::new)?;
        self.inner
            .lock()
            .by_id
            .insert(blog.id.clone(), blog.clone());
        Ok(blog)
    }

    /// Create an entry on the server.
    ///
    /// On success the collection is marked stale rather than patched:
    /// the response may carry an unpopulated owner reference, so the
    /// next read refetches the authoritative list.
    pub async fn create(&self, draft: &BlogDraft) -> CacheResult<Blog> {
        let created = self.api.create_blog(draft).await.map_err(Arc::new)?;
        self.invalidate();
        Ok(created)
    }

    /// Send a partial update. On success the server's response replaces
    /// the entry in the collection and in the per-id table.
    pub async fn update(&self, id: &str, patch: &BlogPatch) -> CacheResult<Blog> {
        let updated = self.api.update_blog(id, patch).await.map_err(Arc::new)?;

        let mut inner = self.inner.lock();
        inner.patch_entry(&updated);
        inner.by_id.insert(updated.id.clone(), updated.clone());
        Ok(updated)
    }

    /// Delete an entry. On success exactly the matching entry leaves
    /// the collection and its per-id copy is dropped.
    pub async fn delete(&self, id: &str) -> CacheResult<()> {
        self.api.delete_blog(id).await.map_err(Arc::new)?;

        let mut inner = self.inner.lock();
        inner.remove_entry(id);
        inner.by_id.remove(id);
        Ok(())
    }

    /// Mark the collection stale without touching its contents. The
    /// next read refetches; readers in between keep seeing the
    /// last-known-good data.
    pub fn invalidate(&self) {
        let mut inner = self.inner.lock();
        match &mut inner.collection {
            Collection::Cached { stale, .. } => *stale = true,
            Collection::Fetching { invalidated, .. } => *invalidated = true,
            Collection::Missing => {}
        }
    }

    /// Contents currently held, fresh or stale, without fetching.
    pub fn cached(&self) -> Option<Vec<Blog>> {
        let inner = self.inner.lock();
        match &inner.collection {
            Collection::Cached { blogs, .. } => Some(blogs.clone()),
            Collection::Fetching { prev, .. } => prev.clone(),
            Collection::Missing => None,
        }
    }

    /// Record a resolved fetch. The lock is taken only after the
    /// response arrived, so the publication order of concurrent
    /// responses decides what the cache ends up holding.
    fn complete_fetch(&self, result: Result<Vec<Blog>, ApiError>) -> FetchOutcome {
        let mut inner = self.inner.lock();
        let (prev, invalidated) = match mem::replace(&mut inner.collection, Collection::Missing) {
            Collection::Fetching {
                prev, invalidated, ..
            } => (prev, invalidated),
            Collection::Cached { blogs, stale } => (Some(blogs), stale),
            Collection::Missing => (None, false),
        };

        match result {
            Ok(blogs) => {
                debug!("collection fetch resolved with {} entries", blogs.len());
                inner.collection = Collection::Cached {
                    blogs: blogs.clone(),
                    stale: invalidated,
                };
                Ok(blogs)
            }
            Err(err) => {
                warn!("collection fetch failed: {}", err);
                inner.collection = match prev {
                    Some(blogs) => Collection::Cached { blogs, stale: true },
                    None => Collection::Missing,
                };
                Err(Arc::new(err))
            }
        }
    }
}
