//! Application state - shared across all handlers.

use std::sync::Arc;

use masterblog_core::PostService;
use masterblog_core::ports::PostRepository;
use masterblog_infra::InMemoryPostRepository;

use crate::seed;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build the application state around a fresh in-memory store.
    pub async fn new(seed_posts: bool) -> Self {
        let repo: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
        let posts = PostService::new(repo);

        if seed_posts {
            seed::seed_posts(&posts).await;
        } else {
            tracing::info!("SEED_POSTS disabled - starting with an empty collection");
        }

        tracing::info!("Application state initialized");

        Self { posts }
    }
}
