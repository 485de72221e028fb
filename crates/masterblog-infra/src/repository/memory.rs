//! In-memory post repository - the single owned store behind the service.

use async_trait::async_trait;
use tokio::sync::RwLock;

use masterblog_core::DomainError;
use masterblog_core::domain::{NewPost, Post, PostId, SearchFilter, SortSpec, ValidatedPatch};
use masterblog_core::ports::PostRepository;

struct PostTable {
    posts: Vec<Post>,
    /// Highest id ever handed out. Never decreases, so deleted ids stay retired.
    last_id: PostId,
}

impl PostTable {
    fn position(&self, id: PostId) -> Result<usize, DomainError> {
        self.posts
            .iter()
            .position(|post| post.id == id)
            .ok_or(DomainError::not_found(id))
    }
}

/// In-memory post collection guarded by one async `RwLock`.
///
/// Every operation acquires the lock once and finishes under it, so readers
/// never see a partially updated post or collection.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: RwLock<PostTable>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(PostTable {
                posts: Vec::new(),
                last_id: 0,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, sort: Option<SortSpec>) -> Result<Vec<Post>, DomainError> {
        // Sort a snapshot; stored insertion order never changes.
        let mut posts = self.table.read().await.posts.clone();

        if let Some(sort) = sort {
            tracing::debug!(field = ?sort.field, direction = ?sort.direction, "Sorting posts");
            sort.apply(&mut posts);
        }

        Ok(posts)
    }

    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Post>, DomainError> {
        let posts = self.table.read().await.posts.clone();
        if filter.is_empty() {
            tracing::debug!("Search without filters, returning every post");
            return Ok(posts);
        }

        let results = filter.apply(posts);

        tracing::debug!(matches = results.len(), "Searched posts");
        Ok(results)
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post, DomainError> {
        let mut table = self.table.write().await;

        let id = table.last_id + 1;
        let post = Post::new(id, new_post);
        table.posts.push(post.clone());
        table.last_id = id;

        tracing::debug!(post_id = id, "Post created");
        Ok(post)
    }

    async fn update(&self, id: PostId, patch: ValidatedPatch) -> Result<Post, DomainError> {
        let mut table = self.table.write().await;

        let index = table.position(id)?;
        let post = &mut table.posts[index];
        post.apply(patch);

        tracing::debug!(post_id = id, "Post updated");
        Ok(post.clone())
    }

    async fn remove(&self, id: PostId) -> Result<Post, DomainError> {
        let mut table = self.table.write().await;

        let index = table.position(id)?;
        let post = table.posts.remove(index);

        tracing::debug!(post_id = id, "Post deleted");
        Ok(post)
    }

    async fn exists(&self, id: PostId) -> Result<bool, DomainError> {
        Ok(self.table.read().await.position(id).is_ok())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.table.read().await.posts.len())
    }
}
