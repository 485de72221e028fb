use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId, SearchFilter, SortSpec, ValidatedPatch};
use crate::error::DomainError;

/// Post storage.
///
/// Implementations own the collection and must run each call as one atomic
/// step against it: no caller may observe a half-applied update or a
/// partially appended or removed collection.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in insertion order, or ordered by `sort` when given.
    async fn list(&self, sort: Option<SortSpec>) -> Result<Vec<Post>, DomainError>;

    /// Posts matching every supplied filter, in insertion order.
    async fn search(&self, filter: &SearchFilter) -> Result<Vec<Post>, DomainError>;

    /// Assign the next id and append the post.
    async fn insert(&self, new_post: NewPost) -> Result<Post, DomainError>;

    /// Apply a validated patch to the post with `id`.
    async fn update(&self, id: PostId, patch: ValidatedPatch) -> Result<Post, DomainError>;

    /// Remove the post with `id`, returning it.
    async fn remove(&self, id: PostId) -> Result<Post, DomainError>;

    async fn exists(&self, id: PostId) -> Result<bool, DomainError>;

    async fn count(&self) -> Result<usize, DomainError>;
}
