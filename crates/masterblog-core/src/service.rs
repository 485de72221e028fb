//! The post service - the five operations the HTTP layer calls into.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostDraft, PostId, PostPatch, SearchFilter, SortSpec};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Acknowledgement returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub post: Post,
}

impl DeleteConfirmation {
    pub fn message(&self) -> String {
        format!(
            "Post with id {} has been deleted successfully.",
            self.post.id
        )
    }
}

/// Validates requests and runs them against a [`PostRepository`].
///
/// Every argument is parsed before the repository is touched, so a rejected
/// call never changes the collection.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// List posts, optionally sorted by `sort` in `direction` (default asc).
    pub async fn list(
        &self,
        sort: Option<&str>,
        direction: Option<&str>,
    ) -> Result<Vec<Post>, DomainError> {
        let sort = SortSpec::parse(sort, direction)?;
        self.repo.list(sort).await
    }

    /// Create a post from a draft. All four fields are required.
    pub async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        let new_post = NewPost::try_from(draft)?;
        self.repo.insert(new_post).await
    }

    /// Apply a partial update to the post with `id`.
    ///
    /// An unknown id is reported as `NotFound` even when the patch itself is
    /// also invalid.
    pub async fn update(&self, id: PostId, patch: PostPatch) -> Result<Post, DomainError> {
        let patch = match patch.validate() {
            Ok(patch) => patch,
            Err(err) => {
                if !self.repo.exists(id).await? {
                    return Err(DomainError::not_found(id));
                }
                return Err(err);
            }
        };
        self.repo.update(id, patch).await
    }

    pub async fn delete(&self, id: PostId) -> Result<DeleteConfirmation, DomainError> {
        let post = self.repo.remove(id).await?;
        Ok(DeleteConfirmation { post })
    }

    pub async fn search(&self, filter: SearchFilter) -> Result<Vec<Post>, DomainError> {
        self.repo.search(&filter).await
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repo.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::domain::ValidatedPatch;

    /// Minimal repository that counts the calls reaching storage.
    #[derive(Default)]
    struct RecordingRepository {
        posts: Mutex<Vec<Post>>,
        writes: AtomicUsize,
    }

    #[async_trait]
    impl PostRepository for RecordingRepository {
        async fn list(&self, sort: Option<SortSpec>) -> Result<Vec<Post>, DomainError> {
            let mut posts = self.posts.lock().unwrap().clone();
            if let Some(sort) = sort {
                sort.apply(&mut posts);
            }
            Ok(posts)
        }

        async fn search(&self, filter: &SearchFilter) -> Result<Vec<Post>, DomainError> {
            Ok(filter.apply(self.posts.lock().unwrap().clone()))
        }

        async fn insert(&self, new_post: NewPost) -> Result<Post, DomainError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            let mut posts = self.posts.lock().unwrap();
            let post = Post::new(posts.len() as PostId + 1, new_post);
            posts.push(post.clone());
            Ok(post)
        }

        async fn update(&self, id: PostId, patch: ValidatedPatch) -> Result<Post, DomainError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            let mut posts = self.posts.lock().unwrap();
            let post = posts
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(DomainError::not_found(id))?;
            post.apply(patch);
            Ok(post.clone())
        }

        async fn remove(&self, id: PostId) -> Result<Post, DomainError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            let mut posts = self.posts.lock().unwrap();
            let index = posts
                .iter()
                .position(|p| p.id == id)
                .ok_or(DomainError::not_found(id))?;
            Ok(posts.remove(index))
        }

        async fn exists(&self, id: PostId) -> Result<bool, DomainError> {
            Ok(self.posts.lock().unwrap().iter().any(|p| p.id == id))
        }

        async fn count(&self) -> Result<usize, DomainError> {
            Ok(self.posts.lock().unwrap().len())
        }
    }

    fn draft(title: &str) -> PostDraft {
        PostDraft {
            title: Some(title.to_string()),
            content: Some("Body".to_string()),
            author: Some("Ann".to_string()),
            date: Some("2024-01-01".to_string()),
        }
    }

    fn service() -> (PostService, Arc<RecordingRepository>) {
        let repo = Arc::new(RecordingRepository::default());
        (PostService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_invalid_create_never_reaches_storage() {
        let (service, repo) = service();

        let result = service
            .create(PostDraft {
                date: Some("2023-13-01".to_string()),
                ..draft("T")
            })
            .await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(repo.writes.load(Ordering::SeqCst), 0);
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_invalid_sort_is_rejected() {
        let (service, _) = service();
        service.create(draft("T")).await.unwrap();

        let err = service.list(Some("id"), None).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));

        let err = service.list(Some("title"), Some("down")).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_update_prefers_not_found() {
        let (service, repo) = service();

        let patch = PostPatch {
            date: Some("not a date".to_string()),
            ..Default::default()
        };
        let err = service.update(42, patch).await.unwrap_err();

        assert_eq!(err, DomainError::NotFound { id: 42 });
        assert_eq!(repo.writes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_update_bad_date_leaves_post_unmodified() {
        let (service, repo) = service();
        let created = service.create(draft("Original")).await.unwrap();

        let patch = PostPatch {
            title: Some("Changed".to_string()),
            date: Some("2023-13-01".to_string()),
            ..Default::default()
        };
        let err = service.update(created.id, patch).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(service.list(None, None).await.unwrap(), vec![created]);
        assert_eq!(repo.writes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_delete_confirmation_message() {
        let (service, _) = service();
        let created = service.create(draft("T")).await.unwrap();

        let confirmation = service.delete(created.id).await.unwrap();
        assert_eq!(
            confirmation.message(),
            "Post with id 1 has been deleted successfully."
        );
        assert_eq!(
            service.delete(created.id).await.unwrap_err(),
            DomainError::NotFound { id: 1 }
        );
    }
}
