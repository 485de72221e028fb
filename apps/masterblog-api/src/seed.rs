//! Sample posts loaded at startup.

use masterblog_core::PostService;
use masterblog_core::domain::PostDraft;

fn draft(title: &str, content: &str, author: &str, date: &str) -> PostDraft {
    PostDraft {
        title: Some(title.to_string()),
        content: Some(content.to_string()),
        author: Some(author.to_string()),
        date: Some(date.to_string()),
    }
}

pub fn seed_drafts() -> Vec<PostDraft> {
    vec![
        draft(
            "First post",
            "This is the first post.",
            "John Doe",
            "2023-06-07",
        ),
        draft(
            "Second post",
            "This is the second post.",
            "Jane Doe",
            "2023-06-08",
        ),
    ]
}

/// Create the sample posts through the service, so they get ids 1 and 2.
pub async fn seed_posts(posts: &PostService) {
    for draft in seed_drafts() {
        match posts.create(draft).await {
            Ok(post) => tracing::debug!(post_id = post.id, title = %post.title, "Seeded post"),
            Err(e) => tracing::error!("Failed to seed post: {}", e),
        }
    }
}
