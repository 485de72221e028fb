//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields are optional so the server, not the JSON decoder, decides
//! which missing fields are errors.

use serde::{Deserialize, Serialize};

/// Request to create a post. All four fields are required by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

/// Partial update; omitted fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Query string of `GET /api/posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

/// Query string of `GET /api/posts/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPostsQuery {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

/// A post as returned by the API. `date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String,
}

/// Body of a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_omitted_fields() {
        let req: UpdatePostRequest = serde_json::from_str(r#"{"title": "X"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("X"));
        assert!(req.content.is_none());
        assert!(req.author.is_none());
        assert!(req.date.is_none());

        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"title":"X"}"#);
    }

    #[test]
    fn test_create_request_accepts_empty_object() {
        let req: CreatePostRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none());
        assert!(req.date.is_none());
    }
}
