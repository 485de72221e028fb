//! Blog post handlers.

use actix_web::{HttpResponse, web};

use masterblog_core::domain::{Post, PostDraft, PostId, PostPatch, SearchFilter};
use masterblog_shared::dto::{
    CreatePostRequest, ListPostsQuery, MessageResponse, PostResponse, SearchPostsQuery,
    UpdatePostRequest,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author: post.author,
        date: post.date.to_string(),
    }
}

fn post_list(posts: Vec<Post>) -> Vec<PostResponse> {
    posts.into_iter().map(post_response).collect()
}

/// GET /api/posts?sort=&direction=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let posts = state
        .posts
        .list(query.sort.as_deref(), query.direction.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(post_list(posts)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .create(PostDraft {
            title: req.title,
            content: req.content,
            author: req.author,
            date: req.date,
        })
        .await?;

    tracing::info!(post_id = post.id, "Post created");
    Ok(HttpResponse::Created().json(post_response(post)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let post = state
        .posts
        .update(
            id,
            PostPatch {
                title: req.title,
                content: req.content,
                author: req.author,
                date: req.date,
            },
        )
        .await?;

    tracing::info!(post_id = id, "Post updated");
    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let confirmation = state.posts.delete(id).await?;

    tracing::info!(post_id = id, "Post deleted");
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: confirmation.message(),
    }))
}

/// GET /api/posts/search?title=&content=&author=&date=
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let posts = state
        .posts
        .search(SearchFilter {
            title: query.title,
            content: query.content,
            author: query.author,
            date: query.date,
        })
        .await?;

    Ok(HttpResponse::Ok().json(post_list(posts)))
}
