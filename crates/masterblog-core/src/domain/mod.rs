//! Domain entities - the core business objects.

mod post;
mod query;

pub use post::{DATE_FORMAT, NewPost, Post, PostDraft, PostId, PostPatch, ValidatedPatch, parse_date};
pub use query::{SearchFilter, SortDirection, SortField, SortSpec};
