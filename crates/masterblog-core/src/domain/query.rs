//! Read-side query types: sort order for listings and search filters.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::Post;
use crate::error::DomainError;

/// Field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
    Author,
    Date,
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "content" => Ok(Self::Content),
            "author" => Ok(Self::Author),
            "date" => Ok(Self::Date),
            _ => Err(DomainError::InvalidArgument(format!(
                "unsupported sort field '{s}', expected one of: title, content, author, date"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(DomainError::InvalidArgument(format!(
                "unsupported sort direction '{s}', expected asc or desc"
            ))),
        }
    }
}

/// A requested ordering for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parse raw `sort` / `direction` query values.
    ///
    /// Returns `Ok(None)` when no sort field was given. The direction is
    /// checked either way, so `?direction=sideways` is always rejected.
    pub fn parse(sort: Option<&str>, direction: Option<&str>) -> Result<Option<Self>, DomainError> {
        let direction = match non_blank(direction) {
            Some(direction) => direction.parse()?,
            None => SortDirection::default(),
        };

        let Some(field) = non_blank(sort) else {
            return Ok(None);
        };

        Ok(Some(Self::new(field.parse()?, direction)))
    }

    pub fn compare(&self, a: &Post, b: &Post) -> Ordering {
        let ordering = match self.field {
            SortField::Title => cmp_ignore_case(&a.title, &b.title),
            SortField::Content => cmp_ignore_case(&a.content, &b.content),
            SortField::Author => cmp_ignore_case(&a.author, &b.author),
            SortField::Date => a.date.cmp(&b.date),
        };

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Stable sort: posts that compare equal keep their relative order.
    pub fn apply(&self, posts: &mut [Post]) {
        posts.sort_by(|a, b| self.compare(a, b));
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Case-insensitive substring filters. Every supplied filter must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl SearchFilter {
    pub fn is_empty(&self) -> bool {
        [&self.title, &self.content, &self.author, &self.date]
            .into_iter()
            .all(|filter| needle(filter).is_none())
    }

    /// Narrow `posts` one supplied filter at a time, keeping their order.
    pub fn apply(&self, mut posts: Vec<Post>) -> Vec<Post> {
        if let Some(title) = needle(&self.title) {
            posts.retain(|post| contains_ignore_case(&post.title, &title));
        }
        if let Some(content) = needle(&self.content) {
            posts.retain(|post| contains_ignore_case(&post.content, &content));
        }
        if let Some(author) = needle(&self.author) {
            posts.retain(|post| contains_ignore_case(&post.author, &author));
        }
        if let Some(date) = needle(&self.date) {
            posts.retain(|post| post.date.to_string().contains(&date));
        }
        posts
    }
}

// Blank filters constrain nothing, same as omitted ones.
fn needle(filter: &Option<String>) -> Option<String> {
    filter
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .map(str::to_lowercase)
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
