use chrono::NaiveDate;
use serde::Serialize;

use crate::error::DomainError;

/// Store-assigned post identifier.
pub type PostId = u64;

/// The only accepted calendar date layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Post entity - represents a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
}

impl Post {
    /// Create a post from a validated payload and an id handed out by the store.
    pub fn new(id: PostId, new_post: NewPost) -> Self {
        Self {
            id,
            title: new_post.title,
            content: new_post.content,
            author: new_post.author,
            date: new_post.date,
        }
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: ValidatedPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }
}

/// Unvalidated create payload. A `None` field was omitted by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

/// A create payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
    author: String,
    date: NaiveDate,
}

impl TryFrom<PostDraft> for NewPost {
    type Error = DomainError;

    fn try_from(draft: PostDraft) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();
        let title = required("title", draft.title, &mut missing);
        let content = required("content", draft.content, &mut missing);
        let author = required("author", draft.author, &mut missing);
        let date = required("date", draft.date, &mut missing);

        if !missing.is_empty() {
            return Err(DomainError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            title,
            content,
            author,
            date: parse_date(&date)?,
        })
    }
}

fn required(field: &'static str, value: Option<String>, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

/// Partial update payload. Only the `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl PostPatch {
    /// Check every present field so that a bad patch is rejected as a whole.
    pub fn validate(self) -> Result<ValidatedPatch, DomainError> {
        let empty: Vec<&str> = [
            ("title", &self.title),
            ("content", &self.content),
            ("author", &self.author),
            ("date", &self.date),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_some_and(|v| v.trim().is_empty()))
        .map(|(field, _)| field)
        .collect();

        if !empty.is_empty() {
            return Err(DomainError::Validation(format!(
                "Fields must not be empty: {}",
                empty.join(", ")
            )));
        }

        let date = self.date.as_deref().map(parse_date).transpose()?;

        Ok(ValidatedPatch {
            title: self.title,
            content: self.content,
            author: self.author,
            date,
        })
    }
}

/// A partial update whose present fields are known to be valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedPatch {
    title: Option<String>,
    content: Option<String>,
    author: Option<String>,
    date: Option<NaiveDate>,
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    let invalid = || {
        DomainError::Validation(format!(
            "Invalid date '{value}': expected a calendar date in YYYY-MM-DD format"
        ))
    };

    // chrono alone accepts signed years and unpadded fields.
    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}
