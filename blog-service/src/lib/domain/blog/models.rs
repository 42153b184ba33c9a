use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::blog::errors::BlogIdError;
use crate::domain::blog::errors::PageError;
use crate::domain::user::models::UserId;

/// Blog post aggregate.
///
/// Title and content are stored exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub content: String,
    pub author_id: UserId,
    pub published_at: DateTime<Utc>,
}

impl Blog {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

/// Blog unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogId(pub i64);

impl BlogId {
    /// Parse a blog ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a base-10 integer
    /// * `NotPositive` - Integer is zero or negative
    pub fn from_string(s: &str) -> Result<Self, BlogIdError> {
        let id = s
            .parse::<i64>()
            .map_err(|e| BlogIdError::InvalidFormat(format!("{s:?}: {e}")))?;

        if id <= 0 {
            return Err(BlogIdError::NotPositive(id));
        }

        Ok(Self(id))
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One-based page of a blog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    pub const SIZE: u32 = 10;

    pub fn first() -> Self {
        Self(1)
    }

    /// Parse the `page` query parameter; a missing or empty value means the first page.
    ///
    /// # Errors
    /// * `InvalidFormat` - Value is not an integer
    /// * `OutOfRange` - Value is below 1
    pub fn from_query(page: Option<&str>) -> Result<Self, PageError> {
        let raw = match page {
            None | Some("") => return Ok(Self::first()),
            Some(raw) => raw,
        };

        let number = raw
            .parse::<i64>()
            .map_err(|_| PageError::InvalidFormat(raw.to_string()))?;

        u32::try_from(number)
            .ok()
            .filter(|n| *n >= 1)
            .map(Self)
            .ok_or(PageError::OutOfRange(number))
    }

    pub fn limit(&self) -> i64 {
        i64::from(Self::SIZE)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.0 - 1) * i64::from(Self::SIZE)
    }
}

/// Command to create a blog post
#[derive(Debug, Clone)]
pub struct CreateBlogCommand {
    pub title: String,
    pub content: String,
}

/// Command to replace the title and content of a blog post
#[derive(Debug, Clone)]
pub struct UpdateBlogCommand {
    pub title: String,
    pub content: String,
}

/// Blog row to insert; the database assigns the id.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub author_id: UserId,
    pub published_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_id_from_string() {
        assert_eq!(BlogId::from_string("7"), Ok(BlogId(7)));
        assert_eq!(BlogId::from_string("0"), Err(BlogIdError::NotPositive(0)));
        assert!(matches!(
            BlogId::from_string("seven"),
            Err(BlogIdError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_page_defaults_to_first() {
        assert_eq!(Page::from_query(None), Ok(Page::first()));
        assert_eq!(Page::from_query(Some("")), Ok(Page::first()));
    }

    #[test]
    fn test_page_limit_and_offset() {
        let page = Page::from_query(Some("3")).unwrap();
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 20);
        assert_eq!(Page::first().offset(), 0);
    }

    #[test]
    fn test_page_rejects_invalid_values() {
        assert_eq!(Page::from_query(Some("0")), Err(PageError::OutOfRange(0)));
        assert_eq!(Page::from_query(Some("-1")), Err(PageError::OutOfRange(-1)));
        assert!(matches!(
            Page::from_query(Some("two")),
            Err(PageError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_is_owned_by() {
        let blog = Blog {
            id: BlogId(1),
            title: "title".to_string(),
            content: "content".to_string(),
            author_id: UserId(5),
            published_at: Utc::now(),
        };

        assert!(blog.is_owned_by(UserId(5)));
        assert!(!blog.is_owned_by(UserId(6)));
    }
}
