//! Comment content validation

use super::ValidationError;

/// Maximum length for comment content (64KB)
const MAX_CONTENT_LEN: usize = 65536;

/// Validated comment content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    /// Create new comment content.
    ///
    /// # Rules
    /// - Non-empty after trimming whitespace
    /// - Max 64KB (65536 bytes), measured after trimming
    ///
    /// Surrounding whitespace is stripped before storage.
    ///
    /// # Example
    /// ```
    /// use blog_server::models::CommentContent;
    ///
    /// assert!(CommentContent::new("Nice post").is_ok());
    /// assert!(CommentContent::new("  \n ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "content" });
        }

        if trimmed.len() > MAX_CONTENT_LEN {
            return Err(ValidationError::TooLong {
                field: "content",
                max: MAX_CONTENT_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the content as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CommentContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
