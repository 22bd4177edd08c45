//! Domain models with validation at construction
//!
//! All form input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod comment;
pub mod post;
pub mod validation;

pub use comment::CommentContent;
pub use post::{PostId, PostTitle, MAX_TITLE_LEN};
pub use validation::ValidationError;
