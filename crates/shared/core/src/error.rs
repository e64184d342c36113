use thiserror::Error;

/// Field-level rejections raised before a draft or patch reaches the network
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Price must be positive")]
    NonPositivePrice,

    #[error("Category must not be empty")]
    EmptyCategory,

    #[error("Image must be a valid URL: {0}")]
    InvalidImageUrl(String),
}
