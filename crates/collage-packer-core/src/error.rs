use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Nothing to pack")]
    Empty,
}

pub type Result<T> = std::result::Result<T, CollageError>;
