use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure or non-success HTTP status while fetching an image.
    #[error("failed to fetch image: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The fetched bytes or local file did not decode as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The pixel layout cannot be collapsed to 8-bit intensity.
    #[error("unsupported pixel layout: {layout}")]
    Format { layout: &'static str },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
