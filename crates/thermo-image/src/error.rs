/// An error type for the sample grid containers.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length cannot hold the grid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when a grid with zero rows or columns must be sampled.
    #[error("Image has no rows or columns to sample from")]
    EmptyImage,

    /// Error when `width * height` overflows `usize`.
    #[error("Image size {0}x{1} is too large to address")]
    InvalidImageSize(usize, usize),

    /// Error when a raw sample cannot be represented as `f32`.
    #[error("Failed to cast sample to f32")]
    CastError,
}
