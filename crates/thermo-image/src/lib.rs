#![deny(missing_docs)]
//! Sample grid containers for low-resolution sensor images.
//!
//! A grid is a flat, row-major buffer of `f32` samples. Column `x` and row
//! `y` live at index `y * cols + x`. Reads and writes outside the grid are
//! mapped back inside with a [`PaddingMode`], replicate-edge by default.

/// sample grid containers.
pub mod image;

/// Error types for the image module.
pub mod error;

/// border policies for out-of-range coordinates.
pub mod padding;

/// point access over caller-owned buffers.
pub mod point;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize, ImageView, ImageViewMut};
pub use crate::padding::PaddingMode;
pub use crate::point::{get_point, set_point};
