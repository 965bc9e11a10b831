//! Sample interpolation methods for grid resampling.
//!
//! This module provides the interpolation kernels used when resampling a
//! sensor grid onto a larger (or smaller) grid.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: Fastest, uses the nearest sample (no interpolation)
//! - **Bilinear**: Linear blend of the 2x2 neighborhood
//! - **Bicubic**: Catmull-Rom cubic convolution over the 4x4 neighborhood,
//!   smooth gradients for thermal displays
//!
//! The bicubic kernels are also exposed directly ([`cubic_interpolate`],
//! [`bicubic_interpolate`]) for callers that gather their own windows.

mod bilinear;
mod cubic;

/// Coordinate mapping utilities.
///
/// Functions mapping destination indices back into source space.
pub mod grid;

pub(crate) mod interpolate;
mod nearest;

pub use cubic::{bicubic_interpolate, cubic_interpolate, gather_neighborhood, gather_row};
pub use interpolate::{interpolate_pixel, InterpolationMode};
