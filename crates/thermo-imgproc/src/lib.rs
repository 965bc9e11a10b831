#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallelization utilities.
pub mod parallel;

/// utility functions for resizing grids.
pub mod resize;

pub use interpolation::{bicubic_interpolate, cubic_interpolate};
pub use resize::interpolate_image;
