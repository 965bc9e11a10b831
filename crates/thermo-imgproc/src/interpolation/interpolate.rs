use super::bilinear::bilinear_interpolation;
use super::cubic::bicubic_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use thermo_image::{ImageView, PaddingMode};

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationMode {
    /// Bicubic (Catmull-Rom) interpolation over a 4x4 window
    #[default]
    Bicubic,
    /// Bilinear interpolation
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Kernel for interpolating a sample value
///
/// # Arguments
///
/// * `image` - The input grid.
/// * `u` - The x coordinate of the sample to interpolate.
/// * `v` - The y coordinate of the sample to interpolate.
/// * `interpolation` - The interpolation mode to use.
/// * `padding` - The border policy for probes outside the grid.
///
/// # Returns
///
/// The interpolated sample value.
pub fn interpolate_pixel(
    image: &ImageView<'_>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
    padding: PaddingMode,
) -> f32 {
    match interpolation {
        InterpolationMode::Bicubic => bicubic_interpolation(image, u, v, padding),
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v, padding),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v, padding),
    }
}
