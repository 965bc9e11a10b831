use thermo_image::{ImageView, PaddingMode};

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input grid.
/// * `u` - The x coordinate of the sample to interpolate.
/// * `v` - The y coordinate of the sample to interpolate.
/// * `padding` - The border policy for coordinates outside the grid.
///
/// # Returns
///
/// The nearest sample.
pub(crate) fn nearest_neighbor_interpolation(
    image: &ImageView<'_>,
    u: f32,
    v: f32,
    padding: PaddingMode,
) -> f32 {
    image.get_point_with(u.round() as isize, v.round() as isize, padding)
}
