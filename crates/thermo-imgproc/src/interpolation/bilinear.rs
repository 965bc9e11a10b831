use thermo_image::{ImageView, PaddingMode};

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `image` - The input grid.
/// * `u` - The x coordinate of the sample to interpolate.
/// * `v` - The y coordinate of the sample to interpolate.
/// * `padding` - The border policy for probes outside the grid.
///
/// # Returns
///
/// The interpolated sample.
pub(crate) fn bilinear_interpolation(
    image: &ImageView<'_>,
    u: f32,
    v: f32,
    padding: PaddingMode,
) -> f32 {
    let iu = u.floor();
    let iv = v.floor();

    let frac_u = u - iu;
    let frac_v = v - iv;

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let (iu0, iv0) = (iu as isize, iv as isize);

    let p00 = image.get_point_with(iu0, iv0, padding);
    let p01 = image.get_point_with(iu0 + 1, iv0, padding);
    let p10 = image.get_point_with(iu0, iv0 + 1, padding);
    let p11 = image.get_point_with(iu0 + 1, iv0 + 1, padding);

    p00 * w00 + p01 * w01 + p10 * w10 + p11 * w11
}
