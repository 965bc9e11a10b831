use thermo_image::{ImageView, PaddingMode};

/// Catmull-Rom cubic convolution over four consecutive samples.
///
/// The samples sit at relative positions -1, 0, 1 and 2; `x` is the offset
/// between the samples at 0 and 1. The curve passes through `p[1]` at `x = 0`
/// and through `p[2]` at `x = 1`. NaN and infinities propagate.
///
/// # Examples
///
/// ```
/// use thermo_imgproc::interpolation::cubic_interpolate;
///
/// let p = [0.0, 1.0, 2.0, 3.0];
/// assert_eq!(cubic_interpolate(&p, 0.5), 1.5);
/// ```
#[inline]
pub fn cubic_interpolate(p: &[f32; 4], x: f32) -> f32 {
    p[1] + 0.5
        * x
        * (p[2] - p[0]
            + x * (2.0 * p[0] - 5.0 * p[1] + 4.0 * p[2] - p[3]
                + x * (3.0 * (p[1] - p[2]) + p[3] - p[0])))
}

/// Separable bicubic interpolation over a 4x4 window.
///
/// Layout: row-major window, horizontal (`x`) pass first, then vertical (`y`).
///
/// The window is row-major: `p[4 * r + c]` holds the sample at row offset
/// `r - 1` and column offset `c - 1` from the reference sample `p[5]`. Each
/// row is first interpolated horizontally at `x`, then the four results are
/// interpolated vertically at `y`.
///
/// # Arguments
///
/// * `p` - The 4x4 window, row-major.
/// * `x` - The horizontal offset in `[0, 1]`.
/// * `y` - The vertical offset in `[0, 1]`.
#[inline]
pub fn bicubic_interpolate(p: &[f32; 16], x: f32, y: f32) -> f32 {
    let cols: [f32; 4] = std::array::from_fn(|r| {
        let row = [p[4 * r], p[4 * r + 1], p[4 * r + 2], p[4 * r + 3]];
        cubic_interpolate(&row, x)
    });
    cubic_interpolate(&cols, y)
}

/// Gather the four samples of row `y` around column `x`.
///
/// The returned window holds columns `x - 1 ..= x + 2`, matching the layout
/// expected by [`cubic_interpolate`].
pub fn gather_row(image: &ImageView<'_>, x: isize, y: isize, padding: PaddingMode) -> [f32; 4] {
    std::array::from_fn(|c| image.get_point_with(x - 1 + c as isize, y, padding))
}

/// Gather the 4x4 window whose reference sample `p[5]` is `(x, y)`.
///
/// Probes past the grid edges go through `padding`.
pub fn gather_neighborhood(
    image: &ImageView<'_>,
    x: isize,
    y: isize,
    padding: PaddingMode,
) -> [f32; 16] {
    std::array::from_fn(|i| {
        let dx = (i % 4) as isize - 1;
        let dy = (i / 4) as isize - 1;
        image.get_point_with(x + dx, y + dy, padding)
    })
}

/// Kernel for bicubic interpolation at a fractional source position.
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
pub(crate) fn bicubic_interpolation(
    image: &ImageView<'_>,
    u: f32,
    v: f32,
    padding: PaddingMode,
) -> f32 {
    let iu = u.floor();
    let iv = v.floor();

    let window = gather_neighborhood(image, iu as isize, iv as isize, padding);

    bicubic_interpolate(&window, u - iu, v - iv)
}
