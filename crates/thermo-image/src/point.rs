use crate::error::ImageError;
use crate::image::{ImageSize, ImageView, ImageViewMut};

/// Read a sample from a caller-owned row-major buffer.
///
/// Coordinates outside `[0, cols-1]` x `[0, rows-1]` are clamped to the
/// nearest edge, so `x` and `y` never cause an error.
///
/// # Arguments
///
/// * `data` - The flat buffer, at least `rows * cols` long.
/// * `rows` - The number of rows of the grid.
/// * `cols` - The number of columns of the grid.
/// * `x` - The column to read.
/// * `y` - The row to read.
///
/// # Errors
///
/// * [`ImageError::EmptyImage`] if `rows` or `cols` is zero.
/// * [`ImageError::InvalidChannelShape`] if the buffer is shorter than `rows * cols`.
/// * [`ImageError::InvalidImageSize`] if `rows * cols` overflows `usize`.
///
/// # Examples
///
/// ```
/// use thermo_image::get_point;
///
/// let grid = [0.0, 10.0, 20.0, 30.0];
///
/// assert_eq!(get_point(&grid, 2, 2, 1, 0).unwrap(), 10.0);
/// assert_eq!(get_point(&grid, 2, 2, -1, 5).unwrap(), 20.0);
/// ```
pub fn get_point(
    data: &[f32],
    rows: usize,
    cols: usize,
    x: isize,
    y: isize,
) -> Result<f32, ImageError> {
    let size = ImageSize {
        width: cols,
        height: rows,
    };
    Ok(ImageView::from_slice(size, data)?.get_point(x, y))
}

/// Write a sample into a caller-owned row-major buffer.
///
/// Coordinates are clamped to the nearest edge like [`get_point`].
///
/// # Errors
///
/// Same as [`get_point`].
pub fn set_point(
    data: &mut [f32],
    rows: usize,
    cols: usize,
    x: isize,
    y: isize,
    value: f32,
) -> Result<(), ImageError> {
    let size = ImageSize {
        width: cols,
        height: rows,
    };
    ImageViewMut::from_slice(size, data)?.set_point(x, y, value);
    Ok(())
}
