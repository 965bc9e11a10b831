use crate::error::ImageError;
use crate::padding::PaddingMode;

/// Image size in samples
///
/// A struct to represent the size of a sample grid. `width` is the number of
/// columns and `height` the number of rows.
///
/// # Examples
///
/// ```
/// use thermo_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 8,
///   height: 6,
/// };
///
/// assert_eq!(image_size.width, 8);
/// assert_eq!(image_size.height, 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSize {
    /// Width of the grid in samples
    pub width: usize,
    /// Height of the grid in samples
    pub height: usize,
}

impl ImageSize {
    /// Number of samples a buffer must hold for this size.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidImageSize`] if `width * height` overflows
    /// `usize`; no buffer can hold such a grid.
    pub fn num_samples(&self) -> Result<usize, ImageError> {
        self.width
            .checked_mul(self.height)
            .ok_or(ImageError::InvalidImageSize(self.width, self.height))
    }

    /// Whether the grid has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

// validates a buffer against a grid size, returning the used prefix length
fn check_buffer(size: ImageSize, len: usize) -> Result<usize, ImageError> {
    if size.is_empty() {
        return Err(ImageError::EmptyImage);
    }
    let required = size.num_samples()?;
    if len < required {
        return Err(ImageError::InvalidChannelShape(len, required));
    }
    Ok(required)
}

#[inline]
fn flat_index(size: ImageSize, x: isize, y: isize, mode: PaddingMode) -> usize {
    let ix = mode.map_index(x, size.width);
    let iy = mode.map_index(y, size.height);
    iy * size.width + ix
}

/// A borrowed, read-only sample grid over a caller-owned buffer.
///
/// The buffer is validated once at construction, so point access afterwards
/// cannot fail. Buffers longer than `width * height` are accepted and their
/// tail is ignored.
#[derive(Clone, Copy, Debug)]
pub struct ImageView<'a> {
    size: ImageSize,
    data: &'a [f32],
}

impl<'a> ImageView<'a> {
    /// Create a view over a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// * [`ImageError::EmptyImage`] if the size has no rows or columns.
    /// * [`ImageError::InvalidChannelShape`] if the buffer is too short.
    /// * [`ImageError::InvalidImageSize`] if the sample count overflows `usize`.
    pub fn from_slice(size: ImageSize, data: &'a [f32]) -> Result<Self, ImageError> {
        let len = check_buffer(size, data.len())?;
        Ok(Self {
            size,
            data: &data[..len],
        })
    }

    /// Get the size of the grid.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of rows of the grid.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the grid.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// The samples of the grid, exactly `rows * cols` long.
    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }

    /// Read the sample at column `x`, row `y`, clamping to the nearest edge.
    #[inline]
    pub fn get_point(&self, x: isize, y: isize) -> f32 {
        self.get_point_with(x, y, PaddingMode::Replicate)
    }

    /// Read the sample at column `x`, row `y` using the given border policy.
    #[inline]
    pub fn get_point_with(&self, x: isize, y: isize, mode: PaddingMode) -> f32 {
        self.data[flat_index(self.size, x, y, mode)]
    }
}

/// A borrowed, writable sample grid over a caller-owned buffer.
#[derive(Debug)]
pub struct ImageViewMut<'a> {
    size: ImageSize,
    data: &'a mut [f32],
}

impl<'a> ImageViewMut<'a> {
    /// Create a mutable view over a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// * [`ImageError::EmptyImage`] if the size has no rows or columns.
    /// * [`ImageError::InvalidChannelShape`] if the buffer is too short.
    /// * [`ImageError::InvalidImageSize`] if the sample count overflows `usize`.
    pub fn from_slice(size: ImageSize, data: &'a mut [f32]) -> Result<Self, ImageError> {
        let len = check_buffer(size, data.len())?;
        Ok(Self {
            size,
            data: &mut data[..len],
        })
    }

    /// Get the size of the grid.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of rows of the grid.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the grid.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// The samples of the grid.
    pub fn as_slice(&self) -> &[f32] {
        &*self.data
    }

    /// The samples of the grid, mutable.
    pub fn as_slice_mut(&mut self) -> &mut [f32] {
        &mut *self.data
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> ImageView<'_> {
        ImageView {
            size: self.size,
            data: &*self.data,
        }
    }

    /// Read the sample at column `x`, row `y`, clamping to the nearest edge.
    #[inline]
    pub fn get_point(&self, x: isize, y: isize) -> f32 {
        self.data[flat_index(self.size, x, y, PaddingMode::Replicate)]
    }

    /// Write the sample at column `x`, row `y`, clamping to the nearest edge.
    #[inline]
    pub fn set_point(&mut self, x: isize, y: isize, value: f32) {
        self.data[flat_index(self.size, x, y, PaddingMode::Replicate)] = value;
    }
}

/// An owned sample grid.
///
/// The samples are stored flat in row-major order with shape (H, W).
///
/// # Examples
///
/// ```
/// use thermo_image::{Image, ImageSize};
///
/// let mut image = Image::from_size_val(ImageSize { width: 3, height: 2 }, 0.0).unwrap();
/// image.set_point(2, 1, 21.5);
///
/// assert_eq!(image.get_point(2, 1), 21.5);
/// assert_eq!(image.get_point(9, 9), 21.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    size: ImageSize,
    data: Vec<f32>,
}

impl Image {
    /// Create a new image from sample data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the grid in samples.
    /// * `data` - The samples, row-major.
    ///
    /// # Errors
    ///
    /// If the grid is empty, its sample count overflows `usize`, or the data length does not
    /// match the size, an error is returned.
    pub fn new(size: ImageSize, data: Vec<f32>) -> Result<Self, ImageError> {
        if size.is_empty() {
            return Err(ImageError::EmptyImage);
        }
        let required = size.num_samples()?;
        if data.len() != required {
            return Err(ImageError::InvalidChannelShape(data.len(), required));
        }
        Ok(Self { size, data })
    }

    /// Create a new image with every sample set to `val`.
    pub fn from_size_val(size: ImageSize, val: f32) -> Result<Self, ImageError> {
        Image::new(size, vec![val; size.num_samples()?])
    }

    /// Create a new image by casting raw sensor readings to `f32`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::CastError`] if a reading cannot be represented,
    /// plus the errors of [`Image::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use thermo_image::{Image, ImageSize};
    ///
    /// let raw = [100u16, 104, 96, 120];
    /// let image = Image::from_samples(ImageSize { width: 2, height: 2 }, &raw).unwrap();
    ///
    /// assert_eq!(image.as_slice(), &[100.0, 104.0, 96.0, 120.0]);
    /// ```
    pub fn from_samples<U>(size: ImageSize, samples: &[U]) -> Result<Self, ImageError>
    where
        U: num_traits::NumCast + Copy,
    {
        let data = samples
            .iter()
            .map(|&x| num_traits::cast::<U, f32>(x).ok_or(ImageError::CastError))
            .collect::<Result<Vec<f32>, ImageError>>()?;

        Image::new(size, data)
    }

    /// Get the size of the image in samples.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the image in samples.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in samples.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The samples of the image.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// The samples of the image, mutable.
    pub fn as_slice_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the image and return its samples.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Borrow the image as a read-only view.
    pub fn as_view(&self) -> ImageView<'_> {
        ImageView {
            size: self.size,
            data: &self.data,
        }
    }

    /// Borrow the image as a writable view.
    pub fn as_view_mut(&mut self) -> ImageViewMut<'_> {
        ImageViewMut {
            size: self.size,
            data: &mut self.data,
        }
    }

    /// Read the sample at column `x`, row `y`, clamping to the nearest edge.
    pub fn get_point(&self, x: isize, y: isize) -> f32 {
        self.as_view().get_point(x, y)
    }

    /// Write the sample at column `x`, row `y`, clamping to the nearest edge.
    pub fn set_point(&mut self, x: isize, y: isize, value: f32) {
        self.as_view_mut().set_point(x, y, value);
    }

    /// The smallest and largest sample, ignoring NaN.
    ///
    /// Useful to pick a color scale before rendering a thermal frame.
    pub fn min_max(&self) -> (f32, f32) {
        self.data
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}
