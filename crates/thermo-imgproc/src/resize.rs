use crate::interpolation::{grid::sample_axes, interpolate_pixel, InterpolationMode};
use crate::parallel::{iter_rows_resample, ExecutionStrategy};
use thermo_image::{Image, ImageError, ImageSize, ImageView, ImageViewMut, PaddingMode};

/// Options for the resize operation.
///
/// The default is bicubic interpolation with replicate borders on the
/// calling thread, the setup used to upscale thermal frames for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResizeOptions {
    /// The interpolation kernel.
    pub interpolation: InterpolationMode,
    /// The border policy for probes outside the source grid.
    pub padding: PaddingMode,
    /// How destination rows are scheduled.
    pub strategy: ExecutionStrategy,
}

/// Resize a grid into a pre-allocated destination grid.
///
/// Every destination sample `(x, y)` is mapped back to the source position
/// `(x * (src_cols - 1) / (dst_cols - 1), y * (src_rows - 1) / (dst_rows - 1))`
/// and interpolated there. A destination axis of length one samples source
/// index 0 along that axis.
///
/// # Arguments
///
/// * `src` - The input grid.
/// * `dst` - The output grid. Its size sets the output resolution.
/// * `options` - Interpolation, border and execution options.
///
/// # Example
///
/// ```
/// use thermo_image::{Image, ImageSize};
/// use thermo_imgproc::resize::{resize, ResizeOptions};
///
/// let image = Image::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     vec![0.0, 10.0, 20.0, 30.0],
/// )
/// .unwrap();
///
/// let mut upscaled = Image::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 4,
///     },
///     0.0,
/// )
/// .unwrap();
///
/// resize(&image.as_view(), &mut upscaled.as_view_mut(), &ResizeOptions::default()).unwrap();
///
/// assert_eq!(upscaled.get_point(0, 0), 0.0);
/// assert_eq!(upscaled.get_point(3, 3), 30.0);
/// ```
pub fn resize(
    src: &ImageView<'_>,
    dst: &mut ImageViewMut<'_>,
    options: &ResizeOptions,
) -> Result<(), ImageError> {
    log::debug!(
        "resize {} -> {} with {:?}, {:?} borders, {:?}",
        src.size(),
        dst.size(),
        options.interpolation,
        options.padding,
        options.strategy
    );

    if dst.cols() == 1 || dst.rows() == 1 {
        log::trace!("single destination column or row, sampling source index 0 on that axis");
    }

    // the resize is separable, so precompute one source coordinate per axis
    let (map_x, map_y) = sample_axes(dst.size(), src.size());

    let ResizeOptions {
        interpolation,
        padding,
        strategy,
    } = *options;

    iter_rows_resample(dst, strategy, |x, y| {
        interpolate_pixel(src, map_x[x], map_y[y], interpolation, padding)
    });

    Ok(())
}

/// Resize a grid into a newly allocated image of `new_size`.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] if `new_size` has no rows or columns.
pub fn resize_image(
    src: &Image,
    new_size: ImageSize,
    options: &ResizeOptions,
) -> Result<Image, ImageError> {
    let mut dst = Image::from_size_val(new_size, 0.0)?;
    resize(&src.as_view(), &mut dst.as_view_mut(), options)?;
    Ok(dst)
}

/// Resize a caller-owned source buffer into a caller-owned destination buffer.
///
/// This is [`resize`] with the default options: bicubic interpolation,
/// replicate borders, serial execution. Both buffers are flat and row-major.
///
/// # Arguments
///
/// * `src` - The source samples, at least `src_rows * src_cols` long.
/// * `src_rows` - The number of source rows.
/// * `src_cols` - The number of source columns.
/// * `dest` - The destination samples, at least `dest_rows * dest_cols` long.
/// * `dest_rows` - The number of destination rows.
/// * `dest_cols` - The number of destination columns.
///
/// # Errors
///
/// * [`ImageError::EmptyImage`] if the source has no rows or columns.
/// * [`ImageError::InvalidChannelShape`] if either buffer is too short.
/// * [`ImageError::InvalidImageSize`] if either grid's sample count overflows `usize`.
///
/// A destination with no rows or columns is left untouched.
///
/// # Example
///
/// ```
/// use thermo_imgproc::resize::interpolate_image;
///
/// let src = [0.0, 10.0, 20.0, 30.0];
/// let mut dest = [0.0; 9];
///
/// interpolate_image(&src, 2, 2, &mut dest, 3, 3).unwrap();
///
/// assert_eq!(dest[4], 15.0);
/// ```
pub fn interpolate_image(
    src: &[f32],
    src_rows: usize,
    src_cols: usize,
    dest: &mut [f32],
    dest_rows: usize,
    dest_cols: usize,
) -> Result<(), ImageError> {
    let src = ImageView::from_slice(
        ImageSize {
            width: src_cols,
            height: src_rows,
        },
        src,
    )?;

    let dest_size = ImageSize {
        width: dest_cols,
        height: dest_rows,
    };
    if dest_size.is_empty() {
        log::trace!("empty destination {dest_size}, nothing to interpolate");
        return Ok(());
    }

    let mut dest = ImageViewMut::from_slice(dest_size, dest)?;

    resize(&src, &mut dest, &ResizeOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn resize_smoke() -> Result<(), ImageError> {
        let image = Image::new(
            ImageSize {
                width: 4,
                height: 5,
            },
            vec![0f32; 4 * 5],
        )?;

        let new_size = ImageSize {
            width: 2,
            height: 3,
        };

        let resized = resize_image(&image, new_size, &ResizeOptions::default())?;

        assert_eq!(resized.size().width, 2);
        assert_eq!(resized.size().height, 3);
        Ok(())
    }

    #[test]
    fn identity_resize_all_modes() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 5,
            height: 4,
        };
        let data: Vec<f32> = (0..20).map(|v| (v as f32 * 1.7).sin() * 40.0).collect();
        let image = Image::new(size, data)?;

        for interpolation in [
            InterpolationMode::Bicubic,
            InterpolationMode::Bilinear,
            InterpolationMode::Nearest,
        ] {
            let options = ResizeOptions {
                interpolation,
                ..Default::default()
            };
            let resized = resize_image(&image, size, &options)?;
            for (&a, &b) in resized.as_slice().iter().zip(image.as_slice()) {
                assert_relative_eq!(a, b, epsilon = 1e-5);
            }
        }
        Ok(())
    }

    #[test]
    fn uniform_source_stays_uniform() -> Result<(), ImageError> {
        let image = Image::from_size_val(
            ImageSize {
                width: 8,
                height: 8,
            },
            23.7,
        )?;
        let resized = resize_image(
            &image,
            ImageSize {
                width: 32,
                height: 24,
            },
            &ResizeOptions::default(),
        )?;
        for &v in resized.as_slice() {
            assert_relative_eq!(v, 23.7, epsilon = 1e-4);
        }
        Ok(())
    }

    #[test]
    fn upscale_2x2_to_4x4() -> Result<(), ImageError> {
        let src = [0.0, 10.0, 20.0, 30.0];
        let mut dest = [f32::NAN; 16];

        interpolate_image(&src, 2, 2, &mut dest, 4, 4)?;

        assert_eq!(dest[0], 0.0);
        assert_eq!(dest[3], 10.0);
        assert_eq!(dest[12], 20.0);
        assert_eq!(dest[15], 30.0);
        for &v in &dest {
            assert!((0.0..=30.0).contains(&v), "{v} outside source range");
        }
        // monotonic along both axes for a monotonic source
        for y in 0..4 {
            for x in 1..4 {
                assert!(dest[4 * y + x] >= dest[4 * y + x - 1]);
                assert!(dest[4 * x + y] >= dest[4 * (x - 1) + y]);
            }
        }
        Ok(())
    }

    #[test]
    fn single_column_destination_samples_column_zero() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let src = [
            1.0, 2.0, 3.0,
            4.0, 5.0, 6.0,
        ];
        let mut dest = [0.0; 2];
        interpolate_image(&src, 2, 3, &mut dest, 2, 1)?;
        assert_eq!(dest, [1.0, 4.0]);

        let mut dest = [0.0; 3];
        interpolate_image(&src, 2, 3, &mut dest, 1, 3)?;
        assert_eq!(dest, [1.0, 2.0, 3.0]);
        Ok(())
    }

    #[test]
    fn empty_destination_is_noop() -> Result<(), ImageError> {
        let src = [1.0; 4];
        let mut dest: [f32; 0] = [];
        interpolate_image(&src, 2, 2, &mut dest, 0, 5)?;
        Ok(())
    }

    #[test]
    fn short_buffers_fail_fast() {
        let src = [1.0; 3];
        let mut dest = [0.0; 16];
        assert_eq!(
            interpolate_image(&src, 2, 2, &mut dest, 4, 4),
            Err(ImageError::InvalidChannelShape(3, 4))
        );

        let src = [1.0; 4];
        let mut dest = [0.0; 15];
        assert_eq!(
            interpolate_image(&src, 2, 2, &mut dest, 4, 4),
            Err(ImageError::InvalidChannelShape(15, 16))
        );
    }

    #[test]
    fn oversized_grids_fail() {
        let rows = 1 << (usize::BITS - 1);
        let mut dest = [0.0; 4];
        assert_eq!(
            interpolate_image(&[1.0; 4], rows, 2, &mut dest, 2, 2),
            Err(ImageError::InvalidImageSize(2, rows))
        );
        assert_eq!(
            interpolate_image(&[1.0; 4], 2, 2, &mut dest, rows, 2),
            Err(ImageError::InvalidImageSize(2, rows))
        );
    }

    #[test]
    fn empty_source_fails() {
        let mut dest = [0.0; 4];
        assert_eq!(
            interpolate_image(&[], 0, 0, &mut dest, 2, 2),
            Err(ImageError::EmptyImage)
        );
    }

    #[test]
    fn parallel_rows_match_serial() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 8,
            height: 8,
        };
        let data: Vec<f32> = (0..64).map(|v| ((v * 37) % 11) as f32 + 20.0).collect();
        let image = Image::new(size, data)?;
        let new_size = ImageSize {
            width: 31,
            height: 17,
        };

        let serial = resize_image(&image, new_size, &ResizeOptions::default())?;
        let parallel = resize_image(
            &image,
            new_size,
            &ResizeOptions {
                strategy: ExecutionStrategy::ParallelRows,
                ..Default::default()
            },
        )?;

        assert_eq!(serial, parallel);
        Ok(())
    }
}
