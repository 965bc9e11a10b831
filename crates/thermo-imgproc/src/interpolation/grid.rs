use thermo_image::ImageSize;

/// Map a destination index back to a fractional source coordinate.
///
/// The first and last destination samples land exactly on the first and last
/// source samples. A destination axis of length one maps to source index 0.
///
/// # Arguments
///
/// * `dst_index` - The index along the destination axis.
/// * `src_len` - The length of the source axis.
/// * `dst_len` - The length of the destination axis.
pub fn source_coordinate(dst_index: usize, src_len: usize, dst_len: usize) -> f32 {
    if dst_len <= 1 {
        return 0.0;
    }
    // numerator first so the endpoints stay exact
    (dst_index * src_len.saturating_sub(1)) as f32 / (dst_len - 1) as f32
}

/// Create the source coordinates sampled by every destination column and row.
///
/// The resize is separable, so one lookup table per axis is enough: column
/// `x` of the destination samples source x `map_x[x]` and row `y` samples
/// source y `map_y[y]`.
///
/// # Returns
///
/// A tuple `(map_x, map_y)` of lengths `dst_size.width` and `dst_size.height`.
pub fn sample_axes(dst_size: ImageSize, src_size: ImageSize) -> (Vec<f32>, Vec<f32>) {
    let map_x = (0..dst_size.width)
        .map(|x| source_coordinate(x, src_size.width, dst_size.width))
        .collect();
    let map_y = (0..dst_size.height)
        .map(|y| source_coordinate(y, src_size.height, dst_size.height))
        .collect();

    (map_x, map_y)
}
