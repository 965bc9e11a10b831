/// A border policy for coordinates that fall outside the grid.
///
/// Interpolation kernels probe up to two samples beyond each edge, so every
/// read goes through one of these policies instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaddingMode {
    /// Repeat the outermost row or column into the padded region.
    ///
    /// Example: ...d c b a | a a a a...
    #[default]
    Replicate,

    /// Mirror at the boundary, starting with the edge sample itself.
    ///
    /// Example: ...d c b a | a b c d...
    Reflect,

    /// Mirror at the boundary, starting with the sample next to the edge.
    ///
    /// Example: ...d c b a | b c d e...
    Reflect101,

    /// Wrap the content from the opposite side.
    ///
    /// Example: ...d c b a | w x y z...
    Wrap,
}

impl PaddingMode {
    #[inline]
    fn reflect(i: isize, len: usize) -> usize {
        let period = 2 * len as isize;
        let r = i.rem_euclid(period);
        if r < len as isize {
            r as usize
        } else {
            (period - 1 - r) as usize
        }
    }

    #[inline]
    fn reflect101(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let period = 2 * len as isize - 2;
        let r = i.rem_euclid(period);
        if r < len as isize {
            r as usize
        } else {
            (period - r) as usize
        }
    }

    /// Maps index `i` to a valid index within `[0, len)` according to the padding mode.
    ///
    /// - `Replicate`: clamp to edge
    /// - `Reflect`: mirror including edge
    /// - `Reflect101`: mirror excluding edge
    /// - `Wrap`: circular wrap
    ///
    /// # Arguments
    ///
    /// * `i` - The (possibly out-of-range) coordinate index.
    /// * `len` - The valid length of the dimension. Must be greater than zero.
    ///
    /// # Returns
    ///
    /// A valid mapped index within `[0, len)`.
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> usize {
        debug_assert!(len > 0, "cannot map an index into an empty dimension");
        match self {
            PaddingMode::Replicate => i.clamp(0, len as isize - 1) as usize,
            PaddingMode::Reflect => Self::reflect(i, len),
            PaddingMode::Reflect101 => Self::reflect101(i, len),
            PaddingMode::Wrap => i.rem_euclid(len as isize) as usize,
        }
    }
}
