#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SliceError {
    #[error("range {start}..{start}+{len} is out of bounds for {available} bytes")]
    OutOfBounds {
        start: usize,
        len: usize,
        available: usize,
    },
}

/// Get `len` bytes of `data` starting at `start`
///
/// Fails instead of truncating when the range runs past the end of `data`
pub fn sub_slice(data: &[u8], start: usize, len: usize) -> Result<&[u8], SliceError> {
    let out_of_bounds = || SliceError::OutOfBounds {
        start,
        len,
        available: data.len(),
    };

    let end = start.checked_add(len).ok_or_else(out_of_bounds)?;
    data.get(start..end).ok_or_else(out_of_bounds)
}
