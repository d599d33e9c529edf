/// Wraps a try-write payload in start/end quote text.
///
/// The payload writer runs against the window between the quotes; if it or
/// either quote does not fit, the whole composition reports failure and the
/// destination contents are unspecified.
pub fn try_quote<F>(dst: &mut [u8], start: &str, end: &str, write: F) -> Option<usize>
where
    F: FnOnce(&mut [u8]) -> Option<usize>,
{
    if dst.len() < start.len() {
        return None;
    }
    dst[..start.len()].copy_from_slice(start.as_bytes());

    let written = write(&mut dst[start.len()..])?;
    let total = start.len() + written + end.len();

    if dst.len() < total {
        return None;
    }
    dst[start.len() + written..total].copy_from_slice(end.as_bytes());

    Some(total)
}
