//! Block operations: copy, move, fill, compare, and search over raw byte
//! regions
//!
//! Two tiers share one implementation. The [`raw`] submodule keeps the
//! exact unchecked contracts of the classic C memory functions it
//! replaces, for callers that need the unvalidated fast path. The
//! functions in this module are safe slice wrappers that validate their
//! arguments and delegate to the same chunked scans.

pub mod raw;

use crate::error::{FastBytesError, Result};
use std::ops::Range;

/// Copy `src` into `dst`.
///
/// The slices must have equal lengths; a mismatch is reported rather than
/// silently truncated.
pub fn copy(src: &[u8], dst: &mut [u8]) -> Result<()> {
    if src.len() != dst.len() {
        return Err(FastBytesError::invalid_data(format!(
            "source and destination lengths don't match: {} vs {}",
            src.len(),
            dst.len()
        )));
    }
    unsafe {
        raw::copy(dst.as_mut_ptr(), src.as_ptr(), src.len());
    }
    Ok(())
}

/// Copy `src` to `dest` within one buffer, handling overlap in either
/// direction.
pub fn copy_within(buf: &mut [u8], src: Range<usize>, dest: usize) -> Result<()> {
    if src.start > src.end || src.end > buf.len() {
        return Err(FastBytesError::out_of_bounds(src.end, buf.len()));
    }
    let len = src.len();
    // Checked addition: a huge `dest` must not wrap past the length check.
    if dest.checked_add(len).map_or(true, |end| end > buf.len()) {
        return Err(FastBytesError::out_of_bounds(dest, buf.len()));
    }
    unsafe {
        let base = buf.as_mut_ptr();
        raw::copy_overlapping(base.add(dest), base.add(src.start).cast_const(), len);
    }
    Ok(())
}

/// Copy bytes of `src` into `dst` until a byte equal to `stop` has been
/// copied.
///
/// Returns the index one past the copied stop byte, or `None` if `stop`
/// does not occur in `src` (then all of `src` was copied). `dst` must be
/// at least as long as `src`.
pub fn copy_until(src: &[u8], dst: &mut [u8], stop: u8) -> Result<Option<usize>> {
    if dst.len() < src.len() {
        return Err(FastBytesError::out_of_bounds(src.len(), dst.len()));
    }
    let end = unsafe { raw::copy_until(dst.as_mut_ptr(), src.as_ptr(), stop, src.len()) };
    Ok(end.map(|p| p as usize - dst.as_ptr() as usize))
}

/// Set every byte of `dst` to `value`.
pub fn fill(dst: &mut [u8], value: u8) {
    unsafe {
        raw::fill(dst.as_mut_ptr(), value, dst.len());
    }
}

/// Lexicographically compare two slices.
///
/// Returns negative, zero, or positive per the `memcmp` contract over the
/// common prefix; when one slice is a proper prefix of the other, the
/// shorter compares less.
pub fn compare(a: &[u8], b: &[u8]) -> i32 {
    let common = a.len().min(b.len());
    let r = unsafe { raw::compare(a.as_ptr(), b.as_ptr(), common) };
    if r != 0 {
        return r;
    }
    match a.len().cmp(&b.len()) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

/// Index of the first occurrence of `value` in `haystack`, or `None`.
pub fn find_byte(haystack: &[u8], value: u8) -> Option<usize> {
    unsafe { raw::find_byte(haystack.as_ptr(), value, haystack.len()) }
}

/// Index of the last occurrence of `value` in `haystack`, or `None`.
pub fn find_last_byte(haystack: &[u8], value: u8) -> Option<usize> {
    unsafe { raw::find_last_byte(haystack.as_ptr(), value, haystack.len()) }
}
