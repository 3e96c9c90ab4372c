//! Unchecked block primitives over raw pointers
//!
//! Drop-in replacements for the classic C memory functions, with the exact
//! unchecked contracts of the originals: no bounds validation, sentinel
//! results for "not found", undefined behavior on contract violation. The
//! checked wrappers in [`crate::block`] layer slice validation on top.
//!
//! All operations share one chunk cascade: full native words while at least
//! `WORD_BYTES` remain, then (on 64-bit targets) one 4-byte step, one
//! 2-byte step, and one final byte.

use crate::word::{self, WORD_BYTES};
use std::ptr;

/// Copy `len` bytes from `src` to `dst`, returning `dst`.
///
/// Identical `dst`/`src` pointers are a no-op fast path; any other overlap
/// is undefined behavior (use [`copy_overlapping`] for that).
///
/// # Safety
/// `src` must be valid for reads and `dst` for writes of `len` bytes, and
/// the regions must not partially overlap.
pub unsafe fn copy(dst: *mut u8, src: *const u8, len: usize) -> *mut u8 {
    if dst.cast_const() == src || len == 0 {
        return dst;
    }

    let mut d = dst;
    let mut s = src;
    let mut rem = len;

    while rem >= WORD_BYTES {
        unsafe {
            let w = ptr::read_unaligned(s as *const usize);
            ptr::write_unaligned(d as *mut usize, w);
            s = s.add(WORD_BYTES);
            d = d.add(WORD_BYTES);
        }
        rem -= WORD_BYTES;
    }
    #[cfg(target_pointer_width = "64")]
    if rem >= 4 {
        unsafe {
            let w = ptr::read_unaligned(s as *const u32);
            ptr::write_unaligned(d as *mut u32, w);
            s = s.add(4);
            d = d.add(4);
        }
        rem -= 4;
    }
    if rem >= 2 {
        unsafe {
            let w = ptr::read_unaligned(s as *const u16);
            ptr::write_unaligned(d as *mut u16, w);
            s = s.add(2);
            d = d.add(2);
        }
        rem -= 2;
    }
    if rem >= 1 {
        unsafe {
            *d = *s;
        }
    }
    dst
}

/// Copy `len` bytes between possibly overlapping regions, returning `dst`.
///
/// Forward copy when `dst` is below `src`, otherwise backward from the
/// tail through the same chunk cascade, so either overlap direction yields
/// the byte-by-byte shift result.
///
/// # Safety
/// `src` must be valid for reads and `dst` for writes of `len` bytes.
pub unsafe fn copy_overlapping(dst: *mut u8, src: *const u8, len: usize) -> *mut u8 {
    if dst.cast_const() == src || len == 0 {
        return dst;
    }

    if (dst as usize) < (src as usize) {
        unsafe {
            copy(dst, src, len);
        }
        return dst;
    }

    // dst above src: walk down so un-copied source bytes are never
    // clobbered before they are read.
    let mut rem = len;
    while rem >= WORD_BYTES {
        rem -= WORD_BYTES;
        unsafe {
            let w = ptr::read_unaligned(src.add(rem) as *const usize);
            ptr::write_unaligned(dst.add(rem) as *mut usize, w);
        }
    }
    #[cfg(target_pointer_width = "64")]
    if rem >= 4 {
        rem -= 4;
        unsafe {
            let w = ptr::read_unaligned(src.add(rem) as *const u32);
            ptr::write_unaligned(dst.add(rem) as *mut u32, w);
        }
    }
    if rem >= 2 {
        rem -= 2;
        unsafe {
            let w = ptr::read_unaligned(src.add(rem) as *const u16);
            ptr::write_unaligned(dst.add(rem) as *mut u16, w);
        }
    }
    if rem >= 1 {
        unsafe {
            *dst = *src;
        }
    }
    dst
}

/// Copy at most `len` bytes from `src` to `dst`, stopping right after the
/// first byte equal to `stop` has been copied.
///
/// Returns a pointer one past the copied stop byte, or `None` if `stop`
/// did not occur in the first `len` bytes (in which case exactly `len`
/// bytes were copied).
///
/// Chunks are scanned before they are written: when the stop byte falls
/// mid-chunk, only the byte-exact prefix through it is copied.
///
/// # Safety
/// `src` must be valid for reads and `dst` for writes of `len` bytes, and
/// the regions must not overlap.
pub unsafe fn copy_until(dst: *mut u8, src: *const u8, stop: u8, len: usize) -> Option<*mut u8> {
    let mut d = dst;
    let mut s = src;
    let mut rem = len;

    while rem >= WORD_BYTES {
        let w = unsafe { word::load_word_unaligned(s) };
        if let Some(i) = word::first_match(w, stop) {
            unsafe {
                copy(d, s, i + 1);
                return Some(d.add(i + 1));
            }
        }
        unsafe {
            ptr::write_unaligned(d as *mut usize, w.to_le());
            s = s.add(WORD_BYTES);
            d = d.add(WORD_BYTES);
        }
        rem -= WORD_BYTES;
    }
    #[cfg(target_pointer_width = "64")]
    if rem >= 4 {
        let w = unsafe { word::load_half_unaligned(s) };
        if let Some(i) = word::first_match_in(w, 4, stop) {
            unsafe {
                copy(d, s, i + 1);
                return Some(d.add(i + 1));
            }
        }
        unsafe {
            ptr::write_unaligned(d as *mut u32, (w as u32).to_le());
            s = s.add(4);
            d = d.add(4);
        }
        rem -= 4;
    }
    if rem >= 2 {
        let w = unsafe { word::load_u16_unaligned(s) };
        if let Some(i) = word::first_match_in(w, 2, stop) {
            unsafe {
                copy(d, s, i + 1);
                return Some(d.add(i + 1));
            }
        }
        unsafe {
            ptr::write_unaligned(d as *mut u16, (w as u16).to_le());
            s = s.add(2);
            d = d.add(2);
        }
        rem -= 2;
    }
    if rem >= 1 {
        unsafe {
            let b = *s;
            *d = b;
            if b == stop {
                return Some(d.add(1));
            }
        }
    }
    None
}

/// Set `len` bytes at `dst` to `value`, returning `dst`.
///
/// The replicated word pattern is built once, then written through the
/// chunk cascade.
///
/// # Safety
/// `dst` must be valid for writes of `len` bytes.
pub unsafe fn fill(dst: *mut u8, value: u8, len: usize) -> *mut u8 {
    let pattern = word::repeat_byte(value);
    let mut d = dst;
    let mut rem = len;

    while rem >= WORD_BYTES {
        unsafe {
            ptr::write_unaligned(d as *mut usize, pattern);
            d = d.add(WORD_BYTES);
        }
        rem -= WORD_BYTES;
    }
    #[cfg(target_pointer_width = "64")]
    if rem >= 4 {
        unsafe {
            ptr::write_unaligned(d as *mut u32, pattern as u32);
            d = d.add(4);
        }
        rem -= 4;
    }
    if rem >= 2 {
        unsafe {
            ptr::write_unaligned(d as *mut u16, pattern as u16);
            d = d.add(2);
        }
        rem -= 2;
    }
    if rem >= 1 {
        unsafe {
            *d = value;
        }
    }
    dst
}

/// Lexicographically compare `len` bytes at `a` and `b`.
///
/// Returns a negative, zero, or positive value exactly per the `memcmp`
/// contract, ordering by unsigned byte value. Identical pointers
/// short-circuit to 0 without touching memory.
///
/// # Safety
/// `a` and `b` must be valid for reads of `len` bytes.
pub unsafe fn compare(a: *const u8, b: *const u8, len: usize) -> i32 {
    if a == b || len == 0 {
        return 0;
    }

    let mut i = 0;
    while i + WORD_BYTES <= len {
        let wa = unsafe { word::load_word_unaligned(a.add(i)) };
        let wb = unsafe { word::load_word_unaligned(b.add(i)) };
        if wa != wb {
            return diff_in(wa, wb, WORD_BYTES);
        }
        i += WORD_BYTES;
    }
    #[cfg(target_pointer_width = "64")]
    if len - i >= 4 {
        let wa = unsafe { word::load_half_unaligned(a.add(i)) };
        let wb = unsafe { word::load_half_unaligned(b.add(i)) };
        if wa != wb {
            return diff_in(wa, wb, 4);
        }
        i += 4;
    }
    if len - i >= 2 {
        let wa = unsafe { word::load_u16_unaligned(a.add(i)) };
        let wb = unsafe { word::load_u16_unaligned(b.add(i)) };
        if wa != wb {
            return diff_in(wa, wb, 2);
        }
        i += 2;
    }
    if len - i >= 1 {
        let ca = unsafe { *a.add(i) };
        let cb = unsafe { *b.add(i) };
        return ca as i32 - cb as i32;
    }
    0
}

/// First differing lane of two unequal normalized chunks, as a signed
/// byte difference.
#[inline(always)]
fn diff_in(wa: usize, wb: usize, count: usize) -> i32 {
    let mut j = 0;
    while j < count {
        let ca = word::byte_at(wa, j);
        let cb = word::byte_at(wb, j);
        if ca != cb {
            return ca as i32 - cb as i32;
        }
        j += 1;
    }
    0
}

/// Offset of the first occurrence of `value` in the `len` bytes at `ptr`,
/// or `None`. A `len` of 0 never touches memory.
///
/// # Safety
/// `ptr` must be valid for reads of `len` bytes.
pub unsafe fn find_byte(ptr: *const u8, value: u8, len: usize) -> Option<usize> {
    let mut i = 0;
    while i + WORD_BYTES <= len {
        let w = unsafe { word::load_word_unaligned(ptr.add(i)) };
        if let Some(j) = word::first_match(w, value) {
            return Some(i + j);
        }
        i += WORD_BYTES;
    }
    #[cfg(target_pointer_width = "64")]
    if len - i >= 4 {
        let w = unsafe { word::load_half_unaligned(ptr.add(i)) };
        if let Some(j) = word::first_match_in(w, 4, value) {
            return Some(i + j);
        }
        i += 4;
    }
    if len - i >= 2 {
        let w = unsafe { word::load_u16_unaligned(ptr.add(i)) };
        if let Some(j) = word::first_match_in(w, 2, value) {
            return Some(i + j);
        }
        i += 2;
    }
    if len - i >= 1 && unsafe { *ptr.add(i) } == value {
        return Some(i);
    }
    None
}

/// Offset of the first occurrence of `value` starting at `ptr`, with no
/// length bound.
///
/// Scans byte-wise until `ptr` reaches a word boundary, then by aligned
/// words, so reads never cross past the word containing the match.
///
/// # Safety
/// `value` must occur in memory reachable from `ptr`, and every byte up to
/// the end of the word containing it must be readable. Undefined behavior
/// otherwise.
pub unsafe fn find_byte_unbounded(ptr: *const u8, value: u8) -> usize {
    let mut i = 0;
    while !word::is_word_aligned(unsafe { ptr.add(i) }) {
        if unsafe { *ptr.add(i) } == value {
            return i;
        }
        i += 1;
    }
    loop {
        let w = unsafe { word::load_word_aligned(ptr.add(i)) };
        if let Some(j) = word::first_match(w, value) {
            return i + j;
        }
        i += WORD_BYTES;
    }
}

/// Offset of the last occurrence of `value` in the `len` bytes at `ptr`,
/// or `None`. Scans backward from the end through the chunk cascade,
/// symmetric to [`find_byte`].
///
/// # Safety
/// `ptr` must be valid for reads of `len` bytes.
pub unsafe fn find_last_byte(ptr: *const u8, value: u8, len: usize) -> Option<usize> {
    let mut rem = len;
    while rem >= WORD_BYTES {
        let base = rem - WORD_BYTES;
        let w = unsafe { word::load_word_unaligned(ptr.add(base)) };
        if word::contains_byte(w, value) {
            if let Some(j) = word::last_match_in(w, WORD_BYTES, value) {
                return Some(base + j);
            }
        }
        rem -= WORD_BYTES;
    }
    #[cfg(target_pointer_width = "64")]
    if rem >= 4 {
        let base = rem - 4;
        let w = unsafe { word::load_half_unaligned(ptr.add(base)) };
        if let Some(j) = word::last_match_in(w, 4, value) {
            return Some(base + j);
        }
        rem -= 4;
    }
    if rem >= 2 {
        let base = rem - 2;
        let w = unsafe { word::load_u16_unaligned(ptr.add(base)) };
        if let Some(j) = word::last_match_in(w, 2, value) {
            return Some(base + j);
        }
        rem -= 2;
    }
    if rem >= 1 && unsafe { *ptr } == value {
        return Some(0);
    }
    None
}
