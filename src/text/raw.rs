//! Unchecked text primitives over null-terminated pointers
//!
//! The classic C string functions with their exact contracts: sequences
//! end at the first zero byte, nothing is validated, violating a contract
//! is undefined behavior. Every primitive re-checks each loaded chunk for
//! the terminator before trusting it as data; block primitives alone are
//! not enough, which is why these scans are written out rather than
//! delegated (the sub-word tails do reuse the block cascade).
//!
//! Alignment discipline: unbounded scans step byte-wise to a word
//! boundary, then read aligned words only. An aligned read never crosses
//! past the word containing the terminator, so the caller's buffer only
//! needs to be readable through that word.
//!
//! There is no tokenizer at this tier: classic `strtok`'s hidden resume
//! cursor is replaced by the caller-owned [`crate::text::Tokenizer`].

use crate::block;
use crate::text::byte_set::ByteSet;
use crate::text::kmp;
use crate::word::{self, WORD_BYTES};
use std::ptr;
use std::slice;

/// Distance from `s` to its terminator.
///
/// # Safety
/// `s` must be null-terminated, readable through the end of the word
/// containing the terminator.
pub unsafe fn length(s: *const u8) -> usize {
    let mut i = 0;
    while !word::is_word_aligned(unsafe { s.add(i) }) {
        if unsafe { *s.add(i) } == 0 {
            return i;
        }
        i += 1;
    }
    loop {
        let w = unsafe { word::load_word_aligned(s.add(i)) };
        if let Some(j) = word::first_match(w, 0) {
            return i + j;
        }
        i += WORD_BYTES;
    }
}

/// Distance from `s` to its terminator, or `max` if no terminator occurs
/// in the first `max` bytes.
///
/// # Safety
/// `s` must be valid for reads of `max` bytes, or through its terminator
/// if that comes first.
pub unsafe fn bounded_length(s: *const u8, max: usize) -> usize {
    let mut i = 0;
    while i < max && !word::is_word_aligned(unsafe { s.add(i) }) {
        if unsafe { *s.add(i) } == 0 {
            return i;
        }
        i += 1;
    }
    while i + WORD_BYTES <= max {
        let w = unsafe { word::load_word_aligned(s.add(i)) };
        if let Some(j) = word::first_match(w, 0) {
            return i + j;
        }
        i += WORD_BYTES;
    }
    while i < max {
        if unsafe { *s.add(i) } == 0 {
            return i;
        }
        i += 1;
    }
    max
}

/// Copy the sequence at `src`, terminator included, into `dst`.
/// Identical pointers are a no-op. Returns `dst`.
///
/// Each word is written only after it is known terminator-free; the word
/// holding the terminator goes through the sub-word block cascade.
///
/// # Safety
/// `src` must be null-terminated and readable through the end of the word
/// containing the terminator; `dst` must be writable for the sequence
/// length plus one; the regions must not overlap.
pub unsafe fn copy(dst: *mut u8, src: *const u8) -> *mut u8 {
    if dst.cast_const() == src {
        return dst;
    }

    let mut d = dst;
    let mut s = src;
    while !word::is_word_aligned(s) {
        let b = unsafe { *s };
        unsafe {
            *d = b;
        }
        if b == 0 {
            return dst;
        }
        s = unsafe { s.add(1) };
        d = unsafe { d.add(1) };
    }
    loop {
        let w = unsafe { word::load_word_aligned(s) };
        if let Some(j) = word::first_match(w, 0) {
            unsafe {
                block::raw::copy(d, s, j + 1);
            }
            return dst;
        }
        unsafe {
            ptr::write_unaligned(d as *mut usize, w.to_le());
            s = s.add(WORD_BYTES);
            d = d.add(WORD_BYTES);
        }
    }
}

/// Copy at most `len` bytes of the sequence at `src` into `dst`,
/// zero-filling the remainder of the `len`-byte window when `src` is
/// shorter. No terminator is written when `src` fills the whole window.
/// Returns `dst`.
///
/// # Safety
/// `src` must be valid for reads of `len` bytes (or through its
/// terminator if that comes first, plus the remainder of that word);
/// `dst` must be writable for `len` bytes; the regions must not overlap.
pub unsafe fn bounded_copy(dst: *mut u8, src: *const u8, len: usize) -> *mut u8 {
    if let Some(end) = unsafe { block::raw::copy_until(dst, src, 0, len) } {
        let copied = end as usize - dst as usize;
        unsafe {
            block::raw::fill(end, 0, len - copied);
        }
    }
    dst
}

/// Append the sequence at `src`, terminator included, after the sequence
/// at `dst`. Returns `dst`.
///
/// # Safety
/// Same as [`copy`], with `dst` writable from its own terminator onward.
pub unsafe fn concat(dst: *mut u8, src: *const u8) -> *mut u8 {
    let n = unsafe { length(dst.cast_const()) };
    unsafe {
        copy(dst.add(n), src);
    }
    dst
}

/// Append at most `len` bytes of the sequence at `src` after the sequence
/// at `dst`, then always write a terminator. Returns `dst`.
///
/// # Safety
/// `dst` must be null-terminated and writable for its length plus
/// `min(len, src length) + 1` more bytes; `src` must be readable through
/// its terminator's word or `len` bytes, whichever comes first; the
/// regions must not overlap.
pub unsafe fn bounded_concat(dst: *mut u8, src: *const u8, len: usize) -> *mut u8 {
    let n = unsafe { length(dst.cast_const()) };
    let mut d = unsafe { dst.add(n) };
    let mut s = src;
    let mut rem = len;

    while rem > 0 && !word::is_word_aligned(s) {
        let b = unsafe { *s };
        if b == 0 {
            // Terminator inside the prefix: nothing left to copy, and `s`
            // is still unaligned, so the word loop must not run.
            rem = 0;
            break;
        }
        unsafe {
            *d = b;
            d = d.add(1);
            s = s.add(1);
        }
        rem -= 1;
    }
    while rem >= WORD_BYTES {
        let w = unsafe { word::load_word_aligned(s) };
        if word::has_zero_byte(w) {
            break;
        }
        unsafe {
            ptr::write_unaligned(d as *mut usize, w.to_le());
            d = d.add(WORD_BYTES);
            s = s.add(WORD_BYTES);
        }
        rem -= WORD_BYTES;
    }
    while rem > 0 {
        let b = unsafe { *s };
        if b == 0 {
            break;
        }
        unsafe {
            *d = b;
            d = d.add(1);
            s = s.add(1);
        }
        rem -= 1;
    }
    unsafe {
        *d = 0;
    }
    dst
}

/// Lexicographically compare two sequences up to the first terminator in
/// either. Negative/zero/positive per the `strcmp` contract, unsigned
/// bytes. Identical pointers short-circuit to 0.
///
/// Word-at-a-time comparison needs both pointers on the same alignment
/// phase; otherwise the scan stays byte-wise.
///
/// # Safety
/// Both sequences must be null-terminated, readable through the word
/// containing their terminator.
pub unsafe fn compare(a: *const u8, b: *const u8) -> i32 {
    if a == b {
        return 0;
    }

    let mut i = 0;
    if a as usize % WORD_BYTES == b as usize % WORD_BYTES {
        while !word::is_word_aligned(unsafe { a.add(i) }) {
            let ca = unsafe { *a.add(i) };
            let cb = unsafe { *b.add(i) };
            if ca != cb || ca == 0 {
                return ca as i32 - cb as i32;
            }
            i += 1;
        }
        loop {
            let wa = unsafe { word::load_word_aligned(a.add(i)) };
            let wb = unsafe { word::load_word_aligned(b.add(i)) };
            if wa != wb || word::has_zero_byte(wa) {
                break;
            }
            i += WORD_BYTES;
        }
    }
    loop {
        let ca = unsafe { *a.add(i) };
        let cb = unsafe { *b.add(i) };
        if ca != cb || ca == 0 {
            return ca as i32 - cb as i32;
        }
        i += 1;
    }
}

/// Like [`compare`] but examines at most `len` bytes; sequences equal
/// through the bound compare as 0, and a sequence ending before the bound
/// while prefixing the other compares less.
///
/// # Safety
/// Both sequences must be readable for `len` bytes or through their
/// terminator, whichever comes first.
pub unsafe fn bounded_compare(a: *const u8, b: *const u8, len: usize) -> i32 {
    if a == b || len == 0 {
        return 0;
    }

    let mut i = 0;
    if a as usize % WORD_BYTES == b as usize % WORD_BYTES {
        while i < len && !word::is_word_aligned(unsafe { a.add(i) }) {
            let ca = unsafe { *a.add(i) };
            let cb = unsafe { *b.add(i) };
            if ca != cb || ca == 0 {
                return ca as i32 - cb as i32;
            }
            i += 1;
        }
        while i + WORD_BYTES <= len {
            let wa = unsafe { word::load_word_aligned(a.add(i)) };
            let wb = unsafe { word::load_word_aligned(b.add(i)) };
            if wa != wb || word::has_zero_byte(wa) {
                break;
            }
            i += WORD_BYTES;
        }
    }
    while i < len {
        let ca = unsafe { *a.add(i) };
        let cb = unsafe { *b.add(i) };
        if ca != cb || ca == 0 {
            return ca as i32 - cb as i32;
        }
        i += 1;
    }
    0
}

/// Offset of the first occurrence of `value` before the terminator of
/// `s`, or `None`. A `value` of 0 is never found: the terminator is not
/// content.
///
/// # Safety
/// `s` must be null-terminated, readable through the word containing the
/// terminator.
pub unsafe fn find_byte(s: *const u8, value: u8) -> Option<usize> {
    let mut i = 0;
    while !word::is_word_aligned(unsafe { s.add(i) }) {
        let b = unsafe { *s.add(i) };
        if b == 0 {
            return None;
        }
        if b == value {
            return Some(i);
        }
        i += 1;
    }
    loop {
        let w = unsafe { word::load_word_aligned(s.add(i)) };
        if word::has_zero_byte(w) || word::contains_byte(w, value) {
            for j in 0..WORD_BYTES {
                let b = word::byte_at(w, j);
                if b == 0 {
                    return None;
                }
                if b == value {
                    return Some(i + j);
                }
            }
        }
        i += WORD_BYTES;
    }
}

/// Offset of the last occurrence of `value` before the terminator of
/// `s`, or `None`. The whole sequence is scanned once, forward, keeping
/// the most recent match; no length is known up front.
///
/// # Safety
/// Same as [`find_byte`].
pub unsafe fn find_last_byte(s: *const u8, value: u8) -> Option<usize> {
    let mut last = None;
    let mut i = 0;
    while !word::is_word_aligned(unsafe { s.add(i) }) {
        let b = unsafe { *s.add(i) };
        if b == 0 {
            return last;
        }
        if b == value {
            last = Some(i);
        }
        i += 1;
    }
    loop {
        let w = unsafe { word::load_word_aligned(s.add(i)) };
        if word::has_zero_byte(w) {
            for j in 0..WORD_BYTES {
                let b = word::byte_at(w, j);
                if b == 0 {
                    return last;
                }
                if b == value {
                    last = Some(i + j);
                }
            }
            return last;
        }
        if word::contains_byte(w, value) {
            if let Some(j) = word::last_match_in(w, WORD_BYTES, value) {
                last = Some(i + j);
            }
        }
        i += WORD_BYTES;
    }
}

/// Count of leading bytes of `s` that are NOT members of the `reject`
/// set.
///
/// # Safety
/// Both sequences must be null-terminated and readable through their
/// terminators (`s` through its terminator's word).
pub unsafe fn span_complement(s: *const u8, reject: *const u8) -> usize {
    let set = unsafe { ByteSet::from_terminated(reject) };
    let mut i = 0;
    loop {
        let b = unsafe { *s.add(i) };
        if b == 0 || set.contains(b) {
            return i;
        }
        i += 1;
    }
}

/// Count of leading bytes of `s` that are members of the `accept` set.
///
/// # Safety
/// Same as [`span_complement`].
pub unsafe fn span(s: *const u8, accept: *const u8) -> usize {
    let set = unsafe { ByteSet::from_terminated(accept) };
    let mut i = 0;
    loop {
        let b = unsafe { *s.add(i) };
        if b == 0 || !set.contains(b) {
            return i;
        }
        i += 1;
    }
}

/// Offset of the first byte of `s` that is a member of `set`, or `None`
/// if the terminator comes first.
///
/// # Safety
/// Same as [`span_complement`].
pub unsafe fn find_first_in_set(s: *const u8, set: *const u8) -> Option<usize> {
    let members = unsafe { ByteSet::from_terminated(set) };
    let mut i = 0;
    loop {
        let b = unsafe { *s.add(i) };
        if b == 0 {
            return None;
        }
        if members.contains(b) {
            return Some(i);
        }
        i += 1;
    }
}

/// Offset of the first occurrence of the sequence at `pattern` within the
/// sequence at `s`, or `None`. An empty pattern matches at 0.
///
/// Knuth-Morris-Pratt: the failure table is built once per call (heap
/// allocation scoped to the call, released on found, not-found, and the
/// empty-pattern early return alike), then the haystack is scanned with
/// the pattern cursor advancing on match and backtracking through the
/// table on mismatch. While no prefix is matched, terminator-free words
/// that cannot contain the pattern's first byte are skipped whole.
///
/// # Safety
/// Both sequences must be null-terminated, `s` readable through the word
/// containing its terminator, `pattern` through its terminator.
pub unsafe fn find_substring(s: *const u8, pattern: *const u8) -> Option<usize> {
    let m = unsafe { length(pattern) };
    if m == 0 {
        return Some(0);
    }
    let pat = unsafe { slice::from_raw_parts(pattern, m) };
    let table = kmp::failure_table(pat);

    let mut i = 0;
    let mut k = 0i32;
    loop {
        if k == 0 && word::is_word_aligned(unsafe { s.add(i) }) {
            loop {
                let w = unsafe { word::load_word_aligned(s.add(i)) };
                if word::has_zero_byte(w) || word::contains_byte(w, pat[0]) {
                    break;
                }
                i += WORD_BYTES;
            }
        }
        let c = unsafe { *s.add(i) };
        if c == 0 {
            return None;
        }
        while k >= 0 && pat[k as usize] != c {
            k = table[k as usize];
        }
        i += 1;
        k += 1;
        if k as usize == m {
            return Some(i - m);
        }
    }
}
