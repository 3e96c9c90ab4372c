//! Text operations: null-terminated sequence primitives over the block
//! layer
//!
//! A text sequence is a byte run ending at the first zero byte. The
//! checked tier in this module works on slices and treats the end of the
//! slice as an implicit terminator, so every function here is total and
//! safe; capacity problems are reported as errors. The [`raw`] submodule
//! keeps the exact pointer-based contracts of the classic C string
//! functions for callers replacing them wholesale.
//!
//! The destructive tokenizer is [`Tokenizer`]: the classic version's
//! process-wide resume cursor is replaced by a cursor object that owns
//! its buffer, so independent tokenization runs can no longer corrupt
//! each other.

mod byte_set;
mod kmp;
pub mod raw;

pub use byte_set::ByteSet;

use crate::block;
use crate::error::{FastBytesError, Result};

/// Logical length of `s`: bytes before the first terminator, or the whole
/// slice when none is present.
pub fn length(s: &[u8]) -> usize {
    block::find_byte(s, 0).unwrap_or(s.len())
}

/// Like [`length`], but never more than `max`.
pub fn bounded_length(s: &[u8], max: usize) -> usize {
    let bound = max.min(s.len());
    block::find_byte(&s[..bound], 0).unwrap_or(bound)
}

/// Copy the logical content of `src` into `dst`, writing a terminator
/// after it. Returns the content length.
///
/// Fails when `dst` cannot hold the content plus the terminator.
pub fn copy(dst: &mut [u8], src: &[u8]) -> Result<usize> {
    let n = length(src);
    if dst.len() < n + 1 {
        return Err(FastBytesError::out_of_bounds(n + 1, dst.len()));
    }
    unsafe {
        block::raw::copy(dst.as_mut_ptr(), src.as_ptr(), n);
    }
    dst[n] = 0;
    Ok(n)
}

/// Copy at most `len` bytes of `src`'s logical content into `dst`,
/// zero-filling the rest of the `len`-byte window when `src` is shorter.
/// No terminator is written when the content fills the window.
pub fn bounded_copy(dst: &mut [u8], src: &[u8], len: usize) -> Result<()> {
    if dst.len() < len {
        return Err(FastBytesError::out_of_bounds(len, dst.len()));
    }
    let n = bounded_length(src, len);
    unsafe {
        block::raw::copy(dst.as_mut_ptr(), src.as_ptr(), n);
        block::raw::fill(dst.as_mut_ptr().add(n), 0, len - n);
    }
    Ok(())
}

/// Append the logical content of `src` after the logical content of
/// `dst`, terminator included. Returns the combined length.
pub fn concat(dst: &mut [u8], src: &[u8]) -> Result<usize> {
    let d = length(dst);
    let n = length(src);
    if dst.len() < d + n + 1 {
        return Err(FastBytesError::out_of_bounds(d + n + 1, dst.len()));
    }
    unsafe {
        block::raw::copy(dst.as_mut_ptr().add(d), src.as_ptr(), n);
    }
    dst[d + n] = 0;
    Ok(d + n)
}

/// Append at most `len` bytes of `src`'s logical content after `dst`'s,
/// then always write a terminator. Returns the combined length.
pub fn bounded_concat(dst: &mut [u8], src: &[u8], len: usize) -> Result<usize> {
    let d = length(dst);
    let n = bounded_length(src, len);
    if dst.len() < d + n + 1 {
        return Err(FastBytesError::out_of_bounds(d + n + 1, dst.len()));
    }
    unsafe {
        block::raw::copy(dst.as_mut_ptr().add(d), src.as_ptr(), n);
    }
    dst[d + n] = 0;
    Ok(d + n)
}

/// Lexicographically compare the logical contents of `a` and `b`:
/// negative/zero/positive by unsigned byte, shorter-and-prefix less.
pub fn compare(a: &[u8], b: &[u8]) -> i32 {
    let na = length(a);
    let nb = length(b);
    let r = unsafe { block::raw::compare(a.as_ptr(), b.as_ptr(), na.min(nb)) };
    if r != 0 {
        return r;
    }
    match na.cmp(&nb) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

/// Like [`compare`], but examines at most `len` bytes; contents equal
/// through the bound compare as 0.
pub fn bounded_compare(a: &[u8], b: &[u8], len: usize) -> i32 {
    let na = bounded_length(a, len);
    let nb = bounded_length(b, len);
    let r = unsafe { block::raw::compare(a.as_ptr(), b.as_ptr(), na.min(nb)) };
    if r != 0 {
        return r;
    }
    if na == nb {
        return 0;
    }
    // One content ended before the bound while prefixing the other: its
    // terminator orders below any content byte.
    if na < nb {
        -1
    } else {
        1
    }
}

/// Index of the first occurrence of `value` in the logical content of
/// `s`, or `None`. The terminator itself is not content.
pub fn find_byte(s: &[u8], value: u8) -> Option<usize> {
    if value == 0 {
        return None;
    }
    block::find_byte(&s[..length(s)], value)
}

/// Index of the last occurrence of `value` in the logical content of
/// `s`, or `None`.
pub fn find_last_byte(s: &[u8], value: u8) -> Option<usize> {
    if value == 0 {
        return None;
    }
    block::find_last_byte(&s[..length(s)], value)
}

/// Count of leading content bytes of `s` that are members of `accept`.
pub fn span(s: &[u8], accept: &[u8]) -> usize {
    ByteSet::from_bytes(accept).span(s)
}

/// Count of leading content bytes of `s` that are NOT members of
/// `reject`.
pub fn span_complement(s: &[u8], reject: &[u8]) -> usize {
    ByteSet::from_bytes(reject).span_complement(s)
}

/// Index of the first content byte of `s` that is a member of `set`, or
/// `None`.
pub fn find_first_in_set(s: &[u8], set: &[u8]) -> Option<usize> {
    ByteSet::from_bytes(set).find_first(s)
}

/// Index of the first occurrence of `pattern`'s logical content within
/// `s`'s logical content, or `None`. An empty pattern matches at 0.
pub fn find_substring(s: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = length(s);
    let m = length(pattern);
    kmp::search(&s[..n], &pattern[..m])
}

/// Destructive in-place tokenizer with an explicit resume cursor.
///
/// Replaces the classic tokenizer's hidden process-wide resume pointer:
/// the cursor lives in this object and the object owns the buffer
/// exclusively, so interleaved tokenization of different buffers cannot
/// corrupt state. Like `strtok`, the buffer is mutated: the byte
/// after each returned token is overwritten with a terminator.
///
/// ```
/// use fastbytes::text::{ByteSet, Tokenizer};
///
/// let mut buf = *b"- strtok; test\0";
/// let delims = ByteSet::from_bytes(b"- ;");
/// let mut tok = Tokenizer::new(&mut buf);
/// assert_eq!(tok.next_token(&delims), Some(&b"strtok"[..]));
/// assert_eq!(tok.next_token(&delims), Some(&b"test"[..]));
/// assert_eq!(tok.next_token(&delims), None);
/// ```
#[derive(Debug)]
pub struct Tokenizer<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Start tokenizing `buf`. The buffer is mutated as tokens are
    /// produced.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Tokenizer { buf, pos: 0 }
    }

    /// Produce the next token, or `None` once the input is exhausted.
    ///
    /// Skips a leading run of delimiter bytes, spans the token, then
    /// overwrites the byte after the token with a terminator and records
    /// the position past it as the resume point.
    pub fn next_token(&mut self, delims: &ByteSet) -> Option<&[u8]> {
        let rest = &self.buf[self.pos.min(self.buf.len())..];
        let skip = delims.span(rest);
        let start = self.pos + skip;

        let rest = &self.buf[start.min(self.buf.len())..];
        if rest.is_empty() || rest[0] == 0 {
            self.pos = start;
            return None;
        }

        let len = delims.span_complement(rest);
        let end = start + len;
        if end < self.buf.len() && self.buf[end] != 0 {
            self.buf[end] = 0;
            self.pos = end + 1;
        } else {
            self.pos = end;
        }
        Some(&self.buf[start..end])
    }

    /// Position of the resume cursor within the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        assert_eq!(length(b"hello\0world"), 5);
        assert_eq!(length(b"\0"), 0);
        assert_eq!(length(b""), 0);
        assert_eq!(length(b"no terminator"), 13);
    }

    #[test]
    fn test_length_word_boundaries() {
        use crate::word::WORD_BYTES;
        for n in [0, 1, WORD_BYTES - 1, WORD_BYTES, WORD_BYTES + 1, 3 * WORD_BYTES] {
            let mut buf = vec![b'x'; n];
            buf.push(0);
            assert_eq!(length(&buf), n);
        }
    }

    #[test]
    fn test_bounded_length() {
        assert_eq!(bounded_length(b"hello\0", 10), 5);
        assert_eq!(bounded_length(b"hello\0", 3), 3);
        assert_eq!(bounded_length(b"hello", 99), 5);
    }

    #[test]
    fn test_copy_and_capacity() {
        let mut dst = [0xAAu8; 8];
        assert_eq!(copy(&mut dst, b"hi\0junk").unwrap(), 2);
        assert_eq!(&dst[..3], b"hi\0");
        assert_eq!(dst[3], 0xAA);

        let mut tiny = [0u8; 2];
        assert!(copy(&mut tiny, b"hi\0").is_err());
        // Exactly content + terminator fits.
        let mut exact = [0u8; 3];
        assert_eq!(copy(&mut exact, b"hi\0").unwrap(), 2);
    }

    #[test]
    fn test_bounded_copy() {
        let mut dst = [0xAAu8; 6];
        bounded_copy(&mut dst, b"hi\0", 5).unwrap();
        assert_eq!(&dst, &[b'h', b'i', 0, 0, 0, 0xAA]);

        let mut dst = [0xAAu8; 4];
        bounded_copy(&mut dst, b"longer\0", 4).unwrap();
        assert_eq!(&dst, b"long");

        assert!(bounded_copy(&mut dst, b"x\0", 9).is_err());
    }

    #[test]
    fn test_concat_family() {
        let mut dst = [0u8; 16];
        copy(&mut dst, b"foo\0").unwrap();
        assert_eq!(concat(&mut dst, b"bar\0").unwrap(), 6);
        assert_eq!(&dst[..7], b"foobar\0");

        assert_eq!(bounded_concat(&mut dst, b"bazqux\0", 3).unwrap(), 9);
        assert_eq!(&dst[..10], b"foobarbaz\0");

        let mut tiny = [0u8; 4];
        copy(&mut tiny, b"abc\0").unwrap();
        assert!(concat(&mut tiny, b"d\0").is_err());
    }

    #[test]
    fn test_compare() {
        assert!(compare(b"aaaa\0", b"aaab\0") < 0);
        assert!(compare(b"aaab\0", b"aaaa\0") > 0);
        assert_eq!(compare(b"same\0", b"same\0"), 0);
        assert!(compare(b"ab\0", b"abc\0") < 0);
        assert!(compare(b"abc\0", b"ab\0") > 0);
        // Content after the terminator is ignored.
        assert_eq!(compare(b"eq\0xxx", b"eq\0yyy"), 0);
    }

    #[test]
    fn test_bounded_compare() {
        assert_eq!(bounded_compare(b"abcdef\0", b"abcxyz\0", 3), 0);
        assert!(bounded_compare(b"abcdef\0", b"abcxyz\0", 4) < 0);
        assert_eq!(bounded_compare(b"abc\0", b"abc\0", 10), 0);
        assert!(bounded_compare(b"ab\0", b"abc\0", 3) < 0);
        assert_eq!(bounded_compare(b"ab\0", b"abc\0", 2), 0);
        assert_eq!(bounded_compare(b"x\0", b"y\0", 0), 0);
    }

    #[test]
    fn test_find_byte_family() {
        assert_eq!(find_byte(b"abacus\0", b'a'), Some(0));
        assert_eq!(find_last_byte(b"abacus\0", b'a'), Some(2));
        assert_eq!(find_byte(b"abc\0abc", b'c'), Some(2));
        // Past the terminator is invisible.
        assert_eq!(find_byte(b"ab\0c", b'c'), None);
        assert_eq!(find_byte(b"abc\0", 0), None);
        assert_eq!(find_last_byte(b"abc\0", 0), None);
    }

    #[test]
    fn test_span_family() {
        assert_eq!(span_complement(b"strcspn\0", b"cr\0"), 2);
        assert_eq!(span(b"strspn\0", b"str\0"), 4);
        assert_eq!(span(b"\0", b"abc\0"), 0);
        assert_eq!(span_complement(b"\0", b"abc\0"), 0);
        assert_eq!(find_first_in_set(b"hello, world\0", b", \0"), Some(5));
        assert_eq!(find_first_in_set(b"hello\0", b"xyz\0"), None);
    }

    #[test]
    fn test_find_substring() {
        assert_eq!(find_substring(b"strstr\0", b"trst\0"), Some(1));
        assert_eq!(find_substring(b"strstr\0", b"absent\0"), None);
        assert_eq!(find_substring(b"anything\0", b"\0"), Some(0));
        assert_eq!(find_substring(b"\0", b"x\0"), None);
        // Pattern bytes after its terminator are not part of the search.
        assert_eq!(find_substring(b"abc\0", b"bc\0zz"), Some(1));
    }

    #[test]
    fn test_tokenizer_exhaustiveness() {
        let mut buf = *b"- strtok; test\0";
        let delims = ByteSet::from_bytes(b"- ;");
        let mut tok = Tokenizer::new(&mut buf);

        assert_eq!(tok.next_token(&delims), Some(&b"strtok"[..]));
        assert_eq!(tok.next_token(&delims), Some(&b"test"[..]));
        assert_eq!(tok.next_token(&delims), None);
        // Exhausted stays exhausted.
        assert_eq!(tok.next_token(&delims), None);

        // The buffer was mutated: the delimiter after "strtok" became a
        // terminator.
        assert_eq!(&buf[2..9], b"strtok\0");
    }

    #[test]
    fn test_tokenizer_edge_cases() {
        // Only delimiters: no tokens.
        let mut buf = *b" ;; - \0";
        let delims = ByteSet::from_bytes(b"- ;");
        let mut tok = Tokenizer::new(&mut buf);
        assert_eq!(tok.next_token(&delims), None);

        // Empty input.
        let mut buf = *b"\0";
        let mut tok = Tokenizer::new(&mut buf);
        assert_eq!(tok.next_token(&delims), None);

        // Token flush against the terminator.
        let mut buf = *b"  tail\0";
        let mut tok = Tokenizer::new(&mut buf);
        assert_eq!(tok.next_token(&delims), Some(&b"tail"[..]));
        assert_eq!(tok.next_token(&delims), None);

        // Two tokenizers on two buffers do not interfere.
        let mut b1 = *b"a b\0";
        let mut b2 = *b"c d\0";
        let mut t1 = Tokenizer::new(&mut b1);
        let mut t2 = Tokenizer::new(&mut b2);
        assert_eq!(t1.next_token(&delims), Some(&b"a"[..]));
        assert_eq!(t2.next_token(&delims), Some(&b"c"[..]));
        assert_eq!(t1.next_token(&delims), Some(&b"b"[..]));
        assert_eq!(t2.next_token(&delims), Some(&b"d"[..]));
        assert_eq!(t1.next_token(&delims), None);
        assert_eq!(t2.next_token(&delims), None);
    }
}
