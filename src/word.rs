//! Word-at-a-time scanning substrate
//!
//! Every primitive in this crate processes memory in native-word-sized
//! chunks instead of single bytes. This module holds the shared machinery:
//! the chunk-size constants, the replicated-byte patterns used by fill, and
//! the SWAR (SIMD-within-a-register) tests that answer "does this word
//! contain byte B, and where" without branching per byte.
//!
//! Loads are normalized to little-endian byte order so that lane `i` of a
//! loaded word is always the byte at offset `i` in memory, regardless of
//! the host's endianness. Byte extraction is shift-and-mask on the
//! normalized value, never pointer aliasing.

use std::ptr;

/// Size in bytes of the native machine word, the unit of the chunked scan.
///
/// This is the single configuration point for the chunk cascade: 8 on
/// 64-bit targets (with an intermediate 4-byte step), 4 on 32-bit targets.
pub const WORD_BYTES: usize = std::mem::size_of::<usize>();

/// A word with the lowest bit of every byte lane set: 0x0101..01.
const LANE_LSB: usize = usize::MAX / 0xFF;

/// A word with the highest bit of every byte lane set: 0x8080..80.
const LANE_MSB: usize = LANE_LSB << 7;

/// Replicate a byte across every lane of a word.
#[inline(always)]
pub const fn repeat_byte(value: u8) -> usize {
    LANE_LSB.wrapping_mul(value as usize)
}

/// True if any byte lane of `word` is zero.
///
/// The classic detector: subtracting 1 from a zero lane borrows into its
/// high bit while `!word` keeps that bit set only for lanes below 0x80.
#[inline(always)]
pub const fn has_zero_byte(word: usize) -> bool {
    word.wrapping_sub(LANE_LSB) & !word & LANE_MSB != 0
}

/// True if any byte lane of `word` equals `value`.
#[inline(always)]
pub const fn contains_byte(word: usize, value: u8) -> bool {
    has_zero_byte(word ^ repeat_byte(value))
}

/// Extract byte lane `index` from a little-endian-normalized word.
#[inline(always)]
pub(crate) const fn byte_at(word: usize, index: usize) -> u8 {
    (word >> (index * 8)) as u8
}

/// Lane index of the first byte equal to `value` in a normalized word.
///
/// The borrow in the zero detector can leak into lanes *above* the first
/// match, so only the lowest set bit of the mask is trusted; that is all a
/// forward scan needs.
#[inline(always)]
pub fn first_match(word: usize, value: u8) -> Option<usize> {
    let diff = word ^ repeat_byte(value);
    let mask = diff.wrapping_sub(LANE_LSB) & !diff & LANE_MSB;
    if mask == 0 {
        None
    } else {
        Some(mask.trailing_zeros() as usize / 8)
    }
}

/// Lane index of the first byte equal to `value` among the low `count`
/// lanes of a normalized word. Used by the sub-word cascade steps, where
/// the upper lanes of the loaded value are not real data.
#[inline(always)]
pub fn first_match_in(word: usize, count: usize, value: u8) -> Option<usize> {
    let mut i = 0;
    while i < count {
        if byte_at(word, i) == value {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Lane index of the last byte equal to `value` among the low `count`
/// lanes of a normalized word. Backward scans cannot use the SWAR mask
/// directly (borrow leakage corrupts the high lanes), so this walks lanes
/// from the top.
#[inline(always)]
pub fn last_match_in(word: usize, count: usize, value: u8) -> Option<usize> {
    let mut i = count;
    while i > 0 {
        i -= 1;
        if byte_at(word, i) == value {
            return Some(i);
        }
    }
    None
}

/// Load a word from `ptr` without alignment requirements, normalized so
/// that lane `i` is the byte at `ptr + i`.
///
/// # Safety
/// `ptr` must be valid for reads of `WORD_BYTES` bytes.
#[inline(always)]
pub(crate) unsafe fn load_word_unaligned(ptr: *const u8) -> usize {
    usize::from_le(unsafe { ptr::read_unaligned(ptr as *const usize) })
}

/// Load a word from a word-aligned `ptr`, normalized like
/// [`load_word_unaligned`].
///
/// # Safety
/// `ptr` must be word-aligned and valid for reads of `WORD_BYTES` bytes.
#[inline(always)]
pub(crate) unsafe fn load_word_aligned(ptr: *const u8) -> usize {
    usize::from_le(unsafe { *(ptr as *const usize) })
}

/// Load the 4-byte intermediate chunk, normalized, zero-extended to a word.
///
/// # Safety
/// `ptr` must be valid for reads of 4 bytes.
#[cfg(target_pointer_width = "64")]
#[inline(always)]
pub(crate) unsafe fn load_half_unaligned(ptr: *const u8) -> usize {
    u32::from_le(unsafe { ptr::read_unaligned(ptr as *const u32) }) as usize
}

/// Load the 2-byte chunk, normalized, zero-extended to a word.
///
/// # Safety
/// `ptr` must be valid for reads of 2 bytes.
#[inline(always)]
pub(crate) unsafe fn load_u16_unaligned(ptr: *const u8) -> usize {
    u16::from_le(unsafe { ptr::read_unaligned(ptr as *const u16) }) as usize
}

/// True if `ptr` sits on a word boundary.
#[inline(always)]
pub(crate) fn is_word_aligned(ptr: *const u8) -> bool {
    ptr as usize % WORD_BYTES == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_byte() {
        assert_eq!(repeat_byte(0), 0);
        assert_eq!(repeat_byte(0xFF), usize::MAX);
        let w = repeat_byte(0xAB);
        for i in 0..WORD_BYTES {
            assert_eq!(byte_at(w, i), 0xAB);
        }
    }

    #[test]
    fn test_has_zero_byte() {
        assert!(has_zero_byte(0));
        assert!(!has_zero_byte(usize::MAX));
        assert!(!has_zero_byte(repeat_byte(0x01)));
        assert!(!has_zero_byte(repeat_byte(0x80)));

        for lane in 0..WORD_BYTES {
            let w = usize::MAX & !(0xFFusize << (lane * 8));
            assert!(has_zero_byte(w), "zero in lane {}", lane);
        }
    }

    #[test]
    fn test_contains_byte() {
        let w = usize::from_le_bytes_equiv(&[1, 2, 3, 4, 5, 6, 7, 8][..WORD_BYTES]);
        for i in 0..WORD_BYTES {
            assert!(contains_byte(w, (i + 1) as u8));
        }
        assert!(!contains_byte(w, 0));
        assert!(!contains_byte(w, 9));
    }

    // Helper to build a normalized word from memory-order bytes in tests.
    trait FromLeBytesEquiv {
        fn from_le_bytes_equiv(bytes: &[u8]) -> usize;
    }

    impl FromLeBytesEquiv for usize {
        fn from_le_bytes_equiv(bytes: &[u8]) -> usize {
            let mut w = 0usize;
            for (i, &b) in bytes.iter().enumerate() {
                w |= (b as usize) << (i * 8);
            }
            w
        }
    }

    #[test]
    fn test_first_match_is_first() {
        // 'x' in lanes 2 and 5; only the first is reported.
        let mut bytes = [b'a'; 8];
        bytes[2] = b'x';
        if WORD_BYTES > 5 {
            bytes[5] = b'x';
        }
        let w = usize::from_le_bytes_equiv(&bytes[..WORD_BYTES]);
        assert_eq!(first_match(w, b'x'), Some(2));
        assert_eq!(first_match(w, b'q'), None);
    }

    #[test]
    fn test_first_match_after_zero_lane() {
        // Borrow from a zero lane must not corrupt the first reported match.
        let mut bytes = [b'a'; 8];
        bytes[1] = 0;
        bytes[3] = b'x';
        let w = usize::from_le_bytes_equiv(&bytes[..WORD_BYTES]);
        assert_eq!(first_match(w, 0), Some(1));
        assert_eq!(first_match(w, b'x'), Some(3));
    }

    #[test]
    fn test_bounded_lane_scans() {
        let mut bytes = [0u8; 8];
        bytes[0] = b'a';
        bytes[1] = b'b';
        bytes[2] = b'a';
        let w = usize::from_le_bytes_equiv(&bytes[..WORD_BYTES]);

        assert_eq!(first_match_in(w, 3, b'a'), Some(0));
        assert_eq!(last_match_in(w, 3, b'a'), Some(2));
        assert_eq!(first_match_in(w, 1, b'b'), None);
        assert_eq!(last_match_in(w, 2, b'a'), Some(0));
        assert_eq!(first_match_in(w, 0, b'a'), None);
    }

    #[test]
    fn test_load_normalization() {
        let data: Vec<u8> = (1..=16).collect();
        for off in 0..8 {
            let w = unsafe { load_word_unaligned(data.as_ptr().add(off)) };
            for i in 0..WORD_BYTES {
                assert_eq!(byte_at(w, i), data[off + i]);
            }
        }
    }
}
