//! 256-bit appearance vector for byte-set membership tests
//!
//! The character-class search family (span, complement span, first-of-set)
//! answers "is byte B a member of set S" once per scanned byte. Building a
//! bitmap over all 256 byte values first makes that test O(1) after an
//! O(|S|) build pass.

use crate::block;
use crate::word::WORD_BYTES;

const WORD_BITS: usize = WORD_BYTES * 8;
const SET_WORDS: usize = 256 / WORD_BITS;

/// A 256-bit bitmap recording which byte values belong to a set.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ByteSet {
    bits: [usize; SET_WORDS],
}

impl ByteSet {
    /// Create an empty set.
    pub fn new() -> Self {
        ByteSet {
            bits: [0; SET_WORDS],
        }
    }

    /// Build a set from the bytes of `set`, stopping at the set's own
    /// terminator (or the end of the slice). The terminator itself is
    /// never a member.
    pub fn from_bytes(set: &[u8]) -> Self {
        let mut s = ByteSet::new();
        for &b in set {
            if b == 0 {
                break;
            }
            s.insert(b);
        }
        s
    }

    /// Build a set from a null-terminated sequence.
    ///
    /// # Safety
    /// `set` must point to a sequence containing a terminator, with every
    /// byte up to and including it readable.
    pub unsafe fn from_terminated(set: *const u8) -> Self {
        let mut s = ByteSet::new();
        let mut i = 0;
        loop {
            let b = unsafe { *set.add(i) };
            if b == 0 {
                return s;
            }
            s.insert(b);
            i += 1;
        }
    }

    /// Remove all members, reusing the storage via the block fill
    /// primitive.
    pub fn clear(&mut self) {
        unsafe {
            block::raw::fill(self.bits.as_mut_ptr() as *mut u8, 0, 256 / 8);
        }
    }

    /// Add a byte value to the set.
    #[inline]
    pub fn insert(&mut self, value: u8) {
        self.bits[value as usize / WORD_BITS] |= 1 << (value as usize % WORD_BITS);
    }

    /// O(1) membership test.
    #[inline]
    pub fn contains(&self, value: u8) -> bool {
        self.bits[value as usize / WORD_BITS] >> (value as usize % WORD_BITS) & 1 != 0
    }

    /// Count of leading bytes of `s` (up to its terminator or end) that
    /// are members of this set.
    pub fn span(&self, s: &[u8]) -> usize {
        let mut i = 0;
        while i < s.len() && s[i] != 0 && self.contains(s[i]) {
            i += 1;
        }
        i
    }

    /// Count of leading bytes of `s` (up to its terminator or end) that
    /// are NOT members of this set.
    pub fn span_complement(&self, s: &[u8]) -> usize {
        let mut i = 0;
        while i < s.len() && s[i] != 0 && !self.contains(s[i]) {
            i += 1;
        }
        i
    }

    /// Index of the first byte of `s` before its terminator that is a
    /// member of this set, or `None`.
    pub fn find_first(&self, s: &[u8]) -> Option<usize> {
        let i = self.span_complement(s);
        if i < s.len() && s[i] != 0 {
            Some(i)
        } else {
            None
        }
    }
}

impl Default for ByteSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let members: Vec<u8> = (0u8..=255).filter(|&b| self.contains(b)).collect();
        f.debug_struct("ByteSet").field("members", &members).finish()
    }
}
