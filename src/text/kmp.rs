//! Knuth-Morris-Pratt substring matching support
//!
//! The failure table maps each pattern position to the length of the
//! longest proper prefix of the pattern that is also a suffix ending
//! there, letting the matcher recover from a mismatch without rescanning
//! the haystack. The table lives in a `Vec` owned by the search call, so
//! it is released on every exit path; allocation failure aborts through
//! the global allocator rather than continuing with a missing table.

/// Build the partial-match table for `pattern`: `pattern.len() + 1`
/// signed entries, `table[0] == -1`.
pub(crate) fn failure_table(pattern: &[u8]) -> Vec<i32> {
    let m = pattern.len();
    let mut table = vec![0i32; m + 1];
    table[0] = -1;

    let mut pos = 1;
    let mut cand = 0i32;
    while pos < m {
        if pattern[pos] == pattern[cand as usize] {
            table[pos] = table[cand as usize];
        } else {
            table[pos] = cand;
            while cand >= 0 && pattern[pos] != pattern[cand as usize] {
                cand = table[cand as usize];
            }
        }
        pos += 1;
        cand += 1;
    }
    table[m] = cand;
    table
}

/// Index of the first occurrence of `pattern` in `haystack`, or `None`.
/// Both slices are plain byte runs here; terminator handling belongs to
/// the callers.
pub(crate) fn search(haystack: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    if pattern.len() > haystack.len() {
        return None;
    }

    let table = failure_table(pattern);
    let mut k = 0i32;
    for (i, &c) in haystack.iter().enumerate() {
        while k >= 0 && pattern[k as usize] != c {
            k = table[k as usize];
        }
        k += 1;
        if k as usize == pattern.len() {
            return Some(i + 1 - pattern.len());
        }
    }
    None
}
