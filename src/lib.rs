//! # Fastbytes: Word-at-a-Time Memory and Text Primitives
//!
//! This crate reimplements the classic C memory and string runtime as a
//! base layer for higher-level containers and string types, processing
//! native-word-sized chunks instead of single bytes for throughput.
//!
//! ## Key Features
//!
//! - **Block Operations**: copy, overlap-safe move, bounded copy-until,
//!   fill, lexicographic compare, and forward/backward/unbounded byte
//!   search over raw `(pointer, length)` regions
//! - **Text Operations**: copy/concatenate, compare, character and
//!   character-set search, KMP substring search, and destructive
//!   tokenization over null-terminated sequences
//! - **Two API tiers**: safe slice-based wrappers with validation, and a
//!   documented `unsafe` tier keeping the exact unchecked contracts of
//!   the primitives being replaced
//! - **SWAR scanning**: branch-free terminator and byte detection inside
//!   each loaded word, with the chunk cascade parameterized over the
//!   native word size (8/4/2/1 on 64-bit targets, 4/2/1 on 32-bit)
//!
//! ## Quick Start
//!
//! ```rust
//! use fastbytes::{block, text, ByteSet, Tokenizer};
//!
//! // Block operations over raw regions
//! let mut buf = vec![0u8; 13];
//! block::copy(b"Hello, World!", &mut buf).unwrap();
//! assert_eq!(block::find_byte(&buf, b'W'), Some(7));
//! assert!(block::compare(b"aaaa", b"aaab") < 0);
//!
//! // Text operations over terminated sequences
//! assert_eq!(text::length(b"hello\0junk"), 5);
//! assert_eq!(text::find_substring(b"strstr\0", b"trst\0"), Some(1));
//! assert_eq!(text::span(b"strspn\0", b"str\0"), 4);
//!
//! // Destructive tokenization with an explicit cursor
//! let mut line = *b"- strtok; test\0";
//! let delims = ByteSet::from_bytes(b"- ;");
//! let mut tok = Tokenizer::new(&mut line);
//! assert_eq!(tok.next_token(&delims), Some(&b"strtok"[..]));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod block;
pub mod error;
pub mod text;
pub mod word;

// Re-export core types
pub use error::{FastBytesError, Result};
pub use text::{ByteSet, Tokenizer};
pub use word::WORD_BYTES;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!(
        "Initializing fastbytes v{} (word size {} bytes)",
        VERSION,
        WORD_BYTES
    );
}
