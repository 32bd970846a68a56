//! Exact substring search in linear time.
//!
//! Two independent pipelines, each a precompute stage plus a lazy scan:
//!
//! - [`prefix_function`] computes the KMP failure function; [`kmp_search`]
//!   uses it to stream match offsets while walking the text once.
//! - [`z_array`] computes the Z-array of a sequence; [`z_search`] runs it
//!   over `pattern ++ boundary ++ text` and streams the positions that span
//!   the whole pattern.
//!
//! Both produce the same offsets for the same inputs and run in
//! O(pattern + text) time, avoiding the quadratic worst case of a naive scan
//! on inputs like `"aaa...a"`. Symbols are generic: any `T: PartialEq` works,
//! from bytes to whole tokens.
//!
//! ```
//! let text = b"ababcabababc";
//!
//! let offsets: Vec<usize> = linscan::kmp_search(b"ababc", text).collect();
//! assert_eq!(offsets, vec![0, 7]);
//!
//! // First match only, without scanning the rest of the text
//! assert_eq!(linscan::z_search(b"ab", text).next(), Some(0));
//! ```

mod kmp;
mod prefix;
mod z;
mod z_search;

pub use kmp::{kmp_search, KmpMatches};
pub use prefix::prefix_function;
pub use z::z_array;
pub use z_search::{z_search, ZMatches};

/// [`kmp_search`] over the UTF-8 bytes of two strings. Offsets are byte
/// offsets into `text`.
pub fn kmp_search_str<'a>(pattern: &'a str, text: &'a str) -> KmpMatches<'a, u8> {
    kmp_search(pattern.as_bytes(), text.as_bytes())
}

/// [`z_search`] over the UTF-8 bytes of two strings. Offsets are byte
/// offsets into `text`.
pub fn z_search_str(pattern: &str, text: &str) -> ZMatches {
    z_search(pattern.as_bytes(), text.as_bytes())
}
