use crate::prefix::prefix_function;

/// Finds all occurrences of `pattern` in `text` with the Knuth-Morris-Pratt
/// algorithm.
///
/// The returned iterator yields zero-based match offsets in ascending order,
/// including overlapping occurrences, and scans lazily: dropping it early
/// abandons the rest of the text. Total work across the full iteration is
/// O(pattern.len() + text.len()).
///
/// An empty pattern matches at every offset `0..=text.len()`.
pub fn kmp_search<'a, T: PartialEq>(pattern: &'a [T], text: &'a [T]) -> KmpMatches<'a, T> {
    KmpMatches {
        pi: prefix_function(pattern),
        pattern,
        text,
        i: 0,
        q: 0,
    }
}

/// Lazy iterator over KMP match offsets. Created by [`kmp_search`].
pub struct KmpMatches<'a, T> {
    pattern: &'a [T],
    text: &'a [T],
    pi: Vec<isize>,
    /// Next text position to examine
    i: usize,
    /// Number of pattern symbols currently matched, -1 after falling back
    /// past the first symbol
    q: isize,
}

impl<T: PartialEq> Iterator for KmpMatches<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let m = self.pattern.len();

        if m == 0 {
            if self.i > self.text.len() {
                return None;
            }
            let at = self.i;
            self.i += 1;
            return Some(at);
        }

        while self.i < self.text.len() {
            while self.q > -1 && self.pattern[self.q as usize] != self.text[self.i] {
                self.q = self.pi[self.q as usize];
            }
            self.q += 1;
            self.i += 1;

            if self.q as usize == m {
                // Restart from the longest border instead of zero so that
                // overlapping occurrences are found
                self.q = self.pi[m];
                return Some(self.i - m);
            }
        }

        None
    }
}
