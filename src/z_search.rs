use crate::z::z_array;

/// Symbol of the combined `pattern ++ boundary ++ text` sequence. The
/// boundary is out-of-band rather than a reserved symbol value, so the search
/// stays correct for arbitrary alphabets, including full binary input.
#[derive(PartialEq)]
enum Sym<'a, T> {
    Literal(&'a T),
    Boundary,
}

/// Finds all occurrences of `pattern` in `text` with the Z algorithm.
///
/// Builds `pattern ++ boundary ++ text`, computes its Z-array up front, then
/// yields an offset for every text position whose Z value spans the whole
/// pattern. Output is identical to [`kmp_search`](crate::kmp_search): zero-based
/// offsets, ascending, overlapping occurrences included, and an empty pattern
/// matches at every offset `0..=text.len()`. O(pattern.len() + text.len())
/// time and space.
pub fn z_search<T: PartialEq>(pattern: &[T], text: &[T]) -> ZMatches {
    let m = pattern.len();
    let n = text.len();

    if m == 0 {
        return ZMatches {
            z: Vec::new(),
            m: 0,
            j: 0,
            end: n + 1,
        };
    }

    let mut combined = Vec::with_capacity(m + n + 1);
    combined.extend(pattern.iter().map(Sym::Literal));
    combined.push(Sym::Boundary);
    combined.extend(text.iter().map(Sym::Literal));

    ZMatches {
        z: z_array(&combined),
        m,
        j: m + 1,
        end: m + n + 1,
    }
}

/// Lazy iterator over Z-algorithm match offsets. Created by [`z_search`].
///
/// The Z-array is computed eagerly; the scan over it is lazy, so dropping the
/// iterator skips the remaining positions.
pub struct ZMatches {
    z: Vec<usize>,
    m: usize,
    /// Next position of the combined sequence to examine (next offset to
    /// yield when the pattern is empty)
    j: usize,
    end: usize,
}

impl Iterator for ZMatches {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.m == 0 {
            if self.j >= self.end {
                return None;
            }
            let at = self.j;
            self.j += 1;
            return Some(at);
        }

        while self.j < self.end {
            let j = self.j;
            self.j += 1;
            // The boundary caps every Z value at the pattern length, so a
            // value of at least m is a full occurrence
            if self.z[j] >= self.m {
                return Some(j - self.m - 1);
            }
        }

        None
    }
}
