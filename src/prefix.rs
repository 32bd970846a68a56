/// Computes the KMP failure function for `pattern`.
///
/// Returns `pi` of length `pattern.len() + 1` where, for `q >= 1`, `pi[q]` is
/// the length of the longest proper prefix of `pattern[..q]` that is also a
/// suffix of `pattern[..q]`. `pi[0]` is the sentinel `-1`, meaning "no border,
/// restart at the first character" — it is never a valid border length, so a
/// consumer can branch on `k > -1` without conflating it with a border of
/// length 0. Runs in O(pattern.len()) time.
pub fn prefix_function<T: PartialEq>(pattern: &[T]) -> Vec<isize> {
    let m = pattern.len();
    let mut pi = vec![-1isize; m + 1];
    if m > 0 {
        // The length-1 prefix has only the empty border
        pi[1] = 0;
    }

    let mut k = 0isize;
    for q in 1..m {
        // Fall back through shorter borders until one extends by pattern[q].
        // Amortized O(1): k decreases on every fallback and grows by at most
        // one per iteration of the outer loop
        while k > -1 && pattern[k as usize] != pattern[q] {
            k = pi[k as usize];
        }
        k += 1;
        pi[q + 1] = k;
    }

    pi
}
