/// Computes the Z-array of `seq`.
///
/// `z[i]` is the length of the longest common prefix of `seq` and `seq[i..]`,
/// with `z[0] = seq.len()` by convention. Runs in O(seq.len()) time.
///
/// The `[l, r)` window is the rightmost prefix-match region found so far.
/// Positions inside it mirror an already-computed value; only when the
/// mirrored value would reach `r` does the scan resume comparing characters,
/// and every such comparison pushes `r` further right, which bounds the total
/// comparison work.
pub fn z_array<T: PartialEq>(seq: &[T]) -> Vec<usize> {
    let m = seq.len();
    if m == 0 {
        return Vec::new();
    }

    let mut z = vec![0usize; m];
    z[0] = m;

    let mut l = 0;
    let mut r = 0;
    for i in 1..m {
        if i >= r {
            // No usable window, extend from scratch
            while i + z[i] < m && seq[z[i]] == seq[i + z[i]] {
                z[i] += 1;
            }
            l = i;
            r = i + z[i];
        } else {
            // seq[l..r] equals seq[..r - l], so the value at the mirrored
            // position i - l is a lower bound
            z[i] = z[i - l];

            if i + z[i] >= r {
                // The mirror only proves a match up to r, resume comparing
                // from there
                z[i] = r - i;
                while i + z[i] < m && seq[z[i]] == seq[i + z[i]] {
                    z[i] += 1;
                }
                l = i;
                r = i + z[i];
            }
        }
    }

    z
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn naive_z(seq: &[u8]) -> Vec<usize> {
        (0..seq.len())
            .map(|i| {
                seq[i..]
                    .iter()
                    .zip(seq.iter())
                    .take_while(|(a, b)| a == b)
                    .count()
            })
            .collect()
    }

    #[test]
    fn test_known_sequences() {
        assert_eq!(z_array(b"aaaaa"), vec![5, 4, 3, 2, 1]);
        assert_eq!(z_array(b"aabaab"), vec![6, 1, 0, 3, 1, 0]);
        assert_eq!(z_array(b"abacaba"), vec![7, 0, 1, 0, 3, 0, 1]);
        assert_eq!(z_array(b"abababab"), vec![8, 0, 6, 0, 4, 0, 2, 0]);
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(z_array::<u8>(&[]), Vec::<usize>::new());
        assert_eq!(z_array(b"x"), vec![1]);
        assert_eq!(z_array(b"ab"), vec![2, 0]);
    }

    #[test]
    fn test_matches_naive() {
        for seq in [
            b"aabaabcaab".as_slice(),
            b"mississippi",
            b"zzzzzzzzzz",
            b"abcdefgh",
            b"abaabaabaabaab",
        ] {
            assert_eq!(z_array(seq), naive_z(seq), "sequence {:?}", seq);
        }
    }

    #[test]
    fn test_random_matches_naive() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let len = rng.random_range(0..64);
            let seq: Vec<u8> = (0..len).map(|_| rng.random_range(b'a'..=b'c')).collect();
            let z = z_array(&seq);
            assert_eq!(z, naive_z(&seq), "sequence {:?}", seq);
            for (i, &zi) in z.iter().enumerate() {
                assert!(zi <= seq.len() - i);
            }
            if !seq.is_empty() {
                assert_eq!(z[0], seq.len());
            }
        }
    }
}
