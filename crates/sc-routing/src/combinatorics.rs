//! Lexicographic combinations and permutations over index positions.
//!
//! Both enumerate in the same order as the classic "k-subsets in
//! lexicographic order" / "next permutation" algorithms, which fixes the
//! tie-breaking order of the route index.

/// Iterator over all `k`-element subsets of `0..n`, each sorted ascending,
/// in lexicographic order.  Yields nothing when `k > n` and a single empty
/// subset when `k == 0`.
pub struct Combinations {
    n:       usize,
    current: Vec<usize>,
    done:    bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            current: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let out = self.current.clone();

        // Advance: find the rightmost position that can still move right.
        let k = self.current.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.current[i] < self.n - k + i {
                self.current[i] += 1;
                for j in i + 1..k {
                    self.current[j] = self.current[j - 1] + 1;
                }
                break;
            }
        }
        Some(out)
    }
}

/// Rearrange `items` into the next lexicographic permutation.
///
/// Returns `false` (leaving `items` sorted descending) once the last
/// permutation has been produced.  Start from an ascending slice to visit
/// all `n!` orderings.
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }
    // Longest non-increasing suffix.
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}
