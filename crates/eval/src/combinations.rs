// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lazy k-combinations.

/// An iterator over all the `R`-combinations of the indices `0..n`.
///
/// Combinations are yielded in lexicographic order as arrays of increasing
/// indices, with no allocation. Cloning the iterator restarts an enumeration
/// from the same point.
///
/// ```
/// # use primerank_eval::Combinations;
/// let combos = Combinations::<2>::new(4).collect::<Vec<_>>();
/// assert_eq!(combos, [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations<const R: usize> {
    indices: [usize; R],
    n: usize,
    first: bool,
    done: bool,
}

impl<const R: usize> Combinations<R> {
    /// Creates an iterator over the `R`-combinations of `n` elements.
    pub fn new(n: usize) -> Self {
        let mut indices = [0; R];
        for (i, idx) in indices.iter_mut().enumerate() {
            *idx = i;
        }

        Self {
            indices,
            n,
            first: true,
            done: R > n,
        }
    }

    /// Creates an iterator that starts from the `nth` combination, in the
    /// same order as [Combinations::new].
    ///
    /// The iterator is empty if `nth` is past the last combination. Uses the
    /// combinatorial number system so the cost doesn't depend on `nth`.
    ///
    /// ```
    /// # use primerank_eval::Combinations;
    /// let mut combos = Combinations::<2>::starting_at(4, 3);
    /// assert_eq!(combos.next(), Some([1, 2]));
    /// assert_eq!(combos.count(), 2);
    /// ```
    pub fn starting_at(n: usize, mut nth: usize) -> Self {
        let mut combos = Self::new(n);
        if nth >= binomial(n, R) {
            combos.done = true;
            return combos;
        }

        let mut c = 0;
        for i in 0..R {
            // Skip the combinations that have c at position i.
            loop {
                let count = binomial(n - c - 1, R - i - 1);
                if nth < count {
                    break;
                }

                nth -= count;
                c += 1;
            }

            combos.indices[i] = c;
            c += 1;
        }

        combos
    }
}

/// Returns the binomial coefficient n choose k.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // C(n, i + 1) = C(n, i) * (n - i) / (i + 1) is exact at every step.
    let k = k.min(n - k);
    (0..k).fold(1u128, |acc, i| acc * (n - i) as u128 / (i + 1) as u128) as usize
}

impl<const R: usize> Iterator for Combinations<R> {
    type Item = [usize; R];

    fn next(&mut self) -> Option<[usize; R]> {
        if self.done {
            return None;
        }

        if self.first {
            self.first = false;
            return Some(self.indices);
        }

        // Find the rightmost index that has not reached its final position.
        let Some(i) = (0..R).rev().find(|&i| self.indices[i] != i + self.n - R) else {
            self.done = true;
            return None;
        };

        self.indices[i] += 1;
        for j in (i + 1)..R {
            self.indices[j] = self.indices[j - 1] + 1;
        }

        Some(self.indices)
    }
}

/// Returns an iterator over all the `R`-combinations of the elements in `pool`.
///
/// Elements are selected by position, so equal elements at different positions
/// are treated as distinct.
pub fn combinations<const R: usize, T: Copy>(pool: &[T]) -> impl Iterator<Item = [T; R]> + '_ {
    Combinations::<R>::new(pool.len()).map(move |idx| idx.map(|i| pool[i]))
}
