//! Duplicate-aware combination generator
//!
//! Yields each distinct k-letter sub-multiset of a sorted letter pool exactly
//! once, in non-decreasing letter order. Repeated letters never produce the
//! same combination twice.

/// Lazy iterator over the distinct k-combinations of a letter pool
///
/// The pool is sorted on construction. Each combination is tracked as a set
/// of pool indices where every letter uses the leftmost copies of its run;
/// advancing moves one position to the start of the next run of a different
/// letter and repacks the tail, which is the iterative form of skipping equal
/// siblings at the same backtracking depth.
#[derive(Debug, Clone)]
pub struct Combinations {
    pool: Vec<char>,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(mut pool: Vec<char>, k: usize) -> Self {
        pool.sort_unstable();
        let done = k > pool.len();

        Self {
            pool,
            indices: (0..k).collect(),
            started: false,
            done,
        }
    }

    /// First index past the run of letters equal to `pool[pos]`
    #[inline]
    fn next_run_start(&self, pos: usize) -> usize {
        let letter = self.pool[pos];
        let mut next = pos + 1;
        while next < self.pool.len() && self.pool[next] == letter {
            next += 1;
        }
        next
    }

    fn current(&self) -> Vec<char> {
        self.indices.iter().map(|&i| self.pool[i]).collect()
    }

    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        let k = self.indices.len();

        for i in (0..k).rev() {
            let next = self.next_run_start(self.indices[i]);
            if next + (k - i) <= n {
                self.indices[i] = next;
                for (offset, slot) in self.indices[i + 1..].iter_mut().enumerate() {
                    *slot = next + 1 + offset;
                }
                return true;
            }
        }

        false
    }
}

impl Iterator for Combinations {
    type Item = Vec<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.done = true;
            return None;
        }

        Some(self.current())
    }
}

impl std::iter::FusedIterator for Combinations {}
