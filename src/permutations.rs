//! Duplicate-free permutation generator
//!
//! Produces every distinct ordering of a fixed set of letters by stepping
//! through lexicographic next-permutations from the sorted arrangement.
//! Orderings that differ only by swapping two equal letters are never
//! generated, so nothing has to be discarded.

/// Lazy iterator over the distinct permutations of a letter tuple
#[derive(Debug, Clone)]
pub struct Permutations {
    letters: Vec<char>,
    started: bool,
    done: bool,
}

impl Permutations {
    pub fn new(mut letters: Vec<char>) -> Self {
        letters.sort_unstable();

        Self {
            letters,
            started: false,
            done: false,
        }
    }

    /// Rearrange into the next lexicographically greater ordering.
    /// Returns false when the letters are already in descending order.
    fn advance(&mut self) -> bool {
        let v = &mut self.letters;
        if v.len() < 2 {
            return false;
        }

        // Rightmost ascent
        let mut i = v.len() - 1;
        while i > 0 && v[i - 1] >= v[i] {
            i -= 1;
        }
        if i == 0 {
            return false;
        }
        let pivot = i - 1;

        // Rightmost element strictly greater than the pivot
        let mut j = v.len() - 1;
        while v[j] <= v[pivot] {
            j -= 1;
        }

        v.swap(pivot, j);
        v[pivot + 1..].reverse();
        true
    }
}

impl Iterator for Permutations {
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

        Some(self.letters.clone())
    }
}

impl std::iter::FusedIterator for Permutations {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn perms(letters: &str) -> Vec<String> {
        Permutations::new(letters.chars().collect())
            .map(|p| p.into_iter().collect())
            .collect()
    }

    #[test]
    fn test_distinct_letters_in_lexicographic_order() {
        assert_eq!(perms("cab"), vec!["abc", "acb", "bac", "bca", "cab", "cba"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(perms("aab"), vec!["aab", "aba", "baa"]);
        assert_eq!(perms("aaa"), vec!["aaa"]);
    }

    #[test]
    fn test_multinomial_count() {
        // 6! / (2! * 2! * 2!) = 90
        let all = perms("aabbcc");
        let unique: HashSet<_> = all.iter().cloned().collect();

        assert_eq!(all.len(), 90);
        assert_eq!(unique.len(), 90);
    }

    #[test]
    fn test_short_inputs() {
        assert_eq!(perms(""), vec![""]);
        assert_eq!(perms("z"), vec!["z"]);
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut iter = Permutations::new(vec!['x', 'y']);
        assert_eq!(iter.next(), Some(vec!['x', 'y']));
        assert_eq!(iter.next(), Some(vec!['y', 'x']));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
