use std::collections::VecDeque;

use crate::core::data::seed::Seed;

pub const MAX_SEEDS: usize = 3;

/// Most-recent-first list of seeds, never longer than [`MAX_SEEDS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedHistory {
    seeds: VecDeque<Seed>,
}

impl SeedHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `seed`, evicting the oldest entries past capacity.
    pub fn push(&mut self, seed: Seed) {
        self.seeds.push_front(seed);
        self.seeds.truncate(MAX_SEEDS);
    }

    pub fn clear(&mut self) {
        self.seeds.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Seed> {
        self.seeds.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Seed> {
        self.seeds.iter()
    }

    /// Display text of every entry, newest first.
    #[must_use]
    pub fn display_texts(&self) -> Vec<String> {
        self.seeds.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_and_bounded() {
        let mut history = SeedHistory::new();

        for seed in ["a", "b", "c", "d"] {
            history.push(Seed::from(seed));
        }

        assert_eq!(history.display_texts(), vec!["d", "c", "b"]);
        assert_eq!(history.latest(), Some(&Seed::from("d")));
    }

    #[test]
    fn test_below_capacity_keeps_everything() {
        let mut history = SeedHistory::new();
        history.push(Seed::from("x"));
        history.push(Seed::from("y"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.display_texts(), vec!["y", "x"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut history = SeedHistory::new();
        history.push(Seed::from("same"));
        history.push(Seed::from("same"));

        assert_eq!(history.display_texts(), vec!["same", "same"]);
    }

    #[test]
    fn test_clear_empties_history() {
        let mut history = SeedHistory::new();
        history.push(Seed::from(1u64));
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
    }
}
