//! Scripted random source for deterministic tests and demos.

use std::{collections::VecDeque, ops::RangeInclusive};

use crate::domain::RandomSource;

/// Replays queued outcomes in order
///
/// When a queue runs dry the source falls back to a fixed answer: the default
/// chance (initially `false`), index `0`, and the low end of the range.
/// Queued indices and integers are folded into the requested bounds.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandomSource {
    chances: VecDeque<bool>,
    indices: VecDeque<usize>,
    integers: VecDeque<i32>,
    default_chance: bool,
}

impl ScriptedRandomSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcomes for successive `chance` calls
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    /// Outcomes for successive `pick_index` calls
    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    /// Outcomes for successive `int_in` calls
    pub fn with_integers(mut self, integers: impl IntoIterator<Item = i32>) -> Self {
        self.integers.extend(integers);
        self
    }

    /// Answer for `chance` once the queued chances are used up
    pub fn with_default_chance(mut self, default_chance: bool) -> Self {
        self.default_chance = default_chance;
        self
    }
}

impl RandomSource for ScriptedRandomSource {
    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(self.default_chance)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % len.max(1)
    }

    fn int_in(&mut self, range: RangeInclusive<i32>) -> i32 {
        let (low, high) = (*range.start(), *range.end());
        self.integers
            .pop_front()
            .map_or(low, |value| value.clamp(low, high.max(low)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_queued_outcomes_then_falls_back() {
        // テスト項目: キューの値を順に返し、尽きたら既定値を返す
        // given (前提条件):
        let mut source = ScriptedRandomSource::new()
            .with_chances([true, false])
            .with_indices([3, 1])
            .with_integers([12]);

        // when (操作) / then (期待する結果):
        assert!(source.chance(0.3));
        assert!(!source.chance(0.3));
        assert!(!source.chance(0.3));
        assert_eq!(source.pick_index(4), 3);
        assert_eq!(source.pick_index(4), 1);
        assert_eq!(source.pick_index(4), 0);
        assert_eq!(source.int_in(5..=39), 12);
        assert_eq!(source.int_in(5..=39), 5);
    }

    #[test]
    fn test_folds_outcomes_into_bounds() {
        // テスト項目: 範囲外の値は範囲内に収められる
        // given (前提条件):
        let mut source = ScriptedRandomSource::new()
            .with_indices([9])
            .with_integers([100, -100]);

        // when (操作) / then (期待する結果):
        assert_eq!(source.pick_index(4), 1);
        assert_eq!(source.int_in(40..=79), 79);
        assert_eq!(source.int_in(40..=79), 40);
    }

    #[test]
    fn test_default_chance_applies_after_queue() {
        // テスト項目: 既定の確率結果を true にすると常に発火する
        // given (前提条件):
        let mut source = ScriptedRandomSource::new().with_default_chance(true);

        // when (操作) / then (期待する結果):
        assert!((0..10).all(|_| source.chance(0.0)));
    }
}
