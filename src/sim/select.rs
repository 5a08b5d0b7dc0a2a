//! Spawn point selection

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SpawnError;
use crate::settings::SelectionMode;

/// Picks the next spawn point index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementSelector {
    pub mode: SelectionMode,
}

impl PlacementSelector {
    pub fn new(mode: SelectionMode) -> Self {
        Self { mode }
    }

    /// Choose an index into a list of `count` points given the previous pick.
    ///
    /// Does not record the choice; the caller commits it once the spawn went
    /// through.
    pub fn choose<R: Rng>(
        &self,
        count: usize,
        last: Option<usize>,
        rng: &mut R,
    ) -> Result<usize, SpawnError> {
        if count == 0 {
            return Err(SpawnError::NoSpawnPoints);
        }

        let index = match self.mode {
            SelectionMode::InOrder => last.map_or(0, |i| (i + 1) % count),
            // A lone point has to be reused
            SelectionMode::Random if count == 1 => 0,
            SelectionMode::Random => loop {
                let candidate = rng.random_range(0..count);
                if Some(candidate) != last {
                    break candidate;
                }
            },
        };
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::RngState;

    #[test]
    fn test_empty_points_is_an_error() {
        let mut rng = RngState::new(1).to_rng();
        for mode in [SelectionMode::InOrder, SelectionMode::Random] {
            let selector = PlacementSelector::new(mode);
            assert_eq!(
                selector.choose(0, None, &mut rng),
                Err(SpawnError::NoSpawnPoints)
            );
        }
    }

    #[test]
    fn test_in_order_cycles() {
        let selector = PlacementSelector::new(SelectionMode::InOrder);
        let mut rng = RngState::new(1).to_rng();
        let mut last = None;
        let mut picks = Vec::new();
        for _ in 0..7 {
            let index = selector.choose(3, last, &mut rng).unwrap();
            picks.push(index);
            last = Some(index);
        }
        assert_eq!(picks, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_in_order_single_point() {
        let selector = PlacementSelector::new(SelectionMode::InOrder);
        let mut rng = RngState::new(1).to_rng();
        assert_eq!(selector.choose(1, None, &mut rng), Ok(0));
        assert_eq!(selector.choose(1, Some(0), &mut rng), Ok(0));
    }

    #[test]
    fn test_random_single_point_terminates() {
        let selector = PlacementSelector::new(SelectionMode::Random);
        let mut rng = RngState::new(7).to_rng();
        for _ in 0..100 {
            assert_eq!(selector.choose(1, Some(0), &mut rng), Ok(0));
        }
    }

    #[test]
    fn test_random_never_repeats() {
        let selector = PlacementSelector::new(SelectionMode::Random);
        let mut rng = RngState::new(99).to_rng();
        let mut last = None;
        for _ in 0..500 {
            let index = selector.choose(2, last, &mut rng).unwrap();
            assert_ne!(Some(index), last);
            assert!(index < 2);
            last = Some(index);
        }
    }

    #[test]
    fn test_random_reaches_every_point() {
        let selector = PlacementSelector::new(SelectionMode::Random);
        let mut rng = RngState::new(3).to_rng();
        let mut seen = [false; 5];
        let mut last = None;
        for _ in 0..200 {
            let index = selector.choose(5, last, &mut rng).unwrap();
            seen[index] = true;
            last = Some(index);
        }
        assert!(seen.iter().all(|&s| s));
    }
}
