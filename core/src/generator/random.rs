use crate::*;

/// Uniform placement: shuffle the full coordinate list and keep the first
/// `mines` entries, which are pairwise distinct by construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: &BoardConfig) -> Vec<Coord2> {
        use rand::prelude::*;

        let (rows, cols) = config.size;
        let mut coords: Vec<Coord2> = Vec::with_capacity(config.total_cells().into());
        for row in 0..rows {
            for col in 0..cols {
                coords.push((row, col));
            }
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        coords.shuffle(&mut rng);
        coords.truncate(config.mines.into());

        log::debug!("Placed {} mines on a {:?} board", coords.len(), config.size);
        coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet};

    fn config(size: Coord2, mines: CellCount) -> BoardConfig {
        BoardConfig::new(size, mines).unwrap()
    }

    #[test]
    fn places_the_requested_number_of_distinct_mines() {
        for seed in 0..32 {
            let coords = RandomMineGenerator::new(seed).generate(&config((4, 4), 8));
            let distinct: BTreeSet<Coord2> = coords.iter().copied().collect();

            assert_eq!(coords.len(), 8);
            assert_eq!(distinct.len(), 8);
            assert!(coords.iter().all(|&(row, col)| row < 4 && col < 4));
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_layout() {
        let config = config((5, 5), 10);

        let first = RandomMineGenerator::new(77).generate(&config);
        let second = RandomMineGenerator::new(77).generate(&config);

        assert_eq!(first, second);
    }

    #[test]
    fn full_board_request_covers_every_coordinate() {
        let coords = RandomMineGenerator::new(3).generate(&config((3, 3), 9));
        let distinct: BTreeSet<Coord2> = coords.iter().copied().collect();

        assert_eq!(distinct.len(), 9);
    }

    #[test]
    fn coverage_is_roughly_uniform_over_many_seeds() {
        let config = config((4, 4), 4);
        let trials: u64 = 400;
        let mut hits: BTreeMap<Coord2, u32> = BTreeMap::new();

        for seed in 0..trials {
            for coords in RandomMineGenerator::new(seed).generate(&config) {
                *hits.entry(coords).or_default() += 1;
            }
        }

        // each cell carries a mine in 1/4 of the trials, 100 expected hits
        assert_eq!(hits.len(), 16);
        for (&coords, &count) in &hits {
            assert!(
                (60..=140).contains(&count),
                "cell {:?} hit {} times",
                coords,
                count
            );
        }
    }
}
