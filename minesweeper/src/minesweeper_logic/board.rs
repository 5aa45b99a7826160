use super::basic_types::{Coordinates, MineSet, SizeType};
use super::config::GameConfig;
use super::error::Error;
use super::field_type::FieldType;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

const REJECTION_SAMPLING_ATTEMPTS_PER_MINE: usize = 4;

const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The clipped 8-neighborhood of `(row, col)` on a `size`x`size` board.
pub fn get_neighbor_fields(size: SizeType, row: SizeType, col: SizeType) -> HashSet<Coordinates> {
    fn add(u: usize, i: i8) -> Option<usize> {
        if i.is_negative() {
            u.checked_sub(i.unsigned_abs() as usize)
        } else {
            u.checked_add(i as usize)
        }
    }

    let mut neighbors = HashSet::new();

    for offset in NEIGHBOR_OFFSETS.iter() {
        match (add(row, offset.0), add(col, offset.1)) {
            (Some(r), Some(c)) if r < size && c < size => {
                neighbors.insert((r, c));
            }
            _ => (),
        }
    }

    neighbors
}

fn sample_mines_by_rejection<R: Rng>(
    size: SizeType,
    mine_count: SizeType,
    rng: &mut R,
) -> Option<MineSet> {
    let mut mine_locations = MineSet::with_capacity(mine_count);
    let mut attempts_left = mine_count.saturating_mul(REJECTION_SAMPLING_ATTEMPTS_PER_MINE);
    while mine_locations.len() < mine_count {
        if attempts_left == 0 {
            return None;
        }
        attempts_left -= 1;
        mine_locations.insert((rng.gen_range(0..size), rng.gen_range(0..size)));
    }
    Some(mine_locations)
}

fn sample_mines_by_shuffle<R: Rng>(size: SizeType, mine_count: SizeType, rng: &mut R) -> MineSet {
    let mut all_fields: Vec<Coordinates> = (0..size)
        .flat_map(|row| (0..size).map(move |col| (row, col)))
        .collect();
    let (mine_locations, _) = all_fields.partial_shuffle(rng, mine_count);
    mine_locations.iter().copied().collect()
}

/// Picks exactly `config.mine_count` distinct fields uniformly at random.
///
/// Sparse boards are sampled by rejection with a bounded number of attempts;
/// dense boards, or an exhausted attempt budget, use a partial shuffle of all fields.
pub fn generate_mine_locations<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<MineSet, Error> {
    config.validate()?;
    let number_of_fields = config.number_of_fields()?;

    if config.mine_count.saturating_mul(2) <= number_of_fields {
        if let Some(mine_locations) = sample_mines_by_rejection(config.size, config.mine_count, rng)
        {
            return Ok(mine_locations);
        }
        debug!(
            mine_count = config.mine_count,
            "rejection sampling ran out of attempts, falling back to shuffle"
        );
    }

    Ok(sample_mines_by_shuffle(config.size, config.mine_count, rng))
}

/// An immutable, fully materialized minefield.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    size: SizeType,
    number_of_mines: SizeType,
    fields: Vec<Vec<FieldType>>,
}

impl Board {
    pub fn with_mines(size: SizeType, mine_locations: &MineSet) -> Result<Board, Error> {
        let config = GameConfig {
            size,
            mine_count: mine_locations.len(),
        };
        config.validate()?;
        if mine_locations.iter().any(|&(r, c)| r >= size || c >= size) {
            return Err(Error::InvalidConfiguration {
                size,
                mine_count: mine_locations.len(),
            });
        }

        let mut counts = vec![vec![0u8; size]; size];
        for &(row, col) in mine_locations.iter() {
            for (r, c) in get_neighbor_fields(size, row, col) {
                if !mine_locations.contains(&(r, c)) {
                    counts[r][c] += 1;
                }
            }
        }

        let fields = counts
            .into_iter()
            .enumerate()
            .map(|(r, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(c, count)| {
                        if mine_locations.contains(&(r, c)) {
                            FieldType::Mine
                        } else {
                            FieldType::from_adjacent_mines(count)
                        }
                    })
                    .collect()
            })
            .collect();

        Ok(Board {
            size,
            number_of_mines: mine_locations.len(),
            fields,
        })
    }

    pub fn generate<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<(Board, MineSet), Error> {
        let mine_locations = generate_mine_locations(config, rng)?;
        let board = Board::with_mines(config.size, &mine_locations)?;
        debug!(
            size = config.size,
            mine_count = config.mine_count,
            "generated board"
        );
        Ok((board, mine_locations))
    }

    pub fn size(&self) -> SizeType {
        self.size
    }

    pub fn mine_count(&self) -> SizeType {
        self.number_of_mines
    }

    pub fn number_of_safe_fields(&self) -> SizeType {
        self.size * self.size - self.number_of_mines
    }

    pub fn check_bounds(&self, row: SizeType, col: SizeType) -> Result<(), Error> {
        if row >= self.size || col >= self.size {
            Err(Error::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        } else {
            Ok(())
        }
    }

    pub fn field_type(&self, row: SizeType, col: SizeType) -> Result<FieldType, Error> {
        self.check_bounds(row, col)?;
        Ok(self.fields[row][col])
    }

    pub(crate) fn field_type_unchecked(&self, row: SizeType, col: SizeType) -> FieldType {
        self.fields[row][col]
    }
}
