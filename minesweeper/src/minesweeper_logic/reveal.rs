use super::basic_types::{Coordinates, SizeType};
use super::board::{get_neighbor_fields, Board};
use super::error::Error;
use super::field_type::FieldType;
use super::results::RevealOutcome;
use indexmap::IndexSet;
use std::collections::HashSet;
use tracing::trace;

/// Which fields of a board the player has already seen. Only ever grows.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RevealedState {
    size: SizeType,
    number_of_revealed_fields: usize,
    number_of_revealed_safe_fields: usize,
    fields: Vec<Vec<bool>>,
}

impl RevealedState {
    pub fn new(size: SizeType) -> RevealedState {
        RevealedState {
            size,
            number_of_revealed_fields: 0,
            number_of_revealed_safe_fields: 0,
            fields: vec![vec![false; size]; size],
        }
    }

    /// An all-hidden state matching the dimensions of `board`.
    pub fn for_board(board: &Board) -> RevealedState {
        RevealedState::new(board.size())
    }

    pub fn size(&self) -> SizeType {
        self.size
    }

    pub fn revealed_count(&self) -> usize {
        self.number_of_revealed_fields
    }

    /// Revealed fields that are not mines.
    pub fn revealed_safe_count(&self) -> usize {
        self.number_of_revealed_safe_fields
    }

    pub fn is_revealed(&self, row: SizeType, col: SizeType) -> Result<bool, Error> {
        if row >= self.size || col >= self.size {
            Err(Error::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        } else {
            Ok(self.fields[row][col])
        }
    }

    // Returns whether the field changed.
    fn mark_revealed(&mut self, row: SizeType, col: SizeType) -> bool {
        if self.fields[row][col] {
            false
        } else {
            self.fields[row][col] = true;
            self.number_of_revealed_fields += 1;
            true
        }
    }
}

struct FieldVisiter {
    size: SizeType,
    fields_to_visit: IndexSet<Coordinates>,
    visited_fields: HashSet<Coordinates>,
}

impl FieldVisiter {
    fn new(size: SizeType, row: SizeType, col: SizeType) -> FieldVisiter {
        let mut fields_to_visit = IndexSet::new();
        fields_to_visit.insert((row, col));
        FieldVisiter {
            size,
            fields_to_visit,
            visited_fields: HashSet::new(),
        }
    }

    fn extend_with_unvisited_neighbors(&mut self, row: SizeType, col: SizeType) {
        let visited_fields = &self.visited_fields;
        self.fields_to_visit.extend(
            get_neighbor_fields(self.size, row, col)
                .into_iter()
                .filter(|coords| !visited_fields.contains(coords)),
        );
    }
}

impl Iterator for FieldVisiter {
    type Item = Coordinates;

    fn next(&mut self) -> Option<Coordinates> {
        let result = self.fields_to_visit.pop()?;
        self.visited_fields.insert(result);
        Some(result)
    }
}

/// Every field is either revealed or a mine. A revealed mine does not count
/// towards clearing the board.
pub fn is_cleared(board: &Board, revealed_state: &RevealedState) -> bool {
    revealed_state.size() == board.size()
        && revealed_state.revealed_safe_count() == board.number_of_safe_fields()
}

/// Reveals `(row, col)` and cascades through the connected empty region.
///
/// A mine is only ever revealed when it is the target itself. The engine does
/// not refuse reveals after a mine hit; ending the game is up to the caller.
pub fn reveal(
    board: &Board,
    revealed_state: &mut RevealedState,
    row: SizeType,
    col: SizeType,
) -> Result<RevealOutcome, Error> {
    if board.size() != revealed_state.size() {
        return Err(Error::InvalidConfiguration {
            size: revealed_state.size(),
            mine_count: board.mine_count(),
        });
    }
    board.check_bounds(row, col)?;

    if revealed_state.is_revealed(row, col)? {
        return Ok(RevealOutcome::AlreadyRevealed);
    }

    if board.field_type_unchecked(row, col).is_mine() {
        revealed_state.mark_revealed(row, col);
        return Ok(RevealOutcome::MineHit);
    }

    let mut visiter = FieldVisiter::new(board.size(), row, col);
    let mut revealed_fields = IndexSet::new();

    while let Some((r, c)) = visiter.next() {
        let field_type = board.field_type_unchecked(r, c);
        if field_type.is_mine() || !revealed_state.mark_revealed(r, c) {
            continue;
        }
        revealed_state.number_of_revealed_safe_fields += 1;
        revealed_fields.insert((r, c));
        if field_type == FieldType::Empty {
            visiter.extend_with_unvisited_neighbors(r, c);
        }
    }
    trace!(row, col, revealed = revealed_fields.len(), "revealed fields");

    if is_cleared(board, revealed_state) {
        Ok(RevealOutcome::Win)
    } else {
        Ok(RevealOutcome::Continue(revealed_fields))
    }
}
