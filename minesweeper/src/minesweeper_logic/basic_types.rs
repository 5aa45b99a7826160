use std::collections::HashSet;

pub type SizeType = usize;

/// `(row, column)` of a field.
pub type Coordinates = (SizeType, SizeType);

/// The authoritative set of mine locations of a board.
pub type MineSet = HashSet<Coordinates>;
