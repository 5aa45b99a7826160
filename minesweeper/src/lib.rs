mod minesweeper_logic;
pub use minesweeper_logic::basic_types::{Coordinates, MineSet, SizeType};
pub use minesweeper_logic::board::{generate_mine_locations, get_neighbor_fields, Board};
pub use minesweeper_logic::config::{GameConfig, DEFAULT_MINE_COUNT, DEFAULT_SIZE, MAX_SIZE};
pub use minesweeper_logic::error::Error;
pub use minesweeper_logic::field_type::FieldType;
pub use minesweeper_logic::game::{new_game, Game};
pub use minesweeper_logic::results::{GameOutcome, RevealOutcome};
pub use minesweeper_logic::reveal::{is_cleared, reveal, RevealedState};
