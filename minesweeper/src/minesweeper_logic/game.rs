use super::basic_types::{MineSet, SizeType};
use super::board::Board;
use super::config::GameConfig;
use super::error::Error;
use super::field_type::FieldType;
use super::results::{GameOutcome, RevealOutcome};
use super::reveal::{reveal, RevealedState};
use rand::Rng;
use tracing::debug;

/// Creates the board, its mines and an all-hidden revealed state in one go.
pub fn new_game<R: Rng>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<(Board, MineSet, RevealedState), Error> {
    let (board, mine_locations) = Board::generate(config, rng)?;
    let revealed_state = RevealedState::for_board(&board);
    Ok((board, mine_locations, revealed_state))
}

/// One game session. The whole board is replaced on reset, never patched.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    mine_locations: MineSet,
    revealed_state: RevealedState,
    outcome: GameOutcome,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Game, Error> {
        Game::with_rng(config, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Game, Error> {
        let (board, mine_locations, revealed_state) = new_game(&config, rng)?;
        Ok(Game {
            config,
            board,
            mine_locations,
            revealed_state,
            outcome: GameOutcome::InProgress,
        })
    }

    /// A game with a fixed mine layout. Resetting it generates random mines
    /// with the same size and mine count.
    pub fn with_mines(size: SizeType, mine_locations: MineSet) -> Result<Game, Error> {
        let board = Board::with_mines(size, &mine_locations)?;
        let revealed_state = RevealedState::for_board(&board);
        Ok(Game {
            config: GameConfig {
                size,
                mine_count: mine_locations.len(),
            },
            board,
            mine_locations,
            revealed_state,
            outcome: GameOutcome::InProgress,
        })
    }

    pub fn reset(&mut self) -> Result<(), Error> {
        self.reset_with_rng(&mut rand::thread_rng())
    }

    pub fn reset_with_rng<R: Rng>(&mut self, rng: &mut R) -> Result<(), Error> {
        *self = Game::with_rng(self.config, rng)?;
        debug!(
            size = self.config.size,
            mine_count = self.config.mine_count,
            "game reset"
        );
        Ok(())
    }

    /// Reveals a field. A won or lost game stays won or lost, but the field
    /// is still revealed; refusing input after the end is up to the caller.
    pub fn reveal_cell(&mut self, row: SizeType, col: SizeType) -> Result<RevealOutcome, Error> {
        let reveal_outcome = reveal(&self.board, &mut self.revealed_state, row, col)?;
        let outcome = self.outcome.after(&reveal_outcome);
        if outcome != self.outcome {
            debug!(row, col, %outcome, "game finished");
            self.outcome = outcome;
        }
        Ok(reveal_outcome)
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_won(&self) -> bool {
        self.outcome == GameOutcome::Won
    }

    pub fn is_lost(&self) -> bool {
        self.outcome == GameOutcome::Lost
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> SizeType {
        self.config.size
    }

    pub fn mine_count(&self) -> SizeType {
        self.config.mine_count
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mine_locations(&self) -> &MineSet {
        &self.mine_locations
    }

    pub fn revealed_state(&self) -> &RevealedState {
        &self.revealed_state
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_state.revealed_count()
    }

    pub fn field_type(&self, row: SizeType, col: SizeType) -> Result<FieldType, Error> {
        self.board.field_type(row, col)
    }

    pub fn is_revealed(&self, row: SizeType, col: SizeType) -> Result<bool, Error> {
        self.revealed_state.is_revealed(row, col)
    }

    /// `'O'` for a hidden field, unless it is a mine and `show_mines` is set.
    pub fn get_char_repr(
        &self,
        row: SizeType,
        col: SizeType,
        show_mines: bool,
    ) -> Result<char, Error> {
        let field_type = self.field_type(row, col)?;
        if self.is_revealed(row, col)? || (show_mines && field_type.is_mine()) {
            Ok(field_type.get_char_repr())
        } else {
            Ok('O')
        }
    }
}
