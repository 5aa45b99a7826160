use super::basic_types::SizeType;
use super::error::Error;

pub const DEFAULT_SIZE: SizeType = 8;
pub const DEFAULT_MINE_COUNT: SizeType = 10;
/// Largest accepted board side. Board state is allocated eagerly.
pub const MAX_SIZE: SizeType = 1024;

/// Immutable parameters of a game, carried by the game instance across resets.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct GameConfig {
    pub size: SizeType,
    pub mine_count: SizeType,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            size: DEFAULT_SIZE,
            mine_count: DEFAULT_MINE_COUNT,
        }
    }
}

impl GameConfig {
    pub fn new(size: SizeType, mine_count: SizeType) -> Result<GameConfig, Error> {
        let config = GameConfig { size, mine_count };
        config.validate()?;
        Ok(config)
    }

    fn invalid(&self) -> Error {
        Error::InvalidConfiguration {
            size: self.size,
            mine_count: self.mine_count,
        }
    }

    /// Number of fields on the board, or an error if the board can not exist.
    pub fn number_of_fields(&self) -> Result<SizeType, Error> {
        if self.size == 0 || self.size > MAX_SIZE {
            Err(self.invalid())
        } else {
            Ok(self.size * self.size)
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.mine_count >= self.number_of_fields()? {
            Err(self.invalid())
        } else {
            Ok(())
        }
    }
}
