pub mod basic_types;
pub mod board;
pub mod config;
pub mod error;
pub mod field_type;
pub mod game;
pub mod results;
pub mod reveal;
