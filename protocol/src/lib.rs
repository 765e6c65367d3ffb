use thiserror::Error;

pub mod client;
pub mod server;

pub use client::{GameCommand, GameRequest, MatchTokens, normalize_move_name};
pub use server::{CreatureDetail, MatchStart, MoveEntry, RosterRecord, TurnUpdate, parse_catalog};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid record format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty catalog")]
    EmptyCatalog,
}
