mod tests;

pub mod catalog;
pub mod creature;
pub mod game;

pub use catalog::{RosterRecord, parse_catalog, parse_catalog_line};
pub use creature::{CreatureDetail, CreatureInfo, ImageSet, MoveEntry};
pub use game::{FighterReport, MatchStart, TurnResults, TurnUpdate};
