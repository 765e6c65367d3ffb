//! Domain types shared by tracking and presentation

pub mod combatant;
pub mod moves;

pub use combatant::{Combatant, LOW_HEALTH_PERCENT};
pub use moves::{MAX_MOVES, MoveSlot};
