//! Match state tracking and domain types for the Pokedex battle client.
//!
//! This crate owns everything that is true about a match: who is fighting,
//! how much health each side has, which actions are currently legal, and
//! how an authoritative server response folds back into client state.
//!
//! # Overview
//!
//! `dexter-battle` sits between `dexter-protocol` (wire format) and the
//! transport-facing client:
//!
//! ```text
//! dexter-protocol (wire format)
//!        │
//!        ▼
//! dexter-battle (domain types + tracking) ← THIS CRATE
//!        │
//!        └─> dexter-client (transport + presentation callbacks)
//! ```
//!
//! # Main Types
//!
//! - [`Combatant`] - one side's creature state (health, move set)
//! - [`MoveSlot`] - a single move with optional damage points
//! - [`TrackedMatch`] - the match state machine: phase transitions, token
//!   ownership, the action-in-flight guard, and reconciliation of
//!   authoritative turn updates
//! - [`TurnReport`] - the projection handed to the presentation layer after
//!   each reconciled turn
//!
//! The server is the sole authority on move outcomes and health. This crate
//! never computes damage; it overwrites local state with what the server
//! reported and derives display values (percentages, low-health flags,
//! terminal outcome) from that.
//!
//! # Example Usage
//!
//! ```ignore
//! use dexter_battle::{Phase, TrackedMatch};
//!
//! let mut tracked = TrackedMatch::new();
//! tracked.select_creature(&detail)?;
//!
//! let request = tracked.begin_start()?;     // guard taken
//! // ... POST the request, await the response ...
//! tracked.complete_start(start);            // guard released, InProgress
//!
//! let request = tracked.begin_move(0)?;
//! // ... POST, await ...
//! let report = tracked.reconcile(&update)?;
//! println!("{}", report.summary.local_line());
//! ```

pub mod tracking;
pub mod types;

pub use tracking::{Outcome, Phase, SideReport, TrackedMatch, TurnReport, TurnSummary};
pub use types::{Combatant, LOW_HEALTH_PERCENT, MAX_MOVES, MoveSlot};

use thiserror::Error;

/// An action that is illegal for the current match phase, rejected
/// synchronously without touching match state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no creature has been selected")]
    NoSelection,

    #[error("no match is in progress")]
    NotInBattle,

    #[error("a match is already in progress")]
    MatchInProgress,

    #[error("the match is already over")]
    MatchOver,

    #[error("another action is still awaiting its result")]
    ActionInFlight,

    #[error("no move at slot {0}")]
    UnknownMove(usize),
}
