//! Async client for the Pokedex web service: catalog browsing, creature
//! cards, and turn-based battles against the remote game service.
//!
//! The remote service is the sole authority on move outcomes and health.
//! [`BattleSession`] drives each user action as one awaited exchange -
//! validate locally, submit, reconcile the authoritative response - and
//! reports the resulting display state through the [`Presenter`] trait.

mod card;
mod catalog;
mod presenter;
mod session;
mod transport;

pub use card::{CardView, MoveSlotView, Side, render_card};
pub use catalog::{BOOTSTRAP_FOUND, Catalog, RosterEntry};
pub use presenter::Presenter;
pub use session::{BattleSession, ClientError};
pub use transport::{GameService, Transport, TransportError};

pub use dexter_battle::{
    Combatant, MoveSlot, Outcome, Phase, SessionError, SideReport, TrackedMatch, TurnReport,
    TurnSummary,
};
pub use dexter_protocol::{CreatureDetail, GameCommand, GameRequest, MatchTokens, RosterRecord};

/// Base URL for the pokedex endpoints and card images
pub const POKEDEX_URL: &str =
    "https://courses.cs.washington.edu/courses/cse154/webservices/pokedex/";

/// Directory of roster sprite images
pub const SPRITE_URL: &str =
    "https://courses.cs.washington.edu/courses/cse154/webservices/pokedex/sprites/";

/// Directory of move/type icons
pub const ICON_URL: &str =
    "https://courses.cs.washington.edu/courses/cse154/webservices/pokedex/icons/";

/// Game service endpoint
pub const GAME_URL: &str =
    "https://courses.cs.washington.edu/courses/cse154/webservices/pokedex/game.php";
