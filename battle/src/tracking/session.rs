//! TrackedMatch - the match state machine
//!
//! One `TrackedMatch` owns everything that is true about a match: the
//! phase, the token pair issued by the game service, both combatants, the
//! last turn summary, and the single-action-in-flight guard. Every user
//! action is validated here before any request is built, and every
//! successful response is folded back in here (see `reconcile`).

use dexter_protocol::{CreatureDetail, GameCommand, GameRequest, MatchStart, MatchTokens};

use super::report::TurnSummary;
use crate::SessionError;
use crate::types::Combatant;

/// Where a match is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Phase {
    /// No creature selected yet
    Idle,

    /// A creature's card is displayed, match not yet committed
    Selecting,

    /// Tokens issued, turns may be submitted
    InProgress,

    /// Terminal; a winner is determined
    Concluded(Outcome),
}

/// Terminal result, from the local player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outcome {
    Won,
    Lost,
}

/// A match being tracked against the remote game service.
///
/// The service is the sole authority on move outcomes and health; this
/// struct enforces which actions are legal at each point and mirrors the
/// authoritative state back for display.
#[derive(Debug, Clone, Default)]
pub struct TrackedMatch {
    phase: Phase,

    /// Token pair issued at match start. Set together exactly once per
    /// match, cleared together on reset, never read before both are set.
    tokens: Option<MatchTokens>,

    player: Option<Combatant>,
    opponent: Option<Combatant>,

    last_turn: Option<TurnSummary>,

    /// Held from `begin_*` until `complete_start`/`reconcile`/`fail_action`.
    /// While held, every other transition is rejected rather than queued.
    action_in_flight: bool,
}

impl Default for Phase {
    fn default() -> Self {
        Self::Idle
    }
}

impl TrackedMatch {
    /// Create an idle tracker with no selection
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Terminal outcome, if the match has concluded
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Concluded(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The local player's combatant, once a creature is selected
    pub fn player(&self) -> Option<&Combatant> {
        self.player.as_ref()
    }

    /// The opponent's combatant, once a match has started
    pub fn opponent(&self) -> Option<&Combatant> {
        self.opponent.as_ref()
    }

    /// Summary of the last exchange, empty before the first turn
    pub fn last_turn(&self) -> Option<&TurnSummary> {
        self.last_turn.as_ref()
    }

    /// Whether an action has been submitted and not yet resolved
    pub fn is_action_pending(&self) -> bool {
        self.action_in_flight
    }

    /// Check that a new card selection is legal right now
    pub fn ensure_can_select(&self) -> Result<(), SessionError> {
        if self.action_in_flight {
            return Err(SessionError::ActionInFlight);
        }
        match self.phase {
            Phase::Idle | Phase::Selecting => Ok(()),
            Phase::InProgress => Err(SessionError::MatchInProgress),
            Phase::Concluded(_) => Err(SessionError::MatchOver),
        }
    }

    /// Display a creature's card as the local pick.
    ///
    /// Legal from `Idle` and `Selecting` (re-selection replaces the pick).
    pub fn select_creature(&mut self, detail: &CreatureDetail) -> Result<(), SessionError> {
        self.ensure_can_select()?;
        self.player = Some(Combatant::from_detail(detail));
        self.phase = Phase::Selecting;
        Ok(())
    }

    /// Begin the match-start exchange, taking the in-flight guard.
    ///
    /// Returns the start request for the currently selected creature.
    /// The guard is released by `complete_start` or `fail_action`.
    pub fn begin_start(&mut self) -> Result<GameRequest, SessionError> {
        if self.action_in_flight {
            return Err(SessionError::ActionInFlight);
        }
        match self.phase {
            Phase::Selecting => {}
            Phase::Idle => return Err(SessionError::NoSelection),
            Phase::InProgress => return Err(SessionError::MatchInProgress),
            Phase::Concluded(_) => return Err(SessionError::MatchOver),
        }
        let player = self.player.as_ref().ok_or(SessionError::NoSelection)?;

        self.action_in_flight = true;
        Ok(GameRequest::start(player.shortname.clone()))
    }

    /// Store the issued tokens and the opponent's detail, entering
    /// `InProgress`. Releases the in-flight guard.
    pub fn complete_start(&mut self, start: MatchStart) {
        self.tokens = Some(start.tokens());
        self.opponent = Some(Combatant::from_detail(&start.p2));
        self.last_turn = None;
        self.phase = Phase::InProgress;
        self.action_in_flight = false;
    }

    /// Begin a move submission, taking the in-flight guard.
    ///
    /// `index` addresses the local move set; the move's display name is
    /// normalized for the wire.
    pub fn begin_move(&mut self, index: usize) -> Result<GameRequest, SessionError> {
        let tokens = self.ensure_can_act()?;
        let player = self.player.as_ref().ok_or(SessionError::NotInBattle)?;
        let slot = player
            .move_slot(index)
            .ok_or(SessionError::UnknownMove(index))?;
        let command = GameCommand::use_move(&slot.name);

        self.action_in_flight = true;
        Ok(GameRequest::in_match(tokens, command))
    }

    /// Begin a flee submission, taking the in-flight guard
    pub fn begin_flee(&mut self) -> Result<GameRequest, SessionError> {
        let tokens = self.ensure_can_act()?;

        self.action_in_flight = true;
        Ok(GameRequest::in_match(tokens, GameCommand::Flee))
    }

    /// Release the guard after a failed exchange. Match state is otherwise
    /// untouched, so the same action set is legal again.
    pub fn fail_action(&mut self) {
        self.action_in_flight = false;
    }

    /// Return to `Idle`, discarding tokens, combatants, and the turn log.
    ///
    /// Rejected while an action is outstanding.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.action_in_flight {
            return Err(SessionError::ActionInFlight);
        }
        *self = Self::new();
        Ok(())
    }

    /// Common gating for in-match actions: `InProgress`, guard free,
    /// tokens issued.
    fn ensure_can_act(&self) -> Result<MatchTokens, SessionError> {
        if self.action_in_flight {
            return Err(SessionError::ActionInFlight);
        }
        match self.phase {
            Phase::InProgress => {}
            Phase::Concluded(_) => return Err(SessionError::MatchOver),
            Phase::Idle | Phase::Selecting => return Err(SessionError::NotInBattle),
        }
        self.tokens.clone().ok_or(SessionError::NotInBattle)
    }

    pub(crate) fn set_last_turn(&mut self, summary: TurnSummary) {
        self.last_turn = Some(summary);
    }

    pub(crate) fn sides_mut(&mut self) -> Option<(&mut Combatant, &mut Combatant)> {
        self.player.as_mut().zip(self.opponent.as_mut())
    }

    pub(crate) fn release_guard(&mut self) {
        self.action_in_flight = false;
    }

    pub(crate) fn conclude(&mut self, outcome: Outcome) {
        self.phase = Phase::Concluded(outcome);
    }
}
