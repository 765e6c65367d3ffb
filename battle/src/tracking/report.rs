//! Projections handed to the presentation layer after reconciliation

use dexter_protocol::server::TurnResults;

use super::session::Outcome;
use crate::types::Combatant;

/// The two moves played in the last exchange and their textual outcomes,
/// verbatim from the game service.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TurnSummary {
    pub local_move: String,
    pub local_result: String,

    /// Absent when the service reported no countermove (e.g. the local
    /// side fled)
    pub opponent_move: Option<String>,
    pub opponent_result: Option<String>,
}

impl TurnSummary {
    pub(crate) fn from_results(results: &TurnResults) -> Self {
        Self {
            local_move: results.p1_move.clone(),
            local_result: results.p1_result.clone(),
            opponent_move: results.p2_move.clone(),
            opponent_result: results.p2_result.clone(),
        }
    }

    /// Turn log line for the local side
    pub fn local_line(&self) -> String {
        format!("Player 1 played {} and {}!", self.local_move, self.local_result)
    }

    /// Turn log line for the opponent, or `None` when there was no
    /// countermove and the opponent panel should be hidden
    pub fn opponent_line(&self) -> Option<String> {
        let mv = self.opponent_move.as_ref()?;
        let result = self.opponent_result.as_ref()?;
        Some(format!("Player 2 played {mv} and {result}!"))
    }
}

/// One side's display state after a reconciled turn
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SideReport {
    /// Reported current health, verbatim (may be negative)
    pub current_hp: i32,

    /// Current health clamped at zero
    pub display_hp: u32,

    /// Health bar width, clamped to [0, 100]
    pub percent: f64,

    /// True iff the percentage is strictly below 20
    pub low_health: bool,
}

impl SideReport {
    pub(crate) fn for_combatant(combatant: &Combatant) -> Self {
        Self {
            current_hp: combatant.current_hp(),
            display_hp: combatant.display_hp(),
            percent: combatant.hp_percent(),
            low_health: combatant.is_low_health(),
        }
    }

    /// Health text for the card, e.g. `"80HP"`
    pub fn hp_text(&self) -> String {
        format!("{}HP", self.display_hp)
    }
}

/// Everything the presentation layer needs after one reconciled turn
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TurnReport {
    pub summary: TurnSummary,
    pub player: SideReport,
    pub opponent: SideReport,

    /// Set iff this turn ended the match
    pub outcome: Option<Outcome>,

    /// On a local win, the opponent's shortname so the catalog entry can
    /// be revealed
    pub revealed: Option<String>,
}
