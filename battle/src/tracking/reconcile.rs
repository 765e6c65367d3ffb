//! Reconciliation of authoritative turn updates into match state

use dexter_protocol::TurnUpdate;

use super::report::{SideReport, TurnReport, TurnSummary};
use super::session::{Outcome, Phase, TrackedMatch};
use crate::SessionError;

impl TrackedMatch {
    /// Fold a successful turn response into the match, releasing the
    /// in-flight guard.
    ///
    /// Applied in order: record the turn summary verbatim, overwrite both
    /// sides' current health with the reported values, derive the display
    /// percentages and low-health flags, then evaluate the terminal
    /// condition. The local side is checked first, so a simultaneous
    /// double knockout reports a local loss. On a local win the report
    /// carries the opponent's shortname so its catalog entry can be
    /// revealed.
    pub fn reconcile(&mut self, update: &TurnUpdate) -> Result<TurnReport, SessionError> {
        self.release_guard();

        match self.phase() {
            Phase::InProgress => {}
            Phase::Concluded(_) => return Err(SessionError::MatchOver),
            Phase::Idle | Phase::Selecting => return Err(SessionError::NotInBattle),
        }

        let summary = TurnSummary::from_results(&update.results);
        self.set_last_turn(summary.clone());

        let Some((player, opponent)) = self.sides_mut() else {
            return Err(SessionError::NotInBattle);
        };

        player.apply_reported_hp(update.p1.current_hp);
        opponent.apply_reported_hp(update.p2.current_hp);

        let player_report = SideReport::for_combatant(player);
        let opponent_report = SideReport::for_combatant(opponent);

        // Local side first: a double knockout is a loss.
        let outcome = if player.is_defeated() {
            Some(Outcome::Lost)
        } else if opponent.is_defeated() {
            Some(Outcome::Won)
        } else {
            None
        };

        let revealed = match outcome {
            Some(Outcome::Won) => update
                .p2
                .shortname
                .clone()
                .or_else(|| Some(opponent.shortname.clone())),
            _ => None,
        };

        if let Some(outcome) = outcome {
            self.conclude(outcome);
        }

        Ok(TurnReport {
            summary,
            player: player_report,
            opponent: opponent_report,
            outcome,
            revealed,
        })
    }
}
