//! Presentation callbacks

use dexter_battle::{Outcome, TurnReport};

use crate::card::CardView;
use crate::catalog::RosterEntry;

/// Trait for applying battle session state changes to a display.
///
/// Implement this to drive whatever front end is in use. All methods have
/// default no-op implementations, so a presenter only implements the
/// events it cares about. Presenters receive already-computed projections
/// and never mutate session state.
///
/// # Example
///
/// ```ignore
/// struct ConsoleView;
///
/// impl Presenter for ConsoleView {
///     fn on_turn(&mut self, report: &TurnReport) {
///         println!("{}", report.summary.local_line());
///     }
/// }
/// ```
pub trait Presenter {
    /// The catalog finished loading and should be populated
    fn on_catalog(&mut self, entries: &[RosterEntry]) {
        let _ = entries;
    }

    /// A creature's card was rendered for one side
    fn on_card(&mut self, card: &CardView) {
        let _ = card;
    }

    /// The match started: reveal the opponent's card, the health panels,
    /// and the move/flee controls.
    fn on_match_started(&mut self, opponent: &CardView) {
        let _ = opponent;
    }

    /// An action round-trip began or ended; toggle the loading indicator
    fn on_action_pending(&mut self, pending: bool) {
        let _ = pending;
    }

    /// A turn was reconciled: update health bars, low-health styling, and
    /// the turn result lines. The opponent line is absent when there was
    /// no countermove and its panel should be hidden.
    fn on_turn(&mut self, report: &TurnReport) {
        let _ = report;
    }

    /// The match reached a terminal outcome; disable the move controls
    /// and offer the way back to the catalog.
    fn on_match_ended(&mut self, outcome: Outcome) {
        let _ = outcome;
    }

    /// A roster entry became selectable after a won match
    fn on_entry_revealed(&mut self, entry: &RosterEntry) {
        let _ = entry;
    }

    /// The session returned to the catalog; restore the roster view and
    /// full health bars.
    fn on_catalog_restored(&mut self) {}
}
