//! Auto Battle Example
//!
//! Picks Squirtle, starts a match against whatever opponent the game
//! service deals, and plays random moves until the match concludes.

use anyhow::Result;
use dexter_client::{
    BattleSession, CardView, Outcome, Phase, Presenter, RosterEntry, TurnReport,
};
use rand::Rng;

struct ConsoleView;

impl Presenter for ConsoleView {
    fn on_card(&mut self, card: &CardView) {
        println!("Fighting as {} ({})", card.name, card.hp_text);
    }

    fn on_match_started(&mut self, opponent: &CardView) {
        println!("Opponent: {} ({})", opponent.name, opponent.hp_text);
    }

    fn on_turn(&mut self, report: &TurnReport) {
        println!("  {}", report.summary.local_line());
        if let Some(line) = report.summary.opponent_line() {
            println!("  {line}");
        }
        println!(
            "  you: {} ({:.0}%){}   them: {} ({:.0}%)",
            report.player.hp_text(),
            report.player.percent,
            if report.player.low_health { " LOW" } else { "" },
            report.opponent.hp_text(),
            report.opponent.percent,
        );
    }

    fn on_match_ended(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => println!("You won!"),
            Outcome::Lost => println!("You lost!"),
        }
    }

    fn on_entry_revealed(&mut self, entry: &RosterEntry) {
        println!("{} added to your pokedex!", entry.name);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut session = BattleSession::new();
    let mut view = ConsoleView;

    session.load_catalog(&mut view).await?;
    session.view_card("squirtle", &mut view).await?;
    session.start_match(&mut view).await?;

    let mut rng = rand::thread_rng();
    while session.state().phase() == Phase::InProgress {
        let moves = session
            .state()
            .player()
            .map(|combatant| combatant.move_count())
            .unwrap_or(0);
        if moves == 0 {
            break;
        }
        session.play_move(rng.gen_range(0..moves), &mut view).await?;
    }

    session.return_to_catalog(&mut view)?;
    Ok(())
}
