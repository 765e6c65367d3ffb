//! Request encoding for the game endpoint.
//!
//! The game service takes form-encoded POST bodies. A [`GameCommand`] carries
//! the action-specific fields; a [`GameRequest`] prepends the match/player
//! token pair where one is required.

/// The token pair issued by the game service at match start.
///
/// Opaque to the client: both values are echoed verbatim on every turn
/// request and mean nothing else. They are always set and cleared together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTokens {
    pub guid: String,
    pub pid: String,
}

/// Actions the client can submit to the game service
#[derive(Debug, Clone, PartialEq)]
pub enum GameCommand {
    /// startgame=true&mypokemon=SHORTNAME
    StartGame { pokemon: String },

    /// movename=NORMALIZED
    UseMove { name: String },

    /// move=flee
    Flee,
}

impl GameCommand {
    /// Build a move command from a display name, normalizing it for the wire.
    pub fn use_move(display_name: &str) -> Self {
        Self::UseMove {
            name: normalize_move_name(display_name),
        }
    }

    /// Serialize the action-specific form fields
    pub fn to_form_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::StartGame { pokemon } => vec![
                ("startgame", "true".to_string()),
                ("mypokemon", pokemon.clone()),
            ],
            Self::UseMove { name } => vec![("movename", name.clone())],
            Self::Flee => vec![("move", "flee".to_string())],
        }
    }
}

/// A complete game request: command plus token context when in a match
#[derive(Debug, Clone, PartialEq)]
pub struct GameRequest {
    pub tokens: Option<MatchTokens>,
    pub command: GameCommand,
}

impl GameRequest {
    /// A match-start request. No tokens exist yet.
    pub fn start(pokemon: impl Into<String>) -> Self {
        Self {
            tokens: None,
            command: GameCommand::StartGame {
                pokemon: pokemon.into(),
            },
        }
    }

    /// An in-match request carrying the issued token pair
    pub fn in_match(tokens: MatchTokens, command: GameCommand) -> Self {
        Self {
            tokens: Some(tokens),
            command,
        }
    }

    /// Serialize to form fields: guid/pid first (when present), then the
    /// command's own fields.
    pub fn to_form(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(tokens) = &self.tokens {
            fields.push(("guid", tokens.guid.clone()));
            fields.push(("pid", tokens.pid.clone()));
        }
        fields.extend(self.command.to_form_fields());
        fields
    }
}

/// Normalize a move display name for submission: strip whitespace, lowercase.
///
/// "Quick Attack" becomes "quickattack", matching what the game service
/// expects in the `movename` field.
pub fn normalize_move_name(name: &str) -> String {
    name.split_whitespace().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_move_name() {
        assert_eq!(normalize_move_name("Quick Attack"), "quickattack");
        assert_eq!(normalize_move_name("tackle"), "tackle");
        assert_eq!(normalize_move_name("  Razor  Leaf "), "razorleaf");
    }

    #[test]
    fn test_start_request_fields() {
        let request = GameRequest::start("squirtle");

        assert_eq!(
            request.to_form(),
            vec![
                ("startgame", "true".to_string()),
                ("mypokemon", "squirtle".to_string()),
            ]
        );
    }

    #[test]
    fn test_move_request_fields() {
        let tokens = MatchTokens {
            guid: "g1".to_string(),
            pid: "p1".to_string(),
        };
        let request = GameRequest::in_match(tokens, GameCommand::use_move("Water Gun"));

        assert_eq!(
            request.to_form(),
            vec![
                ("guid", "g1".to_string()),
                ("pid", "p1".to_string()),
                ("movename", "watergun".to_string()),
            ]
        );
    }

    #[test]
    fn test_flee_request_fields() {
        let tokens = MatchTokens {
            guid: "g1".to_string(),
            pid: "p1".to_string(),
        };
        let request = GameRequest::in_match(tokens, GameCommand::Flee);

        assert_eq!(
            request.to_form(),
            vec![
                ("guid", "g1".to_string()),
                ("pid", "p1".to_string()),
                ("move", "flee".to_string()),
            ]
        );
    }
}
