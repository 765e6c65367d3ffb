//! Game endpoint responses.
//!
//! These types represent the JSON returned by the game service for match
//! start and turn submission.

use serde::Deserialize;

use super::creature::CreatureDetail;
use crate::client::MatchTokens;

/// Response to a match-start request
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchStart {
    /// Opaque match token, echoed on every turn request
    pub guid: String,

    /// Opaque local-player token, echoed on every turn request
    pub pid: String,

    /// The opponent's full detail record
    pub p2: CreatureDetail,
}

impl MatchStart {
    /// Parse a start response from JSON
    pub fn parse(json: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(json.clone()).ok()
    }

    /// Extract the token pair for subsequent turn requests
    pub fn tokens(&self) -> MatchTokens {
        MatchTokens {
            guid: self.guid.clone(),
            pid: self.pid.clone(),
        }
    }
}

/// Authoritative match update returned for every submitted action
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TurnUpdate {
    /// The two moves played and their textual outcomes
    pub results: TurnResults,

    /// Local player's reported health
    pub p1: FighterReport,

    /// Opponent's reported health
    pub p2: FighterReport,
}

impl TurnUpdate {
    /// Parse a turn response from JSON
    pub fn parse(json: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(json.clone()).ok()
    }
}

/// The moves played this turn, verbatim from the game service.
///
/// `p2_move`/`p2_result` are absent when the opponent had no countermove
/// that turn (for example, when the local side fled).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TurnResults {
    #[serde(rename = "p1-move")]
    pub p1_move: String,

    #[serde(rename = "p2-move", default)]
    pub p2_move: Option<String>,

    #[serde(rename = "p1-result")]
    pub p1_result: String,

    #[serde(rename = "p2-result", default)]
    pub p2_result: Option<String>,
}

/// One side's health as reported by the game service.
///
/// `current_hp` is authoritative and may be reported below zero; the client
/// never recomputes it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FighterReport {
    /// Maximum health
    pub hp: u32,

    #[serde(rename = "current-hp")]
    pub current_hp: i32,

    /// Present on the opponent's report
    #[serde(default)]
    pub shortname: Option<String>,
}
