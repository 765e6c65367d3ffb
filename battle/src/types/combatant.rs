//! Combatant state

use dexter_protocol::CreatureDetail;

use super::moves::{MAX_MOVES, MoveSlot};

/// Health percentage below which a side counts as low on health.
/// The comparison is strict: exactly 20% is not low.
pub const LOW_HEALTH_PERCENT: f64 = 20.0;

/// One side of a match: identity, health, and move set.
///
/// Maximum health is fixed when the combatant is created from its detail
/// record. Current health is whatever the game service last reported,
/// stored verbatim: the service may report a value below zero, and display
/// accessors clamp rather than reinterpret.
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    /// Display name
    pub name: String,

    /// Lookup key and sprite filename stem
    pub shortname: String,

    /// Fixed maximum health
    pub max_hp: u32,

    /// Last reported current health, verbatim
    current_hp: i32,

    /// Ordered move set, at most [`MAX_MOVES`] entries
    pub moves: Vec<MoveSlot>,
}

impl Combatant {
    /// Create a combatant at full health from a detail record
    pub fn from_detail(detail: &CreatureDetail) -> Self {
        Self {
            name: detail.name.clone(),
            shortname: detail.shortname.clone(),
            max_hp: detail.hp,
            current_hp: detail.hp as i32,
            moves: detail
                .moves
                .iter()
                .take(MAX_MOVES)
                .map(MoveSlot::from_entry)
                .collect(),
        }
    }

    /// The last reported current health, which may be negative
    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    /// Current health clamped at zero for display
    pub fn display_hp(&self) -> u32 {
        self.current_hp.max(0) as u32
    }

    /// Overwrite current health with the service-reported value.
    ///
    /// Health is authoritative from the remote side; it is never computed
    /// locally and never applied twice.
    pub fn apply_reported_hp(&mut self, reported: i32) {
        self.current_hp = reported;
    }

    /// Health as a percentage of maximum, clamped to [0, 100]
    pub fn hp_percent(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        let percent = (self.current_hp as f64 / self.max_hp as f64) * 100.0;
        percent.clamp(0.0, 100.0)
    }

    /// Whether this side's health bar should show as low
    pub fn is_low_health(&self) -> bool {
        self.hp_percent() < LOW_HEALTH_PERCENT
    }

    /// Whether this side has hit the terminal condition (health at or
    /// below zero)
    pub fn is_defeated(&self) -> bool {
        self.current_hp <= 0
    }

    /// Get a move by slot index
    pub fn move_slot(&self, index: usize) -> Option<&MoveSlot> {
        self.moves.get(index)
    }

    /// Number of moves actually present (1-4 for well-formed creatures)
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexter_protocol::CreatureDetail;

    fn detail(hp: u32, move_names: &[&str]) -> CreatureDetail {
        serde_json::from_value(serde_json::json!({
            "name": "Squirtle",
            "shortname": "squirtle",
            "hp": hp,
            "images": {
                "photo": "images/squirtle.jpg",
                "typeIcon": "icons/water.jpg",
                "weaknessIcon": "icons/electric.jpg"
            },
            "info": {
                "type": "water",
                "weakness": "electric",
                "description": "A tiny turtle."
            },
            "moves": move_names
                .iter()
                .map(|name| serde_json::json!({ "name": name, "type": "water" }))
                .collect::<Vec<_>>()
        }))
        .unwrap()
    }

    #[test]
    fn test_from_detail_full_health() {
        let combatant = Combatant::from_detail(&detail(100, &["Tackle", "Water Gun"]));

        assert_eq!(combatant.max_hp, 100);
        assert_eq!(combatant.current_hp(), 100);
        assert_eq!(combatant.hp_percent(), 100.0);
        assert_eq!(combatant.move_count(), 2);
        assert!(!combatant.is_low_health());
        assert!(!combatant.is_defeated());
    }

    #[test]
    fn test_from_detail_caps_move_slots() {
        let combatant = Combatant::from_detail(&detail(100, &["A", "B", "C", "D", "E"]));

        assert_eq!(combatant.move_count(), MAX_MOVES);
    }

    #[test]
    fn test_apply_reported_hp_is_verbatim() {
        let mut combatant = Combatant::from_detail(&detail(100, &["Tackle"]));

        combatant.apply_reported_hp(80);
        assert_eq!(combatant.current_hp(), 80);

        combatant.apply_reported_hp(-12);
        assert_eq!(combatant.current_hp(), -12);
        assert_eq!(combatant.display_hp(), 0);
    }

    #[test]
    fn test_hp_percent_clamps() {
        let mut combatant = Combatant::from_detail(&detail(100, &["Tackle"]));

        combatant.apply_reported_hp(-12);
        assert_eq!(combatant.hp_percent(), 0.0);

        combatant.apply_reported_hp(150);
        assert_eq!(combatant.hp_percent(), 100.0);
    }

    #[test]
    fn test_low_health_boundary_is_strict() {
        let mut combatant = Combatant::from_detail(&detail(100, &["Tackle"]));

        combatant.apply_reported_hp(20);
        assert!(!combatant.is_low_health());

        combatant.apply_reported_hp(19);
        assert!(combatant.is_low_health());
    }

    #[test]
    fn test_defeated_at_and_below_zero() {
        let mut combatant = Combatant::from_detail(&detail(100, &["Tackle"]));

        combatant.apply_reported_hp(1);
        assert!(!combatant.is_defeated());

        combatant.apply_reported_hp(0);
        assert!(combatant.is_defeated());

        combatant.apply_reported_hp(-5);
        assert!(combatant.is_defeated());
    }

    #[test]
    fn test_zero_max_hp_percent() {
        let combatant = Combatant::from_detail(&detail(0, &["Tackle"]));

        assert_eq!(combatant.hp_percent(), 0.0);
    }
}
