//! Move slot types

use dexter_protocol::{MoveEntry, normalize_move_name};

/// Maximum number of move slots on a card
pub const MAX_MOVES: usize = 4;

/// One move in a combatant's move set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSlot {
    /// Display name, as shown on the card
    pub name: String,

    /// Damage points. Absent for status moves.
    pub power: Option<u32>,

    /// Move type, used to pick the icon
    pub kind: String,
}

impl MoveSlot {
    /// Create from a protocol move entry
    pub fn from_entry(entry: &MoveEntry) -> Self {
        Self {
            name: entry.name.clone(),
            power: entry.dp,
            kind: entry.kind.clone(),
        }
    }

    /// The normalized form submitted to the game service
    pub fn wire_name(&self) -> String {
        normalize_move_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexter_protocol::MoveEntry;

    #[test]
    fn test_from_entry() {
        let entry = MoveEntry {
            name: "Water Gun".to_string(),
            dp: Some(40),
            kind: "water".to_string(),
        };

        let slot = MoveSlot::from_entry(&entry);
        assert_eq!(slot.name, "Water Gun");
        assert_eq!(slot.power, Some(40));
        assert_eq!(slot.wire_name(), "watergun");
    }
}
