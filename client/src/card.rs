//! Card projection: structured creature detail to display-ready view.
//!
//! Rendering is a pure function; calling it again with a different record
//! fully replaces the previous view, so no residual state can leak from
//! one creature's card to the next.

use dexter_battle::MAX_MOVES;
use dexter_protocol::{CreatureDetail, MoveEntry};

use crate::{ICON_URL, POKEDEX_URL};

/// Which card panel a view targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

/// One of the four move buttons on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSlotView {
    /// Display name
    pub name: String,

    /// `"40 DP"`, or blank for moves without damage points
    pub damage_text: String,

    /// Move type icon
    pub icon_url: String,
}

/// Display-ready card for one creature
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub side: Side,
    pub name: String,
    pub photo_url: String,
    pub photo_alt: String,
    pub type_icon_url: String,
    pub type_alt: String,
    pub weakness_icon_url: String,
    pub weakness_alt: String,

    /// `"<max hp>HP"`
    pub hp_text: String,

    pub description: String,

    /// Always 4 slots; `None` slots are hidden and non-interactive
    pub moves: [Option<MoveSlotView>; MAX_MOVES],
}

impl CardView {
    /// Number of visible move slots
    pub fn visible_moves(&self) -> usize {
        self.moves.iter().flatten().count()
    }
}

/// Project a creature detail record onto a card
pub fn render_card(detail: &CreatureDetail, side: Side) -> CardView {
    CardView {
        side,
        name: detail.name.clone(),
        photo_url: format!("{POKEDEX_URL}{}", detail.images.photo),
        photo_alt: detail.shortname.clone(),
        type_icon_url: format!("{POKEDEX_URL}{}", detail.images.type_icon),
        type_alt: detail.info.kind.clone(),
        weakness_icon_url: format!("{POKEDEX_URL}{}", detail.images.weakness_icon),
        weakness_alt: detail.info.weakness.clone(),
        hp_text: format!("{}HP", detail.hp),
        description: detail.info.description.clone(),
        moves: std::array::from_fn(|slot| detail.moves.get(slot).map(render_move)),
    }
}

fn render_move(entry: &MoveEntry) -> MoveSlotView {
    MoveSlotView {
        name: entry.name.clone(),
        damage_text: entry
            .dp
            .map(|dp| format!("{dp} DP"))
            .unwrap_or_default(),
        icon_url: format!("{ICON_URL}{}.jpg", entry.kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(move_specs: &[(&str, Option<u32>)]) -> CreatureDetail {
        serde_json::from_value(serde_json::json!({
            "name": "Squirtle",
            "shortname": "squirtle",
            "hp": 100,
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
            "moves": move_specs
                .iter()
                .map(|(name, dp)| match dp {
                    Some(dp) => serde_json::json!({ "name": name, "dp": dp, "type": "water" }),
                    None => serde_json::json!({ "name": name, "type": "water" }),
                })
                .collect::<Vec<_>>()
        }))
        .unwrap()
    }

    #[test]
    fn test_card_fields() {
        let card = render_card(&detail(&[("Water Gun", Some(40))]), Side::Player);

        assert_eq!(card.side, Side::Player);
        assert_eq!(card.name, "Squirtle");
        assert_eq!(card.hp_text, "100HP");
        assert_eq!(card.photo_alt, "squirtle");
        assert_eq!(card.type_alt, "water");
        assert_eq!(card.weakness_alt, "electric");
        assert!(card.photo_url.ends_with("/pokedex/images/squirtle.jpg"));
        assert!(card.type_icon_url.ends_with("/pokedex/icons/water.jpg"));
    }

    #[test]
    fn test_one_visible_slot_per_actual_move() {
        for count in 1..=4 {
            let specs: Vec<(&str, Option<u32>)> =
                (0..count).map(|_| ("Tackle", Some(40))).collect();
            let card = render_card(&detail(&specs), Side::Player);

            assert_eq!(card.visible_moves(), count);
            for slot in card.moves.iter().skip(count) {
                assert!(slot.is_none());
            }
        }
    }

    #[test]
    fn test_damage_text_blank_without_dp() {
        let card = render_card(
            &detail(&[("Tackle", Some(40)), ("Growl", None)]),
            Side::Opponent,
        );

        let tackle = card.moves[0].as_ref().unwrap();
        assert_eq!(tackle.damage_text, "40 DP");

        let growl = card.moves[1].as_ref().unwrap();
        assert_eq!(growl.damage_text, "");
        assert!(growl.icon_url.ends_with("/icons/water.jpg"));
    }

    #[test]
    fn test_rerender_fully_replaces() {
        let first = render_card(&detail(&[("A", None), ("B", None), ("C", None)]), Side::Player);
        let second = render_card(&detail(&[("D", Some(10))]), Side::Player);

        assert_eq!(first.visible_moves(), 3);
        assert_eq!(second.visible_moves(), 1);
        assert!(second.moves[1].is_none());
        assert!(second.moves[2].is_none());
    }
}
