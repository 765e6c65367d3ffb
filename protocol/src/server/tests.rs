#[cfg(test)]
mod tests {
    use crate::server::{MatchStart, RosterRecord, TurnUpdate, parse_catalog, parse_catalog_line};

    #[test]
    fn test_parse_catalog_line() {
        let record = parse_catalog_line("Bulbasaur:bulbasaur").unwrap();

        assert_eq!(
            record,
            RosterRecord {
                name: "Bulbasaur".to_string(),
                shortname: "bulbasaur".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_catalog_line_invalid() {
        let result = parse_catalog_line("no separator here");

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_catalog_line_missing_shortname() {
        let result = parse_catalog_line("Bulbasaur:");

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_catalog() {
        let text = "Bulbasaur:bulbasaur\nCharmander:charmander\n\nSquirtle:squirtle\n";
        let records = parse_catalog(text).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].shortname, "bulbasaur");
        assert_eq!(records[2].name, "Squirtle");
    }

    #[test]
    fn test_parse_catalog_empty() {
        assert!(parse_catalog("").is_err());
        assert!(parse_catalog("\n\n").is_err());
    }

    #[test]
    fn test_decode_match_start() {
        let json = serde_json::json!({
            "guid": "g1",
            "pid": "p1",
            "p2": {
                "name": "Charmander",
                "shortname": "charmander",
                "hp": 100,
                "images": {
                    "photo": "images/charmander.jpg",
                    "typeIcon": "icons/fire.jpg",
                    "weaknessIcon": "icons/water.jpg"
                },
                "info": {
                    "type": "fire",
                    "weakness": "water",
                    "description": "A fire lizard."
                },
                "moves": [
                    { "name": "Scratch", "dp": 40, "type": "normal" },
                    { "name": "Growl", "type": "normal" }
                ]
            }
        });

        let start: MatchStart = serde_json::from_value(json).unwrap();
        assert_eq!(start.guid, "g1");
        assert_eq!(start.tokens().pid, "p1");
        assert_eq!(start.p2.hp, 100);
        assert_eq!(start.p2.moves.len(), 2);
        assert_eq!(start.p2.moves[0].dp, Some(40));
        assert_eq!(start.p2.moves[1].dp, None);
        assert_eq!(start.p2.info.kind, "fire");
    }

    #[test]
    fn test_decode_turn_update() {
        let json = serde_json::json!({
            "results": {
                "p1-move": "tackle",
                "p2-move": "scratch",
                "p1-result": "hit",
                "p2-result": "missed"
            },
            "p1": { "hp": 100, "current-hp": 80 },
            "p2": { "hp": 90, "current-hp": 90, "shortname": "charmander" }
        });

        let update: TurnUpdate = serde_json::from_value(json).unwrap();
        assert_eq!(update.results.p1_move, "tackle");
        assert_eq!(update.results.p2_move.as_deref(), Some("scratch"));
        assert_eq!(update.p1.current_hp, 80);
        assert_eq!(update.p2.shortname.as_deref(), Some("charmander"));
    }

    #[test]
    fn test_decode_turn_update_no_countermove() {
        let json = serde_json::json!({
            "results": {
                "p1-move": "flee",
                "p2-move": null,
                "p1-result": "lost",
                "p2-result": null
            },
            "p1": { "hp": 100, "current-hp": 100 },
            "p2": { "hp": 90, "current-hp": 90, "shortname": "charmander" }
        });

        let update: TurnUpdate = serde_json::from_value(json).unwrap();
        assert!(update.results.p2_move.is_none());
        assert!(update.results.p2_result.is_none());
    }

    #[test]
    fn test_decode_negative_current_hp() {
        let json = serde_json::json!({
            "results": {
                "p1-move": "tackle",
                "p2-move": "flamethrower",
                "p1-result": "hit",
                "p2-result": "hit"
            },
            "p1": { "hp": 100, "current-hp": -12 },
            "p2": { "hp": 90, "current-hp": 30 }
        });

        let update: TurnUpdate = serde_json::from_value(json).unwrap();
        assert_eq!(update.p1.current_hp, -12);
        assert!(update.p2.shortname.is_none());
    }
}
