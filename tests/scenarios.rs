use std::collections::HashMap;

use serde::Deserialize;

use hotseat_chess::board::{PieceKind, Square};
use hotseat_chess::game::{Intent, Session};

#[derive(Deserialize)]
struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    /// Square names to click, or `=x` to answer a promotion prompt.
    clicks: Vec<String>,
    winner: Option<String>,
    to_move: String,
    #[serde(default)]
    pieces: HashMap<String, String>,
    #[serde(default)]
    empty: Vec<String>,
}

fn intent_for(token: &str) -> Intent {
    if let Some(choice) = token.strip_prefix('=') {
        let kind = choice
            .chars()
            .next()
            .and_then(PieceKind::from_char)
            .unwrap_or_else(|| panic!("bad promotion token '{token}'"));
        return Intent::ChoosePromotion(kind);
    }
    let square: Square = token
        .parse()
        .unwrap_or_else(|e| panic!("bad square '{token}': {e}"));
    Intent::Click(square)
}

#[test]
fn scenario_suite() {
    let data = include_str!("data/scenarios.json");
    let set: ScenarioSet = serde_json::from_str(data).expect("invalid scenarios.json");

    for scenario in &set.scenarios {
        let mut session = Session::default();
        for token in &scenario.clicks {
            session
                .handle(intent_for(token))
                .unwrap_or_else(|e| panic!("{}: '{token}' failed: {e}", scenario.name));
        }

        let frame = session.frame();
        assert_eq!(
            frame.winner.map(|c| c.name().to_string()),
            scenario.winner,
            "winner mismatch in {}",
            scenario.name
        );
        assert_eq!(
            frame.to_move.name(),
            scenario.to_move,
            "side to move mismatch in {}",
            scenario.name
        );

        for (square, asset) in &scenario.pieces {
            let sq: Square = square.parse().expect("valid square in scenario");
            let view = frame
                .board
                .at(sq)
                .unwrap_or_else(|| panic!("{}: expected {asset} on {square}", scenario.name));
            assert_eq!(&view.asset_name(), asset, "{}: wrong piece on {square}", scenario.name);
        }
        for square in &scenario.empty {
            let sq: Square = square.parse().expect("valid square in scenario");
            assert!(
                frame.board.at(sq).is_none(),
                "{}: expected {square} to be empty",
                scenario.name
            );
        }
    }
}

#[test]
fn reset_after_mate_starts_a_fresh_game() {
    let mut session = Session::default();
    for token in ["f2", "f3", "e7", "e5", "g2", "g4", "d8", "h4"] {
        session.handle(intent_for(token)).expect("legal click");
    }
    assert!(session.game().is_game_over());

    // Clicks are ignored until reset.
    session.handle(intent_for("e2")).expect("click");
    assert!(session.frame().highlights.is_empty());

    session.handle(Intent::Reset).expect("reset");
    session.handle(intent_for("e2")).expect("click");
    assert_eq!(session.frame().highlights.len(), 2);
}
