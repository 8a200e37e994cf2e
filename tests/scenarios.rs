use serde::Deserialize;

use cyberchess::board::{BoardBuilder, Move};
use cyberchess::{Color, Coordinate};

#[derive(Deserialize)]
struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    placement: String,
    #[serde(default)]
    moves: Vec<String>,
    side: String,
    legal_moves: usize,
    checked: bool,
    checkmate: bool,
    stalemate: bool,
}

fn parse_move(text: &str) -> Move {
    let (from, to) = text.split_once('-').expect("moves look like e2-e4");
    let from: Coordinate = from.parse().unwrap();
    let to: Coordinate = to.parse().unwrap();
    Move::new(from, to)
}

fn parse_side(text: &str) -> Color {
    match text {
        "white" => Color::White,
        "black" => Color::Black,
        other => panic!("unknown side {other}"),
    }
}

#[test]
fn scenario_suite() {
    let data = include_str!("data/scenarios.json");
    let set: ScenarioSet = serde_json::from_str(data).expect("invalid scenarios.json");
    assert!(!set.scenarios.is_empty());

    for scenario in &set.scenarios {
        let mut board = BoardBuilder::from_placement(&scenario.placement)
            .unwrap()
            .build()
            .unwrap();

        let mut turn = Color::White;
        for text in &scenario.moves {
            let mv = parse_move(text);
            assert!(
                board.legal_moves(turn).contains(&mv),
                "{}: {} is not legal",
                scenario.name,
                text
            );
            board.make_move(mv).unwrap();
            turn = turn.opponent();
        }

        let side = parse_side(&scenario.side);
        assert_eq!(
            board.legal_moves(side).len(),
            scenario.legal_moves,
            "{}: legal move count",
            scenario.name
        );
        assert_eq!(board.is_checked(side), scenario.checked, "{}: check", scenario.name);
        assert_eq!(
            board.is_checkmate(side),
            scenario.checkmate,
            "{}: checkmate",
            scenario.name
        );
        assert_eq!(
            board.is_stalemate(side),
            scenario.stalemate,
            "{}: stalemate",
            scenario.name
        );
        assert!(board.is_consistent(), "{}: consistency", scenario.name);
    }
}
