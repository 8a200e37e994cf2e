use cyberchess::board::{BoardBuilder, BoardConfig, ConfigError, MemoryNarrator, PieceType};
use cyberchess::{
    Color, Coordinate, Game, GameConfig, GameState, HumanPlayer, Outcome, PlayerKind,
};

fn cell(s: &str) -> Coordinate {
    s.parse().unwrap()
}

/// Pixel in the middle of `square` for the default board geometry.
fn px(square: &str) -> Coordinate {
    let config = BoardConfig::default();
    let half = config.cell_size() / 2;
    config.grid_to_px(cell(square)) + Coordinate::new(half, half)
}

fn humans() -> GameConfig {
    GameConfig {
        white: PlayerKind::Human,
        black: PlayerKind::Human,
        ..GameConfig::default()
    }
}

fn human_game(placement: &str) -> Game {
    let board = BoardBuilder::from_placement(placement)
        .unwrap()
        .build()
        .unwrap();
    Game::with_players(
        board,
        Box::new(HumanPlayer::new(Color::White)),
        Box::new(HumanPlayer::new(Color::Black)),
    )
}

#[test]
fn fools_mate_by_clicks() {
    let narrator = MemoryNarrator::new();
    let mut game = Game::new(humans()).with_narrator(narrator.clone());

    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        assert_eq!(game.state(), GameState::AwaitingMove);
        assert_eq!(game.click(px(from)).unwrap(), None);
        let record = game.click(px(to)).unwrap().expect("second click moves");
        assert_eq!(record.from, cell(from));
        assert_eq!(record.to, cell(to));
    }

    let outcome = Outcome::Checkmate {
        winner: Color::Black,
    };
    assert_eq!(game.state(), GameState::Over(outcome));
    assert_eq!(game.outcome(), Some(outcome));
    assert_eq!(game.moves_played(), 4);
    assert_eq!(game.move_log()[0], "[001] f2-f3");
    assert_eq!(game.move_log()[3], "[004] Qd8-h4 check!");
    assert!(narrator.contains("Check mate! WINNER: black"));

    // the game no longer reacts
    assert_eq!(game.click(px("e2")).unwrap(), None);
    assert_eq!(game.board().selected(), None);
}

#[test]
fn clicks_outside_board_or_out_of_turn_are_ignored() {
    let mut game = Game::new(humans());

    assert_eq!(game.click(Coordinate::new(5, 5)).unwrap(), None);
    assert_eq!(game.board().selected(), None);

    // black piece on white's turn
    assert_eq!(game.click(px("e7")).unwrap(), None);
    assert_eq!(game.board().selected(), None);
    assert_eq!(game.turn(), Color::White);

    game.click(px("e2")).unwrap();
    assert_eq!(game.board().selected(), Some(cell("e2")));
    // illegal drop gives the turn back with nothing selected
    assert_eq!(game.click(px("e5")).unwrap(), None);
    assert_eq!(game.board().selected(), None);
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.moves_played(), 0);
}

#[test]
fn machine_answers_human_on_tick() {
    let mut game = Game::new(GameConfig {
        seed: Some(5),
        ..GameConfig::default()
    });
    assert!(!game.is_machine_turn());
    assert_eq!(game.tick().unwrap(), None);

    game.click(px("e2")).unwrap();
    game.click(px("e4")).unwrap().unwrap();
    assert_eq!(game.turn(), Color::Black);
    assert!(game.is_machine_turn());

    // clicks during the machine's turn do nothing
    assert_eq!(game.click(px("e7")).unwrap(), None);

    let reply = game.tick().unwrap().unwrap();
    assert_eq!(reply.piece.color, Color::Black);
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.moves_played(), 2);
}

#[test]
fn human_promotion_waits_for_choice() {
    let mut game = human_game("7k/P7/8/8/8/8/8/K7");

    game.click_cell(cell("a7")).unwrap();
    assert_eq!(game.click_cell(cell("a8")).unwrap(), None);
    assert_eq!(
        game.state(),
        GameState::Promoting {
            pawn: cell("a8")
        }
    );
    assert_eq!(game.turn(), Color::White);

    // board clicks and bad choices leave the game waiting
    assert_eq!(game.click_cell(cell("a1")).unwrap(), None);
    assert_eq!(game.choose_promotion(PieceType::King).unwrap(), None);
    assert!(matches!(game.state(), GameState::Promoting { .. }));

    let record = game.choose_promotion(PieceType::Queen).unwrap().unwrap();
    assert_eq!(record.promotion, Some(PieceType::Queen));
    assert!(record.check);
    assert_eq!(game.state(), GameState::AwaitingMove);
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.move_log(), ["[001] a7-a8=Q check!"]);
    assert_eq!(
        game.board().piece_at(cell("a8")).unwrap().kind(),
        PieceType::Queen
    );
}

#[test]
fn machine_promotes_without_input() {
    // the rooks box the white king in, so the pawn push is the only move
    let board = BoardBuilder::from_placement("7k/P7/8/8/8/1r6/7r/K7")
        .unwrap()
        .build()
        .unwrap();
    let mut game = Game::with_players(
        board,
        PlayerKind::RandomAi.make(Color::White, Some(9)),
        Box::new(HumanPlayer::new(Color::Black)),
    );
    assert_eq!(game.board().legal_moves(Color::White).len(), 1);

    let record = game.tick().unwrap().unwrap();
    assert_eq!(record.to, cell("a8"));
    assert!(record.promotion.is_some());
    let piece = game.board().piece_at(cell("a8")).unwrap();
    assert_ne!(piece.kind(), PieceType::Pawn);
    assert_eq!(game.state(), GameState::AwaitingMove);
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn stalemate_ends_the_game() {
    let mut game = human_game("k7/P7/8/1Q6/8/8/8/7K");
    game.click_cell(cell("b5")).unwrap();
    game.click_cell(cell("b6")).unwrap().unwrap();

    assert_eq!(
        game.outcome(),
        Some(Outcome::Stalemate {
            stuck: Color::Black
        })
    );
}

#[test]
fn random_self_play_keeps_board_consistent() {
    for seed in 0..5 {
        let mut game = Game::new(GameConfig {
            white: PlayerKind::RandomAi,
            black: PlayerKind::RandomAi,
            seed: Some(seed),
            ..GameConfig::default()
        });
        let outcome = game.play_out(300).unwrap();

        assert!(game.board().is_consistent());
        assert_eq!(game.move_log().len() as u32, game.moves_played());
        assert_eq!(game.board().history().len() as u32, game.moves_played());
        match outcome {
            Some(Outcome::Checkmate { winner }) => {
                assert!(game.board().is_checkmate(winner.opponent()));
            }
            Some(Outcome::Stalemate { stuck }) => {
                assert!(game.board().is_stalemate(stuck));
            }
            None => assert_eq!(game.moves_played(), 300),
        }
    }
}

#[test]
fn new_game_resets_everything() {
    let mut game = Game::new(humans());
    game.click(px("e2")).unwrap();
    game.click(px("e4")).unwrap();
    game.click(px("d7")).unwrap();

    game.new_game();
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.moves_played(), 0);
    assert!(game.move_log().is_empty());
    assert_eq!(game.board().selected(), None);
    assert!(game.board().piece_at(cell("e2")).is_some());

    // the human's half-finished pick-up was forgotten too
    assert_eq!(game.click(px("e2")).unwrap(), None);
    assert!(game.click(px("e4")).unwrap().is_some());
}

#[test]
fn config_from_player_names() {
    let config = GameConfig::from_names("human", "random AI").unwrap();
    assert_eq!(config.white, PlayerKind::Human);
    assert_eq!(config.black, PlayerKind::RandomAi);

    assert_eq!(
        GameConfig::from_names("human", "deep blue").unwrap_err(),
        ConfigError::UnknownPlayer {
            name: "deep blue".to_string()
        }
    );
}

#[test]
fn promoting_a_pawn_placed_on_the_far_rank_keeps_the_move_text() {
    // the a8 pawn was set up there; the king move only triggers the choice
    let mut game = human_game("P6k/8/8/8/8/8/8/K7");

    game.click_cell(cell("a1")).unwrap();
    assert_eq!(game.click_cell(cell("b1")).unwrap(), None);
    assert_eq!(
        game.state(),
        GameState::Promoting {
            pawn: cell("a8")
        }
    );

    let record = game.choose_promotion(PieceType::Queen).unwrap().unwrap();
    assert_eq!(record.promotion, None);
    assert!(record.check);
    assert_eq!(game.move_log(), ["[001] Ka1-b1 check!"]);
    assert_eq!(game.board().history().last(), Some(&record));
    assert_eq!(
        game.board().piece_at(cell("a8")).unwrap().kind(),
        PieceType::Queen
    );
}
