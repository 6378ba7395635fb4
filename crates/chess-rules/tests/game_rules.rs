//! End-to-end behavior of the game engine through its public API.

use chess_core::{Color, Piece, PieceKind, Square};
use chess_rules::{
    CastlingRights, Game, GameStatus, MoveKind, MoveResult, Phase, RulesConfig, UndoResult,
};
use proptest::prelude::*;

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

#[test]
fn initial_position_is_standard() {
    let game = Game::new();
    let state = game.current_state();
    assert_eq!(state.side_to_move, Color::White);
    assert_eq!(state.board.count(Color::White), 16);
    assert_eq!(state.board.count(Color::Black), 16);
    assert_eq!(state.castling, CastlingRights::ALL);
    assert_eq!(state.status, GameStatus::InProgress);

    let back_rank = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    for (col, kind) in back_rank.into_iter().enumerate() {
        let col = col as u8;
        assert_eq!(
            state.board.piece_at(Square::at(0, col)),
            Some(Piece::new(kind, Color::Black))
        );
        assert_eq!(
            state.board.piece_at(Square::at(1, col)),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert_eq!(
            state.board.piece_at(Square::at(6, col)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(
            state.board.piece_at(Square::at(7, col)),
            Some(Piece::new(kind, Color::White))
        );
    }
}

#[test]
fn rook_path_blocked_by_own_piece() {
    let game = Game::from_fen("4k3/8/8/8/8/8/8/R2N3K w - - 0 1", RulesConfig::default()).unwrap();
    let destinations = game.legal_destinations(Square::at(7, 0));
    for col in 3..8 {
        assert!(!destinations.contains(&Square::at(7, col)));
    }
    assert!(destinations.contains(&Square::at(7, 1)));
    assert!(destinations.contains(&Square::at(7, 2)));
}

#[test]
fn pawn_steps_from_start() {
    let game = Game::new();
    let destinations = game.legal_destinations(Square::at(6, 3));
    assert_eq!(destinations, vec![Square::at(4, 3), Square::at(5, 3)]);
    assert!(!destinations.contains(&Square::at(5, 4)));

    let blocked = Game::from_fen(
        "rnbqkbnr/pppppppp/8/8/8/3n4/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        RulesConfig::default(),
    )
    .unwrap();
    assert!(blocked.legal_destinations(Square::at(6, 3)).is_empty());

    let capture = Game::from_fen(
        "rnbqkbnr/pppppppp/8/8/8/4p3/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        RulesConfig::default(),
    )
    .unwrap();
    assert!(capture
        .legal_destinations(Square::at(6, 3))
        .contains(&Square::at(5, 4)));
}

#[test]
fn move_exposing_king_is_rejected_without_change() {
    let mut game = Game::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1", RulesConfig::default())
        .unwrap();
    let before = game.current_state();
    let result = game.attempt_move(sq("e2"), sq("c3"));
    assert!(matches!(result, MoveResult::Rejected(_)));
    let after = game.current_state();
    assert_eq!(after.board, before.board);
    assert_eq!(after.side_to_move, before.side_to_move);
    assert_eq!(after.castling, before.castling);
    assert_eq!(game.ply_count(), 0);
}

#[test]
fn fools_mate() {
    let mut game = Game::new();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
        assert_eq!(game.attempt_move(sq(from), sq(to)), MoveResult::Applied);
    }
    assert_eq!(
        game.attempt_move(sq("d8"), sq("h4")),
        MoveResult::Checkmate(Color::Black)
    );
    assert_eq!(
        game.current_state().status,
        GameStatus::Checkmate(Color::Black)
    );
    assert!(game.is_check());
}

#[test]
fn kingside_castle_moves_rook_in_same_commit() {
    let mut game = Game::from_fen(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQK2R w KQkq - 0 1",
        RulesConfig::default(),
    )
    .unwrap();
    let king = Square::at(7, 4);
    assert!(game.legal_destinations(king).contains(&Square::at(7, 6)));

    let result = game.attempt_move(king, Square::at(7, 6));
    assert_eq!(
        result,
        MoveResult::AppliedWithCastle {
            rook_from: Square::at(7, 7),
            rook_to: Square::at(7, 5),
        }
    );
    let board = game.board();
    assert_eq!(
        board.piece_at(Square::at(7, 5)),
        Some(Piece::new(PieceKind::Rook, Color::White))
    );
    assert_eq!(
        board.piece_at(Square::at(7, 6)),
        Some(Piece::new(PieceKind::King, Color::White))
    );
    assert!(board.is_vacant(Square::at(7, 7)));
    assert!(board.is_vacant(Square::at(7, 4)));
}

#[test]
fn standard_policy_forgets_castling_after_king_returns() {
    let fen = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1";
    let moves = [("e1", "f1"), ("e8", "f8"), ("f1", "e1"), ("f8", "e8")];

    let mut standard = Game::from_fen(fen, RulesConfig::default()).unwrap();
    let mut legacy = Game::from_fen(fen, RulesConfig::LEGACY).unwrap();
    for game in [&mut standard, &mut legacy] {
        for (from, to) in moves {
            assert!(game.attempt_move(sq(from), sq(to)).is_applied());
        }
        assert_eq!(game.castling(), CastlingRights::NONE);
    }

    assert!(!standard.legal_destinations(sq("e1")).contains(&sq("g1")));
    assert!(legacy.legal_destinations(sq("e1")).contains(&sq("g1")));
    assert!(legacy
        .legal_moves(sq("e1"))
        .iter()
        .any(|m| matches!(m.kind, MoveKind::Castle(_))));
}

#[test]
fn undo_leaves_game_over() {
    let mut game = Game::from_fen("6k1/5ppp/8/8/8/8/8/3R2K1 w - - 0 1", RulesConfig::default())
        .unwrap();
    assert_eq!(
        game.attempt_move(sq("d1"), sq("d8")),
        MoveResult::Checkmate(Color::White)
    );
    assert_eq!(game.phase(), Phase::GameOver(Color::White));
    assert_eq!(game.undo(), UndoResult::Restored);
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(game.side_to_move(), Color::White);
    assert!(!game.legal_destinations(sq("d1")).is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn moves_then_undos_restore_the_start(choices in prop::collection::vec(any::<u16>(), 1..24)) {
        let mut game = Game::new();
        let start = game.position().clone();

        let mut applied = 0;
        for choice in choices {
            let moves = game.all_legal_moves();
            if moves.is_empty() {
                break;
            }
            let m = moves[choice as usize % moves.len()];
            let result = game.attempt_move(m.from, m.to);
            prop_assert!(result.is_applied(), "legal move {} rejected: {:?}", m, result);
            applied += 1;
        }

        prop_assert_eq!(game.ply_count(), applied);
        for _ in 0..applied {
            prop_assert_eq!(game.undo(), UndoResult::Restored);
        }
        prop_assert_eq!(game.undo(), UndoResult::NoHistory);
        prop_assert_eq!(game.position(), &start);
        prop_assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn rejected_moves_change_nothing(from in 0u8..64, to in 0u8..64) {
        let mut game = Game::new();
        for (a, b) in [("e2", "e4"), ("e7", "e5"), ("d1", "h5")] {
            game.attempt_move(sq(a), sq(b));
        }
        let before = game.position().clone();
        let plies = game.ply_count();

        let from = Square::from_index(from).unwrap();
        let to = Square::from_index(to).unwrap();
        let legal = game.legal_destinations(from).contains(&to);
        let result = game.attempt_move(from, to);

        prop_assert_eq!(result.is_applied(), legal);
        if !legal {
            prop_assert_eq!(game.position(), &before);
            prop_assert_eq!(game.ply_count(), plies);
        }
    }
}
