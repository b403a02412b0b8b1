//! Tests for round progression through the public API.

use strictly_tictactoe::{
    GameEngine, Notification, Player, RoundStatus, Session, Square, WinningLine,
};

fn play(engine: &mut GameEngine, moves: &[usize]) -> Vec<Notification> {
    moves.iter().flat_map(|&i| engine.apply_move(i)).collect()
}

/// Finds a move order that completes `line` for `winner` and nothing earlier.
///
/// The loser plays cells off the line, skipping any that would complete a
/// line of their own.
fn moves_completing(line: WinningLine, winner: Player) -> Vec<usize> {
    let line_cells = line.indices();
    let mut engine = GameEngine::new();
    let mut moves = Vec::new();
    if winner == Player::O {
        let opener = (0..9)
            .find(|i| !line_cells.contains(i))
            .expect("a line never covers the board");
        moves.push(opener);
        engine.apply_move(opener);
    }
    for &cell in &line_cells {
        moves.push(cell);
        engine.apply_move(cell);
        if engine.status().is_terminal() {
            break;
        }
        let reply = (0..9)
            .filter(|i| !line_cells.contains(i))
            .find(|&i| {
                engine.check_move(i).is_ok() && {
                    let mut next = engine.clone();
                    next.apply_move(i);
                    !next.status().is_terminal()
                }
            })
            .expect("a safe reply exists");
        moves.push(reply);
        engine.apply_move(reply);
    }
    moves
}

#[test]
fn test_every_line_wins() {
    for winner in [Player::X, Player::O] {
        for line in WinningLine::ALL {
            let mut engine = GameEngine::new();
            let notes = play(&mut engine, &moves_completing(line, winner));
            assert_eq!(
                engine.status(),
                RoundStatus::Won {
                    player: winner,
                    line
                },
                "line {line} for {winner}"
            );
            assert_eq!(
                notes.last(),
                Some(&Notification::RoundWon {
                    player: winner,
                    line,
                    cells: line.indices(),
                })
            );
        }
    }
}

#[test]
fn test_top_row_scenario() {
    let mut session = Session::new();
    let mut last = Vec::new();
    for index in [0, 4, 1, 3, 2] {
        last = session.select_cell(index);
    }
    assert!(last.contains(&Notification::RoundWon {
        player: Player::X,
        line: WinningLine::TopRow,
        cells: [0, 1, 2],
    }));
}

#[test]
fn test_draw_scenario() {
    // X: 0 1 5 6 8, O: 2 3 4 7
    let mut session = Session::new();
    let mut notes = Vec::new();
    for index in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
        notes = session.select_cell(index);
    }
    assert_eq!(session.engine().status(), RoundStatus::Drawn);
    assert!(notes.contains(&Notification::RoundDrawn));
    assert_eq!(session.scorer().tally().draws(), 1);
}

#[test]
fn test_draw_for_every_cell_order() {
    // Fixed final layout with no line, filled in several orders.
    // X O X / X O O / O X X
    let x_cells = [0, 2, 3, 7, 8];
    let o_cells = [1, 4, 5, 6];
    let x_orders = [[0, 2, 3, 7, 8], [8, 7, 3, 2, 0], [3, 0, 8, 2, 7]];
    let o_orders = [[1, 4, 5, 6], [6, 5, 4, 1], [4, 6, 1, 5]];
    for xs in &x_orders {
        for os in &o_orders {
            let mut moves = Vec::new();
            for i in 0..4 {
                moves.push(xs[i]);
                moves.push(os[i]);
            }
            moves.push(xs[4]);

            let mut engine = GameEngine::new();
            let notes = play(&mut engine, &moves);
            assert_eq!(engine.status(), RoundStatus::Drawn, "order {moves:?}");
            assert_eq!(notes.last(), Some(&Notification::RoundDrawn));
            for i in x_cells {
                assert_eq!(engine.board().cell(i), Some(Square::Occupied(Player::X)));
            }
            for i in o_cells {
                assert_eq!(engine.board().cell(i), Some(Square::Occupied(Player::O)));
            }
        }
    }
}

#[test]
fn test_repeat_click_is_noop() {
    let mut engine = GameEngine::new();
    engine.apply_move(0);
    let notes = engine.apply_move(0);
    assert!(notes.is_empty());
    assert_eq!(engine.board().cell(0), Some(Square::Occupied(Player::X)));
    assert_eq!(engine.current_player(), Player::O);
}

#[test]
fn test_start_round_from_any_state() {
    let prefixes: [&[usize]; 4] = [&[], &[4], &[0, 4, 1, 3, 2], &[0, 2, 1, 3, 5, 4, 6, 7, 8]];
    for prefix in prefixes {
        let mut engine = GameEngine::new();
        play(&mut engine, prefix);
        engine.start_round();
        assert!(engine.board().squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.status(), RoundStatus::InProgress);
    }
}

#[test]
fn test_one_result_notification_per_move() {
    let mut engine = GameEngine::new();
    for index in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
        let notes = engine.apply_move(index);
        assert_eq!(notes.len(), 2);
        assert!(matches!(notes[0], Notification::CellMarked { index: i, .. } if i == index));
        assert!(matches!(
            notes[1],
            Notification::TurnChanged { .. } | Notification::RoundDrawn | Notification::RoundWon { .. }
        ));
    }
}
