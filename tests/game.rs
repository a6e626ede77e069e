use jungle_chess::game::{EndReason, Game, Status};
use jungle_chess::location::Move;
use jungle_chess::piece::{AnimalKind, Side};
use jungle_chess::rules::MoveError;

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

fn snapshot(game: &Game) -> (String, Side, usize, usize) {
    let (fen, turn) = game.fen();
    (
        fen,
        turn,
        game.captured_by(Side::Red).len(),
        game.captured_by(Side::Green).len(),
    )
}

#[test]
fn red_moves_first_and_turns_alternate() {
    let mut game = Game::opening();
    assert_eq!(game.turn(), Side::Red);

    game.make_move(mv("g6g5")).unwrap();
    assert_eq!(game.turn(), Side::Green);

    game.make_move(mv("a2a3")).unwrap();
    assert_eq!(game.turn(), Side::Red);
}

#[test]
fn rejected_move_leaves_state_untouched() {
    let mut game = Game::opening();
    let before = snapshot(&game);

    assert_eq!(game.make_move(mv("a0a1")), Err(MoveError::NotOwnPiece));
    assert_eq!(game.make_move(mv("d4d5")), Err(MoveError::EmptySource));
    assert_eq!(game.make_move_rc(9, 0, 8, 0), Err(MoveError::OutOfBounds));
    assert_eq!(game.make_move_rc(0, 0, 0, 7), Err(MoveError::OutOfBounds));

    assert_eq!(snapshot(&game), before);
    assert_eq!(game.status(), Status::Ongoing);
    assert_eq!(game.end_reason(), EndReason::None);
}

#[test]
fn den_capture_ends_the_game() {
    // Red wolf one step from the green den, a green piece elsewhere
    let mut game = Game::from_fen("7/3W3/7/7/7/7/7/7/6l", Side::Red).unwrap();

    game.make_move(mv("d1d0")).unwrap();
    assert_eq!(game.status(), Status::RedWins);
    assert_eq!(game.end_reason(), EndReason::DenCaptured);

    // Terminal status absorbs: the winner stays on turn, nothing moves
    assert_eq!(game.make_move(mv("g8g7")), Err(MoveError::GameOver));
    assert_eq!(game.make_move(mv("d0d1")), Err(MoveError::GameOver));
}

#[test]
fn green_can_capture_the_red_den_too() {
    let mut game = Game::from_fen("7/7/7/7/7/7/7/3w3/6L", Side::Green).unwrap();
    game.make_move(mv("d7d8")).unwrap();
    assert_eq!(game.status(), Status::GreenWins);
    assert_eq!(game.end_reason(), EndReason::DenCaptured);
}

#[test]
fn capturing_every_animal_wins() {
    let mut game = Game::from_fen("7/7/7/7/3L3/3w3/7/7/7", Side::Red).unwrap();

    let capture = game.make_move(mv("d4d5")).unwrap();
    assert_eq!(capture.map(|piece| piece.kind()), Some(AnimalKind::Wolf));
    assert_eq!(game.status(), Status::RedWins);
    assert_eq!(game.end_reason(), EndReason::AllCaptured);
    assert_eq!(game.captured_by(Side::Red).len(), 1);
}

#[test]
fn thirty_quiet_turns_draw_the_game() {
    let mut game = Game::from_fen("6l/7/7/7/7/7/7/7/L6", Side::Red).unwrap();
    let shuffle = [mv("a8a7"), mv("g0g1"), mv("a7a8"), mv("g1g0")];

    for ply in 0..30 {
        assert_eq!(game.status(), Status::Ongoing);
        assert_eq!(game.turns_until_draw(), 30 - ply);
        game.make_move(shuffle[ply as usize % 4]).unwrap();
    }

    assert_eq!(game.status(), Status::Draw);
    assert_eq!(game.end_reason(), EndReason::TurnLimit);
    assert_eq!(game.turns_until_draw(), 0);
    assert_eq!(game.make_move(mv("a8a7")), Err(MoveError::GameOver));
}

#[test]
fn capture_resets_the_quiet_counter() {
    let mut game = Game::from_fen("6l/7/7/7/3D3/3c3/7/7/L6", Side::Red).unwrap();

    game.make_move(mv("a8a7")).unwrap();
    game.make_move(mv("g0g1")).unwrap();
    assert_eq!(game.turns_until_draw(), 28);

    game.make_move(mv("d4d5")).unwrap();
    assert_eq!(game.turns_until_draw(), 30);
}

#[test]
fn fen_round_trip_through_play() {
    let mut game = Game::opening();
    game.make_move(mv("g6g5")).unwrap();

    let (fen, turn) = game.fen();
    let restored = Game::from_fen(&fen, turn).unwrap();
    assert_eq!(restored.fen().0, fen);
    assert_eq!(restored.turn(), Side::Green);
}

#[test]
fn first_move_self_play_reaches_a_verdict() {
    let mut game = Game::opening();
    let mut plies = 0;

    while game.status() == Status::Ongoing {
        let moves = game.legal_moves();
        let Some(&choice) = moves.first() else { break };
        game.make_move(choice).unwrap();

        let live = game.board().count_pieces(Side::Red) + game.board().count_pieces(Side::Green);
        let taken = game.captured_by(Side::Red).len() + game.captured_by(Side::Green).len();
        assert_eq!(live + taken, 16);

        plies += 1;
        assert!(plies < 1000, "self play must terminate");
    }

    assert!(game.status() != Status::Ongoing || game.legal_moves().is_empty());
    if game.status() != Status::Ongoing {
        assert_ne!(game.end_reason(), EndReason::None);
    }
}
