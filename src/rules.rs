use crate::board::Board;
use crate::location::{Location, Move};
use crate::piece::{AnimalKind, Piece, Side};
use crate::square::Terrain;
use thiserror::Error;

/// Why a proposed move was rejected. Rejections are expected outcomes, not
/// faults; the evaluator surfaces the first applicable reason and leaves the
/// board untouched.
#[derive(Error, Copy, Clone, Eq, PartialEq, Debug)]
pub enum MoveError {
    #[error("coordinates outside of board bounds")]
    OutOfBounds,
    #[error("no animal at the source square")]
    EmptySource,
    #[error("you can only move your own animals")]
    NotOwnPiece,
    #[error("{0} cannot enter the river")]
    RiverEntry(&'static str),
    #[error("tiger cannot jump over the river horizontally")]
    TigerHorizontalLeap,
    #[error("{0} cannot jump over the river, a rat is in the path")]
    LeapBlockedByRat(&'static str),
    #[error("cannot move your animal into your own den")]
    OwnDen,
    #[error("rat cannot capture elephant when coming out of the river")]
    RatExitingRiverCannotCaptureElephant,
    #[error("elephant cannot capture rat")]
    ElephantCannotCaptureRat,
    #[error("{attacker} cannot capture {defender}")]
    CannotCaptureRank {
        attacker: &'static str,
        defender: &'static str,
    },
    #[error("cannot capture this animal")]
    CannotCapture,
    #[error("invalid move for this animal")]
    InvalidMove,
    #[error("the game is already over")]
    GameOver,
}

/// Rank used in capture comparisons: zeroed while the piece stands on a trap
/// owned by the enemy, the base rank everywhere else.
pub fn effective_rank(board: &Board, piece: Piece, location: Location) -> i8 {
    match board.terrain(location) {
        Terrain::Trap(owner) if owner != piece.side() => 0,
        _ => piece.rank(),
    }
}

/// Whether `attacker` standing at `from` may take `defender` standing at `to`.
pub fn can_capture(board: &Board, attacker: Piece, from: Location, defender: Piece, to: Location) -> bool {
    if attacker.side() == defender.side() {
        return false;
    }

    let from_river = board.terrain(from).is_river();
    match (attacker.kind(), defender.kind()) {
        // The rat beats the elephant outright, but not out of the water
        (AnimalKind::Rat, AnimalKind::Elephant) => return !from_river,
        (AnimalKind::Elephant, AnimalKind::Rat) => return false,
        _ => {}
    }

    // A land piece cannot reach into the river
    if board.terrain(to).is_river() && !from_river {
        return false;
    }

    effective_rank(board, attacker, from) >= effective_rank(board, defender, to)
}

/// Cells strictly between the two ends of a straight move, walking from
/// `from` towards `to`. `None` when the move is not along one axis.
fn between(mv: Move) -> Option<impl Iterator<Item = Location>> {
    let row_delta = mv.to.row() - mv.from.row();
    let col_delta = mv.to.col() - mv.from.col();
    if row_delta != 0 && col_delta != 0 {
        return None;
    }

    let steps = (row_delta + col_delta).unsigned_abs().saturating_sub(1);
    let (row_step, col_step) = (row_delta.signum(), col_delta.signum());
    let from = mv.from;
    Some((1..=steps as i8).map(move |i| from.shift(row_step * i, col_step * i).unwrap()))
}

/// Whether a rat of either side sits on a river cell along the leap path.
fn leap_blocked_by_rat(board: &Board, mv: Move) -> bool {
    let Some(mut path) = between(mv) else { return false };
    path.any(|location| {
        board.terrain(location).is_river()
            && board[location].is_some_and(|piece| piece.kind() == AnimalKind::Rat)
    })
}

/// Full leap-shape test: a straight run of at least one river cell, free of
/// rats, with the mover landing on the first land cell beyond.
fn is_valid_leap(board: &Board, piece: Piece, mv: Move) -> bool {
    let horizontal = mv.from.row() == mv.to.row();
    if !piece.kind().can_leap(horizontal) {
        return false;
    }

    let Some(path) = between(mv) else { return false };
    let mut length = 0;
    for location in path {
        if !board.terrain(location).is_river() {
            return false;
        }
        if board[location].is_some_and(|blocker| blocker.kind() == AnimalKind::Rat) {
            return false;
        }
        length += 1;
    }

    length >= 1 && board.terrain(mv.to).is_land()
}

/// Composite movement gate: the piece-specific shape plus terrain entry and
/// destination occupancy, mirroring the per-animal movement rules.
fn is_valid_movement(board: &Board, piece: Piece, mv: Move) -> bool {
    let reachable = if mv.from.is_adjacent(mv.to) {
        board.terrain(mv.to).can_enter(piece)
    } else {
        is_valid_leap(board, piece, mv) && board.terrain(mv.to).can_enter(piece)
    };

    reachable
        && match board[mv.to] {
            Some(defender) => can_capture(board, piece, mv.from, defender, mv.to),
            None => true,
        }
}

/// Evaluates a proposed move for `side`, returning the first applicable
/// rejection. Pure: never mutates the board.
pub fn validate(board: &Board, side: Side, mv: Move) -> Result<(), MoveError> {
    let piece = board[mv.from].ok_or(MoveError::EmptySource)?;

    if piece.side() != side {
        return Err(MoveError::NotOwnPiece);
    }

    let terrain = board.terrain(mv.to);

    if terrain.is_river() && !piece.kind().is_aquatic() {
        return Err(MoveError::RiverEntry(piece.kind().name()));
    }

    // Leap pre-checks, with their own diagnostics before the composite gate
    if matches!(piece.kind(), AnimalKind::Lion | AnimalKind::Tiger) && !mv.from.is_adjacent(mv.to) {
        let horizontal = mv.from.row() == mv.to.row();
        if piece.kind() == AnimalKind::Tiger && horizontal && (mv.from.col() - mv.to.col()).abs() > 1 {
            return Err(MoveError::TigerHorizontalLeap);
        }

        let leap_axis = piece.kind() == AnimalKind::Lion || !horizontal;
        if leap_axis && leap_blocked_by_rat(board, mv) {
            return Err(MoveError::LeapBlockedByRat(piece.kind().name()));
        }
    }

    if terrain == Terrain::Den(side) {
        return Err(MoveError::OwnDen);
    }

    if let Some(defender) = board[mv.to] {
        if defender.side() != side {
            let exiting_river =
                board.terrain(mv.from).is_river() && board.terrain(mv.to).is_land();
            if piece.kind() == AnimalKind::Rat && defender.kind() == AnimalKind::Elephant && exiting_river {
                return Err(MoveError::RatExitingRiverCannotCaptureElephant);
            }

            if !can_capture(board, piece, mv.from, defender, mv.to) {
                if piece.kind() == AnimalKind::Elephant && defender.kind() == AnimalKind::Rat {
                    return Err(MoveError::ElephantCannotCaptureRat);
                }
                if effective_rank(board, piece, mv.from) < effective_rank(board, defender, mv.to) {
                    return Err(MoveError::CannotCaptureRank {
                        attacker: piece.kind().name(),
                        defender: defender.kind().name(),
                    });
                }
                return Err(MoveError::CannotCapture);
            }
        }
    }

    if !is_valid_movement(board, piece, mv) {
        return Err(MoveError::InvalidMove);
    }

    Ok(())
}

const DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Landing cell of a river leap from `from` along one direction: the first
/// land cell past a non-empty run of river cells.
fn leap_landing(board: &Board, from: Location, direction: (i8, i8)) -> Option<Location> {
    let mut current = from.shift(direction.0, direction.1)?;
    if !board.terrain(current).is_river() {
        return None;
    }

    while board.terrain(current).is_river() {
        current = current.shift(direction.0, direction.1)?;
    }
    Some(current)
}

/// All legal moves for `side` in the current position.
pub fn iter_legal_moves<'a>(board: &'a Board, side: Side) -> impl Iterator<Item = Move> + 'a {
    board.iter_pieces(side).flat_map(move |(from, piece)| {
        let mut targets = Vec::with_capacity(8);

        for direction in DIRECTIONS {
            targets.extend(from.shift(direction.0, direction.1));
            if matches!(piece.kind(), AnimalKind::Lion | AnimalKind::Tiger) {
                targets.extend(leap_landing(board, from, direction));
            }
        }

        targets
            .into_iter()
            .map(move |to| Move { from, to })
            .filter(move |&mv| validate(board, side, mv).is_ok())
    })
}
