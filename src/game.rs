use crate::board::Board;
use crate::display_format::DisplayFormat;
use crate::location::{Location, Move};
use crate::piece::{Piece, Side};
use crate::rules::{self, MoveError};
use log::{debug, info};
use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Status {
    Ongoing,
    RedWins,
    GreenWins,
    Draw,
}

impl Status {
    pub fn winner(&self) -> Option<Side> {
        match self {
            Status::RedWins => Some(Side::Red),
            Status::GreenWins => Some(Side::Green),
            _ => None,
        }
    }

    fn wins(side: Side) -> Status {
        match side {
            Side::Red => Status::RedWins,
            Side::Green => Status::GreenWins,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum EndReason {
    None,
    DenCaptured,
    AllCaptured,
    TurnLimit,
}

impl Display for EndReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            EndReason::None => "ongoing",
            EndReason::DenCaptured => "den captured",
            EndReason::AllCaptured => "all animals captured",
            EndReason::TurnLimit => "too many turns without capture",
        };
        write!(f, "{reason}")
    }
}

/// One game of Jungle chess: the board plus turn ownership, the quiet-turn
/// counter, and the terminal status. The single entry point for callers is
/// [`Game::make_move`]; a rejected move leaves everything untouched.
pub struct Game {
    board: Board,
    turn: Side,
    status: Status,
    end_reason: EndReason,
    quiet_turns: u32,
    last_move: Option<Move>,
}

impl Game {
    pub const MAX_QUIET_TURNS: u32 = 30;

    pub fn new(board: Board, turn: Side) -> Self {
        Self {
            board,
            turn,
            status: Status::Ongoing,
            end_reason: EndReason::None,
            quiet_turns: 0,
            last_move: None,
        }
    }

    pub fn opening() -> Self {
        Self::new(Board::opening(), Side::Red)
    }

    pub fn from_fen(fen: &str, turn: Side) -> Option<Self> {
        Some(Self::new(Board::from_fen(fen)?, turn))
    }

    pub fn fen(&self) -> (String, Side) {
        (self.board.fen(), self.turn)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn end_reason(&self) -> EndReason {
        self.end_reason
    }

    pub fn captured_by(&self, side: Side) -> &[Piece] {
        self.board.captured_by(side)
    }

    /// Moves left before the no-capture limit forces a draw.
    pub fn turns_until_draw(&self) -> u32 {
        Self::MAX_QUIET_TURNS.saturating_sub(self.quiet_turns)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        rules::iter_legal_moves(&self.board, self.turn).collect()
    }

    /// Attempts a full move for the side to play: legality check, board
    /// mutation, then the terminal-condition scan. Returns the capture, if
    /// one was made.
    pub fn make_move(&mut self, mv: Move) -> Result<Option<Piece>, MoveError> {
        if self.status != Status::Ongoing {
            return Err(MoveError::GameOver);
        }

        if let Err(error) = rules::validate(&self.board, self.turn, mv) {
            debug!("rejected {mv} for {}: {error}", self.turn);
            return Err(error);
        }

        let (piece, capture) = self.board.play(mv);
        self.last_move = Some(mv);

        if capture.is_some() {
            self.quiet_turns = 0;
        } else {
            self.quiet_turns += 1;
        }

        info!(
            "{} played {} {mv}{}",
            self.turn,
            piece.kind().name(),
            match capture {
                Some(capture) => format!(", taking {}", capture.kind().name()),
                None => String::new(),
            }
        );

        self.update_status();

        if self.status == Status::Ongoing {
            self.turn = self.turn.opponent();
        } else {
            info!("game over: {:?}, {}", self.status, self.end_reason);
        }

        Ok(capture)
    }

    /// [`Game::make_move`] over raw coordinates, the form presentation
    /// layers call with untrusted input.
    pub fn make_move_rc(&mut self, from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> Result<Option<Piece>, MoveError> {
        let from = Location::from_rc(from_row, from_col).ok_or(MoveError::OutOfBounds)?;
        let to = Location::from_rc(to_row, to_col).ok_or(MoveError::OutOfBounds)?;
        self.make_move(Move { from, to })
    }

    fn update_status(&mut self) {
        if let Some((intruder, _owner)) = self.board.den_intruder() {
            self.status = Status::wins(intruder);
            self.end_reason = EndReason::DenCaptured;
            return;
        }

        for side in [Side::Red, Side::Green] {
            if self.board.count_pieces(side) == 0 {
                self.status = Status::wins(side.opponent());
                self.end_reason = EndReason::AllCaptured;
                return;
            }
        }

        if self.quiet_turns >= Self::MAX_QUIET_TURNS {
            self.status = Status::Draw;
            self.end_reason = EndReason::TurnLimit;
        }
    }

    pub fn display(&self, format: DisplayFormat) -> impl Display + '_ {
        struct Impl<'a>(&'a Game, DisplayFormat);
        return Impl(self, format);

        impl Impl<'_> {
            fn format_row(&self, f: &mut Formatter<'_>, row: i8) -> std::fmt::Result {
                let &Self(game, format) = self;
                write!(f, "{row}")?;

                for col in 0..Board::COLS {
                    let location = Location::from_rc(row, col).unwrap();
                    if let Some(piece) = game.board[location] {
                        let piece = piece.display(format.unicode);
                        if format.effects && game.last_move.is_some_and(|mv| mv.to == location) {
                            write!(f, " \x1B[3m{piece}\x1B[0m")?;
                        } else {
                            write!(f, " {piece}")?;
                        }
                    } else if game.last_move.is_some_and(|mv| mv.from == location) {
                        write!(f, " ╶╴")?;
                    } else {
                        write!(f, " {}", game.board.terrain(location).marker())?;
                    }
                }

                Ok(())
            }

            fn format_captured(&self, f: &mut Formatter<'_>, side: Side) -> std::fmt::Result {
                let &Self(game, format) = self;
                let captured = game.captured_by(side);
                if captured.is_empty() {
                    return Ok(());
                }

                write!(f, "{side} took ")?;
                for piece in captured {
                    write!(f, "{} ", piece.display(format.unicode))?;
                }
                writeln!(f)
            }
        }

        impl Display for Impl<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                let &Self(game, format) = self;
                write!(f, "{}", game.board.fen())?;

                if format.concise {
                    return write!(f, " {}", game.turn);
                }

                writeln!(f)?;

                for row in 0..Board::ROWS {
                    self.format_row(f, row)?;
                    writeln!(f)?;
                }

                for char in 'a'..='g' {
                    write!(f, "  {char}")?;
                }
                writeln!(f)?;

                self.format_captured(f, Side::Red)?;
                self.format_captured(f, Side::Green)?;

                match game.status {
                    Status::Ongoing => writeln!(
                        f,
                        "{} to play, {} moves until forced draw",
                        game.turn,
                        game.turns_until_draw()
                    ),
                    Status::Draw => writeln!(f, "draw, {}", game.end_reason),
                    _ => writeln!(
                        f,
                        "{} won, {}",
                        game.status.winner().unwrap(),
                        game.end_reason
                    ),
                }
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::opening()
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(DisplayFormat::string()))
    }
}
