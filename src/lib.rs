//! A two-player chess rules engine.
//!
//! The crate owns the board, decides whether a requested move is legal,
//! applies it, and ends the game the instant a king is captured.  There is
//! deliberately no move generation, no check or checkmate detection, no
//! castling, en-passant or promotion, and no I/O: a front end hands
//! [`Board::attempt_move`] a color and a pair of squares, and gets back
//! either what the move did or why it was refused.
//!
//! ```
//! use regicide::{Board, BoardStatus, ChessMove, Color, MoveError, MoveOutcome, Square};
//!
//! let mut board = Board::default();
//!
//! // 1. e4
//! let outcome = board.attempt_move(Color::White, ChessMove::new(Square::E2, Square::E4));
//! assert_eq!(outcome, Ok(MoveOutcome::Moved));
//! assert_eq!(board.side_to_move(), Color::Black);
//!
//! // Black tries to slide a bishop through its own pawns.
//! let pinned = board.attempt_move(Color::Black, ChessMove::new(Square::F8, Square::B4));
//! assert_eq!(pinned, Err(MoveError::PathBlocked));
//! assert_eq!(board.status(), BoardStatus::Ongoing);
//! ```

mod board;
mod board_builder;
mod chess_move;
mod color;
mod error;
mod file;
mod piece;
mod rank;
mod square;

pub use crate::board::*;
pub use crate::board_builder::*;
pub use crate::chess_move::*;
pub use crate::color::*;
pub use crate::error::*;
pub use crate::file::*;
pub use crate::piece::*;
pub use crate::rank::*;
pub use crate::square::*;
