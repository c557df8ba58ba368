use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};

use std::ops::{Index, IndexMut};

/// Represents a chess position that has *not* been validated for playability.
///
/// This structure is useful in the following cases:
/// * You are trying to set up a position manually in code, say for a test.
/// * The `Board` structure only accepts positions that pass its sanity
///   checks.  This structure will hold anything.
///
/// Note that a builder describes a *position*, not a history: every piece on
/// a board built from it starts with a fresh move counter, so a pawn placed
/// on its second rank is again eligible for the two-square advance.
///
/// ```
/// use regicide::{Board, BoardBuilder, Color, Piece, Square};
/// use std::convert::TryInto;
///
/// let mut position = BoardBuilder::new();
/// position.piece(Square::A1, Piece::Rook, Color::White);
/// position.piece(Square::A4, Piece::Pawn, Color::Black);
///
/// // You can index the position by the square:
/// assert_eq!(position[Square::A1], Some((Piece::Rook, Color::White)));
///
/// // One liners are possible with the builder pattern.
/// let board: Board = BoardBuilder::new()
///     .piece(Square::E1, Piece::King, Color::White)
///     .piece(Square::E8, Piece::King, Color::Black)
///     .try_into()
///     .unwrap();
/// ```
#[derive(Copy, Clone)]
pub struct BoardBuilder {
    pieces: [Option<(Piece, Color)>; NUM_SQUARES],
    side_to_move: Color,
}

impl BoardBuilder {
    /// Construct a new, empty, BoardBuilder.
    ///
    /// * No pieces are on the board
    /// * `side_to_move` is Color::White
    pub fn new() -> BoardBuilder {
        BoardBuilder {
            pieces: [None; NUM_SQUARES],
            side_to_move: Color::White,
        }
    }

    /// Get the current player
    ///
    /// ```
    /// use regicide::{Board, BoardBuilder, Color};
    ///
    /// let bb: BoardBuilder = Board::default().into();
    /// assert_eq!(bb.get_side_to_move(), Color::White);
    /// ```
    pub fn get_side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Set the side to move on the position
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn side_to_move<'a>(&'a mut self, color: Color) -> &'a mut Self {
        self.side_to_move = color;
        self
    }

    /// Set a piece on a square.
    ///
    /// Note that this can and will overwrite another piece on the square if
    /// needed.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn piece<'a>(&'a mut self, square: Square, piece: Piece, color: Color) -> &'a mut Self {
        self[square] = Some((piece, color));
        self
    }

    /// Clear a square on the board.
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn clear_square<'a>(&'a mut self, square: Square) -> &'a mut Self {
        self[square] = None;
        self
    }
}

impl Index<Square> for BoardBuilder {
    type Output = Option<(Piece, Color)>;

    fn index<'a>(&'a self, index: Square) -> &'a Self::Output {
        &self.pieces[index.to_index()]
    }
}

impl IndexMut<Square> for BoardBuilder {
    fn index_mut<'a>(&'a mut self, index: Square) -> &'a mut Self::Output {
        &mut self.pieces[index.to_index()]
    }
}

impl Default for BoardBuilder {
    /// The starting position as a builder.
    fn default() -> BoardBuilder {
        BoardBuilder::from(&Board::default())
    }
}

impl From<&Board> for BoardBuilder {
    fn from(board: &Board) -> Self {
        let mut result = BoardBuilder::new();
        result.side_to_move(board.side_to_move());
        for square in ALL_SQUARES.iter() {
            if let Some(placed) = board.piece_on(*square) {
                result.piece(*square, placed.get_piece(), placed.get_color());
            }
        }
        result
    }
}

impl From<Board> for BoardBuilder {
    fn from(board: Board) -> Self {
        (&board).into()
    }
}
