use crate::color::Color;
use crate::square::Square;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a chess piece as a very simple enum
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// How many piece types are there?
pub const NUM_PIECES: usize = 6;

/// An array representing each piece type, in order of ascending value.
pub const ALL_PIECES: [Piece; NUM_PIECES] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
    Piece::King,
];

impl Piece {
    /// Convert the `Piece` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// Convert a piece with a color to a string.  White pieces are uppercase, black pieces are
    /// lowercase.
    ///
    /// ```
    /// use regicide::{Color, Piece};
    ///
    /// assert_eq!(Piece::King.to_string(Color::White), "K");
    /// assert_eq!(Piece::Knight.to_string(Color::Black), "n");
    /// ```
    #[inline]
    pub fn to_string(&self, color: Color) -> String {
        let piece = format!("{}", self);
        if color == Color::White {
            piece.to_uppercase()
        } else {
            piece
        }
    }

    /// Can this piece travel from `from` to `to` on an otherwise empty board?
    ///
    /// This is the movement-shape half of move legality: pure geometry on the
    /// file/rank deltas, with no knowledge of what else stands on the board.
    /// Whether the path is clear, and whether the destination may be landed
    /// on, are the `Board`'s business.
    ///
    /// `color` and `has_moved` only matter for the pawn, whose forward
    /// direction depends on its color and whose two-square advance is spent
    /// after its first move.  A pawn's diagonal step is a valid *shape* here
    /// even though the board will only allow it as a capture.
    ///
    /// Every kind rejects the null move.
    ///
    /// ```
    /// use regicide::{Color, Piece, Square};
    ///
    /// assert!(Piece::Knight.can_reach(Square::G1, Square::F3, Color::White, false));
    /// assert!(Piece::Pawn.can_reach(Square::E2, Square::E4, Color::White, false));
    /// assert!(!Piece::Pawn.can_reach(Square::E2, Square::E4, Color::White, true));
    /// assert!(!Piece::Rook.can_reach(Square::A1, Square::B3, Color::White, false));
    /// ```
    pub fn can_reach(&self, from: Square, to: Square, color: Color, has_moved: bool) -> bool {
        let file_delta = to.get_file().to_index() as i8 - from.get_file().to_index() as i8;
        let rank_delta = to.get_rank().to_index() as i8 - from.get_rank().to_index() as i8;

        if file_delta == 0 && rank_delta == 0 {
            return false;
        }

        match *self {
            Piece::Pawn => {
                let forward = match color {
                    Color::White => 1,
                    Color::Black => -1,
                };
                if file_delta == 0 {
                    rank_delta == forward || (!has_moved && rank_delta == 2 * forward)
                } else {
                    file_delta.abs() == 1 && rank_delta == forward
                }
            }
            Piece::Knight => {
                (file_delta.abs() == 1 && rank_delta.abs() == 2)
                    || (file_delta.abs() == 2 && rank_delta.abs() == 1)
            }
            Piece::Bishop => file_delta.abs() == rank_delta.abs(),
            Piece::Rook => file_delta == 0 || rank_delta == 0,
            Piece::Queen => {
                file_delta.abs() == rank_delta.abs() || file_delta == 0 || rank_delta == 0
            }
            Piece::King => file_delta.abs() <= 1 && rank_delta.abs() <= 1,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                Piece::Pawn => "p",
                Piece::Knight => "n",
                Piece::Bishop => "b",
                Piece::Rook => "r",
                Piece::Queen => "q",
                Piece::King => "k",
            }
        )
    }
}

/// A piece standing on the board: its kind, its owner, and how many times it
/// has moved.
///
/// An empty square is the *absence* of a `PlacedPiece`, never some dead
/// placeholder value, so there is no alive flag to forget to check.  The move
/// counter increments exactly once per successful move of this instance and
/// never resets; only the pawn's two-square eligibility reads it.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub struct PlacedPiece {
    piece: Piece,
    color: Color,
    moves: u32,
}

impl PlacedPiece {
    /// Place a new piece.  It has not moved yet.
    #[inline]
    pub fn new(piece: Piece, color: Color) -> PlacedPiece {
        PlacedPiece {
            piece: piece,
            color: color,
            moves: 0,
        }
    }

    /// What kind of piece is this?
    #[inline]
    pub fn get_piece(&self) -> Piece {
        self.piece
    }

    /// Who owns this piece?
    #[inline]
    pub fn get_color(&self) -> Color {
        self.color
    }

    /// Has this piece moved at least once?
    #[inline]
    pub fn has_moved(&self) -> bool {
        self.moves > 0
    }

    /// How many times has this piece moved?
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    /// The movement-shape predicate for this piece, with its color and
    /// first-move state filled in.
    #[inline]
    pub fn can_reach(&self, from: Square, to: Square) -> bool {
        self.piece.can_reach(from, to, self.color, self.has_moved())
    }

    /// Bump the move counter.  Called by the board once per applied move.
    #[inline]
    pub(crate) fn record_move(&mut self) {
        self.moves += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::ALL_SQUARES;

    fn deltas(from: Square, to: Square) -> (i8, i8) {
        (
            to.get_file().to_index() as i8 - from.get_file().to_index() as i8,
            to.get_rank().to_index() as i8 - from.get_rank().to_index() as i8,
        )
    }

    #[test]
    fn nobody_reaches_their_own_square() {
        for piece in ALL_PIECES.iter() {
            for square in ALL_SQUARES.iter() {
                assert!(!piece.can_reach(*square, *square, Color::White, false));
                assert!(!piece.can_reach(*square, *square, Color::Black, true));
            }
        }
    }

    #[test]
    fn knight_geometry() {
        for from in ALL_SQUARES.iter() {
            for to in ALL_SQUARES.iter() {
                let (df, dr) = deltas(*from, *to);
                let expected =
                    (df.abs() == 1 && dr.abs() == 2) || (df.abs() == 2 && dr.abs() == 1);
                assert_eq!(
                    Piece::Knight.can_reach(*from, *to, Color::White, false),
                    expected
                );
            }
        }
        // spot check the full move set from a corner
        let reachable: Vec<Square> = ALL_SQUARES
            .iter()
            .cloned()
            .filter(|to| Piece::Knight.can_reach(Square::A1, *to, Color::Black, false))
            .collect();
        assert_eq!(reachable, vec![Square::C2, Square::B3]);
    }

    #[test]
    fn king_geometry() {
        for from in ALL_SQUARES.iter() {
            for to in ALL_SQUARES.iter() {
                let (df, dr) = deltas(*from, *to);
                let expected = (df != 0 || dr != 0) && df.abs() <= 1 && dr.abs() <= 1;
                assert_eq!(
                    Piece::King.can_reach(*from, *to, Color::White, false),
                    expected
                );
            }
        }
    }

    #[test]
    fn rook_geometry() {
        for from in ALL_SQUARES.iter() {
            for to in ALL_SQUARES.iter() {
                let (df, dr) = deltas(*from, *to);
                let expected = (df == 0) != (dr == 0);
                assert_eq!(
                    Piece::Rook.can_reach(*from, *to, Color::White, false),
                    expected
                );
            }
        }
    }

    #[test]
    fn bishop_geometry() {
        for from in ALL_SQUARES.iter() {
            for to in ALL_SQUARES.iter() {
                let (df, dr) = deltas(*from, *to);
                let expected = df != 0 && df.abs() == dr.abs();
                assert_eq!(
                    Piece::Bishop.can_reach(*from, *to, Color::White, false),
                    expected
                );
            }
        }
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        for from in ALL_SQUARES.iter() {
            for to in ALL_SQUARES.iter() {
                let expected = Piece::Rook.can_reach(*from, *to, Color::White, false)
                    || Piece::Bishop.can_reach(*from, *to, Color::White, false);
                assert_eq!(
                    Piece::Queen.can_reach(*from, *to, Color::White, false),
                    expected
                );
            }
        }
    }

    #[test]
    fn pawn_geometry_white_unmoved() {
        let reachable: Vec<Square> = ALL_SQUARES
            .iter()
            .cloned()
            .filter(|to| Piece::Pawn.can_reach(Square::E2, *to, Color::White, false))
            .collect();
        assert_eq!(
            reachable,
            vec![Square::D3, Square::E3, Square::F3, Square::E4]
        );
    }

    #[test]
    fn pawn_geometry_white_moved() {
        let reachable: Vec<Square> = ALL_SQUARES
            .iter()
            .cloned()
            .filter(|to| Piece::Pawn.can_reach(Square::E4, *to, Color::White, true))
            .collect();
        assert_eq!(reachable, vec![Square::D5, Square::E5, Square::F5]);
    }

    #[test]
    fn pawn_geometry_black_unmoved() {
        let reachable: Vec<Square> = ALL_SQUARES
            .iter()
            .cloned()
            .filter(|to| Piece::Pawn.can_reach(Square::E7, *to, Color::Black, false))
            .collect();
        assert_eq!(
            reachable,
            vec![Square::E5, Square::D6, Square::E6, Square::F6]
        );
    }

    #[test]
    fn pawn_never_retreats() {
        assert!(!Piece::Pawn.can_reach(Square::E4, Square::E3, Color::White, true));
        assert!(!Piece::Pawn.can_reach(Square::E4, Square::D3, Color::White, true));
        assert!(!Piece::Pawn.can_reach(Square::E5, Square::E6, Color::Black, true));
        assert!(!Piece::Pawn.can_reach(Square::E5, Square::F6, Color::Black, true));
    }

    #[test]
    fn placed_piece_move_counter() {
        let mut pawn = PlacedPiece::new(Piece::Pawn, Color::White);
        assert!(!pawn.has_moved());
        assert!(pawn.can_reach(Square::E2, Square::E4));

        pawn.record_move();
        assert!(pawn.has_moved());
        assert_eq!(pawn.move_count(), 1);
        assert!(!pawn.can_reach(Square::E4, Square::E6));
        assert!(pawn.can_reach(Square::E4, Square::E5));
    }
}
