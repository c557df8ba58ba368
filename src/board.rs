use crate::board_builder::BoardBuilder;
use crate::chess_move::ChessMove;
use crate::color::{Color, ALL_COLORS, NUM_COLORS};
use crate::error::{Error, MoveError};
use crate::file::{ALL_FILES, NUM_FILES};
use crate::piece::{Piece, PlacedPiece};
use crate::rank::ALL_RANKS;
use crate::square::{between, Square, ALL_SQUARES, NUM_SQUARES};
use std::convert::TryFrom;
use std::fmt;
use std::ops::Index;

/// Is the game still going, or has somebody captured a king?
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum BoardStatus {
    Ongoing,
    Won(Color),
}

/// What a successful move did.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum MoveOutcome {
    /// The move was applied and the game continues.
    Moved,
    /// The move was applied and captured the enemy king; the game is over.
    Won(Color),
}

/// The back rank at the start of a game, from the a-file to the h-file.
const BACK_RANK: [Piece; NUM_FILES] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// The chess board itself: 64 squares, whose turn it is, and whether somebody
/// has already won.
///
/// `attempt_move` is the only thing that ever mutates a board.  Everything
/// else is a read: accessors for single squares, the status, and a
/// `Display` impl that renders the grid as text.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [Option<PlacedPiece>; NUM_SQUARES],
    side_to_move: Color,
    status: BoardStatus,
}

impl Default for Board {
    /// The standard starting position, white to move.
    fn default() -> Board {
        let mut squares = [None; NUM_SQUARES];
        for color in ALL_COLORS.iter() {
            for file in ALL_FILES.iter() {
                let backrank = Square::make_square(color.to_my_backrank(), *file);
                squares[backrank.to_index()] =
                    Some(PlacedPiece::new(BACK_RANK[file.to_index()], *color));

                let second = Square::make_square(color.to_second_rank(), *file);
                squares[second.to_index()] = Some(PlacedPiece::new(Piece::Pawn, *color));
            }
        }
        Board {
            squares: squares,
            side_to_move: Color::White,
            status: BoardStatus::Ongoing,
        }
    }
}

impl Board {
    /// Whose turn is it?
    ///
    /// This is bookkeeping for the caller running the game loop: it starts at
    /// `Color::White` and flips after every applied move.  `attempt_move`
    /// itself trusts the color the caller hands it.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Is the game ongoing, or won?
    #[inline]
    pub fn status(&self) -> BoardStatus {
        self.status
    }

    /// What, if anything, stands on the given square?
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<PlacedPiece> {
        self.squares[square.to_index()]
    }

    /// The color of the piece on the given square, if there is one.
    #[inline]
    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.piece_on(square).map(|p| p.get_color())
    }

    /// Ask the board to perform a move for `color`, validating it first.
    ///
    /// This is the sole mutating entry point.  Validation runs in a fixed
    /// order and the first failure wins; a rejected move leaves the board
    /// untouched:
    ///
    /// 1. the game must still be ongoing (`GameOver`),
    /// 2. the source square must hold a piece of `color`
    ///    (`NoPieceAtSource` / `WrongColor`),
    /// 3. the piece's movement shape must allow the travel
    ///    (`UnreachableForPieceType`),
    /// 4. a pawn moving diagonally must capture an enemy, and a pawn moving
    ///    straight needs every square through the destination empty
    ///    (`PawnMustCaptureDiagonally` / `PathBlocked`),
    /// 5. a rook, bishop or queen must have a clear line; knights and kings
    ///    cannot be obstructed (`PathBlocked`),
    /// 6. the destination must not hold a piece of `color` (`FriendlyFire`).
    ///
    /// A surviving move is applied: the piece relocates, anything on the
    /// destination is captured, and the turn flips.  Capturing the enemy king
    /// wins on the spot.  The capturing move is still applied, the status
    /// becomes `Won(color)`, the turn no longer flips, and every later call
    /// is rejected with `GameOver`.
    ///
    /// ```
    /// use regicide::{Board, ChessMove, Color, MoveError, MoveOutcome, Square};
    ///
    /// let mut board = Board::default();
    /// let e4 = ChessMove::new(Square::E2, Square::E4);
    ///
    /// assert_eq!(board.attempt_move(Color::White, e4), Ok(MoveOutcome::Moved));
    /// assert_eq!(board.side_to_move(), Color::Black);
    ///
    /// // the pawn spent its two-square advance
    /// let e6 = ChessMove::new(Square::E4, Square::E6);
    /// assert_eq!(
    ///     board.attempt_move(Color::White, e6),
    ///     Err(MoveError::UnreachableForPieceType)
    /// );
    /// ```
    pub fn attempt_move(
        &mut self,
        color: Color,
        m: ChessMove,
    ) -> Result<MoveOutcome, MoveError> {
        if self.status != BoardStatus::Ongoing {
            return Err(MoveError::GameOver);
        }

        let from = m.get_source();
        let to = m.get_dest();

        let mut mover = match self.squares[from.to_index()] {
            None => return Err(MoveError::NoPieceAtSource),
            Some(p) => p,
        };
        if mover.get_color() != color {
            return Err(MoveError::WrongColor);
        }

        if !mover.can_reach(from, to) {
            return Err(MoveError::UnreachableForPieceType);
        }

        // The pawn's shape check cannot express "an attack needs a target":
        // diagonally it must capture, straight ahead it may not, and a
        // straight advance has to pass through empty squares only.
        if mover.get_piece() == Piece::Pawn {
            if from.get_file() != to.get_file() {
                match self.squares[to.to_index()] {
                    Some(target) if target.get_color() != color => {}
                    _ => return Err(MoveError::PawnMustCaptureDiagonally),
                }
            } else if self.squares[to.to_index()].is_some()
                || self.occupied_between(from, to)
            {
                return Err(MoveError::PathBlocked);
            }
        }

        // Sliders cannot jump.  Knights and kings skip this: an L-jump has no
        // line to block, and a king only ever travels one step.
        match mover.get_piece() {
            Piece::Rook | Piece::Bishop | Piece::Queen => {
                if self.occupied_between(from, to) {
                    return Err(MoveError::PathBlocked);
                }
            }
            _ => {}
        }

        if let Some(target) = self.squares[to.to_index()] {
            if target.get_color() == color {
                return Err(MoveError::FriendlyFire);
            }
            if target.get_piece() == Piece::King {
                self.status = BoardStatus::Won(color);
            }
        }

        // Every check passed; commit.  The mover relocates and whatever stood
        // on the destination is discarded.
        mover.record_move();
        self.squares[to.to_index()] = Some(mover);
        self.squares[from.to_index()] = None;

        match self.status {
            BoardStatus::Won(winner) => Ok(MoveOutcome::Won(winner)),
            BoardStatus::Ongoing => {
                self.side_to_move = !color;
                Ok(MoveOutcome::Moved)
            }
        }
    }

    /// Does any piece stand strictly between `from` and `to`?
    ///
    /// Both the orthogonal and the diagonal walk come from the same
    /// unit-step routine in `between`; the caller decides per piece kind
    /// whether an obstruction check applies at all.
    fn occupied_between(&self, from: Square, to: Square) -> bool {
        between(from, to)
            .iter()
            .any(|sq| self.squares[sq.to_index()].is_some())
    }
}

impl Index<Square> for Board {
    type Output = Option<PlacedPiece>;

    #[inline]
    fn index(&self, index: Square) -> &Self::Output {
        &self.squares[index.to_index()]
    }
}

impl TryFrom<&BoardBuilder> for Board {
    type Error = Error;

    /// Build a playable board from a builder position.  A side with two or
    /// more kings fails the sanity check; positions without kings are fine,
    /// they just can never be won.
    fn try_from(builder: &BoardBuilder) -> Result<Board, Error> {
        let mut squares = [None; NUM_SQUARES];
        let mut kings = [0usize; NUM_COLORS];

        for square in ALL_SQUARES.iter() {
            if let Some((piece, color)) = builder[*square] {
                if piece == Piece::King {
                    kings[color.to_index()] += 1;
                }
                squares[square.to_index()] = Some(PlacedPiece::new(piece, color));
            }
        }

        if kings.iter().any(|count| *count > 1) {
            return Err(Error::InvalidBoard);
        }

        Ok(Board {
            squares: squares,
            side_to_move: builder.get_side_to_move(),
            status: BoardStatus::Ongoing,
        })
    }
}

impl TryFrom<&mut BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: &mut BoardBuilder) -> Result<Board, Error> {
        Board::try_from(&*builder)
    }
}

impl TryFrom<BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: BoardBuilder) -> Result<Board, Error> {
        Board::try_from(&builder)
    }
}

impl fmt::Display for Board {
    /// Render the grid as text, rank 8 at the top, files a-h left to right.
    /// An occupied cell shows the color initial and the piece letter
    /// (`|WQ|`), an empty one shows `|  |`.  Pure function of the grid: the
    /// same position always renders to the same text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  |a ||b ||c ||d ||e ||f ||g ||h |")?;
        writeln!(f, "  |------------------------------|")?;
        for rank in ALL_RANKS.iter().rev() {
            write!(f, "{} ", rank.to_index() + 1)?;
            for file in ALL_FILES.iter() {
                match self.squares[Square::make_square(*rank, *file).to_index()] {
                    Some(p) => write!(
                        f,
                        "|{}{}|",
                        p.get_color().to_char(),
                        p.get_piece().to_string(Color::White)
                    )?,
                    None => write!(f, "|  |")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
