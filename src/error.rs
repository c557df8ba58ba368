use failure::Fail;

/// Sometimes, bad stuff happens.
#[derive(Clone, Debug, Fail, PartialEq, Eq)]
pub enum Error {
    /// The string was not a file on the board (a-h)
    #[fail(display = "The string specified does not contain a valid file")]
    InvalidFile,

    /// The string was not a rank on the board (1-8)
    #[fail(display = "The string specified does not contain a valid rank")]
    InvalidRank,

    /// The string was not a square on the board
    #[fail(display = "The string specified does not contain a valid square")]
    InvalidSquare,

    /// The string was not a coordinate-pair move like "e2e4"
    #[fail(display = "The string specified does not contain a valid move")]
    InvalidMove,

    /// The position built from a BoardBuilder was found to be invalid
    #[fail(
        display = "The board specified did not pass sanity checks.  Are you sure each side has at most one king?"
    )]
    InvalidBoard,
}

/// Why a requested move was turned down.
///
/// Every variant is an ordinary, locally-recoverable rejection: the board is
/// left exactly as it was, and the caller is expected to re-prompt.  None of
/// these are panics in disguise; the only terminal condition a board has is
/// the deliberate `Won` status, which is a *successful* move outcome.
#[derive(Copy, Clone, Debug, Fail, PartialEq, Eq)]
pub enum MoveError {
    /// The game already ended; no further moves are accepted
    #[fail(display = "the game is over")]
    GameOver,

    /// There is no piece on the source square
    #[fail(display = "no piece on the source square")]
    NoPieceAtSource,

    /// The piece on the source square belongs to the other player
    #[fail(display = "that piece belongs to the other player")]
    WrongColor,

    /// The piece cannot make that shape of move at all
    #[fail(display = "that piece cannot reach the destination")]
    UnreachableForPieceType,

    /// A pawn may only step diagonally when it captures an enemy piece
    #[fail(display = "a pawn can only move diagonally when capturing")]
    PawnMustCaptureDiagonally,

    /// Another piece stands in the way
    #[fail(display = "another piece is in the way")]
    PathBlocked,

    /// The destination square holds a piece of the same color
    #[fail(display = "the destination square holds one of your own pieces")]
    FriendlyFire,
}
