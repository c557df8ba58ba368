use crate::error::Error;
use crate::square::Square;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent a chess move in memory: where the piece stands, and where it is
/// asked to go.
#[derive(Clone, Copy, Eq, Ord, PartialOrd, PartialEq, Default, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ChessMove {
    source: Square,
    dest: Square,
}

impl ChessMove {
    /// Create a new chess move, given a source `Square` and a destination `Square`.
    #[inline]
    pub fn new(source: Square, dest: Square) -> ChessMove {
        ChessMove {
            source: source,
            dest: dest,
        }
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

impl FromStr for ChessMove {
    type Err = Error;

    /// Convert a coordinate-pair string like "e2e4" to a move.
    ///
    /// ```
    /// use regicide::{ChessMove, Square};
    /// use std::str::FromStr;
    ///
    /// let mv = ChessMove::new(Square::E2, Square::E4);
    /// assert_eq!(ChessMove::from_str("e2e4").unwrap(), mv);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 {
            return Err(Error::InvalidMove);
        }
        let source = s.get(0..2).ok_or(Error::InvalidMove)?;
        let dest = s.get(2..4).ok_or(Error::InvalidMove)?;
        Ok(ChessMove::new(
            Square::from_str(source).map_err(|_| Error::InvalidMove)?,
            Square::from_str(dest).map_err(|_| Error::InvalidMove)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_moves() {
        assert!(ChessMove::from_str("e2e-").is_err());
        assert!(ChessMove::from_str("").is_err());
        assert!(ChessMove::from_str("e2").is_err());
        assert!(ChessMove::from_str("e2e9").is_err());
        assert!(ChessMove::from_str("e7e8q").is_err());
    }

    #[test]
    fn valid_moves() {
        assert_eq!(
            ChessMove::from_str("e2e4").unwrap(),
            ChessMove::new(Square::E2, Square::E4)
        );
        assert_eq!(
            ChessMove::from_str("g1f3").unwrap(),
            ChessMove::new(Square::G1, Square::F3)
        );
        assert_eq!(
            ChessMove::from_str("a2a4").unwrap(),
            ChessMove::new(Square::A2, Square::A4)
        );
        assert_eq!(
            ChessMove::from_str("h2h4").unwrap(),
            ChessMove::new(Square::H2, Square::H4)
        );
    }

    #[test]
    fn move_display() {
        assert_eq!(
            format!("{}", ChessMove::new(Square::E2, Square::E4)),
            "e2e4"
        );
    }
}
