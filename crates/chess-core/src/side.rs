//! Player side representation.

use crate::Direction;

/// The two players. `Friendly` is the human side, `Opponent` the engine side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Friendly = 0,
    Opponent = 1,
}

impl Side {
    /// Both sides, Friendly first.
    pub const BOTH: [Side; 2] = [Side::Friendly, Side::Opponent];

    /// Returns the other side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Friendly => Side::Opponent,
            Side::Opponent => Side::Friendly,
        }
    }

    /// Returns the direction this side's pawns advance in.
    #[inline]
    pub const fn forward(self) -> Direction {
        match self {
            Side::Friendly => Direction::UP,
            Side::Opponent => Direction::DOWN,
        }
    }

    /// Returns the row this side's pawns start on.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Side::Friendly => 1,
            Side::Opponent => 6,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Friendly => write!(f, "Friendly"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_side() {
        assert_eq!(Side::Friendly.opposite(), Side::Opponent);
        assert_eq!(Side::Opponent.opposite(), Side::Friendly);
    }

    #[test]
    fn forward_is_fixed_per_side() {
        assert_eq!(Side::Friendly.forward(), Direction::UP);
        assert_eq!(Side::Opponent.forward(), Direction::DOWN);
    }

    #[test]
    fn pawn_rows() {
        assert_eq!(Side::Friendly.pawn_row(), 1);
        assert_eq!(Side::Opponent.pawn_row(), 6);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Side::Friendly), "Friendly");
        assert_eq!(format!("{}", Side::Opponent), "Opponent");
    }
}
