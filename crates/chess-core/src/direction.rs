//! Board direction and offset tables.

/// A (column, row) step used to walk the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    /// Column delta.
    pub dc: i8,
    /// Row delta.
    pub dr: i8,
}

impl Direction {
    pub const UP: Direction = Direction::new(0, 1);
    pub const DOWN: Direction = Direction::new(0, -1);
    pub const LEFT: Direction = Direction::new(-1, 0);
    pub const RIGHT: Direction = Direction::new(1, 0);
    pub const UP_LEFT: Direction = Direction::new(-1, 1);
    pub const UP_RIGHT: Direction = Direction::new(1, 1);
    pub const DOWN_LEFT: Direction = Direction::new(-1, -1);
    pub const DOWN_RIGHT: Direction = Direction::new(1, -1);

    /// Rook directions.
    pub const ORTHOGONALS: [Direction; 4] = [
        Direction::UP,
        Direction::DOWN,
        Direction::LEFT,
        Direction::RIGHT,
    ];

    /// Bishop directions.
    pub const DIAGONALS: [Direction; 4] = [
        Direction::UP_LEFT,
        Direction::UP_RIGHT,
        Direction::DOWN_LEFT,
        Direction::DOWN_RIGHT,
    ];

    /// Queen directions and king steps.
    pub const ALL: [Direction; 8] = [
        Direction::UP,
        Direction::DOWN,
        Direction::LEFT,
        Direction::RIGHT,
        Direction::UP_LEFT,
        Direction::UP_RIGHT,
        Direction::DOWN_LEFT,
        Direction::DOWN_RIGHT,
    ];

    /// Knight jumps.
    pub const KNIGHT_JUMPS: [Direction; 8] = [
        Direction::new(1, 2),
        Direction::new(2, 1),
        Direction::new(2, -1),
        Direction::new(1, -2),
        Direction::new(-1, -2),
        Direction::new(-2, -1),
        Direction::new(-2, 1),
        Direction::new(-1, 2),
    ];

    #[inline]
    pub const fn new(dc: i8, dr: i8) -> Self {
        Direction { dc, dr }
    }

    /// Returns this direction shifted sideways by `dc` columns.
    ///
    /// Used to build a forward diagonal from a forward step.
    #[inline]
    pub const fn with_column(self, dc: i8) -> Self {
        Direction::new(self.dc + dc, self.dr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_jumps_are_l_shaped() {
        for jump in Direction::KNIGHT_JUMPS {
            let (c, r) = (jump.dc.abs(), jump.dr.abs());
            assert!((c, r) == (1, 2) || (c, r) == (2, 1));
        }
    }

    #[test]
    fn forward_diagonals() {
        assert_eq!(Direction::UP.with_column(-1), Direction::UP_LEFT);
        assert_eq!(Direction::DOWN.with_column(1), Direction::DOWN_RIGHT);
    }
}
