//! Chess piece representation.

use crate::Side;

/// The six types of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece types in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value used by the evaluation.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 4,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 100,
        }
    }

    /// Returns the layout character for this piece with the given side.
    ///
    /// Friendly pieces are uppercase, Opponent pieces lowercase.
    pub const fn to_char(self, side: Side) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match side {
            Side::Friendly => c.to_ascii_uppercase(),
            Side::Opponent => c,
        }
    }

    /// Parses a layout character into a piece type and side.
    pub const fn from_char(c: char) -> Option<(PieceKind, Side)> {
        let side = if c.is_ascii_uppercase() {
            Side::Friendly
        } else {
            Side::Opponent
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, side))
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece on (or removed from) the board.
///
/// `kind` and `side` never change. `has_moved` drives the pawn's
/// double-step eligibility and flips at most once. `active` is cleared when
/// the piece is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
    has_moved: bool,
    active: bool,
}

impl Piece {
    /// Creates an active piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Piece {
            kind,
            side,
            has_moved: false,
            active: true,
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn side(self) -> Side {
        self.side
    }

    #[inline]
    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    #[inline]
    pub const fn is_active(self) -> bool {
        self.active
    }

    /// Material value of this piece.
    #[inline]
    pub const fn value(self) -> i32 {
        self.kind.value()
    }

    /// Returns a copy of this piece with `has_moved` set.
    #[inline]
    pub const fn moved(self) -> Self {
        Piece {
            has_moved: true,
            ..self
        }
    }

    /// Fires the first-move transition. Returns true only the first time.
    pub fn mark_moved(&mut self) -> bool {
        let fired = !self.has_moved;
        self.has_moved = true;
        fired
    }

    /// Detaches the piece after capture.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Returns the layout character for this piece.
    #[inline]
    pub const fn to_char(self) -> char {
        self.kind.to_char(self.side)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}
