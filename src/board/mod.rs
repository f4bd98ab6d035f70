//! Board representation for Mancala
//!
//! The board is a ring of 14 positions: six South pits (A-F), the South
//! store, six North pits (G-L), the North store. Sowing walks the ring in
//! index order. Every table here is derived from [`PITS_PER_SIDE`].

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

use std::fmt;

/// Pits owned by each side
pub const PITS_PER_SIDE: usize = 6;
/// Seeds placed in every pit at the start of a game
pub const SEEDS_PER_PIT: u8 = 4;
/// Total positions on the ring (pits + stores)
pub const POSITIONS: usize = 2 * PITS_PER_SIDE + 2; // 14
/// Seeds in play for a whole game
pub const TOTAL_SEEDS: u32 = (2 * PITS_PER_SIDE) as u32 * SEEDS_PER_PIT as u32; // 48

const SOUTH_STORE: usize = PITS_PER_SIDE;
const NORTH_STORE: usize = 2 * PITS_PER_SIDE + 1;

/// The two players' halves of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Owns pits A-F and store 1
    South,
    /// Owns pits G-L and store 2
    North,
}

impl Side {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::South => Side::North,
            Side::North => Side::South,
        }
    }

    /// This side's store
    #[inline]
    pub fn store(self) -> Position {
        match self {
            Side::South => Position::SOUTH_STORE,
            Side::North => Position::NORTH_STORE,
        }
    }

    /// Store number as printed on the board (1 or 2)
    #[inline]
    pub fn store_number(self) -> u8 {
        match self {
            Side::South => 1,
            Side::North => 2,
        }
    }

    /// Index of this side's first pit on the ring
    #[inline]
    const fn first_index(self) -> usize {
        match self {
            Side::South => 0,
            Side::North => SOUTH_STORE + 1,
        }
    }

    /// This side's pits in fixed left-to-right order
    pub fn pits(self) -> [Pit; PITS_PER_SIDE] {
        let first = self.first_index();
        std::array::from_fn(|i| Pit((first + i) as u8))
    }

    /// Check if a pit is on this side
    #[inline]
    pub fn owns(self, pit: Pit) -> bool {
        pit.side() == self
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::South => f.write_str("South"),
            Side::North => f.write_str("North"),
        }
    }
}

/// Any slot on the ring, pit or store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(u8);

impl Position {
    pub const SOUTH_STORE: Position = Position(SOUTH_STORE as u8);
    pub const NORTH_STORE: Position = Position(NORTH_STORE as u8);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Successor in sowing order
    #[inline]
    pub const fn next(self) -> Position {
        Position((self.0 + 1) % POSITIONS as u8)
    }

    #[inline]
    pub fn is_store(self) -> bool {
        self == Self::SOUTH_STORE || self == Self::NORTH_STORE
    }

    /// Side that owns this pit or store
    #[inline]
    pub fn owner(self) -> Side {
        if self.index() <= SOUTH_STORE {
            Side::South
        } else {
            Side::North
        }
    }

    /// The pit at this position, `None` for stores
    #[inline]
    pub fn to_pit(self) -> Option<Pit> {
        if self.is_store() {
            None
        } else {
            Some(Pit(self.0))
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_pit() {
            Some(pit) => fmt::Display::fmt(&pit, f),
            None => write!(f, "store {}", self.owner().store_number()),
        }
    }
}

/// One of the twelve seed-holding pits
///
/// Stored as its ring index, so it never names a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pit(u8);

impl Pit {
    /// Parse a pit letter (`A`-`L`, case-insensitive)
    pub fn from_label(label: char) -> Option<Pit> {
        let offset = label.to_ascii_uppercase() as usize;
        let offset = offset.checked_sub('A' as usize)?;
        if offset < PITS_PER_SIDE {
            Some(Pit(offset as u8))
        } else if offset < 2 * PITS_PER_SIDE {
            Some(Pit(offset as u8 + 1))
        } else {
            None
        }
    }

    /// Pit letter (`A`-`L`)
    pub fn label(self) -> char {
        let offset = if self.index() < SOUTH_STORE {
            self.index()
        } else {
            self.index() - 1
        };
        (b'A' + offset as u8) as char
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn position(self) -> Position {
        Position(self.0)
    }

    #[inline]
    pub fn side(self) -> Side {
        self.position().owner()
    }

    /// Column within its own side, 0 = leftmost in the side's sowing order
    #[inline]
    pub fn column(self) -> usize {
        self.index() - self.side().first_index()
    }

    /// The pit directly across the board
    #[inline]
    pub fn opposite(self) -> Pit {
        Pit((2 * PITS_PER_SIDE) as u8 - self.0)
    }
}

impl fmt::Display for Pit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
