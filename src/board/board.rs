//! Board structure with pit and store counters

use std::fmt;

use super::{Pit, Position, Side, PITS_PER_SIDE, POSITIONS, SEEDS_PER_PIT};

/// Game board: one seed counter per ring position
///
/// `Copy` on purpose: search takes a fresh 14-byte copy per branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; POSITIONS],
}

impl Board {
    /// Starting position: every pit holds [`SEEDS_PER_PIT`], stores empty
    pub fn new() -> Self {
        let mut cells = [SEEDS_PER_PIT; POSITIONS];
        cells[Position::SOUTH_STORE.index()] = 0;
        cells[Position::NORTH_STORE.index()] = 0;
        Self { cells }
    }

    /// Board with no seeds anywhere
    pub fn empty() -> Self {
        Self {
            cells: [0; POSITIONS],
        }
    }

    /// Build a board from explicit counts, pits in each side's sowing order
    pub fn from_counts(
        south: [u8; PITS_PER_SIDE],
        north: [u8; PITS_PER_SIDE],
        south_store: u8,
        north_store: u8,
    ) -> Self {
        let mut board = Self::empty();
        for (pit, seeds) in Side::South.pits().into_iter().zip(south) {
            board.set(pit.position(), seeds);
        }
        for (pit, seeds) in Side::North.pits().into_iter().zip(north) {
            board.set(pit.position(), seeds);
        }
        board.set(Position::SOUTH_STORE, south_store);
        board.set(Position::NORTH_STORE, north_store);
        board
    }

    /// Seeds at any position
    #[inline]
    pub fn seeds(&self, pos: Position) -> u8 {
        self.cells[pos.index()]
    }

    /// Seeds in a pit
    #[inline]
    pub fn pit(&self, pit: Pit) -> u8 {
        self.cells[pit.index()]
    }

    /// Seeds in a side's store
    #[inline]
    pub fn store(&self, side: Side) -> u8 {
        self.cells[side.store().index()]
    }

    #[inline]
    pub fn set(&mut self, pos: Position, seeds: u8) {
        self.cells[pos.index()] = seeds;
    }

    #[inline]
    pub fn add(&mut self, pos: Position, seeds: u8) {
        self.cells[pos.index()] += seeds;
    }

    /// Empty a position and return what it held
    #[inline]
    pub fn take(&mut self, pos: Position) -> u8 {
        std::mem::take(&mut self.cells[pos.index()])
    }

    /// Seed counts of one side's pits, in sowing order
    pub fn side_pits(&self, side: Side) -> [u8; PITS_PER_SIDE] {
        side.pits().map(|pit| self.pit(pit))
    }

    /// Seeds still in play on one side (stores excluded)
    pub fn side_seeds(&self, side: Side) -> u32 {
        self.side_pits(side).iter().map(|&s| s as u32).sum()
    }

    /// Check if every pit on a side is empty
    #[inline]
    pub fn is_side_empty(&self, side: Side) -> bool {
        self.side_pits(side).iter().all(|&s| s == 0)
    }

    /// Seeds across all 14 counters
    pub fn total_seeds(&self) -> u32 {
        self.cells.iter().map(|&s| s as u32).sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Text layout with North on top, read right-to-left so opposite pits line up:
///
/// ```text
///        L  K  J  I  H  G
///        4  4  4  4  4  4
///  [ 0]                    [ 0]
///        4  4  4  4  4  4
///        A  B  C  D  E  F
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let north: Vec<Pit> = Side::North.pits().into_iter().rev().collect();
        let south = Side::South.pits();
        let pad = "      ";

        write!(f, "{pad}")?;
        for pit in &north {
            write!(f, "{:>3}", pit.label())?;
        }
        writeln!(f)?;
        write!(f, "{pad}")?;
        for pit in &north {
            write!(f, "{:>3}", self.pit(*pit))?;
        }
        writeln!(f)?;
        writeln!(
            f,
            " [{:>2}] {:width$} [{:>2}]",
            self.store(Side::North),
            "",
            self.store(Side::South),
            width = 3 * PITS_PER_SIDE - 1
        )?;
        write!(f, "{pad}")?;
        for pit in &south {
            write!(f, "{:>3}", self.pit(*pit))?;
        }
        writeln!(f)?;
        write!(f, "{pad}")?;
        for pit in &south {
            write!(f, "{:>3}", pit.label())?;
        }
        writeln!(f)
    }
}
