use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::ZoneError;
use crate::stone::Stone;

/// Side length of the board.
pub const BOARD_SIZE: u8 = 10;

const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Opponent stones removed, indexed by the player who removed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub red: u32,
    pub blue: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Red => self.red,
            Stone::Blue => self.blue,
        }
    }

    pub(crate) fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Red => self.red += count,
            Stone::Blue => self.blue += count,
        }
    }

    /// The player with more captures, or `None` on a tie.
    pub fn leader(&self) -> Option<Stone> {
        match self.red.cmp(&self.blue) {
            std::cmp::Ordering::Greater => Some(Stone::Red),
            std::cmp::Ordering::Less => Some(Stone::Blue),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// The 10x10 grid stored as a flat array, indexed `y * BOARD_SIZE + x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    cells: Vec<i8>,
}

/// Unchecked wire form of [`Board`]; deserialization goes through `from_cells`.
#[derive(Deserialize)]
struct RawBoard {
    cells: Vec<i8>,
}

impl TryFrom<RawBoard> for Board {
    type Error = String;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let len = raw.cells.len();
        Board::from_cells(raw.cells)
            .ok_or_else(|| format!("board must have {CELL_COUNT} cells, got {len}"))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: vec![0i8; CELL_COUNT],
        }
    }

    /// Restore a board from its flat cell values. Returns `None` on a size mismatch.
    pub fn from_cells(cells: Vec<i8>) -> Option<Self> {
        (cells.len() == CELL_COUNT).then_some(Board { cells })
    }

    // -- Accessors --

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_int(self.cells[Self::idx(point)])
        } else {
            None
        }
    }

    pub fn on_board(&self, (x, y): Point) -> bool {
        x < BOARD_SIZE && y < BOARD_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != 0)
    }

    pub fn count(&self, stone: Stone) -> usize {
        self.cells
            .iter()
            .filter(|&&c| Stone::from_int(c) == Some(stone))
            .count()
    }

    /// Every empty point, in row-major order.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        Self::points().filter(|&p| self.stone_at(p).is_none())
    }

    /// Every point on the board, in row-major order.
    pub fn points() -> impl Iterator<Item = Point> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| (x, y)))
    }

    /// The board as `columns[x][y]`.
    pub fn columns(&self) -> Vec<Vec<Option<Stone>>> {
        (0..BOARD_SIZE)
            .map(|x| (0..BOARD_SIZE).map(|y| self.stone_at((x, y))).collect())
            .collect()
    }

    // -- Mutation --

    /// Put a stone on an empty point. Nothing changes on error.
    pub fn place(&mut self, point: Point, stone: Stone) -> Result<(), ZoneError> {
        if !self.on_board(point) {
            return Err(ZoneError::OutOfBounds);
        }
        if self.stone_at(point).is_some() {
            return Err(ZoneError::Occupied);
        }
        self.cells[Self::idx(point)] = stone.to_int();
        Ok(())
    }

    pub(crate) fn clear(&mut self, point: Point) {
        if self.on_board(point) {
            self.cells[Self::idx(point)] = 0;
        }
    }

    // -- Geometry --

    /// The point one step from `point` along `(dx, dy)`, if still on the board.
    pub fn step(&self, (x, y): Point, (dx, dy): (i8, i8)) -> Option<Point> {
        let nx = x as i16 + dx as i16;
        let ny = y as i16 + dy as i16;
        if (0..BOARD_SIZE as i16).contains(&nx) && (0..BOARD_SIZE as i16).contains(&ny) {
            Some((nx as u8, ny as u8))
        } else {
            None
        }
    }

    #[inline]
    fn idx((x, y): Point) -> usize {
        y as usize * BOARD_SIZE as usize + x as usize
    }
}
