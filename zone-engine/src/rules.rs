//! Placement legality and capture resolution.
//!
//! A stone may not be dropped between two opponent stones lying on the same
//! row or column. After a placement, every opponent stone orthogonally
//! adjacent to the new stone that has one of the mover's stones directly
//! behind it is captured and removed.

use arrayvec::ArrayVec;

use crate::Point;
use crate::board::Board;
use crate::error::ZoneError;
use crate::stone::Stone;

/// The four orthogonal directions scanned for captures.
const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Horizontal and vertical axes, each as a pair of opposite directions.
const AXES: [((i8, i8), (i8, i8)); 2] = [((-1, 0), (1, 0)), ((0, -1), (0, 1))];

/// Result of a successful placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub board: Board,
    pub captured: ArrayVec<Point, 4>,
}

impl Placement {
    pub fn capture_count(&self) -> u32 {
        self.captured.len() as u32
    }
}

/// Check whether `stone` may be placed at `point`.
pub fn validate(board: &Board, point: Point, stone: Stone) -> Result<(), ZoneError> {
    if !board.on_board(point) {
        return Err(ZoneError::OutOfBounds);
    }
    if board.stone_at(point).is_some() {
        return Err(ZoneError::Occupied);
    }
    if is_sandwiched(board, point, stone) {
        return Err(ZoneError::IllegalPlacement);
    }
    Ok(())
}

pub fn is_legal(board: &Board, point: Point, stone: Stone) -> bool {
    validate(board, point, stone).is_ok()
}

/// Every point where `stone` may currently be placed, in row-major order.
pub fn legal_moves(board: &Board, stone: Stone) -> Vec<Point> {
    board
        .empty_points()
        .filter(|&p| is_legal(board, p, stone))
        .collect()
}

pub fn has_legal_move(board: &Board, stone: Stone) -> bool {
    board
        .empty_points()
        .any(|p| is_legal(board, p, stone))
}

/// Place `stone` at `point` and resolve captures, returning the new board.
///
/// The input board is left untouched, so a rejected placement has no effect.
pub fn apply(board: &Board, point: Point, stone: Stone) -> Result<Placement, ZoneError> {
    validate(board, point, stone)?;

    let mut next = board.clone();
    next.place(point, stone)?;

    let captured = captured_by(&next, point, stone);
    for &p in &captured {
        next.clear(p);
    }

    Ok(Placement {
        board: next,
        captured,
    })
}

/// Opponent stones flanked by the stone at `point` and another `stone` one step beyond.
fn captured_by(board: &Board, point: Point, stone: Stone) -> ArrayVec<Point, 4> {
    let opponent = stone.opp();
    let mut captured = ArrayVec::new();

    for dir in DIRECTIONS {
        let Some(near) = board.step(point, dir) else {
            continue;
        };
        if board.stone_at(near) != Some(opponent) {
            continue;
        }
        let Some(far) = board.step(near, dir) else {
            continue;
        };
        if board.stone_at(far) == Some(stone) {
            captured.push(near);
        }
    }

    captured
}

/// True when both neighbours on one axis hold opponent stones.
fn is_sandwiched(board: &Board, point: Point, stone: Stone) -> bool {
    let opponent = Some(stone.opp());
    AXES.iter().any(|&(a, b)| {
        let side = |dir| board.step(point, dir).and_then(|p| board.stone_at(p));
        side(a) == opponent && side(b) == opponent
    })
}
