use crate::engine::GameState;
use crate::error::ZoneError;

/// Snapshots of the game taken after every committed action.
///
/// Index 0 always holds the initial position and is never removed by undo,
/// so the history is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    snapshots: Vec<GameState>,
}

impl History {
    pub fn new(initial: GameState) -> Self {
        History {
            snapshots: vec![initial],
        }
    }

    pub fn record(&mut self, state: GameState) {
        self.snapshots.push(state);
    }

    /// Drop the latest snapshot and return the one before it.
    pub fn undo(&mut self) -> Result<&GameState, ZoneError> {
        if self.snapshots.len() <= 1 {
            return Err(ZoneError::NothingToUndo);
        }
        self.snapshots.pop();
        Ok(self.current())
    }

    pub fn reset(&mut self, initial: GameState) {
        self.snapshots.clear();
        self.snapshots.push(initial);
    }

    pub fn current(&self) -> &GameState {
        // Never empty: constructed with one entry and undo keeps index 0.
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshots.len()
    }
}
