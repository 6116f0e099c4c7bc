use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::RwLock;
use zone_engine::Engine;

/// Game backing the unprefixed routes. Created at startup and never removed.
pub const DEFAULT_GAME_ID: i64 = 0;

/// Upper bound on live games, the default game included.
pub const MAX_GAMES: usize = 1024;

/// In-memory game sessions, each isolated from the others.
///
/// Every mutation runs under the write lock, so requests against a game are
/// applied one at a time.
#[derive(Debug, Clone)]
pub struct GameRegistry {
    rooms: Arc<RwLock<HashMap<i64, Engine>>>,
    next_id: Arc<AtomicI64>,
    max_games: usize,
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::with_limit(MAX_GAMES)
    }

    /// A registry that holds at most `max_games` games at once.
    pub fn with_limit(max_games: usize) -> Self {
        GameRegistry {
            rooms: Arc::new(RwLock::new(HashMap::from([(
                DEFAULT_GAME_ID,
                Engine::new(),
            )]))),
            next_id: Arc::new(AtomicI64::new(DEFAULT_GAME_ID + 1)),
            max_games,
        }
    }

    /// Start a new game and return its id with a clone of its engine.
    ///
    /// Returns `None` when the registry is already at its limit.
    pub async fn create(&self) -> Option<(i64, Engine)> {
        let mut rooms = self.rooms.write().await;
        if rooms.len() >= self.max_games {
            return None;
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let engine = Engine::new();
        rooms.insert(id, engine.clone());
        Some((id, engine))
    }

    /// Get a clone of a game's engine (read-only).
    pub async fn get_engine(&self, game_id: i64) -> Option<Engine> {
        let rooms = self.rooms.read().await;
        rooms.get(&game_id).cloned()
    }

    /// Run `f` against a game's engine under the write lock.
    ///
    /// Returns `None` when the game does not exist.
    pub async fn with_engine_mut<F, T>(&self, game_id: i64, f: F) -> Option<T>
    where
        F: FnOnce(&mut Engine) -> T,
    {
        let mut rooms = self.rooms.write().await;
        let engine = rooms.get_mut(&game_id)?;
        Some(f(engine))
    }

    /// Drop a game. The default game cannot be removed.
    pub async fn remove(&self, game_id: i64) -> bool {
        if game_id == DEFAULT_GAME_ID {
            return false;
        }
        self.rooms.write().await.remove(&game_id).is_some()
    }

    pub async fn game_ids(&self) -> Vec<i64> {
        let rooms = self.rooms.read().await;
        let mut ids: Vec<i64> = rooms.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
