//! Synchronized access to a session and the per-turn clock.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::errors::GameError;
use crate::player::{ContenderId, PlayerAction};
use crate::session::{ActionOutcome, GameSession};
use crate::view::PublicView;

/// Cloneable handle to one session. All mutation from drivers, bots and
/// timers goes through the same lock.
#[derive(Clone)]
pub struct SharedTable {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedTable {
    pub fn new(session: GameSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn submit(&self, id: ContenderId, action: PlayerAction) -> Result<ActionOutcome, GameError> {
        self.lock()?.apply_action(id, action)
    }

    pub fn view(&self, id: ContenderId) -> Result<PublicView, GameError> {
        self.lock()?.public_view(id)
    }

    /// Runs `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameSession) -> R) -> Result<R, GameError> {
        let mut session = self.lock()?;
        Ok(f(&mut session))
    }

    fn lock(&self) -> Result<MutexGuard<'_, GameSession>, GameError> {
        self.inner.lock().map_err(|_| GameError::TableUnavailable)
    }
}

/// Folds the contender to act if they have not acted within the limit.
///
/// The clock remembers the session's turn token when armed; if anything
/// has happened at the table since, the expiry does nothing.
#[derive(Debug, Default)]
pub struct TurnTimer {
    task: Option<JoinHandle<()>>,
}

impl TurnTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the clock for whoever is to act now, replacing any earlier
    /// one. Returns `false` when nobody is to act.
    pub fn arm(&mut self, table: &SharedTable, limit: Duration) -> Result<bool, GameError> {
        self.cancel();
        let (actor, token) = table.with(|s| (s.current_actor(), s.turn_token()))?;
        let Some(actor) = actor else {
            return Ok(false);
        };
        let table = table.clone();
        let deadline = tokio::time::Instant::now() + limit;
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Err(err) = table.with(|s| s.fold_on_timeout(actor, token)).and_then(|r| r) {
                debug!(%err, "turn timer could not reach the table");
            }
        }));
        debug!(contender = %actor, token, ?limit, "turn timer armed");
        Ok(true)
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for TurnTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
