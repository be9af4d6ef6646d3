//! The board store: single owner and single mutation authority for the
//! workspace → board → column → card hierarchy.
//!
//! Every mutation runs against a draft copy of the current [`BoardState`].
//! The draft replaces the published snapshot only when the whole operation
//! succeeded, so a rejected call leaves the state untouched and readers
//! holding a snapshot never observe a half-applied change. Subscribers are
//! called synchronously, once, after each successful mutation.

pub mod board;
pub mod card;
pub mod column;
pub mod field;
pub mod label;
pub mod workspace;

use std::fmt;
use std::sync::Arc;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::models::{BoardId, BoardView};
use crate::seed;
use crate::state::BoardState;

pub type Listener = Box<dyn Fn(&BoardState) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct BoardStore {
    state: Arc<BoardState>,
    config: StoreConfig,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl BoardStore {
    /// Empty store: no workspaces, no active board.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_state(BoardState::new(), config)
    }

    pub fn with_state(state: BoardState, config: StoreConfig) -> Self {
        Self {
            state: Arc::new(state),
            config,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Store initialized the way `config.seed_demo` asks for.
    pub fn from_config(config: StoreConfig) -> Self {
        if config.seed_demo {
            Self::with_state(seed::demo_state(), config)
        } else {
            Self::new(config)
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Cheap handle on the current snapshot. It stays valid and unchanged
    /// while the store keeps mutating.
    pub fn snapshot(&self) -> Arc<BoardState> {
        Arc::clone(&self.state)
    }

    pub fn current_board(&self) -> Option<BoardView> {
        self.state.current_board()
    }

    pub fn active_board_id(&self) -> Option<&BoardId> {
        self.state.active_board_id()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&BoardState) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Applies `op` to a draft of the state and publishes it on success.
    pub(crate) fn transact<T, F>(&mut self, action: &'static str, op: F) -> Result<T>
    where
        F: FnOnce(&mut BoardState, &StoreConfig) -> Result<T>,
    {
        let mut draft = BoardState::clone(&self.state);
        match op(&mut draft, &self.config) {
            Ok(out) => {
                self.publish(action, draft);
                Ok(out)
            }
            Err(err) => {
                if err.is_not_found() {
                    tracing::debug!(action, error = %err, "mutation skipped");
                } else {
                    tracing::warn!(action, error = %err, "mutation rejected");
                }
                Err(err)
            }
        }
    }

    /// Replaces the current snapshot with `next` and notifies subscribers.
    pub(crate) fn publish(&mut self, action: &'static str, next: BoardState) {
        self.state = Arc::new(next);
        tracing::trace!(action, listeners = self.listeners.len(), "state published");
        self.notify();
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardStore")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
