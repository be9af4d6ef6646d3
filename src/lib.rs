pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod state;
pub mod store;

pub use config::StoreConfig;
pub use error::{EntityKind, Result, StoreError};
pub use state::BoardState;
pub use store::{BoardStore, SubscriptionId};

pub mod test_utils {
    use crate::config::StoreConfig;
    use crate::models::{BoardId, CardId, ColumnId, WorkspaceId};
    use crate::store::BoardStore;

    /// Store holding the demo data, `board-1` active.
    pub fn create_test_store() -> BoardStore {
        BoardStore::from_config(StoreConfig::default())
    }

    pub fn create_empty_store() -> BoardStore {
        BoardStore::new(StoreConfig {
            seed_demo: false,
            ..StoreConfig::default()
        })
    }

    /// Adds a workspace with one board and makes that board active.
    pub fn create_test_board(store: &mut BoardStore, name: &str) -> (WorkspaceId, BoardId) {
        let workspace_id = store
            .add_workspace("Test Workspace")
            .expect("Failed to add workspace");
        let board_id = store
            .add_board(&workspace_id, name)
            .expect("Failed to add board");
        store.set_active_board(&board_id);
        (workspace_id, board_id)
    }

    pub fn create_test_cards(
        store: &mut BoardStore,
        column_id: &ColumnId,
        titles: &[&str],
    ) -> Vec<CardId> {
        titles
            .iter()
            .map(|title| store.add_card(column_id, title).expect("Failed to add card"))
            .collect()
    }

    pub fn column_card_ids(store: &BoardStore, column_id: &ColumnId) -> Vec<CardId> {
        store
            .state()
            .column(column_id)
            .map(|col| col.card_ids.clone())
            .unwrap_or_default()
    }
}
