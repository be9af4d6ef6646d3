use tracing::debug;

use super::BoardStore;
use crate::error::{require_non_blank, Result};
use crate::models::{Board, BoardId, BoardView, CreateLabel, LabelId, WorkspaceId, DEFAULT_LABELS};
use crate::state::BoardState;

impl BoardStore {
    /// Points the active-board selector at `board_id`. The id is not checked;
    /// an unknown id simply makes [`get_current_board`](Self::get_current_board)
    /// return `None`.
    pub fn set_active_board(&mut self, board_id: &BoardId) {
        let mut next = BoardState::clone(self.state());
        next.active_board = Some(board_id.clone());
        debug!(board_id = %board_id, "active board changed");
        self.publish("set_active_board", next);
    }

    pub fn get_current_board(&self) -> Option<BoardView> {
        self.current_board()
    }

    /// Appends a new board to the workspace, seeded with the default labels
    /// unless disabled in the config.
    pub fn add_board(&mut self, workspace_id: &WorkspaceId, name: &str) -> Result<BoardId> {
        require_non_blank("Board name", name)?;

        self.transact("add_board", |state, config| {
            let id = BoardId::generate();
            state.insert_board(Board::new(id.clone(), workspace_id.clone(), name))?;

            if config.default_labels {
                for (label_name, color) in DEFAULT_LABELS {
                    let label = CreateLabel::new(label_name, color)
                        .into_label(LabelId::generate(), id.clone());
                    state.insert_label(label)?;
                }
            }

            debug!(board_id = %id, workspace_id = %workspace_id, "board added");
            Ok(id)
        })
    }

    pub fn rename_board(&mut self, board_id: &BoardId, name: &str) -> Result<()> {
        require_non_blank("Board name", name)?;

        self.transact("rename_board", |state, _| {
            state.board_mut(board_id)?.name = name.to_string();
            debug!(board_id = %board_id, "board renamed");
            Ok(())
        })
    }

    /// Removes the board and everything it owns. If it was the active board
    /// the selector moves to the first remaining board, or to none.
    pub fn delete_board(&mut self, board_id: &BoardId) -> Result<()> {
        self.transact("delete_board", |state, _| {
            let workspace_id = state.require_board(board_id)?.workspace_id.clone();

            state.purge_board(board_id);
            state
                .workspace_mut(&workspace_id)?
                .board_ids
                .retain(|id| id != board_id);
            state.reassign_active_board(std::slice::from_ref(board_id));

            debug!(
                board_id = %board_id,
                active = ?state.active_board,
                "board deleted"
            );
            Ok(())
        })
    }
}
