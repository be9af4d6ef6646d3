use tracing::debug;

use super::BoardStore;
use crate::error::{require_non_blank, Result};
use crate::models::{BoardId, Column, ColumnId, UpdateColumn};

impl BoardStore {
    /// Appends an empty `slate` column to the board.
    pub fn add_column(&mut self, board_id: &BoardId, title: &str) -> Result<ColumnId> {
        require_non_blank("Column title", title)?;

        self.transact("add_column", |state, _| {
            let id = ColumnId::generate();
            state.insert_column(Column::new(id.clone(), board_id.clone(), title))?;
            debug!(column_id = %id, board_id = %board_id, "column added");
            Ok(id)
        })
    }

    pub fn update_column(&mut self, column_id: &ColumnId, input: UpdateColumn) -> Result<()> {
        if let Some(title) = &input.title {
            require_non_blank("Column title", title)?;
        }

        self.transact("update_column", |state, _| {
            let column = state.column_mut(column_id)?;
            input.apply_to(column);
            debug!(column_id = %column_id, "column updated");
            Ok(())
        })
    }

    /// Reorders a column within its board: it is removed from its current
    /// slot, then inserted at `dest_index` (clamped to the end).
    pub fn move_column(&mut self, column_id: &ColumnId, dest_index: usize) -> Result<()> {
        self.transact("move_column", |state, _| {
            let board_id = state.require_column(column_id)?.board_id.clone();
            let board = state.board_mut(&board_id)?;

            if let Some(from) = board.column_ids.iter().position(|id| id == column_id) {
                let id = board.column_ids.remove(from);
                let at = dest_index.min(board.column_ids.len());
                board.column_ids.insert(at, id);
            }

            debug!(column_id = %column_id, dest_index, "column moved");
            Ok(())
        })
    }

    /// Removes the column together with all of its cards.
    pub fn delete_column(&mut self, column_id: &ColumnId) -> Result<()> {
        self.transact("delete_column", |state, _| {
            let board_id = state.require_column(column_id)?.board_id.clone();

            state
                .board_mut(&board_id)?
                .column_ids
                .retain(|id| id != column_id);
            let removed = state.purge_column(column_id);

            debug!(
                column_id = %column_id,
                cards = removed.map_or(0, |col| col.card_ids.len()),
                "column deleted"
            );
            Ok(())
        })
    }
}
