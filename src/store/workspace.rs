use tracing::debug;

use super::BoardStore;
use crate::error::{require_non_blank, Result};
use crate::models::{Workspace, WorkspaceId};

impl BoardStore {
    /// Appends a workspace with no boards.
    pub fn add_workspace(&mut self, name: &str) -> Result<WorkspaceId> {
        require_non_blank("Workspace name", name)?;

        self.transact("add_workspace", |state, _| {
            let id = WorkspaceId::generate();
            state.insert_workspace(Workspace::new(id.clone(), name));
            debug!(workspace_id = %id, "workspace added");
            Ok(id)
        })
    }

    pub fn rename_workspace(&mut self, workspace_id: &WorkspaceId, name: &str) -> Result<()> {
        require_non_blank("Workspace name", name)?;

        self.transact("rename_workspace", |state, _| {
            state.workspace_mut(workspace_id)?.name = name.to_string();
            debug!(workspace_id = %workspace_id, "workspace renamed");
            Ok(())
        })
    }

    /// Removes the workspace and every board it contains, cascading to their
    /// columns, cards, labels and field definitions.
    pub fn delete_workspace(&mut self, workspace_id: &WorkspaceId) -> Result<()> {
        self.transact("delete_workspace", |state, _| {
            let workspace = state.require_workspace(workspace_id)?.clone();

            for board_id in &workspace.board_ids {
                state.purge_board(board_id);
            }
            state.workspaces.remove(workspace_id);
            state.workspace_order.retain(|id| id != workspace_id);
            state.reassign_active_board(&workspace.board_ids);

            debug!(
                workspace_id = %workspace_id,
                boards = workspace.board_ids.len(),
                "workspace deleted"
            );
            Ok(())
        })
    }
}
