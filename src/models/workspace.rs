use serde::{Deserialize, Serialize};

use super::board::BoardSummary;
use super::ids::{BoardId, WorkspaceId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    /// Display order of the workspace's boards.
    pub board_ids: Vec<BoardId>,
}

impl Workspace {
    pub fn new(id: WorkspaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            board_ids: vec![],
        }
    }
}

/// Sidebar-shaped view of a workspace and its boards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceView {
    pub id: WorkspaceId,
    pub name: String,
    pub boards: Vec<BoardSummary>,
}
