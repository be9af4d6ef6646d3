use serde::{Deserialize, Serialize};

use super::card::Card;
use super::column::ColumnView;
use super::field::FieldDefinition;
use super::ids::{BoardId, CardId, ColumnId, FieldId, LabelId, WorkspaceId};
use super::label::Label;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub workspace_id: WorkspaceId,
    pub name: String,
    pub column_ids: Vec<ColumnId>,
    pub field_ids: Vec<FieldId>,
    pub label_ids: Vec<LabelId>,
}

impl Board {
    pub fn new(id: BoardId, workspace_id: WorkspaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            workspace_id,
            name: name.into(),
            column_ids: vec![],
            field_ids: vec![],
            label_ids: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub id: BoardId,
    pub name: String,
    pub column_count: usize,
    pub card_count: usize,
}

/// Fully materialized board: columns with their cards in display order, plus
/// the board's labels and field definitions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub id: BoardId,
    pub workspace_id: WorkspaceId,
    pub name: String,
    pub columns: Vec<ColumnView>,
    pub field_definitions: Vec<FieldDefinition>,
    pub labels: Vec<Label>,
}

impl BoardView {
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|col| col.cards.len()).sum()
    }

    pub fn column(&self, id: &ColumnId) -> Option<&ColumnView> {
        self.columns.iter().find(|col| &col.id == id)
    }

    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.columns
            .iter()
            .flat_map(|col| col.cards.iter())
            .find(|card| &card.id == id)
    }

    pub fn label(&self, id: &LabelId) -> Option<&Label> {
        self.labels.iter().find(|label| &label.id == id)
    }
}
