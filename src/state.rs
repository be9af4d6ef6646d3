//! Normalized, immutable snapshot of every entity the store owns.
//!
//! Entities live in per-kind arenas keyed by id. Ordering lives in the parent
//! (`Workspace::board_ids`, `Board::column_ids`, `Column::card_ids`, ...) and
//! every child records its parent id, so lookups by id never scan the tree.
//! The arenas are persistent maps: cloning a `BoardState` is O(1) and a
//! mutation only copies the entries it touches.

use im::{HashMap, Vector};
use serde::Serialize;

use crate::error::{EntityKind, Result, StoreError};
use crate::models::{
    Board, BoardId, BoardSummary, BoardView, Card, CardId, Column, ColumnId, ColumnView,
    FieldDefinition, FieldId, FieldValue, Label, LabelId, Workspace, WorkspaceId, WorkspaceView,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub(crate) workspace_order: Vector<WorkspaceId>,
    pub(crate) workspaces: HashMap<WorkspaceId, Workspace>,
    pub(crate) boards: HashMap<BoardId, Board>,
    pub(crate) columns: HashMap<ColumnId, Column>,
    pub(crate) cards: HashMap<CardId, Card>,
    pub(crate) labels: HashMap<LabelId, Label>,
    pub(crate) fields: HashMap<FieldId, FieldDefinition>,
    pub(crate) active_board: Option<BoardId>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Entity lookups
    // ------------------------------------------------------------------

    pub fn workspaces(&self) -> impl Iterator<Item = &Workspace> + '_ {
        self.workspace_order
            .iter()
            .filter_map(|id| self.workspaces.get(id))
    }

    pub fn workspace(&self, id: &WorkspaceId) -> Option<&Workspace> {
        self.workspaces.get(id)
    }

    pub fn board(&self, id: &BoardId) -> Option<&Board> {
        self.boards.get(id)
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn label(&self, id: &LabelId) -> Option<&Label> {
        self.labels.get(id)
    }

    pub fn field_definition(&self, id: &FieldId) -> Option<&FieldDefinition> {
        self.fields.get(id)
    }

    pub fn active_board_id(&self) -> Option<&BoardId> {
        self.active_board.as_ref()
    }

    /// Board of the column holding `card_id`.
    pub fn board_of_card(&self, card_id: &CardId) -> Option<&BoardId> {
        let card = self.cards.get(card_id)?;
        self.columns.get(&card.column_id).map(|col| &col.board_id)
    }

    /// First board in workspace order, then board order.
    pub fn first_board_id(&self) -> Option<BoardId> {
        self.workspaces()
            .flat_map(|ws| ws.board_ids.iter())
            .next()
            .cloned()
    }

    pub fn workspace_count(&self) -> usize {
        self.workspaces.len()
    }

    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    // ------------------------------------------------------------------
    // Board-scoped queries
    // ------------------------------------------------------------------

    pub fn board_columns(&self, board_id: &BoardId) -> Vec<&Column> {
        self.boards
            .get(board_id)
            .map(|board| {
                board
                    .column_ids
                    .iter()
                    .filter_map(|id| self.columns.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn column_cards(&self, column_id: &ColumnId) -> Vec<&Card> {
        self.columns
            .get(column_id)
            .map(|col| {
                col.card_ids
                    .iter()
                    .filter_map(|id| self.cards.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn board_labels(&self, board_id: &BoardId) -> Vec<&Label> {
        self.boards
            .get(board_id)
            .map(|board| {
                board
                    .label_ids
                    .iter()
                    .filter_map(|id| self.labels.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn board_field_definitions(&self, board_id: &BoardId) -> Vec<&FieldDefinition> {
        self.boards
            .get(board_id)
            .map(|board| {
                board
                    .field_ids
                    .iter()
                    .filter_map(|id| self.fields.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn column_card_count(&self, column_id: &ColumnId) -> usize {
        self.columns
            .get(column_id)
            .map_or(0, |col| col.card_ids.len())
    }

    pub fn card_count(&self, board_id: &BoardId) -> usize {
        self.boards.get(board_id).map_or(0, |board| {
            board
                .column_ids
                .iter()
                .map(|id| self.column_card_count(id))
                .sum()
        })
    }

    /// Card lookup restricted to one board.
    pub fn find_card(&self, board_id: &BoardId, card_id: &CardId) -> Option<&Card> {
        match self.board_of_card(card_id) {
            Some(owner) if owner == board_id => self.cards.get(card_id),
            _ => None,
        }
    }

    /// Labels of the board that at least one of its cards carries, in board
    /// label order.
    pub fn labels_in_use(&self, board_id: &BoardId) -> Vec<&Label> {
        let used: std::collections::HashSet<&LabelId> = self
            .board_card_ids(board_id)
            .into_iter()
            .filter_map(|id| self.cards.get(&id))
            .flat_map(|card| card.label_ids.iter())
            .collect();

        self.board_labels(board_id)
            .into_iter()
            .filter(|label| used.contains(&label.id))
            .collect()
    }

    /// Values to preview on the card face: definitions flagged `show_on_card`
    /// for which the card holds a value, in definition order.
    pub fn card_face_fields(&self, card_id: &CardId) -> Vec<(&FieldDefinition, &FieldValue)> {
        let (Some(card), Some(board_id)) = (self.cards.get(card_id), self.board_of_card(card_id))
        else {
            return vec![];
        };

        self.board_field_definitions(board_id)
            .into_iter()
            .filter(|def| def.show_on_card)
            .filter_map(|def| card.field_values.get(&def.id).map(|value| (def, value)))
            .collect()
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// The board selected by the active-board selector, if it still exists.
    pub fn current_board(&self) -> Option<BoardView> {
        self.active_board
            .as_ref()
            .and_then(|id| self.board_view(id))
    }

    pub fn board_view(&self, board_id: &BoardId) -> Option<BoardView> {
        let board = self.boards.get(board_id)?;

        let columns = self
            .board_columns(board_id)
            .into_iter()
            .map(|col| ColumnView {
                id: col.id.clone(),
                board_id: col.board_id.clone(),
                title: col.title.clone(),
                color: col.color,
                cards: self.column_cards(&col.id).into_iter().cloned().collect(),
            })
            .collect();

        Some(BoardView {
            id: board.id.clone(),
            workspace_id: board.workspace_id.clone(),
            name: board.name.clone(),
            columns,
            field_definitions: self
                .board_field_definitions(board_id)
                .into_iter()
                .cloned()
                .collect(),
            labels: self.board_labels(board_id).into_iter().cloned().collect(),
        })
    }

    pub fn board_summary(&self, board_id: &BoardId) -> Option<BoardSummary> {
        let board = self.boards.get(board_id)?;
        Some(BoardSummary {
            id: board.id.clone(),
            name: board.name.clone(),
            column_count: board.column_ids.len(),
            card_count: self.card_count(board_id),
        })
    }

    pub fn workspace_views(&self) -> Vec<WorkspaceView> {
        self.workspaces()
            .map(|ws| WorkspaceView {
                id: ws.id.clone(),
                name: ws.name.clone(),
                boards: ws
                    .board_ids
                    .iter()
                    .filter_map(|id| self.board_summary(id))
                    .collect(),
            })
            .collect()
    }

    /// Describes every broken cross-reference in the arena. Empty when the
    /// hierarchy is consistent.
    pub fn integrity_violations(&self) -> Vec<String> {
        let mut problems = Vec::new();

        for ws_id in &self.workspace_order {
            if !self.workspaces.contains_key(ws_id) {
                problems.push(format!("workspace order lists missing {}", ws_id));
            }
        }
        for ws in self.workspaces.values() {
            for board_id in &ws.board_ids {
                match self.boards.get(board_id) {
                    Some(board) if board.workspace_id == ws.id => {}
                    Some(_) => problems.push(format!("{} has wrong parent", board_id)),
                    None => problems.push(format!("{} lists missing {}", ws.id, board_id)),
                }
            }
        }
        for board in self.boards.values() {
            for col_id in &board.column_ids {
                match self.columns.get(col_id) {
                    Some(col) if col.board_id == board.id => {}
                    Some(_) => problems.push(format!("{} has wrong parent", col_id)),
                    None => problems.push(format!("{} lists missing {}", board.id, col_id)),
                }
            }
            for label_id in &board.label_ids {
                if self.labels.get(label_id).map(|l| &l.board_id) != Some(&board.id) {
                    problems.push(format!("{} lists foreign or missing {}", board.id, label_id));
                }
            }
            for field_id in &board.field_ids {
                if self.fields.get(field_id).map(|f| &f.board_id) != Some(&board.id) {
                    problems.push(format!("{} lists foreign or missing {}", board.id, field_id));
                }
            }
        }
        for col in self.columns.values() {
            for card_id in &col.card_ids {
                match self.cards.get(card_id) {
                    Some(card) if card.column_id == col.id => {}
                    Some(_) => problems.push(format!("{} has wrong parent", card_id)),
                    None => problems.push(format!("{} lists missing {}", col.id, card_id)),
                }
            }
        }
        for card in self.cards.values() {
            let Some(board_id) = self.board_of_card(&card.id) else {
                problems.push(format!("{} is orphaned", card.id));
                continue;
            };
            for label_id in &card.label_ids {
                if self.labels.get(label_id).map(|l| &l.board_id) != Some(board_id) {
                    problems.push(format!("{} references foreign label {}", card.id, label_id));
                }
            }
            for field_id in card.field_values.keys() {
                if self.fields.get(field_id).map(|f| &f.board_id) != Some(board_id) {
                    problems.push(format!("{} holds orphaned value for {}", card.id, field_id));
                }
            }
        }

        problems
    }

    // ------------------------------------------------------------------
    // Arena plumbing used by the store's mutations
    // ------------------------------------------------------------------

    pub(crate) fn board_card_ids(&self, board_id: &BoardId) -> Vec<CardId> {
        self.board_columns(board_id)
            .into_iter()
            .flat_map(|col| col.card_ids.iter().cloned())
            .collect()
    }

    pub(crate) fn workspace_mut(&mut self, id: &WorkspaceId) -> Result<&mut Workspace> {
        self.workspaces
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Workspace, id))
    }

    pub(crate) fn board_mut(&mut self, id: &BoardId) -> Result<&mut Board> {
        self.boards
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Board, id))
    }

    pub(crate) fn column_mut(&mut self, id: &ColumnId) -> Result<&mut Column> {
        self.columns
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Column, id))
    }

    pub(crate) fn card_mut(&mut self, id: &CardId) -> Result<&mut Card> {
        self.cards
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Card, id))
    }

    pub(crate) fn require_workspace(&self, id: &WorkspaceId) -> Result<&Workspace> {
        self.workspaces
            .get(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Workspace, id))
    }

    pub(crate) fn require_board(&self, id: &BoardId) -> Result<&Board> {
        self.boards
            .get(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Board, id))
    }

    pub(crate) fn require_column(&self, id: &ColumnId) -> Result<&Column> {
        self.columns
            .get(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Column, id))
    }

    pub(crate) fn require_card(&self, id: &CardId) -> Result<&Card> {
        self.cards
            .get(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Card, id))
    }

    /// Label `label_id`, only if it belongs to `board_id`.
    pub(crate) fn require_board_label(
        &self,
        board_id: &BoardId,
        label_id: &LabelId,
    ) -> Result<&Label> {
        self.labels
            .get(label_id)
            .filter(|label| &label.board_id == board_id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Label, label_id))
    }

    /// Field definition `field_id`, only if it belongs to `board_id`.
    pub(crate) fn require_board_field(
        &self,
        board_id: &BoardId,
        field_id: &FieldId,
    ) -> Result<&FieldDefinition> {
        self.fields
            .get(field_id)
            .filter(|def| &def.board_id == board_id)
            .ok_or_else(|| StoreError::not_found(EntityKind::FieldDefinition, field_id))
    }

    pub(crate) fn insert_workspace(&mut self, workspace: Workspace) {
        self.workspace_order.push_back(workspace.id.clone());
        self.workspaces.insert(workspace.id.clone(), workspace);
    }

    /// Appends `board` to its workspace. The workspace must exist.
    pub(crate) fn insert_board(&mut self, board: Board) -> Result<()> {
        self.workspace_mut(&board.workspace_id)?
            .board_ids
            .push(board.id.clone());
        self.boards.insert(board.id.clone(), board);
        Ok(())
    }

    pub(crate) fn insert_column(&mut self, column: Column) -> Result<()> {
        self.board_mut(&column.board_id)?
            .column_ids
            .push(column.id.clone());
        self.columns.insert(column.id.clone(), column);
        Ok(())
    }

    pub(crate) fn insert_card(&mut self, card: Card) -> Result<()> {
        self.column_mut(&card.column_id)?
            .card_ids
            .push(card.id.clone());
        self.cards.insert(card.id.clone(), card);
        Ok(())
    }

    pub(crate) fn insert_label(&mut self, label: Label) -> Result<()> {
        self.board_mut(&label.board_id)?
            .label_ids
            .push(label.id.clone());
        self.labels.insert(label.id.clone(), label);
        Ok(())
    }

    pub(crate) fn insert_field(&mut self, def: FieldDefinition) -> Result<()> {
        self.board_mut(&def.board_id)?
            .field_ids
            .push(def.id.clone());
        self.fields.insert(def.id.clone(), def);
        Ok(())
    }

    /// Drops a board and everything it owns from the arenas. The caller is
    /// responsible for unlinking it from its workspace.
    pub(crate) fn purge_board(&mut self, board_id: &BoardId) -> Option<Board> {
        let board = self.boards.remove(board_id)?;
        for col_id in &board.column_ids {
            self.purge_column(col_id);
        }
        for label_id in &board.label_ids {
            self.labels.remove(label_id);
        }
        for field_id in &board.field_ids {
            self.fields.remove(field_id);
        }
        Some(board)
    }

    /// Drops a column and its cards. The caller unlinks it from its board.
    pub(crate) fn purge_column(&mut self, column_id: &ColumnId) -> Option<Column> {
        let column = self.columns.remove(column_id)?;
        for card_id in &column.card_ids {
            self.cards.remove(card_id);
        }
        Some(column)
    }

    /// Moves the selector off `removed` boards if it pointed at one of them.
    pub(crate) fn reassign_active_board(&mut self, removed: &[BoardId]) {
        if self
            .active_board
            .as_ref()
            .is_some_and(|active| removed.contains(active))
        {
            self.active_board = self.first_board_id();
        }
    }
}
