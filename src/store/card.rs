use tracing::{debug, warn};

use super::BoardStore;
use crate::error::{require_non_blank, EntityKind, Result, StoreError};
use crate::models::{Card, CardId, ColumnId, FieldId, FieldValue, UpdateCard};

impl BoardStore {
    /// Appends a new card with no metadata to the column, wherever the column
    /// lives.
    pub fn add_card(&mut self, column_id: &ColumnId, title: &str) -> Result<CardId> {
        require_non_blank("Card title", title)?;

        self.transact("add_card", |state, _| {
            let id = CardId::generate();
            state.insert_card(Card::new(id.clone(), column_id.clone(), title))?;
            debug!(card_id = %id, column_id = %column_id, "card added");
            Ok(id)
        })
    }

    /// Shallow-merges `input` into the card. Label ids in the patch must all
    /// belong to the card's board.
    pub fn update_card(&mut self, card_id: &CardId, mut input: UpdateCard) -> Result<()> {
        if let Some(title) = &input.title {
            require_non_blank("Card title", title)?;
        }
        if let Some(label_ids) = input.label_ids.as_mut() {
            let mut seen = std::collections::HashSet::new();
            label_ids.retain(|id| seen.insert(id.clone()));
        }

        self.transact("update_card", |state, config| {
            state.require_card(card_id)?;

            if let Some(label_ids) = &input.label_ids {
                let board_id = state
                    .board_of_card(card_id)
                    .cloned()
                    .ok_or_else(|| StoreError::not_found(EntityKind::Column, card_id))?;
                for label_id in label_ids {
                    state.require_board_label(&board_id, label_id)?;
                }
                if label_ids.len() > config.max_labels_per_card {
                    return Err(StoreError::Validation(format!(
                        "A card holds at most {} labels",
                        config.max_labels_per_card
                    )));
                }
            }

            input.apply_to(state.card_mut(card_id)?);

            debug!(card_id = %card_id, "card updated");
            Ok(())
        })
    }

    /// Drag-and-drop move within the active board.
    ///
    /// The card is first removed from the source column and then inserted
    /// into the destination column at `dest_index`, so indices are
    /// interpreted against the list with the card already taken out. When
    /// both columns are the same this is a pure reorder.
    ///
    /// The card is located in the source column by id. `source_index` is
    /// only checked against that position: a mismatch is logged and the
    /// actual position is used. A card missing from the source column is
    /// `NotFound`.
    pub fn move_card(
        &mut self,
        card_id: &CardId,
        source_column_id: &ColumnId,
        dest_column_id: &ColumnId,
        source_index: usize,
        dest_index: usize,
    ) -> Result<()> {
        self.transact("move_card", |state, _| {
            let board_id = state
                .active_board
                .clone()
                .filter(|id| state.boards.contains_key(id))
                .ok_or_else(|| StoreError::not_found(EntityKind::Board, "<active>"))?;

            for column_id in [source_column_id, dest_column_id] {
                let column = state.require_column(column_id)?;
                if column.board_id != board_id {
                    return Err(StoreError::not_found(EntityKind::Column, column_id));
                }
            }

            let from = state
                .require_column(source_column_id)?
                .position_of(card_id)
                .ok_or_else(|| StoreError::not_found(EntityKind::Card, card_id))?;
            if from != source_index {
                warn!(
                    card_id = %card_id,
                    source_index,
                    actual_index = from,
                    "stale source index, using the card's actual position"
                );
            }

            let source = state.column_mut(source_column_id)?;
            let moved = source.card_ids.remove(from);

            let dest = state.column_mut(dest_column_id)?;
            let at = dest_index.min(dest.card_ids.len());
            dest.card_ids.insert(at, moved);

            if source_column_id != dest_column_id {
                state.card_mut(card_id)?.column_id = dest_column_id.clone();
            }

            debug!(
                card_id = %card_id,
                from = %source_column_id,
                to = %dest_column_id,
                dest_index = at,
                "card moved"
            );
            Ok(())
        })
    }

    pub fn delete_card(&mut self, card_id: &CardId) -> Result<()> {
        self.transact("delete_card", |state, _| {
            let column_id = state.require_card(card_id)?.column_id.clone();

            state
                .column_mut(&column_id)?
                .card_ids
                .retain(|id| id != card_id);
            state.cards.remove(card_id);

            debug!(card_id = %card_id, column_id = %column_id, "card deleted");
            Ok(())
        })
    }

    /// Sets the card's value for `field_id`, or clears it when `value` is
    /// `None`. The field must be defined on the card's board. The value's
    /// shape is not checked against the definition's type; see
    /// [`FieldDefinition::accepts`](crate::models::FieldDefinition::accepts).
    pub fn set_card_field_value(
        &mut self,
        card_id: &CardId,
        field_id: &FieldId,
        value: Option<FieldValue>,
    ) -> Result<()> {
        self.transact("set_card_field_value", |state, _| {
            state.require_card(card_id)?;
            let board_id = state
                .board_of_card(card_id)
                .cloned()
                .ok_or_else(|| StoreError::not_found(EntityKind::Column, card_id))?;
            state.require_board_field(&board_id, field_id)?;

            let card = state.card_mut(card_id)?;
            match value {
                Some(value) => {
                    card.field_values.insert(field_id.clone(), value);
                }
                None => {
                    card.field_values.remove(field_id);
                }
            }

            debug!(card_id = %card_id, field_id = %field_id, "card field value set");
            Ok(())
        })
    }
}
