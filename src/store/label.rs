use tracing::debug;

use super::BoardStore;
use crate::error::{require_non_blank, EntityKind, Result, StoreError};
use crate::models::{BoardId, CardId, CreateLabel, LabelId, UpdateLabel};

impl BoardStore {
    pub fn add_label(&mut self, board_id: &BoardId, input: CreateLabel) -> Result<LabelId> {
        require_non_blank("Label name", &input.name)?;

        self.transact("add_label", |state, _| {
            let id = LabelId::generate();
            state.insert_label(input.into_label(id.clone(), board_id.clone()))?;
            debug!(label_id = %id, board_id = %board_id, "label added");
            Ok(id)
        })
    }

    pub fn update_label(
        &mut self,
        board_id: &BoardId,
        label_id: &LabelId,
        input: UpdateLabel,
    ) -> Result<()> {
        if let Some(name) = &input.name {
            require_non_blank("Label name", name)?;
        }

        self.transact("update_label", |state, _| {
            state.require_board(board_id)?;
            state.require_board_label(board_id, label_id)?;

            let label = state
                .labels
                .get_mut(label_id)
                .ok_or_else(|| StoreError::not_found(EntityKind::Label, label_id))?;
            input.apply_to(label);

            debug!(label_id = %label_id, board_id = %board_id, "label updated");
            Ok(())
        })
    }

    /// Removes the label from the board and strips its id from every card on
    /// that board.
    pub fn delete_label(&mut self, board_id: &BoardId, label_id: &LabelId) -> Result<()> {
        self.transact("delete_label", |state, _| {
            state.require_board(board_id)?;
            state.require_board_label(board_id, label_id)?;

            state
                .board_mut(board_id)?
                .label_ids
                .retain(|id| id != label_id);
            state.labels.remove(label_id);

            let holders: Vec<_> = state
                .board_card_ids(board_id)
                .into_iter()
                .filter(|id| state.card(id).is_some_and(|card| card.has_label(label_id)))
                .collect();
            for card_id in &holders {
                state
                    .card_mut(card_id)?
                    .label_ids
                    .retain(|id| id != label_id);
            }

            debug!(
                label_id = %label_id,
                board_id = %board_id,
                cards = holders.len(),
                "label deleted"
            );
            Ok(())
        })
    }

    /// Removes `label_id` from the card if present, appends it otherwise.
    /// Returns whether the card carries the label afterwards.
    pub fn toggle_card_label(&mut self, card_id: &CardId, label_id: &LabelId) -> Result<bool> {
        self.transact("toggle_card_label", |state, config| {
            state.require_card(card_id)?;
            let board_id = state
                .board_of_card(card_id)
                .cloned()
                .ok_or_else(|| StoreError::not_found(EntityKind::Column, card_id))?;
            state.require_board_label(&board_id, label_id)?;

            let card = state.card_mut(card_id)?;
            let attached = if card.has_label(label_id) {
                card.label_ids.retain(|id| id != label_id);
                false
            } else {
                if card.label_ids.len() >= config.max_labels_per_card {
                    return Err(StoreError::Validation(format!(
                        "A card holds at most {} labels",
                        config.max_labels_per_card
                    )));
                }
                card.label_ids.push(label_id.clone());
                true
            };

            debug!(card_id = %card_id, label_id = %label_id, attached, "card label toggled");
            Ok(attached)
        })
    }
}
