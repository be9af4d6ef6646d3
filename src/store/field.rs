use tracing::debug;

use super::BoardStore;
use crate::error::Result;
use crate::models::{BoardId, CreateFieldDefinition, FieldId, UpdateFieldDefinition};

impl BoardStore {
    /// Appends a field definition to the board's schema. `select` fields must
    /// come with at least one option.
    pub fn add_field_definition(
        &mut self,
        board_id: &BoardId,
        input: CreateFieldDefinition,
    ) -> Result<FieldId> {
        self.transact("add_field_definition", |state, _| {
            let id = FieldId::generate();
            let def = input.into_definition(id.clone(), board_id.clone());
            def.validate()?;
            state.insert_field(def)?;

            debug!(field_id = %id, board_id = %board_id, "field definition added");
            Ok(id)
        })
    }

    pub fn update_field_definition(
        &mut self,
        board_id: &BoardId,
        field_id: &FieldId,
        input: UpdateFieldDefinition,
    ) -> Result<()> {
        self.transact("update_field_definition", |state, _| {
            state.require_board(board_id)?;
            let mut def = state.require_board_field(board_id, field_id)?.clone();
            input.apply_to(&mut def);
            def.validate()?;
            state.fields.insert(field_id.clone(), def);

            debug!(field_id = %field_id, board_id = %board_id, "field definition updated");
            Ok(())
        })
    }

    /// Removes the definition and purges the values cards on the board hold
    /// for it.
    pub fn delete_field_definition(
        &mut self,
        board_id: &BoardId,
        field_id: &FieldId,
    ) -> Result<()> {
        self.transact("delete_field_definition", |state, _| {
            state.require_board(board_id)?;
            state.require_board_field(board_id, field_id)?;

            state
                .board_mut(board_id)?
                .field_ids
                .retain(|id| id != field_id);
            state.fields.remove(field_id);

            let holders: Vec<_> = state
                .board_card_ids(board_id)
                .into_iter()
                .filter(|id| {
                    state
                        .card(id)
                        .is_some_and(|card| card.field_values.contains_key(field_id))
                })
                .collect();
            for card_id in &holders {
                state.card_mut(card_id)?.field_values.remove(field_id);
            }

            debug!(
                field_id = %field_id,
                board_id = %board_id,
                values = holders.len(),
                "field definition deleted"
            );
            Ok(())
        })
    }
}
