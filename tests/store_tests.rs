use kanban_store::models::{
    BoardId, CardId, ColumnColor, ColumnId, CreateFieldDefinition, CreateLabel, FieldId,
    FieldType, FieldValue, LabelColor, LabelId, Priority, UpdateCard, UpdateColumn,
    UpdateFieldDefinition, UpdateLabel, WorkspaceId, DEFAULT_LABELS,
};
use kanban_store::test_utils::{self, column_card_ids, create_test_board, create_test_cards};
use kanban_store::{BoardStore, EntityKind, StoreConfig, StoreError};

fn setup_board() -> (BoardStore, BoardId) {
    let mut store = test_utils::create_empty_store();
    let (_, board_id) = create_test_board(&mut store, "Test Board");
    (store, board_id)
}

fn setup_column(titles: &[&str]) -> (BoardStore, BoardId, ColumnId, Vec<CardId>) {
    let (mut store, board_id) = setup_board();
    let column_id = store.add_column(&board_id, "To Do").unwrap();
    let cards = create_test_cards(&mut store, &column_id, titles);
    (store, board_id, column_id, cards)
}

// ============================================================================
// Workspace Tests
// ============================================================================

mod workspace_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_workspace() {
        let mut store = test_utils::create_empty_store();

        let id = store.add_workspace("Acme").unwrap();

        let workspace = store.state().workspace(&id).unwrap();
        assert_eq!(workspace.name, "Acme");
        assert!(workspace.board_ids.is_empty());
    }

    #[test]
    fn test_add_workspace_preserves_order() {
        let mut store = test_utils::create_empty_store();
        let first = store.add_workspace("First").unwrap();
        let second = store.add_workspace("Second").unwrap();

        let ids: Vec<_> = store.state().workspaces().map(|ws| ws.id.clone()).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_add_workspace_blank_name() {
        let mut store = test_utils::create_empty_store();

        let result = store.add_workspace("   ");

        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(store.state().workspace_count(), 0);
    }

    #[test]
    fn test_rename_workspace() {
        let mut store = test_utils::create_empty_store();
        let id = store.add_workspace("Old").unwrap();

        store.rename_workspace(&id, "New").unwrap();

        assert_eq!(store.state().workspace(&id).unwrap().name, "New");
    }

    #[test]
    fn test_delete_workspace_cascades() {
        let mut store = test_utils::create_test_store();
        let before = store.state().board_count();

        store
            .delete_workspace(&WorkspaceId::from("workspace-1"))
            .unwrap();

        assert_eq!(store.state().workspace_count(), 1);
        assert_eq!(store.state().board_count(), before - 3);
        assert!(store.state().card(&CardId::from("card-1")).is_none());
        assert!(store.state().label(&LabelId::from("label-1")).is_none());
        assert!(store.state().field_definition(&FieldId::from("field-1")).is_none());
        assert!(store.state().integrity_violations().is_empty());
    }

    #[test]
    fn test_delete_workspace_reassigns_active_board() {
        let mut store = test_utils::create_test_store();

        store
            .delete_workspace(&WorkspaceId::from("workspace-1"))
            .unwrap();

        assert_eq!(store.active_board_id(), Some(&BoardId::from("board-4")));
        assert_eq!(store.get_current_board().unwrap().name, "New House");
    }

    #[test]
    fn test_delete_missing_workspace() {
        let mut store = test_utils::create_test_store();
        let before = store.snapshot();

        let result = store.delete_workspace(&WorkspaceId::from("workspace-404"));

        assert!(result.unwrap_err().is_not_found());
        assert_eq!(*store.snapshot(), *before);
    }
}

// ============================================================================
// Board Tests
// ============================================================================

mod board_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_board_has_default_labels() {
        let (store, board_id) = setup_board();

        let board = store.state().board_view(&board_id).unwrap();
        assert_eq!(board.name, "Test Board");
        assert!(board.columns.is_empty());
        assert!(board.field_definitions.is_empty());

        let labels: Vec<_> = board
            .labels
            .iter()
            .map(|l| (l.name.as_str(), l.color))
            .collect();
        assert_eq!(labels, DEFAULT_LABELS.to_vec());
    }

    #[test]
    fn test_default_labels_are_fresh_per_board() {
        let mut store = test_utils::create_empty_store();
        let (workspace_id, first) = create_test_board(&mut store, "One");
        let second = store.add_board(&workspace_id, "Two").unwrap();

        let first_ids: Vec<_> = store
            .state()
            .board_labels(&first)
            .iter()
            .map(|l| l.id.clone())
            .collect();
        for label in store.state().board_labels(&second) {
            assert!(!first_ids.contains(&label.id));
        }
    }

    #[test]
    fn test_add_board_without_default_labels() {
        let mut store = BoardStore::new(StoreConfig {
            seed_demo: false,
            default_labels: false,
            ..StoreConfig::default()
        });
        let workspace_id = store.add_workspace("Acme").unwrap();

        let board_id = store.add_board(&workspace_id, "Bare").unwrap();

        assert!(store.state().board_labels(&board_id).is_empty());
    }

    #[test]
    fn test_add_board_missing_workspace() {
        let mut store = test_utils::create_empty_store();

        let result = store.add_board(&WorkspaceId::from("workspace-404"), "Nope");

        assert_eq!(
            result.unwrap_err(),
            StoreError::NotFound {
                kind: EntityKind::Workspace,
                id: "workspace-404".to_string(),
            }
        );
        assert_eq!(store.state().board_count(), 0);
    }

    #[test]
    fn test_set_active_board_unknown_id() {
        let mut store = test_utils::create_test_store();

        store.set_active_board(&BoardId::from("board-404"));

        assert!(store.get_current_board().is_none());
    }

    #[test]
    fn test_set_active_board_publishes_and_notifies() {
        let mut store = test_utils::create_test_store();
        let calls = std::sync::Arc::new(std::sync::Mutex::new(0));
        let counter = std::sync::Arc::clone(&calls);
        store.subscribe(move |_| *counter.lock().unwrap() += 1);
        let before = store.snapshot();

        store.set_active_board(&BoardId::from("board-404"));

        assert_eq!(*calls.lock().unwrap(), 1);
        assert_eq!(before.active_board_id(), Some(&BoardId::from("board-1")));
        assert_eq!(store.active_board_id(), Some(&BoardId::from("board-404")));
    }

    #[test]
    fn test_get_current_board_searches_all_workspaces() {
        let mut store = test_utils::create_test_store();

        store.set_active_board(&BoardId::from("board-4"));

        let board = store.get_current_board().unwrap();
        assert_eq!(board.id, BoardId::from("board-4"));
        assert_eq!(board.workspace_id, WorkspaceId::from("workspace-2"));
    }

    #[test]
    fn test_rename_board() {
        let (mut store, board_id) = setup_board();

        store.rename_board(&board_id, "Renamed").unwrap();

        assert_eq!(store.state().board(&board_id).unwrap().name, "Renamed");
    }

    #[test]
    fn test_delete_active_board_moves_selector() {
        let mut store = test_utils::create_test_store();

        store.delete_board(&BoardId::from("board-1")).unwrap();

        let current = store.get_current_board().unwrap();
        assert_eq!(current.id, BoardId::from("board-2"));
        assert!(store.state().board(&BoardId::from("board-1")).is_none());
        assert!(store.state().column(&ColumnId::from("column-1")).is_none());
        assert!(store.state().card(&CardId::from("card-6")).is_none());
    }

    #[test]
    fn test_delete_inactive_board_keeps_selector() {
        let mut store = test_utils::create_test_store();

        store.delete_board(&BoardId::from("board-3")).unwrap();

        assert_eq!(store.active_board_id(), Some(&BoardId::from("board-1")));
        let ws = store
            .state()
            .workspace(&WorkspaceId::from("workspace-1"))
            .unwrap();
        assert_eq!(
            ws.board_ids,
            vec![BoardId::from("board-1"), BoardId::from("board-2")]
        );
    }

    #[test]
    fn test_delete_last_board_clears_selector() {
        let (mut store, board_id) = setup_board();

        store.delete_board(&board_id).unwrap();

        assert!(store.active_board_id().is_none());
        assert!(store.get_current_board().is_none());
    }
}

// ============================================================================
// Column Tests
// ============================================================================

mod column_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_column() {
        let (mut store, board_id) = setup_board();

        let column_id = store.add_column(&board_id, "To Do").unwrap();

        let column = store.state().column(&column_id).unwrap();
        assert_eq!(column.title, "To Do");
        assert_eq!(column.color, ColumnColor::Slate);
        assert!(column.card_ids.is_empty());
        assert_eq!(column.board_id, board_id);
    }

    #[test]
    fn test_add_multiple_columns_appends() {
        let (mut store, board_id) = setup_board();
        let first = store.add_column(&board_id, "To Do").unwrap();
        let second = store.add_column(&board_id, "Done").unwrap();

        let board = store.state().board(&board_id).unwrap();
        assert_eq!(board.column_ids, vec![first, second]);
    }

    #[test]
    fn test_add_column_missing_board() {
        let mut store = test_utils::create_test_store();
        let before = store.snapshot();

        let result = store.add_column(&BoardId::from("board-404"), "Lost");

        assert!(result.unwrap_err().is_not_found());
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_update_column() {
        let (mut store, board_id) = setup_board();
        let column_id = store.add_column(&board_id, "Original").unwrap();

        store
            .update_column(
                &column_id,
                UpdateColumn {
                    color: Some(ColumnColor::Green),
                    ..UpdateColumn::default()
                },
            )
            .unwrap();

        let column = store.state().column(&column_id).unwrap();
        assert_eq!(column.title, "Original");
        assert_eq!(column.color, ColumnColor::Green);
    }

    #[test]
    fn test_move_column() {
        let (mut store, board_id) = setup_board();
        let a = store.add_column(&board_id, "A").unwrap();
        let b = store.add_column(&board_id, "B").unwrap();
        let c = store.add_column(&board_id, "C").unwrap();

        store.move_column(&a, 2).unwrap();

        let board = store.state().board(&board_id).unwrap();
        assert_eq!(board.column_ids, vec![b, c, a]);
    }

    #[test]
    fn test_delete_column_removes_cards() {
        let (mut store, board_id, column_id, cards) = setup_column(&["One", "Two"]);

        store.delete_column(&column_id).unwrap();

        assert!(store.state().board(&board_id).unwrap().column_ids.is_empty());
        for card_id in cards {
            assert!(store.state().card(&card_id).is_none());
        }
        assert_eq!(store.state().card_count(&board_id), 0);
    }
}

// ============================================================================
// Card Tests
// ============================================================================

mod card_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use chrono::NaiveDate;

    #[test]
    fn test_add_card() {
        let (mut store, _, column_id, _) = setup_column(&[]);

        let card_id = store.add_card(&column_id, "Task 1").unwrap();

        let card = store.state().card(&card_id).unwrap();
        assert_eq!(card.title, "Task 1");
        assert_eq!(card.column_id, column_id);
        assert!(card.field_values.is_empty());
        assert!(card.label_ids.is_empty());
        assert_eq!(column_card_ids(&store, &column_id), vec![card_id]);
    }

    #[test]
    fn test_add_card_searches_every_board() {
        let mut store = test_utils::create_test_store();
        store.set_active_board(&BoardId::from("board-2"));

        let card_id = store.add_card(&ColumnId::from("column-3"), "Ship it").unwrap();

        assert_eq!(
            store.state().board_of_card(&card_id),
            Some(&BoardId::from("board-1"))
        );
    }

    #[test]
    fn test_add_card_missing_column() {
        let mut store = test_utils::create_test_store();

        let result = store.add_card(&ColumnId::from("column-404"), "Lost");

        assert!(matches!(
            result,
            Err(StoreError::NotFound {
                kind: EntityKind::Column,
                ..
            })
        ));
    }

    #[test]
    fn test_add_card_blank_title() {
        let (mut store, _, column_id, _) = setup_column(&[]);

        assert!(matches!(
            store.add_card(&column_id, ""),
            Err(StoreError::Validation(_))
        ));
        assert!(column_card_ids(&store, &column_id).is_empty());
    }

    #[test]
    fn test_update_card_shallow_merge() {
        let mut store = test_utils::create_test_store();
        let card_id = CardId::from("card-4");

        store
            .update_card(
                &card_id,
                UpdateCard {
                    priority: Some(Some(Priority::High)),
                    due_date: Some(NaiveDate::from_ymd_opt(2025, 1, 31)),
                    ..UpdateCard::default()
                },
            )
            .unwrap();

        let card = store.state().card(&card_id).unwrap();
        assert_eq!(card.title, "Wire up drag and drop");
        assert_eq!(card.assignee.as_deref(), Some("João Silva"));
        assert_eq!(card.priority, Some(Priority::High));
        assert_eq!(card.due_date, NaiveDate::from_ymd_opt(2025, 1, 31));
    }

    #[test]
    fn test_update_card_clears_optional_fields() {
        let mut store = test_utils::create_test_store();
        let card_id = CardId::from("card-4");

        store
            .update_card(
                &card_id,
                UpdateCard {
                    assignee: Some(None),
                    description: Some(None),
                    ..UpdateCard::default()
                },
            )
            .unwrap();

        let card = store.state().card(&card_id).unwrap();
        assert_eq!(card.assignee, None);
        assert_eq!(card.description, None);
    }

    #[test]
    fn test_update_card_rejects_foreign_label() {
        let mut store = test_utils::create_test_store();
        let card_id = CardId::from("card-4");
        let before = store.snapshot();

        // label-7 belongs to board-2.
        let result = store.update_card(
            &card_id,
            UpdateCard {
                label_ids: Some(vec![LabelId::from("label-7")]),
                ..UpdateCard::default()
            },
        );

        assert!(result.unwrap_err().is_not_found());
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_update_card_dedupes_labels() {
        let mut store = test_utils::create_test_store();
        let card_id = CardId::from("card-4");

        store
            .update_card(
                &card_id,
                UpdateCard {
                    label_ids: Some(vec![
                        LabelId::from("label-1"),
                        LabelId::from("label-2"),
                        LabelId::from("label-1"),
                    ]),
                    ..UpdateCard::default()
                },
            )
            .unwrap();

        assert_eq!(
            store.state().card(&card_id).unwrap().label_ids,
            vec![LabelId::from("label-1"), LabelId::from("label-2")]
        );
    }

    #[test]
    fn test_update_missing_card() {
        let mut store = test_utils::create_test_store();
        let before = store.snapshot();

        let result = store.update_card(&CardId::from("card-404"), UpdateCard::title("Ghost"));

        assert!(result.unwrap_err().is_not_found());
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_move_card_same_column() {
        let (mut store, _, column_id, cards) = setup_column(&["A", "B", "C", "D"]);
        let (a, b, c, d) = (&cards[0], &cards[1], &cards[2], &cards[3]);

        store.move_card(a, &column_id, &column_id, 0, 2).unwrap();

        assert_eq!(
            column_card_ids(&store, &column_id),
            vec![b.clone(), c.clone(), a.clone(), d.clone()]
        );
    }

    #[test]
    fn test_move_card_same_column_upwards() {
        let (mut store, _, column_id, cards) = setup_column(&["A", "B", "C", "D"]);

        store
            .move_card(&cards[3], &column_id, &column_id, 3, 0)
            .unwrap();

        assert_eq!(
            column_card_ids(&store, &column_id),
            vec![
                cards[3].clone(),
                cards[0].clone(),
                cards[1].clone(),
                cards[2].clone()
            ]
        );
    }

    #[test]
    fn test_move_card_across_columns() {
        let (mut store, board_id, source, cards) = setup_column(&["A", "B", "C"]);
        let dest = store.add_column(&board_id, "Done").unwrap();
        let dest_cards = create_test_cards(&mut store, &dest, &["X", "Y"]);

        store.move_card(&cards[1], &source, &dest, 1, 0).unwrap();

        assert_eq!(
            column_card_ids(&store, &source),
            vec![cards[0].clone(), cards[2].clone()]
        );
        assert_eq!(
            column_card_ids(&store, &dest),
            vec![cards[1].clone(), dest_cards[0].clone(), dest_cards[1].clone()]
        );
        assert_eq!(store.state().card(&cards[1]).unwrap().column_id, dest);
    }

    #[test]
    fn test_move_card_to_empty_column_clamps_index() {
        let (mut store, board_id, source, cards) = setup_column(&["A"]);
        let dest = store.add_column(&board_id, "Empty").unwrap();

        store.move_card(&cards[0], &source, &dest, 0, 5).unwrap();

        assert!(column_card_ids(&store, &source).is_empty());
        assert_eq!(column_card_ids(&store, &dest), vec![cards[0].clone()]);
    }

    #[test]
    fn test_move_card_uses_actual_position_for_stale_index() {
        let (mut store, _, column_id, cards) = setup_column(&["A", "B", "C"]);

        // The card sits at 2, the caller claims 0.
        store
            .move_card(&cards[2], &column_id, &column_id, 0, 0)
            .unwrap();

        assert_eq!(
            column_card_ids(&store, &column_id),
            vec![cards[2].clone(), cards[0].clone(), cards[1].clone()]
        );
    }

    #[test]
    fn test_move_card_outside_active_board_is_noop() {
        let mut store = test_utils::create_test_store();
        store.set_active_board(&BoardId::from("board-2"));
        let before = store.snapshot();

        let result = store.move_card(
            &CardId::from("card-6"),
            &ColumnId::from("column-1"),
            &ColumnId::from("column-2"),
            2,
            0,
        );

        assert!(result.unwrap_err().is_not_found());
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_move_card_not_in_source_column_is_noop() {
        let mut store = test_utils::create_test_store();
        let before = store.snapshot();

        let result = store.move_card(
            &CardId::from("card-3"),
            &ColumnId::from("column-1"),
            &ColumnId::from("column-3"),
            0,
            0,
        );

        assert_eq!(
            result.unwrap_err(),
            StoreError::NotFound {
                kind: EntityKind::Card,
                id: "card-3".to_string(),
            }
        );
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_delete_card() {
        let (mut store, _, column_id, cards) = setup_column(&["A", "B"]);

        store.delete_card(&cards[0]).unwrap();

        assert!(store.state().card(&cards[0]).is_none());
        assert_eq!(column_card_ids(&store, &column_id), vec![cards[1].clone()]);
    }
}

// ============================================================================
// Field Definition Tests
// ============================================================================

mod field_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_field_definition() {
        let (mut store, board_id) = setup_board();

        let field_id = store
            .add_field_definition(
                &board_id,
                CreateFieldDefinition::new("Points", FieldType::Number).shown_on_card(),
            )
            .unwrap();

        let defs = store.state().board_field_definitions(&board_id);
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].id, field_id);
        assert_eq!(defs[0].name, "Points");
        assert!(defs[0].show_on_card);
    }

    #[test]
    fn test_add_select_field_without_options() {
        let (mut store, board_id) = setup_board();

        let result = store.add_field_definition(
            &board_id,
            CreateFieldDefinition::new("Stage", FieldType::Select),
        );

        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(store.state().board_field_definitions(&board_id).is_empty());
    }

    #[test]
    fn test_add_field_definition_missing_board() {
        let mut store = test_utils::create_empty_store();

        let result = store.add_field_definition(
            &BoardId::from("board-404"),
            CreateFieldDefinition::new("Points", FieldType::Number),
        );

        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_field_definition() {
        let mut store = test_utils::create_test_store();
        let board_id = BoardId::from("board-1");
        let field_id = FieldId::from("field-2");

        store
            .update_field_definition(
                &board_id,
                &field_id,
                UpdateFieldDefinition {
                    name: Some("Iteration".to_string()),
                    show_on_card: Some(false),
                    ..UpdateFieldDefinition::default()
                },
            )
            .unwrap();

        let def = store.state().field_definition(&field_id).unwrap();
        assert_eq!(def.name, "Iteration");
        assert!(!def.show_on_card);
        assert_eq!(def.field_type, FieldType::Text);
    }

    #[test]
    fn test_update_to_select_requires_options() {
        let mut store = test_utils::create_test_store();
        let board_id = BoardId::from("board-1");
        let field_id = FieldId::from("field-2");
        let before = store.snapshot();

        let result = store.update_field_definition(
            &board_id,
            &field_id,
            UpdateFieldDefinition {
                field_type: Some(FieldType::Select),
                ..UpdateFieldDefinition::default()
            },
        );

        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_update_field_definition_wrong_board() {
        let mut store = test_utils::create_test_store();

        let result = store.update_field_definition(
            &BoardId::from("board-2"),
            &FieldId::from("field-1"),
            UpdateFieldDefinition::default(),
        );

        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_field_definition_purges_values() {
        let mut store = test_utils::create_test_store();
        let board_id = BoardId::from("board-1");
        let field_id = FieldId::from("field-1");

        store.delete_field_definition(&board_id, &field_id).unwrap();

        assert!(store.state().field_definition(&field_id).is_none());
        for card_id in ["card-1", "card-2"] {
            let card = store.state().card(&CardId::from(card_id)).unwrap();
            assert!(card.field_value(&field_id).is_none());
        }
        // Values of other fields survive.
        let card = store.state().card(&CardId::from("card-1")).unwrap();
        assert_eq!(
            card.field_value(&FieldId::from("field-2")),
            Some(&FieldValue::Text("Sprint 1".to_string()))
        );
        assert!(store.state().integrity_violations().is_empty());
    }

    #[test]
    fn test_set_card_field_value() {
        let mut store = test_utils::create_test_store();
        let card_id = CardId::from("card-6");
        let field_id = FieldId::from("field-1");

        store
            .set_card_field_value(&card_id, &field_id, Some(FieldValue::Number(3.5)))
            .unwrap();
        assert_eq!(
            store.state().card(&card_id).unwrap().field_value(&field_id),
            Some(&FieldValue::Number(3.5))
        );

        store
            .set_card_field_value(&card_id, &field_id, Some(FieldValue::Number(8.0)))
            .unwrap();
        assert_eq!(
            store.state().card(&card_id).unwrap().field_value(&field_id),
            Some(&FieldValue::Number(8.0))
        );

        store
            .set_card_field_value(&card_id, &field_id, None)
            .unwrap();
        assert!(store
            .state()
            .card(&card_id)
            .unwrap()
            .field_value(&field_id)
            .is_none());
    }

    #[test]
    fn test_set_card_field_value_does_not_check_type() {
        let mut store = test_utils::create_test_store();
        let card_id = CardId::from("card-6");
        let field_id = FieldId::from("field-1");

        store
            .set_card_field_value(&card_id, &field_id, Some(FieldValue::Checkbox(true)))
            .unwrap();

        let def = store.state().field_definition(&field_id).unwrap();
        let value = store.state().card(&card_id).unwrap().field_value(&field_id).unwrap();
        assert!(!def.accepts(value));
    }

    #[test]
    fn test_set_card_field_value_missing_card() {
        let mut store = test_utils::create_test_store();
        let before = store.snapshot();

        let result = store.set_card_field_value(
            &CardId::from("card-404"),
            &FieldId::from("field-1"),
            Some(FieldValue::Number(1.0)),
        );

        assert!(result.unwrap_err().is_not_found());
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_card_face_fields() {
        let mut store = test_utils::create_test_store();
        let card_id = CardId::from("card-1");

        let face: Vec<_> = store
            .state()
            .card_face_fields(&card_id)
            .into_iter()
            .map(|(def, value)| (def.name.clone(), value.to_string()))
            .collect();
        assert_eq!(
            face,
            vec![
                ("Estimate (hours)".to_string(), "4".to_string()),
                ("Sprint".to_string(), "Sprint 1".to_string()),
            ]
        );

        store
            .update_field_definition(
                &BoardId::from("board-1"),
                &FieldId::from("field-2"),
                UpdateFieldDefinition {
                    show_on_card: Some(false),
                    ..UpdateFieldDefinition::default()
                },
            )
            .unwrap();
        assert_eq!(store.state().card_face_fields(&card_id).len(), 1);
    }
}

// ============================================================================
// Label Tests
// ============================================================================

mod label_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_label() {
        let (mut store, board_id) = setup_board();

        let label_id = store
            .add_label(&board_id, CreateLabel::new("Blocked", LabelColor::Rose))
            .unwrap();

        let labels = store.state().board_labels(&board_id);
        let last = labels.last().unwrap();
        assert_eq!(last.id, label_id);
        assert_eq!(last.name, "Blocked");
        assert_eq!(last.color, LabelColor::Rose);
        assert_eq!(labels.len(), DEFAULT_LABELS.len() + 1);
    }

    #[test]
    fn test_update_label() {
        let mut store = test_utils::create_test_store();
        let board_id = BoardId::from("board-1");
        let label_id = LabelId::from("label-1");

        store
            .update_label(
                &board_id,
                &label_id,
                UpdateLabel {
                    color: Some(LabelColor::Amber),
                    ..UpdateLabel::default()
                },
            )
            .unwrap();

        let label = store.state().label(&label_id).unwrap();
        assert_eq!(label.name, "Urgent");
        assert_eq!(label.color, LabelColor::Amber);
    }

    #[test]
    fn test_update_label_wrong_board() {
        let mut store = test_utils::create_test_store();
        let before = store.snapshot();

        let result = store.update_label(
            &BoardId::from("board-2"),
            &LabelId::from("label-1"),
            UpdateLabel {
                name: Some("Hijacked".to_string()),
                ..UpdateLabel::default()
            },
        );

        assert!(result.unwrap_err().is_not_found());
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_delete_label_cascades_to_cards() {
        let mut store = test_utils::create_test_store();
        let board_id = BoardId::from("board-1");
        let design = LabelId::from("label-6");

        store.delete_label(&board_id, &design).unwrap();

        assert!(store.state().label(&design).is_none());
        assert!(!store.state().board(&board_id).unwrap().label_ids.contains(&design));
        assert_eq!(
            store.state().card(&CardId::from("card-3")).unwrap().label_ids,
            vec![LabelId::from("label-3")]
        );
        assert_eq!(
            store.state().card(&CardId::from("card-5")).unwrap().label_ids,
            vec![LabelId::from("label-4")]
        );
        assert!(store.state().card(&CardId::from("card-2")).unwrap().label_ids.is_empty());
        assert!(store.state().integrity_violations().is_empty());
    }

    #[test]
    fn test_delete_missing_label() {
        let mut store = test_utils::create_test_store();
        let before = store.snapshot();

        let result = store.delete_label(&BoardId::from("board-1"), &LabelId::from("label-404"));

        assert!(result.unwrap_err().is_not_found());
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_toggle_card_label() {
        let mut store = test_utils::create_test_store();
        let card_id = CardId::from("card-4");
        let urgent = LabelId::from("label-1");

        assert!(store.toggle_card_label(&card_id, &urgent).unwrap());
        assert_eq!(
            store.state().card(&card_id).unwrap().label_ids,
            vec![LabelId::from("label-3"), urgent.clone()]
        );

        assert!(!store.toggle_card_label(&card_id, &urgent).unwrap());
        assert_eq!(
            store.state().card(&card_id).unwrap().label_ids,
            vec![LabelId::from("label-3")]
        );
    }

    #[test]
    fn test_toggle_card_label_from_other_board() {
        let mut store = test_utils::create_test_store();

        let result = store.toggle_card_label(&CardId::from("card-4"), &LabelId::from("label-7"));

        assert!(matches!(
            result,
            Err(StoreError::NotFound {
                kind: EntityKind::Label,
                ..
            })
        ));
    }

    #[test]
    fn test_toggle_card_label_respects_limit() {
        let mut store = BoardStore::from_config(StoreConfig {
            max_labels_per_card: 2,
            ..StoreConfig::default()
        });
        // card-7 already carries two labels.
        let card_id = CardId::from("card-7");

        let result = store.toggle_card_label(&card_id, &LabelId::from("label-1"));

        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(store.state().card(&card_id).unwrap().label_ids.len(), 2);
    }

    #[test]
    fn test_labels_in_use() {
        let store = test_utils::create_test_store();

        let used: Vec<_> = store
            .state()
            .labels_in_use(&BoardId::from("board-1"))
            .into_iter()
            .map(|l| l.name.as_str())
            .collect();

        assert_eq!(used, vec!["Bug", "Feature", "Improvement", "Documentation", "Design"]);
    }
}

// ============================================================================
// Subscription Tests
// ============================================================================

mod subscription_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_subscriber_sees_new_state() {
        let mut store = test_utils::create_test_store();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |state| {
            sink.lock().unwrap().push(state.board_count());
        });

        store
            .add_board(&WorkspaceId::from("workspace-2"), "Garden")
            .unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![5]);
    }

    #[test]
    fn test_failed_mutation_does_not_notify() {
        let mut store = test_utils::create_test_store();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        store.subscribe(move |_| *counter.lock().unwrap() += 1);

        let _ = store.delete_card(&CardId::from("card-404"));
        let _ = store.add_card(&ColumnId::from("column-1"), "  ");

        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = test_utils::create_test_store();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let id = store.subscribe(move |_| *counter.lock().unwrap() += 1);

        store.set_active_board(&BoardId::from("board-2"));
        assert!(store.unsubscribe(id));
        store.set_active_board(&BoardId::from("board-3"));

        assert_eq!(*calls.lock().unwrap(), 1);
        assert!(!store.unsubscribe(id));
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_mutations() {
        let mut store = test_utils::create_test_store();
        let snapshot = store.snapshot();

        store.delete_card(&CardId::from("card-6")).unwrap();

        assert!(snapshot.card(&CardId::from("card-6")).is_some());
        assert_eq!(
            snapshot.column_card_count(&ColumnId::from("column-1")),
            3
        );
        assert!(store.state().card(&CardId::from("card-6")).is_none());
    }
}
