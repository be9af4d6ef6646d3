//! Demo data set: two workspaces, four boards, and a populated first board.
//!
//! Ids are fixed (`board-1`, `column-2`, `card-6`, ...) so that callers and
//! tests can address entities directly. Fresh ids generated at runtime never
//! collide with them because generated ids carry a uuid suffix.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::{
    Board, Card, Column, ColumnColor, CreateLabel, FieldDefinition, FieldId, FieldType,
    FieldValue, LabelId, Priority, Workspace, DEFAULT_LABELS,
};
use crate::state::BoardState;

struct SeedCard {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    labels: &'static [&'static str],
    priority: Priority,
    assignee: Option<&'static str>,
}

const CARDS: [SeedCard; 7] = [
    SeedCard {
        id: "card-1",
        title: "Set up the development environment",
        description: "Install dependencies and bootstrap the initial project layout.",
        labels: &["label-3"],
        priority: Priority::High,
        assignee: Some("João Silva"),
    },
    SeedCard {
        id: "card-2",
        title: "Design the color system",
        description: "Define the palette, typography and design tokens.",
        labels: &["label-6"],
        priority: Priority::High,
        assignee: Some("Maria Santos"),
    },
    SeedCard {
        id: "card-3",
        title: "Build the navigation sidebar",
        description: "Sidebar component listing workspaces and their boards.",
        labels: &["label-3", "label-6"],
        priority: Priority::Medium,
        assignee: Some("Pedro Costa"),
    },
    SeedCard {
        id: "card-4",
        title: "Wire up drag and drop",
        description: "Let cards be dragged between columns.",
        labels: &["label-3"],
        priority: Priority::Medium,
        assignee: Some("João Silva"),
    },
    SeedCard {
        id: "card-5",
        title: "Card details dialog",
        description: "Dialog showing the full card with custom fields and actions.",
        labels: &["label-4", "label-6"],
        priority: Priority::Low,
        assignee: Some("Maria Santos"),
    },
    SeedCard {
        id: "card-6",
        title: "Initial documentation",
        description: "Write a README with install and usage instructions.",
        labels: &["label-5"],
        priority: Priority::Low,
        assignee: None,
    },
    SeedCard {
        id: "card-7",
        title: "Component unit tests",
        description: "Cover the main components with tests.",
        labels: &["label-2", "label-4"],
        priority: Priority::Medium,
        assignee: Some("Pedro Costa"),
    },
];

// (column id, title, color, card ids in order)
const COLUMNS: [(&str, &str, ColumnColor, &[&str]); 3] = [
    ("column-1", "To Do", ColumnColor::Slate, &["card-4", "card-5", "card-6"]),
    ("column-2", "In Progress", ColumnColor::Blue, &["card-3", "card-7"]),
    ("column-3", "Done", ColumnColor::Green, &["card-1", "card-2"]),
];

// (workspace id, name, [(board id, name)])
const WORKSPACES: [(&str, &str, &[(&str, &str)]); 2] = [
    (
        "workspace-1",
        "My Company",
        &[
            ("board-1", "Test Project"),
            ("board-2", "Marketing Q1"),
            ("board-3", "Product Roadmap"),
        ],
    ),
    ("workspace-2", "Personal Projects", &[("board-4", "New House")]),
];

/// Builds the demo state with `board-1` active.
pub fn demo_state() -> BoardState {
    match build() {
        Ok(state) => state,
        Err(err) => {
            // The seed tables are static; this only trips if they are edited
            // into an inconsistent shape.
            tracing::error!(error = %err, "demo data is inconsistent, starting empty");
            BoardState::new()
        }
    }
}

fn build() -> Result<BoardState> {
    let mut state = BoardState::new();
    let mut next_label = 1;

    for (ws_id, ws_name, boards) in WORKSPACES {
        state.insert_workspace(Workspace::new(ws_id.into(), ws_name));

        for (board_id, board_name) in boards {
            state.insert_board(Board::new((*board_id).into(), ws_id.into(), *board_name))?;

            for (label_name, color) in DEFAULT_LABELS {
                let id = LabelId::from(format!("label-{}", next_label));
                next_label += 1;
                let label =
                    CreateLabel::new(label_name, color).into_label(id, (*board_id).into());
                state.insert_label(label)?;
            }
        }
    }

    let estimate = FieldId::from("field-1");
    let sprint = FieldId::from("field-2");
    state.insert_field(FieldDefinition {
        id: estimate.clone(),
        board_id: "board-1".into(),
        name: "Estimate (hours)".to_string(),
        field_type: FieldType::Number,
        options: vec![],
        show_on_card: true,
    })?;
    state.insert_field(FieldDefinition {
        id: sprint.clone(),
        board_id: "board-1".into(),
        name: "Sprint".to_string(),
        field_type: FieldType::Text,
        options: vec![],
        show_on_card: true,
    })?;

    for (col_id, title, color, card_ids) in COLUMNS {
        let mut column = Column::new(col_id.into(), "board-1".into(), title);
        column.color = color;
        state.insert_column(column)?;

        for card_id in card_ids {
            let Some(seed) = CARDS.iter().find(|c| c.id == *card_id) else {
                continue;
            };
            let mut card = Card::new(seed.id.into(), col_id.into(), seed.title);
            card.description = Some(seed.description.to_string());
            card.label_ids = seed.labels.iter().map(|id| LabelId::from(*id)).collect();
            card.priority = Some(seed.priority);
            card.assignee = seed.assignee.map(str::to_string);
            card.field_values = match seed.id {
                "card-1" => BTreeMap::from([
                    (estimate.clone(), FieldValue::Number(4.0)),
                    (sprint.clone(), FieldValue::Text("Sprint 1".to_string())),
                ]),
                "card-2" => BTreeMap::from([(estimate.clone(), FieldValue::Number(2.0))]),
                _ => BTreeMap::new(),
            };
            state.insert_card(card)?;
        }
    }

    state.active_board = Some("board-1".into());
    Ok(state)
}
