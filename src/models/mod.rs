pub mod board;
pub mod card;
pub mod column;
pub mod field;
pub mod ids;
pub mod label;
pub mod workspace;

pub use board::{Board, BoardSummary, BoardView};
pub use card::{Card, Priority, UpdateCard};
pub use column::{Column, ColumnColor, ColumnView, UpdateColumn};
pub use field::{
    CreateFieldDefinition, FieldDefinition, FieldType, FieldValue, UpdateFieldDefinition,
};
pub use ids::{BoardId, CardId, ColumnId, FieldId, LabelId, WorkspaceId};
pub use label::{CreateLabel, Label, LabelColor, UpdateLabel, DEFAULT_LABELS};
pub use workspace::{Workspace, WorkspaceView};
