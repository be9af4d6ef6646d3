use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Workspace,
    Board,
    Column,
    Card,
    Label,
    FieldDefinition,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Workspace => write!(f, "workspace"),
            EntityKind::Board => write!(f, "board"),
            EntityKind::Column => write!(f, "column"),
            EntityKind::Card => write!(f, "card"),
            EntityKind::Label => write!(f, "label"),
            EntityKind::FieldDefinition => write!(f, "field definition"),
        }
    }
}

/// Errors returned by store operations. A rejected operation never leaves a
/// partial mutation behind and never notifies subscribers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    pub fn not_found(kind: EntityKind, id: impl fmt::Display) -> Self {
        StoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Rejects names and titles that are empty once trimmed.
pub(crate) fn require_non_blank(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(format!("{} is required", what)));
    }
    Ok(())
}
