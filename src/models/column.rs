use serde::{Deserialize, Serialize};

use super::card::Card;
use super::ids::{BoardId, CardId, ColumnId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnColor {
    #[default]
    Slate,
    Blue,
    Green,
}

impl std::fmt::Display for ColumnColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnColor::Slate => write!(f, "slate"),
            ColumnColor::Blue => write!(f, "blue"),
            ColumnColor::Green => write!(f, "green"),
        }
    }
}

impl std::str::FromStr for ColumnColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slate" => Ok(ColumnColor::Slate),
            "blue" => Ok(ColumnColor::Blue),
            "green" => Ok(ColumnColor::Green),
            _ => Err(format!("Invalid column color: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub board_id: BoardId,
    pub title: String,
    pub color: ColumnColor,
    /// Card order is the drag order and is preserved exactly.
    pub card_ids: Vec<CardId>,
}

impl Column {
    pub fn new(id: ColumnId, board_id: BoardId, title: impl Into<String>) -> Self {
        Self {
            id,
            board_id,
            title: title.into(),
            color: ColumnColor::default(),
            card_ids: vec![],
        }
    }

    pub fn position_of(&self, card_id: &CardId) -> Option<usize> {
        self.card_ids.iter().position(|id| id == card_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateColumn {
    pub title: Option<String>,
    pub color: Option<ColumnColor>,
}

impl UpdateColumn {
    pub(crate) fn apply_to(self, column: &mut Column) {
        if let Some(title) = self.title {
            column.title = title;
        }
        if let Some(color) = self.color {
            column.color = color;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    pub id: ColumnId,
    pub board_id: BoardId,
    pub title: String,
    pub color: ColumnColor,
    pub cards: Vec<Card>,
}

impl ColumnView {
    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|card| card.id.clone()).collect()
    }
}
