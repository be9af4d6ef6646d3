use serde::{Deserialize, Serialize};

use super::ids::{BoardId, LabelId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColor {
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Blue,
    Indigo,
    Purple,
    Pink,
    Rose,
}

impl LabelColor {
    pub const ALL: [LabelColor; 14] = [
        LabelColor::Red,
        LabelColor::Orange,
        LabelColor::Amber,
        LabelColor::Yellow,
        LabelColor::Lime,
        LabelColor::Green,
        LabelColor::Emerald,
        LabelColor::Teal,
        LabelColor::Cyan,
        LabelColor::Blue,
        LabelColor::Indigo,
        LabelColor::Purple,
        LabelColor::Pink,
        LabelColor::Rose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelColor::Red => "red",
            LabelColor::Orange => "orange",
            LabelColor::Amber => "amber",
            LabelColor::Yellow => "yellow",
            LabelColor::Lime => "lime",
            LabelColor::Green => "green",
            LabelColor::Emerald => "emerald",
            LabelColor::Teal => "teal",
            LabelColor::Cyan => "cyan",
            LabelColor::Blue => "blue",
            LabelColor::Indigo => "indigo",
            LabelColor::Purple => "purple",
            LabelColor::Pink => "pink",
            LabelColor::Rose => "rose",
        }
    }
}

impl std::fmt::Display for LabelColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LabelColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        LabelColor::ALL
            .into_iter()
            .find(|color| color.as_str() == lower)
            .ok_or_else(|| format!("Invalid label color: {}", s))
    }
}

/// Labels every new board starts with.
pub const DEFAULT_LABELS: [(&str, LabelColor); 6] = [
    ("Urgent", LabelColor::Red),
    ("Bug", LabelColor::Orange),
    ("Feature", LabelColor::Blue),
    ("Improvement", LabelColor::Green),
    ("Documentation", LabelColor::Purple),
    ("Design", LabelColor::Pink),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: LabelId,
    pub board_id: BoardId,
    pub name: String,
    pub color: LabelColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateLabel {
    pub name: String,
    pub color: LabelColor,
}

impl CreateLabel {
    pub fn new(name: impl Into<String>, color: LabelColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub(crate) fn into_label(self, id: LabelId, board_id: BoardId) -> Label {
        Label {
            id,
            board_id,
            name: self.name,
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateLabel {
    pub name: Option<String>,
    pub color: Option<LabelColor>,
}

impl UpdateLabel {
    pub(crate) fn apply_to(self, label: &mut Label) {
        if let Some(name) = self.name {
            label.name = name;
        }
        if let Some(color) = self.color {
            label.color = color;
        }
    }
}
