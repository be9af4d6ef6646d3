use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::field::FieldValue;
use super::ids::{CardId, ColumnId, FieldId, LabelId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub column_id: ColumnId,
    pub title: String,
    pub description: Option<String>,
    /// References into the owning board's labels. Not ownership.
    pub label_ids: Vec<LabelId>,
    pub priority: Option<Priority>,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub due_complete: bool,
    pub field_values: BTreeMap<FieldId, FieldValue>,
}

impl Card {
    pub fn new(id: CardId, column_id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            column_id,
            title: title.into(),
            description: None,
            label_ids: vec![],
            priority: None,
            assignee: None,
            due_date: None,
            due_complete: false,
            field_values: BTreeMap::new(),
        }
    }

    pub fn has_label(&self, label_id: &LabelId) -> bool {
        self.label_ids.contains(label_id)
    }

    /// `due_complete` only counts when a due date is set.
    pub fn is_due_complete(&self) -> bool {
        self.due_date.is_some() && self.due_complete
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => !self.due_complete && due < today,
            None => false,
        }
    }

    pub fn field_value(&self, field_id: &FieldId) -> Option<&FieldValue> {
        self.field_values.get(field_id)
    }
}

/// Shallow patch over the mutable card fields. Outer `None` leaves a field
/// untouched; `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCard {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub label_ids: Option<Vec<LabelId>>,
    #[serde(default, deserialize_with = "double_option")]
    pub priority: Option<Option<Priority>>,
    #[serde(default, deserialize_with = "double_option")]
    pub assignee: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<NaiveDate>>,
    pub due_complete: Option<bool>,
}

impl UpdateCard {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub(crate) fn apply_to(self, card: &mut Card) {
        if let Some(title) = self.title {
            card.title = title;
        }
        if let Some(description) = self.description {
            card.description = description;
        }
        if let Some(label_ids) = self.label_ids {
            card.label_ids = label_ids;
        }
        if let Some(priority) = self.priority {
            card.priority = priority;
        }
        if let Some(assignee) = self.assignee {
            card.assignee = assignee;
        }
        if let Some(due_date) = self.due_date {
            card.due_date = due_date;
        }
        if let Some(due_complete) = self.due_complete {
            card.due_complete = due_complete;
        }
        if card.due_date.is_none() {
            card.due_complete = false;
        }
    }
}

// Distinguishes an explicit `null` (clear) from a missing key (keep).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
