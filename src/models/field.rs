use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{BoardId, FieldId};
use crate::error::{require_non_blank, Result, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Select,
    Checkbox,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Text => write!(f, "text"),
            FieldType::Number => write!(f, "number"),
            FieldType::Date => write!(f, "date"),
            FieldType::Select => write!(f, "select"),
            FieldType::Checkbox => write!(f, "checkbox"),
        }
    }
}

impl std::str::FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(FieldType::Text),
            "number" => Ok(FieldType::Number),
            "date" => Ok(FieldType::Date),
            "select" => Ok(FieldType::Select),
            "checkbox" => Ok(FieldType::Checkbox),
            _ => Err(format!("Invalid field type: {}", s)),
        }
    }
}

/// Board-scoped schema entry for a custom card property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub id: FieldId,
    pub board_id: BoardId,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Choices for `select` fields, in display order. Empty for other types.
    pub options: Vec<String>,
    pub show_on_card: bool,
}

impl FieldDefinition {
    pub(crate) fn validate(&self) -> Result<()> {
        require_non_blank("Field name", &self.name)?;
        if self.field_type == FieldType::Select
            && !self.options.iter().any(|opt| !opt.trim().is_empty())
        {
            return Err(StoreError::Validation(format!(
                "Select field '{}' needs at least one option",
                self.name
            )));
        }
        Ok(())
    }

    /// Whether `value` has the shape this definition declares. The store does
    /// not enforce this; it is offered to callers that want to check.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match (self.field_type, value) {
            (FieldType::Select, FieldValue::Select(choice)) => self.options.contains(choice),
            (expected, value) => value.field_type() == expected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub show_on_card: bool,
}

impl CreateFieldDefinition {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            options: vec![],
            show_on_card: false,
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn shown_on_card(mut self) -> Self {
        self.show_on_card = true;
        self
    }

    pub(crate) fn into_definition(self, id: FieldId, board_id: BoardId) -> FieldDefinition {
        FieldDefinition {
            id,
            board_id,
            name: self.name,
            field_type: self.field_type,
            options: self.options,
            show_on_card: self.show_on_card,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFieldDefinition {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<FieldType>,
    pub options: Option<Vec<String>>,
    pub show_on_card: Option<bool>,
}

impl UpdateFieldDefinition {
    pub(crate) fn apply_to(self, def: &mut FieldDefinition) {
        if let Some(name) = self.name {
            def.name = name;
        }
        if let Some(field_type) = self.field_type {
            def.field_type = field_type;
        }
        if let Some(options) = self.options {
            def.options = options;
        }
        if let Some(show_on_card) = self.show_on_card {
            def.show_on_card = show_on_card;
        }
    }
}

/// Value a card holds for one field definition. Removing the entry from
/// the card's map is how a value is unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Select(String),
    Checkbox(bool),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Text(_) => FieldType::Text,
            FieldValue::Number(_) => FieldType::Number,
            FieldValue::Date(_) => FieldType::Date,
            FieldValue::Select(_) => FieldType::Select,
            FieldValue::Checkbox(_) => FieldType::Checkbox,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) | FieldValue::Select(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            FieldValue::Checkbox(b) => write!(f, "{}", b),
        }
    }
}
