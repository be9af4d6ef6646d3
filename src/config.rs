use crate::error::{Result, StoreError};

pub const DEFAULT_MAX_LABELS_PER_CARD: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Start from the demo data set instead of an empty store.
    pub seed_demo: bool,
    /// Give every new board the default label set.
    pub default_labels: bool,
    pub max_labels_per_card: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_demo: true,
            default_labels: true,
            max_labels_per_card: DEFAULT_MAX_LABELS_PER_CARD,
        }
    }
}

impl StoreConfig {
    /// Reads `KANBAN_SEED_DEMO`, `KANBAN_DEFAULT_LABELS` and
    /// `KANBAN_MAX_LABELS_PER_CARD` from the process environment. Call
    /// `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed_demo = match lookup("KANBAN_SEED_DEMO") {
            Some(raw) => parse_bool("KANBAN_SEED_DEMO", &raw)?,
            None => defaults.seed_demo,
        };
        let default_labels = match lookup("KANBAN_DEFAULT_LABELS") {
            Some(raw) => parse_bool("KANBAN_DEFAULT_LABELS", &raw)?,
            None => defaults.default_labels,
        };
        let max_labels_per_card = match lookup("KANBAN_MAX_LABELS_PER_CARD") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                StoreError::Config(format!(
                    "KANBAN_MAX_LABELS_PER_CARD must be a positive integer, got '{}'",
                    raw
                ))
            })?,
            None => defaults.max_labels_per_card,
        };
        if max_labels_per_card == 0 {
            return Err(StoreError::Config(
                "KANBAN_MAX_LABELS_PER_CARD must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            seed_demo,
            default_labels,
            max_labels_per_card,
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(StoreError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, raw
        ))),
    }
}
