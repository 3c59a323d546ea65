// src/domain/category.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fallback category for links added without one.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Represents a category name as a value object.
///
/// Unlike tags in other tools, a category may contain inner whitespace.
/// Construction never fails: the name is trimmed and an empty result folds
/// into the [`UNCATEGORIZED`] sentinel, so a `Category` is always displayable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Category {
    value: String,
}

impl Category {
    pub fn new<S: AsRef<str>>(value: S) -> Self {
        let value = value.as_ref().trim();
        if value.is_empty() {
            Self::uncategorized()
        } else {
            Self {
                value: value.to_string(),
            }
        }
    }

    /// Parse an optional user-supplied name, defaulting to the sentinel.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(s) => Self::new(s),
            None => Self::uncategorized(),
        }
    }

    pub fn uncategorized() -> Self {
        Self {
            value: UNCATEGORIZED.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_uncategorized(&self) -> bool {
        self.value == UNCATEGORIZED
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::uncategorized()
    }
}

// Serde goes through these so every persisted shape gets normalized on read.
impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.value
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
