use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product category. Categories are never edited once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Payload for creating a category.
#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub name: String,
}

/// Payload for renaming a category.
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
}
