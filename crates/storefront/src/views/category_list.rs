use std::fmt::Display;

use super::LOADING;
use crate::model::Category;
use crate::query::QueryState;

#[derive(Debug, Clone)]
pub struct CategoryList {
    state: QueryState<Vec<Category>>,
}

impl CategoryList {
    pub fn new(state: QueryState<Vec<Category>>) -> Self {
        Self { state }
    }
}

impl Display for CategoryList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.state {
            QueryState::Idle | QueryState::Loading => f.write_str(LOADING),
            QueryState::Error(e) => write!(f, "Error: {e}"),
            QueryState::Success(categories) => {
                f.write_str("Category List")?;
                for category in categories {
                    write!(f, "\n- {}", category.name)?;
                }
                Ok(())
            }
        }
    }
}
