use serde_derive::{Deserialize, Serialize};

use crate::condition::Condition;

/// A named carrier of a [`Condition`].
///
/// Agents are value records: equality is field-wise and nothing mutates an
/// agent in place. A meeting replaces an agent with a fresh record built by
/// [`Agent::with_category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    name: String,
    category: Condition,
}

impl Agent {
    #[must_use]
    pub fn new(name: impl Into<String>, category: Condition) -> Agent {
        Agent {
            name: name.into(),
            category,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> Condition {
        self.category
    }

    /// A fresh record with the same name and the given category.
    #[must_use]
    pub fn with_category(&self, category: Condition) -> Agent {
        Agent {
            name: self.name.clone(),
            category,
        }
    }
}
