use serde::{Deserialize, Serialize};

/// A project category. Its position in the workspace list is its color key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    /// Projects under a recurring category come back for maintenance and
    /// reports after delivery.
    #[serde(default)]
    pub is_recurring: bool,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_recurring: false,
        }
    }

    pub fn recurring(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_recurring: true,
        }
    }
}

/// Look up a category by name.
pub fn find_category<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.name == name)
}
