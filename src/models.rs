//! Frontend Models
//!
//! The task record rendered by the task row.

use serde::{Deserialize, Serialize};

/// One row of the to-do list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub checked: bool,
}

impl TaskItem {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            checked: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_defaults_to_false() {
        let item: TaskItem = serde_json::from_str(r#"{"id": 4, "title": "Buy milk"}"#).unwrap();
        assert_eq!(item, TaskItem::new(4, "Buy milk"));
    }
}
