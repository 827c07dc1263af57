//! A single todo entry.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ListError;
use crate::icons::IconService;

/// A todo item: a fixed title and a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    title: String,
    #[serde(default)]
    done: bool,
}

impl Item {
    /// Creates a pending item.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }

    /// Title given at construction
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the item is completed
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Mark the item completed
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Mark the item pending again
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Renders the item with the marker of the given theme.
    #[must_use]
    pub fn render(&self, icons: &IconService) -> String {
        format!("{} {}", icons.status(self.done), self.title)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.done { "[X]" } else { "[ ]" };
        write!(f, "{} {}", marker, self.title)
    }
}

/// Name of the JSON kind, used in type mismatch errors.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Value> for Item {
    type Error = ListError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match &value {
            Value::Object(map) => match map.get("title") {
                Some(Value::String(_)) => {}
                Some(title) => {
                    return Err(ListError::type_mismatch(format!(
                        "object with a non-string title ({})",
                        value_kind(title)
                    )))
                }
                None => return Err(ListError::type_mismatch("object without a title")),
            },
            other => return Err(ListError::type_mismatch(value_kind(other))),
        }
        serde_json::from_value(value).map_err(|e| ListError::type_mismatch(format!("object ({e})")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_item_is_pending() {
        let item = Item::new("Buy milk");
        assert_eq!(item.title(), "Buy milk");
        assert!(!item.is_done());
    }

    #[test]
    fn test_mark_done_is_idempotent() {
        let mut item = Item::new("Buy milk");
        item.mark_done();
        item.mark_done();
        assert!(item.is_done());

        item.mark_undone();
        item.mark_undone();
        assert!(!item.is_done());
    }

    #[test]
    fn test_display() {
        let mut item = Item::new("Clean room");
        assert_eq!(item.to_string(), "[ ] Clean room");

        item.mark_done();
        assert_eq!(item.to_string(), "[X] Clean room");
    }

    #[test]
    fn test_equality_includes_done_state() {
        let mut done = Item::new("Go to gym");
        done.mark_done();
        assert_ne!(done, Item::new("Go to gym"));
        assert_eq!(Item::new("Go to gym"), Item::new("Go to gym"));
    }

    #[test]
    fn test_try_from_object() {
        let item = Item::try_from(json!({ "title": "Buy milk", "done": true })).unwrap();
        assert_eq!(item.title(), "Buy milk");
        assert!(item.is_done());

        let item = Item::try_from(json!({ "title": "Clean room" })).unwrap();
        assert!(!item.is_done());
    }

    #[test]
    fn test_try_from_reports_title_type() {
        let err = Item::try_from(json!({ "title": 5 })).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type mismatch: expected Item, found object with a non-string title (number)"
        );

        let err = Item::try_from(json!({ "name": "Buy milk" })).unwrap_err();
        assert_eq!(err.to_string(), "Type mismatch: expected Item, found object without a title");
    }

    #[test]
    fn test_try_from_rejects_other_values() {
        for value in [json!(1), json!("hi"), json!(null), json!([1, 2]), json!({ "name": "x" })] {
            assert!(matches!(Item::try_from(value), Err(ListError::TypeMismatch { .. })));
        }
    }
}
