// Launcher item schema.
// The JSON shape the launcher reads from stdout: `{"items": [...]}`.

use serde::Serialize;

/// Text shown when copying or enlarging an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemText {
    pub copy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largetype: Option<String>,
}

/// A single launcher result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub title: String,
    pub subtitle: String,
    pub arg: String,
    pub text: ItemText,
}

/// Top-level launcher output document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemList {
    pub items: Vec<Item>,
}

impl ItemList {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl FromIterator<Item> for ItemList {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
