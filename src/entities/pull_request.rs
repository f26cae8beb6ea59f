// Pull request entity.

use serde_json::Value;

use super::item::{Item, ItemText};
use super::{str_field, u64_field};

/// Open pull request as shown in the launcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequest {
    pub id: Option<u64>,
    pub number: Option<u64>,
    pub title: String,
    pub html_url: String,
}

impl PullRequest {
    /// Select the pull request fields from a raw search-issues record.
    pub fn from_record(record: &Value) -> Self {
        Self {
            id: u64_field(record, "id"),
            number: u64_field(record, "number"),
            title: str_field(record, "title"),
            html_url: str_field(record, "html_url"),
        }
    }

    pub fn to_item(&self) -> Item {
        Item {
            title: self.title.clone(),
            subtitle: self.html_url.clone(),
            arg: self.html_url.clone(),
            text: ItemText {
                copy: self.html_url.clone(),
                largetype: Some(self.title.clone()),
            },
        }
    }
}
