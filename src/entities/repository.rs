// Repository entity.

use serde_json::Value;

use super::item::{Item, ItemText};
use super::{str_field, u64_field};

/// GitHub repository as shown in the launcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    pub id: Option<u64>,
    pub name: String,
    /// `owner/name`.
    pub full_name: String,
    pub html_url: String,
    pub ssh_url: String,
}

impl Repository {
    /// Select the repository fields from a raw API record. Missing fields stay empty.
    pub fn from_record(record: &Value) -> Self {
        Self {
            id: u64_field(record, "id"),
            name: str_field(record, "name"),
            full_name: str_field(record, "full_name"),
            html_url: str_field(record, "html_url"),
            ssh_url: str_field(record, "ssh_url"),
        }
    }

    /// Launcher item: opens the web page, copies the SSH clone URL.
    pub fn to_item(&self) -> Item {
        Item {
            title: self.full_name.clone(),
            subtitle: self.html_url.clone(),
            arg: self.html_url.clone(),
            text: ItemText {
                copy: self.ssh_url.clone(),
                largetype: Some(self.full_name.clone()),
            },
        }
    }
}
