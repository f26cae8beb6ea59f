// Result entities.
// Typed projections of raw GitHub records and their launcher item form.

pub mod item;
pub mod pull_request;
pub mod repository;

pub use item::{Item, ItemList, ItemText};
pub use pull_request::PullRequest;
pub use repository::Repository;

use serde_json::Value;

fn str_field(record: &Value, field: &str) -> String {
    record
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn u64_field(record: &Value, field: &str) -> Option<u64> {
    record.get(field).and_then(Value::as_u64)
}
