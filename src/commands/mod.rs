// Command layer.
// Each command fetches through a data source, filters, and renders launcher JSON.

pub mod filter;
pub mod help;
pub mod search;
pub mod user_pulls;
pub mod user_repos;
