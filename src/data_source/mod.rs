// Data source layer.
// Maps raw client results into repository and pull request entities.

pub mod pull_requests;
pub mod repositories;

pub use pull_requests::PullRequests;
pub use repositories::Repositories;
