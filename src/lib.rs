// github-repos library.
// GitHub client with Link-header pagination and an mtime-based file cache,
// plus the launcher commands built on top of it.

pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod data_source;
pub mod entities;
pub mod error;
pub mod github;
