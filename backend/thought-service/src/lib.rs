/// Thought Service Library
///
/// Backend for the Sparks shower-thoughts site: short text posts, four
/// reaction kinds per post, three feed orderings, and free-text feedback
/// capture.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Data structures for thoughts, reactions, and counters
/// - `services`: Business logic layer (feed assembly, ranking, votes)
/// - `db`: Database access layer and repositories
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
