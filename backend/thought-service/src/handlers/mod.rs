/// HTTP handlers for the public JSON surface
///
/// This module contains handlers for:
/// - Thoughts: list under an ordering, create, apply vote transitions
/// - Feedback: write-only free-text capture
pub mod feedback;
pub mod thoughts;

// Re-export handler functions at module level
pub use feedback::submit_feedback;
pub use thoughts::{create_thought, list_thoughts, vote_thought};
