//! High-level read-only operations over a user's journal.
//!
//! This module provides the reports the interactive shell prints: the mood
//! summary, the most common mood, and the history listing.

pub mod history;
pub mod summarize;

// Re-export commonly used functions
pub use history::render_history;
pub use summarize::{most_common_mood, weekly_summary, SummaryLabel, WeeklySummary};
