//! Aggregate mood statistics.
//!
//! The "weekly" summary averages every entry in the journal; it is not limited
//! to the last seven days.

use crate::constants::{SUMMARY_HAPPY_THRESHOLD, SUMMARY_NEUTRAL_THRESHOLD};
use crate::journal_core::{JournalStore, Mood};
use std::fmt;
use tracing::debug;

/// Overall tendency of a journal, derived from its average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLabel {
    /// Average above 2.5.
    MostlyHappy,
    /// Average above 1.5, up to and including 2.5.
    MostlyNeutral,
    /// Average of 1.5 or less.
    MostlySad,
}

impl SummaryLabel {
    /// Maps an average score onto a label.
    pub fn from_average(average: f64) -> Self {
        if average > SUMMARY_HAPPY_THRESHOLD {
            SummaryLabel::MostlyHappy
        } else if average > SUMMARY_NEUTRAL_THRESHOLD {
            SummaryLabel::MostlyNeutral
        } else {
            SummaryLabel::MostlySad
        }
    }
}

impl fmt::Display for SummaryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SummaryLabel::MostlyHappy => "Mostly Happy",
            SummaryLabel::MostlyNeutral => "Mostly Neutral",
            SummaryLabel::MostlySad => "Mostly Sad",
        })
    }
}

/// Result of [`weekly_summary`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklySummary {
    pub label: SummaryLabel,
    /// Arithmetic mean of all entry scores.
    pub average: f64,
}

impl fmt::Display for WeeklySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weekly Mood Summary: {} (Average Score: {:.2})",
            self.label, self.average
        )
    }
}

/// Averages the scores of every entry in `store`.
///
/// Returns `None` for an empty store.
///
/// # Examples
///
/// ```
/// use mood_journal::journal_core::{JournalStore, Mood};
/// use mood_journal::ops::{weekly_summary, SummaryLabel};
/// use chrono::NaiveDate;
///
/// let mut store = JournalStore::new();
/// store.add_entry(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), "good", Mood::Happy);
/// store.add_entry(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), "fine", Mood::Neutral);
///
/// let summary = weekly_summary(&store).unwrap();
/// assert_eq!(summary.label, SummaryLabel::MostlyNeutral);
/// assert_eq!(summary.to_string(), "Weekly Mood Summary: Mostly Neutral (Average Score: 2.50)");
/// ```
pub fn weekly_summary(store: &JournalStore) -> Option<WeeklySummary> {
    if store.is_empty() {
        return None;
    }

    let total: u32 = store.iter().map(|entry| u32::from(entry.score())).sum();
    let average = f64::from(total) / store.len() as f64;
    debug!(entries = store.len(), average, "Computed mood summary");

    Some(WeeklySummary {
        label: SummaryLabel::from_average(average),
        average,
    })
}

/// Finds the mood that occurs most often in `store`.
///
/// Ties go to the mood whose first entry comes earliest in store order.
/// Returns `None` for an empty store.
pub fn most_common_mood(store: &JournalStore) -> Option<Mood> {
    let mut counts: Vec<(Mood, usize)> = Vec::new();
    for entry in store {
        match counts.iter_mut().find(|(mood, _)| *mood == entry.mood) {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.mood, 1)),
        }
    }

    counts
        .into_iter()
        .fold(None, |best: Option<(Mood, usize)>, (mood, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((mood, count)),
        })
        .map(|(mood, _)| mood)
}
