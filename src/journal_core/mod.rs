//! Core journal functionality without I/O operations.
//!
//! This module contains the pure logic of the mood journal: the `Mood` label,
//! keyword classification of free-text descriptions, activity suggestions, and
//! the in-memory journal store. Nothing here touches the filesystem or console.

mod store;

pub use store::{Entry, JournalDocument, JournalStore, User};

use crate::constants::{
    NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS, SUGGESTION_FALLBACK, SUGGESTION_HAPPY,
    SUGGESTION_NEUTRAL, SUGGESTION_SAD,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical mood of a journal entry.
///
/// Each mood has a fixed numeric score used for averaging:
/// Happy = 3, Neutral = 2, Sad = 1. The score is always derived from the
/// mood, so the two can never disagree.
///
/// # Examples
///
/// ```
/// use mood_journal::journal_core::Mood;
///
/// assert_eq!(Mood::Happy.score(), 3);
/// assert_eq!(Mood::Sad.to_string(), "Sad");
/// assert_eq!(Mood::from_label("Neutral"), Some(Mood::Neutral));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    /// Description matched a positive keyword.
    Happy,
    /// Description matched no keyword.
    Neutral,
    /// Description matched a negative keyword and no positive one.
    Sad,
}

impl Mood {
    /// Numeric score of the mood (3, 2 or 1).
    pub fn score(self) -> u8 {
        match self {
            Mood::Happy => 3,
            Mood::Neutral => 2,
            Mood::Sad => 1,
        }
    }

    /// The label as written to the journal file and the console.
    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
        }
    }

    /// Parses an exact mood label. Labels are case-sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Happy" => Some(Mood::Happy),
            "Neutral" => Some(Mood::Neutral),
            "Sad" => Some(Mood::Sad),
            _ => None,
        }
    }

    /// The activity suggested after logging an entry with this mood.
    pub fn suggestion(self) -> &'static str {
        match self {
            Mood::Happy => SUGGESTION_HAPPY,
            Mood::Neutral => SUGGESTION_NEUTRAL,
            Mood::Sad => SUGGESTION_SAD,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification rules, evaluated in order. The first rule with a matching
/// keyword wins; descriptions matching no rule are Neutral.
const CLASSIFICATION_RULES: &[(&[&str], Mood)] = &[
    (POSITIVE_KEYWORDS, Mood::Happy),
    (NEGATIVE_KEYWORDS, Mood::Sad),
];

/// Classifies a free-text description into a mood and its score.
///
/// Matching is a case-insensitive substring test, so "Goodness" counts as
/// "good". Positive keywords take precedence over negative ones.
///
/// # Examples
///
/// ```
/// use mood_journal::journal_core::{classify, Mood};
///
/// assert_eq!(classify("Had a GREAT day"), (Mood::Happy, 3));
/// assert_eq!(classify("so tired"), (Mood::Sad, 1));
/// assert_eq!(classify("good but tired"), (Mood::Happy, 3));
/// assert_eq!(classify(""), (Mood::Neutral, 2));
/// ```
pub fn classify(description: &str) -> (Mood, u8) {
    let lowered = description.to_lowercase();

    let mood = CLASSIFICATION_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(_, mood)| *mood)
        .unwrap_or(Mood::Neutral);

    (mood, mood.score())
}

/// Suggests an activity for a mood label.
///
/// Total over all strings: labels other than the three known moods get a
/// generic suggestion.
///
/// # Examples
///
/// ```
/// use mood_journal::journal_core::suggest_activity;
///
/// assert_eq!(suggest_activity("Happy"), "Go for a walk and enjoy the day!");
/// assert_eq!(suggest_activity("Grumpy"), "Take some time to relax.");
/// ```
pub fn suggest_activity(label: &str) -> &'static str {
    Mood::from_label(label)
        .map(Mood::suggestion)
        .unwrap_or(SUGGESTION_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NEUTRAL_KEYWORDS;

    #[test]
    fn test_classify_positive_keywords() {
        for keyword in POSITIVE_KEYWORDS {
            assert_eq!(classify(keyword), (Mood::Happy, 3), "keyword: {}", keyword);
        }
        assert_eq!(classify("I feel AWESOME today"), (Mood::Happy, 3));
        assert_eq!(classify("Excited for the trip"), (Mood::Happy, 3));
    }

    #[test]
    fn test_classify_negative_keywords() {
        for keyword in NEGATIVE_KEYWORDS {
            assert_eq!(classify(keyword), (Mood::Sad, 1), "keyword: {}", keyword);
        }
        assert_eq!(classify("Really ANGRY about the traffic"), (Mood::Sad, 1));
    }

    #[test]
    fn test_classify_defaults_to_neutral() {
        assert_eq!(classify(""), (Mood::Neutral, 2));
        assert_eq!(classify("Went to the office"), (Mood::Neutral, 2));
        for keyword in NEUTRAL_KEYWORDS {
            assert_eq!(classify(keyword), (Mood::Neutral, 2), "keyword: {}", keyword);
        }
    }

    #[test]
    fn test_classify_positive_wins_over_negative() {
        assert_eq!(classify("sad movie but a good ending"), (Mood::Happy, 3));
        assert_eq!(classify("Tired but happy"), (Mood::Happy, 3));
    }

    #[test]
    fn test_classify_matches_substrings() {
        // "badminton" contains "bad"
        assert_eq!(classify("played badminton"), (Mood::Sad, 1));
        // "goodbye" contains "good"
        assert_eq!(classify("said goodbye"), (Mood::Happy, 3));
    }

    #[test]
    fn test_score_matches_mood() {
        for mood in [Mood::Happy, Mood::Neutral, Mood::Sad] {
            let (classified, score) = classify(match mood {
                Mood::Happy => "happy",
                Mood::Neutral => "",
                Mood::Sad => "sad",
            });
            assert_eq!(classified, mood);
            assert_eq!(score, mood.score());
        }
    }

    #[test]
    fn test_suggest_activity_table() {
        assert_eq!(suggest_activity("Happy"), "Go for a walk and enjoy the day!");
        assert_eq!(
            suggest_activity("Neutral"),
            "Try reading a book or watching a movie."
        );
        assert_eq!(
            suggest_activity("Sad"),
            "Listen to some uplifting music or call a friend."
        );
    }

    #[test]
    fn test_suggest_activity_fallback() {
        assert_eq!(suggest_activity(""), "Take some time to relax.");
        assert_eq!(suggest_activity("happy"), "Take some time to relax.");
        assert_eq!(suggest_activity("Ecstatic"), "Take some time to relax.");
    }

    #[test]
    fn test_mood_label_round_trip() {
        for mood in [Mood::Happy, Mood::Neutral, Mood::Sad] {
            assert_eq!(Mood::from_label(mood.label()), Some(mood));
            assert_eq!(mood.to_string(), mood.label());
        }
        assert_eq!(Mood::from_label("sad"), None);
    }
}
