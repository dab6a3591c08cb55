//! In-memory journal store and the persisted document shape.

use super::Mood;
use crate::constants::DATE_FORMAT_ISO;
use chrono::NaiveDate;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// One journaled mood record for a specific date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Calendar date the entry belongs to.
    pub date: NaiveDate,
    /// Free-text description as typed by the user.
    pub description: String,
    /// Classified mood.
    pub mood: Mood,
}

impl Entry {
    /// Numeric score of the entry, derived from its mood.
    pub fn score(&self) -> u8 {
        self.mood.score()
    }

    /// The date in canonical `YYYY-MM-DD` form, as used for keys.
    pub fn date_key(&self) -> String {
        self.date.format(DATE_FORMAT_ISO).to_string()
    }
}

/// Date-keyed collection of entries for one user.
///
/// Iteration follows insertion order. Adding an entry for a date that is
/// already present replaces that entry in place, so the store never holds
/// two entries for the same date and the replaced entry keeps its position.
///
/// # Examples
///
/// ```
/// use mood_journal::journal_core::{JournalStore, Mood};
/// use chrono::NaiveDate;
///
/// let mut store = JournalStore::new();
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// store.add_entry(date, "Slept badly", Mood::Sad);
/// store.add_entry(date, "Great afternoon", Mood::Happy);
///
/// assert_eq!(store.len(), 1);
/// assert_eq!(store.get(date).unwrap().mood, Mood::Happy);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalStore {
    entries: Vec<Entry>,
}

impl JournalStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, or overwrites the entry already stored for `date`.
    pub fn add_entry(&mut self, date: NaiveDate, description: impl Into<String>, mood: Mood) {
        let entry = Entry {
            date,
            description: description.into(),
            mood,
        };

        match self.entries.iter_mut().find(|existing| existing.date == date) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// All entries in iteration order.
    pub fn get_history(&self) -> &[Entry] {
        &self.entries
    }

    /// The entry stored for `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.date == date)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a JournalStore {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// On disk a store is `{ "YYYY-MM-DD": [description, mood, score], ... }`.
impl Serialize for JournalStore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(
                &entry.date_key(),
                &(&entry.description, entry.mood, entry.score()),
            )?;
        }
        map.end()
    }
}

struct JournalStoreVisitor;

impl<'de> Visitor<'de> for JournalStoreVisitor {
    type Value = JournalStore;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of YYYY-MM-DD dates to [description, mood, score] triples")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut store = JournalStore::new();

        while let Some((key, (description, mood, score))) =
            access.next_entry::<String, (String, Mood, u8)>()?
        {
            let date = NaiveDate::parse_from_str(&key, DATE_FORMAT_ISO).map_err(|e| {
                de::Error::custom(format!("invalid date key '{}': {}", key, e))
            })?;

            if score != mood.score() {
                return Err(de::Error::custom(format!(
                    "entry for {} has score {} but mood {} requires {}",
                    key,
                    score,
                    mood,
                    mood.score()
                )));
            }

            store.add_entry(date, description, mood);
        }

        Ok(store)
    }
}

impl<'de> Deserialize<'de> for JournalStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(JournalStoreVisitor)
    }
}

/// A named user and their journal for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub mood_history: JournalStore,
}

impl User {
    /// Creates a user with an empty history.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mood_history: JournalStore::new(),
        }
    }

    /// Records an entry in the user's history. See [`JournalStore::add_entry`].
    pub fn add_entry(&mut self, date: NaiveDate, description: impl Into<String>, mood: Mood) {
        self.mood_history.add_entry(date, description, mood);
    }

    pub fn get_history(&self) -> &JournalStore {
        &self.mood_history
    }
}

/// The on-disk journal: every user's store, keyed by user name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JournalDocument {
    users: BTreeMap<String, JournalStore>,
}

impl JournalDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The store saved under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&JournalStore> {
        self.users.get(name)
    }

    /// Removes and returns the store saved under `name`.
    pub fn take(&mut self, name: &str) -> Option<JournalStore> {
        self.users.remove(name)
    }

    /// Stores `user`'s history under their name, replacing any previous one.
    pub fn upsert_user(&mut self, user: &User) {
        self.users
            .insert(user.name.clone(), user.mood_history.clone());
    }

    pub fn user_names(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
