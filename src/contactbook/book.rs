//! # Address Book
//!
//! A name-keyed collection of [`Record`]s that remembers insertion order, so
//! listings come out in the order contacts were first added.
//!
//! The name is the identity of a record: the book never holds two records with
//! the same name. Adding a record under an existing name replaces the old one
//! in place (no field merge) and hands the old record back to the caller, which
//! is how the command layer reports "replaced" rather than "added".

use crate::birthdays::{self, BirthdayBucket, BirthdayCountdown};
use crate::fields::Birthday;
use crate::model::{normalize_tags, Note, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A note found by a tag query, together with its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteHit {
    pub contact: String,
    /// 1-based position of the note within the contact's notes.
    pub position: usize,
    pub note: Note,
}

/// Outcome of clearing a contact's birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthdayRemoval {
    Cleared(Birthday),
    NotSet,
    ContactNotFound,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredBook")]
pub struct AddressBook {
    records: Vec<Record>,
}

/// On-disk shape. Records sharing a name collapse to the last one, the same
/// way `add_record` treats them.
#[derive(Deserialize)]
struct StoredBook {
    #[serde(default)]
    records: Vec<Record>,
}

impl From<StoredBook> for AddressBook {
    fn from(stored: StoredBook) -> Self {
        let mut book = AddressBook::new();
        for record in stored.records {
            book.add_record(record);
        }
        book
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }

    /// Inserts `record`, replacing any record with the same name. Returns the
    /// replaced record.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name()) {
            Some(pos) => Some(std::mem::replace(&mut self.records[pos], record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Records whose name contains `substring`.
    pub fn search(&self, substring: &str, case_insensitive: bool) -> Vec<&Record> {
        if case_insensitive {
            let needle = substring.to_lowercase();
            self.records
                .iter()
                .filter(|r| r.name().to_lowercase().contains(&needle))
                .collect()
        } else {
            self.records
                .iter()
                .filter(|r| r.name().contains(substring))
                .collect()
        }
    }

    pub fn remove_record(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|pos| self.records.remove(pos))
    }

    pub fn remove_birthday(&mut self, name: &str) -> BirthdayRemoval {
        match self.find_mut(name) {
            Some(record) => match record.clear_birthday() {
                Some(birthday) => BirthdayRemoval::Cleared(birthday),
                None => BirthdayRemoval::NotSet,
            },
            None => BirthdayRemoval::ContactNotFound,
        }
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<BirthdayBucket> {
        birthdays::upcoming(&self.records, today, within_days)
    }

    pub fn days_until_each_birthday(&self, today: NaiveDate) -> Vec<BirthdayCountdown> {
        birthdays::countdowns(&self.records, today)
    }

    fn notes_matching<F>(&self, matches: F) -> Vec<NoteHit>
    where
        F: Fn(&Note) -> bool,
    {
        let matches = &matches;
        self.records
            .iter()
            .flat_map(move |record| {
                record
                    .notes
                    .iter()
                    .enumerate()
                    .filter(move |(_, note)| matches(note))
                    .map(move |(i, note)| NoteHit {
                        contact: record.name().to_string(),
                        position: i + 1,
                        note: note.clone(),
                    })
            })
            .collect()
    }

    pub fn find_notes_by_tag(&self, tag: &str) -> Vec<NoteHit> {
        self.notes_matching(|note| note.has_tag(tag))
    }

    /// Notes carrying every one of `tags`.
    pub fn find_notes_by_tags<T: AsRef<str>>(&self, tags: &[T]) -> Vec<NoteHit> {
        let wanted = normalize_tags(tags);
        self.notes_matching(|note| note.has_tags(&wanted))
    }

    /// Distinct names of contacts with at least one note carrying `tag`.
    pub fn find_contacts_by_tag(&self, tag: &str) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| r.notes.iter().any(|n| n.has_tag(tag)))
            .map(|r| r.name().to_string())
            .collect()
    }
}
