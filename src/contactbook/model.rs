use crate::error::{AssistantError, Result};
use crate::fields::{Address, Birthday, Email, Name, Phone};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Normalizes raw tag input: trimmed, lower-cased, empties dropped.
pub fn normalize_tags<I, T>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub text: String,
    pub tags: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new<I, T>(text: &str, tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let text = text.trim();
        if text.is_empty() {
            return Err(AssistantError::InvalidNote);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            text: text.to_string(),
            tags: normalize_tags(tags),
            created_at: Utc::now(),
        })
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag.trim().to_lowercase())
    }

    /// True when the note carries every tag in `tags`.
    pub fn has_tags(&self, tags: &BTreeSet<String>) -> bool {
        self.tags.is_superset(tags)
    }

    pub fn tag_list(&self) -> String {
        self.tags.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Addresses one note of a record: by 1-based position or by exact text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSelector {
    Index(usize),
    Text(String),
}

impl fmt::Display for NoteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteSelector::Index(i) => write!(f, "#{}", i),
            NoteSelector::Text(t) => write!(f, "\"{}\"", t),
        }
    }
}

impl FromStr for NoteSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(NoteSelector::Index(n)),
            _ => Ok(NoteSelector::Text(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    #[serde(default)]
    pub phones: Vec<Phone>,
    #[serde(default)]
    pub emails: Vec<Email>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub birthday: Option<Birthday>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            emails: Vec::new(),
            addresses: Vec::new(),
            birthday: None,
            notes: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn add_phone(&mut self, value: &str) -> Result<()> {
        self.phones.push(Phone::new(value)?);
        Ok(())
    }

    pub fn add_email(&mut self, value: &str) -> Result<()> {
        self.emails.push(Email::new(value)?);
        Ok(())
    }

    pub fn add_address(&mut self, value: &str) {
        self.addresses.push(Address::new(value));
    }

    /// Replaces the first phone equal to `old`. The new value is validated
    /// before anything is touched; returns whether a phone was replaced.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool> {
        let replacement = Phone::new(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(phone) => {
                *phone = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes the first phone equal to `value`.
    pub fn remove_phone(&mut self, value: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == value) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    pub fn add_birthday(&mut self, value: &str) -> Result<()> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    pub fn clear_birthday(&mut self) -> Option<Birthday> {
        self.birthday.take()
    }

    pub fn add_note<I, T>(&mut self, text: &str, tags: I) -> Result<&Note>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let note = Note::new(text, tags)?;
        self.notes.push(note);
        Ok(&self.notes[self.notes.len() - 1])
    }

    /// 0-based position of the note addressed by `selector`.
    pub fn note_position(&self, selector: &NoteSelector) -> Option<usize> {
        match selector {
            NoteSelector::Index(n) => (*n >= 1 && *n <= self.notes.len()).then(|| n - 1),
            NoteSelector::Text(text) => self.notes.iter().position(|n| n.text == *text),
        }
    }

    fn note_not_found(&self, selector: &NoteSelector) -> AssistantError {
        AssistantError::NotFound(format!("Note {} of {}", selector, self.name()))
    }

    /// Replaces text and, when given, tags of one note. Without new tags the
    /// note keeps the ones it had.
    pub fn edit_note(
        &mut self,
        selector: &NoteSelector,
        new_text: &str,
        new_tags: Option<&[String]>,
    ) -> Result<&Note> {
        let pos = self
            .note_position(selector)
            .ok_or_else(|| self.note_not_found(selector))?;
        let text = new_text.trim();
        if text.is_empty() {
            return Err(AssistantError::InvalidNote);
        }
        let note = &mut self.notes[pos];
        note.text = text.to_string();
        if let Some(tags) = new_tags {
            note.tags = normalize_tags(tags);
        }
        Ok(&*note)
    }

    pub fn delete_note(&mut self, selector: &NoteSelector) -> Result<Note> {
        let pos = self
            .note_position(selector)
            .ok_or_else(|| self.note_not_found(selector))?;
        Ok(self.notes.remove(pos))
    }

    pub fn add_tags(&mut self, selector: &NoteSelector, tags: &[String]) -> Result<&Note> {
        let pos = self
            .note_position(selector)
            .ok_or_else(|| self.note_not_found(selector))?;
        let note = &mut self.notes[pos];
        note.tags.extend(normalize_tags(tags));
        Ok(&*note)
    }

    pub fn remove_tags(&mut self, selector: &NoteSelector, tags: &[String]) -> Result<&Note> {
        let pos = self
            .note_position(selector)
            .ok_or_else(|| self.note_not_found(selector))?;
        let note = &mut self.notes[pos];
        for tag in normalize_tags(tags) {
            note.tags.remove(&tag);
        }
        Ok(&*note)
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Contact name: {}", self.name)?;
        writeln!(f, "  phones: {}", join(&self.phones))?;
        writeln!(f, "  emails: {}", join(&self.emails))?;
        writeln!(f, "  addresses: {}", join(&self.addresses))?;
        match &self.birthday {
            Some(b) => write!(f, "  birthday: {}", b)?,
            None => write!(f, "  birthday: not set")?,
        }
        for (i, note) in self.notes.iter().enumerate() {
            write!(f, "\n  note {}: {}", i + 1, note.text)?;
            if !note.tags.is_empty() {
                write!(f, " [tags: {}]", note.tag_list())?;
            }
        }
        Ok(())
    }
}
