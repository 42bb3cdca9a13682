use crate::birthdays::{BirthdayBucket, BirthdayCountdown};
use crate::book::NoteHit;
use crate::model::Record;

pub mod birthdays;
pub mod contacts;
pub mod details;
pub mod helpers;
pub mod notes;
pub mod phones;
pub mod tags;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command. Rendering is the CLI's job.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub records: Vec<Record>,
    pub note_hits: Vec<NoteHit>,
    pub contact_names: Vec<String>,
    pub birthday_buckets: Vec<BirthdayBucket>,
    pub countdowns: Vec<BirthdayCountdown>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    pub fn with_note_hits(mut self, hits: Vec<NoteHit>) -> Self {
        self.note_hits = hits;
        self
    }

    pub fn with_contact_names(mut self, names: Vec<String>) -> Self {
        self.contact_names = names;
        self
    }

    pub fn with_birthday_buckets(mut self, buckets: Vec<BirthdayBucket>) -> Self {
        self.birthday_buckets = buckets;
        self
    }

    pub fn with_countdowns(mut self, countdowns: Vec<BirthdayCountdown>) -> Self {
        self.countdowns = countdowns;
        self
    }
}
