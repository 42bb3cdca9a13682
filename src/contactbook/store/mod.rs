//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the address book lives. The book is
//! read once when the assistant starts and written back wholesale when the
//! user leaves; there is no incremental persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single pretty-printed JSON file
//!   holding every record in insertion order:
//!
//!   ```text
//!   addressbook.json
//!   {
//!     "records": [
//!       { "name": "Anna", "phones": ["1234567890"], ..., "notes": [...] }
//!     ]
//!   }
//!   ```
//!
//! - [`memory::InMemoryStore`]: keeps the last saved snapshot in memory, for
//!   tests.
//!
//! ## Failure policy
//!
//! Loading never stops the assistant: a missing file is a fresh book, and an
//! unreadable or corrupt file is reported as a [`LoadOutcome::Recovered`] with
//! an empty book. Saving reports every failure to the caller.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// What `load` found.
#[derive(Debug)]
pub enum LoadOutcome {
    /// An existing snapshot was read.
    Loaded(AddressBook),
    /// Nothing stored yet.
    Fresh(AddressBook),
    /// The snapshot could not be read; starting over with an empty book.
    Recovered { book: AddressBook, reason: String },
}

pub trait DataStore {
    /// Read the whole book. Never fails; see [`LoadOutcome`].
    fn load(&self) -> LoadOutcome;

    /// Overwrite the stored snapshot with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// Human readable location of the snapshot, for messages.
    fn location(&self) -> String;
}
