use super::{DataStore, LoadOutcome};
use crate::book::AddressBook;
use crate::error::Result;

/// Keeps the saved snapshot in memory. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<AddressBook>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self {
            snapshot: Some(book),
            saves: 0,
        }
    }

    pub fn snapshot(&self) -> Option<&AddressBook> {
        self.snapshot.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> LoadOutcome {
        match &self.snapshot {
            Some(book) => LoadOutcome::Loaded(book.clone()),
            None => LoadOutcome::Fresh(AddressBook::new()),
        }
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.snapshot = Some(book.clone());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
