use super::{DataStore, LoadOutcome};
use crate::book::AddressBook;
use crate::error::{AssistantError, Result};
use log::{debug, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "addressbook.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AssistantError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> LoadOutcome {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no address book at {}, starting fresh", self.path.display());
                return LoadOutcome::Fresh(AddressBook::new());
            }
            Err(e) => {
                warn!("cannot read {}: {}", self.path.display(), e);
                return LoadOutcome::Recovered {
                    book: AddressBook::new(),
                    reason: e.to_string(),
                };
            }
        };

        match serde_json::from_str::<AddressBook>(&content) {
            Ok(book) => {
                info!(
                    "loaded {} contacts from {}",
                    book.len(),
                    self.path.display()
                );
                LoadOutcome::Loaded(book)
            }
            Err(e) => {
                warn!("corrupt address book {}: {}", self.path.display(), e);
                LoadOutcome::Recovered {
                    book: AddressBook::new(),
                    reason: e.to_string(),
                }
            }
        }
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(book).map_err(AssistantError::Serialization)?;
        fs::write(&self.path, content).map_err(AssistantError::Io)?;
        info!("saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
