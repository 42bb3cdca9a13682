//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every assistant operation, whatever UI drives it.
//!
//! `AssistantApi<S: DataStore>` owns the [`AddressBook`] for the whole session:
//! it is loaded from the store when the facade is opened and written back by
//! [`AssistantApi::save`]. Commands mutate it in place; nothing touches the
//! store in between.
//!
//! The facade also supplies the ambient inputs commands should not reach for
//! themselves: today's date and the session [`Settings`].
//!
//! No I/O beyond the store, no presentation. Methods return
//! `Result<CmdResult>`.

use crate::book::AddressBook;
use crate::commands;
use crate::config::Settings;
use crate::error::Result;
use crate::model::NoteSelector;
use crate::store::{DataStore, LoadOutcome};
use chrono::{Local, NaiveDate};
use log::debug;

pub struct AssistantApi<S: DataStore> {
    store: S,
    book: AddressBook,
    settings: Settings,
    today: Option<NaiveDate>,
    startup: Vec<commands::CmdMessage>,
}

impl<S: DataStore> AssistantApi<S> {
    /// Loads the book from `store`. A corrupt snapshot starts an empty book
    /// and leaves a warning in [`AssistantApi::startup_messages`].
    pub fn open(store: S, settings: Settings) -> Self {
        let mut startup = Vec::new();
        let book = match store.load() {
            LoadOutcome::Loaded(book) | LoadOutcome::Fresh(book) => book,
            LoadOutcome::Recovered { book, reason } => {
                startup.push(commands::CmdMessage::warning(format!(
                    "Could not read address book at {} ({}); starting with an empty one.",
                    store.location(),
                    reason
                )));
                book
            }
        };
        debug!("session opened with {} contacts", book.len());
        Self {
            store,
            book,
            settings,
            today: None,
            startup,
        }
    }

    /// Pins "today" instead of reading the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn startup_messages(&self) -> &[commands::CmdMessage] {
        &self.startup
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        self.store.save(&self.book)?;
        Ok(commands::CmdResult::default().with_message(commands::CmdMessage::success(format!(
            "Address book saved to {}",
            self.store.location()
        ))))
    }

    pub fn add_contact(&mut self, contact: NewContact) -> Result<commands::CmdResult> {
        commands::contacts::add(&mut self.book, contact)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::contacts::delete(&mut self.book, name)
    }

    pub fn search(&self, term: &str) -> Result<commands::CmdResult> {
        commands::contacts::search(&self.book, term)
    }

    pub fn all(&self) -> Result<commands::CmdResult> {
        commands::contacts::all(&self.book)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::phones::add(&mut self.book, name, phone)
    }

    pub fn change_phone(
        &mut self,
        name: &str,
        old: &str,
        new: &str,
    ) -> Result<commands::CmdResult> {
        commands::phones::change(&mut self.book, name, old, new)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        let keep_placeholder = self.settings.placeholder_phone_on_remove;
        commands::phones::remove(&mut self.book, name, phone, keep_placeholder)
    }

    pub fn phones(&self, name: &str) -> Result<commands::CmdResult> {
        commands::phones::show(&self.book, name)
    }

    pub fn add_email(&mut self, name: &str, email: &str) -> Result<commands::CmdResult> {
        commands::details::add_email(&mut self.book, name, email)
    }

    pub fn add_address(&mut self, name: &str, address: &str) -> Result<commands::CmdResult> {
        commands::details::add_address(&mut self.book, name, address)
    }

    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<commands::CmdResult> {
        commands::birthdays::add(&mut self.book, name, birthday)
    }

    pub fn show_birthday(&self, name: &str) -> Result<commands::CmdResult> {
        commands::birthdays::show(&self.book, name)
    }

    pub fn remove_birthday(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::birthdays::remove(&mut self.book, name)
    }

    /// Birthdays within `days` (or the configured window) from today.
    pub fn upcoming_birthdays(&self, days: Option<i64>) -> Result<commands::CmdResult> {
        let window = days.unwrap_or(self.settings.birthday_window_days);
        commands::birthdays::upcoming(&self.book, self.today(), window)
    }

    pub fn when_birthdays(&self) -> Result<commands::CmdResult> {
        commands::birthdays::countdown(&self.book, self.today())
    }

    pub fn add_note(
        &mut self,
        name: &str,
        text: &str,
        tags: &[String],
    ) -> Result<commands::CmdResult> {
        commands::notes::add(&mut self.book, name, text, tags)
    }

    pub fn edit_note(
        &mut self,
        name: &str,
        selector: &NoteSelector,
        text: &str,
        tags: Option<&[String]>,
    ) -> Result<commands::CmdResult> {
        commands::notes::edit(&mut self.book, name, selector, text, tags)
    }

    pub fn delete_note(
        &mut self,
        name: &str,
        selector: &NoteSelector,
    ) -> Result<commands::CmdResult> {
        commands::notes::delete(&mut self.book, name, selector)
    }

    pub fn add_tags(
        &mut self,
        name: &str,
        selector: &NoteSelector,
        tags: &[String],
    ) -> Result<commands::CmdResult> {
        commands::notes::add_tags(&mut self.book, name, selector, tags)
    }

    pub fn remove_tags(
        &mut self,
        name: &str,
        selector: &NoteSelector,
        tags: &[String],
    ) -> Result<commands::CmdResult> {
        commands::notes::remove_tags(&mut self.book, name, selector, tags)
    }

    pub fn find_notes_by_tag(&self, tag: &str) -> Result<commands::CmdResult> {
        commands::tags::notes_by_tag(&self.book, tag)
    }

    pub fn find_notes_by_tags(&self, tags: &[String]) -> Result<commands::CmdResult> {
        commands::tags::notes_by_tags(&self.book, tags)
    }

    pub fn find_contacts_by_tag(&self, tag: &str) -> Result<commands::CmdResult> {
        commands::tags::contacts_by_tag(&self.book, tag)
    }
}

pub use crate::commands::contacts::NewContact;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::memory::InMemoryStore;

    fn anna() -> NewContact {
        NewContact {
            name: "Anna".into(),
            phone: "1234567890".into(),
            email: "a@b.com".into(),
            address: "Main St".into(),
            note: None,
            tags: vec![],
        }
    }

    #[test]
    fn open_loads_existing_snapshot() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Anna").unwrap());
        let api = AssistantApi::open(InMemoryStore::with_book(book), Settings::default());
        assert!(api.book().find("Anna").is_some());
        assert!(api.startup_messages().is_empty());
    }

    #[test]
    fn changes_reach_the_store_only_on_save() {
        let mut api = AssistantApi::open(InMemoryStore::new(), Settings::default());
        api.add_contact(anna()).unwrap();
        assert!(api.store().snapshot().is_none());

        api.save().unwrap();
        assert_eq!(api.store().save_count(), 1);
        assert!(api.store().snapshot().unwrap().find("Anna").is_some());
    }

    #[test]
    fn remove_phone_follows_settings() {
        let settings = Settings {
            placeholder_phone_on_remove: true,
            ..Settings::default()
        };
        let mut api = AssistantApi::open(InMemoryStore::new(), settings);
        api.add_contact(anna()).unwrap();
        api.remove_phone("Anna", "1234567890").unwrap();
        assert_eq!(
            api.book().find("Anna").unwrap().phones[0].as_str(),
            "0000000000"
        );
    }

    #[test]
    fn birthday_window_defaults_to_settings() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut api =
            AssistantApi::open(InMemoryStore::new(), Settings::default()).with_today(today);
        api.add_contact(anna()).unwrap();
        api.add_birthday("Anna", "29.10.1990").unwrap();

        assert!(api.upcoming_birthdays(None).unwrap().birthday_buckets.is_empty());
        assert_eq!(
            api.upcoming_birthdays(Some(14))
                .unwrap()
                .birthday_buckets
                .len(),
            1
        );
        assert_eq!(api.when_birthdays().unwrap().countdowns[0].days, 10);
    }
}
