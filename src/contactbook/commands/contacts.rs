use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AssistantError, Result};
use crate::model::Record;

/// Fields collected by `add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub note: Option<String>,
    pub tags: Vec<String>,
}

/// Builds the whole record before touching the book, so a bad field leaves
/// the book unchanged. An existing contact with the same name is replaced.
pub fn add(book: &mut AddressBook, contact: NewContact) -> Result<CmdResult> {
    let mut record = Record::new(&contact.name)?;
    record.add_phone(&contact.phone)?;
    record.add_email(&contact.email)?;
    record.add_address(&contact.address);
    if let Some(note) = &contact.note {
        record.add_note(note, &contact.tags)?;
    }

    let name = record.name().to_string();
    let mut result = CmdResult::default();
    if book.add_record(record).is_some() {
        result.add_message(CmdMessage::warning(format!(
            "Contact {} already existed and was replaced",
            name
        )));
    }

    let mut summary = format!(
        "Contact {} added with phone number {}, email {}, and address {}",
        name, contact.phone, contact.email, contact.address
    );
    if let Some(note) = &contact.note {
        summary.push_str(&format!(", note: {}", note));
        if !contact.tags.is_empty() {
            summary.push_str(&format!(" (tags: {})", contact.tags.join(", ")));
        }
    }
    result.add_message(CmdMessage::success(summary));
    Ok(result)
}

pub fn delete(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    book.remove_record(name)
        .ok_or_else(|| AssistantError::contact_not_found(name))?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!("Contact {} deleted.", name))))
}

pub fn search(book: &AddressBook, term: &str) -> Result<CmdResult> {
    let found: Vec<Record> = book.search(term, true).into_iter().cloned().collect();
    if found.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(
            "No contacts found matching the search criteria.",
        )));
    }
    Ok(CmdResult::default().with_records(found))
}

pub fn all(book: &AddressBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info("No contacts in the address book.")));
    }
    Ok(CmdResult::default().with_records(book.records().cloned().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::two_contacts;
    use crate::commands::MessageLevel;

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
    fn add_creates_record_with_all_fields() {
        let mut book = AddressBook::new();
        let result = add(&mut book, anna()).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let record = book.find("Anna").unwrap();
        assert_eq!(record.phones.len(), 1);
        assert_eq!(record.phones[0].as_str(), "1234567890");
        assert_eq!(record.emails[0].as_str(), "a@b.com");
        assert_eq!(record.addresses[0].as_str(), "Main St");
    }

    #[test]
    fn add_with_note_and_tags() {
        let mut book = AddressBook::new();
        let contact = NewContact {
            note: Some("met at the conference".into()),
            tags: vec!["work".into(), "Conf".into()],
            ..anna()
        };
        add(&mut book, contact).unwrap();
        let note = &book.find("Anna").unwrap().notes[0];
        assert_eq!(note.text, "met at the conference");
        assert_eq!(note.tag_list(), "conf, work");
    }

    #[test]
    fn add_with_invalid_field_leaves_book_untouched() {
        let mut book = two_contacts();
        let before = book.clone();
        let bad = NewContact {
            email: "not-an-email".into(),
            ..anna()
        };
        assert!(matches!(
            add(&mut book, bad),
            Err(AssistantError::InvalidEmail(_))
        ));
        assert_eq!(book, before);
    }

    #[test]
    fn add_existing_name_replaces_and_warns() {
        let mut book = two_contacts();
        let replacement = NewContact {
            phone: "5555555555".into(),
            ..anna()
        };
        let result = add(&mut book, replacement).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        let record = book.find("Anna").unwrap();
        assert_eq!(record.phones.len(), 1);
        assert_eq!(record.phones[0].as_str(), "5555555555");
    }

    #[test]
    fn delete_missing_contact_is_not_found() {
        let mut book = two_contacts();
        assert!(delete(&mut book, "Anna").is_ok());
        assert!(book.find("Anna").is_none());
        assert!(matches!(
            delete(&mut book, "Anna"),
            Err(AssistantError::NotFound(_))
        ));
    }

    #[test]
    fn search_is_case_insensitive() {
        let book = two_contacts();
        let result = search(&book, "ANN").unwrap();
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].name(), "Anna");

        let none = search(&book, "zzz").unwrap();
        assert!(none.records.is_empty());
        assert_eq!(none.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn all_lists_in_insertion_order() {
        let result = all(&two_contacts()).unwrap();
        let names: Vec<_> = result.records.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Anna", "Bob"]);

        let empty = all(&AddressBook::new()).unwrap();
        assert!(empty.records.is_empty());
        assert_eq!(empty.messages.len(), 1);
    }
}
