use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn notes_by_tag(book: &AddressBook, tag: &str) -> Result<CmdResult> {
    let hits = book.find_notes_by_tag(tag);
    if hits.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!("No notes found with tag '{}'", tag))));
    }
    Ok(CmdResult::default().with_note_hits(hits))
}

/// Notes carrying all of `tags`.
pub fn notes_by_tags(book: &AddressBook, tags: &[String]) -> Result<CmdResult> {
    let hits = book.find_notes_by_tags(tags);
    if hits.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(
            "No notes found matching the specified tags.",
        )));
    }
    Ok(CmdResult::default().with_note_hits(hits))
}

pub fn contacts_by_tag(book: &AddressBook, tag: &str) -> Result<CmdResult> {
    let names = book.find_contacts_by_tag(tag);
    if names.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "No contacts found with tag '{}'",
            tag
        ))));
    }
    Ok(CmdResult::default().with_contact_names(names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::two_contacts;
    use crate::commands::notes;
    use crate::model::NoteSelector;

    fn tagged_book() -> AddressBook {
        let mut book = two_contacts();
        let family = vec!["family".to_string(), "friend".to_string()];
        notes::add(&mut book, "Anna", "sunday lunch", &family).unwrap();
        notes::add(&mut book, "Bob", "fishing trip", &["friend".to_string()]).unwrap();
        book
    }

    #[test]
    fn note_and_contact_indexes_follow_tags() {
        let mut book = tagged_book();

        let hits = notes_by_tag(&book, "family").unwrap().note_hits;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].contact, "Anna");
        assert_eq!(hits[0].note.text, "sunday lunch");

        let names = contacts_by_tag(&book, "friend").unwrap().contact_names;
        assert_eq!(names, vec!["Anna", "Bob"]);

        notes::delete(&mut book, "Anna", &NoteSelector::Index(1)).unwrap();
        assert!(notes_by_tag(&book, "family").unwrap().note_hits.is_empty());
        assert_eq!(
            contacts_by_tag(&book, "friend").unwrap().contact_names,
            vec!["Bob"]
        );
    }

    #[test]
    fn multi_tag_search_requires_all_tags() {
        let book = tagged_book();
        let both = vec!["friend".to_string(), "FAMILY".to_string()];
        let hits = notes_by_tags(&book, &both).unwrap().note_hits;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].contact, "Anna");

        let none = notes_by_tags(&book, &["work".to_string()]).unwrap();
        assert!(none.note_hits.is_empty());
        assert_eq!(none.messages.len(), 1);
    }

    #[test]
    fn misses_produce_a_message() {
        let book = tagged_book();
        let result = contacts_by_tag(&book, "nobody").unwrap();
        assert!(result.contact_names.is_empty());
        assert_eq!(result.messages[0].content, "No contacts found with tag 'nobody'");
    }
}
