use crate::book::AddressBook;
use crate::commands::helpers::record_mut;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteSelector;

fn describe_tags(tags: &str) -> String {
    if tags.is_empty() {
        "no tags".to_string()
    } else {
        format!("tags: {}", tags)
    }
}

pub fn add(book: &mut AddressBook, name: &str, text: &str, tags: &[String]) -> Result<CmdResult> {
    let record = record_mut(book, name)?;
    let tag_list = record.add_note(text, tags)?.tag_list();
    let message = format!(
        "Note #{} added for contact {} ({})",
        record.notes.len(),
        name,
        describe_tags(&tag_list)
    );
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

pub fn edit(
    book: &mut AddressBook,
    name: &str,
    selector: &NoteSelector,
    text: &str,
    tags: Option<&[String]>,
) -> Result<CmdResult> {
    let note = record_mut(book, name)?.edit_note(selector, text, tags)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Note {} of {} updated: {} ({})",
        selector,
        name,
        note.text,
        describe_tags(&note.tag_list())
    ))))
}

pub fn delete(book: &mut AddressBook, name: &str, selector: &NoteSelector) -> Result<CmdResult> {
    let removed = record_mut(book, name)?.delete_note(selector)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Note deleted for contact {}: {}",
        name, removed.text
    ))))
}

pub fn add_tags(
    book: &mut AddressBook,
    name: &str,
    selector: &NoteSelector,
    tags: &[String],
) -> Result<CmdResult> {
    let note = record_mut(book, name)?.add_tags(selector, tags)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Tags of note {} of {}: {}",
        selector,
        name,
        note.tag_list()
    ))))
}

pub fn remove_tags(
    book: &mut AddressBook,
    name: &str,
    selector: &NoteSelector,
    tags: &[String],
) -> Result<CmdResult> {
    let note = record_mut(book, name)?.remove_tags(selector, tags)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Tags of note {} of {}: {}",
        selector,
        name,
        describe_tags(&note.tag_list())
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::two_contacts;
    use crate::error::AssistantError;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn add_reports_position() {
        let mut book = two_contacts();
        add(&mut book, "Anna", "first", &[]).unwrap();
        let result = add(&mut book, "Anna", "second", &tags(&["x"])).unwrap();
        assert_eq!(
            result.messages[0].content,
            "Note #2 added for contact Anna (tags: x)"
        );
    }

    #[test]
    fn add_to_unknown_contact_fails() {
        let mut book = two_contacts();
        assert!(matches!(
            add(&mut book, "Ghost", "text", &[]),
            Err(AssistantError::NotFound(_))
        ));
    }

    #[test]
    fn edit_by_text_and_index() {
        let mut book = two_contacts();
        add(&mut book, "Anna", "call mom", &tags(&["family"])).unwrap();

        let by_text = NoteSelector::Text("call mom".into());
        edit(&mut book, "Anna", &by_text, "call dad", None).unwrap();
        let note = &book.find("Anna").unwrap().notes[0];
        assert_eq!(note.text, "call dad");
        assert!(note.has_tag("family"));

        let new_tags = tags(&["urgent"]);
        edit(
            &mut book,
            "Anna",
            &NoteSelector::Index(1),
            "call both",
            Some(new_tags.as_slice()),
        )
        .unwrap();
        let note = &book.find("Anna").unwrap().notes[0];
        assert_eq!(note.tag_list(), "urgent");
    }

    #[test]
    fn edit_missing_note_is_not_found() {
        let mut book = two_contacts();
        let sel = NoteSelector::Text("ghost".into());
        assert!(matches!(
            edit(&mut book, "Anna", &sel, "x", None),
            Err(AssistantError::NotFound(_))
        ));
    }

    #[test]
    fn delete_and_tag_changes() {
        let mut book = two_contacts();
        add(&mut book, "Bob", "lend drill", &tags(&["tools"])).unwrap();
        let sel = NoteSelector::Index(1);

        add_tags(&mut book, "Bob", &sel, &tags(&["Garage"])).unwrap();
        assert_eq!(book.find("Bob").unwrap().notes[0].tag_list(), "garage, tools");

        remove_tags(&mut book, "Bob", &sel, &tags(&["tools"])).unwrap();
        assert_eq!(book.find("Bob").unwrap().notes[0].tag_list(), "garage");

        delete(&mut book, "Bob", &sel).unwrap();
        assert!(book.find("Bob").unwrap().notes.is_empty());
        assert!(delete(&mut book, "Bob", &sel).is_err());
    }
}
