use crate::book::AddressBook;
use crate::commands::helpers::{record, record_mut};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub const PLACEHOLDER_PHONE: &str = "0000000000";

pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    record_mut(book, name)?.add_phone(phone)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Phone number {} added for contact {}",
        phone, name
    ))))
}

pub fn change(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let changed = record_mut(book, name)?.edit_phone(old, new)?;
    let message = if changed {
        CmdMessage::success(format!(
            "Phone number changed from {} to {} for contact {}",
            old, new, name
        ))
    } else {
        CmdMessage::warning(format!(
            "Phone number {} not found for contact {}",
            old, name
        ))
    };
    Ok(CmdResult::default().with_message(message))
}

/// Removes one phone. With `keep_placeholder` the contact gets the
/// `0000000000` placeholder in its place.
pub fn remove(
    book: &mut AddressBook,
    name: &str,
    phone: &str,
    keep_placeholder: bool,
) -> Result<CmdResult> {
    let record = record_mut(book, name)?;
    if !record.remove_phone(phone) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Phone number {} not found for contact {}.",
            phone, name
        ))));
    }

    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Phone number {} removed for contact {}.",
        phone, name
    )));
    if keep_placeholder {
        record.add_phone(PLACEHOLDER_PHONE)?;
        result.add_message(CmdMessage::info(format!(
            "Placeholder {} added in its place.",
            PLACEHOLDER_PHONE
        )));
    }
    Ok(result)
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = record(book, name)?;
    let message = if record.phones.is_empty() {
        CmdMessage::info(format!("No phone numbers for {}", name))
    } else {
        let phones: Vec<&str> = record.phones.iter().map(|p| p.as_str()).collect();
        CmdMessage::info(format!("Phone numbers for {}: {}", name, phones.join(", ")))
    };
    Ok(CmdResult::default().with_message(message))
}
