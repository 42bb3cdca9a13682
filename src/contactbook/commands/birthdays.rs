use crate::book::{AddressBook, BirthdayRemoval};
use crate::commands::helpers::{record, record_mut};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AssistantError, Result};
use chrono::NaiveDate;

pub fn add(book: &mut AddressBook, name: &str, birthday: &str) -> Result<CmdResult> {
    record_mut(book, name)?.add_birthday(birthday)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Birthday added for contact {}",
        name
    ))))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let message = match &record(book, name)?.birthday {
        Some(birthday) => CmdMessage::info(format!("Birthday for {}: {}", name, birthday)),
        None => CmdMessage::info(format!("No birthday set for {}", name)),
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn remove(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let message = match book.remove_birthday(name) {
        BirthdayRemoval::Cleared(_) => {
            CmdMessage::success(format!("Birthday removed for contact {}", name))
        }
        BirthdayRemoval::NotSet => CmdMessage::warning(format!("No birthday set for {}", name)),
        BirthdayRemoval::ContactNotFound => {
            return Err(AssistantError::contact_not_found(name));
        }
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn upcoming(book: &AddressBook, today: NaiveDate, within_days: i64) -> Result<CmdResult> {
    let buckets = book.upcoming_birthdays(today, within_days);
    if buckets.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "No birthdays in the next {} days.",
            within_days
        ))));
    }
    Ok(CmdResult::default().with_birthday_buckets(buckets))
}

pub fn countdown(book: &AddressBook, today: NaiveDate) -> Result<CmdResult> {
    let countdowns = book.days_until_each_birthday(today);
    if countdowns.is_empty() {
        return Ok(
            CmdResult::default().with_message(CmdMessage::info("No birthdays set for any contact."))
        );
    }
    Ok(CmdResult::default().with_countdowns(countdowns))
}
