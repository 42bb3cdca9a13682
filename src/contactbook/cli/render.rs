use colored::Colorize;
use contactbook::api::{CmdMessage, CmdResult, MessageLevel};
use contactbook::birthdays::{BirthdayBucket, BirthdayCountdown};
use contactbook::book::NoteHit;
use contactbook::error::AssistantError;
use contactbook::model::Record;
use unicode_width::UnicodeWidthStr;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// Command errors are shown at the prompt, not treated as fatal.
pub(super) fn print_error(err: &AssistantError) {
    println!("{}", err.to_string().red());
}

pub(super) fn print_records(records: &[Record], heading: &str) {
    if records.is_empty() {
        return;
    }
    println!("{}", heading.bold());
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", record);
    }
}

pub(super) fn print_note_hits(hits: &[NoteHit]) {
    for hit in hits {
        let tags = hit.note.tag_list();
        if tags.is_empty() {
            println!(
                "Contact: {}, Note #{}: {}",
                hit.contact.bold(),
                hit.position,
                hit.note.text
            );
        } else {
            println!(
                "Contact: {}, Note #{}: {} {}",
                hit.contact.bold(),
                hit.position,
                hit.note.text,
                format!("[tags: {}]", tags).cyan()
            );
        }
    }
}

pub(super) fn print_contact_names(names: &[String]) {
    if names.is_empty() {
        return;
    }
    println!("Contacts: {}", names.join(", "));
}

pub(super) fn print_birthday_buckets(buckets: &[BirthdayBucket]) {
    for bucket in buckets {
        println!(
            "{} ({}): {}",
            bucket.weekday_name().yellow(),
            bucket.date.format("%d.%m.%Y"),
            bucket.names.join(", ")
        );
    }
}

pub(super) fn print_countdowns(countdowns: &[BirthdayCountdown]) {
    let width = countdowns
        .iter()
        .map(|c| c.name.width())
        .max()
        .unwrap_or(0);

    for countdown in countdowns {
        let pad = " ".repeat(width - countdown.name.width());
        let when = match countdown.days {
            0 => "It's today!".to_string(),
            1 => "It's in 1 day.".to_string(),
            n => format!("It's in {} days.", n),
        };
        println!(
            "{}'s birthday{} is on {}. {}",
            countdown.name, pad, countdown.birthday, when
        );
    }
}

/// Prints everything a command produced. `records_heading` labels listed
/// contacts.
pub(super) fn render_result(result: &CmdResult, records_heading: &str) {
    print_records(&result.records, records_heading);
    print_note_hits(&result.note_hits);
    print_contact_names(&result.contact_names);
    print_birthday_buckets(&result.birthday_buckets);
    print_countdowns(&result.countdowns);
    print_messages(&result.messages);
}
