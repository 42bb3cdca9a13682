//! Turns one input line into a [`Command`].
//!
//! Tokenizing happens once: words are split on whitespace, double quotes group
//! words, and `;` separates segments. The first segment holds the verb and the
//! positional arguments (`head`); later segments (`tail`) carry free text such
//! as note bodies and tag lists. Segments keep their position; only trailing
//! empty ones are dropped.

use super::setup::find_spec;
use contactbook::api::NewContact;
use contactbook::error::{AssistantError, Result};
use contactbook::model::NoteSelector;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLine {
    pub verb: String,
    pub head: Vec<String>,
    pub tail: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Empty,
    Command(Command),
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Exit,
    Add(NewContact),
    AddPhone { name: String, phone: String },
    ChangePhone { name: String, old: String, new: String },
    RemovePhone { name: String, phone: String },
    Phone { name: String },
    AddEmail { name: String, email: String },
    AddAddress { name: String, address: String },
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    RemoveBirthday { name: String },
    Birthdays { days: Option<i64> },
    WhenBirthdays,
    Search { term: String },
    All,
    DeleteContact { name: String },
    AddNote { name: String, text: String, tags: Vec<String> },
    EditNote {
        name: String,
        selector: NoteSelector,
        text: String,
        tags: Option<Vec<String>>,
    },
    DeleteNote { name: String, selector: NoteSelector },
    AddTags { name: String, selector: NoteSelector, tags: Vec<String> },
    RemoveTags { name: String, selector: NoteSelector, tags: Vec<String> },
    FindNotesByTag { tag: String },
    FindContactsByTag { tag: String },
    SearchNotesByTags { tags: Vec<String> },
}

struct Tokens {
    segments: Vec<Vec<String>>,
    balanced: bool,
}

fn tokenize(line: &str) -> Tokens {
    let mut segments = vec![Vec::new()];
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            ';' if !in_quotes => {
                if in_token {
                    if let Some(seg) = segments.last_mut() {
                        seg.push(std::mem::take(&mut current));
                    }
                    in_token = false;
                }
                segments.push(Vec::new());
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    if let Some(seg) = segments.last_mut() {
                        seg.push(std::mem::take(&mut current));
                    }
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        if let Some(seg) = segments.last_mut() {
            seg.push(current);
        }
    }

    Tokens {
        segments,
        balanced: !in_quotes,
    }
}

/// Splits a line into verb, head arguments and `;`-separated tail segments.
pub fn split_line(line: &str) -> Result<Option<ParsedLine>> {
    let Tokens { segments, balanced } = tokenize(line);
    let mut segments = segments.into_iter();
    let mut head = segments.next().unwrap_or_default().into_iter();

    let verb = match head.next() {
        Some(verb) => verb.to_lowercase(),
        None if line.trim().is_empty() => return Ok(None),
        None => String::new(),
    };

    if !balanced {
        let usage = find_spec(&verb).map_or("<command> <arguments>", |c| c.usage);
        return Err(AssistantError::malformed(usage));
    }

    let mut tail: Vec<String> = segments
        .map(|seg| seg.join(" ").trim().to_string())
        .collect();
    while tail.last().is_some_and(|seg| seg.is_empty()) {
        tail.pop();
    }

    Ok(Some(ParsedLine {
        verb,
        head: head.collect(),
        tail,
    }))
}

/// Tags are separated by commas and/or whitespace.
pub fn split_tags<T: AsRef<str>>(parts: &[T]) -> Vec<String> {
    parts
        .iter()
        .flat_map(|p| {
            p.as_ref()
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

fn selector(raw: &str) -> NoteSelector {
    let Ok(selector) = raw.parse::<NoteSelector>();
    selector
}

pub fn parse(line: &str) -> Result<Parsed> {
    let Some(parsed) = split_line(line)? else {
        return Ok(Parsed::Empty);
    };
    let Some(spec) = find_spec(&parsed.verb) else {
        return Ok(Parsed::Unknown(parsed.verb));
    };
    let bad = || AssistantError::malformed(spec.usage);

    let ParsedLine { head, tail, .. } = parsed;
    let exact = |n: usize| if head.len() == n { Ok(()) } else { Err(bad()) };
    let at_least = |n: usize| if head.len() >= n { Ok(()) } else { Err(bad()) };
    let rest = |from: usize| head[from..].join(" ");

    let command = match spec.name {
        "hello" => Command::Hello,
        "help" => Command::Help,
        "exit" => Command::Exit,
        "all" => Command::All,
        "when_birthdays" => Command::WhenBirthdays,
        "add" => {
            at_least(4)?;
            Command::Add(NewContact {
                name: head[0].clone(),
                phone: head[1].clone(),
                email: head[2].clone(),
                address: rest(3),
                note: tail.first().filter(|note| !note.is_empty()).cloned(),
                tags: split_tags(tail.get(1..).unwrap_or_default()),
            })
        }
        "add_phone" => {
            exact(2)?;
            Command::AddPhone {
                name: head[0].clone(),
                phone: head[1].clone(),
            }
        }
        "change_phone" => {
            exact(3)?;
            Command::ChangePhone {
                name: head[0].clone(),
                old: head[1].clone(),
                new: head[2].clone(),
            }
        }
        "remove_phone" => {
            exact(2)?;
            Command::RemovePhone {
                name: head[0].clone(),
                phone: head[1].clone(),
            }
        }
        "phone" => {
            at_least(1)?;
            Command::Phone { name: rest(0) }
        }
        "add_email" => {
            exact(2)?;
            Command::AddEmail {
                name: head[0].clone(),
                email: head[1].clone(),
            }
        }
        "add_address" => {
            at_least(2)?;
            Command::AddAddress {
                name: head[0].clone(),
                address: rest(1),
            }
        }
        "add_birthday" => {
            exact(2)?;
            Command::AddBirthday {
                name: head[0].clone(),
                birthday: head[1].clone(),
            }
        }
        "show_birthday" => {
            at_least(1)?;
            Command::ShowBirthday { name: rest(0) }
        }
        "remove_birthday" => {
            at_least(1)?;
            Command::RemoveBirthday { name: rest(0) }
        }
        "birthdays" => match head.as_slice() {
            [] => Command::Birthdays { days: None },
            [days] => match days.parse::<i64>() {
                Ok(n) if n > 0 => Command::Birthdays { days: Some(n) },
                _ => return Err(bad()),
            },
            _ => return Err(bad()),
        },
        "search" => {
            at_least(1)?;
            Command::Search { term: rest(0) }
        }
        "delete_contact" => {
            at_least(1)?;
            Command::DeleteContact { name: rest(0) }
        }
        "add_notes" => {
            at_least(2)?;
            Command::AddNote {
                name: head[0].clone(),
                text: rest(1),
                tags: split_tags(&tail),
            }
        }
        "edit_notes" => {
            at_least(2)?;
            let Some(text) = tail.first().filter(|text| !text.is_empty()) else {
                return Err(bad());
            };
            Command::EditNote {
                name: head[0].clone(),
                selector: selector(&rest(1)),
                text: text.clone(),
                tags: (tail.len() > 1).then(|| split_tags(&tail[1..])),
            }
        }
        "delete_notes" => {
            at_least(2)?;
            Command::DeleteNote {
                name: head[0].clone(),
                selector: selector(&rest(1)),
            }
        }
        "add_tag" | "remove_tag" => {
            let (note, tags) = if tail.is_empty() {
                at_least(3)?;
                (head[1].clone(), split_tags(&head[2..]))
            } else {
                at_least(2)?;
                (rest(1), split_tags(&tail))
            };
            if tags.is_empty() {
                return Err(bad());
            }
            let name = head[0].clone();
            let selector = selector(&note);
            if spec.name == "add_tag" {
                Command::AddTags {
                    name,
                    selector,
                    tags,
                }
            } else {
                Command::RemoveTags {
                    name,
                    selector,
                    tags,
                }
            }
        }
        "find_notes_by_tag" => {
            exact(1)?;
            Command::FindNotesByTag {
                tag: head[0].clone(),
            }
        }
        "find_contacts_by_tag" => {
            exact(1)?;
            Command::FindContactsByTag {
                tag: head[0].clone(),
            }
        }
        "search_notes_by_tags" => {
            let mut parts = head.clone();
            parts.extend(tail.iter().cloned());
            let tags = split_tags(&parts);
            if tags.is_empty() {
                return Err(bad());
            }
            Command::SearchNotesByTags { tags }
        }
        _ => return Ok(Parsed::Unknown(spec.name.to_string())),
    };

    Ok(Parsed::Command(command))
}
