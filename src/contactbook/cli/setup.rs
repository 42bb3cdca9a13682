use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contactbook", bin_name = "contactbook", version)]
#[command(about = "Personal assistant for contacts, birthdays and tagged notes", long_about = None)]
pub struct Cli {
    /// Address book file (overrides the configured location)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(short, long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Contacts,
    Birthdays,
    Notes,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Contacts => "Contacts:",
            CommandGroup::Birthdays => "Birthdays:",
            CommandGroup::Notes => "Notes & Tags:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Contacts,
            CommandGroup::Birthdays,
            CommandGroup::Notes,
            CommandGroup::Misc,
        ]
    }
}

/// One entry of the interactive command table.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub usage: &'static str,
    pub about: &'static str,
    pub group: CommandGroup,
}

impl CommandSpec {
    pub fn matches(&self, verb: &str) -> bool {
        self.name == verb || self.aliases.contains(&verb)
    }
}

const fn spec(
    name: &'static str,
    aliases: &'static [&'static str],
    usage: &'static str,
    about: &'static str,
    group: CommandGroup,
) -> CommandSpec {
    CommandSpec {
        name,
        aliases,
        usage,
        about,
        group,
    }
}

use CommandGroup::{Birthdays, Contacts, Misc, Notes};

pub const COMMANDS: &[CommandSpec] = &[
    spec(
        "add",
        &[],
        "add <name> <phone> <email> <address...> [; <note> [; <tags>]]",
        "Add a contact (replaces one with the same name)",
        Contacts,
    ),
    spec("add_phone", &[], "add_phone <name> <phone>", "Add a phone number", Contacts),
    spec(
        "change_phone",
        &[],
        "change_phone <name> <old phone> <new phone>",
        "Replace a phone number",
        Contacts,
    ),
    spec(
        "remove_phone",
        &[],
        "remove_phone <name> <phone>",
        "Remove a phone number",
        Contacts,
    ),
    spec("phone", &[], "phone <name>", "Show a contact's phone numbers", Contacts),
    spec("add_email", &[], "add_email <name> <email>", "Add an email address", Contacts),
    spec(
        "add_address",
        &[],
        "add_address <name> <address...>",
        "Add a postal address",
        Contacts,
    ),
    spec("search", &[], "search <text...>", "Find contacts by name", Contacts),
    spec("all", &[], "all", "List every contact", Contacts),
    spec(
        "delete_contact",
        &[],
        "delete_contact <name>",
        "Delete a contact",
        Contacts,
    ),
    spec(
        "add_birthday",
        &[],
        "add_birthday <name> <DD.MM.YYYY>",
        "Set a contact's birthday",
        Birthdays,
    ),
    spec(
        "show_birthday",
        &[],
        "show_birthday <name>",
        "Show a contact's birthday",
        Birthdays,
    ),
    spec(
        "remove_birthday",
        &[],
        "remove_birthday <name>",
        "Clear a contact's birthday",
        Birthdays,
    ),
    spec(
        "birthdays",
        &[],
        "birthdays [days]",
        "Birthdays coming up, by weekday",
        Birthdays,
    ),
    spec(
        "when_birthdays",
        &[],
        "when_birthdays",
        "Days until each birthday",
        Birthdays,
    ),
    spec(
        "add_notes",
        &["add_note"],
        "add_notes <name> <text...> [; <tags>]",
        "Attach a note to a contact",
        Notes,
    ),
    spec(
        "edit_notes",
        &["edit_note"],
        "edit_notes <name> <note> ; <new text> [; <tags>]",
        "Rewrite a note",
        Notes,
    ),
    spec(
        "delete_notes",
        &["delete_note"],
        "delete_notes <name> <note>",
        "Delete a note",
        Notes,
    ),
    spec("add_tag", &["add_tags"], "add_tag <name> <note> ; <tags>", "Tag a note", Notes),
    spec(
        "remove_tag",
        &["remove_tags"],
        "remove_tag <name> <note> ; <tags>",
        "Untag a note",
        Notes,
    ),
    spec(
        "find_notes_by_tag",
        &[],
        "find_notes_by_tag <tag>",
        "Notes carrying a tag",
        Notes,
    ),
    spec(
        "find_contacts_by_tag",
        &[],
        "find_contacts_by_tag <tag>",
        "Contacts with a note carrying a tag",
        Notes,
    ),
    spec(
        "search_notes_by_tags",
        &[],
        "search_notes_by_tags <tag> [tag...]",
        "Notes carrying all of the tags",
        Notes,
    ),
    spec("hello", &[], "hello", "Say hello", Misc),
    spec("help", &[], "help", "Show this help", Misc),
    spec("exit", &["close"], "exit", "Save and quit", Misc),
];

pub fn find_spec(verb: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|c| c.matches(verb))
}

/// Returns the grouped help listing for the interactive commands
pub fn get_grouped_help() -> String {
    let mut output = String::new();
    output.push_str("Commands (names with spaces go in double quotes):\n");

    for group in CommandGroup::all() {
        output.push('\n');
        output.push_str(&format!("{}\n", group.heading()));
        for cmd in COMMANDS.iter().filter(|c| c.group == *group) {
            output.push_str(&format!("  {:<22} {}\n", cmd.name, cmd.about));
            output.push_str(&format!("  {:<22}   {}\n", "", cmd.usage));
        }
    }

    output.push('\n');
    output.push_str("A <note> is its number in the contact's note list or its exact text.\n");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_aliases_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for cmd in COMMANDS {
            assert!(seen.insert(cmd.name), "duplicate {}", cmd.name);
            for alias in cmd.aliases {
                assert!(seen.insert(*alias), "duplicate {}", alias);
            }
        }
    }

    #[test]
    fn finds_by_alias() {
        assert_eq!(find_spec("close").unwrap().name, "exit");
        assert_eq!(find_spec("add_note").unwrap().name, "add_notes");
        assert!(find_spec("nope").is_none());
    }

    #[test]
    fn help_lists_every_command() {
        let help = get_grouped_help();
        for cmd in COMMANDS {
            assert!(help.contains(cmd.usage));
        }
        assert!(help.contains("Notes & Tags:"));
    }

    #[test]
    fn cli_flags_parse() {
        let cli = Cli::try_parse_from(["contactbook", "-f", "book.json", "-v"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("book.json")));
        assert!(cli.verbose);
        assert!(cli.config_dir.is_none());
    }
}
