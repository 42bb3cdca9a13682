use crate::book::AddressBook;
use crate::commands::helpers::record_mut;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn add_email(book: &mut AddressBook, name: &str, email: &str) -> Result<CmdResult> {
    record_mut(book, name)?.add_email(email)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Email {} added for contact {}",
        email, name
    ))))
}

pub fn add_address(book: &mut AddressBook, name: &str, address: &str) -> Result<CmdResult> {
    record_mut(book, name)?.add_address(address);
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Address {} added for contact {}",
        address, name
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::two_contacts;
    use crate::error::AssistantError;

    #[test]
    fn appends_email_and_address() {
        let mut book = two_contacts();
        add_email(&mut book, "Anna", "anna@work.org").unwrap();
        add_address(&mut book, "Anna", "Second Ave 5").unwrap();

        let anna = book.find("Anna").unwrap();
        let emails: Vec<_> = anna.emails.iter().map(|e| e.as_str()).collect();
        assert_eq!(emails, vec!["a@b.com", "anna@work.org"]);
        assert_eq!(anna.addresses[1].as_str(), "Second Ave 5");
    }

    #[test]
    fn invalid_email_is_rejected() {
        let mut book = two_contacts();
        assert!(matches!(
            add_email(&mut book, "Bob", "bob-at-home"),
            Err(AssistantError::InvalidEmail(_))
        ));
        assert!(book.find("Bob").unwrap().emails.is_empty());
    }

    #[test]
    fn unknown_contact_is_not_found() {
        let mut book = two_contacts();
        assert!(matches!(
            add_address(&mut book, "Ghost", "Nowhere"),
            Err(AssistantError::NotFound(_))
        ));
    }
}
