//! Validated scalar fields of a contact.
//!
//! Every field is a newtype over its string value. Construction goes through
//! `new`, which runs the matching `validate_*` check and refuses to build the
//! value otherwise, so a [`Record`](crate::model::Record) can never hold a
//! malformed phone, email or birthday.
//!
//! The same checks run when a book is loaded from disk: the newtypes
//! deserialize through `TryFrom<String>`.

use crate::error::{AssistantError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PHONE_LENGTH: usize = 10;
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A phone is any string of exactly ten characters. Digits are not enforced.
pub fn validate_phone(value: &str) -> bool {
    value.chars().count() == PHONE_LENGTH
}

pub fn validate_email(value: &str) -> bool {
    value.contains('@') && value.contains('.')
}

/// Accepts `DD.MM.YYYY` naming a real calendar date.
pub fn validate_birthday(value: &str) -> bool {
    parse_birthday(value).is_some()
}

fn parse_birthday(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if value.chars().count() != 10 || bytes.len() != 10 {
        return None;
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        2 | 5 => *b == b'.',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AssistantError::InvalidName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self> {
        if !validate_phone(value) {
            return Err(AssistantError::InvalidPhone(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: &str) -> Result<Self> {
        if !validate_email(value) {
            return Err(AssistantError::InvalidEmail(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-form postal address. No validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    pub fn new(value: &str) -> Result<Self> {
        let date =
            parse_birthday(value).ok_or_else(|| AssistantError::InvalidBirthday(value.into()))?;
        Ok(Self {
            value: value.to_string(),
            date,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

macro_rules! string_field {
    ($ty:ty, $get:expr) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($get(self))
            }
        }

        impl From<$ty> for String {
            fn from(field: $ty) -> String {
                $get(&field).to_string()
            }
        }
    };
}

string_field!(Name, Name::as_str);
string_field!(Phone, Phone::as_str);
string_field!(Email, Email::as_str);
string_field!(Address, Address::as_str);
string_field!(Birthday, Birthday::as_str);

impl TryFrom<String> for Name {
    type Error = AssistantError;

    fn try_from(value: String) -> Result<Self> {
        Name::new(&value)
    }
}

impl TryFrom<String> for Phone {
    type Error = AssistantError;

    fn try_from(value: String) -> Result<Self> {
        Phone::new(&value)
    }
}

impl TryFrom<String> for Email {
    type Error = AssistantError;

    fn try_from(value: String) -> Result<Self> {
        Email::new(&value)
    }
}

impl TryFrom<String> for Birthday {
    type Error = AssistantError;

    fn try_from(value: String) -> Result<Self> {
        Birthday::new(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_exactly_ten_characters() {
        assert!(Phone::new("1234567890").is_ok());
        // Only the length is checked.
        assert!(Phone::new("abcdefghij").is_ok());
        assert!(Phone::new("ąęćłńóśźżx").is_ok());
    }

    #[test]
    fn phone_rejects_other_lengths() {
        for value in ["", "123", "123456789", "12345678901"] {
            let err = Phone::new(value).unwrap_err();
            assert!(matches!(err, AssistantError::InvalidPhone(v) if v == value));
        }
    }

    #[test]
    fn email_needs_at_sign_and_dot() {
        assert!(Email::new("a@b.com").is_ok());
        assert!(Email::new(".@").is_ok());
        assert!(matches!(
            Email::new("a@bcom"),
            Err(AssistantError::InvalidEmail(_))
        ));
        assert!(matches!(
            Email::new("ab.com"),
            Err(AssistantError::InvalidEmail(_))
        ));
    }

    #[test]
    fn birthday_accepts_real_dates() {
        let b = Birthday::new("01.01.2000").unwrap();
        assert_eq!(b.as_str(), "01.01.2000");
        assert_eq!(b.date(), NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert!(Birthday::new("29.02.2024").is_ok());
    }

    #[test]
    fn birthday_rejects_malformed_or_impossible_dates() {
        for value in [
            "1.1.2000",
            "2000-01-01",
            "31.02.2000",
            "29.02.2023",
            "01.13.2000",
            "01/01/2000",
            "01.01.20000",
            "aa.bb.cccc",
        ] {
            assert!(
                matches!(Birthday::new(value), Err(AssistantError::InvalidBirthday(_))),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn name_is_trimmed_and_required() {
        assert_eq!(Name::new("  Anna ").unwrap().as_str(), "Anna");
        assert!(matches!(Name::new("   "), Err(AssistantError::InvalidName)));
    }

    #[test]
    fn deserialization_revalidates() {
        let ok: Phone = serde_json::from_str("\"0000000000\"").unwrap();
        assert_eq!(ok.as_str(), "0000000000");
        assert!(serde_json::from_str::<Phone>("\"123\"").is_err());
        assert!(serde_json::from_str::<Birthday>("\"31.02.2000\"").is_err());

        let b: Birthday = serde_json::from_str("\"15.06.1990\"").unwrap();
        assert_eq!(serde_json::to_string(&b).unwrap(), "\"15.06.1990\"");
    }
}
