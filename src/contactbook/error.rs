use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Name field is required")]
    InvalidName,

    #[error("Invalid phone number '{0}': must be exactly 10 characters")]
    InvalidPhone(String),

    #[error("Invalid email address '{0}': must contain '@' and '.'")]
    InvalidEmail(String),

    #[error("Invalid birthday '{0}': DD.MM.YYYY required")]
    InvalidBirthday(String),

    #[error("Note text cannot be empty")]
    InvalidNote,

    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid command format. Use '{usage}'")]
    MalformedCommand { usage: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AssistantError {
    pub fn contact_not_found(name: &str) -> Self {
        AssistantError::NotFound(format!("Contact {}", name))
    }

    pub fn malformed(usage: impl Into<String>) -> Self {
        AssistantError::MalformedCommand {
            usage: usage.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;
