use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    NoRecipients,
    InvalidPhoneNumber { input: String },
    InvalidCallbackUrl { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NoRecipients => write!(f, "Number cannot be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidCallbackUrl { input } => write!(f, "invalid callback url: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "text" };
        assert_eq!(err.to_string(), "text must not be empty");

        let err = ValidationError::NoRecipients;
        assert_eq!(err.to_string(), "Number cannot be empty");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::InvalidCallbackUrl {
            input: "ftp://x".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid callback url: ftp://x");
    }
}
