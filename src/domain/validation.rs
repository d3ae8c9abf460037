use std::fmt;

/// A local precondition failed before any request was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    Empty { field: &'static str },
    OtpLengthOutOfRange { min: u8, max: u8, actual: u8 },
    InvalidPhoneNumber { input: String },
    InvalidHeaderValue { field: &'static str },
    InvalidUrl { input: String },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::OtpLengthOutOfRange { min, max, actual } => {
                write!(
                    f,
                    "OTP length must be between {min} and {max} (got {actual})"
                )
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidHeaderValue { field } => {
                write!(f, "{field} contains characters not allowed in an HTTP header")
            }
            Self::InvalidUrl { input } => write!(f, "invalid URL: {input}"),
        }
    }
}

impl std::error::Error for ArgumentError {}
