use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::validation::ArgumentError;

use phonenumber::country::Id as CountryId;
use reqwest::header::HeaderValue;

#[derive(Clone)]
/// MSG91 authentication key (`authkey`).
///
/// Invariant: non-empty after trimming and usable as an HTTP header value. The value is
/// redacted from `Debug` output.
pub struct AuthKey(SecretString);

impl AuthKey {
    /// Parameter and header name used by MSG91 (`authkey`).
    pub const FIELD: &'static str = "authkey";

    /// Create a validated [`AuthKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ArgumentError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ArgumentError::Empty { field: Self::FIELD });
        }
        if HeaderValue::from_str(trimmed).is_err() {
            return Err(ArgumentError::InvalidHeaderValue { field: Self::FIELD });
        }
        Ok(Self(SecretString::from(trimmed.to_owned())))
    }

    /// Expose the key for placing it on the wire.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthKey([REDACTED])")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient mobile number as sent to MSG91 (`mobile`).
///
/// Invariant: non-empty after trimming. [`Mobile::new`] sends the value as given; MSG91
/// expects the country code without a leading `+`, which [`Mobile::parse`] produces.
pub struct Mobile(String);

impl Mobile {
    /// Parameter name used by MSG91 (`mobile`).
    pub const FIELD: &'static str = "mobile";

    /// Create a validated (non-empty) mobile number.
    pub fn new(value: impl Into<String>) -> Result<Self, ArgumentError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ArgumentError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Parse a number in any common notation and normalize it to E.164 digits without `+`.
    ///
    /// `default_region` applies when the input has no explicit country prefix.
    pub fn parse(
        default_region: Option<CountryId>,
        input: impl Into<String>,
    ) -> Result<Self, ArgumentError> {
        let input = input.into();
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ArgumentError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, raw).map_err(|_| {
            ArgumentError::InvalidPhoneNumber {
                input: raw.to_owned(),
            }
        })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        Ok(Self(e164.trim_start_matches('+').to_owned()))
    }

    /// Raw (trimmed) value as sent to MSG91.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Number of digits in a generated OTP (`otp_length`).
///
/// Invariant: `4..=9`.
pub struct OtpLength(u8);

impl OtpLength {
    /// Parameter name used by MSG91 (`otp_length`).
    pub const FIELD: &'static str = "otp_length";

    /// Minimum allowed length.
    pub const MIN: u8 = 4;
    /// Maximum allowed length.
    pub const MAX: u8 = 9;

    /// Create a validated OTP length.
    pub fn new(value: u8) -> Result<Self, ArgumentError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ArgumentError::OtpLengthOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifier of an approved MSG91 template or flow (`template_id`).
///
/// Invariant: non-empty after trimming.
pub struct TemplateId(String);

impl TemplateId {
    /// Payload field name used by MSG91 (`template_id`).
    pub const FIELD: &'static str = "template_id";

    /// Create a validated [`TemplateId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ArgumentError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ArgumentError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let key = AuthKey::new("  key ").unwrap();
        assert_eq!(key.expose(), "key");
        assert!(AuthKey::new("  ").is_err());

        let mobile = Mobile::new(" 919999999999 ").unwrap();
        assert_eq!(mobile.as_str(), "919999999999");
        assert!(Mobile::new("").is_err());

        let template_id = TemplateId::new(" 64a1b2 ").unwrap();
        assert_eq!(template_id.as_str(), "64a1b2");
        assert!(TemplateId::new(" ").is_err());
    }

    #[test]
    fn auth_key_debug_is_redacted() {
        let key = AuthKey::new("super-secret").unwrap();
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn auth_key_rejects_values_unusable_as_header() {
        assert_eq!(
            AuthKey::new("key\u{1}tail").unwrap_err(),
            ArgumentError::InvalidHeaderValue {
                field: AuthKey::FIELD
            }
        );
        assert!(AuthKey::new("key\nsplit").is_err());
    }

    #[test]
    fn parse_normalizes_to_digits_without_plus() {
        let international = Mobile::parse(None, "+91 99999 99999").unwrap();
        let national = Mobile::parse(Some(CountryId::IN), "9999999999").unwrap();
        assert_eq!(international, national);
        assert_eq!(international.as_str(), "919999999999");

        assert!(matches!(
            Mobile::parse(None, "not-a-number"),
            Err(ArgumentError::InvalidPhoneNumber { .. })
        ));
        assert_eq!(
            Mobile::parse(None, "  ").unwrap_err(),
            ArgumentError::Empty {
                field: Mobile::FIELD
            }
        );
    }

    #[test]
    fn otp_length_enforces_range() {
        assert!(OtpLength::new(OtpLength::MIN).is_ok());
        assert!(OtpLength::new(OtpLength::MAX).is_ok());
        assert!(matches!(
            OtpLength::new(3),
            Err(ArgumentError::OtpLengthOutOfRange { actual: 3, .. })
        ));
        assert!(OtpLength::new(10).is_err());
    }
}
