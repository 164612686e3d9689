//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors from parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum EmailError {
    /// The input is empty, or whitespace only.
    #[error("email address is empty")]
    Empty,
    /// The input is longer than [`Email::MAX_LENGTH`].
    #[error("email address is longer than {} characters", Email::MAX_LENGTH)]
    TooLong,
    /// The input has no @ sign.
    #[error("email address has no @ sign")]
    MissingAt,
    /// Nothing before the @.
    #[error("email address has nothing before the @")]
    MissingLocalPart,
    /// The domain is empty or undotted, so mail could never route to it.
    #[error("email domain {0:?} is not routable")]
    BadDomain(String),
}

/// A canonicalized email address.
///
/// Parsing trims surrounding whitespace and lowercases the address, so two
/// spellings of the same mailbox compare equal. Validation is structural
/// only: a local part, an @, and a dotted domain. Deliverability is the mail
/// server's problem.
///
/// ## Examples
///
/// ```
/// use thrift_haven_core::Email;
///
/// let email = Email::parse("  Margot@Example.COM ").unwrap();
/// assert_eq!(email.as_str(), "margot@example.com");
///
/// assert!(Email::parse("margot.example.com").is_err()); // no @
/// assert!(Email::parse("margot@localhost").is_err()); // undotted domain
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Longest address accepted, per RFC 5321.
    pub const MAX_LENGTH: usize = 254;

    /// Parse and canonicalize an address.
    ///
    /// # Errors
    ///
    /// Returns an error when the trimmed input is empty, longer than
    /// [`Self::MAX_LENGTH`], missing its @ or local part, or when the
    /// domain is empty or has no dot.
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        let canonical = raw.trim().to_lowercase();

        if canonical.is_empty() {
            return Err(EmailError::Empty);
        }
        if canonical.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong);
        }

        let (local, domain) = canonical.split_once('@').ok_or(EmailError::MissingAt)?;
        if local.is_empty() {
            return Err(EmailError::MissingLocalPart);
        }
        if domain.is_empty() || !domain.contains('.') {
            return Err(EmailError::BadDomain(domain.to_owned()));
        }

        Ok(Self(canonical))
    }

    /// Returns the canonical address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_shapes() {
        for raw in [
            "margot@example.com",
            "margot.smith+orders@shop.example.co.uk",
            "m@e.co",
        ] {
            assert!(Email::parse(raw).is_ok(), "rejected {raw}");
        }
    }

    #[test]
    fn test_canonicalizes_case_and_whitespace() {
        let email = Email::parse("  Margot@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "margot@example.com");
    }

    #[test]
    fn test_spellings_of_one_mailbox_compare_equal() {
        assert_eq!(
            Email::parse("MARGOT@EXAMPLE.COM").unwrap(),
            Email::parse("margot@example.com").unwrap()
        );
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        for raw in ["", "   ", "\t\n"] {
            assert!(matches!(Email::parse(raw), Err(EmailError::Empty)));
        }
    }

    #[test]
    fn test_rejects_overlong() {
        let raw = format!("{}@example.com", "m".repeat(250));
        assert!(matches!(Email::parse(&raw), Err(EmailError::TooLong)));
    }

    #[test]
    fn test_rejects_missing_at() {
        assert!(matches!(
            Email::parse("margot.example.com"),
            Err(EmailError::MissingAt)
        ));
    }

    #[test]
    fn test_rejects_missing_local_part() {
        assert!(matches!(
            Email::parse("@example.com"),
            Err(EmailError::MissingLocalPart)
        ));
    }

    #[test]
    fn test_rejects_bad_domains() {
        assert!(matches!(
            Email::parse("margot@"),
            Err(EmailError::BadDomain(_))
        ));
        assert!(matches!(
            Email::parse("margot@localhost"),
            Err(EmailError::BadDomain(_))
        ));
    }

    #[test]
    fn test_display_and_serde() {
        let email = Email::parse("margot@example.com").unwrap();
        assert_eq!(format!("{email}"), "margot@example.com");

        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"margot@example.com\"");
        let back: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(back, email);
    }

    #[test]
    fn test_from_str_canonicalizes() {
        let email: Email = "Margot@Example.com".parse().unwrap();
        assert_eq!(email.as_str(), "margot@example.com");
    }
}
