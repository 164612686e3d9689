//! Contact form handling.
//!
//! Validates the form and acknowledges it. There is no mail transport behind
//! this yet; a submission is logged and the sender gets the confirmation copy.

use thiserror::Error;
use thrift_haven_core::{Email, EmailError};

/// Confirmation copy shown after a successful submission.
pub const CONTACT_CONFIRMATION: &str =
    "Thank you for your message. We’ll get back to you soon.";

/// Errors that can occur when submitting the contact form.
#[derive(Debug, Error)]
pub enum ContactError {
    /// The name field was blank.
    #[error("name is required")]
    MissingName,

    /// The message field was blank.
    #[error("message is required")]
    MissingMessage,

    /// The email address did not parse.
    #[error("invalid email address: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// A contact form submission, as typed by the sender.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validate a submission and hand back the confirmation copy.
///
/// # Errors
///
/// Returns an error if the name or message is blank, or if the email address
/// does not parse.
pub fn submit(form: &ContactForm) -> Result<&'static str, ContactError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(ContactError::MissingName);
    }

    let message = form.message.trim();
    if message.is_empty() {
        return Err(ContactError::MissingMessage);
    }

    let email = Email::parse(&form.email)?;

    tracing::info!(
        name = %name,
        email = %email,
        message_chars = message.chars().count(),
        "contact message received"
    );

    Ok(CONTACT_CONFIRMATION)
}
