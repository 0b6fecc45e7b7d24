//! Contact form state, validation, and the submission boundary.
//!
//! Validation mirrors the page's rules: a real first name, a
//! structurally plausible email address, and a message with some
//! substance. Callers surface only the first failed rule. Actual
//! delivery is behind [`SubmissionEndpoint`]; the page treats the
//! outcome as binary.

use std::collections::HashSet;
use thiserror::Error;

/// The collected contact form fields, as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// First and last name joined, with empty parts dropped.
    pub fn full_name(&self) -> String {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        match (first.is_empty(), last.is_empty()) {
            (false, false) => format!("{first} {last}"),
            (false, true) => first.to_owned(),
            (true, _) => last.to_owned(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A validation rule the form failed. `Display` texts are shown to the
/// visitor verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid name (minimum 2 characters)")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a message (minimum 10 characters)")]
    MessageTooShort,
}

/// Checks every rule in field order and returns all failures; the first
/// entry is the one shown to the visitor.
pub fn validate(form: &ContactForm) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if form.first_name.trim().chars().count() < 2 {
        errors.push(ValidationError::NameTooShort);
    }
    if !email_is_valid(form.email.trim()) {
        errors.push(ValidationError::InvalidEmail);
    }
    if form.message.trim().chars().count() < 10 {
        errors.push(ValidationError::MessageTooShort);
    }

    errors
}

/// Structural email check: one `@`, a non-empty local part, a dotted
/// domain with text on both sides of the last dot, and no whitespace.
fn email_is_valid(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Emails that have already sent a message, keyed by their normalized
/// (trimmed, lower-cased) form. Used only to warn about duplicate
/// submissions; durable storage is an external concern.
#[derive(Debug, Default)]
pub struct SentEmails {
    emails: HashSet<String>,
}

impl SentEmails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.emails.contains(&Self::normalize(raw))
    }

    /// Records an email. Returns `true` only when a non-empty address
    /// was newly inserted.
    pub fn record(&mut self, raw: &str) -> bool {
        let normalized = Self::normalize(raw);
        if normalized.is_empty() {
            return false;
        }
        self.emails.insert(normalized)
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

/// Why a handed-off submission did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("the submission endpoint rejected the message")]
    Rejected,
    #[error("the submission endpoint could not be reached")]
    Unreachable,
}

/// Destination for a validated form. Implementations deliver the fields
/// however they like; the page only cares whether it worked.
pub trait SubmissionEndpoint {
    fn submit(&mut self, form: &ContactForm) -> Result<(), SubmissionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.org".into(),
            message: "I would like to talk about an engine.".into(),
        }
    }

    #[test]
    fn a_complete_form_passes() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn short_or_blank_first_name_fails() {
        let mut form = valid_form();
        form.first_name = "A".into();
        assert_eq!(validate(&form), vec![ValidationError::NameTooShort]);

        form.first_name = "   ".into();
        assert_eq!(validate(&form), vec![ValidationError::NameTooShort]);
    }

    #[test]
    fn malformed_emails_fail() {
        let bad = [
            "",
            "plainaddress",
            "@example.org",
            "ada@",
            "ada@example",
            "ada@.org",
            "ada@example.",
            "ada@@example.org",
            "ada lovelace@example.org",
        ];
        for email in bad {
            let mut form = valid_form();
            form.email = email.into();
            assert_eq!(
                validate(&form),
                vec![ValidationError::InvalidEmail],
                "expected {email:?} to be rejected"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_in_the_email_is_tolerated() {
        let mut form = valid_form();
        form.email = "  ada@example.org  ".into();
        assert!(validate(&form).is_empty());
    }

    #[test]
    fn short_message_fails() {
        let mut form = valid_form();
        form.message = "hi there".into();
        assert_eq!(validate(&form), vec![ValidationError::MessageTooShort]);
    }

    #[test]
    fn failures_come_back_in_field_order() {
        let form = ContactForm::default();
        assert_eq!(
            validate(&form),
            vec![
                ValidationError::NameTooShort,
                ValidationError::InvalidEmail,
                ValidationError::MessageTooShort,
            ]
        );
    }

    #[test]
    fn full_name_joins_and_trims() {
        let form = valid_form();
        assert_eq!(form.full_name(), "Ada Lovelace");

        let mut form = valid_form();
        form.last_name = "  ".into();
        assert_eq!(form.full_name(), "Ada");

        form.first_name = String::new();
        form.last_name = "Lovelace".into();
        assert_eq!(form.full_name(), "Lovelace");
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = valid_form();
        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn sent_emails_normalize_before_comparing() {
        let mut sent = SentEmails::new();
        assert!(sent.record("  Ada@Example.ORG "));
        assert!(sent.contains("ada@example.org"));
        assert!(sent.contains("ADA@EXAMPLE.ORG  "));

        // Recording the same address again is a no-op.
        assert!(!sent.record("ada@example.org"));
        assert_eq!(sent.len(), 1);
    }

    #[test]
    fn empty_emails_are_never_recorded() {
        let mut sent = SentEmails::new();
        assert!(!sent.record("   "));
        assert!(sent.is_empty());
    }
}
