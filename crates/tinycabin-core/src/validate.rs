//! Field-level validation helpers.
//!
//! Invokable independently of submission (the form shows inline hints as
//! the visitor types) and again as a whole when a submission begins.
//! The email check is a coarse syntactic one, not RFC validation.

use std::sync::OnceLock;

use regex::Regex;

use crate::form::InquiryForm;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    })
}

fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| Regex::new(r"^[\d\s\-\+\(\)]+$").expect("phone pattern compiles"))
}

/// Non-whitespace sequence, `@`, non-whitespace sequence, `.`,
/// non-whitespace sequence.
pub fn email_is_valid(email: &str) -> bool {
    email_re().is_match(email)
}

/// Empty, or only digits, whitespace, `-`, `+`, `(`, `)`.
pub fn phone_is_valid(phone: &str) -> bool {
    phone.is_empty() || phone_re().is_match(phone)
}

/// Non-empty after trimming surrounding whitespace.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// The fields a submission cannot proceed without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    Budget,
    ProjectOutline,
}

impl RequiredField {
    /// Label used when telling the visitor what is missing
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::Email => "email",
            RequiredField::Budget => "budget",
            RequiredField::ProjectOutline => "project outline",
        }
    }
}

/// Which required fields are empty or whitespace-only.
pub fn missing_required(form: &InquiryForm) -> Vec<RequiredField> {
    let checks = [
        (RequiredField::Name, form.name.as_str()),
        (RequiredField::Email, form.email.as_str()),
        (RequiredField::Budget, form.budget.as_str()),
        (RequiredField::ProjectOutline, form.project_outline.as_str()),
    ];
    checks
        .into_iter()
        .filter(|(_, value)| !is_present(value))
        .map(|(field, _)| field)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(email_is_valid("a@b.com"));
        assert!(email_is_valid("hello@tinycabin.studio"));
    }

    #[test]
    fn email_rejects_missing_dot_or_empty() {
        assert!(!email_is_valid("a@b"));
        assert!(!email_is_valid(""));
        assert!(!email_is_valid("a b@c.com"));
    }

    #[test]
    fn phone_accepts_empty_and_formatted_numbers() {
        assert!(phone_is_valid(""));
        assert!(phone_is_valid("+1 (555) 123-4567"));
    }

    #[test]
    fn phone_rejects_letters() {
        assert!(!phone_is_valid("abc"));
        assert!(!phone_is_valid("555-CALL"));
    }

    #[test]
    fn required_means_non_whitespace() {
        assert!(is_present("x"));
        assert!(!is_present(""));
        assert!(!is_present("   \t"));
    }

    #[test]
    fn missing_required_reports_each_empty_field() {
        let mut form = InquiryForm::default();
        form.name = "Ada".into();
        form.email = "  ".into();

        let missing = missing_required(&form);
        assert_eq!(
            missing,
            vec![
                RequiredField::Email,
                RequiredField::Budget,
                RequiredField::ProjectOutline
            ]
        );
    }

    #[test]
    fn missing_required_is_empty_when_form_is_complete() {
        let form = InquiryForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            budget: "5k-10k".into(),
            project_outline: "A small site for a small cabin".into(),
            ..Default::default()
        };
        assert!(missing_required(&form).is_empty());
    }
}
