use crate::{
    error::{AssetError, Result},
    models::{ContactAck, ContactSubmission, FieldError},
};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ()\-.]{7,20}$").expect("phone pattern is valid"));

const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;
const MAX_MESSAGE_LEN: usize = 5000;

pub fn validate(submission: &ContactSubmission) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let mut fail = |field: &str, message: &str| {
        errors.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        })
    };

    if submission.name.trim().chars().count() < MIN_NAME_LEN {
        fail("name", "Name must be at least 2 characters");
    }
    if !EMAIL_RE.is_match(submission.email.trim()) {
        fail("email", "Please enter a valid email address");
    }
    if let Some(phone) = submission.phone.as_deref().map(str::trim) {
        if !phone.is_empty() && !PHONE_RE.is_match(phone) {
            fail("phone", "Please enter a valid phone number");
        }
    }
    if submission.service.trim().is_empty() {
        fail("service", "Please select a service");
    }
    if submission.budget.trim().is_empty() {
        fail("budget", "Please select a budget range");
    }
    let message_len = submission.message.trim().chars().count();
    if message_len < MIN_MESSAGE_LEN {
        fail("message", "Message must be at least 10 characters");
    } else if message_len > MAX_MESSAGE_LEN {
        fail("message", "Message must be at most 5000 characters");
    }
    if !submission.consent {
        fail("consent", "You must agree to be contacted");
    }

    errors
}

/// Validates and "sends" a submission. Nothing is delivered; the enquiry is
/// logged under a reference id that is returned to the visitor.
pub fn submit(submission: &ContactSubmission) -> Result<ContactAck> {
    let errors = validate(submission);
    if !errors.is_empty() {
        return Err(AssetError::ValidationError(errors));
    }

    let reference = Uuid::new_v4().to_string();
    log::info!(
        "Contact enquiry {} received: service='{}', budget='{}', company={}",
        reference,
        submission.service.trim(),
        submission.budget.trim(),
        submission.company.as_deref().unwrap_or("-")
    );

    Ok(ContactAck {
        success: true,
        message: "Thank you for your message! I'll get back to you within 24 hours.".to_string(),
        reference,
    })
}
