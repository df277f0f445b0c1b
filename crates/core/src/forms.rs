//! Form schemas for every submission the site accepts.
//!
//! Each form derives [`Validate`]; handlers call [`validate_form`] before
//! touching the store so invalid input never produces a remote call. All
//! fields default to empty so a missing field reports "required" instead of
//! failing deserialization.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidateUrl, ValidationError, ValidationErrors};

use crate::catalog;
use crate::error::{CoreError, FieldErrors};

// ---------------------------------------------------------------------------
// Public forms
// ---------------------------------------------------------------------------

/// Body of `POST /contact`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = "required_email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Body of `POST /proposals`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProposalForm {
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "Contact name is required"))]
    pub contact_name: String,
    #[validate(custom(function = "required_email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    #[validate(custom(function = "known_services"))]
    pub services: Vec<String>,
    #[validate(custom(function = "known_budget_range"))]
    pub budget_range: String,
    #[validate(custom(function = "known_timeline"))]
    pub timeline: String,
    #[validate(length(min = 1, message = "Project description is required"))]
    pub project_description: String,
}

/// Body of `POST /tools/review-links`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ReviewLinkForm {
    #[validate(custom(function = "required_business_name"))]
    pub business_name: String,
    pub location: String,
}

// ---------------------------------------------------------------------------
// Admin forms
// ---------------------------------------------------------------------------

/// Body of `POST/PUT /admin/case-studies`.
///
/// `results` and `tags` arrive exactly as the editor holds them, blank
/// slots included; see [`crate::editor::CaseStudyEditor`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CaseStudyForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Client name is required"))]
    pub client: String,
    #[validate(length(min = 1, message = "Industry is required"))]
    pub industry: String,
    #[validate(length(min = 1, message = "Challenge is required"))]
    pub challenge: String,
    #[validate(length(min = 1, message = "Solution is required"))]
    pub solution: String,
    #[validate(custom(function = "required_url"))]
    pub image_url: String,
    pub results: Vec<String>,
    pub tags: Vec<String>,
}

/// Body of `POST /admin/setup`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct AdminSetupForm {
    #[validate(custom(function = "required_email"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(
        length(min = 1, message = "Please confirm your password"),
        must_match(other = "password", message = "Passwords must match")
    )]
    pub confirm_password: String,
}

/// Body of `POST /admin/users`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct AdminUserForm {
    #[validate(custom(function = "required_email"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginForm {
    #[validate(custom(function = "required_email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

// ---------------------------------------------------------------------------
// Validation entry point
// ---------------------------------------------------------------------------

/// Run a form's schema and flatten any failures into [`CoreError::InvalidFields`].
pub fn validate_form<T: Validate>(form: &T) -> Result<(), CoreError> {
    form.validate()
        .map_err(|errors| CoreError::InvalidFields(field_errors(&errors)))
}

/// Collect per-field messages, falling back to the error code when a rule
/// carries no message.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Custom rules
// ---------------------------------------------------------------------------

fn error_with(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn required_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(error_with("required", "Email is required"));
    }
    if !value.validate_email() {
        return Err(error_with("email", "Invalid email"));
    }
    Ok(())
}

fn required_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(error_with("required", "Image URL is required"));
    }
    if !value.validate_url() {
        return Err(error_with("url", "Must be a valid URL"));
    }
    Ok(())
}

fn required_business_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error_with("required", "Please enter your business name"));
    }
    Ok(())
}

fn known_services(services: &[String]) -> Result<(), ValidationError> {
    if services.is_empty() {
        return Err(error_with("required", "Please select at least one service"));
    }
    if services.iter().any(|s| !catalog::is_known_service(s)) {
        return Err(error_with("unknown_service", "Unknown service selected"));
    }
    Ok(())
}

fn known_budget_range(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(error_with("required", "Please select a budget range"));
    }
    if !catalog::is_known_budget_range(value) {
        return Err(error_with("unknown_budget_range", "Unknown budget range"));
    }
    Ok(())
}

fn known_timeline(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(error_with("required", "Please select a timeline"));
    }
    if !catalog::is_known_timeline(value) {
        return Err(error_with("unknown_timeline", "Unknown timeline"));
    }
    Ok(())
}
