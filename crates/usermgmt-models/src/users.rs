//! User entity and request DTOs.
//!
//! - [`User`] - the stored entity; `id` is server-assigned and immutable
//! - [`UserPayload`] - body of create and update requests
//!
//! Validation lives on [`UserPayload`]. Rules are declared with the
//! `validator` derive and [`UserPayload::violations`] flattens the result
//! into an ordered list of [`FieldError`]s: name rules first, then email,
//! and within a field the presence rule before the format rules. Rules on a
//! field do not short-circuit, so an empty email breaks both of its rules.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use usermgmt_core::errors::{AppError, FieldError};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

pub const NAME_MAX_LENGTH: usize = 100;

const REQUIRED: &str = "required";

/// Field names in reporting order, paired with their client-facing names.
const FIELDS: [(&str, &str); 2] = [("name", "Name"), ("email", "Email")];

/// A user account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: Uuid, payload: UserPayload) -> Self {
        Self {
            id,
            name: payload.name,
            email: payload.email,
        }
    }

    /// Overwrites the mutable fields, keeping `id`.
    pub fn apply(&mut self, payload: UserPayload) {
        self.name = payload.name;
        self.email = payload.email;
    }
}

/// Body of `POST /api/users` and `PUT /api/users/{id}`.
///
/// Missing fields default to empty strings so they are reported as
/// validation violations rather than parse failures. A client-supplied `id`
/// is ignored.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Validate, ToSchema)]
#[serde(default)]
pub struct UserPayload {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(
        custom(function = "validate_email_present"),
        email(code = "email", message = "Invalid email format.")
    )]
    pub email: String,
}

impl UserPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Every rule violation, ordered by field. Empty means valid.
    pub fn violations(&self) -> Vec<FieldError> {
        let Err(report) = self.validate() else {
            return Vec::new();
        };

        let mut violations: Vec<((usize, usize), FieldError)> = report
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                let field = field.to_string();
                let (rank, display) = field_rank(&field);
                errors.iter().map(move |error| {
                    let rule_rank = usize::from(error.code != REQUIRED);
                    let message = error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{display} is invalid."));
                    ((rank, rule_rank), FieldError::new(display.clone(), message))
                })
            })
            .collect();

        violations.sort_by_key(|(rank, _)| *rank);
        violations.into_iter().map(|(_, error)| error).collect()
    }

    /// Fails with [`AppError::ValidationFailed`] carrying every violation.
    pub fn ensure_valid(&self) -> Result<(), AppError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationFailed(violations))
        }
    }
}

fn field_rank(field: &str) -> (usize, String) {
    FIELDS
        .iter()
        .enumerate()
        .find(|(_, (name, _))| *name == field)
        .map(|(rank, (_, display))| (rank, display.to_string()))
        .unwrap_or_else(|| (FIELDS.len(), field.to_string()))
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(violation(REQUIRED, "Name is required."));
    }
    if name.chars().count() > NAME_MAX_LENGTH {
        return Err(violation("length", "Name cannot exceed 100 characters."));
    }
    Ok(())
}

fn validate_email_present(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(violation(REQUIRED, "Email is required."));
    }
    Ok(())
}
