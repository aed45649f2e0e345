//! Parameter validation: missing required names and unexpected names.

use super::params::CallParameters;
use crate::{Error, ErrorContext, Result};

/// Result of checking one call's parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Human-readable message; missing names are always reported first.
    pub fn message(&self) -> Option<String> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid {
                missing,
                unexpected,
            } => Some(describe(missing, unexpected)),
        }
    }

    pub fn into_result(self) -> Result<()> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid {
                missing,
                unexpected,
            } => {
                let message = describe(&missing, &unexpected);
                let offending: Vec<String> = missing.into_iter().chain(unexpected).collect();
                Err(Error::validation_with_context(
                    message,
                    ErrorContext::new()
                        .with_field_path(offending.join(", "))
                        .with_source("parameter_validator"),
                ))
            }
        }
    }
}

fn describe(missing: &[String], unexpected: &[String]) -> String {
    let mut parts = Vec::with_capacity(2);
    if !missing.is_empty() {
        parts.push(format!("Missing required parameters: {}", missing.join(", ")));
    }
    if !unexpected.is_empty() {
        parts.push(format!("Found invalid parameters: {}", unexpected.join(", ")));
    }
    parts.join("; ")
}

/// Check `actual` against the required and accepted name sets.
///
/// An absent parameter object is treated as empty, so calls made with no
/// arguments at all still report their missing names.
pub fn validate<'a, R, A>(actual: Option<&CallParameters>, required: R, accepted: A) -> ValidationOutcome
where
    R: IntoIterator<Item = &'a str>,
    A: IntoIterator<Item = &'a str>,
{
    let missing: Vec<String> = required
        .into_iter()
        .filter(|name| !actual.is_some_and(|params| params.contains(name)))
        .map(str::to_string)
        .collect();

    let accepted: Vec<&str> = accepted.into_iter().collect();
    let unexpected: Vec<String> = actual
        .map(|params| {
            params
                .present_names()
                .filter(|name| !accepted.iter().any(|a| a == name))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if missing.is_empty() && unexpected.is_empty() {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::Invalid {
            missing,
            unexpected,
        }
    }
}
