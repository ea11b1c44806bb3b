//! Field validation helpers
//!
//! Records are validated with `validator` derive rules before they are
//! written. This module holds the custom rules and turns a set of
//! `ValidationErrors` into the flat message list the API reports.

use chrono::{NaiveDate, Utc};
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

/// Message for an event date that is not strictly after today
pub const FUTURE_DATE_MESSAGE: &str = "Date must be in the future";

/// Reject dates on or before today (UTC)
pub fn validate_future_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date <= Utc::now().date_naive() {
        let mut error = ValidationError::new("future_date");
        error.message = Some(Cow::Borrowed(FUTURE_DATE_MESSAGE));
        return Err(error);
    }
    Ok(())
}

/// Treat missing and empty strings alike
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Declaration order of a record's validated fields
///
/// Messages are reported in this order, matching the column order of the
/// table the record is written to.
pub trait FieldOrder {
    const FIELDS: &'static [&'static str];
}

/// Flatten field errors into messages, in `fields` order
///
/// Fields missing from `fields` come last, by name.
pub fn error_messages(errors: &ValidationErrors, fields: &[&str]) -> Vec<String> {
    let mut entries: Vec<_> = errors.field_errors().into_iter().collect();
    entries.sort_by_key(|(name, _)| (field_rank(fields, name), name.to_string()));

    entries
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect()
}

fn field_rank(fields: &[&str], name: &str) -> usize {
    fields
        .iter()
        .position(|f| *f == name)
        .unwrap_or(fields.len())
}
