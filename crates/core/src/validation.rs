//! Input validation for names, titles and funding amounts
//!
//! Every constructor and setter on [`Member`](crate::Member) and
//! [`Project`](crate::Project) runs through these checks before touching
//! state, so a rejected value never leaves an entity half-updated.
//!
//! ## Rules
//!
//! - Names and titles must contain at least one non-whitespace character.
//!   The accepted value is stored as given (no trimming).
//! - Funding must be a finite, non-negative number.

use crate::error::{Error, Result};

/// Validate a member name
pub fn validate_name(name: &str) -> Result<()> {
    if is_blank(name) {
        return Err(Error::invalid_argument("member name must not be empty or blank"));
    }
    Ok(())
}

/// Validate a project title
pub fn validate_title(title: &str) -> Result<()> {
    if is_blank(title) {
        return Err(Error::invalid_argument("project title must not be empty or blank"));
    }
    Ok(())
}

/// Validate a project funding amount
///
/// NaN and infinities are rejected along with negative values; they would
/// otherwise poison every balance they are distributed into.
pub fn validate_funding(funding: f64) -> Result<()> {
    if !funding.is_finite() {
        return Err(Error::invalid_argument(format!(
            "project funding must be a finite number, got {}",
            funding
        )));
    }
    if funding < 0.0 {
        return Err(Error::invalid_argument(format!(
            "project funding must not be negative, got {}",
            funding
        )));
    }
    Ok(())
}

#[inline]
fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
