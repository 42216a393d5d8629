//! Error types for attribute parsing and input coercion.
//!
//! The calculation itself never fails; these errors only arise at the
//! text boundary, when identifiers or field values arrive as strings.

use crate::attribute::RawAttribute;
use thiserror::Error;

/// Errors that can occur while turning caller text into typed inputs.
///
/// # Examples
///
/// ```rust
/// use sectcalc::CalcError;
///
/// let err = CalcError::UnknownAttribute("luck".to_string());
/// println!("{}", err); // "Unknown attribute: luck"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// A raw attribute name matched neither an identifier nor a label.
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A secondary stat name matched neither an identifier nor a label.
    #[error("Unknown stat: {0}")]
    UnknownStat(String),

    /// A race name matched neither an identifier nor a label.
    #[error("Unknown race: {0}")]
    UnknownRace(String),

    /// A text field could not be coerced into a number.
    ///
    /// Contains the attribute being edited and the rejected input.
    #[error("Invalid number for {attribute}: {input:?}")]
    InvalidNumber {
        attribute: RawAttribute,
        input: String,
    },
}
