//! Error type for the run-time entry points of `seqkit-core`.
//!
//! Everything structural (missing capabilities, duplicate tags, arity
//! mismatches, unknown record fields) is rejected by the compiler. The
//! variants below only cover values that arrive at run time: field names,
//! field selections and skill sets read from text.

use thiserror::Error;

use crate::field::Field;

/// All errors returned by `seqkit-core`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A field name did not match any [`Field`] variant.
    #[error("unknown field name `{name}`")]
    UnknownField { name: String },

    /// A run-time field selection listed the same field twice.
    #[error("field `{field}` appears more than once in the field selection")]
    DuplicateField { field: Field },

    /// A skill set could not be parsed from its text form.
    #[error("invalid skill set: {reason}")]
    InvalidSkills { reason: String },
}

/// Convenience alias used throughout `seqkit-core`.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = CoreError::UnknownField {
            name: "sequence".into(),
        };
        assert_eq!(err.to_string(), "unknown field name `sequence`");

        let err = CoreError::DuplicateField { field: Field::RefId };
        assert_eq!(
            err.to_string(),
            "field `ref_id` appears more than once in the field selection"
        );
    }
}
