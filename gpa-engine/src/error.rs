/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error types for the GPA engine.
//!
//! The engine arithmetic itself never fails.  Errors only arise at the input
//! boundary, where raw field text is checked against the same min / max /
//! step constraints the form declares for each column:
//!
//! * [`BoundaryError`]: a field value was refused and the row left unchanged.
//! * [`UnknownVariant`]: a variant name (CLI flag or sheet) was not recognised.

use thiserror::Error;

use crate::lesson::Field;

/// Why a raw field value was refused at the input boundary.
///
/// Every variant carries the offending value and the constraint it broke so
/// the caller can report it without further parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundaryError {
    /// A finite number fell outside the column's `[min, max]` range.
    #[error("{field} {value} is out of range (allowed {min}–{max})")]
    OutOfRange {
        field: Field,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A number inside the range that is not a multiple of the column step
    /// (counted from `min`).
    #[error("{field} {value} is not a multiple of {step}")]
    OffStep { field: Field, value: f64, step: f64 },
}

/// A variant name that is neither `reckoning` nor `plain`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant: '{0}' (valid: reckoning, plain)")]
pub struct UnknownVariant(pub String);

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_field_and_bounds() {
        let err = BoundaryError::OutOfRange {
            field: Field::Grade,
            value: 21.0,
            min: 0.0,
            max: 20.0,
        };
        assert_eq!(err.to_string(), "grade 21 is out of range (allowed 0–20)");
    }

    #[test]
    fn off_step_message_names_step() {
        let err = BoundaryError::OffStep {
            field: Field::Grade,
            value: 12.1,
            step: 0.25,
        };
        assert_eq!(err.to_string(), "grade 12.1 is not a multiple of 0.25");
    }

    #[test]
    fn unknown_variant_lists_valid_names() {
        let msg = UnknownVariant("fancy".into()).to_string();
        assert!(msg.contains("'fancy'"));
        assert!(msg.contains("reckoning"));
        assert!(msg.contains("plain"));
    }
}
