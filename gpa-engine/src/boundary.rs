/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Input constraints applied before a value reaches a lesson row.
//!
//! Out-of-range entries are stopped here rather than rejected later by the
//! engine.  Each column declares the same limits the form shows:
//!
//! | Column | Limit |
//! |---|---|
//! | name | at most 30 characters (longer text is truncated) |
//! | grade | min 0, max 20, step 0.25 |
//! | courses | min 1, max 5, step 1 |
//!
//! Numeric text is read the way a browser number field reads it: surrounding
//! whitespace is ignored, empty text means `0` (the field was cleared), and
//! text that is not a finite number becomes NaN.  Neither `0` nor NaN is refused;
//! the engine's NaN-safe rules deal with them.

use crate::error::BoundaryError;
use crate::lesson::{Field, FieldValue};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Maximum length of a lesson name, in characters.
pub const NAME_MAX_CHARS: usize = 30;

/// Numeric limits of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericConstraint {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

pub const GRADE_CONSTRAINT: NumericConstraint = NumericConstraint {
    min: 0.0,
    max: 20.0,
    step: 0.25,
};

pub const COURSES_CONSTRAINT: NumericConstraint = NumericConstraint {
    min: 1.0,
    max: 5.0,
    step: 1.0,
};

impl NumericConstraint {
    /// Check `value` against this constraint.
    ///
    /// `0` (cleared) and NaN (malformed) always pass.
    pub fn check(&self, field: Field, value: f64) -> Result<f64, BoundaryError> {
        if value == 0.0 || value.is_nan() {
            return Ok(value);
        }
        if value < self.min || value > self.max {
            return Err(BoundaryError::OutOfRange {
                field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        if ((value - self.min) / self.step).fract() != 0.0 {
            return Err(BoundaryError::OffStep {
                field,
                value,
                step: self.step,
            });
        }
        Ok(value)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read numeric field text: trimmed, empty → `0`, unparseable → NaN.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    // `inf` / `infinity` are not numbers to a number field
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(f64::NAN)
}

/// Truncate `raw` to at most [`NAME_MAX_CHARS`] characters.
pub fn clamp_name(raw: &str) -> String {
    raw.chars().take(NAME_MAX_CHARS).collect()
}

/// Turn raw text for `field` into a [`FieldValue`], enforcing the column
/// limits.
///
/// # Errors
/// Returns a [`BoundaryError`] when a numeric value is finite but outside
/// the column range or off its step.  Names never fail; they are truncated.
pub fn parse_field(field: Field, raw: &str) -> Result<FieldValue, BoundaryError> {
    match field {
        Field::Name => Ok(FieldValue::Name(clamp_name(raw))),
        Field::Grade => check_value(FieldValue::Grade(parse_number(raw))),
        Field::Courses => check_value(FieldValue::Courses(parse_number(raw))),
    }
}

/// Enforce the column limits on an already-typed value.
///
/// Used for values that never went through text, such as rows read from a
/// YAML sheet.
pub fn check_value(value: FieldValue) -> Result<FieldValue, BoundaryError> {
    match value {
        FieldValue::Name(name) => Ok(FieldValue::Name(clamp_name(&name))),
        FieldValue::Grade(g) => GRADE_CONSTRAINT
            .check(Field::Grade, g)
            .map(FieldValue::Grade),
        FieldValue::Courses(c) => COURSES_CONSTRAINT
            .check(Field::Courses, c)
            .map(FieldValue::Courses),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
