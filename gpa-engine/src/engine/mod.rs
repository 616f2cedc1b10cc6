/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! GPA engine operations over a [`LessonList`].
//!
//! Every operation borrows the current list and returns a new value; none of
//! them fail.  A refused action (adding behind an invalid row, deleting the
//! only row, editing a row that does not exist) returns the list unchanged.
//!
//! # Variants
//!
//! The form ships in two variants whose gating rules must not be mixed:
//!
//! | Variant | Add | Submit | Band message |
//! |---|---|---|---|
//! | [`Variant::Reckoning`] | only behind a valid last row | calculable, or the untouched blank sheet | yes |
//! | [`Variant::Plain`] | always | calculable | no |
//!
//! # Example
//! ```rust
//! use gpa_engine::engine::{add_lesson, compute_gpa, update_lesson, AddGating};
//! use gpa_engine::lesson::{FieldValue, LessonList};
//!
//! let list = LessonList::new();
//! let list = update_lesson(&list, 0, FieldValue::Grade(20.0));
//! let list = update_lesson(&list, 0, FieldValue::Courses(5.0));
//! let list = add_lesson(&list, AddGating::RequireValidLast);
//! let list = update_lesson(&list, 1, FieldValue::Grade(10.0));
//! let list = update_lesson(&list, 1, FieldValue::Courses(5.0));
//!
//! assert_eq!(compute_gpa(&list).as_str(), "15.00");
//! ```

pub mod math;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::classify::{classify, Band};
use crate::error::UnknownVariant;
use crate::lesson::{FieldValue, Lesson, LessonList};
use math::{to_fixed_2, weighted_average, weighted_totals};

// ── Gating rules ──────────────────────────────────────────────────────────────

/// When a new row may be appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddGating {
    /// Only if the current last row is valid.
    RequireValidLast,
    /// Always.
    Unconditional,
}

/// When the submit control is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitGating {
    /// [`can_calculate`] holds, or the sheet is still the untouched blank
    /// row (submitting it reveals the "blank scroll" band).
    CalculableOrPristine,
    /// [`can_calculate`] holds.
    Calculable,
}

/// Which flavour of the form is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Gated add, lenient submit, band message shown.
    #[default]
    Reckoning,
    /// Ungated add, strict submit, GPA only.
    Plain,
}

impl Variant {
    pub fn add_gating(self) -> AddGating {
        match self {
            Variant::Reckoning => AddGating::RequireValidLast,
            Variant::Plain => AddGating::Unconditional,
        }
    }

    pub fn submit_gating(self) -> SubmitGating {
        match self {
            Variant::Reckoning => SubmitGating::CalculableOrPristine,
            Variant::Plain => SubmitGating::Calculable,
        }
    }

    /// Whether a band message accompanies the GPA.
    pub fn classifies(self) -> bool {
        matches!(self, Variant::Reckoning)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Reckoning => write!(f, "reckoning"),
            Variant::Plain => write!(f, "plain"),
        }
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reckoning" => Ok(Variant::Reckoning),
            "plain" => Ok(Variant::Plain),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

// ── Gpa ───────────────────────────────────────────────────────────────────────

/// A computed GPA, held as its 2-decimal text.
///
/// The text is the canonical value: [`Gpa::score`] re-reads it, so a
/// classification always agrees with what is displayed (9.999 shows as
/// `10.00` and classifies as 10).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gpa {
    text: String,
}

impl Gpa {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The displayed value read back as a number.  `NaN` for `"NaN"`.
    pub fn score(&self) -> f64 {
        self.text.parse().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ── List operations ───────────────────────────────────────────────────────────

/// `true` iff the final row of `list` is valid.
pub fn is_last_lesson_valid(list: &LessonList) -> bool {
    list.last_lesson().is_valid()
}

/// Whether [`add_lesson`] would append under `gating`.
pub fn can_add(list: &LessonList, gating: AddGating) -> bool {
    match gating {
        AddGating::RequireValidLast => is_last_lesson_valid(list),
        AddGating::Unconditional => true,
    }
}

/// Append a blank lesson, subject to `gating`.
pub fn add_lesson(list: &LessonList, gating: AddGating) -> LessonList {
    if !can_add(list, gating) {
        debug!(rows = list.len(), "Add refused: last lesson is not valid");
        return list.clone();
    }
    let mut next = list.clone();
    next.push(Lesson::default());
    next
}

/// Replace one field of the row at `index`.
///
/// Other rows and other fields are untouched.  An out-of-range `index`
/// returns the list unchanged.
pub fn update_lesson(list: &LessonList, index: usize, value: FieldValue) -> LessonList {
    let mut next = list.clone();
    match next.get_mut(index) {
        Some(row) => *row = row.with_field(value),
        None => debug!(
            index,
            field = %value.field(),
            rows = list.len(),
            "Update ignored: no such row"
        ),
    }
    next
}

/// Whether [`delete_lesson`] would remove a row.
pub fn can_delete(list: &LessonList) -> bool {
    list.len() > 1
}

/// Remove the row at `index`, unless it is the only row.
///
/// An out-of-range `index` returns the list unchanged.
pub fn delete_lesson(list: &LessonList, index: usize) -> LessonList {
    if !can_delete(list) {
        debug!("Delete refused: the last remaining lesson cannot be removed");
        return list.clone();
    }
    if index >= list.len() {
        debug!(index, rows = list.len(), "Delete ignored: no such row");
        return list.clone();
    }
    let mut next = list.clone();
    next.remove(index);
    next
}

// ── Calculation ───────────────────────────────────────────────────────────────

/// Courses-weighted mean grade, formatted to two decimals.
///
/// `"0.00"` when the course total is zero (or NaN), never Infinity.  A NaN
/// grade on a weighted row gives `"NaN"`.
pub fn compute_gpa(list: &LessonList) -> Gpa {
    let totals = weighted_totals(list);
    let text = match weighted_average(totals) {
        Some(avg) => to_fixed_2(avg),
        None => to_fixed_2(0.0),
    };
    debug!(
        points = totals.points,
        courses = totals.courses,
        gpa = %text,
        "Computed GPA"
    );
    Gpa { text }
}

/// `true` iff at least one row is valid and carries a course weight.
pub fn can_calculate(list: &LessonList) -> bool {
    list.iter().any(|l| l.courses > 0.0 && l.is_valid())
}

/// `true` iff at least one row carries a course weight.
pub fn has_significant_input(list: &LessonList) -> bool {
    list.iter().any(|l| l.courses > 0.0)
}

/// `true` for the untouched starting sheet: a single blank row.
pub fn is_pristine(list: &LessonList) -> bool {
    list.len() == 1 && list[0].is_blank()
}

/// Whether the submit control is enabled under `gating`.
pub fn can_submit(list: &LessonList, gating: SubmitGating) -> bool {
    match gating {
        SubmitGating::CalculableOrPristine => can_calculate(list) || is_pristine(list),
        SubmitGating::Calculable => can_calculate(list),
    }
}

/// Result of submitting the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Reckoning {
    pub gpa: Gpa,
    /// `None` for variants that do not classify.
    pub band: Option<Band>,
}

/// Compute the GPA and, if the variant classifies, its band.
///
/// Does not check [`can_submit`]; callers gate the control themselves.
pub fn reckon(list: &LessonList, variant: Variant) -> Reckoning {
    let gpa = compute_gpa(list);
    let band = variant
        .classifies()
        .then(|| classify(gpa.score(), has_significant_input(list)));
    Reckoning { gpa, band }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
