/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Pure arithmetic helpers: weighted totals, the zero-safe average and
//! fixed-point formatting.
//!
//! These are free functions rather than methods so they can be used and tested
//! independently of the list operations in [`super`].

use crate::lesson::Lesson;

/// Running sums over a set of lessons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightedTotals {
    /// `Σ grade · courses`
    pub points: f64,
    /// `Σ courses`
    pub courses: f64,
}

/// Sum grade points and course units across `lessons`.
///
/// NaN fields propagate into the sums; no row is skipped.
pub fn weighted_totals(lessons: &[Lesson]) -> WeightedTotals {
    lessons
        .iter()
        .fold(WeightedTotals::default(), |acc, l| WeightedTotals {
            points: acc.points + l.grade * l.courses,
            courses: acc.courses + l.courses,
        })
}

/// `points / courses`, or `None` when `courses` is zero or NaN.
///
/// A NaN course total counts as "no courses", so the quotient can never be
/// Infinity and a malformed course count collapses to the zero case.
pub fn weighted_average(totals: WeightedTotals) -> Option<f64> {
    if totals.courses == 0.0 || totals.courses.is_nan() {
        None
    } else {
        Some(totals.points / totals.courses)
    }
}

/// Format `value` with exactly two decimals.
///
/// A value exactly halfway between two hundredths rounds away from zero
/// (`12.125` → `12.13`), where plain `{:.2}` would round half to even.
/// Negative zero prints as `0.00`.  NaN prints as `NaN`.
pub fn to_fixed_2(value: f64) -> String {
    // -0.0 == 0.0, so this folds the sign away
    let value = if value == 0.0 { 0.0 } else { value };
    if is_hundredths_tie(value) {
        let away = (value.abs() * 100.0).ceil().copysign(value) / 100.0;
        return format!("{away:.2}");
    }
    format!("{value:.2}")
}

/// `true` iff `value` lies exactly halfway between two hundredths.
///
/// `(2k + 1) / 200` is representable in binary only when it is an odd
/// multiple of 1/8, and scaling by 8 is exact, so the test is exact too.
fn is_hundredths_tie(value: f64) -> bool {
    let eighths = value * 8.0;
    eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0
}

// ── Tests ─────────────────────────────────────────────────────────────────────
