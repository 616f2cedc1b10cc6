/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Lesson rows and the ordered list that holds them.
//!
//! ```text
//! raw text ──(boundary)──►  FieldValue  ──(engine::update_lesson)──►  LessonList
//!                                                                       │
//!                                                   compute_gpa / classify ◄┘
//! ```
//!
//! # Ownership model
//! A [`LessonList`] is a plain value owned by the active screen.  Engine
//! operations borrow it and return a new list, so an edit can never touch a
//! row other than the one it names.  The type has no public constructor that
//! can produce an empty list: length ≥ 1 holds for every value in existence.

use std::fmt;
use std::ops::Deref;

use tracing::warn;

// ── Field ─────────────────────────────────────────────────────────────────────

/// One editable column of a lesson row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Grade,
    Courses,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Grade => write!(f, "grade"),
            Field::Courses => write!(f, "courses"),
        }
    }
}

/// A new value for exactly one [`Field`] of a row.
///
/// Produced by [`boundary::parse_field`](crate::boundary::parse_field) from
/// raw text, or built directly by callers that already hold typed values.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Name(String),
    Grade(f64),
    Courses(f64),
}

impl FieldValue {
    /// The column this value belongs to.
    pub fn field(&self) -> Field {
        match self {
            FieldValue::Name(_) => Field::Name,
            FieldValue::Grade(_) => Field::Grade,
            FieldValue::Courses(_) => Field::Courses,
        }
    }
}

// ── Lesson ────────────────────────────────────────────────────────────────────

/// One subject: an optional name, a grade out of 20 and a course-unit weight.
///
/// Numeric fields are `f64` rather than integers so a malformed entry can be
/// carried as NaN and handled by the NaN-safe GPA rules instead of being
/// rejected outright.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lesson {
    /// Free-text label, at most 30 characters after the boundary.
    pub name: String,

    /// Grade in `[0, 20]`.  `0` means "not entered yet".
    pub grade: f64,

    /// Course units in `[1, 5]`.  `0` means "not entered yet".
    pub courses: f64,
}

impl Lesson {
    pub fn new(name: impl Into<String>, grade: f64, courses: f64) -> Self {
        Self {
            name: name.into(),
            grade,
            courses,
        }
    }

    /// `true` iff `grade ∈ (0, 20]` and `courses ∈ [1, 5]`.
    ///
    /// NaN in either field makes the lesson invalid.
    pub fn is_valid(&self) -> bool {
        self.grade > 0.0 && self.grade <= 20.0 && self.courses >= 1.0 && self.courses <= 5.0
    }

    /// `true` for a row nobody has touched: empty name, zero grade and courses.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.grade == 0.0 && self.courses == 0.0
    }

    /// Replace the field named by `value`, leaving the other two untouched.
    pub fn with_field(&self, value: FieldValue) -> Self {
        let mut next = self.clone();
        match value {
            FieldValue::Name(name) => next.name = name,
            FieldValue::Grade(grade) => next.grade = grade,
            FieldValue::Courses(courses) => next.courses = courses,
        }
        next
    }
}

// ── LessonList ────────────────────────────────────────────────────────────────

/// Ordered, never-empty list of lessons.
///
/// Dereferences to `[Lesson]` for read access (`len`, `iter`, `get`, …).
/// All changes go through the functions in [`crate::engine`], which return a
/// new list.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonList {
    lessons: Vec<Lesson>,
}

impl LessonList {
    /// A list holding one default (blank) lesson.
    pub fn new() -> Self {
        Self {
            lessons: vec![Lesson::default()],
        }
    }

    /// Build a list from pre-filled rows.
    ///
    /// An empty `lessons` vector falls back to a single blank row so the
    /// length ≥ 1 invariant holds.
    pub fn from_lessons(lessons: Vec<Lesson>) -> Self {
        if lessons.is_empty() {
            warn!("No lessons supplied, starting with one blank row");
            return Self::new();
        }
        Self { lessons }
    }

    /// The final row.  Always present.
    pub fn last_lesson(&self) -> &Lesson {
        &self.lessons[self.lessons.len() - 1]
    }

    // Crate-internal mutators used by `engine`, which owns the invariants.

    pub(crate) fn push(&mut self, lesson: Lesson) {
        self.lessons.push(lesson);
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Lesson> {
        self.lessons.get_mut(index)
    }

    pub(crate) fn remove(&mut self, index: usize) {
        debug_assert!(self.lessons.len() > 1, "removing the last lesson");
        self.lessons.remove(index);
    }
}

impl Default for LessonList {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for LessonList {
    type Target = [Lesson];

    fn deref(&self) -> &[Lesson] {
        &self.lessons
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
