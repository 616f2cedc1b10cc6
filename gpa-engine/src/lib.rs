/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Weighted grade-point average engine.
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── lesson      – Lesson rows and the never-empty LessonList
//! ├── boundary    – input constraints applied before a value reaches a row
//! ├── engine/     – add / update / delete / compute / gating rules
//! │   └── math    – weighted average and 2-decimal formatting
//! ├── classify    – GPA → descriptive band
//! └── error       – structured boundary errors
//! ```
//!
//! Every engine operation is a pure function over a [`LessonList`] value:
//! edits return a new list and never fail.  The only fallible step is the
//! [`boundary`] parse that turns raw field text into a [`FieldValue`].
//!
//! [`LessonList`]: lesson::LessonList
//! [`FieldValue`]: lesson::FieldValue

pub mod boundary;
pub mod classify;
pub mod engine;
pub mod error;
pub mod lesson;
