/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Screen state for the GPA form and the loop that drives it.
//!
//! [`Form`] owns the only mutable state in the program: the current
//! [`LessonList`], the `show_gpa` flag, the band revealed by the last submit
//! and the theme.  Each input line is parsed into a [`Command`] and applied in
//! full before the next line is read, so every change is atomic with respect
//! to the loop.
//!
//! # Control gating
//!
//! | Control | Enabled when |
//! |---|---|
//! | add | the variant's [`AddGating`] allows it |
//! | delete | more than one row |
//! | submit | the variant's [`SubmitGating`] allows it |
//!
//! A command aimed at a disabled control is refused with a [`FormError`] and
//! the state is left untouched.
//!
//! [`AddGating`]: gpa_engine::engine::AddGating
//! [`SubmitGating`]: gpa_engine::engine::SubmitGating

pub mod command;
pub mod render;

pub use command::Command;

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info, warn};

use gpa_engine::boundary::parse_field;
use gpa_engine::classify::Band;
use gpa_engine::engine::{
    add_lesson, can_add, can_delete, can_submit, delete_lesson, reckon, update_lesson, Variant,
};
use gpa_engine::error::BoundaryError;
use gpa_engine::lesson::LessonList;

use crate::theme::Theme;

// ── Errors ────────────────────────────────────────────────────────────────────

/// Why an input line was not applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("unknown command '{0}' (type 'help' for the list)")]
    UnknownCommand(String),

    #[error("'{command}' needs a row number")]
    MissingRow { command: &'static str },

    #[error("'{0}' is not a row number")]
    InvalidRow(String),

    /// Row numbers here are 1-based, as shown on screen.
    #[error("there is no row {row} (the form has {rows})")]
    NoSuchRow { row: usize, rows: usize },

    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    #[error("cannot add a row until the last one has a grade (0–20] and 1–5 courses")]
    AddDisabled,

    #[error("the last remaining row cannot be removed")]
    DeleteDisabled,

    #[error("nothing to reckon yet: fill in a grade and course units first")]
    SubmitDisabled,
}

// ── Form ──────────────────────────────────────────────────────────────────────

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State may have changed; draw the form again.
    Redraw,
    /// Print the command list.
    Help,
    Quit,
}

/// The active screen.
#[derive(Debug, Clone)]
pub struct Form {
    lessons: LessonList,
    variant: Variant,
    show_gpa: bool,
    band: Option<Band>,
    theme: Theme,
}

impl Form {
    pub fn new(lessons: LessonList, variant: Variant, theme: Theme) -> Self {
        Self {
            lessons,
            variant,
            show_gpa: false,
            band: None,
            theme,
        }
    }

    pub fn lessons(&self) -> &LessonList {
        &self.lessons
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// `true` between a successful submit and the next field edit.
    pub fn show_gpa(&self) -> bool {
        self.show_gpa
    }

    /// Band revealed by the last submit (reckoning variant only).
    pub fn band(&self) -> Option<Band> {
        self.band
    }

    pub fn add_enabled(&self) -> bool {
        can_add(&self.lessons, self.variant.add_gating())
    }

    pub fn delete_enabled(&self) -> bool {
        can_delete(&self.lessons)
    }

    pub fn submit_enabled(&self) -> bool {
        can_submit(&self.lessons, self.variant.submit_gating())
    }

    /// Apply one command.
    ///
    /// # Errors
    /// Returns a [`FormError`] when the command targets a missing row, a
    /// field value is refused at the input boundary, or the control is
    /// disabled.  The form is unchanged in every error case.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, FormError> {
        match command {
            Command::Add => {
                if !self.add_enabled() {
                    return Err(FormError::AddDisabled);
                }
                self.lessons = add_lesson(&self.lessons, self.variant.add_gating());
                debug!(rows = self.lessons.len(), "Added lesson row");
            }
            Command::Delete { index } => {
                self.check_row(index)?;
                if !self.delete_enabled() {
                    return Err(FormError::DeleteDisabled);
                }
                self.lessons = delete_lesson(&self.lessons, index);
                debug!(row = index + 1, rows = self.lessons.len(), "Deleted lesson row");
            }
            Command::Edit { index, field, raw } => {
                self.check_row(index)?;
                let value = parse_field(field, &raw)?;
                self.lessons = update_lesson(&self.lessons, index, value);
                self.show_gpa = false;
                debug!(row = index + 1, %field, raw = %raw, "Edited lesson field");
            }
            Command::Submit => {
                if !self.submit_enabled() {
                    return Err(FormError::SubmitDisabled);
                }
                let result = reckon(&self.lessons, self.variant);
                info!(
                    gpa = %result.gpa,
                    band = ?result.band,
                    rows = self.lessons.len(),
                    "Reckoned GPA"
                );
                self.band = result.band;
                self.show_gpa = true;
            }
            Command::Theme => {
                self.theme = self.theme.toggled();
                debug!(theme = %self.theme, "Theme toggled");
            }
            Command::Show => {}
            Command::Help => return Ok(Outcome::Help),
            Command::Quit => return Ok(Outcome::Quit),
        }
        Ok(Outcome::Redraw)
    }

    fn check_row(&self, index: usize) -> Result<(), FormError> {
        if index < self.lessons.len() {
            Ok(())
        } else {
            Err(FormError::NoSuchRow {
                row: index + 1,
                rows: self.lessons.len(),
            })
        }
    }
}

// ── Input loop ────────────────────────────────────────────────────────────────

/// Draw the form, then read and apply one line at a time until `quit` or end
/// of input.
///
/// Refused commands are reported on `out` and the loop carries on.
///
/// # Errors
/// Only I/O errors on `input` or `out` end the loop early.
pub fn run_session<R: BufRead, W: Write>(form: &mut Form, input: R, mut out: W) -> io::Result<()> {
    writeln!(out, "{}", render::render(form))?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let outcome = line
            .parse::<Command>()
            .and_then(|command| form.apply(command));

        match outcome {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Help) => writeln!(out, "{}", command::HELP)?,
            Ok(Outcome::Redraw) => writeln!(out, "{}", render::render(form))?,
            Err(e) => {
                warn!(input = %line, "Refused: {e}");
                writeln!(out, "! {e}")?;
            }
        }
        write!(out, "> ")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
