/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! One line of input → one [`Command`].
//!
//! Rows are numbered from 1 on screen; [`Command`] carries them already
//! converted to 0-based indices.

use std::str::FromStr;

use gpa_engine::lesson::Field;

use super::FormError;

/// A single UI event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a blank row.
    Add,
    /// Remove a row.
    Delete { index: usize },
    /// Set one field of a row from raw text (empty text clears it).
    Edit {
        index: usize,
        field: Field,
        raw: String,
    },
    /// Compute and reveal the GPA.
    Submit,
    /// Flip light / dark.
    Theme,
    /// Redraw without changing anything.
    Show,
    Help,
    Quit,
}

/// Usage text printed by `help`.
pub const HELP: &str = "\
Commands (rows are numbered from 1):
  add                      add a row
  delete <row>             remove a row
  name <row> [text]        set the subject name (empty clears it)
  grade <row> [0-20]       set the grade, in steps of 0.25
  courses <row> [1-5]      set the course units
  submit                   reveal the GPA
  theme                    switch light / dark
  show                     redraw the form
  help                     this text
  quit                     leave";

impl FromStr for Command {
    type Err = FormError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim_start()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "add" => Ok(Command::Add),
            "delete" | "del" => {
                let (index, _) = parse_row("delete", rest)?;
                Ok(Command::Delete { index })
            }
            "name" => edit("name", Field::Name, rest),
            "grade" => edit("grade", Field::Grade, rest),
            "courses" => edit("courses", Field::Courses, rest),
            "submit" => Ok(Command::Submit),
            "theme" => Ok(Command::Theme),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(FormError::UnknownCommand(word.to_string())),
        }
    }
}

fn edit(command: &'static str, field: Field, rest: &str) -> Result<Command, FormError> {
    let (index, raw) = parse_row(command, rest)?;
    Ok(Command::Edit {
        index,
        field,
        raw: raw.to_string(),
    })
}

/// Split off a leading 1-based row number; return its 0-based index and the
/// remaining text.
fn parse_row<'a>(command: &'static str, rest: &'a str) -> Result<(usize, &'a str), FormError> {
    let (token, tail) = match rest.split_once(char::is_whitespace) {
        Some((t, tail)) => (t, tail.trim_start()),
        None => (rest, ""),
    };
    if token.is_empty() {
        return Err(FormError::MissingRow { command });
    }
    match token.parse::<usize>() {
        Ok(row) if row >= 1 => Ok((row - 1, tail)),
        _ => Err(FormError::InvalidRow(token.to_string())),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
