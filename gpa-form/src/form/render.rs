/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Text rendering of a [`Form`].

use std::fmt;

use gpa_engine::engine::compute_gpa;

use super::Form;

const TITLE: &str = "The Scholarly Reckoning";
const SUBTITLE: &str = "(Lesson name is optional, mortal)";

/// Draw the whole screen as text.
///
/// The GPA line is recomputed from the current rows every time it is shown;
/// the band under it is the one revealed by the last submit.
pub fn render(form: &Form) -> String {
    Screen(form).to_string()
}

/// Display adapter that writes one frame of `form`.
struct Screen<'a>(&'a Form);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.0;
        writeln!(f, "{TITLE}  [{}]", form.theme())?;
        writeln!(f, "{SUBTITLE}")?;
        writeln!(f)?;
        writeln!(
            f,
            "{:>3}  {:<30}  {:>13}  {:>15}",
            "#", "Subject of Dread", "Effort (0-20)", "Units of Sanity"
        )?;

        let delete = control("Banish", form.delete_enabled());
        for (i, lesson) in form.lessons().iter().enumerate() {
            let name = if lesson.name.is_empty() {
                "-"
            } else {
                lesson.name.as_str()
            };
            writeln!(
                f,
                "{:>3}  {:<30}  {:>13}  {:>15}  {delete}",
                i + 1,
                name,
                cell(lesson.grade),
                cell(lesson.courses),
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "{}  {}  [{}]",
            control("Summon Another", form.add_enabled()),
            control("Reveal Fate", form.submit_enabled()),
            form.theme().toggle_label(),
        )?;

        if form.show_gpa() {
            writeln!(f)?;
            writeln!(f, "Calculated Doom: {}", compute_gpa(form.lessons()))?;
            if let Some(band) = form.band() {
                writeln!(f, "{band}")?;
            }
        }
        Ok(())
    }
}

/// `[label]` when enabled, `[label: disabled]` otherwise.
fn control(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{label}]")
    } else {
        format!("[{label}: disabled]")
    }
}

/// Numeric cell: blank for an unset (zero) value.
fn cell(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Command;
    use crate::theme::Theme;
    use gpa_engine::classify::Band;
    use gpa_engine::engine::Variant;
    use gpa_engine::lesson::{Field, Lesson, LessonList};

    #[test]
    fn blank_form_shows_disabled_add_and_delete() {
        let form = Form::new(LessonList::new(), Variant::Reckoning, Theme::Light);
        let out = render(&form);
        assert!(out.contains("[Summon Another: disabled]"));
        assert!(out.contains("[Banish: disabled]"));
        assert!(out.contains("[Reveal Fate]"));
        assert!(out.contains("[Switch to Dark Mode]"));
        assert!(!out.contains("Calculated Doom"));
    }

    #[test]
    fn zero_fields_render_blank_and_values_render_plainly() {
        let lessons = LessonList::from_lessons(vec![
            Lesson::new("Optics", 17.25, 3.0),
            Lesson::default(),
        ]);
        let form = Form::new(lessons, Variant::Plain, Theme::Dark);
        let out = render(&form);

        assert!(out.contains("Optics"));
        assert!(out.contains("17.25"));
        assert!(out.contains("[Banish]"));
        assert!(out.contains("[Switch to Light Mode]"));

        let blank_row = out
            .lines()
            .find(|l| l.trim_start().starts_with("2 "))
            .unwrap();
        assert!(!blank_row.contains('0'), "row: {blank_row:?}");
    }

    #[test]
    fn submitted_form_shows_gpa_and_band() {
        let mut form = Form::new(LessonList::new(), Variant::Reckoning, Theme::Light);
        for (field, raw) in [(Field::Grade, "8"), (Field::Courses, "2")] {
            form.apply(Command::Edit {
                index: 0,
                field,
                raw: raw.into(),
            })
            .unwrap();
        }
        form.apply(Command::Submit).unwrap();

        let out = render(&form);
        assert!(out.contains("Calculated Doom: 8.00"));
        assert!(out.contains(Band::Struggling.message()));
    }

    #[test]
    fn gpa_line_follows_rows_after_delete() {
        let lessons = LessonList::from_lessons(vec![
            Lesson::new("", 20.0, 1.0),
            Lesson::new("", 10.0, 1.0),
        ]);
        let mut form = Form::new(lessons, Variant::Reckoning, Theme::Light);
        form.apply(Command::Submit).unwrap();
        assert!(render(&form).contains("Calculated Doom: 15.00"));

        form.apply(Command::Delete { index: 1 }).unwrap();
        assert!(render(&form).contains("Calculated Doom: 20.00"));
    }

    #[test]
    fn frame_layout_is_stable() {
        let lessons = LessonList::from_lessons(vec![Lesson::new("Optics", 12.25, 4.0)]);
        let form = Form::new(lessons, Variant::Plain, Theme::Light);
        let out = render(&form);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "The Scholarly Reckoning  [light]");
        assert_eq!(lines[1], SUBTITLE);
        assert_eq!(lines[2], "");
        assert_eq!(
            lines[4],
            format!(
                "{:>3}  {:<30}  {:>13}  {:>15}  [Banish: disabled]",
                1, "Optics", "12.25", "4"
            )
        );
        assert!(out.ends_with('\n'));
    }
}
