//! Lesson sheet loading.
//!
//! A sheet pre-fills the form and picks the variant and starting theme.
//! Every field is optional.
//!
//! The expected YAML structure is:
//! ```yaml
//! variant: reckoning        # or plain
//! theme: dark               # or light
//! lessons:
//!   - name: "Algebra"
//!     grade: 18.5
//!     courses: 3
//!   - name: "History"
//!     grade: 12
//!     courses: 2
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use gpa_engine::boundary::check_value;
use gpa_engine::engine::Variant;
use gpa_engine::lesson::{FieldValue, Lesson, LessonList};

use crate::theme::Theme;

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
///
/// This is kept private – callers work with [`SheetConfigManager`] instead.
#[derive(Debug, Deserialize)]
struct SheetFile {
    #[serde(default)]
    variant: Variant,
    theme: Option<Theme>,
    #[serde(default)]
    lessons: Vec<LessonEntry>,
}

/// Per-lesson fields as they appear in the YAML file.
///
/// Missing values fall back to the blank-row defaults.
#[derive(Debug, Deserialize)]
struct LessonEntry {
    #[serde(default)]
    name: String,
    #[serde(default)]
    grade: f64,
    #[serde(default)]
    courses: f64,
}

impl LessonEntry {
    /// Push every field through the input boundary, exactly as if it had been
    /// typed into the form.
    fn into_lesson(self) -> Result<Lesson> {
        let mut lesson = Lesson::default();
        for value in [
            FieldValue::Name(self.name),
            FieldValue::Grade(self.grade),
            FieldValue::Courses(self.courses),
        ] {
            lesson = lesson.with_field(check_value(value)?);
        }
        Ok(lesson)
    }
}

// ── SheetConfigManager ────────────────────────────────────────────────────────

/// Loads and holds the starting state described by a YAML sheet.
#[derive(Debug, Default)]
pub struct SheetConfigManager {
    variant: Variant,
    theme: Theme,
    lessons: Vec<Lesson>,

    /// Set to `true` after a successful [`load_from_file`](Self::load_from_file).
    loaded: bool,
}

impl SheetConfigManager {
    /// Creates a manager holding the defaults: reckoning variant, light theme,
    /// one blank row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `path` and replaces the held state.
    ///
    /// * A sheet with no lessons yields one blank row.
    /// * Calling this method a second time replaces everything previously
    ///   loaded.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, the YAML is structurally
    /// invalid, or a lesson breaks the input limits (the message names the
    /// 1-based lesson number).
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        info!("Loading lesson sheet from: {}", path.display());

        // Reset state before (re-)loading
        *self = Self::default();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open lesson sheet: {}", path.display()))?;

        let file: SheetFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?;

        let mut lessons = Vec::with_capacity(file.lessons.len());
        for (i, entry) in file.lessons.into_iter().enumerate() {
            let lesson = entry
                .into_lesson()
                .with_context(|| format!("Lesson #{} in {}", i + 1, path.display()))?;
            debug!(
                "  Lesson #{}: {:?} | grade {} | courses {}",
                i + 1,
                lesson.name,
                lesson.grade,
                lesson.courses,
            );
            lessons.push(lesson);
        }

        if lessons.is_empty() {
            warn!("No lessons found in sheet, starting with one blank row");
        }

        self.variant = file.variant;
        self.theme = file.theme.unwrap_or_default();
        self.lessons = lessons;
        self.loaded = true;

        info!(
            variant = %self.variant,
            theme = %self.theme,
            lessons = self.lessons.len(),
            "Successfully loaded lesson sheet"
        );

        Ok(())
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The starting rows, never empty.
    pub fn lessons(&self) -> LessonList {
        LessonList::from_lessons(self.lessons.clone())
    }

    /// Returns `true` after a successful call to [`load_from_file`](Self::load_from_file).
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper: write a YAML string to a temp file and return it.
    fn yaml_tempfile(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn defaults_without_a_sheet() {
        let mgr = SheetConfigManager::new();
        assert!(!mgr.is_loaded());
        assert_eq!(mgr.variant(), Variant::Reckoning);
        assert_eq!(mgr.theme(), Theme::Light);
        assert_eq!(mgr.lessons(), LessonList::new());
    }

    #[test]
    fn load_full_sheet() {
        let yaml = r#"
variant: plain
theme: dark
lessons:
  - name: "Algebra"
    grade: 18.5
    courses: 3
  - name: "History"
    grade: 12
    courses: 2
"#;
        let f = yaml_tempfile(yaml);
        let mut mgr = SheetConfigManager::new();
        mgr.load_from_file(f.path()).unwrap();

        assert!(mgr.is_loaded());
        assert_eq!(mgr.variant(), Variant::Plain);
        assert_eq!(mgr.theme(), Theme::Dark);

        let lessons = mgr.lessons();
        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0], Lesson::new("Algebra", 18.5, 3.0));
        assert_eq!(lessons[1], Lesson::new("History", 12.0, 2.0));
    }

    #[test]
    fn optional_fields_use_defaults_when_absent() {
        let yaml = r#"
lessons:
  - grade: 14
"#;
        let f = yaml_tempfile(yaml);
        let mut mgr = SheetConfigManager::new();
        mgr.load_from_file(f.path()).unwrap();

        assert_eq!(mgr.variant(), Variant::Reckoning);
        assert_eq!(mgr.theme(), Theme::Light);
        assert_eq!(mgr.lessons()[0], Lesson::new("", 14.0, 0.0));
    }

    #[test]
    fn empty_lessons_section_yields_one_blank_row() {
        let f = yaml_tempfile("lessons: []\n");
        let mut mgr = SheetConfigManager::new();
        mgr.load_from_file(f.path()).unwrap();

        assert!(mgr.is_loaded());
        assert_eq!(mgr.lessons(), LessonList::new());
    }

    #[test]
    fn long_names_are_truncated_on_load() {
        let yaml = format!("lessons:\n  - name: \"{}\"\n", "a".repeat(50));
        let f = yaml_tempfile(&yaml);
        let mut mgr = SheetConfigManager::new();
        mgr.load_from_file(f.path()).unwrap();

        assert_eq!(mgr.lessons()[0].name.chars().count(), 30);
    }

    #[test]
    fn out_of_range_grade_is_a_load_error_naming_the_lesson() {
        let yaml = r#"
lessons:
  - grade: 12
    courses: 1
  - grade: 25
    courses: 1
"#;
        let f = yaml_tempfile(yaml);
        let mut mgr = SheetConfigManager::new();
        let err = mgr.load_from_file(f.path()).unwrap_err();

        assert!(format!("{err:#}").contains("Lesson #2"), "got: {err:#}");
        assert!(!mgr.is_loaded());
    }

    #[test]
    fn unknown_variant_is_a_parse_error() {
        let f = yaml_tempfile("variant: fancy\n");
        let mut mgr = SheetConfigManager::new();
        assert!(mgr.load_from_file(f.path()).is_err());
    }

    #[test]
    fn missing_file_returns_error() {
        let mut mgr = SheetConfigManager::new();
        let result = mgr.load_from_file(Path::new("/nonexistent/path/sheet.yaml"));
        assert!(result.is_err());
        assert!(!mgr.is_loaded());
    }

    #[test]
    fn malformed_yaml_returns_error() {
        let f = yaml_tempfile("this is: not: valid: yaml: content:::");
        let mut mgr = SheetConfigManager::new();
        assert!(mgr.load_from_file(f.path()).is_err());
        assert!(!mgr.is_loaded());
    }

    #[test]
    fn reload_replaces_previous_sheet() {
        let f1 = yaml_tempfile("theme: dark\nlessons:\n  - name: first\n");
        let f2 = yaml_tempfile("lessons:\n  - name: second\n");

        let mut mgr = SheetConfigManager::new();
        mgr.load_from_file(f1.path()).unwrap();
        assert_eq!(mgr.theme(), Theme::Dark);

        mgr.load_from_file(f2.path()).unwrap();
        assert_eq!(mgr.theme(), Theme::Light, "old theme must be gone");
        assert_eq!(mgr.lessons().len(), 1);
        assert_eq!(mgr.lessons()[0].name, "second");
    }
}
