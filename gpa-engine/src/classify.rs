/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! GPA → descriptive band.
//!
//! Bands are closed and non-overlapping over the numeric GPA:
//!
//! | Input | Band |
//! |---|---|
//! | no significant input | [`Band::Blank`] |
//! | NaN | [`Band::Muddled`] |
//! | `== 0` | [`Band::Void`] |
//! | `(0, 10)` | [`Band::Struggling`] |
//! | `[10, 14)` | [`Band::Precarious`] |
//! | `[14, 18)` | [`Band::Confident`] |
//! | `[18, 20]` | [`Band::Scholar`] |
//! | anything else | [`Band::Muddled`] |

use std::fmt;

/// One of the fixed classification messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Nothing with a course weight has been entered.
    Blank,
    /// NaN, or a value outside every other band.
    Muddled,
    /// Exactly zero.
    Void,
    Struggling,
    Precarious,
    Confident,
    Scholar,
}

impl Band {
    /// The message shown under the calculated GPA.
    pub fn message(self) -> &'static str {
        match self {
            Band::Blank => "The scroll is blank... judgment awaits.",
            Band::Muddled => "The runes are muddled, your fate unclear.",
            Band::Void => {
                "Emptiness stares back... a void of effort, or perhaps, a path yet untrodden?"
            }
            Band::Struggling => "Whispers from the shadows speak of your struggles...",
            Band::Precarious => "A precarious balance... the path is still dark, tread carefully.",
            Band::Confident => {
                "You navigate the arcane path with growing confidence. The spirits are watching."
            }
            Band::Scholar => {
                "The ancient texts illuminate your way! A true scholar of the unseen arts."
            }
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Map a numeric GPA to its [`Band`].
///
/// `has_significant_input` short-circuits everything else: without it the
/// result is always [`Band::Blank`].
pub fn classify(gpa: f64, has_significant_input: bool) -> Band {
    if !has_significant_input {
        return Band::Blank;
    }
    if gpa.is_nan() {
        return Band::Muddled;
    }
    if gpa == 0.0 {
        Band::Void
    } else if gpa > 0.0 && gpa < 10.0 {
        Band::Struggling
    } else if (10.0..14.0).contains(&gpa) {
        Band::Precarious
    } else if (14.0..18.0).contains(&gpa) {
        Band::Confident
    } else if (18.0..=20.0).contains(&gpa) {
        Band::Scholar
    } else {
        Band::Muddled
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
