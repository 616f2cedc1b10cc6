/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Terminal form for the GPA engine.
//!
//! ```text
//! lib.rs
//! ├── config/   – optional YAML lesson sheet
//! ├── form/     – screen state, command parsing, rendering, input loop
//! └── theme     – light / dark flag
//! ```

pub mod config;
pub mod form;
pub mod theme;
