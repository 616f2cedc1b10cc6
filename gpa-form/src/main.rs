/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};

use gpa_engine::engine::Variant;
use gpa_form::config::SheetConfigManager;
use gpa_form::form::{run_session, Form};
use gpa_form::theme::Theme;

// ── CLI argument definition ───────────────────────────────────────────────────

/// Weighted GPA form in the terminal.
///
/// Example:
///   gpa-form --sheet lessons.yaml --theme dark
#[derive(Debug, Parser)]
#[command(
    name = "gpa-form",
    about = "The Scholarly Reckoning – weighted GPA form",
    long_about = None,
)]
struct Cli {
    /// YAML sheet with starting lessons, variant and theme.
    #[arg(short = 's', long = "sheet")]
    sheet: Option<PathBuf>,

    /// Form variant: `reckoning` (gated add, band message) or `plain`.
    /// Overrides the sheet.
    #[arg(short = 'v', long = "variant")]
    variant: Option<Variant>,

    /// Starting theme: `light` or `dark`.  Overrides the sheet.
    #[arg(short = 't', long = "theme")]
    theme: Option<Theme>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Logs go to stderr so they never interleave with the form on stdout.
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    info!(
        sheet   = ?cli.sheet,
        variant = ?cli.variant,
        theme   = ?cli.theme,
        "Configuration"
    );

    // ── Load lesson sheet ─────────────────────────────────────────────────────
    let mut sheet = SheetConfigManager::new();
    if let Some(path) = &cli.sheet {
        if let Err(e) = sheet.load_from_file(path) {
            error!("Failed to load lesson sheet: {:#}", e);
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
    if sheet.is_loaded() {
        info!(
            variant = %sheet.variant(),
            theme = %sheet.theme(),
            rows = sheet.lessons().len(),
            "Lesson sheet loaded"
        );
    }

    let variant = cli.variant.unwrap_or_else(|| sheet.variant());
    let theme = cli.theme.unwrap_or_else(|| sheet.theme());
    let mut form = Form::new(sheet.lessons(), variant, theme);

    info!(
        variant = %form.variant(),
        theme = %form.theme(),
        rows = form.lessons().len(),
        "Form ready"
    );

    let stdin = io::stdin();
    if let Err(e) = run_session(&mut form, stdin.lock(), io::stdout().lock()) {
        error!("Input loop stopped: {}", e);
        process::exit(1);
    }
}
