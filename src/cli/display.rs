// Copyright 2025-present Adiksuu
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the validauth CLI.
//!
//! OneDark colours for dark terminals, One Light for light ones. Detection
//! tries `VALIDAUTH_THEME` first, then `COLORFGBG`, then defaults to dark.
//! Respects `NO_COLOR` and turns colour off when stdout is not a TTY.
//!
//! Renderers return strings so the layout can be tested without a terminal.
//! Passwords and OTP values are never echoed back in human-readable output;
//! only `--json` prints them, because the JSON shape includes them.

use std::sync::OnceLock;
use validauth::{OtpReport, PasswordReport};

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("VALIDAUTH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; bg 7 and up (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);   // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);   // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);    // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);     // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);   // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);  // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);    // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);  // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers, or nothing when colour is off
fn paint(enabled: bool, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if enabled {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORT RENDERING
// ═══════════════════════════════════════════════════════════════════════════

fn verdict(valid: bool, colors: bool) -> String {
    if valid {
        paint(colors, GREEN, &[BOLD], "✓ valid")
    } else {
        paint(colors, RED, &[BOLD], "✗ invalid")
    }
}

fn error_lines(errors: &Option<Vec<String>>, colors: bool) -> Vec<String> {
    errors
        .iter()
        .flatten()
        .map(|message| format!("  {} {}", paint(colors, RED, &[], "-"), message))
        .collect()
}

/// Human-readable OTP result.
pub fn render_otp(report: &OtpReport, details: bool, colors: bool) -> String {
    let mut lines = vec![format!("OTP: {}", verdict(report.valid, colors))];
    if details {
        lines.extend(error_lines(&report.errors, colors));
        let attempts = report
            .attempts
            .map_or_else(|| "not tracked".to_string(), |a| a.to_string());
        let remaining = report.remaining_attempts.to_string();
        let remaining = if report.remaining_attempts > 0 {
            paint(colors, CYAN, &[], &remaining)
        } else {
            paint(colors, YELLOW, &[BOLD], &remaining)
        };
        lines.push(format!(
            "  {} {}   {} {}   {} {}",
            paint(colors, GRAY, &[], "attempts"),
            attempts,
            paint(colors, GRAY, &[], "max"),
            report.max_attempts,
            paint(colors, GRAY, &[], "remaining"),
            remaining
        ));
    }
    lines.join("\n")
}

/// Human-readable password result.
pub fn render_password(report: &PasswordReport, details: bool, colors: bool) -> String {
    let mut lines = vec![format!("Password: {}", verdict(report.valid, colors))];
    if details {
        lines.extend(error_lines(&report.errors, colors));
        lines.push(format!(
            "  {} {}",
            paint(colors, GRAY, &[], "length"),
            report.password.chars().count()
        ));
    }
    lines.join("\n")
}

/// One-line denylist lookup result.
pub fn render_denylist_hit(listed: bool, colors: bool) -> String {
    if listed {
        paint(colors, RED, &[BOLD], "listed: password is in the common-password list")
    } else {
        paint(colors, GREEN, &[], "not listed")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
