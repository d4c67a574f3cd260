//! Custom cargo commands for the validauth crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask denylist  - Lint data/common_passwords.txt
//!   cargo xtask check     - Quick check (test + clippy)

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Entries the documentation promises are accepted by default.
const DOCUMENTED_STRONG: &[&str] = &[
    "MyP@ssw0rd123",
    "MyUn1qu3P@ssw0rd!",
    "Password123!",
    "MyPassword123!",
    "MyP@ssw0rd2024",
    "LongPass1!",
];

/// Entries the documentation promises are rejected.
const DOCUMENTED_WEAK: &[&str] = &["password123", "123456", "qwerty"];

const MIN_ENTRIES: usize = 1000;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("denylist") => lint_denylist()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (denylist + contracts + tests + clippy)
  test      Run all Rust tests
  denylist  Lint the common-password list
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("validauth Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Linting common-password list...");
    lint_denylist()?;
    println!("✓ Denylist clean\n");

    println!("[2/4] Checking contract calls...");
    check_contract_calls()?;
    println!("✓ Contracts wired into both validators\n");

    println!("[3/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// One entry per line: no blanks, no padding, no duplicates, enough entries,
/// and agreement with the documented examples.
fn lint_denylist() -> Result<()> {
    let path = project_root()?.join("data/common_passwords.txt");
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut seen = HashSet::new();
    for (number, line) in raw.lines().enumerate() {
        let number = number + 1;
        if line.is_empty() {
            bail!("line {}: blank entry", number);
        }
        if line != line.trim() {
            bail!("line {}: entry {:?} has surrounding whitespace", number, line);
        }
        if !seen.insert(line) {
            bail!("line {}: duplicate entry {:?}", number, line);
        }
    }

    if seen.len() < MIN_ENTRIES {
        bail!("only {} entries, expected at least {}", seen.len(), MIN_ENTRIES);
    }
    for strong in DOCUMENTED_STRONG {
        if seen.contains(strong) {
            bail!("documented strong password {:?} is listed", strong);
        }
    }
    for weak in DOCUMENTED_WEAK {
        if !seen.contains(weak) {
            bail!("documented weak password {:?} is missing", weak);
        }
    }

    println!("  {} entries", seen.len());
    Ok(())
}

/// Both detailed validators must run the result contracts.
fn check_contract_calls() -> Result<()> {
    let root = project_root()?;
    for file in ["src/otp.rs", "src/password.rs"] {
        let source = std::fs::read_to_string(root.join(file))
            .with_context(|| format!("Failed to read {}", file))?;
        if !source.contains("check_errors_iff_invalid(") {
            bail!(
                "{} no longer calls check_errors_iff_invalid. Someone may have removed a contract!",
                file
            );
        }
    }
    Ok(())
}
