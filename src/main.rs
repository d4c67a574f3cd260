use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::BufRead;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use validauth::{
    common_password_count, is_common_password, is_password_detailed, is_password_with,
    validate_otp_detailed, validate_otp_with, ValidauthConfig,
};

mod cli;
use cli::display::{render_denylist_hit, render_otp, render_password, use_colors};
use cli::{apply_otp_flags, apply_password_flags, Cli, Commands, DenylistAction, OutputArgs, PasswordFlags};

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    let result = run(cli.command);
    if let Err(e) = &result {
        eprintln!("❌ {:#}", e);
    }
    ExitCode::from(exit_status(&result))
}

/// 0 when the input is valid, 1 when rejected, 2 when the command failed.
fn exit_status(result: &Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

/// Log to stderr, filtered by `VALIDAUTH_LOG` (default: warn).
fn init_logging() {
    let filter = EnvFilter::try_from_env("VALIDAUTH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run one subcommand. `Ok(false)` means the input was rejected.
fn run(command: Commands) -> Result<bool> {
    match command {
        Commands::Otp {
            otp,
            correct_otp,
            attempts,
            max_attempts,
            output,
        } => {
            let config = load_config(&output)?;
            let options = apply_otp_flags(config.otp, attempts, max_attempts, output.details);

            if output.json {
                let outcome = validate_otp_with(&otp, &correct_otp, &options);
                print_json(&outcome)?;
                return Ok(outcome.is_valid());
            }

            let report = validate_otp_detailed(&otp, &correct_otp, &options);
            println!("{}", render_otp(&report, options.details, use_colors()));
            Ok(report.valid)
        }

        Commands::Password {
            password,
            min_length,
            max_length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
            allow_common,
            output,
        } => {
            let config = load_config(&output)?;
            let flags = PasswordFlags {
                min_length,
                max_length,
                no_uppercase,
                no_lowercase,
                no_numbers,
                no_symbols,
                allow_common,
                details: output.details,
            };
            let options = apply_password_flags(config.password, &flags);
            let password = match password.as_deref() {
                None | Some("-") => read_password_line(std::io::stdin().lock())?,
                Some(value) => value.to_string(),
            };

            if output.json {
                let outcome = is_password_with(&password, &options);
                print_json(&outcome)?;
                return Ok(outcome.is_valid());
            }

            let report = is_password_detailed(&password, &options);
            println!("{}", render_password(&report, options.details, use_colors()));
            Ok(report.valid)
        }

        Commands::Denylist { action } => match action {
            DenylistAction::Stats => {
                println!("{} entries", common_password_count());
                Ok(true)
            }
            DenylistAction::Check { password } => {
                let listed = is_common_password(&password);
                println!("{}", render_denylist_hit(listed, use_colors()));
                Ok(!listed)
            }
        },
    }
}

fn load_config(output: &OutputArgs) -> Result<ValidauthConfig> {
    match &output.config {
        Some(path) => {
            ValidauthConfig::load(path).with_context(|| format!("loading --config {}", path))
        }
        None => Ok(ValidauthConfig::default()),
    }
}

/// First line of `reader`, without the trailing newline.
fn read_password_line(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    if read == 0 {
        bail!("no password given: pass it as an argument or on stdin");
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let serialized = serde_json::to_string_pretty(value).context("serialize result")?;
    println!("{}", serialized);
    Ok(())
}
