use crate::domain::models::{ExtractError, Resolution};
use crate::services::extract::extract_from_file;
use anyhow::Context;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

/// Runs one extraction and applies the fallback policy at the process
/// boundary:
/// - found value: print it, exit 0;
/// - not found (absent key, non-mapping step, resolved null): print the
///   default if one was given, exit 0 either way, no diagnostic;
/// - any failure with a default: print the default, exit 0, no diagnostic;
/// - any failure without a default: one diagnostic line on stderr, exit 1.
pub fn handle_extract(path_expr: &str, file: &Path, default: Option<&str>) -> ExitCode {
    match extract_from_file(path_expr, file) {
        Ok(Resolution::Found(text)) => match emit(&text) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => fail(err, default),
        },
        Ok(Resolution::NotFound) => match default {
            Some(value) => match emit(value) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => fail(err, None),
            },
            None => ExitCode::SUCCESS,
        },
        Err(err) => fail(err, default),
    }
}

fn fail(err: ExtractError, default: Option<&str>) -> ExitCode {
    match default {
        Some(value) => match emit(value) {
            Ok(()) => ExitCode::SUCCESS,
            Err(emit_err) => fail(emit_err, None),
        },
        None => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn emit(text: &str) -> Result<(), ExtractError> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{text}")
        .context("cannot write output")
        .map_err(ExtractError::Unexpected)
}
