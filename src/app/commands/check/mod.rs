mod diagnostics;
mod structure;

use std::path::Path;

use serde::Serialize;

use crate::domain::{AppError, CheckResult};

pub use diagnostics::{Diagnostic, Diagnostics};

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Emit a machine-readable JSON report on stdout instead of diagnostics.
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub errors: usize,
    pub exit_code: i32,
}

/// Machine-readable form of a full check run.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub root: String,
    pub results: Vec<CheckResult>,
    pub errors: usize,
}

pub fn execute(root: &Path, options: CheckOptions) -> Result<CheckOutcome, AppError> {
    if !root.is_dir() {
        return Err(AppError::RootNotFound(root.display().to_string()));
    }

    let mut diagnostics = Diagnostics::default();

    let mut results = structure::directory_checks(root, &mut diagnostics);
    results.extend(structure::file_checks(root, &mut diagnostics));

    let errors = diagnostics.error_count();
    let exit_code = if errors > 0 { 1 } else { 0 };

    if options.json {
        let report = CheckReport { root: root.display().to_string(), results, errors };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(CheckOutcome { errors, exit_code });
    }

    diagnostics.emit();

    if errors == 0 {
        println!("All checks passed.");
    } else {
        eprintln!("Check failed: {} error(s) found.", errors);
    }

    Ok(CheckOutcome { errors, exit_code })
}
