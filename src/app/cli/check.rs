//! Check command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_check(root: Option<PathBuf>, json: bool) -> Result<i32, AppError> {
    let root = match root {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let options = crate::CheckOptions { json };
    let outcome = crate::app::commands::check::execute(&root, options)?;

    Ok(outcome.exit_code)
}
