//! scaffolint: Validate the required scaffold of the multi-cloud infrastructure
//! template repository.

pub mod app;
pub mod domain;

use std::path::Path;

pub use app::commands::check::{CheckOptions, CheckOutcome, CheckReport};
pub use domain::{AppError, CheckResult, ExpectedPath, PathKind};

/// Run the scaffold check against `root`.
///
/// Returns a `CheckOutcome` with the failure count and the process exit code
/// the CLI would use.
pub fn check(root: &Path, options: CheckOptions) -> Result<CheckOutcome, AppError> {
    app::commands::check::execute(root, options)
}

/// Every directory and file the scaffold requires, directories first.
pub fn expected_scaffold() -> Vec<ExpectedPath> {
    app::commands::list::entries()
}
