use std::path::Path;

use crate::domain::{CheckResult, EXPECTED_DIRECTORIES, EXPECTED_FILES, PathKind};

use super::diagnostics::Diagnostics;

/// Check every expected directory under `root`. One result per entry,
/// independent of the others.
pub fn directory_checks(root: &Path, diagnostics: &mut Diagnostics) -> Vec<CheckResult> {
    EXPECTED_DIRECTORIES
        .iter()
        .copied()
        .map(|relative| check_entry(root, relative, PathKind::Directory, diagnostics))
        .collect()
}

/// Check every expected file under `root`.
pub fn file_checks(root: &Path, diagnostics: &mut Diagnostics) -> Vec<CheckResult> {
    EXPECTED_FILES
        .iter()
        .copied()
        .map(|relative| check_entry(root, relative, PathKind::File, diagnostics))
        .collect()
}

fn check_entry(
    root: &Path,
    relative: &'static str,
    kind: PathKind,
    diagnostics: &mut Diagnostics,
) -> CheckResult {
    let path = root.join(relative);
    let message = match kind {
        PathKind::Directory => {
            if path.is_dir() {
                None
            } else if path.exists() {
                Some("Expected a directory")
            } else {
                Some("Missing directory")
            }
        }
        PathKind::File => {
            if path.is_file() {
                None
            } else if path.exists() {
                Some("Expected a regular file")
            } else {
                Some("Missing required file")
            }
        }
    };

    if let Some(message) = message {
        diagnostics.push_error(relative, message);
    }

    CheckResult { path: relative, kind, ok: message.is_none(), message }
}
