//! The required scaffold of the template repository.
//!
//! Both lists are literal and fully enumerated; no entry is discovered at
//! runtime. Paths are relative to the repository root.

use serde::Serialize;

/// Kind of filesystem entry an expected path must resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    Directory,
    File,
}

/// One entry of the required scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpectedPath {
    pub relative: &'static str,
    pub kind: PathKind,
}

/// Directories every template repository must contain.
pub const EXPECTED_DIRECTORIES: &[&str] = &[
    "docs",
    "terraform",
    "terraform/aws",
    "terraform/gcp",
    "scripts",
    "examples",
    "diagrams",
];

/// Files every template repository must contain.
pub const EXPECTED_FILES: &[&str] = &[
    "README.md",
    "CONTRIBUTING.md",
    "LICENSE",
    "terraform/aws/main.tf",
    "terraform/aws/variables.tf",
    "terraform/aws/outputs.tf",
    "terraform/gcp/main.tf",
    "terraform/gcp/variables.tf",
    "terraform/gcp/outputs.tf",
    "scripts/validate-connectivity.sh",
    "scripts/run-tests.sh",
];

/// All expected entries, directories first, in declaration order.
pub fn expected_paths() -> impl Iterator<Item = ExpectedPath> {
    let directories = EXPECTED_DIRECTORIES
        .iter()
        .copied()
        .map(|relative| ExpectedPath { relative, kind: PathKind::Directory });
    let files = EXPECTED_FILES
        .iter()
        .copied()
        .map(|relative| ExpectedPath { relative, kind: PathKind::File });
    directories.chain(files)
}

/// Outcome of checking one expected path against the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub path: &'static str,
    pub kind: PathKind,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}
