//! Expected-scaffold listing.

use crate::domain::{ExpectedPath, expected_paths};

/// Every expected scaffold entry, directories first. Touches no filesystem
/// state; the list is the compiled-in catalog.
pub fn entries() -> Vec<ExpectedPath> {
    expected_paths().collect()
}
