pub mod error;
pub mod scaffold;

pub use error::AppError;
pub use scaffold::{
    CheckResult, EXPECTED_DIRECTORIES, EXPECTED_FILES, ExpectedPath, PathKind, expected_paths,
};
