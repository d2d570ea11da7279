//! List command implementation.

use crate::domain::{AppError, PathKind};

pub fn run_list(json: bool) -> Result<(), AppError> {
    let entries = crate::app::commands::list::entries();

    if json {
        println!("{}", serde_json::to_string(&entries)?);
        return Ok(());
    }

    let directories = entries.iter().filter(|entry| entry.kind == PathKind::Directory).count();
    let files = entries.len() - directories;

    println!("Required scaffold ({} directories, {} files):", directories, files);
    for entry in &entries {
        let kind = match entry.kind {
            PathKind::Directory => "dir ",
            PathKind::File => "file",
        };
        println!("  {}  {}", kind, entry.relative);
    }
    Ok(())
}
