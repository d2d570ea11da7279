/// A single failed scaffold check.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub path: String,
    pub message: String,
}

/// Accumulates failures across the whole run so every missing artifact is
/// reported at once; no check short-circuits the rest.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push_error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(Diagnostic { path: path.into(), message: message.into() });
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn emit(&self) {
        for diagnostic in &self.errors {
            eprintln!("[ERROR] {}: {}", diagnostic.path, diagnostic.message);
        }
    }
}
