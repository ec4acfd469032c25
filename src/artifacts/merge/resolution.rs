use std::path::{Path, PathBuf};

/// How the caller wants one file of a merge to end up
///
/// With resolved content the working file is overwritten with the file at
/// `resolved`; without it the file is deleted (or simply not brought over if
/// it only came from the merged branch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    file_name: String,
    resolved: Option<PathBuf>,
}

impl Resolution {
    pub fn new(file_name: impl Into<String>, resolved: Option<PathBuf>) -> Self {
        Resolution {
            file_name: file_name.into(),
            resolved,
        }
    }

    pub fn resolved(file_name: impl Into<String>, resolved: impl Into<PathBuf>) -> Self {
        Self::new(file_name, Some(resolved.into()))
    }

    pub fn dropped(file_name: impl Into<String>) -> Self {
        Self::new(file_name, None)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn resolved_content(&self) -> Option<&Path> {
        self.resolved.as_deref()
    }
}
