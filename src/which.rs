//! Search-path lookup trait (injectable for testing).

use std::path::{Path, PathBuf};

/// Trait for the platform's which-style executable lookup.
///
/// Implementations must apply host executable-extension rules (e.g. trying
/// `.exe` candidates on Windows) and must treat inputs that contain a
/// directory separator as a concrete path check rather than a `PATH` search.
/// Returned paths are absolute.
pub trait WhichProvider {
    /// Resolve `binary` to an absolute executable path, or `None`.
    fn which(&self, binary: &Path) -> Option<PathBuf>;
}

/// Production provider backed by the `which` crate.
///
/// `which` handles both lookup modes: bare names are searched through the
/// `PATH` entries, while inputs with a directory component are validated
/// directly (resolved against the current directory when relative) with the
/// same extension rules.
pub struct SystemWhich;

impl WhichProvider for SystemWhich {
    fn which(&self, binary: &Path) -> Option<PathBuf> {
        which::which(binary).ok()
    }
}

/// Test provider emulating a fixed filesystem and search path.
#[cfg(test)]
#[derive(Default)]
pub struct MockWhich {
    executables: std::collections::HashSet<PathBuf>,
    path_dirs: Vec<PathBuf>,
    extensions: Vec<String>,
}

#[cfg(test)]
impl MockWhich {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an executable file at an exact path.
    #[must_use]
    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executables.insert(path.into());
        self
    }

    /// Add a directory searched for bare names, in registration order.
    #[must_use]
    pub fn with_path_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.path_dirs.push(dir.into());
        self
    }

    /// Add an executable extension tried after the bare candidate
    /// (e.g. `".exe"`).
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extensions.push(extension.into());
        self
    }

    fn check(&self, candidate: &Path) -> Option<PathBuf> {
        if self.executables.contains(candidate) {
            return Some(candidate.to_path_buf());
        }
        for extension in &self.extensions {
            let mut with_ext = candidate.to_path_buf().into_os_string();
            with_ext.push(extension);
            let with_ext = PathBuf::from(with_ext);
            if self.executables.contains(&with_ext) {
                return Some(with_ext);
            }
        }
        None
    }
}

#[cfg(test)]
impl WhichProvider for MockWhich {
    fn which(&self, binary: &Path) -> Option<PathBuf> {
        let is_bare_name = binary
            .file_name()
            .is_some_and(|name| name == binary.as_os_str());

        if is_bare_name {
            self.path_dirs
                .iter()
                .find_map(|dir| self.check(&dir.join(binary)))
        } else {
            self.check(binary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_searches_path_dirs_in_order() {
        let which = MockWhich::new()
            .with_path_dir("/usr/bin")
            .with_path_dir("/usr/local/bin")
            .with_executable("/usr/local/bin/app");

        assert_eq!(
            which.which(Path::new("app")),
            Some(PathBuf::from("/usr/local/bin/app"))
        );
    }

    #[test]
    fn path_input_is_checked_directly_not_searched() {
        let which = MockWhich::new()
            .with_path_dir("/usr/bin")
            .with_executable("/usr/bin/app");

        assert_eq!(which.which(Path::new("/opt/app")), None);
        assert_eq!(
            which.which(Path::new("/usr/bin/app")),
            Some(PathBuf::from("/usr/bin/app"))
        );
    }

    #[test]
    fn extension_variants_are_tried() {
        let tools = Path::new("C:\\Tools");
        let which = MockWhich::new()
            .with_extension(".exe")
            .with_executable(tools.join("App.exe"));

        assert_eq!(which.which(&tools.join("App")), Some(tools.join("App.exe")));
    }
}
