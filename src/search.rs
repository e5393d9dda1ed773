//! Search techniques composed by the resolver.

use std::path::{Path, PathBuf};

use crate::env::EnvProvider;
use crate::which::WhichProvider;

/// Runs individual probes against the which primitive and the environment.
///
/// Two techniques live here: the search-path probe for bare names and the
/// explicit-directory probe over an ordered candidate list. Platform
/// locators feed their candidate directories through the same
/// directory probe so registry and common-places hits get identical
/// executable-extension handling.
pub struct PathProber<'a> {
    which: &'a dyn WhichProvider,
    env: &'a dyn EnvProvider,
}

impl<'a> PathProber<'a> {
    pub const fn new(which: &'a dyn WhichProvider, env: &'a dyn EnvProvider) -> Self {
        Self { which, env }
    }

    /// Environment access for candidate-source construction.
    pub const fn env(&self) -> &'a dyn EnvProvider {
        self.env
    }

    /// Probe `binary_name` through the which primitive.
    ///
    /// Also used for explicit-path inputs: the primitive validates those as
    /// concrete paths instead of searching.
    pub fn search_in_path(&self, binary_name: &str) -> Option<PathBuf> {
        let hit = self.which.which(Path::new(binary_name));
        match &hit {
            Some(path) => {
                tracing::debug!(binary_name, path = %path.display(), "resolved via search path");
            }
            None => tracing::trace!(binary_name, "not found via search path"),
        }
        hit
    }

    /// Probe `binary_name` against each directory in order; first hit wins.
    ///
    /// Empty entries are skipped. Candidates are routed through the which
    /// primitive so host extension rules apply even for absolute paths.
    pub fn search_in_dirs(&self, binary_name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
        for dir in dirs {
            if dir.as_os_str().is_empty() {
                continue;
            }
            let candidate = dir.join(binary_name);
            tracing::trace!(candidate = %candidate.display(), "probing directory candidate");
            if let Some(hit) = self.which.which(&candidate) {
                tracing::debug!(binary_name, path = %hit.display(), "resolved via directory list");
                return Some(hit);
            }
        }
        None
    }
}
