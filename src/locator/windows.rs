//! Windows locator variant: registry entries and common install directories.

use std::path::PathBuf;

use super::PlatformLocator;
use crate::env::EnvProvider;
use crate::options::ResolvedOptions;
use crate::registry::RegistryProvider;
use crate::search::PathProber;

/// Environment variables whose value joined with the app name is a
/// candidate install directory, in search-priority order.
const INSTALL_DIR_VARS: [&str; 4] = [
    "PROGRAMFILES",
    "PROGRAMFILES(X86)",
    "LOCALAPPDATA",
    "APPDATA",
];

/// Environment variables under which Start Menu program folders live.
const START_MENU_VARS: [&str; 2] = ["PROGRAMDATA", "APPDATA"];

const START_MENU_PROGRAMS: &str = "Microsoft/Windows/Start Menu/Programs";

/// Locator for Windows.
///
/// Common-places search runs the registry sub-search first, then the
/// environment-derived install and Start Menu directories; each sub-search
/// is individually skippable via the options.
pub struct WindowsLocator<'a> {
    registry: &'a dyn RegistryProvider,
}

impl<'a> WindowsLocator<'a> {
    pub const fn new(registry: &'a dyn RegistryProvider) -> Self {
        Self { registry }
    }

    /// Collect install directories recorded in the registry, in
    /// template-then-root iteration order. Missing keys contribute nothing.
    fn registry_candidates(&self, options: &ResolvedOptions) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        for path in &options.registry_paths {
            for root in &options.registry_roots {
                if let Some(install_dir) = self.registry.read_default_value(*root, path) {
                    tracing::debug!(
                        key = path.as_str(),
                        root = ?root,
                        install_dir = install_dir.as_str(),
                        "registry key names an install directory"
                    );
                    dirs.push(PathBuf::from(install_dir));
                }
            }
        }
        dirs
    }

    /// Collect candidate directories derived from well-known environment
    /// variables. Unset variables contribute nothing.
    fn common_path_candidates(options: &ResolvedOptions, env: &dyn EnvProvider) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        for var in INSTALL_DIR_VARS {
            if let Some(base) = env.get(var) {
                dirs.push(PathBuf::from(base).join(&options.app_name));
            }
        }
        for var in START_MENU_VARS {
            if let Some(base) = env.get(var) {
                dirs.push(
                    PathBuf::from(base)
                        .join(START_MENU_PROGRAMS)
                        .join(&options.app_name),
                );
            }
        }
        dirs
    }
}

impl PlatformLocator for WindowsLocator<'_> {
    fn selector(&self) -> &'static str {
        "windows"
    }

    fn search_common_places(
        &self,
        options: &ResolvedOptions,
        prober: &PathProber<'_>,
    ) -> Option<PathBuf> {
        if options.search_in_registry {
            let dirs = self.registry_candidates(options);
            if let Some(hit) = prober.search_in_dirs(&options.binary_name, &dirs) {
                return Some(hit);
            }
        }

        if options.search_in_common_paths {
            let dirs = Self::common_path_candidates(options, prober.env());
            if let Some(hit) = prober.search_in_dirs(&options.binary_name, &dirs) {
                return Some(hit);
            }
        }

        None
    }
}
