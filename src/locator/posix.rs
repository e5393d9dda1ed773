//! POSIX locator variant.

use std::path::PathBuf;

use super::PlatformLocator;
use crate::options::ResolvedOptions;
use crate::search::PathProber;

/// Locator for POSIX platforms.
///
/// POSIX defines no common-places search: resolution relies on the search
/// path and caller-supplied directories only. Deliberately no XDG or
/// Homebrew defaults are assumed here.
pub struct PosixLocator;

impl PlatformLocator for PosixLocator {
    fn selector(&self) -> &'static str {
        "posix"
    }

    fn search_common_places(
        &self,
        _options: &ResolvedOptions,
        _prober: &PathProber<'_>,
    ) -> Option<PathBuf> {
        None
    }
}
