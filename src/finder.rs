//! Resolution algorithm: ordered techniques, short-circuiting, memoization.

use std::path::{Path, PathBuf};

use crate::cache::{AppCache, Cached};
use crate::env::EnvProvider;
use crate::error::FindAppError;
use crate::locator::PlatformLocator;
use crate::options::FindOptions;
use crate::search::PathProber;
use crate::which::WhichProvider;

/// Resolver composing the search techniques over injected collaborators.
///
/// The crate-level [`find_app`](crate::find_app) entry points construct one
/// of these over the system providers and the process-wide cache; embedders
/// and tests can inject their own cache, locator and primitives for
/// isolated state.
pub struct AppFinder<'a> {
    cache: &'a AppCache,
    locator: &'a dyn PlatformLocator,
    which: &'a dyn WhichProvider,
    env: &'a dyn EnvProvider,
}

impl<'a> AppFinder<'a> {
    pub const fn new(
        cache: &'a AppCache,
        locator: &'a dyn PlatformLocator,
        which: &'a dyn WhichProvider,
        env: &'a dyn EnvProvider,
    ) -> Self {
        Self {
            cache,
            locator,
            which,
            env,
        }
    }

    /// Resolve `binary_name` to an absolute executable path.
    ///
    /// Techniques run in order, first success wins: memoized result, search
    /// path, caller-supplied directories, platform common places. A name
    /// with a directory component is treated as an explicit path and probed
    /// exactly once, with no fallback. Cache entries are keyed by the
    /// literal `binary_name` string and record absences too, so a cached
    /// miss fails fast without re-searching.
    pub fn find(&self, binary_name: &str, options: &FindOptions) -> Result<PathBuf, FindAppError> {
        if options.cached {
            match self.cache.get(binary_name) {
                Some(Cached::Found(path)) => {
                    tracing::debug!(binary_name, path = %path.display(), "resolved from cache");
                    return Ok(path);
                }
                Some(Cached::NotFound) => {
                    tracing::debug!(binary_name, "cached absence, failing fast");
                    return Err(FindAppError::not_found(binary_name));
                }
                None => {}
            }
        }

        let result = self.find_uncached(binary_name, options);

        if options.cached {
            match &result {
                Ok(path) => self.cache.record_found(binary_name, path.clone()),
                Err(FindAppError::NotFound { .. }) => self.cache.record_not_found(binary_name),
            }
        }

        result
    }

    fn find_uncached(
        &self,
        binary_name: &str,
        options: &FindOptions,
    ) -> Result<PathBuf, FindAppError> {
        let resolved = options.resolve_for(binary_name, self.locator.selector());
        let prober = PathProber::new(self.which, self.env);
        let name = resolved.binary_name.as_str();

        // A name with a directory component comes from a configuration file
        // or similar: probe that exact path once and never guess elsewhere.
        if has_dir_component(name) {
            tracing::debug!(binary_name = name, "explicit path, probing directly");
            return prober
                .search_in_path(name)
                .ok_or_else(|| FindAppError::not_found(binary_name));
        }

        if resolved.search_in_path {
            if let Some(hit) = prober.search_in_path(name) {
                return Ok(hit);
            }
        }

        if !resolved.more_search_paths.is_empty() {
            if let Some(hit) = prober.search_in_dirs(name, &resolved.more_search_paths) {
                return Ok(hit);
            }
        }

        if let Some(hit) = self.locator.search_common_places(&resolved, &prober) {
            return Ok(hit);
        }

        Err(FindAppError::not_found(binary_name))
    }
}

/// Whether `binary_name` is an explicit path rather than a bare name.
fn has_dir_component(binary_name: &str) -> bool {
    Path::new(binary_name)
        .file_name()
        .is_none_or(|name| name != binary_name)
}
