//! Platform-specific candidate-directory sources.
//!
//! Each platform variant implements [`PlatformLocator`]: it names the
//! selector used for `by_os` overrides and runs the platform's
//! common-places search. The running platform's variant is picked once at
//! the crate entry points; resolvers for tests can inject either variant on
//! any host.

mod posix;
mod windows;

pub use posix::PosixLocator;
pub use windows::WindowsLocator;

use std::path::PathBuf;

use crate::options::ResolvedOptions;
use crate::search::PathProber;

/// Platform strategy for searching common, non-`PATH` install locations.
pub trait PlatformLocator {
    /// Key this platform matches in `by_os` overrides.
    fn selector(&self) -> &'static str;

    /// Search platform common places for the effective binary name in
    /// `options`. Returns `None` when the platform defines no common places
    /// or nothing matched.
    fn search_common_places(
        &self,
        options: &ResolvedOptions,
        prober: &PathProber<'_>,
    ) -> Option<PathBuf>;
}
