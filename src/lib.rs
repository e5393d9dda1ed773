//! Cross-platform application binary locator.
//!
//! Resolves an application's binary name (or an explicit path) to an
//! absolute executable path, composing several discovery techniques in a
//! fixed order with first-success short-circuiting: the system search path,
//! caller-supplied directories, and platform common places (on Windows, the
//! registry and conventional install directories). Results are memoized
//! per binary name in a process-wide cache.
//!
//! ## Architecture
//!
//! The crate is split into small, focused modules:
//! - `options`: caller-facing configuration and the layered `by_os` merge
//! - `cache`: the process-wide memoization store
//! - `env`, `which`, `registry`: injectable platform primitives
//! - `search`: the search-path and explicit-directory probers
//! - `locator`: platform-specific common-places strategies
//! - `finder`: the resolution algorithm orchestrating the above
//!
//! ## Usage
//!
//! ```rust,no_run
//! use findapp::{find_app, find_app_with, FindOptions};
//!
//! // Plain lookup through the search path and platform common places.
//! let path = find_app("dbeaver").unwrap();
//! println!("found at {}", path.display());
//!
//! // Vendor-qualified lookup with extra directories.
//! let options = FindOptions::default()
//!     .with_vendor_name("DBeaver Corp")
//!     .with_more_search_paths(["/opt/dbeaver/bin"]);
//! let path = find_app_with("dbeaver", &options).unwrap();
//! # let _ = path;
//! ```

mod cache;
mod env;
mod error;
mod finder;
mod locator;
mod options;
mod registry;
mod search;
mod which;

pub use cache::{AppCache, Cached};
pub use env::{EnvProvider, SystemEnv};
pub use error::FindAppError;
pub use finder::AppFinder;
pub use locator::{PlatformLocator, PosixLocator, WindowsLocator};
pub use options::{FindOptions, OsOverrides, RegistryRoot, ResolvedOptions};
pub use registry::RegistryProvider;
#[cfg(windows)]
pub use registry::SystemRegistry;
pub use search::PathProber;
pub use which::{SystemWhich, WhichProvider};

use std::path::PathBuf;
use std::sync::LazyLock;

/// Process-wide memoization store shared by the crate entry points.
static CACHE: LazyLock<AppCache> = LazyLock::new(AppCache::new);

/// Find an application binary with default options.
///
/// Equivalent to [`find_app_with`] with [`FindOptions::default`].
pub fn find_app(binary_name: &str) -> Result<PathBuf, FindAppError> {
    find_app_with(binary_name, &FindOptions::default())
}

/// Find an application binary.
///
/// Uses the system search primitives, the platform locator for the running
/// operating system, and the process-wide cache. See [`AppFinder::find`]
/// for the search order.
pub fn find_app_with(binary_name: &str, options: &FindOptions) -> Result<PathBuf, FindAppError> {
    let locator = system_locator();
    let finder = AppFinder::new(&CACHE, &locator, &SystemWhich, &SystemEnv);
    finder.find(binary_name, options)
}

#[cfg(windows)]
fn system_locator() -> WindowsLocator<'static> {
    static SYSTEM_REGISTRY: SystemRegistry = SystemRegistry;
    WindowsLocator::new(&SYSTEM_REGISTRY)
}

#[cfg(not(windows))]
const fn system_locator() -> PosixLocator {
    PosixLocator
}
