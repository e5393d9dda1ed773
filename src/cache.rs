//! Process-wide memoization of resolution results.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// A previously recorded resolution outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cached {
    /// The name resolved to this absolute path.
    Found(PathBuf),
    /// The search was exhausted without a hit; re-fail without re-probing.
    NotFound,
}

/// Memoization store mapping binary names to resolution outcomes.
///
/// Keys are the literal strings callers pass in; no normalization is
/// applied, so `"App"` and `"app.exe"` are independent entries even when
/// they resolve to the same file. Entries are never evicted within the
/// process lifetime. The internal mutex makes the per-key read/write pair
/// atomic; concurrent callers racing on an uncached name may duplicate probe
/// work but never corrupt the store.
///
/// The crate-level entry points share one process-wide instance; construct
/// a fresh `AppCache` for isolated state (e.g. in tests).
#[derive(Debug, Default)]
pub struct AppCache {
    entries: Mutex<HashMap<String, Cached>>,
}

impl AppCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously recorded outcome for `binary_name`.
    pub fn get(&self, binary_name: &str) -> Option<Cached> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(binary_name).cloned())
    }

    /// Record a successful resolution.
    pub fn record_found(&self, binary_name: &str, path: PathBuf) {
        self.record(binary_name, Cached::Found(path));
    }

    /// Record an exhausted search so later cached calls fail fast.
    pub fn record_not_found(&self, binary_name: &str) {
        self.record(binary_name, Cached::NotFound);
    }

    fn record(&self, binary_name: &str, outcome: Cached) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(binary_name.to_string(), outcome);
        }
    }
}
