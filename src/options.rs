//! Search configuration for application binary resolution.
//!
//! `FindOptions` is the caller-facing option set; it can be built in code or
//! deserialized from a configuration file. Before any probing starts it is
//! flattened into a `ResolvedOptions` by merging the matching `by_os` patch
//! and filling in derived defaults, so the search algorithm never has to
//! deal with partial overrides.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Registry hive to search under (Windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistryRoot {
    LocalMachine,
    CurrentUser,
    ClassesRoot,
}

impl RegistryRoot {
    /// Default search order: machine-wide installs first, then per-user,
    /// then classes-root.
    pub const DEFAULT_ORDER: [Self; 3] = [Self::LocalMachine, Self::CurrentUser, Self::ClassesRoot];
}

/// Options controlling how an application binary is searched for.
///
/// All fields have defaults; `FindOptions::default()` enables every
/// technique with caching on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FindOptions {
    /// Consult and populate the process-wide memoization store.
    pub cached: bool,
    /// Search the system `PATH` first.
    pub search_in_path: bool,
    /// Extra directories to search, in listed order.
    pub more_search_paths: Vec<PathBuf>,
    /// Logical application name used to build platform candidate paths.
    /// Defaults to the binary name's file stem.
    pub app_name: Option<String>,
    /// Vendor name narrowing platform candidate paths (e.g. vendor-qualified
    /// registry keys).
    pub vendor_name: Option<String>,
    /// Search the registry for install directories (Windows only).
    pub search_in_registry: bool,
    /// Search common install/profile directories (Windows only).
    pub search_in_common_paths: bool,
    /// Registry roots to search, in listed order.
    /// Defaults to [`RegistryRoot::DEFAULT_ORDER`].
    pub registry_roots: Option<Vec<RegistryRoot>>,
    /// Registry key paths to read install directories from, in listed order.
    /// Defaults to `SOFTWARE\{vendor_name}\{app_name}` (when a vendor is
    /// given) followed by `SOFTWARE\{app_name}`.
    pub registry_paths: Option<Vec<String>>,
    /// Per-platform overrides, keyed by selector (`"windows"`, `"posix"`).
    /// Patch fields win over same-named base fields.
    pub by_os: HashMap<String, OsOverrides>,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            cached: true,
            search_in_path: true,
            more_search_paths: Vec::new(),
            app_name: None,
            vendor_name: None,
            search_in_registry: true,
            search_in_common_paths: true,
            registry_roots: None,
            registry_paths: None,
            by_os: HashMap::new(),
        }
    }
}

impl FindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_cached(mut self, cached: bool) -> Self {
        self.cached = cached;
        self
    }

    #[must_use]
    pub const fn with_search_in_path(mut self, search_in_path: bool) -> Self {
        self.search_in_path = search_in_path;
        self
    }

    #[must_use]
    pub fn with_more_search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.more_search_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    #[must_use]
    pub fn with_vendor_name(mut self, vendor_name: impl Into<String>) -> Self {
        self.vendor_name = Some(vendor_name.into());
        self
    }

    #[must_use]
    pub const fn with_search_in_registry(mut self, search_in_registry: bool) -> Self {
        self.search_in_registry = search_in_registry;
        self
    }

    #[must_use]
    pub const fn with_search_in_common_paths(mut self, search_in_common_paths: bool) -> Self {
        self.search_in_common_paths = search_in_common_paths;
        self
    }

    #[must_use]
    pub fn with_registry_roots<I>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = RegistryRoot>,
    {
        self.registry_roots = Some(roots.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_registry_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registry_paths = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_os_override(mut self, selector: impl Into<String>, patch: OsOverrides) -> Self {
        self.by_os.insert(selector.into(), patch);
        self
    }

    /// Flatten these options for the given binary name and platform selector.
    ///
    /// Applies the matching `by_os` patch over the base fields, then derives
    /// `app_name`, `registry_roots` and `registry_paths` defaults. The
    /// returned value is fully resolved; no optional field remains.
    pub fn resolve_for(&self, binary_name: &str, selector: &str) -> ResolvedOptions {
        let patch = self.by_os.get(selector);

        let binary_name = patch
            .and_then(|p| p.binary_name.clone())
            .unwrap_or_else(|| binary_name.to_string());

        let app_name = patch
            .and_then(|p| p.app_name.clone())
            .or_else(|| self.app_name.clone())
            .unwrap_or_else(|| default_app_name(&binary_name));

        let vendor_name = patch
            .and_then(|p| p.vendor_name.clone())
            .or_else(|| self.vendor_name.clone());

        let registry_roots = patch
            .and_then(|p| p.registry_roots.clone())
            .or_else(|| self.registry_roots.clone())
            .unwrap_or_else(|| RegistryRoot::DEFAULT_ORDER.to_vec());

        let registry_paths = patch
            .and_then(|p| p.registry_paths.clone())
            .or_else(|| self.registry_paths.clone())
            .unwrap_or_else(|| default_registry_paths(&app_name, vendor_name.as_deref()));

        ResolvedOptions {
            search_in_path: patch
                .and_then(|p| p.search_in_path)
                .unwrap_or(self.search_in_path),
            more_search_paths: patch
                .and_then(|p| p.more_search_paths.clone())
                .unwrap_or_else(|| self.more_search_paths.clone()),
            search_in_registry: patch
                .and_then(|p| p.search_in_registry)
                .unwrap_or(self.search_in_registry),
            search_in_common_paths: patch
                .and_then(|p| p.search_in_common_paths)
                .unwrap_or(self.search_in_common_paths),
            binary_name,
            app_name,
            vendor_name,
            registry_roots,
            registry_paths,
        }
    }
}

/// A partial `FindOptions` applied on top of the base options when the
/// platform selector matches.
///
/// `binary_name` may also be overridden per platform, e.g. an application
/// that ships `app` on POSIX but `app-cli` on Windows. The memoization key
/// stays the name the caller passed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OsOverrides {
    pub binary_name: Option<String>,
    pub search_in_path: Option<bool>,
    pub more_search_paths: Option<Vec<PathBuf>>,
    pub app_name: Option<String>,
    pub vendor_name: Option<String>,
    pub search_in_registry: Option<bool>,
    pub search_in_common_paths: Option<bool>,
    pub registry_roots: Option<Vec<RegistryRoot>>,
    pub registry_paths: Option<Vec<String>>,
}

impl OsOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_binary_name(mut self, binary_name: impl Into<String>) -> Self {
        self.binary_name = Some(binary_name.into());
        self
    }

    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    #[must_use]
    pub fn with_vendor_name(mut self, vendor_name: impl Into<String>) -> Self {
        self.vendor_name = Some(vendor_name.into());
        self
    }

    #[must_use]
    pub const fn with_search_in_path(mut self, search_in_path: bool) -> Self {
        self.search_in_path = Some(search_in_path);
        self
    }
}

/// Fully resolved options for one resolution attempt: the `by_os` patch is
/// merged and every default is filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Effective binary name (after any per-platform override).
    pub binary_name: String,
    pub search_in_path: bool,
    pub more_search_paths: Vec<PathBuf>,
    pub app_name: String,
    pub vendor_name: Option<String>,
    pub search_in_registry: bool,
    pub search_in_common_paths: bool,
    pub registry_roots: Vec<RegistryRoot>,
    pub registry_paths: Vec<String>,
}

fn default_app_name(binary_name: &str) -> String {
    Path::new(binary_name).file_stem().map_or_else(
        || binary_name.to_string(),
        |stem| stem.to_string_lossy().into_owned(),
    )
}

fn default_registry_paths(app_name: &str, vendor_name: Option<&str>) -> Vec<String> {
    let mut paths = Vec::new();
    if let Some(vendor) = vendor_name {
        paths.push(format!("SOFTWARE\\{vendor}\\{app_name}"));
    }
    paths.push(format!("SOFTWARE\\{app_name}"));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_defaults_to_file_stem() {
        let resolved = FindOptions::default().resolve_for("app.exe", "windows");
        assert_eq!(resolved.app_name, "app");
        assert_eq!(resolved.binary_name, "app.exe");
    }

    #[test]
    fn explicit_app_name_is_kept() {
        let resolved = FindOptions::default()
            .with_app_name("TestApp")
            .resolve_for("App", "windows");
        assert_eq!(resolved.app_name, "TestApp");
    }

    #[test]
    fn registry_paths_default_without_vendor() {
        let resolved = FindOptions::default()
            .with_app_name("TestApp")
            .resolve_for("App", "windows");
        assert_eq!(resolved.registry_paths, vec!["SOFTWARE\\TestApp"]);
    }

    #[test]
    fn registry_paths_default_probes_vendor_first() {
        let resolved = FindOptions::default()
            .with_app_name("TestApp")
            .with_vendor_name("TestVendor")
            .resolve_for("App", "windows");
        assert_eq!(
            resolved.registry_paths,
            vec!["SOFTWARE\\TestVendor\\TestApp", "SOFTWARE\\TestApp"]
        );
    }

    #[test]
    fn registry_roots_default_order() {
        let resolved = FindOptions::default().resolve_for("App", "windows");
        assert_eq!(
            resolved.registry_roots,
            vec![
                RegistryRoot::LocalMachine,
                RegistryRoot::CurrentUser,
                RegistryRoot::ClassesRoot
            ]
        );
    }

    #[test]
    fn by_os_patch_wins_over_base() {
        let options = FindOptions::default()
            .with_vendor_name("BaseVendor")
            .with_os_override(
                "windows",
                OsOverrides::new()
                    .with_binary_name("dbeaver-cli")
                    .with_vendor_name("WinVendor"),
            );

        let on_windows = options.resolve_for("dbeaver", "windows");
        assert_eq!(on_windows.binary_name, "dbeaver-cli");
        assert_eq!(on_windows.vendor_name.as_deref(), Some("WinVendor"));
        // Derived app_name follows the effective binary name.
        assert_eq!(on_windows.app_name, "dbeaver-cli");

        let on_posix = options.resolve_for("dbeaver", "posix");
        assert_eq!(on_posix.binary_name, "dbeaver");
        assert_eq!(on_posix.vendor_name.as_deref(), Some("BaseVendor"));
    }

    #[test]
    fn non_overridden_base_fields_pass_through() {
        let options = FindOptions::default()
            .with_search_in_path(false)
            .with_os_override("windows", OsOverrides::new().with_app_name("TestApp"));

        let resolved = options.resolve_for("App", "windows");
        assert!(!resolved.search_in_path);
        assert_eq!(resolved.app_name, "TestApp");
    }

    #[test]
    fn options_deserialize_from_config_json() {
        let json = r#"{
            "search_in_path": false,
            "vendor_name": "TestVendor",
            "registry_roots": ["local-machine", "current-user"],
            "by_os": {
                "windows": { "binary_name": "dbeaver-cli" }
            }
        }"#;

        let options: FindOptions = serde_json::from_str(json).expect("valid options JSON");
        assert!(options.cached, "unspecified fields keep their defaults");
        assert!(!options.search_in_path);
        assert_eq!(
            options.registry_roots,
            Some(vec![RegistryRoot::LocalMachine, RegistryRoot::CurrentUser])
        );
        assert_eq!(
            options.by_os["windows"].binary_name.as_deref(),
            Some("dbeaver-cli")
        );
    }
}
