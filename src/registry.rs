//! Registry access trait (injectable for testing).
//!
//! Only the narrow access pattern the Windows locator needs is modeled:
//! open a key under a hive and read its default value as an install
//! directory. Missing keys are an expected negative outcome, not an error.

use crate::options::RegistryRoot;

/// Trait for reading install directories from the system registry.
pub trait RegistryProvider {
    /// Read the default value of `root\path`, or `None` when the key is
    /// missing or its default value is unreadable.
    fn read_default_value(&self, root: RegistryRoot, path: &str) -> Option<String>;
}

/// Production provider backed by `winreg`.
#[cfg(windows)]
pub struct SystemRegistry;

#[cfg(windows)]
impl RegistryProvider for SystemRegistry {
    fn read_default_value(&self, root: RegistryRoot, path: &str) -> Option<String> {
        let hive = winreg::RegKey::predef(hkey(root));
        let key = hive.open_subkey(path).ok()?;
        key.get_value::<String, _>("").ok()
    }
}

#[cfg(windows)]
const fn hkey(root: RegistryRoot) -> winreg::HKEY {
    use winreg::enums::{HKEY_CLASSES_ROOT, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};

    match root {
        RegistryRoot::LocalMachine => HKEY_LOCAL_MACHINE,
        RegistryRoot::CurrentUser => HKEY_CURRENT_USER,
        RegistryRoot::ClassesRoot => HKEY_CLASSES_ROOT,
    }
}

/// Test provider with predefined keys.
#[cfg(test)]
#[derive(Default)]
pub struct MockRegistry {
    keys: std::collections::HashMap<(RegistryRoot, String), String>,
}

#[cfg(test)]
impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key whose default value is `install_dir`.
    #[must_use]
    pub fn with_key(
        mut self,
        root: RegistryRoot,
        path: impl Into<String>,
        install_dir: impl Into<String>,
    ) -> Self {
        self.keys.insert((root, path.into()), install_dir.into());
        self
    }
}

#[cfg(test)]
impl RegistryProvider for MockRegistry {
    fn read_default_value(&self, root: RegistryRoot, path: &str) -> Option<String> {
        self.keys.get(&(root, path.to_string())).cloned()
    }
}
