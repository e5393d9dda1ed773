//! Error types for application binary resolution.

use thiserror::Error;

/// Errors that can occur while locating an application binary.
///
/// Negative outcomes of individual probes (missing registry key, unset
/// environment variable, absent directory) are not errors; the search simply
/// moves on to the next candidate. Only a fully exhausted search fails.
#[derive(Debug, Clone, Error)]
pub enum FindAppError {
    /// No enabled search technique produced an executable for the name.
    #[error("could not find application '{binary_name}'")]
    NotFound {
        /// The binary name exactly as the caller supplied it.
        binary_name: String,
    },
}

impl FindAppError {
    pub(crate) fn not_found(binary_name: impl Into<String>) -> Self {
        Self::NotFound {
            binary_name: binary_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_requested_binary() {
        let err = FindAppError::not_found("dbeaver");
        assert_eq!(err.to_string(), "could not find application 'dbeaver'");
    }
}
