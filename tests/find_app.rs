//! Integration tests against the real system providers.
//!
//! Executable-bit handling is POSIX-specific, so most of these are gated on
//! unix; the mock-driven unit tests cover both platform variants.

use findapp::{find_app_with, FindAppError, FindOptions};

#[cfg(unix)]
use std::path::{Path, PathBuf};

#[cfg(unix)]
fn write_executable(dir: &Path, name: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, "#!/bin/sh\nexit 0\n").expect("write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("mark executable");
    path
}

#[test]
fn unresolvable_name_reports_not_found() {
    let options = FindOptions::default().with_cached(false);
    let err = find_app_with("findapp-test-no-such-binary", &options)
        .expect_err("name must not resolve");
    let FindAppError::NotFound { binary_name } = err;
    assert_eq!(binary_name, "findapp-test-no-such-binary");
}

#[cfg(unix)]
#[test]
fn resolves_from_extra_search_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let expected = write_executable(dir.path(), "findapp-test-extra");

    let options = FindOptions::default()
        .with_cached(false)
        .with_search_in_path(false)
        .with_more_search_paths([dir.path()]);
    let path = find_app_with("findapp-test-extra", &options).expect("in extra dir");
    assert_eq!(path, expected);
}

#[cfg(unix)]
#[test]
fn explicit_path_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let expected = write_executable(dir.path(), "findapp-test-explicit");

    let options = FindOptions::default().with_cached(false);
    let path = find_app_with(expected.to_str().expect("utf-8 temp path"), &options)
        .expect("explicit path exists");
    assert_eq!(path, expected);
}

#[cfg(unix)]
#[test]
fn missing_explicit_path_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_executable(dir.path(), "findapp-test-present");

    // Explicit path argument: no fallback to the sibling that exists.
    let missing = dir.path().join("findapp-test-absent");
    let options = FindOptions::default()
        .with_cached(false)
        .with_more_search_paths([dir.path()]);
    assert!(find_app_with(missing.to_str().expect("utf-8 temp path"), &options).is_err());
}

#[cfg(unix)]
#[test]
fn non_executable_file_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("findapp-test-plain-file");
    std::fs::write(&path, "not a program").expect("write file");

    let options = FindOptions::default()
        .with_cached(false)
        .with_search_in_path(false)
        .with_more_search_paths([dir.path()]);
    assert!(find_app_with("findapp-test-plain-file", &options).is_err());
}

#[cfg(unix)]
#[test]
fn process_wide_cache_records_absence() {
    let dir = tempfile::tempdir().expect("tempdir");
    let options = FindOptions::default()
        .with_search_in_path(false)
        .with_more_search_paths([dir.path()]);

    // First cached call records the absence.
    assert!(find_app_with("findapp-test-cached-absence", &options).is_err());

    // The binary appears, but the cached absence still wins...
    let expected = write_executable(dir.path(), "findapp-test-cached-absence");
    assert!(find_app_with("findapp-test-cached-absence", &options).is_err());

    // ...until caching is bypassed.
    let uncached = options.clone().with_cached(false);
    let path = find_app_with("findapp-test-cached-absence", &uncached).expect("re-probed");
    assert_eq!(path, expected);
}
