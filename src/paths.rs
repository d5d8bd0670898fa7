//! Platform-specific filesystem path helpers.

use std::ffi::OsString;
use std::path::PathBuf;

/// Path to the debug log file.
///
/// This is located in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("adpage.log")
}

#[must_use]
#[cfg(not(windows))]
fn home_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("HOME").map(PathBuf::from)
}

#[must_use]
#[cfg(windows)]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("APPDATA").map(PathBuf::from)
}

#[must_use]
#[cfg(not(windows))]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("XDG_CONFIG_HOME").map(PathBuf::from).or_else(|| {
        home_dir_from(var_os).map(|home| {
            #[cfg(target_os = "macos")]
            {
                home.join("Library").join("Application Support")
            }

            #[cfg(not(target_os = "macos"))]
            {
                home.join(".config")
            }
        })
    })
}

/// Resolve the per-user configuration directory for the current platform.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    config_dir_from(&mut var_os)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_suffix() {
        let path = log_path();
        assert!(path.ends_with("adpage.log"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_config_dir_from_prefers_xdg_config_home() {
        let mut env = |key: &'static str| {
            (key == "XDG_CONFIG_HOME").then(|| OsString::from("/tmp/adpage-xdg"))
        };

        assert_eq!(
            config_dir_from(&mut env),
            Some(PathBuf::from("/tmp/adpage-xdg"))
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_config_dir_from_falls_back_to_home() {
        let mut env =
            |key: &'static str| (key == "HOME").then(|| OsString::from("/tmp/adpage-home"));

        #[cfg(target_os = "macos")]
        let expected = PathBuf::from("/tmp/adpage-home")
            .join("Library")
            .join("Application Support");

        #[cfg(not(target_os = "macos"))]
        let expected = PathBuf::from("/tmp/adpage-home").join(".config");

        assert_eq!(config_dir_from(&mut env), Some(expected));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_config_dir_from_none_when_no_env() {
        let mut env = |_: &'static str| None::<OsString>;
        assert_eq!(config_dir_from(&mut env), None);
    }
}
