pub mod config;
pub mod errors;
pub mod library;
pub mod logger;

use std::{path::PathBuf, time::Duration};

use errors::DirectoryError;

/// Get the directory cdcat keeps its configuration in.
///
/// On linux this is `$XDG_CONFIG_HOME/cdcat` (usually `~/.config/cdcat`).
///
/// # Errors
///
/// Returns an error if the platform's config directory could not be determined.
#[inline]
pub fn get_config_dir() -> Result<PathBuf, DirectoryError> {
    directories::ProjectDirs::from("", "", "cdcat")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(DirectoryError::Config)
}

/// Format a duration as `hh:mm:ss.mmm`.
#[must_use]
#[inline]
pub fn format_duration(duration: &Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let millis = duration.subsec_millis();

    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_str_eq;
    use rstest::rstest;

    #[rstest]
    #[case::zero(Duration::from_secs(0), "00:00:00.000")]
    #[case::millis(Duration::from_millis(1_250), "00:00:01.250")]
    #[case::minutes(Duration::from_secs(61), "00:01:01.000")]
    #[case::hours(Duration::from_secs(3 * 3600 + 25 * 60 + 7), "03:25:07.000")]
    fn test_format_duration(#[case] input: Duration, #[case] expected: &str) {
        assert_str_eq!(format_duration(&input), expected);
    }

    #[test]
    fn test_config_dir_is_cdcat_specific() {
        // CI machines may have no home directory, in which case the lookup fails
        if let Ok(dir) = get_config_dir() {
            assert!(dir.to_string_lossy().contains("cdcat"), "{}", dir.display());
        }
    }
}
