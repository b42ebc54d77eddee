//! Handles the configuration of cdcat.
//!
//! this module is responsible for parsing the Cdcat.toml file, layering environment variables
//! and cli arguments on top of it.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use std::{path::PathBuf, str::FromStr};

pub static DEFAULT_CONFIG: &str = include_str!("../Cdcat.toml");

#[derive(Clone, Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    /// Where catalogues come from, and how they are created.
    #[serde(default)]
    pub library: LibrarySettings,
    /// Settings for the CLI
    #[serde(default)]
    pub cli: CliSettings,
}

impl Settings {
    /// Load settings from the config file, environment variables, and CLI arguments.
    ///
    /// The environment variables are prefixed with `CDCAT_`, and nested keys are separated by `__`
    /// (e.g. `CDCAT_LIBRARY__INITIAL_CAPACITY`).
    ///
    /// # Arguments
    ///
    /// * `config` - path to the config file
    /// * `catalogue` - overrides `library.catalogue`
    /// * `log_level` - overrides `cli.log_level`
    ///
    /// # Errors
    ///
    /// This function will return an error if the config file is not found or if the config file is
    /// invalid.
    #[inline]
    pub fn init(
        config: PathBuf,
        catalogue: Option<PathBuf>,
        log_level: Option<log::LevelFilter>,
    ) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::from(config))
            .add_source(
                Environment::with_prefix("CDCAT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Self = s.try_deserialize()?;

        if let Some(catalogue) = catalogue {
            settings.library.catalogue = catalogue;
        }
        settings.library.catalogue = shellexpand::tilde(&settings.library.catalogue.to_string_lossy())
            .into_owned()
            .into();

        if let Some(log_level) = log_level {
            settings.cli.log_level = log_level;
        }

        Ok(settings)
    }

    /// Get the (default) path to the config file.
    /// If the config file does not exist at this path, it will be created with the default config.
    ///
    /// See [`crate::get_config_dir`] for more information about where this default path is located.
    ///
    /// # Errors
    ///
    /// This function will return an error if the system config directory (e.g., `~/.config` on linux) could not be found, or if the config file was missing and could not be created.
    #[inline]
    pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
        match crate::get_config_dir() {
            Ok(config_dir) => {
                // if the config directory does not exist, create it
                if !config_dir.exists() {
                    std::fs::create_dir_all(&config_dir)?;
                }
                let config_file = config_dir.join("Cdcat.toml");

                if !config_file.exists() {
                    std::fs::write(&config_file, DEFAULT_CONFIG)?;
                }

                Ok(config_file)
            }
            Err(e) => {
                log::error!("{e}");
                Err(std::io::Error::new(std::io::ErrorKind::NotFound, e))
            }
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LibrarySettings {
    /// The catalogue file to use when none is given on the command line.
    /// Default is `~/Music/catalogue.csv`.
    #[serde(default = "default_catalogue")]
    pub catalogue: PathBuf,
    /// The capacity catalogues are created with.
    /// Default is 4.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

fn default_catalogue() -> PathBuf {
    shellexpand::tilde("~/Music/catalogue.csv").into_owned().into()
}

const fn default_initial_capacity() -> usize {
    disc_catalogue::DEFAULT_CAPACITY
}

impl Default for LibrarySettings {
    #[inline]
    fn default() -> Self {
        Self {
            catalogue: default_catalogue(),
            initial_capacity: default_initial_capacity(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CliSettings {
    /// What level of logging to use.
    /// Default is "info".
    #[serde(default = "default_log_level")]
    #[serde(deserialize_with = "de_log_level")]
    pub log_level: log::LevelFilter,
}

fn de_log_level<'de, D>(deserializer: D) -> Result<log::LevelFilter, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(log::LevelFilter::from_str(&s).unwrap_or_else(|_| default_log_level()))
}

const fn default_log_level() -> log::LevelFilter {
    log::LevelFilter::Info
}

impl Default for CliSettings {
    #[inline]
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("debug", log::LevelFilter::Debug)]
    #[case("TRACE", log::LevelFilter::Trace)]
    #[case("off", log::LevelFilter::Off)]
    #[case("loud", log::LevelFilter::Info)]
    #[case("", log::LevelFilter::Info)]
    fn test_de_log_level(#[case] input: &str, #[case] expected: log::LevelFilter) {
        use serde::de::IntoDeserializer;
        let deserializer: serde::de::value::StrDeserializer<'_, serde::de::value::Error> =
            input.into_deserializer();
        let result = de_log_level(deserializer);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), expected);
    }

    #[test]
    fn test_init_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[library]
catalogue = "/Music/discs.csv"
initial_capacity = 16

[cli]
log_level = "debug"
            "#,
        )
        .unwrap();

        let expected = Settings {
            library: LibrarySettings {
                catalogue: "/Music/discs.csv".into(),
                initial_capacity: 16,
            },
            cli: CliSettings {
                log_level: log::LevelFilter::Debug,
            },
        };

        let settings = Settings::init(config_path, None, None).unwrap();

        assert_eq!(settings, expected);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "").unwrap();

        let settings = Settings::init(config_path, None, None).unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_cli_overrides() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, DEFAULT_CONFIG).unwrap();

        let settings = Settings::init(
            config_path,
            Some("/elsewhere/discs.csv".into()),
            Some(log::LevelFilter::Warn),
        )
        .unwrap();

        assert_eq!(settings.library.catalogue, PathBuf::from("/elsewhere/discs.csv"));
        assert_eq!(settings.cli.log_level, log::LevelFilter::Warn);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("nope.toml");

        assert!(Settings::init(config_path, None, None).is_err());
    }

    #[test]
    fn test_default_config_works() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, DEFAULT_CONFIG).unwrap();

        let settings = Settings::init(config_path, None, None);

        assert!(settings.is_ok(), "Error: {:?}", settings.err());
        assert_eq!(settings.unwrap(), Settings::default());
    }
}
