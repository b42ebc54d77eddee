//----------------------------------------------------------------------------------------- std lib
use std::io::Write;
use std::time::Instant;
//--------------------------------------------------------------------------------- other libraries
use env_logger::fmt::style::Style;
use log::info;
use once_cell::sync::Lazy;

// This will get initialized below.
/// Returns the init [`Instant`]
pub static INIT_INSTANT: Lazy<Instant> = Lazy::new(Instant::now);

/// The filter used when `RUST_LOG` isn't set.
///
/// Turns off all library crate logs except for cdcat's own crates.
#[must_use]
#[inline]
pub fn default_filters(filter: log::LevelFilter) -> String {
    format!("off,cdcat={filter},disc_catalogue={filter}")
}

//---------------------------------------------------------------------------------------------------- Logger init function
#[allow(clippy::module_name_repetitions)]
/// Initializes the logger.
///
/// This enables console logging on all the internals of `cdcat`.
///
/// Functionality is provided by [`log`].
///
/// The levels are:
/// - ERROR
/// - WARN
/// - INFO
/// - DEBUG
/// - TRACE
///
/// # Panics
/// This must only be called _once_.
#[cfg(not(tarpaulin_include))]
#[inline]
pub fn init_logger(filter: log::LevelFilter) {
    // Initialize timer.
    let now = Lazy::force(&INIT_INSTANT);

    let env = std::env::var("RUST_LOG").unwrap_or_default();
    let filters = if env.is_empty() {
        default_filters(filter)
    } else {
        env.clone()
    };

    let dimmed = Style::new().dimmed();

    env_logger::Builder::new()
        .format(move |buf, record| {
            let level_style = buf.default_level_style(record.level()).bold();
            let level = match record.level() {
                log::Level::Debug => "D",
                log::Level::Trace => "T",
                log::Level::Info => "I",
                log::Level::Warn => "W",
                log::Level::Error => "E",
            };
            writeln!(
                buf,
                // Longest PATH in the repo: `cli/src/handlers/implementations.rs` - `35` characters
                // Longest file in the repo: `catalogue/src/lib.rs`                - `3` digits
                //
                //      Longest PATH ---|        |--- Longest file
                //                      |        |
                //                      v        v
                "| {level_style}{level}{level_style:#} | {dimmed}{}{dimmed:#} | {dimmed}{: >35} @ {: <3}{dimmed:#} | {}",
                crate::format_duration(&now.elapsed()),
                record.file_static().unwrap_or("???"),
                record.line().unwrap_or(0),
                record.args(),
            )
        })
        .write_style(env_logger::WriteStyle::Auto)
        .parse_filters(&filters)
        .init();

    if env.is_empty() {
        info!("Log Level (Flag) ... {filter}");
    } else {
        info!("Log Level (RUST_LOG) ... {env}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_str_eq;
    use rstest::rstest;

    #[rstest]
    #[case(log::LevelFilter::Info, "off,cdcat=INFO,disc_catalogue=INFO")]
    #[case(log::LevelFilter::Trace, "off,cdcat=TRACE,disc_catalogue=TRACE")]
    #[case(log::LevelFilter::Off, "off,cdcat=OFF,disc_catalogue=OFF")]
    fn test_default_filters(#[case] filter: log::LevelFilter, #[case] expected: &str) {
        assert_str_eq!(default_filters(filter), expected);
    }
}
