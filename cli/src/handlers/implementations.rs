use std::path::Path;

use cdcat_core::{
    config::LibrarySettings,
    library::{LoadReport, load_catalogue, save_catalogue},
};
use disc_catalogue::{Catalogue, Disc};

use super::{Command, CommandHandler, CombineArgs, printing};

/// Load a catalogue, telling the user on `stderr` about any duplicate records that were skipped.
fn load<W: std::fmt::Write>(
    path: &Path,
    settings: &LibrarySettings,
    stderr: &mut W,
) -> anyhow::Result<Catalogue> {
    let (catalogue, LoadReport { duplicates, .. }) =
        load_catalogue(path, settings.initial_capacity)?;
    if duplicates > 0 {
        writeln!(
            stderr,
            "Warning: skipped {duplicates} duplicate disc(s) in {}",
            path.display()
        )?;
    }
    Ok(catalogue)
}

/// Save the catalogue after a mutation, unless this is a dry run or nothing changed.
fn save_if_changed<W: std::fmt::Write>(
    catalogue: &Catalogue,
    settings: &LibrarySettings,
    changed: bool,
    dry_run: bool,
    stdout: &mut W,
) -> anyhow::Result<()> {
    if !changed {
        return Ok(());
    }
    if dry_run {
        writeln!(stdout, "Dry run, catalogue not saved")?;
    } else {
        save_catalogue(&settings.catalogue, catalogue)?;
        writeln!(stdout, "Saved catalogue to {}", settings.catalogue.display())?;
    }
    Ok(())
}

/// Build the disc for `insert`.
///
/// An empty title or genre is written as an empty field, which reads back as absent,
/// so it is stored as absent from the start.
pub(super) fn new_disc(
    album: &str,
    artist: &str,
    title: Option<&str>,
    year: Option<i32>,
    genre: Option<&str>,
) -> Disc {
    let mut disc = Disc::new(album, artist);
    if let Some(title) = title.filter(|s| !s.is_empty()) {
        disc = disc.with_title(title);
    }
    if let Some(year) = year {
        disc = disc.with_year(year);
    }
    if let Some(genre) = genre.filter(|s| !s.is_empty()) {
        disc = disc.with_genre(genre);
    }
    disc
}

impl CommandHandler for Command {
    type Output = anyhow::Result<()>;

    #[allow(clippy::too_many_lines)]
    fn handle<W1: std::fmt::Write, W2: std::fmt::Write>(
        &self,
        settings: &LibrarySettings,
        stdout: &mut W1,
        stderr: &mut W2,
    ) -> Self::Output {
        match self {
            Self::List => {
                let catalogue = load(&settings.catalogue, settings, stderr)?;
                Ok(write!(stdout, "{}", printing::catalogue(&catalogue)?)?)
            }
            Self::Count => {
                let catalogue = load(&settings.catalogue, settings, stderr)?;
                Ok(writeln!(stdout, "{}", printing::count(&catalogue)?)?)
            }
            Self::Find { album, artist } => {
                let catalogue = load(&settings.catalogue, settings, stderr)?;
                let disc = Disc::new(album.as_str(), artist.as_str());
                match catalogue.find(&disc) {
                    Some(index) => writeln!(stdout, "Found {disc} at index {index}")?,
                    None => writeln!(stdout, "{disc} not found")?,
                }
                Ok(())
            }
            Self::Insert {
                album,
                artist,
                title,
                year,
                genre,
                dry_run,
            } => {
                if album.is_empty() || artist.is_empty() {
                    anyhow::bail!("A disc needs both an album and an artist");
                }

                let mut catalogue = if settings.catalogue.exists() {
                    load(&settings.catalogue, settings, stderr)?
                } else {
                    log::info!(
                        "{} does not exist, starting a new catalogue",
                        settings.catalogue.display()
                    );
                    Catalogue::with_capacity(settings.initial_capacity)
                };

                let disc = new_disc(album, artist, title.as_deref(), *year, genre.as_deref());
                let message = disc.to_string();
                let inserted = catalogue.insert(disc);
                if inserted {
                    writeln!(stdout, "Inserted {message}")?;
                } else {
                    writeln!(stdout, "{message} is already in the catalogue")?;
                }
                save_if_changed(&catalogue, settings, inserted, *dry_run, stdout)
            }
            Self::Remove {
                album,
                artist,
                dry_run,
            } => {
                let mut catalogue = load(&settings.catalogue, settings, stderr)?;
                let disc = Disc::new(album.as_str(), artist.as_str());

                let removed = catalogue.remove(&disc);
                if removed {
                    writeln!(stdout, "Removed {disc}")?;
                } else {
                    writeln!(stdout, "{disc} not found")?;
                }
                save_if_changed(&catalogue, settings, removed, *dry_run, stdout)
            }
            Self::Boycott { artist, dry_run } => {
                let mut catalogue = load(&settings.catalogue, settings, stderr)?;
                let before = catalogue.count();

                let removed = catalogue.boycott(artist);
                if removed {
                    writeln!(
                        stdout,
                        "Removed {} disc(s) by {artist}",
                        before - catalogue.count()
                    )?;
                } else {
                    writeln!(stdout, "No discs by {artist}")?;
                }
                save_if_changed(&catalogue, settings, removed, *dry_run, stdout)
            }
            Self::Join(args) => combine(args, settings, Catalogue::join, stdout, stderr),
            Self::Common(args) => combine(args, settings, Catalogue::common, stdout, stderr),
            Self::Split(args) => combine(args, settings, Catalogue::split, stdout, stderr),
        }
    }
}

/// Apply `op` to the configured catalogue and `args.other`, then print or save the result.
fn combine<W1, W2, F>(
    args: &CombineArgs,
    settings: &LibrarySettings,
    op: F,
    stdout: &mut W1,
    stderr: &mut W2,
) -> anyhow::Result<()>
where
    W1: std::fmt::Write,
    W2: std::fmt::Write,
    F: Fn(&Catalogue, &Catalogue) -> Catalogue,
{
    let this = load(&settings.catalogue, settings, stderr)?;
    let other = load(&args.other, settings, stderr)?;

    let result = op(&this, &other);

    if let Some(output) = &args.output {
        save_catalogue(output, &result)?;
        writeln!(
            stdout,
            "Wrote {} disc(s) to {}",
            result.count(),
            output.display()
        )?;
    } else {
        write!(stdout, "{}", printing::catalogue(&result)?)?;
    }
    Ok(())
}
