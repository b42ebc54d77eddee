//! Loading and saving catalogues as `.csv` files.
//!
//! A catalogue file has a header row naming its columns, `album` and `artist` are required,
//! `title`, `year`, and `genre` may be left empty or left out entirely:
//!
//! ```csv
//! album,artist,title,year,genre
//! Blue,Joni Mitchell,,1971,Folk
//! Kid A,Radiohead,Idioteque,2000,
//! ```

use std::path::Path;

use csv::{Reader, Writer};
use disc_catalogue::{Catalogue, Disc};
use serde::Deserialize;

use crate::errors::LibraryError;

/// The header row written to every catalogue file.
pub const HEADER: [&str; 5] = ["album", "artist", "title", "year", "genre"];

pub const EXTENSION: &str = "csv";

#[derive(Debug, Deserialize)]
struct DiscRecord {
    album: String,
    artist: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    year: Option<String>,
    #[serde(default)]
    genre: Option<String>,
}

impl DiscRecord {
    /// `line` is the 1-based record number, used for error reporting.
    fn into_disc(self, line: usize) -> Result<Disc, LibraryError> {
        if self.album.is_empty() || self.artist.is_empty() {
            return Err(LibraryError::MissingKey { line });
        }

        let mut disc = Disc::new(self.album, self.artist);
        if let Some(title) = self.title.filter(|s| !s.is_empty()) {
            disc = disc.with_title(title);
        }
        if let Some(year) = self.year.filter(|s| !s.trim().is_empty()) {
            let parsed: i32 = year.trim().parse().map_err(|_| LibraryError::InvalidYear {
                line,
                value: year.clone(),
            })?;
            disc = disc.with_year(parsed);
        }
        if let Some(genre) = self.genre.filter(|s| !s.is_empty()) {
            disc = disc.with_genre(genre);
        }
        Ok(disc)
    }
}

/// What happened while loading a catalogue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// How many records made it into the catalogue.
    pub loaded: usize,
    /// How many records were skipped because an earlier record had the same album and artist.
    pub duplicates: usize,
}

/// Validate a file path
///
/// # Arguments
///
/// * `path` - The path to validate
/// * `extension` - The expected file extension
/// * `exists` - Whether the file should exist or not
///   * if true, the file must exist
///   * if false, the file may not exist but will be overwritten if it does
///
/// # Errors
///
/// Returns an error describing the first check that failed.
#[inline]
pub fn validate_file_path(path: &Path, extension: &str, exists: bool) -> Result<(), LibraryError> {
    if path.is_dir() {
        log::warn!("Path is a directory: {}", path.display());
        Err(LibraryError::PathIsDirectory(path.to_path_buf()))
    } else if path.extension().is_none_or(|ext| ext != extension) {
        log::warn!(
            "Path has the wrong extension (wanted {extension}): {}",
            path.display()
        );
        Err(LibraryError::WrongExtension(
            path.to_path_buf(),
            extension.to_string(),
        ))
    } else if exists && !path.exists() {
        log::warn!("Path does not exist: {}", path.display());
        Err(LibraryError::FileNotFound(path.to_path_buf()))
    } else {
        Ok(())
    }
}

/// Read a catalogue from the given `csv::Reader`.
///
/// Records are inserted in file order, so when two records share an album and artist the first
/// one wins and the second is counted as a duplicate.
///
/// # Errors
///
/// Fails on malformed csv, a record without an album or artist, or a year that isn't a number.
#[inline]
pub fn read_catalogue<R: std::io::Read>(
    mut reader: Reader<R>,
    initial_capacity: usize,
) -> Result<(Catalogue, LoadReport), LibraryError> {
    let mut catalogue = Catalogue::with_capacity(initial_capacity);
    let mut report = LoadReport::default();

    for (i, result) in reader.deserialize::<DiscRecord>().enumerate() {
        let disc = result?.into_disc(i + 1)?;
        if catalogue.insert(disc) {
            report.loaded += 1;
        } else {
            log::warn!("Skipping duplicate disc on record {}", i + 1);
            report.duplicates += 1;
        }
    }

    Ok((catalogue, report))
}

/// Write the given catalogue with the given `csv::Writer`, header first.
///
/// # Errors
///
/// Fails if the underlying writer does, or with [`LibraryError::MissingKey`] if a disc has an
/// empty album or artist, since [`read_catalogue`] could never load that record back.
#[inline]
pub fn write_catalogue<W: std::io::Write>(
    catalogue: &Catalogue,
    mut writer: Writer<W>,
) -> Result<(), LibraryError> {
    check_keys(catalogue)?;

    writer.write_record(HEADER)?;
    for disc in catalogue {
        let year = disc.year.map(|year| year.to_string()).unwrap_or_default();
        writer.write_record([
            &*disc.album,
            &*disc.artist,
            disc.title.as_deref().unwrap_or_default(),
            year.as_str(),
            disc.genre.as_deref().unwrap_or_default(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}

/// Every disc must have an album and an artist to be written, `line` is the record it would be.
fn check_keys(catalogue: &Catalogue) -> Result<(), LibraryError> {
    match catalogue
        .iter()
        .position(|disc| disc.album.is_empty() || disc.artist.is_empty())
    {
        Some(i) => {
            log::warn!("Refusing to write a disc without an album or artist as record {}", i + 1);
            Err(LibraryError::MissingKey { line: i + 1 })
        }
        None => Ok(()),
    }
}

/// Load the catalogue stored at `path`.
///
/// # Errors
///
/// See [`validate_file_path`] and [`read_catalogue`].
#[inline]
pub fn load_catalogue(
    path: &Path,
    initial_capacity: usize,
) -> Result<(Catalogue, LoadReport), LibraryError> {
    validate_file_path(path, EXTENSION, true)?;

    let (catalogue, report) = read_catalogue(Reader::from_path(path)?, initial_capacity)?;
    log::info!(
        "Loaded {} disc(s) from {} ({} duplicate(s) skipped)",
        report.loaded,
        path.display(),
        report.duplicates
    );
    Ok((catalogue, report))
}

/// Save `catalogue` to `path`, replacing whatever was there.
///
/// # Errors
///
/// See [`validate_file_path`] and [`write_catalogue`].
#[inline]
pub fn save_catalogue(path: &Path, catalogue: &Catalogue) -> Result<(), LibraryError> {
    validate_file_path(path, EXTENSION, false)?;
    // before the file is truncated
    check_keys(catalogue)?;

    write_catalogue(catalogue, Writer::from_path(path)?)?;
    log::info!("Saved {} disc(s) to {}", catalogue.count(), path.display());
    Ok(())
}
