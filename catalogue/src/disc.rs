use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// A single music disc.
///
/// A [`Disc`] is identified by its `album` and `artist`, compared byte-wise (so case-sensitive).
/// The remaining fields are passengers: they are carried around but never take part in equality,
/// hashing, or any [`crate::Catalogue`] lookup.
#[derive(Clone, Debug)]
pub struct Disc {
    /// Title of the album this disc belongs to.
    pub album: Arc<str>,
    /// Artist credited on the disc.
    pub artist: Arc<str>,
    /// Free-form title, e.g. a featured track or an edition name.
    pub title: Option<Arc<str>>,
    /// Release year.
    pub year: Option<i32>,
    pub genre: Option<Arc<str>>,
}

impl Disc {
    /// Create a new [`Disc`] with only its identifying fields set.
    #[inline]
    #[must_use]
    pub fn new(album: impl Into<Arc<str>>, artist: impl Into<Arc<str>>) -> Self {
        Self {
            album: album.into(),
            artist: artist.into(),
            title: None,
            year: None,
            genre: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<Arc<str>>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<Arc<str>>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// The `(album, artist)` pair that identifies this [`Disc`].
    #[inline]
    #[must_use]
    pub fn key(&self) -> (&str, &str) {
        (&self.album, &self.artist)
    }

    /// Returns `true` if this disc is credited to `artist`.
    #[inline]
    #[must_use]
    pub fn is_by(&self, artist: &str) -> bool {
        &*self.artist == artist
    }
}

// equality and hashing only look at the key
impl PartialEq for Disc {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Disc {}

impl Hash for Disc {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Disc {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" by {}", self.album, self.artist)
    }
}
