#![deny(clippy::missing_inline_in_public_items)]
//! A set of music [`Disc`]s, unique on their `(album, artist)` pair.
//!
//! [`Catalogue`] keeps its discs in a plain vector and finds them with a linear scan.
//! Removal swaps the last entry into the freed slot, so the order of a catalogue's discs
//! is not stable and should not be relied on; only membership is.

mod disc;
mod iter;

pub use disc::Disc;
pub use iter::{IntoIter, Iter};

/// The capacity of a freshly created [`Catalogue`].
pub const DEFAULT_CAPACITY: usize = 4;

/// An unordered collection of unique [`Disc`]s.
///
/// Besides the number of discs it holds, a [`Catalogue`] tracks its own capacity.
/// The capacity starts at [`DEFAULT_CAPACITY`], doubles whenever an insert would exceed it,
/// and never shrinks.
#[derive(Debug)]
pub struct Catalogue {
    items: Vec<Disc>,
    capacity: usize,
}

impl Default for Catalogue {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Catalogue {
    /// Create an empty [`Catalogue`] with a capacity of [`DEFAULT_CAPACITY`].
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty [`Catalogue`] with the given capacity.
    ///
    /// A capacity of 0 is bumped to 1, since it could never be doubled.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of discs in the catalogue.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of discs the catalogue can hold before it has to grow.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the index of the disc with the same album and artist as `disc`,
    /// or `None` if there is no such disc.
    #[inline]
    #[must_use]
    pub fn find(&self, disc: &Disc) -> Option<usize> {
        self.items.iter().position(|item| item.key() == disc.key())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, disc: &Disc) -> bool {
        self.find(disc).is_some()
    }

    /// Returns the disc at `index`, or `None` if the index is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Disc> {
        self.items.get(index)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Disc] {
        &self.items
    }

    /// Insert `disc` into the catalogue.
    ///
    /// Returns `false`, leaving the catalogue untouched, if a disc with the same album and
    /// artist is already present. Otherwise the disc is appended, doubling the capacity
    /// first if the catalogue is full, and `true` is returned.
    #[inline]
    pub fn insert(&mut self, disc: Disc) -> bool {
        if self.contains(&disc) {
            log::trace!("Rejected duplicate disc {disc}");
            return false;
        }

        if self.items.len() == self.capacity {
            self.grow();
        }
        self.items.push(disc);
        true
    }

    /// Remove the disc with the same album and artist as `disc`.
    ///
    /// The last disc in the catalogue is moved into the freed slot.
    /// Returns `false` if no such disc was found.
    #[inline]
    pub fn remove(&mut self, disc: &Disc) -> bool {
        match self.find(disc) {
            Some(index) => {
                self.items.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every disc by `artist`.
    ///
    /// Returns `true` if at least one disc was removed.
    #[inline]
    pub fn boycott(&mut self, artist: &str) -> bool {
        let before = self.items.len();

        let mut index = 0;
        while index < self.items.len() {
            if self.items[index].is_by(artist) {
                // the disc swapped in from the end may be by the same artist, so don't advance
                self.items.swap_remove(index);
            } else {
                index += 1;
            }
        }

        let removed = before - self.items.len();
        log::trace!("Boycott of {artist} removed {removed} disc(s)");
        removed > 0
    }

    /// The union of two catalogues.
    ///
    /// The result starts as a copy of `other`, then every disc of `self` is inserted into it.
    #[inline]
    #[must_use]
    pub fn join(&self, other: &Self) -> Self {
        let mut joined = other.clone();
        for disc in self {
            joined.insert(disc.clone());
        }
        joined
    }

    /// The intersection of two catalogues.
    ///
    /// Discs are taken from `other`, so where the two sides disagree on passenger fields,
    /// `other`'s values win.
    #[inline]
    #[must_use]
    pub fn common(&self, other: &Self) -> Self {
        let mut common = Self::new();
        for disc in other.iter().filter(|disc| self.contains(disc)) {
            common.insert(disc.clone());
        }
        common
    }

    /// The discs of `self` that are not in `other`.
    ///
    /// This is not the symmetric difference: discs only in `other` never appear in the result.
    #[inline]
    #[must_use]
    pub fn split(&self, other: &Self) -> Self {
        let mut split = Self::new();
        for disc in self {
            split.insert(disc.clone());
        }
        for disc in other {
            split.remove(disc);
        }
        split
    }

    fn grow(&mut self) {
        let capacity = self.capacity.saturating_mul(2);
        log::trace!("Growing catalogue from {} to {capacity}", self.capacity);
        self.items.reserve_exact(capacity - self.items.len());
        self.capacity = capacity;
    }
}

impl Clone for Catalogue {
    /// A deep copy with the same capacity and the same discs in the same positions.
    #[inline]
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl From<Catalogue> for Vec<Disc> {
    #[inline]
    fn from(value: Catalogue) -> Self {
        value.items
    }
}
