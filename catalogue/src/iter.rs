use crate::{Catalogue, Disc};

/// Collects discs into a new [`Catalogue`], dropping any that share a key with an earlier one.
impl FromIterator<Disc> for Catalogue {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Disc>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

/// Inserts every disc, so duplicates are skipped just like with [`Catalogue::insert`].
impl Extend<Disc> for Catalogue {
    #[inline]
    fn extend<I: IntoIterator<Item = Disc>>(&mut self, iter: I) {
        for disc in iter {
            self.insert(disc);
        }
    }
}

#[allow(clippy::module_name_repetitions)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Disc>,
}

impl Catalogue {
    /// Returns an iterator over the discs in the catalogue, in storage order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.as_slice().iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type IntoIter = Iter<'a>;
    type Item = &'a Disc;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Disc;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// A consuming iterator over the discs in a [`Catalogue`].
#[allow(clippy::module_name_repetitions)]
pub struct IntoIter {
    inner: std::vec::IntoIter<Disc>,
}

impl IntoIterator for Catalogue {
    type IntoIter = IntoIter;
    type Item = Disc;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: Vec::from(self).into_iter(),
        }
    }
}

impl Iterator for IntoIter {
    type Item = Disc;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {}
