use crate::outcome::core::ParseOutcome;

/// Borrowing iterator over the parsed value (0 or 1 items).
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Consuming iterator over the parsed value (0 or 1 items).
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T, E> IntoIterator for ParseOutcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            ParseOutcome::Success(value) => IntoIter { inner: Some(value) },
            ParseOutcome::Failure(_) => IntoIter { inner: None },
        }
    }
}

impl<'a, T, E> IntoIterator for &'a ParseOutcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> ParseOutcome<T, E> {
    /// Iterates over the parsed value: one item for a success, none for a
    /// failure.
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            ParseOutcome::Success(value) => Iter { inner: Some(value) },
            ParseOutcome::Failure(_) => Iter { inner: None },
        }
    }

    /// Iterates over the diagnostics in detection order. Empty for a success.
    pub fn iter_errors(&self) -> impl Iterator<Item = &E> {
        self.errors().iter()
    }
}
