use std::{fmt, ops::Deref};

/// A render key of a committed record.
///
/// Keys are unique within one collection and never reused. They only keep list
/// rendering stable; operations still address records by their current index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryKey(u64);

impl EntryKey {
    /// Returns the key as `u64`.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryKey {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A committed record with its render key.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    key: EntryKey,
    value: T,
}

impl<T> Entry<T> {
    /// Creates a new instance.
    #[inline]
    pub(super) fn new(key: u64, value: T) -> Self {
        Self {
            key: EntryKey(key),
            value,
        }
    }

    /// Returns the render key.
    #[inline]
    pub fn key(&self) -> EntryKey {
        self.key
    }

    /// Returns a reference to the record.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the record.
    #[inline]
    pub(super) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the record, returning the old one.
    #[inline]
    pub(super) fn replace(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// Consumes `self` and returns the record.
    #[inline]
    pub(super) fn into_value(self) -> T {
        self.value
    }
}

impl<T> Deref for Entry<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
