//! Bounded, append-only entry lists.
//!
//! A list starts with one zero-valued entry, grows one entry at a time up to the
//! entry type's capacity and never shrinks or reorders. Adding at capacity is a
//! no-op, not an error.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::FormError;
use crate::validation::rules::ValidatorKind;

/// A repeatable resume entry (project, experience).
pub trait Entry: Default + Clone {
    /// Maximum number of entries a list of this type may hold.
    const CAPACITY: usize;
    type Field: Copy + std::fmt::Debug + 'static;
    /// Fields that carry a format rule, checked in this order.
    const VALIDATED_FIELDS: &'static [Self::Field];

    fn get(&self, field: Self::Field) -> &str;
    fn set(&mut self, field: Self::Field, value: String);
    /// The format rule for `field`; `None` for free text.
    fn validator(field: Self::Field) -> Option<ValidatorKind>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedList<T> {
    items: Vec<T>,
}

impl<T: Entry> BoundedList<T> {
    pub fn new() -> Self {
        Self {
            items: vec![T::default()],
        }
    }

    pub fn capacity(&self) -> usize {
        T::CAPACITY
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for lists built through this API; kept for slice parity.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= T::CAPACITY
    }

    /// Appends a zero-valued entry. Returns false (and changes nothing) at capacity.
    pub fn push_default(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(T::default());
        true
    }

    /// Replaces one field of the entry at `index`.
    ///
    /// Returns false when `index` is out of range; the list is left untouched.
    pub fn update(&mut self, index: usize, field: T::Field, value: impl Into<String>) -> bool {
        match self.items.get_mut(index) {
            Some(entry) => {
                entry.set(field, value.into());
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Direct mutable access to an entry, bypassing change tracking.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Entry> Default for BoundedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entry> TryFrom<Vec<T>> for BoundedList<T> {
    type Error = FormError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        if items.is_empty() {
            return Err(FormError::EmptyCollection);
        }
        if items.len() > T::CAPACITY {
            return Err(FormError::OverCapacity {
                len: items.len(),
                capacity: T::CAPACITY,
            });
        }
        Ok(Self { items })
    }
}

impl<'a, T> IntoIterator for &'a BoundedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for BoundedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: Entry + Deserialize<'de>> Deserialize<'de> for BoundedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::try_from(items).map_err(serde::de::Error::custom)
    }
}
