//! Partial-update field states.
//!
//! JSON update bodies distinguish three cases for a nullable column: the key
//! is absent (leave the column alone), the key is `null` (clear it), or the
//! key carries a value (replace it). `Option<T>` collapses the first two, so
//! nullable fields use [`Patch<T>`] and non-nullable ones use `Option<T>`
//! with [`non_null`].

use serde::{Deserialize, Deserializer};

/// Tri-state field of an update request.
///
/// Declare with `#[serde(default)]` so an absent key becomes `Missing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Missing,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Missing
    }
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }

    /// The replacement value, if one was sent
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    /// `None` when absent, otherwise the new column value
    pub fn into_update(self) -> Option<Option<T>> {
        match self {
            Patch::Missing => None,
            Patch::Null => Some(None),
            Patch::Value(v) => Some(Some(v)),
        }
    }

    /// Writes the patch into `target`; `Missing` leaves it untouched
    pub fn apply_to(self, target: &mut Option<T>) {
        if let Some(value) = self.into_update() {
            *target = value;
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

/// `deserialize_with` helper for optional, non-nullable update fields.
///
/// An absent key stays `None` through `#[serde(default)]`; an explicit
/// `null` is rejected instead of being read as "unchanged".
pub fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
