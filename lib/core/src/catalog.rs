use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A catalog entry: a title plus the raw tag text describing it.
///
/// The item's identity is its row index in the [`Catalog`]; titles are
/// only a human-facing lookup key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub index: usize,
    pub title: String,
    /// Raw, unnormalized tag text. May be empty.
    pub tags: String,
}

impl Item {
    #[inline]
    #[must_use]
    pub fn new(index: usize, title: impl Into<String>, tags: impl Into<String>) -> Self {
        Self {
            index,
            title: title.into(),
            tags: tags.into(),
        }
    }
}

/// An ordered, immutable snapshot of catalog items.
///
/// Indices are assigned in insertion order (0..N-1) and stay stable for
/// the lifetime of any session built from this catalog. Duplicate titles
/// resolve to the first occurrence.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    by_title: AHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from `(title, tags)` records in order.
    #[must_use]
    pub fn from_records<T, U>(records: impl IntoIterator<Item = (T, U)>) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        let items: Vec<Item> = records
            .into_iter()
            .enumerate()
            .map(|(index, (title, tags))| Item::new(index, title, tags))
            .collect();

        let mut by_title = AHashMap::with_capacity(items.len());
        for item in &items {
            by_title.entry(item.title.clone()).or_insert(item.index);
        }

        Self { items, by_title }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Look up an item by exact title.
    pub fn find_by_title(&self, title: &str) -> Result<&Item> {
        self.by_title
            .get(title)
            .map(|&index| &self.items[index])
            .ok_or_else(|| Error::TitleNotFound(title.to_string()))
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_insertion_order() {
        let catalog = Catalog::from_records([("a", "x"), ("b", "y"), ("c", "z")]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(1).unwrap().title, "b");
        assert_eq!(catalog.get(1).unwrap().index, 1);
    }

    #[test]
    fn test_find_by_title() {
        let catalog = Catalog::from_records([("Inception", "dream heist"), ("Heat", "crime la")]);
        let item = catalog.find_by_title("Heat").unwrap();
        assert_eq!(item.index, 1);

        let err = catalog.find_by_title("Tenet").unwrap_err();
        assert!(matches!(err, Error::TitleNotFound(_)));
    }

    #[test]
    fn test_duplicate_titles_resolve_to_first() {
        let catalog = Catalog::from_records([("dup", "first"), ("dup", "second")]);
        assert_eq!(catalog.find_by_title("dup").unwrap().tags, "first");
    }
}
