use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{CatalogError, Item};

/// The fixed, ordered list of items shown by a carousel.
///
/// Cloning is cheap: items are shared behind an `Arc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    items: Arc<[Item]>,
}

impl Catalog {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().collect::<Vec<_>>().into(),
        }
    }

    /// Builds a catalog, rejecting repeated ids (ids key the rendered cards).
    pub fn try_new(items: impl IntoIterator<Item = Item>) -> Result<Self, CatalogError> {
        let catalog = Self::new(items);
        for (i, item) in catalog.items.iter().enumerate() {
            if catalog.items[..i].iter().any(|prev| prev.id == item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(catalog)
    }

    /// Parses a JSON array of `{ "id", "title", "videoFileName" }` records.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::try_new(items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Index of the item with the given id.
    pub fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
