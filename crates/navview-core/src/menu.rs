#![forbid(unsafe_code)]

//! Ordered menu-item collection with stable identities.
//!
//! Items get a collection-scoped [`ItemId`] on insertion. Selection is held by
//! the view facade as a *weak* reference: the collection never knows which
//! item is selected, and resolving a stale id simply fails the lookup instead
//! of erroring.

use std::fmt;

/// Stable identifier for a menu item.
///
/// `0` is reserved/invalid so IDs are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ItemId(u64);

impl ItemId {
    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// A single navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct MenuItem {
    id: ItemId,
    label: String,
    tag: Option<String>,
}

impl MenuItem {
    /// Identity within the owning collection.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Visible label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Optional host tag (e.g. navigation target).
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

/// Ordered collection of menu items with monotone id allocation.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct MenuItems {
    items: Vec<MenuItem>,
    next_id: u64,
}

impl MenuItems {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> ItemId {
        self.next_id += 1;
        ItemId(self.next_id)
    }

    /// Append an item, returning its new id.
    pub fn push(&mut self, label: impl Into<String>) -> ItemId {
        let id = self.allocate();
        self.items.push(MenuItem {
            id,
            label: label.into(),
            tag: None,
        });
        id
    }

    /// Append an item carrying a host tag, returning its new id.
    pub fn push_tagged(&mut self, label: impl Into<String>, tag: impl Into<String>) -> ItemId {
        let id = self.allocate();
        self.items.push(MenuItem {
            id,
            label: label.into(),
            tag: Some(tag.into()),
        });
        id
    }

    /// Insert an item at `index` (clamped to the collection length),
    /// returning its new id.
    pub fn insert(&mut self, index: usize, label: impl Into<String>) -> ItemId {
        let id = self.allocate();
        let index = index.min(self.items.len());
        self.items.insert(
            index,
            MenuItem {
                id,
                label: label.into(),
                tag: None,
            },
        );
        id
    }

    /// Remove an item by id. Returns the removed item, or `None` if the id
    /// is not present.
    pub fn remove(&mut self, id: ItemId) -> Option<MenuItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Remove every item. Allocated ids are never reused.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether the collection contains `id`.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Position of `id` in display order.
    #[must_use]
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }
}
