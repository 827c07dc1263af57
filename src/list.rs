//! Ordered, titled collection of todo items.
//!
//! [`ItemList`] keeps items in insertion order and exposes sequence-style
//! access (`first`, `last`, `shift`, `pop`), index-based mutation and
//! non-mutating selection. Every index-based operation validates the index
//! before touching the list, so a failed call leaves the list unchanged.

use std::fmt;
use std::ops::ShlAssign;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::HEADER_DECORATION;
use crate::error::{ListError, Result};
use crate::icons::IconService;
use crate::item::Item;

/// A named list of todo items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList {
    title: String,
    #[serde(default)]
    items: Vec<Item>,
}

impl ItemList {
    /// Creates an empty list.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Title shown in the header line.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends an item and returns the list for chaining.
    pub fn add(&mut self, item: Item) -> &mut Self {
        log::debug!("{}: adding '{}'", self.title, item.title());
        self.items.push(item);
        self
    }

    /// Appends a dynamically typed value, which must describe an item.
    ///
    /// Anything other than an object with a string `title` is rejected with
    /// [`ListError::TypeMismatch`] and the list is left untouched.
    pub fn add_value(&mut self, value: Value) -> Result<&mut Self> {
        match Item::try_from(value) {
            Ok(item) => Ok(self.add(item)),
            Err(e) => {
                log::warn!("{}: rejected value: {}", self.title, e);
                Err(e)
            }
        }
    }

    /// Number of items.
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Alias of [`size`](Self::size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item, or `None` when empty.
    #[must_use]
    pub fn first(&self) -> Option<&Item> {
        self.items.first()
    }

    /// Last item, or `None` when empty.
    #[must_use]
    pub fn last(&self) -> Option<&Item> {
        self.items.last()
    }

    /// Copies the items into a new vector in list order.
    #[must_use]
    pub fn to_a(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Removes and returns the first item.
    pub fn shift(&mut self) -> Result<Item> {
        if self.items.is_empty() {
            return Err(self.out_of_range(0));
        }
        let item = self.items.remove(0);
        log::debug!("{}: shifted '{}'", self.title, item.title());
        Ok(item)
    }

    /// Removes and returns the last item.
    pub fn pop(&mut self) -> Result<Item> {
        let item = self.items.pop().ok_or_else(|| self.out_of_range(0))?;
        log::debug!("{}: popped '{}'", self.title, item.title());
        Ok(item)
    }

    /// True when every item is done. An empty list counts as done.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.items.iter().all(Item::is_done)
    }

    /// Item at `index`; fails with `OutOfRange` when `index >= size`.
    pub fn item_at(&self, index: usize) -> Result<&Item> {
        self.check_index(index)?;
        Ok(&self.items[index])
    }

    /// Mutable item at `index`, with the same bounds check as [`item_at`](Self::item_at).
    pub fn item_at_mut(&mut self, index: usize) -> Result<&mut Item> {
        self.check_index(index)?;
        Ok(&mut self.items[index])
    }

    /// Marks the item at `index` done.
    pub fn mark_done_at(&mut self, index: usize) -> Result<()> {
        let item = self.item_at_mut(index)?;
        item.mark_done();
        log::debug!("{}: marked item {} done", self.title, index);
        Ok(())
    }

    /// Marks the item at `index` undone.
    pub fn mark_undone_at(&mut self, index: usize) -> Result<()> {
        let item = self.item_at_mut(index)?;
        item.mark_undone();
        log::debug!("{}: marked item {} undone", self.title, index);
        Ok(())
    }

    /// Marks every item done.
    pub fn mark_all_done(&mut self) -> &mut Self {
        self.items.iter_mut().for_each(Item::mark_done);
        log::debug!("{}: marked all {} items done", self.title, self.items.len());
        self
    }

    /// Marks every item undone.
    pub fn mark_all_undone(&mut self) -> &mut Self {
        self.items.iter_mut().for_each(Item::mark_undone);
        log::debug!("{}: marked all {} items undone", self.title, self.items.len());
        self
    }

    /// Marks the first item with the given title done. Returns whether one matched.
    pub fn mark_done(&mut self, title: &str) -> bool {
        match self.find_by_title_mut(title) {
            Some(item) => {
                item.mark_done();
                true
            }
            None => false,
        }
    }

    /// Removes the item at `index`, shifting later items down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Item> {
        self.check_index(index)?;
        let item = self.items.remove(index);
        log::debug!("{}: removed '{}' at {}", self.title, item.title(), index);
        Ok(item)
    }

    /// Calls `visitor` on each item in order and returns the list.
    pub fn each<F>(&self, mut visitor: F) -> &Self
    where
        F: FnMut(&Item),
    {
        for item in &self.items {
            visitor(item);
        }
        self
    }

    /// Like [`each`](Self::each), with mutable access to each item.
    pub fn each_mut<F>(&mut self, mut visitor: F) -> &mut Self
    where
        F: FnMut(&mut Item),
    {
        for item in &mut self.items {
            visitor(item);
        }
        self
    }

    /// Builds a new list, with the same title, holding copies of the matching items.
    #[must_use]
    pub fn select<P>(&self, mut predicate: P) -> ItemList
    where
        P: FnMut(&Item) -> bool,
    {
        let items = self.items.iter().filter(|item| predicate(*item)).cloned().collect();
        ItemList {
            title: self.title.clone(),
            items,
        }
    }

    /// Copies of the completed items.
    #[must_use]
    pub fn all_done(&self) -> ItemList {
        self.select(Item::is_done)
    }

    /// Copies of the pending items.
    #[must_use]
    pub fn all_not_done(&self) -> ItemList {
        self.select(|item| !item.is_done())
    }

    /// First item whose title equals `title` exactly.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.title() == title)
    }

    pub fn find_by_title_mut(&mut self, title: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.title() == title)
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Renders the header and one line per item with the given markers and decoration.
    #[must_use]
    pub fn render_with(&self, icons: &IconService, decoration: &str) -> String {
        let mut lines = Vec::with_capacity(self.items.len() + 1);
        lines.push(format!("{decoration} {} {decoration}", self.title));
        lines.extend(self.items.iter().map(|item| item.render(icons)));
        lines.join("\n")
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            let err = self.out_of_range(index);
            log::warn!("{}: {}", self.title, err);
            Err(err)
        }
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::out_of_range(index, self.items.len())
    }
}

impl fmt::Display for ItemList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&IconService::default(), HEADER_DECORATION))
    }
}

impl ShlAssign<Item> for ItemList {
    fn shl_assign(&mut self, item: Item) {
        self.add(item);
    }
}

impl Extend<Item> for ItemList {
    fn extend<T: IntoIterator<Item = Item>>(&mut self, iter: T) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for ItemList {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todos() -> ItemList {
        let mut list = ItemList::new("Today's Todos");
        list.add(Item::new("Buy milk"))
            .add(Item::new("Clean room"))
            .add(Item::new("Go to gym"));
        list
    }

    #[test]
    fn test_check_index_bounds() {
        let list = todos();
        assert!(list.check_index(2).is_ok());
        assert_eq!(list.check_index(3), Err(ListError::OutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn test_empty_list_is_done() {
        assert!(ItemList::new("Empty").is_done());
    }

    #[test]
    fn test_shift_and_pop_on_empty_list() {
        let mut list = ItemList::new("Empty");
        assert_eq!(list.shift(), Err(ListError::OutOfRange { index: 0, len: 0 }));
        assert_eq!(list.pop(), Err(ListError::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_render_empty_list_has_only_header() {
        assert_eq!(ItemList::new("Empty").to_string(), "---- Empty ----");
    }

    #[test]
    fn test_render_with_theme() {
        let mut list = todos();
        list.mark_done_at(0).unwrap();
        let icons = IconService::new(crate::icons::IconTheme::Unicode);
        assert_eq!(
            list.render_with(&icons, "=="),
            "== Today's Todos ==\n✓ Buy milk\n□ Clean room\n□ Go to gym"
        );
    }
}
