//! Row Selection
//!
//! Checkbox selection shared by the item and item-reply tables.

use std::collections::HashSet;

use crate::models::{Item, ItemReply, LocalId};

/// A row that can be selected and searched
pub trait Listed {
    fn local_id(&self) -> LocalId;

    /// Text fields matched by the search box
    fn search_fields(&self) -> Vec<&str>;
}

impl Listed for Item {
    fn local_id(&self) -> LocalId {
        Item::local_id(self)
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(3);
        fields.extend(self.title_text());
        fields.extend(self.detail_text());
        fields.push(self.item_id.as_str());
        fields
    }
}

impl Listed for ItemReply {
    fn local_id(&self) -> LocalId {
        ItemReply::local_id(self)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.display_title(), self.reply_content.as_str(), self.item_id.as_str()]
    }
}

/// Set of selected row ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    ids: HashSet<LocalId>,
}

impl SelectionSet {
    pub fn contains(&self, id: &LocalId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Flip membership of one id
    pub fn toggle(&mut self, id: LocalId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Clear when every visible row is already counted, otherwise select all visible rows
    pub fn toggle_all<T: Listed>(&mut self, visible: &[T]) {
        if self.ids.len() == visible.len() {
            self.ids.clear();
        } else {
            self.ids = visible.iter().map(Listed::local_id).collect();
        }
    }

    /// Header checkbox state
    pub fn all_selected<T: Listed>(&self, visible: &[T]) -> bool {
        !visible.is_empty() && self.ids.len() == visible.len()
    }

    /// Rows of `rows` that are selected, in table order
    pub fn pick<'a, T: Listed>(&self, rows: &'a [T]) -> Vec<&'a T> {
        rows.iter().filter(|row| self.ids.contains(&row.local_id())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: i64, cookie: &str) -> Item {
        Item {
            id: Some(LocalId::Number(id)),
            cookie_id: cookie.to_string(),
            item_id: format!("{}", 1000 + id),
            item_title: Some(format!("Item {}", id)),
            title: None,
            item_detail: None,
            desc: None,
            item_price: None,
            price: None,
            is_multi_spec: false,
            has_sku: false,
            multi_quantity_delivery: false,
            updated_at: None,
        }
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut sel = SelectionSet::default();
        sel.toggle(LocalId::Number(1));
        assert!(sel.contains(&LocalId::Number(1)));
        sel.toggle(LocalId::Number(1));
        assert_eq!(sel, SelectionSet::default());
    }

    #[test]
    fn test_toggle_is_per_id() {
        let mut sel = SelectionSet::default();
        sel.toggle(LocalId::Number(1));
        sel.toggle(LocalId::Text("1".into()));
        sel.toggle(LocalId::Number(2));
        sel.toggle(LocalId::Number(2));
        assert_eq!(sel.len(), 2);
        assert!(sel.contains(&LocalId::Text("1".into())));
    }

    #[test]
    fn test_toggle_all_cycles() {
        let items = vec![make_item(1, "a"), make_item(2, "a"), make_item(3, "b")];
        let mut sel = SelectionSet::default();

        sel.toggle_all(&items);
        assert_eq!(sel.len(), 3);
        assert!(sel.all_selected(&items));

        sel.toggle_all(&items);
        assert!(sel.is_empty());
        assert!(!sel.all_selected(&items));
    }

    #[test]
    fn test_toggle_all_from_partial() {
        let items = vec![make_item(1, "a"), make_item(2, "a")];
        let mut sel = SelectionSet::default();
        sel.toggle(LocalId::Number(2));
        sel.toggle_all(&items);
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn test_toggle_all_empty_view() {
        let none: Vec<Item> = Vec::new();
        let mut sel = SelectionSet::default();
        sel.toggle_all(&none);
        assert!(sel.is_empty());
        assert!(!sel.all_selected(&none));
    }

    #[test]
    fn test_pick_keeps_order() {
        let items = vec![make_item(1, "a"), make_item(2, "a"), make_item(3, "b")];
        let mut sel = SelectionSet::default();
        sel.toggle(LocalId::Number(3));
        sel.toggle(LocalId::Number(1));
        sel.toggle(LocalId::Number(99));
        let picked: Vec<_> = sel.pick(&items).iter().map(|i| i.item_id.clone()).collect();
        assert_eq!(picked, vec!["1001", "1003"]);
    }
}
