//! Items Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::filter_rows;
use crate::models::{Item, LocalId};
use crate::selection::SelectionSet;

/// State of the item management page with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ItemsState {
    /// Items of the selected account (all accounts when empty)
    pub items: Vec<Item>,
    /// Account filter, empty for all accounts
    pub selected_account: String,
    /// Search box content
    pub keyword: String,
    /// Checked rows
    pub selection: SelectionSet,
    pub loading: bool,
    /// Bumped per list request; responses of older requests are dropped
    pub load_generation: u32,
}

impl ItemsState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ItemsStore = Store<ItemsState>;

/// Get the items store from context
pub fn use_items_store() -> ItemsStore {
    expect_context::<ItemsStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Items matching the search box
pub fn store_filtered_items(store: &ItemsStore) -> Vec<Item> {
    filter_rows(&store.items().read(), &store.keyword().read())
}

pub fn store_toggle_selected(store: &ItemsStore, id: LocalId) {
    store.selection().write().toggle(id);
}

pub fn store_toggle_all(store: &ItemsStore, visible: &[Item]) {
    store.selection().write().toggle_all(visible);
}

pub fn store_clear_selection(store: &ItemsStore) {
    store.selection().write().clear();
}

/// Start a list request and return its generation
pub fn store_begin_load(store: &ItemsStore) -> u32 {
    let generation = store.load_generation().get_untracked().wrapping_add(1);
    store.load_generation().set(generation);
    store.loading().set(true);
    generation
}

/// Whether a response still belongs to the newest request
pub fn store_is_current(store: &ItemsStore, generation: u32) -> bool {
    store.load_generation().get_untracked() == generation
}
