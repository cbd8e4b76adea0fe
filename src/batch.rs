//! Batch Preconditions
//!
//! Turns the current selection into the arguments of a batch request,
//! refusing selections the backend cannot handle in one call.

use std::collections::BTreeSet;

use crate::error::BatchError;
use crate::models::{Item, ItemKey};
use crate::selection::{Listed, SelectionSet};

/// Toast shown when a batch spans several accounts
pub const MIXED_ACCOUNTS_MESSAGE: &str = "批量操作只能针对同一账号的商品";

/// Selected items that all belong to one account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SameAccountBatch {
    pub cookie_id: String,
    pub item_ids: Vec<String>,
}

/// Server keys of the selected items (any account mix)
pub fn selected_keys(items: &[Item], selection: &SelectionSet) -> Result<Vec<ItemKey>, BatchError> {
    let keys: Vec<ItemKey> = selection.pick(items).into_iter().map(Item::key).collect();
    if keys.is_empty() {
        return Err(BatchError::NothingSelected);
    }
    Ok(keys)
}

/// Selected items grouped under their single account
pub fn same_account_batch(items: &[Item], selection: &SelectionSet) -> Result<SameAccountBatch, BatchError> {
    let picked = selection.pick(items);
    let first = picked.first().ok_or(BatchError::NothingSelected)?;

    let accounts: BTreeSet<&str> = picked.iter().map(|i| i.cookie_id.as_str()).collect();
    if accounts.len() > 1 {
        return Err(BatchError::MixedAccounts(accounts.len()));
    }

    Ok(SameAccountBatch {
        cookie_id: first.cookie_id.clone(),
        item_ids: picked.iter().map(|i| i.item_id.clone()).collect(),
    })
}

/// Keys of any selected rows, for tables whose rows carry their own key
pub fn picked_keys<T: Listed>(rows: &[T], selection: &SelectionSet, key: fn(&T) -> ItemKey) -> Vec<ItemKey> {
    selection.pick(rows).into_iter().map(key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocalId;

    fn item(id: i64, cookie: &str, item_id: &str) -> Item {
        serde_json::from_value(serde_json::json!({
            "id": id, "cookie_id": cookie, "item_id": item_id
        }))
        .unwrap()
    }

    fn select(ids: &[i64]) -> SelectionSet {
        let mut sel = SelectionSet::default();
        for id in ids {
            sel.toggle(LocalId::Number(*id));
        }
        sel
    }

    #[test]
    fn test_same_account_ok() {
        let items = vec![item(1, "a", "11"), item(2, "a", "22"), item(3, "b", "33")];
        let batch = same_account_batch(&items, &select(&[2, 1])).unwrap();
        assert_eq!(batch.cookie_id, "a");
        assert_eq!(batch.item_ids, vec!["11", "22"]);
    }

    #[test]
    fn test_mixed_accounts_rejected() {
        let items = vec![item(1, "a", "11"), item(2, "b", "22"), item(3, "c", "33")];
        assert_eq!(
            same_account_batch(&items, &select(&[1, 2, 3])),
            Err(BatchError::MixedAccounts(3))
        );
    }

    #[test]
    fn test_empty_or_stale_selection() {
        let items = vec![item(1, "a", "11")];
        assert_eq!(same_account_batch(&items, &select(&[])), Err(BatchError::NothingSelected));
        // ids left over from before a reload match nothing
        assert_eq!(same_account_batch(&items, &select(&[9])), Err(BatchError::NothingSelected));
        assert_eq!(selected_keys(&items, &select(&[9])), Err(BatchError::NothingSelected));
    }

    #[test]
    fn test_selected_keys_allow_mixed_accounts() {
        let items = vec![item(1, "a", "11"), item(2, "b", "22")];
        let keys = selected_keys(&items, &select(&[1, 2])).unwrap();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[1], ItemKey { cookie_id: "b".into(), item_id: "22".into() });
    }
}
