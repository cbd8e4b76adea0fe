//! Account Endpoints

use super::{get, ApiClient};
use crate::error::ApiError;
use crate::models::{Account, AccountEntry, Listing};

/// Linked seller accounts, used only for filtering
pub async fn get_accounts(client: &ApiClient) -> Result<Vec<Account>, ApiError> {
    let listing: Listing<AccountEntry> = get(client, "/cookies").await?;
    Ok(listing.into_items().into_iter().map(Account::from).collect())
}
