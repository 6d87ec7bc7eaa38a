//! Central-registry lookups.

use intake_core::models::client::ClientRecord;
use intake_core::ranges;
use intake_sheets::store::SheetsStore;

use crate::error::TrackingError;
use crate::matcher;

/// Scan the `Clients` tab for a client id. `Ok(None)` when no row
/// matches.
pub async fn find_client(
    store: &dyn SheetsStore,
    central_id: &str,
    client_id: &str,
) -> Result<Option<ClientRecord>, TrackingError> {
    let rows = store.get_range(central_id, &ranges::clients_scan()).await?;
    match matcher::find_row(&rows, &[(0, client_id)]) {
        Some(index) => Ok(Some(ClientRecord::from_row(&rows[index])?)),
        None => Ok(None),
    }
}

/// Like [`find_client`], but absence is an error.
pub async fn require_client(
    store: &dyn SheetsStore,
    central_id: &str,
    client_id: &str,
) -> Result<ClientRecord, TrackingError> {
    find_client(store, central_id, client_id)
        .await?
        .ok_or_else(|| TrackingError::UnknownClient(client_id.to_string()))
}
