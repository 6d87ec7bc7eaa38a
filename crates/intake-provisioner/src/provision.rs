//! Client provisioning.

use jiff::Timestamp;

use intake_core::models::client::ClientRecord;
use intake_core::ranges;
use intake_sheets::store::{AccessRole, SheetsStore};

use crate::error::ProvisionError;
use crate::populate::{populate_form_tab, PopulateOutcome};

/// What the admin submits to create a client.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub display_name: String,
    pub date_of_birth: String,
    pub evaluation_type: String,
    pub age_range: String,
    pub user_type: String,
    pub assigned_form_ids: Vec<String>,
}

/// A freshly provisioned client with the per-form population outcomes.
#[derive(Debug, Clone)]
pub struct ProvisionedClient {
    pub record: ClientRecord,
    pub outcomes: Vec<(String, PopulateOutcome)>,
}

/// Derive the unique client id: lower-cased, whitespace collapsed to
/// underscores, suffixed with the creation epoch milliseconds so two
/// same-named clients created concurrently still get distinct ids.
pub fn client_id(display_name: &str, created_at: Timestamp) -> String {
    let lowered = display_name.to_lowercase();
    let slug: Vec<&str> = lowered.split_whitespace().collect();
    format!("{}_{}", slug.join("_"), created_at.as_millisecond())
}

/// Create a client: document, operator share, `Submissions` header,
/// registry row, then one populated tab per assigned form.
///
/// Validation happens before any write. The operator share is
/// best-effort; a failure there is logged and creation continues. Form
/// population is isolate-and-continue: an error on one form is recorded
/// in its outcome and the remaining forms still run.
pub async fn create_client(
    store: &dyn SheetsStore,
    central_id: &str,
    operator_email: &str,
    new: NewClient,
    now: Timestamp,
) -> Result<ProvisionedClient, ProvisionError> {
    if new.display_name.trim().is_empty() {
        return Err(ProvisionError::MissingClientName);
    }
    if new.assigned_form_ids.is_empty() {
        return Err(ProvisionError::NoFormsSelected);
    }

    let client_id = client_id(&new.display_name, now);
    let created = store
        .create_document(&ranges::document_title(&client_id), &[ranges::SUBMISSIONS_TAB])
        .await?;
    tracing::info!(
        client_id = %client_id,
        document_id = %created.document_id,
        "client document created"
    );

    if let Err(e) = store
        .grant_access(&created.document_id, operator_email, AccessRole::Writer)
        .await
    {
        tracing::warn!(
            document_id = %created.document_id,
            error = %e,
            "failed to share client document with operator"
        );
    }

    let header: Vec<String> = ranges::SUBMISSIONS_HEADER
        .iter()
        .map(|s| s.to_string())
        .collect();
    store
        .append_rows(
            &created.document_id,
            &ranges::submissions_append(),
            vec![header],
        )
        .await?;

    let record = ClientRecord {
        client_id: client_id.clone(),
        display_name: new.display_name.trim().to_string(),
        assigned_form_ids: new.assigned_form_ids,
        date_of_birth: new.date_of_birth,
        evaluation_type: new.evaluation_type,
        age_range: new.age_range,
        user_type: new.user_type,
        created_at: now,
        document_id: created.document_id,
        document_url: created.url,
    };
    store
        .append_rows(
            central_id,
            &ranges::clients_append(),
            vec![record.clone().into_row()],
        )
        .await?;
    tracing::info!(client_id = %client_id, "client registered");

    let mut outcomes = Vec::new();
    for form_id in record.assigned_form_ids.clone() {
        let outcome = match populate_form_tab(store, central_id, &record, &form_id, now).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(
                    client_id = %client_id,
                    form_id = %form_id,
                    error = %e,
                    "failed to populate form tab"
                );
                PopulateOutcome::Failed(e.to_string())
            }
        };
        outcomes.push((form_id, outcome));
    }

    Ok(ProvisionedClient { record, outcomes })
}
