//! Repository for the `proposals` table. Proposals are never deleted.

use digitalpro_core::forms::ProposalForm;
use digitalpro_core::status::ProposalStatus;
use digitalpro_core::types::RowId;
use serde_json::json;

use super::{decode, decode_all, encode};
use crate::client::{SelectQuery, StoreError, TableClient};
use crate::models::proposal::{CreateProposal, Proposal};
use crate::models::PROPOSALS_TABLE;

pub struct ProposalRepo;

impl ProposalRepo {
    /// Newest first, optionally restricted to one status.
    pub async fn list(
        client: &dyn TableClient,
        status: Option<ProposalStatus>,
    ) -> Result<Vec<Proposal>, StoreError> {
        let mut query = SelectQuery::newest_first();
        if let Some(status) = status {
            query = query.eq("status", status.as_str());
        }
        decode_all(client.select(PROPOSALS_TABLE, &query).await?)
    }

    pub async fn find_by_id(
        client: &dyn TableClient,
        id: RowId,
    ) -> Result<Option<Proposal>, StoreError> {
        let rows = client.select(PROPOSALS_TABLE, &SelectQuery::by_id(id)).await?;
        rows.into_iter().next().map(decode).transpose()
    }

    /// Insert a public submission with status `pending`.
    pub async fn create(client: &dyn TableClient, form: ProposalForm) -> Result<Proposal, StoreError> {
        let row = encode(&CreateProposal::from(form))?;
        decode(client.insert(PROPOSALS_TABLE, row).await?)
    }

    pub async fn update_status(
        client: &dyn TableClient,
        id: RowId,
        status: ProposalStatus,
    ) -> Result<Proposal, StoreError> {
        let patch = json!({ "status": status });
        decode(client.update(PROPOSALS_TABLE, id, patch).await?)
    }
}
