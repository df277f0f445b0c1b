//! Repository for the `case_studies` table.

use digitalpro_core::editor::CaseStudyPayload;
use digitalpro_core::types::RowId;
use serde_json::json;

use super::{decode, decode_all, encode};
use crate::client::{SelectQuery, StoreError, TableClient};
use crate::models::case_study::{CaseStudy, CreateCaseStudy};
use crate::models::CASE_STUDIES_TABLE;

pub struct CaseStudyRepo;

impl CaseStudyRepo {
    /// All case studies, newest first.
    pub async fn list(client: &dyn TableClient) -> Result<Vec<CaseStudy>, StoreError> {
        let rows = client
            .select(CASE_STUDIES_TABLE, &SelectQuery::newest_first())
            .await?;
        decode_all(rows)
    }

    pub async fn find_by_id(
        client: &dyn TableClient,
        id: RowId,
    ) -> Result<Option<CaseStudy>, StoreError> {
        let rows = client
            .select(CASE_STUDIES_TABLE, &SelectQuery::by_id(id))
            .await?;
        rows.into_iter().next().map(decode).transpose()
    }

    /// Insert with `featured = false`.
    pub async fn create(
        client: &dyn TableClient,
        payload: CaseStudyPayload,
    ) -> Result<CaseStudy, StoreError> {
        let row = encode(&CreateCaseStudy::from(payload))?;
        decode(client.insert(CASE_STUDIES_TABLE, row).await?)
    }

    /// Overwrite the editable fields. `featured` is left untouched.
    pub async fn update(
        client: &dyn TableClient,
        id: RowId,
        payload: &CaseStudyPayload,
    ) -> Result<CaseStudy, StoreError> {
        let patch = encode(payload)?;
        decode(client.update(CASE_STUDIES_TABLE, id, patch).await?)
    }

    pub async fn set_featured(
        client: &dyn TableClient,
        id: RowId,
        featured: bool,
    ) -> Result<CaseStudy, StoreError> {
        let patch = json!({ "featured": featured });
        decode(client.update(CASE_STUDIES_TABLE, id, patch).await?)
    }

    pub async fn delete(client: &dyn TableClient, id: RowId) -> Result<(), StoreError> {
        client.delete(CASE_STUDIES_TABLE, id).await
    }
}
