//! Repository for the `contact_messages` table. Messages are never deleted.

use digitalpro_core::forms::ContactForm;
use digitalpro_core::status::MessageStatus;
use digitalpro_core::types::RowId;
use serde_json::json;

use super::{decode, decode_all, encode};
use crate::client::{SelectQuery, StoreError, TableClient};
use crate::models::contact_message::{ContactMessage, CreateContactMessage};
use crate::models::CONTACT_MESSAGES_TABLE;

pub struct ContactMessageRepo;

impl ContactMessageRepo {
    pub async fn list(
        client: &dyn TableClient,
        status: Option<MessageStatus>,
    ) -> Result<Vec<ContactMessage>, StoreError> {
        let mut query = SelectQuery::newest_first();
        if let Some(status) = status {
            query = query.eq("status", status.as_str());
        }
        decode_all(client.select(CONTACT_MESSAGES_TABLE, &query).await?)
    }

    pub async fn find_by_id(
        client: &dyn TableClient,
        id: RowId,
    ) -> Result<Option<ContactMessage>, StoreError> {
        let rows = client
            .select(CONTACT_MESSAGES_TABLE, &SelectQuery::by_id(id))
            .await?;
        rows.into_iter().next().map(decode).transpose()
    }

    /// Insert a public submission with status `new`.
    pub async fn create(
        client: &dyn TableClient,
        form: ContactForm,
    ) -> Result<ContactMessage, StoreError> {
        let row = encode(&CreateContactMessage::from(form))?;
        decode(client.insert(CONTACT_MESSAGES_TABLE, row).await?)
    }

    pub async fn update_status(
        client: &dyn TableClient,
        id: RowId,
        status: MessageStatus,
    ) -> Result<ContactMessage, StoreError> {
        let patch = json!({ "status": status });
        decode(client.update(CONTACT_MESSAGES_TABLE, id, patch).await?)
    }

    /// Save notes together with the status in one update.
    pub async fn update_notes(
        client: &dyn TableClient,
        id: RowId,
        status: MessageStatus,
        notes: &str,
    ) -> Result<ContactMessage, StoreError> {
        let patch = json!({ "status": status, "admin_notes": notes });
        decode(client.update(CONTACT_MESSAGES_TABLE, id, patch).await?)
    }
}
