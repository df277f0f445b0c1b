//! Contact message model and DTOs.

use digitalpro_core::forms::ContactForm;
use digitalpro_core::status::MessageStatus;
use digitalpro_core::types::{RowId, Timestamp};
use serde::{Deserialize, Serialize};

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: RowId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: MessageStatus,
    /// Free-text notes; the column is nullable remotely.
    #[serde(default)]
    pub admin_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ContactMessage {
    pub fn notes(&self) -> &str {
        self.admin_notes.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: MessageStatus,
}

impl From<ContactForm> for CreateContactMessage {
    fn from(form: ContactForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
            status: MessageStatus::INITIAL,
        }
    }
}
