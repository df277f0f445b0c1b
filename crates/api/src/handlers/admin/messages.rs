//! Contact message moderation.

use axum::extract::{Path, Query, State};
use axum::Json;
use digitalpro_core::dashboard::MessageStats;
use digitalpro_core::error::CoreError;
use digitalpro_core::mailto::reply_link;
use digitalpro_core::status::{empty_list_placeholder, MessageStatus};
use digitalpro_core::types::RowId;
use digitalpro_db::models::contact_message::ContactMessage;
use digitalpro_db::repositories::ContactMessageRepo;
use serde::{Deserialize, Serialize};

use super::{parse_filter, parse_status, StatusFilter, StatusUpdate};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, ListView, TalliedList};
use crate::state::AppState;

const UPDATE_FAILED: &str = "Failed to update message";

/// A message plus its `mailto:` reply link.
#[derive(Debug, Serialize)]
pub struct MessageView {
    #[serde(flatten)]
    pub message: ContactMessage,
    pub reply_link: String,
}

impl From<ContactMessage> for MessageView {
    fn from(message: ContactMessage) -> Self {
        let reply_link = reply_link(&message.email, &message.subject);
        Self {
            message,
            reply_link,
        }
    }
}

/// Body of `PUT /admin/messages/{id}/notes`.
#[derive(Debug, Deserialize)]
pub struct NotesUpdate {
    #[serde(default)]
    pub notes: String,
}

/// GET /api/v1/admin/messages?status=new
///
/// Stats count every message; the filter only narrows `items`.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<Json<DataResponse<TalliedList<MessageView, MessageStats>>>> {
    let status = parse_filter::<MessageStatus>(&filter)?;

    let messages = ContactMessageRepo::list(state.db(), None)
        .await
        .map_err(AppError::remote("Failed to load messages"))?;

    let stats = MessageStats::compute(messages.iter().map(|m| m.status));
    let items = messages
        .into_iter()
        .filter(|m| status.map_or(true, |s| m.status == s))
        .map(MessageView::from)
        .collect();

    Ok(Json(DataResponse::new(TalliedList {
        list: ListView::new(items, empty_list_placeholder("messages", status)),
        stats,
    })))
}

/// GET /api/v1/admin/messages/{id}
///
/// Opening a `new` message marks it `read` with exactly one update. If that
/// update fails the message is still returned, with an error notice.
pub async fn show(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RowId>,
) -> AppResult<Json<DataResponse<MessageView>>> {
    let message = find(&state, id).await?;

    let Some(next) = message.status.on_view() else {
        return Ok(Json(DataResponse::new(message.into())));
    };

    match ContactMessageRepo::update_status(state.db(), id, next).await {
        Ok(updated) => {
            tracing::info!(message_id = %id, user_id = %admin.user.id, "Message marked read");
            Ok(Json(DataResponse::new(updated.into())))
        }
        Err(e) => {
            tracing::error!(message_id = %id, error = %e, "Failed to mark message read");
            Ok(Json(DataResponse::error(message.into(), UPDATE_FAILED)))
        }
    }
}

/// PUT /api/v1/admin/messages/{id}/status
pub async fn update_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RowId>,
    Json(input): Json<StatusUpdate>,
) -> AppResult<Json<DataResponse<MessageView>>> {
    let status: MessageStatus = parse_status(&input.status)?;

    let message = ContactMessageRepo::update_status(state.db(), id, status)
        .await
        .map_err(AppError::remote(UPDATE_FAILED))?;

    tracing::info!(
        message_id = %id,
        status = %status,
        user_id = %admin.user.id,
        "Message status updated"
    );

    Ok(Json(DataResponse::success(
        message.into(),
        format!("Message {status} successfully"),
    )))
}

/// PUT /api/v1/admin/messages/{id}/notes
///
/// Writes the notes together with the message's current status.
pub async fn update_notes(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<RowId>,
    Json(input): Json<NotesUpdate>,
) -> AppResult<Json<DataResponse<MessageView>>> {
    let current = find(&state, id).await?;

    let message = ContactMessageRepo::update_notes(state.db(), id, current.status, &input.notes)
        .await
        .map_err(AppError::remote(UPDATE_FAILED))?;

    tracing::info!(message_id = %id, user_id = %admin.user.id, "Message notes saved");

    let status = message.status;
    Ok(Json(DataResponse::success(
        message.into(),
        format!("Message {status} successfully"),
    )))
}

async fn find(state: &AppState, id: RowId) -> AppResult<ContactMessage> {
    ContactMessageRepo::find_by_id(state.db(), id)
        .await
        .map_err(AppError::remote("Failed to load messages"))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }))
}
