//! Handler for the public contact form.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use digitalpro_core::forms::{validate_form, ContactForm};
use digitalpro_db::models::contact_message::ContactMessage;
use digitalpro_db::repositories::ContactMessageRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/contact
///
/// Validates, then inserts one `contact_messages` row with status `new`.
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> AppResult<(StatusCode, Json<DataResponse<ContactMessage>>)> {
    validate_form(&form)?;

    let message = ContactMessageRepo::create(state.db(), form)
        .await
        .map_err(AppError::remote("Failed to send message. Please try again."))?;

    tracing::info!(message_id = %message.id, "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::success(
            message,
            "Message sent successfully! We'll get back to you soon.",
        )),
    ))
}
