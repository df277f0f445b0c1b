//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Writes also carry a
//! `notice` the client shows as a toast.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-facing notification attached to a response.
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Standard `{ "data": T, "notice"?: {..} }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse::new(items)))
/// Ok(Json(DataResponse::success(row, "Case study created successfully")))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, notice: None }
    }

    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            notice: Some(Notice {
                kind: NoticeKind::Success,
                message: message.into(),
            }),
        }
    }

    /// Data that came back alongside a non-fatal failure.
    pub fn error(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            notice: Some(Notice {
                kind: NoticeKind::Error,
                message: message.into(),
            }),
        }
    }
}

/// A list view with the placeholder shown when it is empty.
#[derive(Debug, Serialize)]
pub struct ListView<T: Serialize> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl<T: Serialize> ListView<T> {
    pub fn new(items: Vec<T>, placeholder: impl Into<String>) -> Self {
        let placeholder = items.is_empty().then(|| placeholder.into());
        Self { items, placeholder }
    }
}

/// A filtered list view plus per-status counts over the unfiltered rows.
#[derive(Debug, Serialize)]
pub struct TalliedList<T: Serialize, S: Serialize> {
    #[serde(flatten)]
    pub list: ListView<T>,
    pub stats: S,
}
