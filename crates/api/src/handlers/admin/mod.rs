//! Handlers behind the admin route guard. Every handler takes
//! [`RequireAdmin`](crate::middleware::rbac::RequireAdmin).

pub mod case_studies;
pub mod dashboard;
pub mod messages;
pub mod proposals;
pub mod users;

use std::str::FromStr;

use digitalpro_core::error::CoreError;
use digitalpro_core::status::parse_status_filter;
use digitalpro_core::types::RowId;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Body of the `PUT .../status` endpoints.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// `?status=` on the list endpoints. Absent, empty or `all` means no filter.
#[derive(Debug, Deserialize)]
pub struct StatusFilter {
    pub status: Option<String>,
}

/// Returned by endpoints that remove something.
#[derive(Debug, Serialize)]
pub struct Removed {
    pub id: RowId,
}

/// Parse a status value before any remote call is made.
fn parse_status<S>(raw: &str) -> Result<S, AppError>
where
    S: FromStr<Err = String>,
{
    raw.parse()
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))
}

fn parse_filter<S>(filter: &StatusFilter) -> Result<Option<S>, AppError>
where
    S: FromStr<Err = String>,
{
    parse_status_filter(filter.status.as_deref())
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))
}
