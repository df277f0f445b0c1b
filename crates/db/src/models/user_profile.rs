//! User profile model and the admin-user listing shape.

use digitalpro_core::roles::Role;
use digitalpro_core::types::{RowId, Timestamp};
use serde::{Deserialize, Serialize};

/// Procedure that creates an admin account or promotes an existing user.
pub const PROC_CREATE_ADMIN_USER: &str = "create_admin_user";

/// Privileged procedure joining admin profiles with their auth emails.
pub const PROC_LIST_ADMIN_USERS: &str = "list_admin_users";

/// A row from the `user_profiles` table. `id` is the auth user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: RowId,
    pub role: Role,
    pub created_at: Timestamp,
}

/// An admin account as listed on the users page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: RowId,
    pub email: String,
    pub role: Role,
    pub created_at: Timestamp,
}

/// Result of `create_admin_user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCreation {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}
