//! Repository for `user_profiles` and the admin-account procedures.

use digitalpro_core::roles::Role;
use digitalpro_core::types::RowId;
use serde_json::json;

use super::{decode, decode_all};
use crate::client::{SelectQuery, StoreError, TableClient};
use crate::models::user_profile::{
    AdminCreation, AdminUser, UserProfile, PROC_CREATE_ADMIN_USER, PROC_LIST_ADMIN_USERS,
};
use crate::models::USER_PROFILES_TABLE;

pub struct UserProfileRepo;

impl UserProfileRepo {
    pub async fn find_by_id(
        client: &dyn TableClient,
        id: RowId,
    ) -> Result<Option<UserProfile>, StoreError> {
        let rows = client
            .select(USER_PROFILES_TABLE, &SelectQuery::by_id(id))
            .await?;
        rows.into_iter().next().map(decode).transpose()
    }

    /// Role of the given auth user, `None` when no profile row exists.
    pub async fn role_of(client: &dyn TableClient, id: RowId) -> Result<Option<Role>, StoreError> {
        Ok(Self::find_by_id(client, id).await?.map(|p| p.role))
    }

    pub async fn set_role(
        client: &dyn TableClient,
        id: RowId,
        role: Role,
    ) -> Result<UserProfile, StoreError> {
        let patch = json!({ "role": role });
        decode(client.update(USER_PROFILES_TABLE, id, patch).await?)
    }

    /// Admin accounts with their emails, via the privileged procedure.
    pub async fn list_admins(client: &dyn TableClient) -> Result<Vec<AdminUser>, StoreError> {
        let value = client.call_procedure(PROC_LIST_ADMIN_USERS, json!({})).await?;
        match value {
            serde_json::Value::Array(rows) => decode_all(rows),
            serde_json::Value::Null => Ok(Vec::new()),
            other => Err(StoreError::Remote {
                status: 200,
                body: format!("{PROC_LIST_ADMIN_USERS} returned {other}"),
            }),
        }
    }

    /// Create an admin account, or promote an existing user.
    pub async fn create_admin(
        client: &dyn TableClient,
        email: &str,
        password: &str,
    ) -> Result<AdminCreation, StoreError> {
        let args = json!({ "user_email": email, "user_password": password });
        decode(client.call_procedure(PROC_CREATE_ADMIN_USER, args).await?)
    }
}
