//! In-process backend used for local development (`BACKEND_MODE=memory`)
//! and integration tests.
//!
//! Rows are kept as JSON objects, per table. Inserts fill the same defaults
//! the hosted tables do (`id`, `created_at`, status columns, ...), and the
//! two server-side procedures are implemented against the same state. The
//! store also acts as the auth service so admin creation, sign-in and the
//! profile role all stay consistent.
//!
//! Every table call is appended to an operation log so tests can assert
//! exactly which remote calls a request issued.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use digitalpro_core::roles::Role;
use digitalpro_core::types::RowId;
use serde_json::{json, Map, Value};
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use crate::auth::jwt::{generate_access_token, validate_token, JwtConfig};
use crate::auth::password::{hash_password, verify_password};
use crate::auth::{
    AuthError, AuthEvent, AuthProvider, AuthSession, Identity, EVENT_CHANNEL_CAPACITY,
};
use crate::client::{Order, SelectQuery, StoreError, TableClient};
use crate::models::user_profile::{PROC_CREATE_ADMIN_USER, PROC_LIST_ADMIN_USERS};
use crate::models::{CASE_STUDIES_TABLE, CONTACT_MESSAGES_TABLE, PROPOSALS_TABLE, USER_PROFILES_TABLE};

/// One remote call, as recorded by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Select { table: String },
    Insert { table: String, row: Value },
    Update { table: String, id: RowId, patch: Value },
    Delete { table: String, id: RowId },
    Procedure { name: String },
}

impl Operation {
    /// `true` for inserts, updates and deletes.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Operation::Insert { .. } | Operation::Update { .. } | Operation::Delete { .. }
        )
    }
}

#[derive(Debug, Clone)]
struct StoredUser {
    id: RowId,
    email: String,
    password_hash: String,
}

#[derive(Default)]
struct MemoryState {
    tables: HashMap<String, Vec<Value>>,
    users: Vec<StoredUser>,
    revoked_tokens: HashSet<String>,
    operations: Vec<Operation>,
    failing_tables: HashSet<String>,
}

impl MemoryState {
    fn check_available(&self, table: &str) -> Result<(), StoreError> {
        if self.failing_tables.contains(table) {
            return Err(StoreError::Remote {
                status: 503,
                body: format!("{table} is unavailable"),
            });
        }
        Ok(())
    }

    fn find_user(&self, email: &str) -> Option<&StoredUser> {
        self.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
    }

    fn profile_role(&self, id: RowId) -> Option<Role> {
        self.tables
            .get(USER_PROFILES_TABLE)?
            .iter()
            .find(|row| row_has_id(row, id))
            .and_then(|row| serde_json::from_value(row["role"].clone()).ok())
    }

    /// Id of the user with `email`, registering them with `password_hash`
    /// first when there is none.
    fn find_or_insert_user(&mut self, email: &str, password_hash: String) -> RowId {
        if let Some(user) = self.find_user(email) {
            return user.id;
        }
        let id = Uuid::new_v4();
        self.users.push(StoredUser {
            id,
            email: email.to_string(),
            password_hash,
        });
        id
    }

    /// Create or overwrite the profile row for `id` with `role`.
    fn upsert_profile(&mut self, id: RowId, role: Role) {
        let rows = self.tables.entry(USER_PROFILES_TABLE.to_string()).or_default();
        match rows.iter_mut().find(|row| row_has_id(row, id)) {
            Some(row) => row["role"] = json!(role),
            None => rows.push(json!({
                "id": id,
                "role": role,
                "created_at": now_string(),
            })),
        }
    }
}

pub struct MemoryStore {
    state: RwLock<MemoryState>,
    jwt: JwtConfig,
    events: broadcast::Sender<AuthEvent>,
}

impl MemoryStore {
    pub fn new(jwt: JwtConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: RwLock::new(MemoryState::default()),
            jwt,
            events,
        }
    }

    // -----------------------------------------------------------------------
    // Test and fixture helpers
    // -----------------------------------------------------------------------

    /// Every call recorded so far, oldest first.
    pub async fn operations(&self) -> Vec<Operation> {
        self.state.read().await.operations.clone()
    }

    pub async fn clear_operations(&self) {
        self.state.write().await.operations.clear();
    }

    /// Make every subsequent call touching `table` fail with a remote error.
    pub async fn fail_table(&self, table: &str) {
        self.state.write().await.failing_tables.insert(table.to_string());
    }

    /// Raw rows of `table` in insertion order, without logging a call.
    pub async fn rows(&self, table: &str) -> Vec<Value> {
        self.state
            .read()
            .await
            .tables
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    /// Insert a fixture row with defaults applied, without logging a call.
    pub async fn seed(&self, table: &str, row: Value) -> Value {
        let mut row = row;
        apply_defaults(table, &mut row);
        self.state
            .write()
            .await
            .tables
            .entry(table.to_string())
            .or_default()
            .push(row.clone());
        row
    }

    /// Register an auth user with a profile carrying `role`.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<RowId, AuthError> {
        let password_hash =
            hash_password(password).map_err(|e| AuthError::Internal(e.to_string()))?;

        let mut state = self.state.write().await;
        let id = state.find_or_insert_user(email, password_hash);
        state.upsert_profile(id, role);
        Ok(id)
    }

    // -----------------------------------------------------------------------
    // Procedures
    // -----------------------------------------------------------------------

    /// `create_admin_user(user_email, user_password) -> {success, error?}`.
    ///
    /// Creates a new auth user with an admin profile, or promotes an
    /// existing user. Promoting someone who is already an admin is reported
    /// as a failure.
    ///
    /// The lookup and the write happen under one lock, so concurrent calls
    /// for the same email create a single user.
    async fn create_admin_user(&self, args: &Value) -> Value {
        let email = args["user_email"].as_str().unwrap_or_default().trim();
        let password = args["user_password"].as_str().unwrap_or_default();
        if email.is_empty() || password.is_empty() {
            return json!({ "success": false, "error": "Email and password are required" });
        }

        let password_hash = match hash_password(password) {
            Ok(hash) => hash,
            Err(e) => return json!({ "success": false, "error": e.to_string() }),
        };

        let mut state = self.state.write().await;
        let id = state.find_or_insert_user(email, password_hash);
        if state.profile_role(id) == Some(Role::Admin) {
            return json!({ "success": false, "error": "User is already an admin" });
        }
        state.upsert_profile(id, Role::Admin);
        json!({ "success": true, "user_id": id })
    }

    /// `list_admin_users() -> [{id, email, role, created_at}]`, newest first.
    async fn list_admin_users(&self) -> Value {
        let state = self.state.read().await;
        let mut profiles: Vec<Value> = state
            .tables
            .get(USER_PROFILES_TABLE)
            .map(|rows| {
                rows.iter()
                    .filter(|row| row["role"] == json!(Role::Admin))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        sort_rows(&mut profiles, &newest_first_order());

        let admins: Vec<Value> = profiles
            .into_iter()
            .filter_map(|profile| {
                let id: RowId = serde_json::from_value(profile["id"].clone()).ok()?;
                let user = state.users.iter().find(|u| u.id == id)?;
                Some(json!({
                    "id": id,
                    "email": user.email,
                    "role": profile["role"],
                    "created_at": profile["created_at"],
                }))
            })
            .collect();
        Value::Array(admins)
    }

    fn publish(&self, event: AuthEvent) {
        let _ = self.events.send(event);
    }
}

// ---------------------------------------------------------------------------
// TableClient
// ---------------------------------------------------------------------------

#[async_trait]
impl TableClient for MemoryStore {
    async fn select(&self, table: &str, query: &SelectQuery) -> Result<Vec<Value>, StoreError> {
        let mut state = self.state.write().await;
        state.operations.push(Operation::Select {
            table: table.to_string(),
        });
        state.check_available(table)?;

        let mut rows: Vec<Value> = state
            .tables
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| {
                        query
                            .filters
                            .iter()
                            .all(|(column, value)| column_equals(row, column, value))
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(order) = &query.order {
            sort_rows(&mut rows, order);
        }
        tracing::debug!(table, count = rows.len(), "Memory select");
        Ok(rows)
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        let mut state = self.state.write().await;
        state.operations.push(Operation::Insert {
            table: table.to_string(),
            row: row.clone(),
        });
        state.check_available(table)?;

        if !row.is_object() {
            return Err(StoreError::Remote {
                status: 400,
                body: "row must be a JSON object".into(),
            });
        }
        let mut row = row;
        apply_defaults(table, &mut row);
        state
            .tables
            .entry(table.to_string())
            .or_default()
            .push(row.clone());
        Ok(row)
    }

    async fn update(&self, table: &str, id: RowId, patch: Value) -> Result<Value, StoreError> {
        let mut state = self.state.write().await;
        state.operations.push(Operation::Update {
            table: table.to_string(),
            id,
            patch: patch.clone(),
        });
        state.check_available(table)?;

        let not_found = || StoreError::NotFound {
            table: table.to_string(),
            id,
        };
        let row = state
            .tables
            .get_mut(table)
            .and_then(|rows| rows.iter_mut().find(|row| row_has_id(row, id)))
            .ok_or_else(not_found)?;

        if let (Some(target), Value::Object(fields)) = (row.as_object_mut(), patch) {
            for (key, value) in fields {
                target.insert(key, value);
            }
            if table == CONTACT_MESSAGES_TABLE {
                target.insert("updated_at".into(), Value::String(now_string()));
            }
        }
        Ok(row.clone())
    }

    async fn delete(&self, table: &str, id: RowId) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.operations.push(Operation::Delete {
            table: table.to_string(),
            id,
        });
        state.check_available(table)?;

        let rows = state.tables.entry(table.to_string()).or_default();
        let before = rows.len();
        rows.retain(|row| !row_has_id(row, id));
        if rows.len() == before {
            return Err(StoreError::NotFound {
                table: table.to_string(),
                id,
            });
        }
        Ok(())
    }

    async fn call_procedure(&self, name: &str, args: Value) -> Result<Value, StoreError> {
        {
            let mut state = self.state.write().await;
            state.operations.push(Operation::Procedure {
                name: name.to_string(),
            });
            state.check_available(USER_PROFILES_TABLE)?;
        }

        match name {
            PROC_CREATE_ADMIN_USER => Ok(self.create_admin_user(&args).await),
            PROC_LIST_ADMIN_USERS => Ok(self.list_admin_users().await),
            other => Err(StoreError::Remote {
                status: 404,
                body: format!("Could not find the function {other}"),
            }),
        }
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// AuthProvider
// ---------------------------------------------------------------------------

#[async_trait]
impl AuthProvider for MemoryStore {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let user = self
            .state
            .read()
            .await
            .find_user(email)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = verify_password(password, &user.password_hash)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = generate_access_token(user.id, &user.email, &self.jwt)
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        let identity = Identity {
            id: user.id,
            email: user.email,
        };

        self.publish(AuthEvent::SignedIn {
            access_token: access_token.clone(),
            expires_in: self.jwt.expires_in_secs(),
            user: identity.clone(),
        });
        Ok(AuthSession {
            access_token,
            expires_in: self.jwt.expires_in_secs(),
            user: identity,
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        self.state
            .write()
            .await
            .revoked_tokens
            .insert(access_token.to_string());
        self.publish(AuthEvent::SignedOut {
            access_token: access_token.to_string(),
        });
        Ok(())
    }

    async fn get_user(&self, access_token: &str) -> Result<Option<Identity>, AuthError> {
        let state = self.state.read().await;
        if state.revoked_tokens.contains(access_token) {
            return Ok(None);
        }
        let Ok(claims) = validate_token(access_token, &self.jwt) else {
            return Ok(None);
        };
        Ok(state
            .users
            .iter()
            .find(|u| u.id == claims.sub)
            .map(|u| Identity {
                id: u.id,
                email: u.email.clone(),
            }))
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}

// ---------------------------------------------------------------------------
// Row helpers
// ---------------------------------------------------------------------------

fn now_string() -> String {
    Utc::now().to_rfc3339()
}

fn newest_first_order() -> Order {
    Order {
        column: "created_at".into(),
        descending: true,
    }
}

fn row_has_id(row: &Value, id: RowId) -> bool {
    column_equals(row, "id", &id.to_string())
}

/// Equality as the REST filter `col=eq.value` sees it.
fn column_equals(row: &Value, column: &str, expected: &str) -> bool {
    match row.get(column) {
        Some(Value::String(s)) => s == expected,
        Some(Value::Null) | None => false,
        Some(other) => other.to_string() == expected,
    }
}

/// Server-side column defaults for each table.
fn apply_defaults(table: &str, row: &mut Value) {
    let Some(fields) = row.as_object_mut() else {
        return;
    };
    let now = now_string();
    set_default(fields, "id", json!(Uuid::new_v4()));
    set_default(fields, "created_at", json!(now));

    match table {
        CASE_STUDIES_TABLE => {
            set_default(fields, "featured", json!(false));
            set_default(fields, "results", json!([]));
            set_default(fields, "tags", json!([]));
            set_default(fields, "image_url", json!(""));
        }
        PROPOSALS_TABLE => set_default(fields, "status", json!("pending")),
        CONTACT_MESSAGES_TABLE => {
            set_default(fields, "status", json!("new"));
            set_default(fields, "admin_notes", json!(""));
            set_default(fields, "updated_at", json!(now));
        }
        USER_PROFILES_TABLE => set_default(fields, "role", json!(Role::User)),
        _ => {}
    }
}

fn set_default(fields: &mut Map<String, Value>, key: &str, value: Value) {
    fields.entry(key.to_string()).or_insert(value);
}

/// Stable sort; for descending order rows with equal keys come out newest
/// insert first.
fn sort_rows(rows: &mut [Value], order: &Order) {
    if order.descending {
        rows.reverse();
    }
    rows.sort_by(|a, b| {
        let ordering = compare_values(a.get(&order.column), b.get(&order.column));
        if order.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(a)), Some(Value::String(b))) => {
            match (
                DateTime::parse_from_rfc3339(a),
                DateTime::parse_from_rfc3339(b),
            ) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                _ => a.cmp(b),
            }
        }
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
