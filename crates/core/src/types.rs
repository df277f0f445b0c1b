/// Every remote row is keyed by a UUID assigned by the hosted store.
pub type RowId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
