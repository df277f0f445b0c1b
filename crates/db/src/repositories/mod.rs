//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async operations that
//! accept `&dyn TableClient` as the first argument.

pub mod case_study_repo;
pub mod contact_message_repo;
pub mod proposal_repo;
pub mod user_profile_repo;

pub use case_study_repo::CaseStudyRepo;
pub use contact_message_repo::ContactMessageRepo;
pub use proposal_repo::ProposalRepo;
pub use user_profile_repo::UserProfileRepo;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::StoreError;

fn decode<T: DeserializeOwned>(row: Value) -> Result<T, StoreError> {
    Ok(serde_json::from_value(row)?)
}

fn decode_all<T: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>, StoreError> {
    rows.into_iter().map(decode).collect()
}

fn encode<T: Serialize>(value: &T) -> Result<Value, StoreError> {
    Ok(serde_json::to_value(value)?)
}
