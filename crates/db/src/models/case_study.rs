//! Case study model and DTOs.

use digitalpro_core::editor::CaseStudyPayload;
use digitalpro_core::types::{RowId, Timestamp};
use serde::{Deserialize, Serialize};

/// A row from the `case_studies` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: RowId,
    pub title: String,
    pub description: String,
    pub client: String,
    pub industry: String,
    pub challenge: String,
    pub solution: String,
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    /// Insertion order is preserved.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: Timestamp,
}

/// Insert DTO. New case studies are never featured.
#[derive(Debug, Serialize)]
pub struct CreateCaseStudy {
    #[serde(flatten)]
    pub fields: CaseStudyPayload,
    pub featured: bool,
}

impl From<CaseStudyPayload> for CreateCaseStudy {
    fn from(fields: CaseStudyPayload) -> Self {
        Self {
            fields,
            featured: false,
        }
    }
}
