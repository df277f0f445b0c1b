//! Proposal request model and DTOs.

use digitalpro_core::forms::ProposalForm;
use digitalpro_core::status::ProposalStatus;
use digitalpro_core::types::{RowId, Timestamp};
use serde::{Deserialize, Serialize};

/// A row from the `proposals` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub id: RowId,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub services: Vec<String>,
    pub budget_range: String,
    pub timeline: String,
    pub project_description: String,
    pub status: ProposalStatus,
    pub created_at: Timestamp,
}

/// Insert DTO built from a validated public submission.
#[derive(Debug, Serialize)]
pub struct CreateProposal {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub services: Vec<String>,
    pub budget_range: String,
    pub timeline: String,
    pub project_description: String,
    pub status: ProposalStatus,
}

impl From<ProposalForm> for CreateProposal {
    fn from(form: ProposalForm) -> Self {
        Self {
            company_name: form.company_name,
            contact_name: form.contact_name,
            email: form.email,
            phone: form.phone,
            services: form.services,
            budget_range: form.budget_range,
            timeline: form.timeline,
            project_description: form.project_description,
            status: ProposalStatus::INITIAL,
        }
    }
}
