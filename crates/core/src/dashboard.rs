//! Admin dashboard and list-page aggregation.
//!
//! The dashboard loads the proposals, case studies and contact messages
//! tables in full and counts in memory. Callers pass plain status values and
//! flags so this module stays independent of the row types.

use serde::Serialize;

use crate::status::{MessageStatus, ProposalStatus};

/// Number of proposals shown in the "Recent Proposals" panel.
pub const RECENT_PROPOSALS_LIMIT: usize = 5;

/// Stat tiles shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_proposals: usize,
    pub pending_proposals: usize,
    pub total_case_studies: usize,
    pub featured_case_studies: usize,
    pub total_messages: usize,
    pub new_messages: usize,
}

impl DashboardStats {
    /// Count totals and the pending / featured / new subsets.
    pub fn compute(
        proposal_statuses: impl IntoIterator<Item = ProposalStatus>,
        featured_flags: impl IntoIterator<Item = bool>,
        message_statuses: impl IntoIterator<Item = MessageStatus>,
    ) -> Self {
        let mut stats = Self::default();

        for status in proposal_statuses {
            stats.total_proposals += 1;
            if status == ProposalStatus::Pending {
                stats.pending_proposals += 1;
            }
        }
        for featured in featured_flags {
            stats.total_case_studies += 1;
            if featured {
                stats.featured_case_studies += 1;
            }
        }
        for status in message_statuses {
            stats.total_messages += 1;
            if status == MessageStatus::New {
                stats.new_messages += 1;
            }
        }

        stats
    }
}

/// Per-status counts above the proposal list. Always counts the whole
/// table, whatever filter the list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProposalStats {
    pub total: usize,
    pub pending: usize,
    pub reviewed: usize,
    pub approved: usize,
    pub declined: usize,
}

impl ProposalStats {
    pub fn compute(statuses: impl IntoIterator<Item = ProposalStatus>) -> Self {
        let mut stats = Self::default();
        for status in statuses {
            stats.total += 1;
            match status {
                ProposalStatus::Pending => stats.pending += 1,
                ProposalStatus::Reviewed => stats.reviewed += 1,
                ProposalStatus::Approved => stats.approved += 1,
                ProposalStatus::Declined => stats.declined += 1,
            }
        }
        stats
    }
}

/// Per-status counts above the message list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MessageStats {
    pub total: usize,
    pub new: usize,
    pub read: usize,
    pub replied: usize,
    pub archived: usize,
}

impl MessageStats {
    pub fn compute(statuses: impl IntoIterator<Item = MessageStatus>) -> Self {
        let mut stats = Self::default();
        for status in statuses {
            stats.total += 1;
            match status {
                MessageStatus::New => stats.new += 1,
                MessageStatus::Read => stats.read += 1,
                MessageStatus::Replied => stats.replied += 1,
                MessageStatus::Archived => stats.archived += 1,
            }
        }
        stats
    }
}

/// The first [`RECENT_PROPOSALS_LIMIT`] items of a newest-first list.
pub fn recent<T: Clone>(newest_first: &[T]) -> Vec<T> {
    newest_first
        .iter()
        .take(RECENT_PROPOSALS_LIMIT)
        .cloned()
        .collect()
}
