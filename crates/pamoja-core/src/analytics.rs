//! Membership Analytics

use serde::{Deserialize, Serialize};

use crate::catalog::PlanCatalog;
use crate::member::{Member, MemberStatus};

/// Aggregate figures for the admin dashboard.
///
/// Recomputed from scratch on every membership change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipAnalytics {
    pub total_members: usize,
    pub active_members: usize,
    pub expired_members: usize,

    /// Sum of plan prices in UGX; unknown plans count as 0
    pub total_revenue: u64,
}

impl MembershipAnalytics {
    pub fn compute(members: &[Member], catalog: &PlanCatalog) -> Self {
        let analytics = members.iter().fold(Self::default(), |mut acc, member| {
            acc.total_members += 1;
            match member.status {
                MemberStatus::Active => acc.active_members += 1,
                MemberStatus::Expired => acc.expired_members += 1,
            }
            acc.total_revenue += catalog.price_of(&member.plan_id);
            acc
        });

        tracing::trace!(
            total = analytics.total_members,
            active = analytics.active_members,
            revenue = analytics.total_revenue,
            "Computed analytics"
        );
        analytics
    }
}
