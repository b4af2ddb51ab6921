//! Admin Dashboard State
//!
//! Member table, filters and the two-step removal flow. Created when the
//! admin view is entered and dropped on logout.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::MembershipAnalytics;
use crate::catalog::PlanCatalog;
use crate::error::{HubError, Result};
use crate::member::{Member, MemberFilter, MemberId, MemberStore, PlanFilter, StatusFilter};

/// Dashboard events
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardEvent {
    SetStatusFilter(StatusFilter),
    SetPlanFilter(PlanFilter),

    /// Ask for confirmation before deleting
    RequestRemoval(MemberId),
    ConfirmRemoval,
    CancelRemoval,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    store: MemberStore,
    filter: MemberFilter,
    pending_removal: Option<MemberId>,
    notice: Option<String>,
}

impl DashboardState {
    /// Seeded store, swept against `today`
    pub fn open(today: NaiveDate) -> Self {
        Self::with_store(MemberStore::seeded(today))
    }

    pub fn with_store(store: MemberStore) -> Self {
        Self {
            store,
            filter: MemberFilter::default(),
            pending_removal: None,
            notice: None,
        }
    }

    pub fn store(&self) -> &MemberStore {
        &self.store
    }

    pub fn filter(&self) -> &MemberFilter {
        &self.filter
    }

    pub fn pending_removal(&self) -> Option<MemberId> {
        self.pending_removal
    }

    /// Message from the last failed action
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Rows for the member table
    pub fn visible_members(&self) -> Vec<&Member> {
        self.store.filtered(&self.filter).collect()
    }

    pub fn analytics(&self, catalog: &PlanCatalog) -> MembershipAnalytics {
        MembershipAnalytics::compute(self.store.members(), catalog)
    }

    pub fn reduce(mut self, event: DashboardEvent) -> Self {
        self.notice = None;
        match event {
            DashboardEvent::SetStatusFilter(status) => self.filter.status = status,
            DashboardEvent::SetPlanFilter(plan) => self.filter.plan = plan,
            DashboardEvent::RequestRemoval(id) => {
                if self.store.contains(id) {
                    self.pending_removal = Some(id);
                } else {
                    self.notice = Some(HubError::MemberNotFound(id).user_message());
                }
            }
            DashboardEvent::ConfirmRemoval => {
                if let Err(e) = self.confirm_removal() {
                    self.notice = Some(e.user_message());
                }
            }
            DashboardEvent::CancelRemoval => self.pending_removal = None,
        }
        self
    }

    fn confirm_removal(&mut self) -> Result<Member> {
        let id = self.pending_removal.take().ok_or(HubError::NoPendingRemoval)?;
        self.store.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> DashboardState {
        DashboardState::open(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn test_removal_requires_confirmation() {
        let state = dashboard().reduce(DashboardEvent::RequestRemoval(MemberId(3)));
        assert_eq!(state.pending_removal(), Some(MemberId(3)));
        assert_eq!(state.store().len(), 5);

        let state = state.reduce(DashboardEvent::ConfirmRemoval);
        assert_eq!(state.pending_removal(), None);
        assert_eq!(state.store().len(), 4);
        assert!(state.visible_members().iter().all(|m| m.id != MemberId(3)));

        let analytics = state.analytics(&PlanCatalog::standard());
        assert_eq!(analytics.total_members, 4);
        assert_eq!(analytics.total_revenue, 239_000 - 12_000);
    }

    #[test]
    fn test_removed_member_absent_from_every_view() {
        let state = dashboard()
            .reduce(DashboardEvent::RequestRemoval(MemberId(3)))
            .reduce(DashboardEvent::ConfirmRemoval);

        for status in [StatusFilter::All, StatusFilter::Active, StatusFilter::Expired] {
            for plan in ["All", "monthly", "quarterly", "yearly"] {
                let view = state
                    .clone()
                    .reduce(DashboardEvent::SetStatusFilter(status))
                    .reduce(DashboardEvent::SetPlanFilter(plan.parse().unwrap()));
                assert!(view.visible_members().iter().all(|m| m.id != MemberId(3)));
            }
        }
    }

    #[test]
    fn test_cancel_keeps_member() {
        let state = dashboard()
            .reduce(DashboardEvent::RequestRemoval(MemberId(2)))
            .reduce(DashboardEvent::CancelRemoval)
            .reduce(DashboardEvent::ConfirmRemoval);

        assert_eq!(state.store().len(), 5);
        assert_eq!(state.notice(), Some("Nothing to remove."));
    }

    #[test]
    fn test_request_unknown_member() {
        let state = dashboard().reduce(DashboardEvent::RequestRemoval(MemberId(42)));
        assert_eq!(state.pending_removal(), None);
        assert_eq!(state.notice(), Some("Member 42 no longer exists."));
    }

    #[test]
    fn test_filters() {
        let state = dashboard()
            .reduce(DashboardEvent::SetStatusFilter(StatusFilter::Expired))
            .reduce(DashboardEvent::SetPlanFilter("monthly".parse().unwrap()));

        let ids: Vec<_> = state.visible_members().iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![5]);
    }
}
