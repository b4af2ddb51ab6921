//! Member Store
//!
//! In-memory membership records with a one-time expiry sweep on load,
//! irreversible removal, and status/plan filtering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::PlanId;
use crate::error::{HubError, Result};

/// Member identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u32);

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Membership status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberStatus {
    Active,
    Expired,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "Active",
            MemberStatus::Expired => "Expired",
        }
    }
}

/// A membership record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub phone: String,
    pub email: String,

    /// Not checked against the catalog; unknown ids earn no revenue
    pub plan_id: PlanId,
    pub plan_name: String,

    pub join_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: MemberStatus,
}

impl Member {
    /// Active but past its expiry date
    pub fn is_lapsed(&self, today: NaiveDate) -> bool {
        self.status == MemberStatus::Active && self.expiry_date < today
    }
}

/// Seed records the dashboard starts from
pub fn seed_members() -> Vec<Member> {
    vec![
        seed(1, "+256772123456", "yearly", "Annual Pro", (2023, 10, 1), (2024, 10, 1), MemberStatus::Active),
        seed(2, "+256755987654", "quarterly", "4-Month Deal", (2024, 3, 15), (2024, 7, 15), MemberStatus::Active),
        seed(3, "+256789123789", "monthly", "Monthly Access", (2024, 5, 20), (2024, 6, 20), MemberStatus::Active),
        seed(4, "+256701234567", "yearly", "Annual Pro", (2022, 1, 10), (2023, 1, 10), MemberStatus::Expired),
        seed(5, "+256798765432", "monthly", "Monthly Access", (2024, 4, 30), (2024, 5, 30), MemberStatus::Expired),
    ]
}

fn seed(
    id: u32,
    phone: &str,
    plan_id: &str,
    plan_name: &str,
    joined: (i32, u32, u32),
    expires: (i32, u32, u32),
    status: MemberStatus,
) -> Member {
    Member {
        id: MemberId(id),
        phone: phone.into(),
        email: format!("user{}@example.com", id),
        plan_id: PlanId::new(plan_id),
        plan_name: plan_name.into(),
        join_date: date(joined),
        expiry_date: date(expires),
        status,
    }
}

fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

// ============================================================================
// Filters
// ============================================================================

/// Status filter for the member table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Expired,
}

impl StatusFilter {
    pub fn matches(&self, status: MemberStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == MemberStatus::Active,
            StatusFilter::Expired => status == MemberStatus::Expired,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Expired => "Expired",
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "All" => Ok(StatusFilter::All),
            "Active" => Ok(StatusFilter::Active),
            "Expired" => Ok(StatusFilter::Expired),
            other => Err(HubError::InvalidFilter(other.to_string())),
        }
    }
}

/// Plan filter for the member table
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanFilter {
    #[default]
    All,
    Plan(PlanId),
}

impl PlanFilter {
    pub fn matches(&self, plan_id: &PlanId) -> bool {
        match self {
            PlanFilter::All => true,
            PlanFilter::Plan(id) => id == plan_id,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlanFilter::All => "All",
            PlanFilter::Plan(id) => id.as_str(),
        }
    }
}

impl std::str::FromStr for PlanFilter {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" => Err(HubError::InvalidFilter(String::new())),
            "All" => Ok(PlanFilter::All),
            id => Ok(PlanFilter::Plan(PlanId::new(id))),
        }
    }
}

/// Both filters, composed by logical AND
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberFilter {
    pub status: StatusFilter,
    pub plan: PlanFilter,
}

impl MemberFilter {
    pub fn matches(&self, member: &Member) -> bool {
        self.status.matches(member.status) && self.plan.matches(&member.plan_id)
    }
}

// ============================================================================
// Store
// ============================================================================

/// Ordered in-memory member collection
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStore {
    members: Vec<Member>,
}

impl MemberStore {
    /// Build from records and run the expiry sweep once
    pub fn load(members: Vec<Member>, today: NaiveDate) -> Self {
        let mut store = Self { members };
        let expired = store.sweep_expired(today);
        tracing::debug!(members = store.len(), expired, %today, "Loaded member store");
        store
    }

    /// Seed data, swept against `today`
    pub fn seeded(today: NaiveDate) -> Self {
        Self::load(seed_members(), today)
    }

    /// Mark every lapsed active member as expired.
    ///
    /// Returns how many records changed; a second run returns 0.
    pub fn sweep_expired(&mut self, today: NaiveDate) -> usize {
        let mut changed = 0;
        for member in self.members.iter_mut().filter(|m| m.is_lapsed(today)) {
            member.status = MemberStatus::Expired;
            changed += 1;
        }
        changed
    }

    /// Delete a member. There is no undo.
    pub fn remove(&mut self, id: MemberId) -> Result<Member> {
        let index = self
            .members
            .iter()
            .position(|m| m.id == id)
            .ok_or(HubError::MemberNotFound(id))?;

        let removed = self.members.remove(index);
        tracing::info!(member_id = %id, email = %removed.email, "Removed member");
        Ok(removed)
    }

    pub fn get(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.get(id).is_some()
    }

    /// Members passing `filter`, in store order
    pub fn filtered<'a>(&'a self, filter: &'a MemberFilter) -> impl Iterator<Item = &'a Member> + 'a {
        self.members.iter().filter(move |m| filter.matches(m))
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Export the records as a JSON array
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.members)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn active_member(id: u32, expiry_date: NaiveDate) -> Member {
        Member {
            id: MemberId(id),
            phone: "+256700000000".into(),
            email: format!("m{}@example.com", id),
            plan_id: PlanId::new("monthly"),
            plan_name: "Monthly Access".into(),
            join_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            expiry_date,
            status: MemberStatus::Active,
        }
    }

    #[test]
    fn test_export_json() {
        let store = MemberStore::load(vec![active_member(7, today())], today());
        let json: serde_json::Value = serde_json::from_str(&store.to_json().unwrap()).unwrap();

        assert_eq!(json[0]["id"], 7);
        assert_eq!(json[0]["planId"], "monthly");
        assert_eq!(json[0]["expiryDate"], "2024-06-01");
        assert_eq!(json[0]["status"], "Active");
    }

    #[test]
    fn test_sweep_expires_yesterday_keeps_tomorrow() {
        let yesterday = today().pred_opt().unwrap();
        let tomorrow = today().succ_opt().unwrap();
        let store = MemberStore::load(
            vec![active_member(1, yesterday), active_member(2, tomorrow), active_member(3, today())],
            today(),
        );

        assert_eq!(store.get(MemberId(1)).unwrap().status, MemberStatus::Expired);
        assert_eq!(store.get(MemberId(2)).unwrap().status, MemberStatus::Active);
        // Expiring today is not "strictly before today"
        assert_eq!(store.get(MemberId(3)).unwrap().status, MemberStatus::Active);
    }

    #[test]
    fn test_sweep_is_idempotent() {
        let mut once = MemberStore::seeded(today());
        let snapshot = once.clone();

        assert_eq!(once.sweep_expired(today()), 0);
        assert_eq!(once, snapshot);
    }

    #[test]
    fn test_seed_sweep() {
        // On 2024-06-21 only member 3 (expired 2024-06-20) has lapsed
        let mut store = MemberStore {
            members: seed_members(),
        };
        let changed = store.sweep_expired(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
        assert_eq!(changed, 1);
        assert_eq!(store.get(MemberId(3)).unwrap().status, MemberStatus::Expired);
        assert_eq!(store.get(MemberId(1)).unwrap().status, MemberStatus::Active);
    }

    #[test]
    fn test_remove_member() {
        let mut store = MemberStore::seeded(today());
        let before = store.len();

        let removed = store.remove(MemberId(3)).unwrap();
        assert_eq!(removed.id, MemberId(3));
        assert_eq!(store.len(), before - 1);

        let everything = MemberFilter::default();
        assert!(store.filtered(&everything).all(|m| m.id != MemberId(3)));

        assert!(matches!(store.remove(MemberId(3)), Err(HubError::MemberNotFound(_))));
    }

    #[test]
    fn test_filters_compose() {
        let store = MemberStore::seeded(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

        let filter = MemberFilter {
            status: StatusFilter::Expired,
            plan: PlanFilter::Plan(PlanId::new("yearly")),
        };
        let ids: Vec<_> = store.filtered(&filter).map(|m| m.id.0).collect();
        assert_eq!(ids, vec![4]);

        let filter = MemberFilter {
            status: StatusFilter::Active,
            plan: PlanFilter::All,
        };
        let ids: Vec<_> = store.filtered(&filter).map(|m| m.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!("Expired".parse::<StatusFilter>().unwrap(), StatusFilter::Expired);
        assert!("expired".parse::<StatusFilter>().is_err());
        assert_eq!("All".parse::<PlanFilter>().unwrap(), PlanFilter::All);
        assert_eq!(
            "monthly".parse::<PlanFilter>().unwrap(),
            PlanFilter::Plan(PlanId::new("monthly"))
        );
    }
}
