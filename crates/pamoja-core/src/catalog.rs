//! Plan Catalog
//!
//! The fixed set of purchasable membership tiers. Prices are whole
//! Ugandan shillings.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Plan identifier (e.g. "monthly", "yearly")
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanId(String);

impl PlanId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlanId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A purchasable membership tier
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: PlanId,

    /// Display name (e.g. "Annual Pro")
    pub name: String,

    /// Price in UGX
    pub price: u64,

    /// Billing period as shown on the card ("per month")
    pub duration: String,

    pub description: String,

    pub features: Vec<String>,

    /// Highlighted as "Most Popular"
    #[serde(default)]
    pub is_popular: bool,
}

impl Plan {
    /// Price formatted for display, e.g. `UGX 12,000`
    pub fn display_price(&self) -> String {
        format_ugx(self.price)
    }
}

/// `UGX` amount with grouped thousands
pub fn format_ugx(amount: u64) -> String {
    format!("UGX {}", group_thousands(amount))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Immutable list of plans, defined at startup
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl PlanCatalog {
    pub fn new(plans: Vec<Plan>) -> Self {
        Self { plans }
    }

    /// The three community tiers sold on the landing page
    pub fn standard() -> Self {
        Self::new(vec![
            Plan {
                id: PlanId::new("monthly"),
                name: "Monthly Access".into(),
                price: 12_000,
                duration: "per month".into(),
                description: "Perfect for getting started and experiencing the Pamoja Community benefits.".into(),
                features: features(&[
                    "10-minute video call with investors",
                    "Weekly Google Meet conference",
                    "Max loan limit of UGX 400,000",
                    "Loan paid before membership expires",
                ]),
                is_popular: false,
            },
            Plan {
                id: PlanId::new("quarterly"),
                name: "4-Month Deal".into(),
                price: 29_000,
                duration: "for 4 months".into(),
                description: "A great value plan to immerse yourself in the network and build connections.".into(),
                features: features(&[
                    "15-minute video call with investors",
                    "Weekly Google Meet conference",
                    "Max loan limit of UGX 800,000",
                    "Loan paid 3 days before membership expires",
                    "A community to network with investors",
                ]),
                is_popular: true,
            },
            Plan {
                id: PlanId::new("yearly"),
                name: "Annual Pro".into(),
                price: 93_000,
                duration: "per year".into(),
                description: "The best value for long-term commitment to your professional growth.".into(),
                features: features(&[
                    "15-minute video call with investors",
                    "Google Meet video conference",
                    "Max loan limit of UGX 3,000,000",
                    "Loan paid 1 month before membership expires",
                    "Community of fellow members and investors",
                    "Alerts about available online jobs",
                    "Alerts about available jobs in your city",
                    "Mentorship and coaching",
                ]),
                is_popular: false,
            },
        ])
    }

    /// Load a catalog from a JSON array of plans
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up a plan by id
    pub fn find(&self, id: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id.as_str() == id)
    }

    /// Price of a plan, or 0 when the id matches nothing
    pub fn price_of(&self, id: &PlanId) -> u64 {
        self.find(id.as_str()).map_or(0, |p| p.price)
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plan> {
        self.plans.iter()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
