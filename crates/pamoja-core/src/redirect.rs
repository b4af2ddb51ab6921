//! Provider Return Contract
//!
//! The simulated payment provider hands its result back to the page through
//! two query parameters on a same-origin URL:
//!
//! ```text
//! https://site/?payment_status=success&plan_id=yearly
//!               └──── success | error | cancelled ────┘
//! ```
//!
//! The page reads them once on load and then replaces the URL with its bare
//! path so a refresh does not replay the outcome.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::catalog::PlanId;

pub const PAYMENT_STATUS_PARAM: &str = "payment_status";
pub const PLAN_ID_PARAM: &str = "plan_id";

/// Outcome reported by the provider
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnStatus {
    Success,
    Error,
    Cancelled,
}

impl ReturnStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnStatus::Success => "success",
            ReturnStatus::Error => "error",
            ReturnStatus::Cancelled => "cancelled",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(ReturnStatus::Success),
            "error" => Some(ReturnStatus::Error),
            "cancelled" => Some(ReturnStatus::Cancelled),
            _ => None,
        }
    }
}

/// Parameters found on a returning URL
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderReturn {
    pub status: ReturnStatus,
    pub plan_id: Option<PlanId>,
}

/// Build the URL the provider sends the user back to.
///
/// Existing contract parameters on `base` are replaced; others are kept.
pub fn return_url(base: &Url, status: ReturnStatus, plan_id: &PlanId) -> Url {
    let mut url = base.clone();
    let kept: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(k, _)| k != PAYMENT_STATUS_PARAM && k != PLAN_ID_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(PAYMENT_STATUS_PARAM, status.as_str())
        .append_pair(PLAN_ID_PARAM, plan_id.as_str());
    url
}

/// Read the contract parameters, if a recognised status is present
pub fn read_return(url: &Url) -> Option<ProviderReturn> {
    let mut status = None;
    let mut plan_id = None;

    for (key, value) in url.query_pairs() {
        if key == PAYMENT_STATUS_PARAM && status.is_none() {
            status = Some(value.into_owned());
        } else if key == PLAN_ID_PARAM && plan_id.is_none() {
            plan_id = Some(PlanId::new(value.into_owned()));
        }
    }

    let status = ReturnStatus::parse(status.as_deref()?)?;
    Some(ProviderReturn { status, plan_id })
}

/// The URL with query and fragment removed
pub fn strip_return(url: &Url) -> Url {
    let mut stripped = url.clone();
    stripped.set_query(None);
    stripped.set_fragment(None);
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://hub.example/join").unwrap()
    }

    #[test]
    fn test_return_url_carries_plan() {
        let url = return_url(&base(), ReturnStatus::Success, &PlanId::new("yearly"));
        assert_eq!(
            url.as_str(),
            "https://hub.example/join?payment_status=success&plan_id=yearly"
        );

        let parsed = read_return(&url).unwrap();
        assert_eq!(parsed.status, ReturnStatus::Success);
        assert_eq!(parsed.plan_id, Some(PlanId::new("yearly")));
    }

    #[test]
    fn test_return_url_replaces_stale_params() {
        let stale = Url::parse("https://hub.example/?ref=tw&payment_status=error&plan_id=monthly").unwrap();
        let url = return_url(&stale, ReturnStatus::Success, &PlanId::new("quarterly"));
        assert_eq!(
            url.query(),
            Some("ref=tw&payment_status=success&plan_id=quarterly")
        );
    }

    #[test]
    fn test_read_return_statuses() {
        let cancelled = Url::parse("https://hub.example/?payment_status=cancelled").unwrap();
        let parsed = read_return(&cancelled).unwrap();
        assert_eq!(parsed.status, ReturnStatus::Cancelled);
        assert_eq!(parsed.plan_id, None);

        let unknown = Url::parse("https://hub.example/?payment_status=pending").unwrap();
        assert_eq!(read_return(&unknown), None);

        assert_eq!(read_return(&base()), None);
    }

    #[test]
    fn test_strip_return_keeps_path() {
        let url = Url::parse("https://hub.example/join?payment_status=success&plan_id=yearly#top").unwrap();
        assert_eq!(strip_return(&url).as_str(), "https://hub.example/join");
    }
}
