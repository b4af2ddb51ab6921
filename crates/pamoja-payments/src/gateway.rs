//! Payment Gateway
//!
//! The seam between the checkout state machine and whatever creates
//! checkout sessions. In production this would be a call to a backend that
//! talks to the provider; here the only implementation is the simulator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use pamoja_core::{AttemptId, CheckoutEvent, Plan, PlanId};

use crate::error::{PaymentError, Result};

/// A created checkout session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub plan_id: PlanId,

    /// Where to send the visitor
    pub checkout_url: String,
}

/// Wire view of a gateway answer: `{success, checkoutUrl?, error?}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&Result<CheckoutSession>> for PaymentOutcome {
    fn from(result: &Result<CheckoutSession>) -> Self {
        match result {
            Ok(session) => Self {
                success: true,
                checkout_url: Some(session.checkout_url.clone()),
                error: None,
            },
            Err(e) => Self {
                success: false,
                checkout_url: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Creates checkout sessions (Strategy pattern)
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Start a checkout for `plan`, authenticated with `api_key`
    async fn initiate(&self, plan: &Plan, api_key: &str) -> Result<CheckoutSession>;

    /// Gateway name
    fn name(&self) -> &str;
}

/// Run a `StartCheckout` command and turn the answer into the event the
/// state machine expects. Failures carry the user-facing message.
pub async fn resolve_checkout(
    gateway: &dyn PaymentGateway,
    attempt: AttemptId,
    plan: &Plan,
    api_key: &str,
) -> CheckoutEvent {
    let result = gateway.initiate(plan, api_key).await;
    if let Err(ref e) = result {
        tracing::warn!(gateway = gateway.name(), attempt, kind = ?e.kind(), error = %e, "Payment initiation failed");
    }
    CheckoutEvent::PaymentResolved {
        attempt,
        outcome: result
            .map(|session| session.checkout_url)
            .map_err(|e: PaymentError| e.user_message().to_string()),
    }
}
