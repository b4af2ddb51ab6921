//! Payment Simulator
//!
//! Stands in for a provider-hosted checkout. No network call is made: after
//! an artificial delay it returns the current page with the provider return
//! parameters appended, as if the provider had redirected back.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use pamoja_core::config::key_hint;
use pamoja_core::redirect::{self, ReturnStatus};
use pamoja_core::Plan;

use crate::error::{PaymentError, Result};
use crate::gateway::{CheckoutSession, PaymentGateway};

/// Artificial latency of a simulated checkout
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1_500);

/// Simulated gateway returning same-origin success URLs
#[derive(Clone, Debug)]
pub struct SimulatedGateway {
    /// Page the "provider" redirects back to
    return_base: Url,
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(return_base: Url) -> Self {
        Self::with_delay(return_base, SIMULATED_LATENCY)
    }

    /// A zero delay skips the timer entirely (for shells that sleep on
    /// their own, such as the browser)
    pub fn with_delay(return_base: Url, delay: Duration) -> Self {
        Self { return_base, delay }
    }

    /// Parse the return page from a string
    pub fn from_page(page: &str, delay: Duration) -> Result<Self> {
        Ok(Self::with_delay(Url::parse(page)?, delay))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn initiate(&self, plan: &Plan, api_key: &str) -> Result<CheckoutSession> {
        tracing::info!(plan = %plan.name, price = %plan.display_price(), "Initiating payment");

        if api_key.is_empty() {
            return Err(PaymentError::ApiKeyMissing);
        }
        tracing::debug!(key = %key_hint(api_key), "Authenticating with provider");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let url = redirect::return_url(&self.return_base, ReturnStatus::Success, &plan.id);
        tracing::info!(plan = %plan.id, "Simulated checkout session created");

        Ok(CheckoutSession {
            plan_id: plan.id.clone(),
            checkout_url: url.into(),
        })
    }

    fn name(&self) -> &str {
        "SimulatedGateway"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pamoja_core::PlanCatalog;

    fn gateway() -> SimulatedGateway {
        SimulatedGateway::new(Url::parse("https://hub.example/").unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_key_fails_fast() {
        let plan = PlanCatalog::standard().find("monthly").cloned().unwrap();
        let started = tokio::time::Instant::now();

        let err = gateway().initiate(&plan, "").await.unwrap_err();
        assert!(matches!(err, PaymentError::ApiKeyMissing));
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_after_delay() {
        let plan = PlanCatalog::standard().find("yearly").cloned().unwrap();
        let started = tokio::time::Instant::now();

        let session = gateway().initiate(&plan, "jp_test_key").await.unwrap();
        assert!(started.elapsed() >= SIMULATED_LATENCY);
        assert_eq!(
            session.checkout_url,
            "https://hub.example/?payment_status=success&plan_id=yearly"
        );
        assert_eq!(session.plan_id, plan.id);
    }

    #[tokio::test]
    async fn test_zero_delay() {
        let plan = PlanCatalog::standard().find("monthly").cloned().unwrap();
        let gateway = SimulatedGateway::from_page("https://hub.example/join", Duration::ZERO).unwrap();

        let session = gateway.initiate(&plan, "k").await.unwrap();
        assert!(session.checkout_url.contains("plan_id=monthly"));
    }

    #[test]
    fn test_bad_page() {
        assert!(matches!(
            SimulatedGateway::from_page("not a url", Duration::ZERO),
            Err(PaymentError::ReturnUrl(_))
        ));
    }
}
