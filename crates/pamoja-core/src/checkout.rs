//! Checkout State Machine
//!
//! ```text
//!            selectPlan                 success url
//!   ┌──────┐ ─────────▶ ┌─────────┐ ─────────────────▶ ┌─────────┐
//!   │ idle │            │ loading │                    │ success │
//!   └──────┘ ◀───┐      └─────────┘ ──┐                └─────────┘
//!       ▲        │ dismiss            │ error               │
//!       │        │                    ▼                     │
//!       │        └──────────────  ┌───────┐                 │
//!       │          dismiss/retry  │ error │                 │
//!       │                         └───────┘                 │
//!       └───────────────────── dismiss ─────────────────────┘
//! ```
//!
//! A page load carrying provider return parameters jumps straight to
//! `success` or `error`.

use serde::{Deserialize, Serialize};

use crate::catalog::{Plan, PlanCatalog};
use crate::redirect::{ProviderReturn, ReturnStatus};

/// Payment status shown to the visitor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl PaymentStatus {
    /// Whether the status modal is showing
    pub fn is_modal(&self) -> bool {
        !matches!(self, PaymentStatus::Idle)
    }
}

/// Checkout attempt number
pub type AttemptId = u64;

/// Events driving the checkout machine
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutEvent {
    /// Visitor chose a plan
    SelectPlan(Plan),

    /// The gateway answered for `attempt`
    PaymentResolved {
        attempt: AttemptId,
        outcome: std::result::Result<String, String>,
    },

    /// Page loaded with provider return parameters
    Returned(ProviderReturn),

    /// Modal closed, or "Try Again" pressed
    Dismiss,
}

/// Side effects the shell must carry out
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutCommand {
    /// Ask the gateway for a checkout URL
    StartCheckout { attempt: AttemptId, plan: Plan },

    /// Full-page navigation
    Navigate(String),
}

/// Checkout state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutState {
    status: PaymentStatus,
    selected_plan: Option<Plan>,
    attempt: AttemptId,
    last_error: Option<String>,
}

impl CheckoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn selected_plan(&self) -> Option<&Plan> {
        self.selected_plan.as_ref()
    }

    /// Current attempt number (0 before any plan was chosen)
    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    /// Detail of the last failure, for logs; the page shows a generic message
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Apply one event
    pub fn reduce(mut self, event: CheckoutEvent, catalog: &PlanCatalog) -> (Self, Option<CheckoutCommand>) {
        match event {
            CheckoutEvent::SelectPlan(plan) => {
                if self.status != PaymentStatus::Idle {
                    tracing::debug!(status = ?self.status, plan = %plan.id, "Ignoring plan selection");
                    return (self, None);
                }
                self.attempt += 1;
                self.status = PaymentStatus::Loading;
                self.selected_plan = Some(plan.clone());
                self.last_error = None;
                tracing::info!(attempt = self.attempt, plan = %plan.id, "Checkout started");

                let command = CheckoutCommand::StartCheckout {
                    attempt: self.attempt,
                    plan,
                };
                (self, Some(command))
            }

            CheckoutEvent::PaymentResolved { attempt, outcome } => {
                if self.status != PaymentStatus::Loading || attempt != self.attempt {
                    tracing::debug!(
                        attempt,
                        current = self.attempt,
                        status = ?self.status,
                        "Dropping stale checkout result"
                    );
                    return (self, None);
                }
                match outcome {
                    Ok(url) => {
                        self.status = PaymentStatus::Success;
                        tracing::info!(attempt, "Checkout succeeded");
                        (self, Some(CheckoutCommand::Navigate(url)))
                    }
                    Err(error) => {
                        tracing::warn!(attempt, error = %error, "Checkout failed");
                        self.status = PaymentStatus::Error;
                        self.last_error = Some(error);
                        (self, None)
                    }
                }
            }

            CheckoutEvent::Returned(returned) => {
                match returned.status {
                    ReturnStatus::Success => {
                        self.selected_plan = returned
                            .plan_id
                            .as_ref()
                            .and_then(|id| catalog.find(id.as_str()))
                            .cloned();
                        self.status = PaymentStatus::Success;
                    }
                    ReturnStatus::Error => {
                        self.status = PaymentStatus::Error;
                        self.last_error = Some("The payment could not be completed. Please try again.".into());
                    }
                    ReturnStatus::Cancelled => {
                        self.status = PaymentStatus::Error;
                        self.last_error = Some("The payment was cancelled. Please try again.".into());
                    }
                }
                tracing::info!(
                    returned = returned.status.as_str(),
                    plan = ?self.selected_plan.as_ref().map(|p| p.id.as_str()),
                    "Restored checkout result from URL"
                );
                (self, None)
            }

            CheckoutEvent::Dismiss => {
                if matches!(self.status, PaymentStatus::Success | PaymentStatus::Error) {
                    self.status = PaymentStatus::Idle;
                    self.selected_plan = None;
                    self.last_error = None;
                }
                (self, None)
            }
        }
    }
}
