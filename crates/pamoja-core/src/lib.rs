//! # pamoja-core
//!
//! Membership lifecycle and checkout logic for the Pamoja community hub,
//! independent of any UI runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         AppState                             │
//! │  ┌─────────────┐  ┌──────────────┐  ┌────────────────────┐  │
//! │  │  Checkout   │  │ AdminSession │  │  DashboardState    │  │
//! │  │  (status    │  │ (credential  │  │  MemberStore +     │  │
//! │  │   machine)  │  │   check)     │  │  filters/analytics │  │
//! │  └─────────────┘  └──────────────┘  └────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//!        │ Command::StartCheckout / Navigate / ReplaceUrl
//!        ▼
//!   shell (browser or tests) ──▶ PaymentGateway ──▶ CheckoutEvent
//! ```
//!
//! Every transition is `AppState::reduce(event) -> (AppState, Vec<Command>)`.
//! When to open the community link after a payment is decided by
//! `RedirectTrigger`, keyed on the payment status and the link.

pub mod analytics;
pub mod app;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod member;
pub mod redirect;
pub mod session;
pub mod timer;

pub use analytics::MembershipAnalytics;
pub use app::{AppEvent, AppState, Command, Screen, View};
pub use catalog::{Plan, PlanCatalog, PlanId};
pub use checkout::{AttemptId, CheckoutEvent, CheckoutState, PaymentStatus};
pub use config::HubSettings;
pub use dashboard::{DashboardEvent, DashboardState};
pub use error::{HubError, Result};
pub use member::{Member, MemberFilter, MemberId, MemberStatus, MemberStore, PlanFilter, StatusFilter};
pub use redirect::{ProviderReturn, ReturnStatus};
pub use session::AdminSession;
pub use timer::{RedirectAction, RedirectTrigger, REDIRECT_DELAY};
