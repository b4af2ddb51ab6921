//! # pamoja-payments
//!
//! Payment gateway abstraction and the checkout simulator for the Pamoja
//! community hub.
//!
//! ## Simulated redirect
//!
//! **Flow:** Pricing card → gateway → same-origin reload with return params
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────────────────┐
//! │  Landing    │────▶│ SimulatedGateway │────▶│ /?payment_status=success │
//! │  (pricing)  │     │  1.5 s, no I/O   │     │  &plan_id=<id>           │
//! └─────────────┘     └──────────────────┘     └──────────────────────────┘
//! ```
//!
//! A real deployment replaces the simulator with a gateway that asks a
//! backend to create the provider session; the backend, not the page, then
//! verifies provider webhooks.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pamoja_payments::{resolve_checkout, SimulatedGateway};
//!
//! let gateway = SimulatedGateway::new(page_url);
//! let event = resolve_checkout(&gateway, attempt, &plan, &api_key).await;
//! let (state, commands) = state.reduce(AppEvent::Checkout(event));
//! ```

mod error;
mod gateway;
mod simulator;

pub use error::{ErrorKind, PaymentError, Result};
pub use gateway::{resolve_checkout, CheckoutSession, PaymentGateway, PaymentOutcome};
pub use simulator::{SimulatedGateway, SIMULATED_LATENCY};
