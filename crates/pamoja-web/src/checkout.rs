//! Checkout Driver
//!
//! Browser side of `Command::StartCheckout`. The simulator runs with no
//! delay of its own; the latency is a browser timeout so no tokio timer is
//! needed in WASM.

use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout;

use pamoja_core::{AppEvent, AttemptId, CheckoutEvent, Plan};
use pamoja_payments::{resolve_checkout, SimulatedGateway, SIMULATED_LATENCY};

use crate::app::{current_href, Store};

pub fn start(store: Store, attempt: AttemptId, plan: Plan, api_key: String) {
    // A missing key fails without waiting
    let delay = if api_key.is_empty() {
        Duration::ZERO
    } else {
        SIMULATED_LATENCY
    };

    set_timeout(
        move || {
            leptos::task::spawn_local(async move {
                let href = current_href().unwrap_or_default();
                let event = match SimulatedGateway::from_page(&href, Duration::ZERO) {
                    Ok(gateway) => resolve_checkout(&gateway, attempt, &plan, &api_key).await,
                    Err(e) => CheckoutEvent::PaymentResolved {
                        attempt,
                        outcome: Err(e.user_message().to_string()),
                    },
                };
                store.dispatch(AppEvent::Checkout(event));
            });
        },
        delay,
    );
}
