//! UI Components

use leptos::prelude::*;

use pamoja_core::{AppEvent, AppState, CheckoutEvent, PaymentStatus, Plan};

use crate::app::use_store;

/// Pricing card with a "Choose Plan" button
#[component]
pub fn PricingCard(plan: Plan) -> impl IntoView {
    let store = use_store();
    let class = if plan.is_popular { "plan featured" } else { "plan" };
    let price = plan.display_price();
    let features = plan.features.clone();
    let (name, duration, description) = (plan.name.clone(), plan.duration.clone(), plan.description.clone());
    let badge = plan
        .is_popular
        .then(|| view! { <span class="badge">"Most Popular"</span> });

    view! {
        <div class=class>
            {badge}
            <h2>{name}</h2>
            <p class="description">{description}</p>
            <div class="price">{price}<span>{duration}</span></div>
            <ul>
                {features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
            </ul>
            <button
                class="btn btn-primary"
                on:click=move |_| store.dispatch(AppEvent::Checkout(CheckoutEvent::SelectPlan(plan.clone())))
            >
                "Choose Plan"
            </button>
        </div>
    }
}

/// Loading / success / error overlay
#[component]
pub fn StatusModal() -> impl IntoView {
    let store = use_store();
    let state = store.state();
    let dismiss = move |_: leptos::ev::MouseEvent| store.dispatch(AppEvent::Checkout(CheckoutEvent::Dismiss));

    let body = move || {
        let (status, plan_name, link, error) = state.with(|s: &AppState| {
            (
                s.payment_status(),
                s.checkout().selected_plan().map(|p| p.name.clone()),
                s.settings.community_link.clone(),
                s.checkout().last_error().unwrap_or_default().to_string(),
            )
        });

        match status {
            PaymentStatus::Idle => ().into_any(),
            PaymentStatus::Loading => view! {
                <div class="modal-body">
                    <div class="spinner"></div>
                    <h3>"Processing..."</h3>
                    <p>"Connecting to the payment provider."</p>
                </div>
            }
            .into_any(),
            PaymentStatus::Success => view! {
                <div class="modal-body success">
                    <h3>"Payment Successful!"</h3>
                    <p>
                        {match plan_name {
                            Some(name) => format!("Welcome to the {} plan.", name),
                            None => "Welcome to the community.".to_string(),
                        }}
                    </p>
                    <p class="redirecting">"Redirecting to WhatsApp..."</p>
                    <a href=link target="_blank" rel="noopener noreferrer" class="btn">
                        "Open WhatsApp Manually"
                    </a>
                    <button class="btn" on:click=dismiss>"Close"</button>
                </div>
            }
            .into_any(),
            PaymentStatus::Error => view! {
                <div class="modal-body error">
                    <h3>"Payment Failed"</h3>
                    <p>{error}</p>
                    <button class="btn btn-primary" on:click=dismiss>"Try Again"</button>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <Show when=move || state.with(|s| s.payment_status().is_modal())>
            <div class="modal-backdrop">
                <div class="modal">{body}</div>
            </div>
        </Show>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="hero">
            <h1>"Pamoja Community"</h1>
            <p class="tagline">"Connect with investors, mentors and fellow members."</p>
        </header>
    }
}

/// Footer with community rules and the hidden admin entry
#[component]
pub fn Footer() -> impl IntoView {
    let store = use_store();

    view! {
        <footer>
            <ul class="rules">
                <li>"Requirements for a loan are any government issued document like national ID, passport or driving licence only."</li>
                <li>"There is zero interest on loans which is already covered by our charity organisations."</li>
                <li>"Solidarity and being respectful is expected in our community."</li>
            </ul>
            <p>
                "© Community Hub. All rights reserved. "
                <a href="#" class="admin-link" on:click=move |ev| {
                    ev.prevent_default();
                    store.dispatch(AppEvent::OpenAdmin);
                }>"Admin"</a>
            </p>
        </footer>
    }
}
