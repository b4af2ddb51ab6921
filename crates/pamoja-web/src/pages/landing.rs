//! Landing Page

use leptos::prelude::*;

use crate::app::use_store;
use crate::components::{Footer, Header, PricingCard, StatusModal};

#[component]
pub fn LandingPage() -> impl IntoView {
    let store = use_store();
    let plans = store.state().with_untracked(|s| s.catalog.plans().to_vec());

    view! {
        <div class="landing">
            <Header />

            <section class="pricing">
                <h2>"Choose Your Membership"</h2>
                <p class="subtitle">
                    "This community membership is currently meant for East African citizens. "
                    "Purchase your membership and gain access to this community, a members-only "
                    "Telegram channel, and a members-only WhatsApp community."
                </p>

                <div class="plans">
                    {plans.into_iter().map(|plan| view! { <PricingCard plan=plan /> }).collect_view()}
                </div>
            </section>

            <StatusModal />
            <Footer />
        </div>
    }
}
