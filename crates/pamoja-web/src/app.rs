//! Main App Component

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use pamoja_core::{AppEvent, AppState, Command, HubSettings, PlanCatalog, RedirectAction, RedirectTrigger, Screen};

use crate::checkout;
use crate::pages::{AdminDashboard, LandingPage, LoginPage};

/// Shared handle on the application state, provided as context
#[derive(Clone, Copy)]
pub struct Store {
    state: RwSignal<AppState>,
}

impl Store {
    fn new(state: AppState) -> Self {
        Self {
            state: RwSignal::new(state),
        }
    }

    pub fn state(&self) -> RwSignal<AppState> {
        self.state
    }

    /// Run one event through the reducer and carry out its commands.
    ///
    /// Events arriving after the view was torn down are dropped.
    pub fn dispatch(&self, event: AppEvent) {
        let Some(current) = self.state.try_get_untracked() else {
            return;
        };
        let (next, commands) = current.reduce(event);
        self.state.set(next);

        for command in commands {
            match command {
                Command::StartCheckout { attempt, plan, api_key } => {
                    checkout::start(*self, attempt, plan, api_key);
                }
                Command::Navigate(url) => navigate(&url),
                Command::ReplaceUrl(url) => replace_url(&url),
            }
        }
    }
}

pub fn use_store() -> Store {
    expect_context::<Store>()
}

/// Current page address
pub fn current_href() -> Option<String> {
    web_sys::window().and_then(|w| w.location().href().ok())
}

fn navigate(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

fn replace_url(url: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(url));
    }
}

/// Open a link in a new tab
fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
    }
}

fn clear_pending(pending: StoredValue<Option<TimeoutHandle>>) {
    if let Some(handle) = pending.get_value() {
        handle.clear();
        pending.set_value(None);
    }
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let settings = HubSettings::with_overrides(option_env!("PAMOJA_API_KEY"), option_env!("PAMOJA_COMMUNITY_LINK"));
    let store = Store::new(AppState::new(PlanCatalog::standard(), settings));
    provide_context(store);

    if let Some(url) = current_href().and_then(|href| href.parse().ok()) {
        store.dispatch(AppEvent::PageLoaded { url });
    }

    // Community redirect, re-evaluated whenever the status or the link changes
    let pending = StoredValue::new(None::<TimeoutHandle>);
    let mut trigger = RedirectTrigger::default();
    Effect::new(move |_| {
        let (status, link) = store
            .state()
            .with(|s| (s.payment_status(), s.settings.community_link.clone()));

        match trigger.observe(status, &link) {
            RedirectAction::Keep => {}
            RedirectAction::Cancel => clear_pending(pending),
            RedirectAction::Arm { link, delay } => {
                clear_pending(pending);
                if let Ok(handle) = set_timeout_with_handle(move || open_in_new_tab(&link), delay) {
                    pending.set_value(Some(handle));
                }
            }
        }
    });
    on_cleanup(move || clear_pending(pending));

    view! {
        <main class="app">
            {move || match store.state().with(AppState::screen) {
                Screen::Landing => view! { <LandingPage /> }.into_any(),
                Screen::Login => view! { <LoginPage /> }.into_any(),
                Screen::Dashboard => view! { <AdminDashboard /> }.into_any(),
            }}
        </main>
    }
}
