//! Application State
//!
//! Everything the page knows, in one value. Transitions are pure:
//! `AppState::reduce(event)` returns the next state plus the commands the
//! shell (browser or test harness) has to execute.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::catalog::{Plan, PlanCatalog};
use crate::checkout::{AttemptId, CheckoutCommand, CheckoutEvent, CheckoutState, PaymentStatus};
use crate::config::HubSettings;
use crate::dashboard::{DashboardEvent, DashboardState};
use crate::redirect;
use crate::session::AdminSession;

/// Top-level view selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Landing,
    Admin,
}

/// What to render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Login,
    Dashboard,
}

/// Application events
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    /// First render; `url` is the address the page was loaded from
    PageLoaded { url: Url },

    OpenAdmin,
    BackToLanding,
    Login {
        username: String,
        password: String,
        today: NaiveDate,
    },
    Logout,

    SaveApiKey(String),
    SaveCommunityLink(String),

    Checkout(CheckoutEvent),
    Dashboard(DashboardEvent),
}

/// Side effects for the shell
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Call the payment gateway, then feed back `CheckoutEvent::PaymentResolved`
    StartCheckout {
        attempt: AttemptId,
        plan: Plan,
        api_key: String,
    },

    /// Full-page navigation
    Navigate(String),

    /// Rewrite the address bar without reloading
    ReplaceUrl(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub catalog: PlanCatalog,
    pub settings: HubSettings,
    view: View,
    session: AdminSession,
    checkout: CheckoutState,
    dashboard: Option<DashboardState>,
}

impl AppState {
    pub fn new(catalog: PlanCatalog, settings: HubSettings) -> Self {
        Self {
            catalog,
            settings,
            ..Default::default()
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    pub fn checkout(&self) -> &CheckoutState {
        &self.checkout
    }

    pub fn payment_status(&self) -> PaymentStatus {
        self.checkout.status()
    }

    pub fn dashboard(&self) -> Option<&DashboardState> {
        self.dashboard.as_ref()
    }

    pub fn screen(&self) -> Screen {
        match (self.view, self.session.is_authenticated()) {
            (View::Landing, _) => Screen::Landing,
            (View::Admin, false) => Screen::Login,
            (View::Admin, true) => Screen::Dashboard,
        }
    }

    pub fn reduce(mut self, event: AppEvent) -> (Self, Vec<Command>) {
        let mut commands = Vec::new();

        match event {
            AppEvent::PageLoaded { url } => {
                if let Some(returned) = redirect::read_return(&url) {
                    let (checkout, _) = self
                        .checkout
                        .reduce(CheckoutEvent::Returned(returned), &self.catalog);
                    self.checkout = checkout;
                    commands.push(Command::ReplaceUrl(redirect::strip_return(&url).into()));
                }
            }

            AppEvent::OpenAdmin => self.view = View::Admin,

            AppEvent::BackToLanding => self.view = View::Landing,

            AppEvent::Login { username, password, today } => {
                self.dashboard = self
                    .session
                    .attempt(&username, &password)
                    .ok()
                    .map(|()| DashboardState::open(today));
            }

            AppEvent::Logout => {
                self.session.logout();
                self.dashboard = None;
                self.view = View::Landing;
            }

            AppEvent::SaveApiKey(key) => {
                if self.session.require().is_ok() {
                    self.settings.api_key = key.trim().to_string();
                    tracing::info!(key = %self.settings.api_key_hint(), "API key saved");
                } else {
                    tracing::warn!("Ignoring API key change without admin session");
                }
            }

            AppEvent::SaveCommunityLink(link) => {
                if self.session.require().is_ok() {
                    self.settings.community_link = link.trim().to_string();
                    tracing::info!(link = %self.settings.community_link, "Community link saved");
                } else {
                    tracing::warn!("Ignoring community link change without admin session");
                }
            }

            AppEvent::Checkout(event) => {
                let (checkout, command) = self.checkout.reduce(event, &self.catalog);
                self.checkout = checkout;
                match command {
                    Some(CheckoutCommand::StartCheckout { attempt, plan }) => {
                        commands.push(Command::StartCheckout {
                            attempt,
                            plan,
                            api_key: self.settings.api_key.clone(),
                        });
                    }
                    Some(CheckoutCommand::Navigate(url)) => commands.push(Command::Navigate(url)),
                    None => {}
                }
            }

            AppEvent::Dashboard(event) => {
                if let Some(dashboard) = self.dashboard.take() {
                    self.dashboard = Some(dashboard.reduce(event));
                } else {
                    tracing::debug!(?event, "Dashboard event without an open dashboard");
                }
            }
        }

        (self, commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::MemberId;
    use crate::session::{ADMIN_PASSWORD, ADMIN_USERNAME};
    use crate::timer::{RedirectAction, RedirectTrigger, REDIRECT_DELAY};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn login(username: &str, password: &str) -> AppEvent {
        AppEvent::Login {
            username: username.into(),
            password: password.into(),
            today: today(),
        }
    }

    #[test]
    fn test_screen_dispatch() {
        let state = AppState::default();
        assert_eq!(state.screen(), Screen::Landing);

        let (state, _) = state.reduce(AppEvent::OpenAdmin);
        assert_eq!(state.screen(), Screen::Login);

        let (state, _) = state.reduce(login(ADMIN_USERNAME, ADMIN_PASSWORD));
        assert_eq!(state.screen(), Screen::Dashboard);
        assert!(state.dashboard().is_some());

        let (state, _) = state.reduce(AppEvent::Logout);
        assert_eq!(state.screen(), Screen::Landing);
        assert!(!state.session().is_authenticated());
        assert!(state.dashboard().is_none());
    }

    #[test]
    fn test_bad_login_stays_on_login() {
        let (state, _) = AppState::default().reduce(AppEvent::OpenAdmin);
        let (state, _) = state.reduce(login("BT", "password"));

        assert_eq!(state.screen(), Screen::Login);
        assert_eq!(state.session().login_error(), Some("Invalid username or password."));
        assert!(state.dashboard().is_none());
    }

    #[test]
    fn test_redirect_tracks_status_and_link() {
        let mut trigger = RedirectTrigger::default();
        let mut observe = |state: &AppState| trigger.observe(state.payment_status(), &state.settings.community_link);

        let url = Url::parse("https://hub.example/?payment_status=success&plan_id=monthly").unwrap();
        let (state, _) = AppState::default().reduce(AppEvent::PageLoaded { url });
        assert!(matches!(observe(&state), RedirectAction::Arm { .. }));

        // Link saved during the countdown replaces the pending open
        let (state, _) = state.reduce(AppEvent::OpenAdmin);
        let (state, _) = state.reduce(login(ADMIN_USERNAME, ADMIN_PASSWORD));
        assert_eq!(observe(&state), RedirectAction::Keep);
        let (state, _) = state.reduce(AppEvent::SaveCommunityLink("https://chat.whatsapp.com/new".into()));
        assert_eq!(
            observe(&state),
            RedirectAction::Arm {
                link: "https://chat.whatsapp.com/new".into(),
                delay: REDIRECT_DELAY,
            }
        );

        let (state, _) = state.reduce(AppEvent::Checkout(CheckoutEvent::Dismiss));
        assert_eq!(observe(&state), RedirectAction::Cancel);
    }

    #[test]
    fn test_failed_relogin_drops_dashboard() {
        let (state, _) = AppState::default().reduce(AppEvent::OpenAdmin);
        let (state, _) = state.reduce(login(ADMIN_USERNAME, ADMIN_PASSWORD));
        assert!(state.dashboard().is_some());

        let (state, _) = state.reduce(login("BT", "wrong"));
        assert!(!state.session().is_authenticated());
        assert_eq!(state.screen(), Screen::Login);
        assert!(state.dashboard().is_none());

        // Dashboard events have nowhere to go
        let (state, _) = state.reduce(AppEvent::Dashboard(DashboardEvent::RequestRemoval(MemberId(3))));
        assert!(state.dashboard().is_none());
    }

    #[test]
    fn test_page_load_with_success_params() {
        let url = Url::parse("https://hub.example/?payment_status=success&plan_id=yearly").unwrap();
        let (state, commands) = AppState::default().reduce(AppEvent::PageLoaded { url });

        assert_eq!(state.payment_status(), PaymentStatus::Success);
        assert_eq!(state.checkout().selected_plan().unwrap().name, "Annual Pro");
        assert_eq!(commands, vec![Command::ReplaceUrl("https://hub.example/".into())]);
    }

    #[test]
    fn test_page_load_with_cancelled_params() {
        let url = Url::parse("https://hub.example/?payment_status=cancelled").unwrap();
        let (state, commands) = AppState::default().reduce(AppEvent::PageLoaded { url });

        assert_eq!(state.payment_status(), PaymentStatus::Error);
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn test_plain_page_load() {
        let url = Url::parse("https://hub.example/?utm_source=x").unwrap();
        let (state, commands) = AppState::default().reduce(AppEvent::PageLoaded { url });

        assert_eq!(state.payment_status(), PaymentStatus::Idle);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_checkout_command_carries_api_key() {
        let mut state = AppState::default();
        state.settings.api_key = "jp_test_key".into();
        let plan = state.catalog.find("quarterly").cloned().unwrap();

        let (_, commands) = state.reduce(AppEvent::Checkout(CheckoutEvent::SelectPlan(plan.clone())));
        assert_eq!(
            commands,
            vec![Command::StartCheckout {
                attempt: 1,
                plan,
                api_key: "jp_test_key".into(),
            }]
        );
    }

    #[test]
    fn test_settings_require_login() {
        let (state, _) = AppState::default().reduce(AppEvent::SaveApiKey("sneaky".into()));
        assert!(!state.settings.has_api_key());

        let (state, _) = state.reduce(login(ADMIN_USERNAME, ADMIN_PASSWORD));
        let (state, _) = state.reduce(AppEvent::SaveApiKey("  jp_live_123  ".into()));
        let (state, _) = state.reduce(AppEvent::SaveCommunityLink("https://chat.whatsapp.com/abc".into()));
        assert_eq!(state.settings.api_key, "jp_live_123");
        assert_eq!(state.settings.community_link, "https://chat.whatsapp.com/abc");
    }

    #[test]
    fn test_dashboard_events_routed() {
        let (state, _) = AppState::default().reduce(login(ADMIN_USERNAME, ADMIN_PASSWORD));
        let (state, _) = state.reduce(AppEvent::Dashboard(DashboardEvent::RequestRemoval(MemberId(3))));
        let (state, _) = state.reduce(AppEvent::Dashboard(DashboardEvent::ConfirmRemoval));

        let dashboard = state.dashboard().unwrap();
        assert_eq!(dashboard.store().len(), 4);
        assert!(!dashboard.store().contains(MemberId(3)));
    }
}
