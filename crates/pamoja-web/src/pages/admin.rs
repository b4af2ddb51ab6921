//! Admin Dashboard Page

use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

use pamoja_core::catalog::format_ugx;
use pamoja_core::{AppEvent, DashboardEvent, Member, MemberId, MembershipAnalytics, PlanFilter, StatusFilter};

use crate::app::{use_store, Store};

const COPIED_FOR: Duration = Duration::from_secs(2);
const SAVED_FOR: Duration = Duration::from_millis(2_500);

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let store = use_store();
    let state = store.state();

    let analytics = move || {
        state.with(|s| {
            s.dashboard()
                .map(|d| d.analytics(&s.catalog))
                .unwrap_or_default()
        })
    };
    let plans = state.with_untracked(|s| s.catalog.plans().to_vec());
    let webhook_url = state.with_untracked(|s| s.settings.webhook_url.clone());
    let (copied, set_copied) = signal(false);
    let copy_webhook = {
        let url = webhook_url.clone();
        move |_: leptos::ev::MouseEvent| copy_to_clipboard(url.clone(), set_copied)
    };

    view! {
        <div class="admin">
            <header class="admin-header">
                <h1>"Admin Dashboard"</h1>
                <button class="btn" on:click=move |_| store.dispatch(AppEvent::Logout)>"Logout"</button>
            </header>

            <AnalyticsCards analytics=Signal::derive(analytics) />

            <section class="settings">
                <div class="card">
                    <h3>"Webhook Integration"</h3>
                    <label for="webhook-url">"Julypay Webhook URL"</label>
                    <div class="copy-field">
                        <input id="webhook-url" type="text" readonly=true value=webhook_url />
                        <button class="btn" on:click=copy_webhook>
                            {move || if copied.get() { "Copied!" } else { "Copy" }}
                        </button>
                    </div>
                    <p class="hint">"Paste this into the provider dashboard. Events are handled by your backend."</p>
                </div>
                <SettingsForms />
            </section>

            <section class="members">
                <h3>"Members"</h3>
                <div class="filters">
                    <select
                        prop:value=move || state.with(|s| s.dashboard().map(|d| d.filter().status.as_str()).unwrap_or("All"))
                        on:change=move |ev| {
                            if let Ok(filter) = event_target_value(&ev).parse::<StatusFilter>() {
                                store.dispatch(AppEvent::Dashboard(DashboardEvent::SetStatusFilter(filter)));
                            }
                        }
                    >
                        <option value="All">"All Statuses"</option>
                        <option value="Active">"Active"</option>
                        <option value="Expired">"Expired"</option>
                    </select>
                    <select
                        prop:value=move || state.with(|s| {
                            s.dashboard().map_or_else(|| "All".to_string(), |d| d.filter().plan.as_str().to_string())
                        })
                        on:change=move |ev| {
                            if let Ok(filter) = event_target_value(&ev).parse::<PlanFilter>() {
                                store.dispatch(AppEvent::Dashboard(DashboardEvent::SetPlanFilter(filter)));
                            }
                        }
                    >
                        <option value="All">"All Plans"</option>
                        {plans
                            .into_iter()
                            .map(|p| view! { <option value=p.id.to_string()>{p.name}</option> })
                            .collect_view()}
                    </select>
                </div>
                <MemberTable />
            </section>
        </div>
    }
}

#[component]
fn AnalyticsCards(analytics: Signal<MembershipAnalytics>) -> impl IntoView {
    view! {
        <section class="analytics">
            <div class="stat">
                <span class="label">"Total Members"</span>
                <span class="value">{move || analytics.get().total_members}</span>
            </div>
            <div class="stat">
                <span class="label">"Active Members"</span>
                <span class="value">{move || analytics.get().active_members}</span>
            </div>
            <div class="stat">
                <span class="label">"Total Revenue"</span>
                <span class="value">{move || format_ugx(analytics.get().total_revenue)}</span>
            </div>
        </section>
    }
}

/// API key and community link forms
#[component]
fn SettingsForms() -> impl IntoView {
    let store = use_store();
    let (api_key, set_api_key) = signal(store.state().with_untracked(|s| s.settings.api_key.clone()));
    let (link, set_link) = signal(store.state().with_untracked(|s| s.settings.community_link.clone()));
    let (key_saved, set_key_saved) = signal(false);
    let (link_saved, set_link_saved) = signal(false);

    let save_key = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        store.dispatch(AppEvent::SaveApiKey(api_key.get_untracked()));
        flash(set_key_saved, SAVED_FOR);
    };
    let save_link = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        store.dispatch(AppEvent::SaveCommunityLink(link.get_untracked()));
        flash(set_link_saved, SAVED_FOR);
    };

    view! {
        <div class="card">
            <h3>"Payment Provider"</h3>
            <form on:submit=save_key>
                <label for="api-key">"Julypay API Key"</label>
                <input
                    id="api-key"
                    type="password"
                    prop:value=move || api_key.get()
                    on:input=move |ev| set_api_key.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Save Key"</button>
            </form>
            <Show when=move || key_saved.get()>
                <p class="saved">"API Key saved!"</p>
            </Show>
        </div>
        <div class="card">
            <h3>"WhatsApp Community"</h3>
            <form on:submit=save_link>
                <label for="community-link">"Invitation Link"</label>
                <input
                    id="community-link"
                    type="url"
                    prop:value=move || link.get()
                    on:input=move |ev| set_link.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Save Link"</button>
            </form>
            <Show when=move || link_saved.get()>
                <p class="saved">"Link saved!"</p>
            </Show>
        </div>
    }
}

#[component]
fn MemberTable() -> impl IntoView {
    let store = use_store();
    let state = store.state();

    let rows = move || {
        state.with(|s| {
            s.dashboard()
                .map(|d| d.visible_members().into_iter().cloned().collect::<Vec<Member>>())
                .unwrap_or_default()
        })
    };
    let notice = move || state.with(|s| s.dashboard().and_then(|d| d.notice().map(str::to_string)));

    view! {
        {move || notice().map(|msg| view! { <p class="error">{msg}</p> })}
        <table>
            <thead>
                <tr>
                    <th>"Phone"</th>
                    <th>"Email"</th>
                    <th>"Plan"</th>
                    <th>"Join Date"</th>
                    <th>"Expiry Date"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    key=|member| member.id
                    children=move |member| view! { <MemberRow member=member store=store /> }
                />
            </tbody>
        </table>
        <Show when=move || rows().is_empty()>
            <p class="empty">"No members match the current filters."</p>
        </Show>
    }
}

#[component]
fn MemberRow(member: Member, store: Store) -> impl IntoView {
    let id = member.id;
    let status_class = format!("status status-{}", member.status.as_str().to_lowercase());

    view! {
        <tr>
            <td>{member.phone}</td>
            <td>{member.email}</td>
            <td>{member.plan_name}</td>
            <td>{member.join_date.to_string()}</td>
            <td>{member.expiry_date.to_string()}</td>
            <td><span class=status_class>{member.status.as_str()}</span></td>
            <td>
                <button class="btn btn-danger" on:click=move |_| remove(store, id)>"Remove"</button>
            </td>
        </tr>
    }
}

/// Raise `flag`, then lower it after `duration`
fn flash(flag: WriteSignal<bool>, duration: Duration) {
    flag.set(true);
    set_timeout(
        move || {
            // The page may be gone by now
            let _ = flag.try_set(false);
        },
        duration,
    );
}

/// Copy `text` to the clipboard and flash `copied` once it lands
fn copy_to_clipboard(text: String, copied: WriteSignal<bool>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(&text);
    leptos::task::spawn_local(async move {
        if JsFuture::from(promise).await.is_ok() {
            flash(copied, COPIED_FOR);
        }
    });
}

/// Two-step removal: record the request, then confirm or cancel
fn remove(store: Store, id: MemberId) {
    store.dispatch(AppEvent::Dashboard(DashboardEvent::RequestRemoval(id)));

    let confirmed = web_sys::window()
        .and_then(|w| {
            w.confirm_with_message("Are you sure you want to remove this member? This action cannot be undone.")
                .ok()
        })
        .unwrap_or(false);

    let event = if confirmed {
        DashboardEvent::ConfirmRemoval
    } else {
        DashboardEvent::CancelRemoval
    };
    store.dispatch(AppEvent::Dashboard(event));
}
