//! Admin Login Page

use leptos::prelude::*;

use pamoja_core::AppEvent;

use crate::app::use_store;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_store();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let error = move || store.state().with(|s| s.session().login_error().map(str::to_string));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        store.dispatch(AppEvent::Login {
            username: username.get_untracked(),
            password: password.get_untracked(),
            today: chrono::Local::now().date_naive(),
        });
        set_password.set(String::new());
    };

    view! {
        <div class="login">
            <h2>"Admin Login"</h2>
            <form on:submit=submit>
                <div class="field">
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                {move || error().map(|msg| view! { <p class="error">{msg}</p> })}
                <button type="submit" class="btn btn-primary">"Login"</button>
            </form>
            <button class="btn" on:click=move |_| store.dispatch(AppEvent::BackToLanding)>
                "Back to site"
            </button>
        </div>
    }
}
