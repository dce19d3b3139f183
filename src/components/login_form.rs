//! Login Form Component
//!
//! Credential entry with password visibility toggle, inline error display,
//! and demo-account fill buttons.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::auth_service;
use crate::models::Role;
use crate::store::{store_set_user, use_app_store};

#[component]
pub fn LoginForm() -> impl IntoView {
    let store = use_app_store();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = auth_service()
                .login(&username.get_untracked(), &password.get_untracked())
                .await;
            match result {
                Ok(user) => store_set_user(&store, Some(user)),
                // Fields keep their values so the user can correct them
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    };

    let fill_demo = move |role: Role| {
        let (user, pass) = match role {
            Role::Admin => ("admin", "admin123"),
            Role::Broker => ("broker", "broker123"),
        };
        set_username.set(user.to_string());
        set_password.set(pass.to_string());
        set_error.set(None);
    };

    view! {
        <div class="login-screen">
            <div class="card login-card">
                <div class="login-header">
                    <h1>"DemoApp"</h1>
                    <p>"Sign in to access the loan management dashboard"</p>
                </div>

                <form class="login-form" on:submit=on_submit>
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            set_username.set(event_target_value(&ev));
                            set_error.set(None);
                        }
                        disabled=move || loading.get()
                    />

                    <label for="password">"Password"</label>
                    <div class="password-field">
                        <input
                            id="password"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                set_password.set(event_target_value(&ev));
                                set_error.set(None);
                            }
                            disabled=move || loading.get()
                        />
                        <button
                            type="button"
                            class="password-toggle"
                            on:click=move |_| set_show_password.update(|v| *v = !*v)
                            disabled=move || loading.get()
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <div class="alert alert-error">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <button type="submit" class="login-submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <div class="demo-accounts">
                    <p>"Demo Accounts:"</p>
                    <div class="demo-buttons">
                        <button
                            type="button"
                            on:click=move |_| fill_demo(Role::Admin)
                            disabled=move || loading.get()
                        >
                            "Admin Demo"
                        </button>
                        <button
                            type="button"
                            on:click=move |_| fill_demo(Role::Broker)
                            disabled=move || loading.get()
                        >
                            "Broker Demo"
                        </button>
                    </div>
                    <p class="demo-hint"><strong>"Admin:"</strong>" admin / admin123"</p>
                    <p class="demo-hint"><strong>"Broker:"</strong>" broker / broker123"</p>
                </div>
            </div>
        </div>
    }
}
