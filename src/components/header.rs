//! Header Component
//!
//! App title plus the user menu with sign-out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::auth_service;
use crate::store::{store_set_user, use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();
    let (signing_out, set_signing_out) = signal(false);

    let on_sign_out = move |_| {
        if signing_out.get() {
            return;
        }
        set_signing_out.set(true);
        spawn_local(async move {
            auth_service().logout().await;
            store_set_user(&store, None);
            set_signing_out.set(false);
        });
    };

    view! {
        <header class="app-header">
            <h1>"DemoApp"</h1>
            <div class="user-menu">
                {move || {
                    store
                        .user()
                        .get()
                        .map(|user| {
                            view! {
                                <span class="user-name">{user.name.clone()}</span>
                                <span class="badge">{user.role.as_str()}</span>
                            }
                        })
                }}
                <button class="sign-out" on:click=on_sign_out disabled=move || signing_out.get()>
                    {move || if signing_out.get() { "Signing out..." } else { "Sign Out" }}
                </button>
            </div>
        </header>
    }
}
