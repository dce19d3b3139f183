//! Auth Shell Component
//!
//! Restores a persisted session on mount and gates the dashboard behind the
//! login form.

use leptos::prelude::*;

use crate::auth::auth_service;
use crate::components::LoginForm;
use crate::store::{store_set_user, use_app_store, AppStateStoreFields};

#[component]
pub fn AuthShell(children: ChildrenFn) -> impl IntoView {
    let store = use_app_store();

    // Check for an existing session record on mount
    Effect::new(move |_| {
        if store.user().read_untracked().is_none() {
            if let Some(user) = auth_service().current_user() {
                store_set_user(&store, Some(user));
            }
        }
    });

    move || {
        if store.user().get().is_some() {
            children()
        } else {
            view! { <LoginForm /> }.into_any()
        }
    }
}
