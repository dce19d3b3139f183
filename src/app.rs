//! Dashboard App
//!
//! Creates the application store, provides it via context, and composes the
//! three-column dashboard behind the auth shell.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AdminPanel, AuthShell, BorrowerDetail, BorrowerPipeline, BrokerOverview, Header,
};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    view! {
        <AuthShell>
            <div class="dashboard">
                <Header />
                <div class="dashboard-columns">
                    <div class="column">
                        <BorrowerPipeline />
                    </div>
                    <div class="column">
                        <BorrowerDetail />
                        <AdminPanel />
                    </div>
                    <div class="column">
                        <BrokerOverview />
                    </div>
                </div>
            </div>
        </AuthShell>
    }
}
