//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. A single instance
//! is created in `App` and provided via context; every setter replaces its
//! slice wholesale.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Borrower, BorrowerBuckets, BrokerInfo, PipelineTab, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user, mirrored from the persisted session
    pub user: Option<User>,
    /// Borrower shown in the detail panel; always one of the bucket members
    pub active_borrower: Option<Borrower>,
    /// Selected pipeline tab
    pub active_tab: PipelineTab,
    /// Borrowers by pipeline stage, fixed at load time
    pub borrowers: BorrowerBuckets,
    /// Broker overview record, loaded once
    pub broker_info: Option<BrokerInfo>,
    /// Onboarding workflow step labels
    pub workflow_steps: Vec<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_user(store: &AppStore, user: Option<User>) {
    store.user().set(user);
}

pub fn store_set_active_borrower(store: &AppStore, borrower: Borrower) {
    store.active_borrower().set(Some(borrower));
}

pub fn store_set_active_tab(store: &AppStore, tab: PipelineTab) {
    store.active_tab().set(tab);
}

pub fn store_set_borrowers(store: &AppStore, buckets: BorrowerBuckets) {
    store.borrowers().set(buckets);
}

pub fn store_set_broker_info(store: &AppStore, info: BrokerInfo) {
    store.broker_info().set(Some(info));
}

pub fn store_set_workflow_steps(store: &AppStore, steps: Vec<String>) {
    store.workflow_steps().set(steps);
}
