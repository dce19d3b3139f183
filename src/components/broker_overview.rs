//! Broker Overview Component
//!
//! Broker stats, role-specific contact shortcuts, the onboarding workflow
//! checklist, and the AI assistant toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, COMPLETED_STEPS};
use crate::auth::{is_admin, is_broker};
use crate::components::RoleGuard;
use crate::format::format_currency;
use crate::store::{
    store_set_broker_info, store_set_workflow_steps, use_app_store, AppStateStoreFields,
};

#[component]
pub fn BrokerOverview() -> impl IntoView {
    let store = use_app_store();
    let (ai_assistant, set_ai_assistant) = signal(false);

    // Broker info and workflow steps load once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let info = api::get_broker_info().await;
            store_set_broker_info(&store, info);
            let steps = api::get_workflow_steps().await;
            store_set_workflow_steps(&store, steps);
        });
    });

    let title = move || {
        if is_admin(store.user().get().as_ref()) {
            "Broker Overview"
        } else {
            "My Overview"
        }
    };

    // Brokers see their own name; admins see the broker on the deal
    let display_name = move || {
        let user = store.user().get();
        if is_broker(user.as_ref()) {
            user.map(|u| u.name).unwrap_or_default()
        } else {
            store
                .broker_info()
                .get()
                .map(|info| info.name)
                .unwrap_or_default()
        }
    };

    move || match store.broker_info().get() {
        None => view! {
            <div class="card overview-placeholder">
                <p>"Loading broker information..."</p>
            </div>
        }
        .into_any(),
        Some(info) => view! {
            <div class="overview-panel">
                <div class="card">
                    <h2>{title}</h2>
                    <h3 class="broker-name">{display_name}</h3>

                    <div class="stats-grid">
                        <div class="stat">
                            <p class="stat-value">{info.deals}</p>
                            <p class="stat-label">"Deals"</p>
                        </div>
                        <div class="stat">
                            <p class="stat-value">{info.approval_rate.clone()}</p>
                            <p class="stat-label">"Approval Rate"</p>
                        </div>
                        <div class="stat">
                            <p class="stat-value">{format_currency(info.pending)}</p>
                            <p class="stat-label">"Pending"</p>
                        </div>
                    </div>

                    <RoleGuard broker_only=true>
                        <div class="contact-row">
                            <button class="contact-btn">"Call Support"</button>
                            <button class="contact-btn">"Email"</button>
                            <button class="contact-btn">"Chat"</button>
                        </div>
                    </RoleGuard>

                    <RoleGuard admin_only=true>
                        <div class="contact-row">
                            <button class="contact-btn">"Call Broker"</button>
                            <button class="contact-btn">"Email Broker"</button>
                            <button class="contact-btn">"Message"</button>
                        </div>
                    </RoleGuard>
                </div>

                <div class="card">
                    <h3>"Onboarding Workflow"</h3>
                    <ol class="workflow-steps">
                        {move || {
                            store
                                .workflow_steps()
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, step)| {
                                    let done = index < COMPLETED_STEPS;
                                    let step_class =
                                        if done { "workflow-step done" } else { "workflow-step" };
                                    view! {
                                        <li class=step_class>
                                            <span class="step-number">{index + 1}</span>
                                            <span class="step-mark">
                                                {if done { "✓" } else { "○" }}
                                            </span>
                                            <span class="step-label">{step}</span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ol>
                </div>

                <div class="card">
                    <h3>"AI Assistant"</h3>
                    <div class="assistant-row">
                        <div>
                            <label for="ai-assistant">"E Ardsassist"</label>
                            <p class="assistant-hint">
                                "Enable AI-powered assistance for loan processing"
                            </p>
                        </div>
                        <input
                            id="ai-assistant"
                            type="checkbox"
                            class="switch"
                            prop:checked=move || ai_assistant.get()
                            on:change=move |_| set_ai_assistant.update(|v| *v = !*v)
                        />
                    </div>
                </div>
            </div>
        }
        .into_any(),
    }
}
