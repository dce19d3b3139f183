//! Borrower Detail Component
//!
//! Detail panel for the selected borrower: contact header, AI explainability
//! accordion, role-gated workflow action buttons, and loan summary.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ActionKind};
use crate::components::borrower_pipeline::status_class;
use crate::components::RoleGuard;
use crate::format::format_currency;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BorrowerDetail() -> impl IntoView {
    let store = use_app_store();
    // In-flight action, if any; gates re-entrant clicks
    let (pending, set_pending) = signal::<Option<ActionKind>>(None);
    let (flags_open, set_flags_open) = signal(false);

    // A newly selected borrower starts with the accordion collapsed
    Effect::new(move |_| {
        let _ = store.active_borrower().get();
        set_flags_open.set(false);
    });

    let run_action = move |kind: ActionKind| {
        if pending.get_untracked().is_some() {
            return;
        }
        let Some(b) = store.active_borrower().get_untracked() else {
            return;
        };
        set_pending.set(Some(kind));
        spawn_local(async move {
            let ack = api::run_action(kind, &b.id).await;
            if ack.success {
                web_sys::console::log_1(
                    &format!("{} completed: {}", kind.label(), ack.message).into(),
                );
            }
            set_pending.set(None);
        });
    };

    let action_label = move |kind: ActionKind| {
        if pending.get() == Some(kind) {
            kind.pending_label()
        } else {
            kind.label()
        }
    };

    move || match store.active_borrower().get() {
        None => view! {
            <div class="card detail-placeholder">
                <p>"Select a borrower to view details"</p>
            </div>
        }
        .into_any(),
        Some(b) => {
            let flag_count = b.ai_flags.len();
            let flags = b.ai_flags.clone();
            view! {
                <div class="detail-panel">
                    <div class="card">
                        <div class="detail-header">
                            <div>
                                <h2>{b.name.clone()}</h2>
                                <p class="detail-contact">
                                    <span>{b.email.clone()}</span>
                                    <span>{b.phone.clone()}</span>
                                </p>
                            </div>
                            <div class="detail-summary">
                                <span class=status_class(&b.status)>{b.status.clone()}</span>
                                <p class="detail-amount">{format_currency(b.loan_amount)}</p>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <h3>"AI Explainability"</h3>
                        <div class="accordion">
                            <button
                                class="accordion-trigger"
                                on:click=move |_| set_flags_open.update(|v| *v = !*v)
                            >
                                {format!("Risk Factors Detected ({})", flag_count)}
                            </button>
                            <Show when=move || flags_open.get()>
                                <div class="accordion-content">
                                    {flags
                                        .iter()
                                        .map(|flag| {
                                            view! {
                                                <div class="alert alert-risk">{flag.clone()}</div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>

                        <div class="action-row">
                            <button
                                class="action-btn"
                                disabled=move || pending.get().is_some()
                                on:click=move |_| run_action(ActionKind::RequestDocuments)
                            >
                                {move || action_label(ActionKind::RequestDocuments)}
                            </button>

                            <RoleGuard admin_only=true>
                                <button
                                    class="action-btn"
                                    disabled=move || pending.get().is_some()
                                    on:click=move |_| run_action(ActionKind::SendToValuer)
                                >
                                    {move || action_label(ActionKind::SendToValuer)}
                                </button>
                            </RoleGuard>

                            <RoleGuard admin_only=true>
                                <button
                                    class="action-btn primary"
                                    disabled=move || pending.get().is_some()
                                    on:click=move |_| run_action(ActionKind::Approve)
                                >
                                    {move || action_label(ActionKind::Approve)}
                                </button>
                            </RoleGuard>
                        </div>
                    </div>

                    <div class="card">
                        <h3>"Loan Summary"</h3>
                        <div class="summary-grid">
                            <div>
                                <h4>"Employment"</h4>
                                <p>{b.employment.clone()}</p>
                            </div>
                            <div>
                                <h4>"Income"</h4>
                                <p>{format_currency(b.income)}</p>
                            </div>
                            <div>
                                <h4>"Existing Loan"</h4>
                                <p>{format_currency(b.existing_loan)}</p>
                            </div>
                            <div>
                                <h4>"Credit Score"</h4>
                                <p>{b.credit_score}</p>
                            </div>
                            <div class="summary-wide">
                                <h4>"Source of Funds"</h4>
                                <p>{b.source_of_funds.clone()}</p>
                            </div>
                        </div>

                        {(!b.risk_signal.is_empty()).then(|| view! {
                            <div class="alert alert-warning">
                                <strong>"Risk Signal: "</strong>
                                {b.risk_signal.clone()}
                            </div>
                        })}

                        <RoleGuard admin_only=true>
                            <button
                                class="action-btn primary full-width"
                                disabled=move || pending.get().is_some()
                                on:click=move |_| run_action(ActionKind::Escalate)
                            >
                                {move || action_label(ActionKind::Escalate)}
                            </button>
                        </RoleGuard>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
