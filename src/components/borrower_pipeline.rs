//! Borrower Pipeline Component
//!
//! Three-stage tab list of borrower applications; clicking a card selects the
//! borrower for the detail panel.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::format::format_currency;
use crate::models::{Borrower, PipelineTab};
use crate::store::{
    store_set_active_borrower, store_set_active_tab, store_set_borrowers, use_app_store,
    AppStateStoreFields,
};

/// Badge class for a borrower status label; unrecognized statuses get the
/// plain badge
pub(crate) fn status_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "new" => "badge badge-new",
        "in review" => "badge badge-review",
        "approved" => "badge badge-approved",
        _ => "badge",
    }
}

#[component]
fn BorrowerCard(borrower: Borrower) -> impl IntoView {
    let store = use_app_store();
    let id = borrower.id.clone();
    let selected = borrower.clone();

    let is_active = move || {
        store
            .active_borrower()
            .get()
            .map(|b| b.id == id)
            .unwrap_or(false)
    };
    let card_class = move || {
        if is_active() {
            "borrower-card active"
        } else {
            "borrower-card"
        }
    };

    view! {
        <div
            class=card_class
            on:click=move |_| store_set_active_borrower(&store, selected.clone())
        >
            <div class="borrower-card-header">
                <h3>{borrower.name.clone()}</h3>
                <span class=status_class(&borrower.status)>{borrower.status.clone()}</span>
            </div>
            <p class="loan-type">{borrower.loan_type.clone()}</p>
            <p class="loan-amount">{format_currency(borrower.amount)}</p>
        </div>
    }
}

#[component]
pub fn BorrowerPipeline() -> impl IntoView {
    let store = use_app_store();

    // Load the pipeline on mount; auto-select the first new borrower
    Effect::new(move |_| {
        spawn_local(async move {
            let buckets = api::get_borrower_pipeline().await;
            if store.active_borrower().read_untracked().is_none() {
                if let Some(first) = buckets.new.first() {
                    store_set_active_borrower(&store, first.clone());
                }
            }
            store_set_borrowers(&store, buckets);
        });
    });

    let current_borrowers =
        move || store.borrowers().get().bucket(store.active_tab().get()).to_vec();

    view! {
        <div class="card pipeline-card">
            <h2>"Borrower Pipeline"</h2>

            <div class="pipeline-tabs">
                {PipelineTab::ALL
                    .into_iter()
                    .map(|tab| {
                        let tab_class = move || {
                            if store.active_tab().get() == tab {
                                "pipeline-tab active"
                            } else {
                                "pipeline-tab"
                            }
                        };
                        let count =
                            move || store.borrowers().get().bucket(tab).len();
                        view! {
                            <button
                                class=tab_class
                                data-tab=tab.key()
                                on:click=move |_| store_set_active_tab(&store, tab)
                            >
                                {move || format!("{} ({})", tab.label(), count())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="borrower-list">
                <For
                    each=current_borrowers
                    key=|b| b.id.clone()
                    children=move |b| view! { <BorrowerCard borrower=b /> }
                />
                <Show when=move || {
                    store.active_tab().get() == PipelineTab::Approved
                        && store.borrowers().get().approved.is_empty()
                }>
                    <p class="empty-message">"No approved borrowers"</p>
                </Show>
            </div>

            <div class="pipeline-footer">
                <h4>"F-SANITISED ACTIVE"</h4>
                <label class="radio-option">
                    <input type="radio" name="pipeline-filter" value="active" checked=true />
                    "Active Pipeline"
                </label>
                <label class="radio-option">
                    <input type="radio" name="pipeline-filter" value="archived" />
                    "Archived"
                </label>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class_known_stages() {
        assert_eq!(status_class("New"), "badge badge-new");
        assert_eq!(status_class("In Review"), "badge badge-review");
        assert_eq!(status_class("Approved"), "badge badge-approved");
    }

    #[test]
    fn test_status_class_unknown_stage_is_plain() {
        assert_eq!(status_class("Renew"), "badge");
        assert_eq!(status_class("Withdrawn"), "badge");
    }
}
