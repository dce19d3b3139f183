//! Admin Panel Component

use leptos::prelude::*;

use crate::components::RoleGuard;

/// Admin-only management shortcuts
#[component]
pub fn AdminPanel() -> impl IntoView {
    view! {
        <RoleGuard admin_only=true>
            <div class="card admin-panel">
                <h3>"Admin Panel"</h3>
                <div class="admin-actions">
                    <button class="admin-btn">"User Management"</button>
                    <button class="admin-btn">"System Settings"</button>
                    <button class="admin-btn">"Analytics"</button>
                </div>
                <p class="admin-note">
                    <span class="badge">"Admin Only"</span>
                    " These features are only available to administrators."
                </p>
            </div>
        </RoleGuard>
    }
}
