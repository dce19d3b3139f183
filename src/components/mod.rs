//! UI Components
//!
//! Leptos components making up the dashboard.

mod admin_panel;
mod auth_shell;
mod borrower_detail;
mod borrower_pipeline;
mod broker_overview;
mod header;
mod login_form;
mod role_guard;

pub use admin_panel::AdminPanel;
pub use auth_shell::AuthShell;
pub use borrower_detail::BorrowerDetail;
pub use borrower_pipeline::BorrowerPipeline;
pub use broker_overview::BrokerOverview;
pub use header::Header;
pub use login_form::LoginForm;
pub use role_guard::RoleGuard;
