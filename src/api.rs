//! Mock Data Service
//!
//! Simulated backend. Reads return a static dataset after a fixed delay and
//! always succeed. Action calls wait, log to the browser console, and
//! acknowledge success without mutating the borrower's bucket or status.

use gloo_timers::future::TimeoutFuture;

use crate::models::{Borrower, BorrowerBuckets, BrokerInfo};

const PIPELINE_DELAY_MS: u32 = 500;
const DETAIL_DELAY_MS: u32 = 300;
const BROKER_DELAY_MS: u32 = 300;
const WORKFLOW_DELAY_MS: u32 = 200;
const ACTION_DELAY_MS: u32 = 1000;

/// Workflow steps rendered as complete, by fixed convention
pub const COMPLETED_STEPS: usize = 3;

fn borrower(
    id: &str,
    name: &str,
    loan_type: &str,
    amount: u64,
    status: &str,
    email: &str,
    phone: &str,
    employment: &str,
    income: u64,
    existing_loan: u64,
    credit_score: u32,
    source_of_funds: &str,
    risk_signal: &str,
    ai_flags: &[&str],
) -> Borrower {
    Borrower {
        id: id.to_string(),
        name: name.to_string(),
        loan_type: loan_type.to_string(),
        amount,
        status: status.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        loan_amount: amount,
        employment: employment.to_string(),
        income,
        existing_loan,
        credit_score,
        source_of_funds: source_of_funds.to_string(),
        risk_signal: risk_signal.to_string(),
        ai_flags: ai_flags.iter().map(|f| f.to_string()).collect(),
    }
}

/// The full mock pipeline dataset
pub fn mock_pipeline() -> BorrowerBuckets {
    BorrowerBuckets {
        new: vec![
            borrower(
                "1",
                "Sarah Dunn",
                "Home Loan",
                300_000,
                "Renew",
                "sarah.dunn@example.com",
                "(355)123-4557",
                "At Tech Company",
                120_000,
                240_000,
                720,
                "Declared",
                "Missing Source of Funds declaration",
                &[
                    "Income Inconsistent with Bank statements",
                    "High Debt-to-Income Ratio detected",
                ],
            ),
            borrower(
                "3",
                "Lisa Carter",
                "Home Loan",
                450_000,
                "New",
                "lisa.carter@example.com",
                "(355)987-6543",
                "Senior Manager",
                150_000,
                180_000,
                750,
                "Savings",
                "High loan amount relative to income",
                &["High Debt-to-Income Ratio detected"],
            ),
        ],
        in_review: vec![borrower(
            "2",
            "Alan Matthews",
            "Personal Loan",
            20_000,
            "In Review",
            "alan.matthews@example.com",
            "(355)456-7890",
            "Freelancer",
            60_000,
            15_000,
            680,
            "Business Income",
            "Irregular income pattern",
            &["Income Inconsistent with Bank statements"],
        )],
        approved: vec![],
    }
}

fn mock_broker_info() -> BrokerInfo {
    BrokerInfo {
        name: "Robert Turner".to_string(),
        deals: 16,
        approval_rate: "75%".to_string(),
        pending: 7_660,
    }
}

pub fn mock_workflow_steps() -> Vec<String> {
    [
        "Deal Intake",
        "IDV & Credit Check",
        "Document Upload",
        "AI Validation",
        "Credit Committee",
        "Approval & Docs",
        "Funder Syndication",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub async fn get_borrower_pipeline() -> BorrowerBuckets {
    TimeoutFuture::new(PIPELINE_DELAY_MS).await;
    mock_pipeline()
}

/// Detail lookup across all buckets; unknown id resolves to None
pub async fn get_borrower_detail(id: &str) -> Option<Borrower> {
    TimeoutFuture::new(DETAIL_DELAY_MS).await;
    mock_pipeline().find(id).cloned()
}

pub async fn get_broker_info() -> BrokerInfo {
    TimeoutFuture::new(BROKER_DELAY_MS).await;
    mock_broker_info()
}

pub async fn get_workflow_steps() -> Vec<String> {
    TimeoutFuture::new(WORKFLOW_DELAY_MS).await;
    mock_workflow_steps()
}

/// Simulated workflow actions against a borrower
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    RequestDocuments,
    SendToValuer,
    Approve,
    Escalate,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::RequestDocuments => "Request Documents",
            ActionKind::SendToValuer => "Send to Valuer",
            ActionKind::Approve => "Approve",
            ActionKind::Escalate => "Escalate to Credit Committee",
        }
    }

    /// Button label while the call is in flight
    pub fn pending_label(&self) -> &'static str {
        match self {
            ActionKind::RequestDocuments => "Requesting...",
            ActionKind::SendToValuer => "Sending...",
            ActionKind::Approve => "Approving...",
            ActionKind::Escalate => "Escalating...",
        }
    }

    fn log_line(&self, id: &str) -> String {
        match self {
            ActionKind::RequestDocuments => format!("Documents requested for borrower {}", id),
            ActionKind::SendToValuer => format!("Sent to valuer for borrower {}", id),
            ActionKind::Approve => format!("Loan approved for borrower {}", id),
            ActionKind::Escalate => {
                format!("Escalated to credit committee for borrower {}", id)
            }
        }
    }

    fn ack_message(&self) -> &'static str {
        match self {
            ActionKind::RequestDocuments => "Documents requested.",
            ActionKind::SendToValuer => "Valuer notified.",
            ActionKind::Approve => "Loan approved.",
            ActionKind::Escalate => "Escalated to Credit Committee.",
        }
    }
}

/// Success acknowledgment from an action call
#[derive(Debug, Clone, PartialEq)]
pub struct ActionAck {
    pub success: bool,
    pub message: String,
}

/// Run a workflow action. Always succeeds after a fixed delay; emits one
/// console log line. Does not move the borrower between buckets.
pub async fn run_action(kind: ActionKind, borrower_id: &str) -> ActionAck {
    TimeoutFuture::new(ACTION_DELAY_MS).await;
    web_sys::console::log_1(&kind.log_line(borrower_id).into());
    ActionAck {
        success: true,
        message: kind.ack_message().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PipelineTab;

    #[test]
    fn test_new_bucket_contains_sarah_dunn() {
        let buckets = mock_pipeline();
        let sarah = &buckets.bucket(PipelineTab::New)[0];
        assert_eq!(sarah.name, "Sarah Dunn");
        assert_eq!(sarah.amount, 300_000);
        assert_eq!(sarah.loan_amount, 300_000);
        assert_eq!(sarah.ai_flags.len(), 2);
        assert_eq!(sarah.status, "Renew");
    }

    #[test]
    fn test_pipeline_shape() {
        let buckets = mock_pipeline();
        assert_eq!(buckets.new.len(), 2);
        assert_eq!(buckets.in_review.len(), 1);
        assert!(buckets.approved.is_empty());
        assert_eq!(buckets.in_review[0].name, "Alan Matthews");
    }

    #[test]
    fn test_detail_lookup_by_id() {
        let buckets = mock_pipeline();
        assert_eq!(buckets.find("2").unwrap().name, "Alan Matthews");
        assert_eq!(buckets.find("3").unwrap().name, "Lisa Carter");
        assert!(buckets.find("999").is_none());
    }

    #[test]
    fn test_broker_info_record() {
        let info = mock_broker_info();
        assert_eq!(info.name, "Robert Turner");
        assert_eq!(info.deals, 16);
        assert_eq!(info.approval_rate, "75%");
        assert_eq!(info.pending, 7_660);
    }

    #[test]
    fn test_workflow_steps() {
        let steps = mock_workflow_steps();
        assert_eq!(steps.len(), 7);
        assert_eq!(steps[0], "Deal Intake");
        assert_eq!(steps[6], "Funder Syndication");
        assert!(COMPLETED_STEPS < steps.len());
    }

    #[test]
    fn test_action_labels_and_messages() {
        assert_eq!(ActionKind::RequestDocuments.label(), "Request Documents");
        assert_eq!(ActionKind::Approve.pending_label(), "Approving...");
        assert_eq!(ActionKind::SendToValuer.ack_message(), "Valuer notified.");
        assert_eq!(
            ActionKind::Escalate.log_line("1"),
            "Escalated to credit committee for borrower 1"
        );
    }
}
