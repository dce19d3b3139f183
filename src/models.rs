//! Frontend Models
//!
//! Data structures shared between the mock API, the store, and the view layer.

use serde::{Deserialize, Serialize};

/// User role, fixed at login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Broker,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Broker => "Broker",
        }
    }
}

/// Authenticated user, persisted as the session record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub name: String,
}

/// Borrower application snapshot from the mock API
///
/// Immutable once loaded; action calls never write back into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Borrower {
    pub id: String,
    pub name: String,
    pub loan_type: String,
    pub amount: u64,
    pub status: String,
    pub email: String,
    pub phone: String,
    pub loan_amount: u64,
    pub employment: String,
    pub income: u64,
    pub existing_loan: u64,
    pub credit_score: u32,
    pub source_of_funds: String,
    pub risk_signal: String,
    pub ai_flags: Vec<String>,
}

/// Pipeline stage tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineTab {
    #[default]
    New,
    InReview,
    Approved,
}

impl PipelineTab {
    pub const ALL: [PipelineTab; 3] =
        [PipelineTab::New, PipelineTab::InReview, PipelineTab::Approved];

    /// Bucket key as the backend names it
    pub fn key(&self) -> &'static str {
        match self {
            PipelineTab::New => "new",
            PipelineTab::InReview => "in_review",
            PipelineTab::Approved => "approved",
        }
    }

    /// Human-readable tab label
    pub fn label(&self) -> &'static str {
        match self {
            PipelineTab::New => "New",
            PipelineTab::InReview => "In Review",
            PipelineTab::Approved => "Approved",
        }
    }
}

/// Borrowers partitioned by pipeline stage; membership is fixed at load time
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BorrowerBuckets {
    pub new: Vec<Borrower>,
    pub in_review: Vec<Borrower>,
    pub approved: Vec<Borrower>,
}

impl BorrowerBuckets {
    pub fn bucket(&self, tab: PipelineTab) -> &[Borrower] {
        match tab {
            PipelineTab::New => &self.new,
            PipelineTab::InReview => &self.in_review,
            PipelineTab::Approved => &self.approved,
        }
    }

    /// Search all buckets for a borrower by id
    pub fn find(&self, id: &str) -> Option<&Borrower> {
        self.new
            .iter()
            .chain(self.in_review.iter())
            .chain(self.approved.iter())
            .find(|b| b.id == id)
    }
}

/// Broker overview record, loaded once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerInfo {
    pub name: String,
    pub deals: u32,
    pub approval_rate: String,
    pub pending: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_borrower(id: &str) -> Borrower {
        Borrower {
            id: id.to_string(),
            name: format!("Borrower {}", id),
            loan_type: "Home Loan".to_string(),
            amount: 100_000,
            status: "New".to_string(),
            email: String::new(),
            phone: String::new(),
            loan_amount: 100_000,
            employment: String::new(),
            income: 0,
            existing_loan: 0,
            credit_score: 700,
            source_of_funds: String::new(),
            risk_signal: String::new(),
            ai_flags: vec![],
        }
    }

    #[test]
    fn test_tab_keys_and_labels() {
        assert_eq!(PipelineTab::New.key(), "new");
        assert_eq!(PipelineTab::InReview.key(), "in_review");
        assert_eq!(PipelineTab::Approved.key(), "approved");
        assert_eq!(PipelineTab::InReview.label(), "In Review");
        assert_eq!(PipelineTab::default(), PipelineTab::New);
    }

    #[test]
    fn test_bucket_accessor() {
        let buckets = BorrowerBuckets {
            new: vec![make_borrower("1")],
            in_review: vec![make_borrower("2")],
            approved: vec![],
        };
        assert_eq!(buckets.bucket(PipelineTab::New).len(), 1);
        assert_eq!(buckets.bucket(PipelineTab::InReview)[0].id, "2");
        assert!(buckets.bucket(PipelineTab::Approved).is_empty());
    }

    #[test]
    fn test_find_searches_all_buckets() {
        let buckets = BorrowerBuckets {
            new: vec![make_borrower("1")],
            in_review: vec![make_borrower("2")],
            approved: vec![make_borrower("3")],
        };
        assert_eq!(buckets.find("2").unwrap().id, "2");
        assert_eq!(buckets.find("3").unwrap().id, "3");
        assert!(buckets.find("99").is_none());
    }

    #[test]
    fn test_user_round_trips_through_json() {
        let user = User {
            id: "1".to_string(),
            username: "admin".to_string(),
            role: Role::Admin,
            name: "System Administrator".to_string(),
        };
        let raw = serde_json::to_string(&user).unwrap();
        assert!(raw.contains("\"Admin\""));
        let back: User = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, user);
    }
}
