//! Authentication Service
//!
//! Validates credentials against a static table and manages the persisted
//! session record. Login and logout simulate an async network boundary with a
//! fixed delay before resolving.

use std::fmt;

use gloo_timers::future::TimeoutFuture;

use crate::models::{Role, User};
use crate::session::{BrowserSession, SessionBackend};

const LOGIN_DELAY_MS: u32 = 1000;
const LOGOUT_DELAY_MS: u32 = 500;

/// Static mock user database: (username, password, id, role, display name)
const MOCK_USERS: [(&str, &str, &str, Role, &str); 4] = [
    ("admin", "admin123", "1", Role::Admin, "System Administrator"),
    ("broker", "broker123", "2", Role::Broker, "Robert Turner"),
    ("admin.user", "password", "3", Role::Admin, "Admin User"),
    ("broker.user", "password", "4", Role::Broker, "Broker User"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
        }
    }
}

/// Pure credential check: username case-insensitive, password exact
pub fn authenticate(username: &str, password: &str) -> Result<User, AuthError> {
    let username = username.to_lowercase();
    MOCK_USERS
        .iter()
        .find(|(name, pass, ..)| *name == username && *pass == password)
        .map(|(name, _, id, role, display)| User {
            id: id.to_string(),
            username: name.to_string(),
            role: *role,
            name: display.to_string(),
        })
        .ok_or(AuthError::InvalidCredentials)
}

/// Auth operations over a session backend
#[derive(Clone, Copy, Default)]
pub struct AuthService<B: SessionBackend> {
    session: B,
}

/// The service the app uses: browser localStorage behind it
pub fn auth_service() -> AuthService<BrowserSession> {
    AuthService::default()
}

impl<B: SessionBackend> AuthService<B> {
    pub fn new(session: B) -> Self {
        Self { session }
    }

    /// Validate credentials after a simulated network delay. On success the
    /// user is persisted as the session record; on failure nothing is stored.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        TimeoutFuture::new(LOGIN_DELAY_MS).await;
        self.complete_login(username, password)
    }

    fn complete_login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let user = authenticate(username, password)?;
        if let Ok(raw) = serde_json::to_string(&user) {
            self.session.write(&raw);
        }
        Ok(user)
    }

    /// Clear the session record after a simulated network delay
    pub async fn logout(&self) {
        TimeoutFuture::new(LOGOUT_DELAY_MS).await;
        self.complete_logout();
    }

    fn complete_logout(&self) {
        self.session.clear();
    }

    /// Synchronous read of the persisted session. An absent or malformed
    /// record means "not signed in", never an error.
    pub fn current_user(&self) -> Option<User> {
        let raw = self.session.read()?;
        serde_json::from_str(&raw).ok()
    }
}

pub fn has_role(user: Option<&User>, role: Role) -> bool {
    user.map(|u| u.role == role).unwrap_or(false)
}

pub fn is_admin(user: Option<&User>) -> bool {
    has_role(user, Role::Admin)
}

pub fn is_broker(user: Option<&User>) -> bool {
    has_role(user, Role::Broker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySession;

    #[test]
    fn test_every_table_entry_authenticates() {
        for (username, password, id, role, name) in MOCK_USERS {
            let user = authenticate(username, password).expect("valid credentials");
            assert_eq!(user.id, id);
            assert_eq!(user.username, username);
            assert_eq!(user.role, role);
            assert_eq!(user.name, name);
        }
    }

    #[test]
    fn test_username_is_case_insensitive() {
        let user = authenticate("ADMIN", "admin123").unwrap();
        assert_eq!(user.username, "admin");
        assert!(authenticate("Broker.User", "password").is_ok());
    }

    #[test]
    fn test_password_is_exact_match() {
        assert_eq!(
            authenticate("admin", "ADMIN123"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            authenticate("admin", "admin1234"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_unknown_user_is_rejected() {
        assert_eq!(
            authenticate("invalid", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(authenticate("", ""), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn test_error_message_wording() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
    }

    #[test]
    fn test_login_persists_every_table_entry() {
        for (username, password, ..) in MOCK_USERS {
            let service = AuthService::new(MemorySession::default());
            let user = service.complete_login(username, password).unwrap();

            assert_eq!(service.current_user(), Some(user));
        }
    }

    #[test]
    fn test_failed_login_persists_nothing() {
        let service = AuthService::new(MemorySession::default());

        assert_eq!(
            service.complete_login("invalid", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(service.session.read(), None);
        assert_eq!(service.current_user(), None);
    }

    #[test]
    fn test_failed_login_keeps_existing_session() {
        let service = AuthService::new(MemorySession::default());
        let user = service.complete_login("broker", "broker123").unwrap();

        assert!(service.complete_login("broker", "oops").is_err());
        assert_eq!(service.current_user(), Some(user));
    }

    #[test]
    fn test_logout_clears_session() {
        let service = AuthService::new(MemorySession::default());
        service.complete_login("admin", "admin123").unwrap();
        service.complete_logout();

        assert_eq!(service.session.read(), None);
        assert_eq!(service.current_user(), None);
    }

    #[test]
    fn test_corrupted_record_reads_as_signed_out() {
        let service = AuthService::new(MemorySession::default());
        service.session.write("{not json");

        assert_eq!(service.current_user(), None);
    }

    #[test]
    fn test_role_predicates() {
        let admin = authenticate("admin", "admin123").unwrap();
        let broker = authenticate("broker", "broker123").unwrap();

        assert!(is_admin(Some(&admin)));
        assert!(!is_admin(Some(&broker)));
        assert!(is_broker(Some(&broker)));
        assert!(!is_broker(Some(&admin)));
        assert!(has_role(Some(&admin), Role::Admin));
        assert!(!has_role(Some(&admin), Role::Broker));

        // No user fails every check
        assert!(!is_admin(None));
        assert!(!is_broker(None));
        assert!(!has_role(None, Role::Admin));
    }
}
