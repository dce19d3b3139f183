//! Session Store
//!
//! Persists the single session record. The browser backend keeps it in
//! localStorage; tests swap in an in-memory backend.

/// localStorage key holding the serialized session record
pub const SESSION_KEY: &str = "auth_user";

/// Raw storage for the session record. At most one record exists at a time;
/// `write` overwrites any previous record.
pub trait SessionBackend {
    fn read(&self) -> Option<String>;
    /// Returns false when the record could not be stored
    fn write(&self, raw: &str) -> bool;
    fn clear(&self);
}

/// Browser localStorage under `SESSION_KEY`
///
/// Storage being unavailable (or a denied write) degrades to "no session";
/// it never surfaces as an error.
#[derive(Clone, Copy, Default)]
pub struct BrowserSession;

impl BrowserSession {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionBackend for BrowserSession {
    fn read(&self) -> Option<String> {
        self.storage()?.get_item(SESSION_KEY).ok().flatten()
    }

    fn write(&self, raw: &str) -> bool {
        match self.storage() {
            Some(storage) => storage.set_item(SESSION_KEY, raw).is_ok(),
            None => false,
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

/// In-memory session record for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemorySession(std::cell::RefCell<Option<String>>);

#[cfg(test)]
impl SessionBackend for MemorySession {
    fn read(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn write(&self, raw: &str) -> bool {
        *self.0.borrow_mut() = Some(raw.to_string());
        true
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}
