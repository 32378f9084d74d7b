// ============================================================================
// SESSION - bearer token store shared by every view
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::services::storage::TokenStore;
use crate::state::reactivity::{SubscriptionId, Subscribers};
use crate::utils::constants::SESSION_EXPIRED_MESSAGE;

/// Why the last logout happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutReason {
    Requested,
    /// The backend rejected the token.
    Expired,
}

struct SessionInner {
    token: RefCell<Option<String>>,
    last_logout: Cell<Option<LogoutReason>>,
    store: Rc<dyn TokenStore>,
    subscribers: Subscribers<Option<String>>,
}

/// Cheap to clone; clones share the same token and subscribers.
#[derive(Clone)]
pub struct Session {
    inner: Rc<SessionInner>,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Session {
    /// Restores the persisted token, if any.
    pub fn restore(store: Rc<dyn TokenStore>) -> Self {
        let token = store.load().filter(|t| !t.is_empty());
        if token.is_some() {
            log::info!("💾 Session restored from storage");
        }
        Self {
            inner: Rc::new(SessionInner {
                token: RefCell::new(token),
                last_logout: Cell::new(None),
                store,
                subscribers: Subscribers::new(),
            }),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.inner.token.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.token.borrow().is_some()
    }

    /// The store the token is persisted in, shared with the API client.
    pub fn store(&self) -> Rc<dyn TokenStore> {
        self.inner.store.clone()
    }

    pub fn login(&self, token: &str) {
        if let Err(e) = self.inner.store.save(token) {
            log::warn!("⚠️ Could not persist session token: {}", e);
        }
        self.inner.last_logout.set(None);
        self.publish(Some(token.to_string()));
        log::info!("✅ Logged in");
    }

    pub fn logout(&self) {
        self.end(LogoutReason::Requested);
    }

    /// Logout forced by a rejected token.
    pub fn expire(&self) {
        self.end(LogoutReason::Expired);
    }

    pub fn last_logout(&self) -> Option<LogoutReason> {
        self.inner.last_logout.get()
    }

    /// Message for the login screen after the last logout, if any.
    pub fn logout_notice(&self) -> Option<&'static str> {
        match self.last_logout()? {
            LogoutReason::Expired => Some(SESSION_EXPIRED_MESSAGE),
            LogoutReason::Requested => None,
        }
    }

    fn end(&self, reason: LogoutReason) {
        if let Err(e) = self.inner.store.clear() {
            log::warn!("⚠️ Could not clear persisted session token: {}", e);
        }
        // Set before publishing so subscribers can read it
        self.inner.last_logout.set(Some(reason));
        self.publish(None);
        log::info!("👋 Logged out ({:?})", reason);
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Option<String>) + 'static,
    {
        self.inner.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.subscribers.unsubscribe(id);
    }

    fn publish(&self, token: Option<String>) {
        *self.inner.token.borrow_mut() = token.clone();
        self.inner.subscribers.notify(&token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryTokenStore;

    #[test]
    fn restores_persisted_token() {
        let store = Rc::new(MemoryTokenStore::with_token("saved"));
        let session = Session::restore(store);
        assert_eq!(session.token().as_deref(), Some("saved"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn empty_persisted_token_is_ignored() {
        let session = Session::restore(Rc::new(MemoryTokenStore::with_token("")));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_persists_and_publishes() {
        let store = Rc::new(MemoryTokenStore::new());
        let session = Session::restore(store.clone());
        let published = Rc::new(RefCell::new(Vec::new()));
        {
            let published = published.clone();
            session.subscribe(move |token| published.borrow_mut().push(token.clone()));
        }

        session.login("abc");

        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(store.load().as_deref(), Some("abc"));
        assert_eq!(*published.borrow(), vec![Some("abc".to_string())]);
    }

    #[test]
    fn logout_clears_storage_and_state() {
        let store = Rc::new(MemoryTokenStore::with_token("abc"));
        let session = Session::restore(store.clone());
        let last = Rc::new(RefCell::new(Some("unset".to_string())));
        {
            let last = last.clone();
            session.subscribe(move |token| *last.borrow_mut() = token.clone());
        }

        session.logout();

        assert_eq!(session.token(), None);
        assert_eq!(store.load(), None);
        assert_eq!(*last.borrow(), None);
    }

    #[test]
    fn expired_logout_is_visible_to_subscribers() {
        let session = Session::restore(Rc::new(MemoryTokenStore::with_token("abc")));
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            let observed = session.clone();
            session.subscribe(move |token| {
                if token.is_none() {
                    seen.borrow_mut().push(observed.logout_notice());
                }
            });
        }

        session.expire();
        assert_eq!(*seen.borrow(), vec![Some(SESSION_EXPIRED_MESSAGE)]);
        assert_eq!(session.last_logout(), Some(LogoutReason::Expired));

        session.login("fresh");
        assert_eq!(session.last_logout(), None);
        session.logout();
        assert_eq!(*seen.borrow(), vec![Some(SESSION_EXPIRED_MESSAGE), None]);
    }

    #[test]
    fn clones_share_state() {
        let session = Session::restore(Rc::new(MemoryTokenStore::new()));
        let other = session.clone();
        other.login("shared");
        assert_eq!(session.token().as_deref(), Some("shared"));
        assert!(session == other);
    }

    #[test]
    fn failing_store_still_updates_memory() {
        struct BrokenStore;
        impl TokenStore for BrokenStore {
            fn load(&self) -> Option<String> {
                None
            }
            fn save(&self, _token: &str) -> Result<(), String> {
                Err("quota exceeded".to_string())
            }
            fn clear(&self) -> Result<(), String> {
                Err("unavailable".to_string())
            }
        }

        let session = Session::restore(Rc::new(BrokenStore));
        session.login("abc");
        assert_eq!(session.token().as_deref(), Some("abc"));
        session.logout();
        assert_eq!(session.token(), None);
    }
}
