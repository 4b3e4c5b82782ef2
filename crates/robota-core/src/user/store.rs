//! Auth/session store.
//!
//! Registration is local-only: a session exists purely in memory and is
//! dropped on logout or process exit. At most one user is signed in at a
//! time.

use super::model::{ProfilePatch, User, UserRole};
use crate::error::{Result, RobotaError};
use crate::store::{SubscriberSet, Subscription};
use std::sync::RwLock;
use uuid::Uuid;

/// Store for the current session.
pub struct AuthStore {
    state: RwLock<Option<User>>,
    subscribers: SubscriberSet<Option<User>>,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStore {
    /// Creates the store with no active session.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(None),
            subscribers: SubscriberSet::new(),
        }
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.state.read().unwrap().clone()
    }

    /// Registers a listener, invoking it once with the current snapshot.
    pub fn subscribe(
        &self,
        listener: impl Fn(&Option<User>) + Send + Sync + 'static,
    ) -> Subscription {
        self.subscribers
            .subscribe_with(listener, &self.current_user())
    }

    /// Creates a session for a new account.
    ///
    /// The name is trimmed; an empty name is rejected. Registering while a
    /// session exists replaces it.
    pub fn register(&self, name: &str, role: UserRole) -> Result<User> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RobotaError::validation("name must not be empty"));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            role,
            headline: None,
            about: None,
            skills: None,
            experience: None,
            photo_uri: None,
        };

        {
            let mut state = self.state.write().unwrap();
            *state = Some(user.clone());
        }
        self.subscribers.notify(&Some(user.clone()));
        Ok(user)
    }

    /// Applies a profile patch to the signed-in user.
    ///
    /// No-op when no session exists.
    pub fn update_profile(&self, patch: ProfilePatch) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            let Some(user) = state.as_mut() else {
                tracing::debug!("ignoring profile update without an active session");
                return;
            };
            patch.apply(user);
            state.clone()
        };
        self.subscribers.notify(&snapshot);
    }

    /// Ends the session.
    pub fn logout(&self) {
        {
            let mut state = self.state.write().unwrap();
            *state = None;
        }
        self.subscribers.notify(&None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_register_creates_session() {
        let auth = AuthStore::new();
        let user = auth.register("  Anna  ", UserRole::Worker).unwrap();

        assert_eq!(user.name, "Anna");
        assert_eq!(user.role, UserRole::Worker);
        assert!(!user.id.is_empty());
        assert_eq!(auth.current_user().unwrap().name, "Anna");
    }

    #[test]
    fn test_register_rejects_blank_name() {
        let auth = AuthStore::new();
        let err = auth.register("   ", UserRole::Employer).unwrap_err();
        assert!(err.is_validation());
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_update_profile_merges_patch() {
        let auth = AuthStore::new();
        auth.register("Anna", UserRole::Worker).unwrap();

        auth.update_profile(ProfilePatch {
            headline: Some("Mobile developer".to_string()),
            ..Default::default()
        });

        let user = auth.current_user().unwrap();
        assert_eq!(user.headline.as_deref(), Some("Mobile developer"));
        assert_eq!(user.name, "Anna");
    }

    #[test]
    fn test_update_profile_without_session_is_noop() {
        let auth = AuthStore::new();
        auth.update_profile(ProfilePatch {
            about: Some("bio".to_string()),
            ..Default::default()
        });
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_logout_clears_session_and_notifies() {
        let auth = AuthStore::new();
        auth.register("Anna", UserRole::Worker).unwrap();

        let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let _subscription = auth.subscribe(move |snapshot| {
            seen_clone
                .lock()
                .unwrap()
                .push(snapshot.as_ref().map(|user| user.name.clone()));
        });

        auth.logout();

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![Some("Anna".to_string()), None]);
        assert!(auth.current_user().is_none());
    }
}
