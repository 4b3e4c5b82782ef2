//! Job-application store.
//!
//! Tracks which jobs the user applied to and when. The list is ordered
//! newest-first and holds at most one record per job id; re-applying is a
//! no-op that keeps the original timestamp.

use crate::storage::KeyValueStore;
use crate::store::{SubscriberSet, Subscription};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

const APPLICATIONS_KEY: &str = "applications";

/// A single submitted application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Id of the job applied to.
    pub job_id: String,
    /// Submission time, epoch milliseconds.
    pub applied_at: i64,
}

/// Store for submitted applications.
pub struct ApplicationsStore {
    state: RwLock<Vec<Application>>,
    subscribers: SubscriberSet<Vec<Application>>,
    storage: KeyValueStore,
}

impl ApplicationsStore {
    /// Creates the store, loading the persisted list (empty by default).
    pub fn new(storage: KeyValueStore) -> Self {
        let initial = storage.get_json(APPLICATIONS_KEY, Vec::new());
        Self {
            state: RwLock::new(initial),
            subscribers: SubscriberSet::new(),
            storage,
        }
    }

    /// Current snapshot, newest application first.
    pub fn applications(&self) -> Vec<Application> {
        self.state.read().unwrap().clone()
    }

    /// Whether an application for `job_id` exists.
    pub fn is_applied(&self, job_id: &str) -> bool {
        self.state
            .read()
            .unwrap()
            .iter()
            .any(|application| application.job_id == job_id)
    }

    /// Submission timestamp for `job_id`, if an application exists.
    pub fn applied_at(&self, job_id: &str) -> Option<i64> {
        self.state
            .read()
            .unwrap()
            .iter()
            .find(|application| application.job_id == job_id)
            .map(|application| application.applied_at)
    }

    /// Registers a listener, invoking it once with the current snapshot.
    pub fn subscribe(
        &self,
        listener: impl Fn(&Vec<Application>) + Send + Sync + 'static,
    ) -> Subscription {
        self.subscribers
            .subscribe_with(listener, &self.applications())
    }

    /// Records an application for `job_id`, stamped with the current time.
    ///
    /// No-op if an application for this job already exists.
    pub fn apply_to_job(&self, job_id: &str) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            if state.iter().any(|application| application.job_id == job_id) {
                return;
            }
            state.insert(
                0,
                Application {
                    job_id: job_id.to_string(),
                    applied_at: chrono::Utc::now().timestamp_millis(),
                },
            );
            state.clone()
        };
        self.commit(snapshot);
    }

    /// Withdraws the application for `job_id`. No-op if none exists.
    pub fn remove_application(&self, job_id: &str) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            let before = state.len();
            state.retain(|application| application.job_id != job_id);
            if state.len() == before {
                return;
            }
            state.clone()
        };
        self.commit(snapshot);
    }

    /// Removes every application record.
    pub fn clear(&self) {
        let snapshot = {
            let mut state = self.state.write().unwrap();
            state.clear();
            state.clone()
        };
        self.commit(snapshot);
    }

    fn commit(&self, snapshot: Vec<Application>) {
        self.storage.set_json(APPLICATIONS_KEY, &snapshot);
        self.subscribers.notify(&snapshot);
    }
}
