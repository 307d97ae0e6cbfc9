//! In-memory subscription store.
//!
//! Holds per-user alert thresholds and the set of users subscribed to
//! periodic pushes. Both live behind one lock so a reader always sees a
//! consistent pair. Nothing is persisted.

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;

use crate::domain::{AlertThreshold, UserId};

#[derive(Debug, Default)]
struct Inner {
    thresholds: HashMap<UserId, AlertThreshold>,
    subscribers: HashSet<UserId>,
}

/// What `/status` reports for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserSettings {
    pub threshold: Option<AlertThreshold>,
    pub subscribed: bool,
}

/// Process-lifetime store shared by the command router and the notifier.
#[derive(Debug, Default)]
pub struct SubscriptionStore {
    inner: RwLock<Inner>,
}

impl SubscriptionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the user's threshold.
    pub fn set_threshold(&self, user: UserId, threshold: AlertThreshold) {
        self.inner.write().thresholds.insert(user, threshold);
    }

    #[must_use]
    pub fn threshold(&self, user: UserId) -> Option<AlertThreshold> {
        self.inner.read().thresholds.get(&user).copied()
    }

    /// Subscribe a user. Returns `true` if they were not subscribed before.
    pub fn subscribe(&self, user: UserId) -> bool {
        self.inner.write().subscribers.insert(user)
    }

    /// Unsubscribe a user. Returns `true` if they were subscribed.
    pub fn unsubscribe(&self, user: UserId) -> bool {
        self.inner.write().subscribers.remove(&user)
    }

    #[must_use]
    pub fn is_subscribed(&self, user: UserId) -> bool {
        self.inner.read().subscribers.contains(&user)
    }

    /// Snapshot of current subscribers, sorted for stable delivery order.
    #[must_use]
    pub fn subscribers(&self) -> Vec<UserId> {
        let mut users: Vec<_> = self.inner.read().subscribers.iter().copied().collect();
        users.sort_unstable();
        users
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.read().subscribers.len()
    }

    /// Threshold and subscription state read under one lock.
    #[must_use]
    pub fn user_settings(&self, user: UserId) -> UserSettings {
        let inner = self.inner.read();
        UserSettings {
            threshold: inner.thresholds.get(&user).copied(),
            subscribed: inner.subscribers.contains(&user),
        }
    }
}
