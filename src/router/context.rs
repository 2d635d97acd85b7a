//! # Router Context
//!
//! `Router` owns the one `NavigationState` of an application instance and is
//! the only writer of it. Readers borrow it; anything that must react to a
//! path change registers a callback with [`Router::subscribe`].
//!
//! Navigation is synchronous: by the time `navigate` returns, the state has
//! changed and every subscriber has run.

use log::{debug, info};
use std::fmt;

/// Which path is currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_path: String,
}

/// Handle returned by [`Router::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&str)>;

pub struct Router {
    state: NavigationState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    navigation_count: u64,
}

impl Router {
    /// Create the router with the path the application was launched with.
    pub fn new(default_path: impl Into<String>) -> Self {
        let current_path = default_path.into();
        info!("Router initialized at {:?}", current_path);
        Self {
            state: NavigationState { current_path },
            subscribers: Vec::new(),
            next_subscription: 0,
            navigation_count: 0,
        }
    }

    /// Set the current path and notify every subscriber.
    ///
    /// The path is taken as-is: it is not checked against any route table and
    /// no trailing-slash or case normalization is applied. Navigating to the
    /// path that is already current still notifies.
    pub fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        info!("Navigate {:?} -> {:?}", self.state.current_path, path);
        self.state.current_path = path;
        self.navigation_count += 1;

        for (id, callback) in self.subscribers.iter_mut() {
            debug!("Notifying subscriber {:?}", id);
            callback(&self.state.current_path);
        }
    }

    pub fn current_path(&self) -> &str {
        &self.state.current_path
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Number of `navigate` calls processed since creation.
    pub fn navigation_count(&self) -> u64 {
        self.navigation_count
    }

    /// Register a callback invoked with the new path after every navigation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&str) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        debug!("Subscriber {:?} registered", id);
        id
    }

    /// Remove a subscriber. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .field("navigation_count", &self.navigation_count)
            .finish()
    }
}

impl Drop for Router {
    fn drop(&mut self) {
        debug!(
            "Router torn down at {:?} after {} navigations",
            self.state.current_path, self.navigation_count
        );
    }
}
