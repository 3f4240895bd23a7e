//! Synchronous "recipes changed" fan-out.
//!
//! Subscribers run on the caller's thread, in registration order. Dispatch
//! works on a snapshot of the subscriber list, so callbacks may subscribe or
//! unsubscribe while a notification is in flight. A subscriber removed
//! mid-dispatch is skipped if its turn has not come yet.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Loaded,
    Deleted,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Loaded => write!(f, "loaded"),
            ChangeKind::Deleted => write!(f, "deleted"),
        }
    }
}

/// Payload handed to every subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipesChanged {
    pub kind: ChangeKind,
    /// Number of recipes held after the change.
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Rc<dyn Fn(&RecipesChanged)>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

/// Cloneable handle to a shared subscriber list.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    inner: Rc<RefCell<Subscribers>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&RecipesChanged) + 'static,
    {
        let mut subscribers = self.inner.borrow_mut();
        let id = SubscriptionId(subscribers.next_id);
        subscribers.next_id += 1;
        subscribers.entries.push((id, Rc::new(callback)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.borrow_mut();
        let before = subscribers.entries.len();
        subscribers.entries.retain(|(entry_id, _)| *entry_id != id);
        subscribers.entries.len() != before
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.inner
            .borrow()
            .entries
            .iter()
            .any(|(entry_id, _)| *entry_id == id)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call every current subscriber and return how many ran.
    pub fn notify(&self, event: &RecipesChanged) -> usize {
        // No borrow may be held while callbacks run.
        let snapshot: Vec<(SubscriptionId, Callback)> = self.inner.borrow().entries.clone();

        let mut delivered = 0;
        for (id, callback) in snapshot {
            if !self.is_subscribed(id) {
                continue;
            }
            callback(event);
            delivered += 1;
        }

        tracing::debug!(kind = %event.kind, count = event.count, delivered, "Notified subscribers");
        delivered
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.len())
            .finish()
    }
}
