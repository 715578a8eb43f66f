//! Live view of the inventory collection

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use crate::database::Item;

#[derive(Default)]
struct SlotState {
    pending: Option<Vec<Item>>,
    closed: bool,
    detached: bool,
}

/// Single-snapshot mailbox shared by the store and one subscription.
///
/// A newer snapshot replaces an unread older one, so an idle subscriber
/// holds at most one copy of the collection.
#[derive(Default)]
pub(crate) struct SnapshotSlot {
    state: Mutex<SlotState>,
    ready: Condvar,
}

impl SnapshotSlot {
    pub(crate) fn with_snapshot(snapshot: Vec<Item>) -> Arc<Self> {
        let slot = Self::default();
        slot.lock().pending = Some(snapshot);
        Arc::new(slot)
    }

    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the pending snapshot; false once the subscription is gone
    pub(crate) fn offer(&self, snapshot: Vec<Item>) -> bool {
        let mut state = self.lock();
        if state.detached || state.closed {
            return false;
        }
        state.pending = Some(snapshot);
        self.ready.notify_all();
        true
    }

    /// Mark the store side as closed and wake any waiting receiver
    pub(crate) fn close(&self) {
        self.lock().closed = true;
        self.ready.notify_all();
    }

    pub(crate) fn is_attached(&self) -> bool {
        !self.lock().detached
    }

    fn detach(&self) {
        let mut state = self.lock();
        state.detached = true;
        state.pending = None;
    }
}

/// Receiving end of a live "all items" query.
///
/// The first snapshot is the collection at subscription time. After that
/// the newest committed state is always available; intermediate states that
/// were never read are skipped, but a snapshot is never older than one
/// already received. Dropping the subscription (or calling
/// [`Subscription::unsubscribe`]) stops delivery. Once the store is closed
/// and the last pending snapshot is taken, receiving returns `None`.
pub struct Subscription {
    slot: Arc<SnapshotSlot>,
}

impl Subscription {
    pub(crate) fn new(slot: Arc<SnapshotSlot>) -> Self {
        Self { slot }
    }

    /// Block until the next snapshot; `None` once the store is closed
    pub fn recv(&self) -> Option<Vec<Item>> {
        let state = self.slot.lock();
        let mut state = self
            .slot
            .ready
            .wait_while(state, |s| s.pending.is_none() && !s.closed)
            .unwrap_or_else(PoisonError::into_inner);
        state.pending.take()
    }

    /// Take the pending snapshot without blocking
    pub fn try_recv(&self) -> Option<Vec<Item>> {
        self.slot.lock().pending.take()
    }

    /// Wait up to `timeout` for the next snapshot
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Vec<Item>> {
        let state = self.slot.lock();
        let (mut state, _) = self
            .slot
            .ready
            .wait_timeout_while(state, timeout, |s| s.pending.is_none() && !s.closed)
            .unwrap_or_else(PoisonError::into_inner);
        state.pending.take()
    }

    /// Newest snapshot not read yet
    pub fn latest(&self) -> Option<Vec<Item>> {
        self.try_recv()
    }

    /// Blocking iterator over snapshots, ending when the store is closed
    pub fn iter(&self) -> impl Iterator<Item = Vec<Item>> + '_ {
        std::iter::from_fn(move || self.recv())
    }

    /// Stop receiving snapshots
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.slot.detach();
    }
}
