//! Document-level mouse-up listeners.
//!
//! A drag that starts in the gutter must end even when the pointer is released
//! outside the diff. The host owns a [`DocumentListeners`] registry and calls
//! [`DocumentListeners::dispatch_mouse_up`] on every release, which marks the
//! release as pending on each live subscription. Renderers hold a
//! [`MouseUpSubscription`] and consume the pending release when they process
//! document events. A subscription removes itself from the registry when
//! dropped, so unmounting or dropping a renderer never leaves a stale listener.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Identifier of a registered listener.
pub type ListenerId = u64;

#[derive(Debug, Default)]
struct Registry {
    next_id: ListenerId,
    /// Pending-release flag of each live listener.
    active: BTreeMap<ListenerId, Rc<Cell<bool>>>,
}

/// Registry of document-level mouse-up listeners.
///
/// Cloning is cheap and yields a handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct DocumentListeners {
    inner: Rc<RefCell<Registry>>,
}

impl DocumentListeners {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mouse-up listener. It stays registered until the returned
    /// subscription is dropped.
    pub fn subscribe_mouse_up(&self) -> MouseUpSubscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let pending = Rc::new(Cell::new(false));
        registry.active.insert(id, Rc::clone(&pending));
        log::trace!("Registered document mouse-up listener {}", id);

        MouseUpSubscription {
            id,
            pending,
            registry: Rc::clone(&self.inner),
        }
    }

    /// Deliver a mouse release to every live listener.
    ///
    /// Returns the number of listeners reached.
    pub fn dispatch_mouse_up(&self) -> usize {
        let registry = self.inner.borrow();
        for pending in registry.active.values() {
            pending.set(true);
        }
        registry.active.len()
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().active.len()
    }

    /// Whether listener `id` is still registered.
    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.inner.borrow().active.contains_key(&id)
    }

    /// Ids of all live listeners, in registration order.
    pub fn listeners(&self) -> Vec<ListenerId> {
        self.inner.borrow().active.keys().copied().collect()
    }
}

/// A live mouse-up registration. Deregisters on drop.
#[derive(Debug)]
pub struct MouseUpSubscription {
    id: ListenerId,
    pending: Rc<Cell<bool>>,
    registry: Rc<RefCell<Registry>>,
}

impl MouseUpSubscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Consume a delivered release. Several releases between two calls
    /// collapse into one.
    pub fn take_mouse_up(&self) -> bool {
        self.pending.replace(false)
    }
}

impl Drop for MouseUpSubscription {
    fn drop(&mut self) {
        self.registry.borrow_mut().active.remove(&self.id);
        log::trace!("Removed document mouse-up listener {}", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_deregisters_on_drop() {
        let document = DocumentListeners::new();
        let sub = document.subscribe_mouse_up();
        assert_eq!(document.listener_count(), 1);
        assert!(document.is_registered(sub.id()));

        drop(sub);
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let document = DocumentListeners::new();
        let a = document.subscribe_mouse_up();
        let b = document.clone().subscribe_mouse_up();
        assert_ne!(a.id(), b.id());
        assert_eq!(document.listeners(), vec![a.id(), b.id()]);
    }

    #[test]
    fn test_dispatch_reaches_live_subscriptions() {
        let document = DocumentListeners::new();
        let a = document.subscribe_mouse_up();
        let b = document.subscribe_mouse_up();
        assert!(!a.take_mouse_up());

        drop(b);
        assert_eq!(document.dispatch_mouse_up(), 1);
        assert!(a.take_mouse_up());
        // Consumed
        assert!(!a.take_mouse_up());
    }

    #[test]
    fn test_release_before_subscribing_is_not_seen() {
        let document = DocumentListeners::new();
        assert_eq!(document.dispatch_mouse_up(), 0);

        let sub = document.subscribe_mouse_up();
        assert!(!sub.take_mouse_up());
    }
}
