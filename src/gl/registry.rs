//! Table of matrix-stack contexts keyed by caller handles.

use std::sync::{Arc, OnceLock};

use hashbrown::HashMap;
use parking_lot::Mutex;
use thunderdome::{Arena, Index};

use crate::gl::context::StackContext;

/// Opaque caller-chosen key for a context, typically the address or id of
/// a rendering context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextHandle(pub usize);

impl From<usize> for ContextHandle {
    fn from(raw: usize) -> Self {
        ContextHandle(raw)
    }
}

/// A context as handed out by the registry. The registry keeps the only
/// long-lived strong reference.
pub type SharedContext = Arc<Mutex<StackContext>>;

struct Slot {
    handle: ContextHandle,
    context: SharedContext,
}

struct Inner {
    slots: Arena<Slot>,
    by_handle: HashMap<ContextHandle, Index>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            slots: Arena::new(),
            by_handle: HashMap::new(),
        }
    }
}

/// Maps [`ContextHandle`]s to their [`StackContext`].
///
/// The registry lock only covers inserting and unlinking entries. Matrix
/// operations lock the individual context, so threads working on different
/// contexts never contend.
#[derive(Default)]
pub struct ContextRegistry {
    inner: Mutex<Inner>,
}

static GLOBAL: OnceLock<ContextRegistry> = OnceLock::new();

impl ContextRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry behind the [`crate::gl`] free functions.
    pub fn global() -> &'static ContextRegistry {
        GLOBAL.get_or_init(ContextRegistry::new)
    }

    /// Returns the context for `handle`, creating an uninitialized one on
    /// first sight.
    pub fn register(&self, handle: ContextHandle) -> SharedContext {
        let mut inner = self.inner.lock();
        if let Some(&index) = inner.by_handle.get(&handle) {
            if let Some(slot) = inner.slots.get(index) {
                return Arc::clone(&slot.context);
            }
        }

        let context = Arc::new(Mutex::new(StackContext::new()));
        let index = inner.slots.insert(Slot {
            handle,
            context: Arc::clone(&context),
        });
        inner.by_handle.insert(handle, index);
        log::debug!("registered matrix context {:?} ({} live)", handle, inner.slots.len());
        context
    }

    pub fn lookup(&self, handle: ContextHandle) -> Option<SharedContext> {
        let inner = self.inner.lock();
        let index = *inner.by_handle.get(&handle)?;
        inner.slots.get(index).map(|slot| Arc::clone(&slot.context))
    }

    #[inline]
    pub fn contains(&self, handle: ContextHandle) -> bool {
        self.inner.lock().by_handle.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Handles of every live context, in no particular order.
    pub fn handles(&self) -> Vec<ContextHandle> {
        self.inner.lock().slots.iter().map(|(_, slot)| slot.handle).collect()
    }

    /// Unlinks the context and frees its stacks. Returns `false` when the
    /// handle was never registered.
    pub fn remove(&self, handle: ContextHandle) -> bool {
        let slot = {
            let mut inner = self.inner.lock();
            let Some(index) = inner.by_handle.remove(&handle) else {
                return false;
            };
            inner.slots.remove(index)
        };

        // the registry lock is already released here
        match slot {
            Some(slot) => {
                slot.context.lock().release();
                log::debug!("removed matrix context {:?}", handle);
                true
            }
            None => false,
        }
    }

    /// Removes every context, returning how many there were.
    pub fn clear(&self) -> usize {
        let drained: Vec<Slot> = {
            let mut inner = self.inner.lock();
            inner.by_handle.clear();
            inner.slots.drain().map(|(_, slot)| slot).collect()
        };

        for slot in &drained {
            slot.context.lock().release();
        }
        log::debug!("cleared {} matrix contexts", drained.len());
        drained.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::context::Channel;
    use crate::mat4::Mat4;

    #[test]
    fn register_is_idempotent() {
        let registry = ContextRegistry::new();
        let a = registry.register(ContextHandle(7));
        let b = registry.register(ContextHandle(7));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_releases_the_context() {
        let registry = ContextRegistry::new();
        let ctx = registry.register(ContextHandle(1));
        ctx.lock().push_matrix();
        assert!(ctx.lock().is_initialized());

        assert!(registry.remove(ContextHandle(1)));
        assert!(!ctx.lock().is_initialized());
        assert!(!registry.contains(ContextHandle(1)));
        assert!(registry.lookup(ContextHandle(1)).is_none());
        assert!(!registry.remove(ContextHandle(1)));
    }

    #[test]
    fn clear_drops_everything() {
        let registry = ContextRegistry::new();
        for raw in 0..4 {
            registry.register(ContextHandle(raw));
        }
        let mut handles = registry.handles();
        handles.sort();
        assert_eq!(handles, (0..4).map(ContextHandle).collect::<Vec<_>>());

        assert_eq!(registry.clear(), 4);
        assert!(registry.is_empty());
    }

    #[test]
    fn re_registering_a_removed_handle_starts_fresh() {
        let registry = ContextRegistry::new();
        registry
            .register(ContextHandle(3))
            .lock()
            .load_matrix(&Mat4::from_translation(1.0, 0.0, 0.0));
        registry.remove(ContextHandle(3));

        let fresh = registry.register(ContextHandle(3));
        assert!(fresh.lock().get_matrix(Channel::ModelView).is_identity());
    }
}
