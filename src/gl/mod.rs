//! GL-style matrix stacks.
//!
//! [`StackContext`] is the explicit API: own one (or take one from a
//! [`ContextRegistry`]) and call its methods. The free functions in this
//! module are the legacy fixed-function style: each thread binds one
//! context from [`ContextRegistry::global`] with [`set_current_context`] and
//! every call then implicitly targets it.
//!
//! ```
//! use gfxmath::gl::{self, Channel, ContextHandle};
//! use gfxmath::Mat4;
//!
//! gl::set_current_context(ContextHandle(0xdead));
//! gl::matrix_mode(Channel::ModelView);
//! gl::push_matrix();
//! gl::translate(1.0, 0.0, 0.0);
//! assert_eq!(gl::get_matrix(Channel::ModelView), Mat4::from_translation(1.0, 0.0, 0.0));
//! gl::pop_matrix();
//! assert!(gl::get_matrix(Channel::ModelView).is_identity());
//! gl::clear_current_context();
//! ```

pub mod context;
pub mod registry;
pub mod stack;

pub use context::{Channel, StackContext};
pub use registry::{ContextHandle, ContextRegistry, SharedContext};
pub use stack::MatrixStack;

use std::cell::RefCell;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::float_types::Real;
use crate::mat4::Mat4;

struct Binding {
    handle: ContextHandle,
    context: Weak<Mutex<StackContext>>,
}

thread_local! {
    static CURRENT: RefCell<Option<Binding>> = const { RefCell::new(None) };
}

/// Binds the calling thread to `handle`, registering the context if needed.
pub fn set_current_context(handle: ContextHandle) {
    let context = ContextRegistry::global().register(handle);
    CURRENT.with(|current| {
        *current.borrow_mut() = Some(Binding {
            handle,
            context: Arc::downgrade(&context),
        });
    });
}

/// The handle bound on this thread, if its context is still registered.
pub fn current_context() -> Option<ContextHandle> {
    CURRENT.with(|current| {
        current
            .borrow()
            .as_ref()
            .filter(|binding| binding.context.strong_count() > 0)
            .map(|binding| binding.handle)
    })
}

/// Releases and unregisters `handle`. A thread still bound to it sees itself
/// as unbound from then on.
pub fn clear_context(handle: ContextHandle) {
    ContextRegistry::global().remove(handle);
    CURRENT.with(|current| {
        let mut current = current.borrow_mut();
        if current.as_ref().is_some_and(|binding| binding.handle == handle) {
            *current = None;
        }
    });
}

/// Releases the bound context and unbinds the thread. Does nothing when no
/// context is bound.
pub fn clear_current_context() {
    let bound = CURRENT.with(|current| current.borrow_mut().take());
    if let Some(binding) = bound {
        ContextRegistry::global().remove(binding.handle);
    }
}

/// Releases every registered context, on every thread.
pub fn clear_all_contexts() {
    ContextRegistry::global().clear();
    CURRENT.with(|current| *current.borrow_mut() = None);
}

/// Runs `f` against the bound context.
///
/// # Panics
/// If no context is bound, or the bound one has been cleared.
fn with_current<R>(f: impl FnOnce(&mut StackContext) -> R) -> R {
    let context = CURRENT.with(|current| {
        current
            .borrow()
            .as_ref()
            .and_then(|binding| binding.context.upgrade())
    });
    match context {
        Some(context) => {
            let mut guard = context.lock();
            f(&mut *guard)
        }
        None => panic!("no matrix context is bound on this thread; call set_current_context first"),
    }
}

pub fn matrix_mode(channel: Channel) {
    with_current(|ctx| ctx.matrix_mode(channel));
}

pub fn push_matrix() {
    with_current(StackContext::push_matrix);
}

pub fn pop_matrix() {
    with_current(StackContext::pop_matrix);
}

pub fn load_identity() {
    with_current(StackContext::load_identity);
}

pub fn load_matrix(m: &Mat4) {
    with_current(|ctx| ctx.load_matrix(m));
}

pub fn mult_matrix(m: &Mat4) {
    with_current(|ctx| ctx.mult_matrix(m));
}

pub fn translate(x: Real, y: Real, z: Real) {
    with_current(|ctx| ctx.translate(x, y, z));
}

/// `angle` is in degrees.
pub fn rotate(angle: Real, x: Real, y: Real, z: Real) {
    with_current(|ctx| ctx.rotate(angle, x, y, z));
}

pub fn scale(x: Real, y: Real, z: Real) {
    with_current(|ctx| ctx.scale(x, y, z));
}

pub fn get_matrix(channel: Channel) -> Mat4 {
    with_current(|ctx| ctx.get_matrix(channel))
}
