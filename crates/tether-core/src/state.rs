//! Controlled / uncontrolled state holder.
//!
//! Widgets such as popovers accept their open flag either from the owner
//! (controlled) or keep it themselves (uncontrolled). `Controllable<T>`
//! hides the difference behind `get`/`set`/`subscribe`:
//!
//! ```rust
//! use tether_core::Controllable;
//!
//! let open = Controllable::uncontrolled(false);
//! open.set(true);
//! assert!(open.get());
//!
//! // Controlled: writes are requests routed to the owner.
//! let requested = std::rc::Rc::new(std::cell::Cell::new(None));
//! let open = Controllable::controlled(false, {
//!     let requested = requested.clone();
//!     move |v: &bool| requested.set(Some(*v))
//! });
//! open.set(true);
//! assert!(!open.get());
//! assert_eq!(requested.get(), Some(true));
//!
//! // The owner accepts the request by syncing the new value in.
//! open.sync(true);
//! assert!(open.get());
//! ```

use std::rc::Rc;

use crate::{Signal, SubId, signal};

pub struct Controllable<T: Clone + PartialEq + 'static> {
    value: Signal<T>,
    controlled: bool,
    on_change: Option<Rc<dyn Fn(&T)>>,
}

impl<T: Clone + PartialEq + 'static> Clone for Controllable<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            controlled: self.controlled,
            on_change: self.on_change.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Controllable<T> {
    /// Owner-held value. `set` only forwards to `on_change`; the value moves
    /// when the owner calls `sync`.
    pub fn controlled(value: T, on_change: impl Fn(&T) + 'static) -> Self {
        Self {
            value: signal(value),
            controlled: true,
            on_change: Some(Rc::new(on_change)),
        }
    }

    /// Self-held value starting at `default`.
    pub fn uncontrolled(default: T) -> Self {
        Self {
            value: signal(default),
            controlled: false,
            on_change: None,
        }
    }

    /// Adds a change callback to an uncontrolled holder. Replaces the
    /// callback of a controlled one.
    pub fn with_on_change(mut self, f: impl Fn(&T) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Requests a new value. No-op when equal to the current one.
    pub fn set(&self, v: T) {
        if self.controlled {
            if self.value.with(|cur| *cur != v)
                && let Some(cb) = &self.on_change
            {
                cb(&v);
            }
            return;
        }
        if self.value.set_if_changed(v.clone())
            && let Some(cb) = &self.on_change
        {
            cb(&v);
        }
    }

    /// Pushes an owner-supplied value in (controlled prop change).
    /// Subscribers are notified; `on_change` is not.
    pub fn sync(&self, v: T) {
        self.value.set_if_changed(v);
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        self.value.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) {
        self.value.unsubscribe(id)
    }
}

impl Controllable<bool> {
    pub fn toggle(&self) {
        self.set(!self.get());
    }
}
