//! # Host seam
//!
//! Everything the popover needs from the page goes through [`Host`]:
//! measuring elements, reading the viewport, listening to events and
//! scheduling timers. A browser build implements it over the DOM;
//! [`crate::headless::HeadlessHost`] implements it in memory for tests.
//!
//! Registrations come back as ids. [`listen`] and [`timeout`] wrap them in a
//! [`Dispose`] so they can be tied to a [`tether_core::Scope`] and released on
//! every exit path.

use std::rc::Rc;

use slotmap::new_key_type;
use tether_core::{Dispose, Key, Rect, Size};
use web_time::Duration;

new_key_type! {
    pub struct ListenerId;
    pub struct TimerId;
}

/// Handle to an element owned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenTarget {
    Window,
    Document,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Resize,
    PointerDown,
    KeyDown,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenOptions {
    /// Listen in the capture phase. Scroll events do not bubble, so capture on
    /// the document is what sees scrolling of every ancestor.
    pub capture: bool,
}

impl ListenOptions {
    pub fn capture() -> Self {
        Self { capture: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostEvent {
    pub kind: EventKind,
    /// Element the event originated from, when there is one.
    pub target: Option<ElementId>,
    pub key: Option<Key>,
}

impl HostEvent {
    pub fn scroll(target: Option<ElementId>) -> Self {
        Self {
            kind: EventKind::Scroll,
            target,
            key: None,
        }
    }

    pub fn resize() -> Self {
        Self {
            kind: EventKind::Resize,
            target: None,
            key: None,
        }
    }

    pub fn pointer_down(target: ElementId) -> Self {
        Self {
            kind: EventKind::PointerDown,
            target: Some(target),
            key: None,
        }
    }

    pub fn key_down(key: Key) -> Self {
        Self {
            kind: EventKind::KeyDown,
            target: None,
            key: Some(key),
        }
    }
}

pub type Listener = Rc<dyn Fn(&HostEvent)>;

pub trait Host {
    fn viewport(&self) -> Size;

    /// Current bounding box, or `None` while the element is not attached.
    fn measure(&self, element: ElementId) -> Option<Rect>;

    /// Whether `node` is `ancestor` or lies inside it.
    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool;

    fn add_listener(
        &self,
        target: ListenTarget,
        kind: EventKind,
        options: ListenOptions,
        callback: Listener,
    ) -> ListenerId;

    fn remove_listener(&self, id: ListenerId);

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId;

    /// Clearing a timer that already fired is a no-op.
    fn clear_timeout(&self, id: TimerId);
}

/// Registers `callback` and returns the guard that removes it.
pub fn listen<H: Host + ?Sized + 'static>(
    host: &Rc<H>,
    target: ListenTarget,
    kind: EventKind,
    options: ListenOptions,
    callback: Listener,
) -> Dispose {
    let id = host.add_listener(target, kind, options, callback);
    log::trace!("listen {kind:?} on {target:?} ({id:?})");
    let host = host.clone();
    Dispose::new(move || {
        log::trace!("unlisten {kind:?} on {target:?} ({id:?})");
        host.remove_listener(id);
    })
}

/// Schedules `f` and returns the guard that cancels it.
pub fn timeout<H: Host + ?Sized + 'static>(
    host: &Rc<H>,
    delay: Duration,
    f: impl FnOnce() + 'static,
) -> Dispose {
    let id = host.set_timeout(delay, Box::new(f));
    let host = host.clone();
    Dispose::new(move || host.clear_timeout(id))
}
