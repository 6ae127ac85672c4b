//! In-memory [`Host`] for tests and demos.
//!
//! Rects and the viewport are set by hand, events are fired with
//! [`HeadlessHost::dispatch`], and timers run against a virtual clock that
//! only moves on [`HeadlessHost::advance`]. Counters expose how many
//! listeners and timers are live, which is what hygiene tests assert on.

use std::cell::RefCell;
use std::collections::HashMap;

use slotmap::SlotMap;
use smallvec::SmallVec;
use tether_core::{Rect, Size};
use web_time::Duration;

use crate::host::{
    ElementId, EventKind, Host, HostEvent, ListenOptions, ListenTarget, Listener, ListenerId,
    TimerId,
};

struct Registered {
    target: ListenTarget,
    kind: EventKind,
    options: ListenOptions,
    callback: Listener,
}

struct Pending {
    due: Duration,
    seq: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct HostState {
    viewport: Size,
    rects: HashMap<ElementId, Rect>,
    parents: HashMap<ElementId, ElementId>,
    listeners: SlotMap<ListenerId, Registered>,
    timers: SlotMap<TimerId, Pending>,
    now: Duration,
    next_seq: u64,
}

#[derive(Default)]
pub struct HeadlessHost {
    state: RefCell<HostState>,
}

impl HeadlessHost {
    pub fn new(viewport: Size) -> Self {
        Self {
            state: RefCell::new(HostState {
                viewport,
                ..HostState::default()
            }),
        }
    }

    pub fn set_viewport(&self, viewport: Size) {
        self.state.borrow_mut().viewport = viewport;
    }

    /// Attaches (or moves) an element.
    pub fn set_rect(&self, element: ElementId, rect: Rect) {
        self.state.borrow_mut().rects.insert(element, rect);
    }

    /// Detaches an element; it can no longer be measured.
    pub fn remove_rect(&self, element: ElementId) {
        self.state.borrow_mut().rects.remove(&element);
    }

    pub fn set_parent(&self, child: ElementId, parent: ElementId) {
        self.state.borrow_mut().parents.insert(child, parent);
    }

    /// Scrolls the page: every attached element moves by `(-dx, -dy)`, then a
    /// scroll event is dispatched.
    pub fn scroll_by(&self, dx: f32, dy: f32) -> usize {
        for r in self.state.borrow_mut().rects.values_mut() {
            *r = r.translate(-dx, -dy);
        }
        self.dispatch(&HostEvent::scroll(None))
    }

    /// Resizes the viewport and dispatches a resize event.
    pub fn resize(&self, viewport: Size) -> usize {
        self.set_viewport(viewport);
        self.dispatch(&HostEvent::resize())
    }

    /// Fires every listener registered for the event's kind and returns how
    /// many ran. A listener removed by an earlier one in the same dispatch
    /// does not run.
    pub fn dispatch(&self, event: &HostEvent) -> usize {
        let ids: SmallVec<[ListenerId; 8]> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|(_, l)| l.kind == event.kind)
            .map(|(id, _)| id)
            .collect();

        let mut fired = 0;
        for id in ids {
            let cb = self
                .state
                .borrow()
                .listeners
                .get(id)
                .map(|l| l.callback.clone());
            if let Some(cb) = cb {
                cb(event);
                fired += 1;
            }
        }
        fired
    }

    /// Moves the virtual clock forward and runs every timer that became due,
    /// in due order. Timers scheduled by those callbacks run too if due.
    pub fn advance(&self, by: Duration) -> usize {
        let now = {
            let mut st = self.state.borrow_mut();
            st.now += by;
            st.now
        };
        let mut ran = 0;
        loop {
            let next = {
                let st = self.state.borrow();
                st.timers
                    .iter()
                    .filter(|(_, t)| t.due <= now)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(id, _)| id)
            };
            let Some(id) = next else { break };
            let pending = self.state.borrow_mut().timers.remove(id);
            if let Some(p) = pending {
                (p.callback)();
                ran += 1;
            }
        }
        ran
    }

    /// Runs timers that are already due (zero-delay ones included).
    pub fn run_pending_timers(&self) -> usize {
        self.advance(Duration::ZERO)
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn listener_count_of(&self, kind: EventKind) -> usize {
        self.state
            .borrow()
            .listeners
            .values()
            .filter(|l| l.kind == kind)
            .count()
    }

    /// Listeners of `kind` registered on `target` with the given options.
    pub fn has_listener(
        &self,
        target: ListenTarget,
        kind: EventKind,
        options: ListenOptions,
    ) -> bool {
        self.state
            .borrow()
            .listeners
            .values()
            .any(|l| l.target == target && l.kind == kind && l.options == options)
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }
}

impl Host for HeadlessHost {
    fn viewport(&self) -> Size {
        self.state.borrow().viewport
    }

    fn measure(&self, element: ElementId) -> Option<Rect> {
        self.state.borrow().rects.get(&element).copied()
    }

    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let st = self.state.borrow();
        let mut cur = Some(node);
        // Bounded walk so a parent cycle set up by a test cannot hang.
        for _ in 0..=st.parents.len() {
            match cur {
                Some(n) if n == ancestor => return true,
                Some(n) => cur = st.parents.get(&n).copied(),
                None => return false,
            }
        }
        false
    }

    fn add_listener(
        &self,
        target: ListenTarget,
        kind: EventKind,
        options: ListenOptions,
        callback: Listener,
    ) -> ListenerId {
        self.state.borrow_mut().listeners.insert(Registered {
            target,
            kind,
            options,
            callback,
        })
    }

    fn remove_listener(&self, id: ListenerId) {
        self.state.borrow_mut().listeners.remove(id);
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let mut st = self.state.borrow_mut();
        let due = st.now + delay;
        let seq = st.next_seq;
        st.next_seq += 1;
        st.timers.insert(Pending { due, seq, callback })
    }

    fn clear_timeout(&self, id: TimerId) {
        self.state.borrow_mut().timers.remove(id);
    }
}
