//! # Keeping a panel placed
//!
//! A [`Positioner`] owns the re-invocation policy for one floating panel:
//!
//! - on `open()` it places the panel right away, listens for scroll (capture,
//!   document) and resize (window), and places it again after a zero-delay
//!   timer so the host can commit the freshly shown panel first;
//! - every scroll/resize event recomputes synchronously;
//! - `close()` (and dropping the positioner) cancels the pending timer and
//!   removes both listeners.
//!
//! Everything registered while open lives in one session [`Scope`]; closing
//! disposes it, so no exit path can leak a listener. Host callbacks only hold
//! a weak reference back to the positioner.
//!
//! When an element cannot be measured the last position is kept (or the panel
//! stays hidden). When resolution rejects its input, a warning is logged and
//! the panel is put directly below the trigger instead.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use tether_core::{Scope, Signal, signal};
use web_time::Duration;

use crate::Settings;
use crate::host::{
    ElementId, EventKind, Host, HostEvent, ListenOptions, ListenTarget, Listener, listen, timeout,
};
use crate::resolve::{PositioningResult, try_resolve};

pub struct Positioner<H: Host + 'static> {
    inner: Rc<Inner<H>>,
}

struct Inner<H: Host + 'static> {
    host: Rc<H>,
    trigger: ElementId,
    content: ElementId,
    settings: Rc<Settings>,
    position: Signal<Option<PositioningResult>>,
    open: Cell<bool>,
    session: Scope,
    recomputes: Cell<u64>,
}

impl<H: Host + 'static> Positioner<H> {
    pub fn new(
        host: Rc<H>,
        trigger: ElementId,
        content: ElementId,
        settings: Rc<Settings>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                host,
                trigger,
                content,
                settings,
                position: signal(None),
                open: Cell::new(false),
                session: Scope::new(),
                recomputes: Cell::new(0),
            }),
        }
    }

    /// Starts tracking. Calling it while already open does nothing.
    pub fn open(&self) {
        let inner = &self.inner;
        if inner.open.replace(true) {
            return;
        }
        log::debug!("positioner {:?}: open", inner.content);

        let weak = Rc::downgrade(inner);
        let on_layout_change: Listener = Rc::new(move |ev: &HostEvent| {
            if let Some(inner) = weak.upgrade() {
                log::trace!("positioner {:?}: {:?}", inner.content, ev.kind);
                inner.recompute();
            }
        });
        inner.session.adopt(listen(
            &inner.host,
            ListenTarget::Document,
            EventKind::Scroll,
            ListenOptions::capture(),
            on_layout_change.clone(),
        ));
        inner.session.adopt(listen(
            &inner.host,
            ListenTarget::Window,
            EventKind::Resize,
            ListenOptions::default(),
            on_layout_change,
        ));

        inner.recompute();

        let weak: Weak<Inner<H>> = Rc::downgrade(inner);
        inner.session.adopt(timeout(&inner.host, Duration::ZERO, move || {
            if let Some(inner) = weak.upgrade() {
                inner.recompute();
            }
        }));
    }

    /// Stops tracking and forgets the position. Idempotent.
    pub fn close(&self) {
        let inner = &self.inner;
        if !inner.open.replace(false) {
            return;
        }
        log::debug!("positioner {:?}: close", inner.content);
        inner.session.dispose();
        inner.position.set_if_changed(None);
    }

    pub fn is_open(&self) -> bool {
        self.inner.open.get()
    }

    /// Recomputes now, e.g. after the panel's own content changed size.
    pub fn recompute(&self) {
        self.inner.recompute();
    }

    /// Current position; `None` while closed or not yet measurable.
    pub fn position(&self) -> Option<PositioningResult> {
        self.inner.position.get()
    }

    pub fn position_signal(&self) -> Signal<Option<PositioningResult>> {
        self.inner.position.clone()
    }

    /// How many times the panel has been measured and placed.
    pub fn recompute_count(&self) -> u64 {
        self.inner.recomputes.get()
    }

    pub fn settings(&self) -> &Rc<Settings> {
        &self.inner.settings
    }
}

impl<H: Host + 'static> Drop for Positioner<H> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<H: Host + 'static> Inner<H> {
    fn recompute(&self) {
        if !self.open.get() {
            return;
        }
        let (Some(trigger), Some(content)) =
            (self.host.measure(self.trigger), self.host.measure(self.content))
        else {
            log::debug!(
                "positioner {:?}: not measurable yet, keeping last position",
                self.content
            );
            return;
        };

        let settings = &self.settings;
        let result = match try_resolve(
            trigger,
            content,
            self.host.viewport(),
            settings.placement,
            &settings.position_options(),
        ) {
            Ok(r) => r,
            Err(e) => {
                log::warn!(
                    "positioner {:?}: {e}; falling back below the trigger",
                    self.content
                );
                PositioningResult::fallback(trigger)
            }
        };
        self.recomputes.set(self.recomputes.get() + 1);
        self.position.set_if_changed(Some(result));
    }
}
