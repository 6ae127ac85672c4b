//! # Popover
//!
//! A popover is a root plus three parts that share one `Rc<Settings>`:
//!
//! - [`PopoverTrigger`] toggles the open state (click or hover, plus
//!   Enter/Space) and carries `aria-haspopup`/`aria-expanded`/`aria-controls`;
//! - [`PopoverContent`] yields the fixed-position style for the panel and its
//!   dialog semantics;
//! - [`PopoverArrow`] yields the arrow style patch.
//!
//! The open flag is a [`Controllable<bool>`], so the owner may hold it
//! (controlled) or let the popover keep it (uncontrolled). Whenever the flag
//! flips, the root opens or closes its [`Positioner`] and, while open,
//! listens on the document for outside pointer-downs and Escape.
//!
//! ```rust
//! use std::rc::Rc;
//! use tether_core::*;
//! use tether_popover::headless::HeadlessHost;
//! use tether_popover::{ElementId, Popover, Settings};
//!
//! let host = Rc::new(HeadlessHost::new(Size::new(800.0, 600.0)));
//! let (button, panel) = (ElementId(1), ElementId(2));
//! host.set_rect(button, Rect::new(10.0, 10.0, 60.0, 24.0));
//! host.set_rect(panel, Rect::new(0.0, 0.0, 120.0, 80.0));
//!
//! let popover = Popover::new(
//!     host.clone(),
//!     button,
//!     panel,
//!     Settings::default().with_placement(Placement::BOTTOM_START),
//!     Controllable::uncontrolled(false),
//! );
//! popover.trigger().click();
//! host.run_pending_timers();
//!
//! let style = popover.content().style();
//! assert!(style.visible);
//! assert_eq!((style.top, style.left), (42.0, 10.0));
//! ```

use std::cell::Cell;
use std::rc::{Rc, Weak};

use tether_core::{Controllable, Key, KeyEvent, Role, Scope, Semantics, SubId};

use crate::host::{ElementId, EventKind, Host, HostEvent, ListenOptions, ListenTarget, listen};
use crate::positioner::Positioner;
use crate::resolve::PositioningResult;
use crate::settings::{Settings, TriggerMode};

pub struct Popover<H: Host + 'static> {
    inner: Rc<PopoverInner<H>>,
}

struct PopoverInner<H: Host + 'static> {
    host: Rc<H>,
    settings: Rc<Settings>,
    trigger: ElementId,
    content: ElementId,
    open: Controllable<bool>,
    positioner: Positioner<H>,
    dismiss: Scope,
    subscription: Cell<Option<SubId>>,
}

impl<H: Host + 'static> Popover<H> {
    pub fn new(
        host: Rc<H>,
        trigger: ElementId,
        content: ElementId,
        settings: Settings,
        open: Controllable<bool>,
    ) -> Self {
        let settings = Rc::new(settings);
        let positioner = Positioner::new(host.clone(), trigger, content, settings.clone());
        let inner = Rc::new(PopoverInner {
            host,
            settings,
            trigger,
            content,
            open,
            positioner,
            dismiss: Scope::new(),
            subscription: Cell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let id = inner.open.subscribe(move |open| {
            if let Some(inner) = weak.upgrade() {
                inner.apply(*open);
            }
        });
        inner.subscription.set(Some(id));

        inner.apply(inner.open.get());
        Self { inner }
    }

    pub fn is_open(&self) -> bool {
        self.inner.open.get()
    }

    /// Requests a new open state. Routed through the owner when controlled.
    pub fn set_open(&self, open: bool) {
        self.inner.request(open);
    }

    /// Pushes the owner's value in (controlled prop change).
    pub fn sync_open(&self, open: bool) {
        self.inner.open.sync(open);
    }

    pub fn settings(&self) -> &Rc<Settings> {
        &self.inner.settings
    }

    pub fn position(&self) -> Option<PositioningResult> {
        self.inner.positioner.position()
    }

    pub fn positioner(&self) -> &Positioner<H> {
        &self.inner.positioner
    }

    /// DOM id given to the panel, referenced by `aria-controls`.
    pub fn content_id(&self) -> String {
        format!("tether-popover-{}", self.inner.content.0)
    }

    pub fn trigger(&self) -> PopoverTrigger<'_, H> {
        PopoverTrigger { popover: self }
    }

    pub fn content(&self) -> PopoverContent<'_, H> {
        PopoverContent { popover: self }
    }

    pub fn arrow(&self) -> PopoverArrow<'_, H> {
        PopoverArrow { popover: self }
    }
}

impl<H: Host + 'static> Drop for Popover<H> {
    fn drop(&mut self) {
        if let Some(id) = self.inner.subscription.take() {
            self.inner.open.unsubscribe(id);
        }
        self.inner.dismiss.dispose();
        self.inner.positioner.close();
    }
}

impl<H: Host + 'static> PopoverInner<H> {
    fn request(&self, open: bool) {
        if open && self.settings.disabled {
            return;
        }
        self.open.set(open);
    }

    fn apply(self: &Rc<Self>, open: bool) {
        if open && !self.settings.disabled {
            if self.positioner.is_open() {
                return;
            }
            self.positioner.open();
            self.listen_for_dismissal();
        } else {
            self.dismiss.dispose();
            self.positioner.close();
        }
    }

    fn listen_for_dismissal(self: &Rc<Self>) {
        if self.settings.close_on_outside_click {
            let weak: Weak<Self> = Rc::downgrade(self);
            self.dismiss.adopt(listen(
                &self.host,
                ListenTarget::Document,
                EventKind::PointerDown,
                ListenOptions::default(),
                Rc::new(move |ev: &HostEvent| {
                    if let Some(inner) = weak.upgrade() {
                        inner.on_pointer_down(ev);
                    }
                }),
            ));
        }
        if self.settings.close_on_escape {
            let weak: Weak<Self> = Rc::downgrade(self);
            self.dismiss.adopt(listen(
                &self.host,
                ListenTarget::Document,
                EventKind::KeyDown,
                ListenOptions::default(),
                Rc::new(move |ev: &HostEvent| {
                    if let Some(inner) = weak.upgrade()
                        && ev.key == Some(Key::Escape)
                    {
                        log::debug!("popover {:?}: escape", inner.content);
                        inner.request(false);
                    }
                }),
            ));
        }
    }

    fn on_pointer_down(&self, ev: &HostEvent) {
        let Some(target) = ev.target else { return };
        if self.host.contains(self.trigger, target) || self.host.contains(self.content, target) {
            return;
        }
        log::debug!("popover {:?}: outside pointer-down on {target:?}", self.content);
        self.request(false);
    }
}

/// The element that opens the popover.
pub struct PopoverTrigger<'a, H: Host + 'static> {
    popover: &'a Popover<H>,
}

impl<H: Host + 'static> PopoverTrigger<'_, H> {
    pub fn click(&self) {
        if self.popover.settings().trigger == TriggerMode::Click {
            self.toggle();
        }
    }

    pub fn pointer_enter(&self) {
        if self.popover.settings().trigger == TriggerMode::Hover {
            self.popover.set_open(true);
        }
    }

    pub fn pointer_leave(&self) {
        if self.popover.settings().trigger == TriggerMode::Hover {
            self.popover.set_open(false);
        }
    }

    /// Enter and Space toggle in either mode. Returns whether the key was used.
    pub fn key_down(&self, ev: &KeyEvent) -> bool {
        if ev.is_repeat || !ev.key.is_activation() {
            return false;
        }
        self.toggle();
        true
    }

    pub fn semantics(&self) -> Semantics {
        let mut s = Semantics::new(Role::Button);
        s.has_popup = Some(Role::Dialog);
        s.expanded = Some(self.popover.is_open());
        s.controls = Some(self.popover.content_id());
        s.disabled = self.popover.settings().disabled;
        s
    }

    fn toggle(&self) {
        self.popover.set_open(!self.popover.is_open());
    }
}

/// Style for the floating panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentStyle {
    pub top: f32,
    pub left: f32,
    /// False while closed or before the first successful measurement.
    pub visible: bool,
}

impl ContentStyle {
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("position", "fixed".to_string()),
            ("top", format!("{}px", self.top)),
            ("left", format!("{}px", self.left)),
            (
                "visibility",
                if self.visible { "visible" } else { "hidden" }.to_string(),
            ),
        ]
    }
}

/// The floating panel.
pub struct PopoverContent<'a, H: Host + 'static> {
    popover: &'a Popover<H>,
}

impl<H: Host + 'static> PopoverContent<'_, H> {
    pub fn style(&self) -> ContentStyle {
        match self.popover.position() {
            Some(r) if self.popover.is_open() => ContentStyle {
                top: r.top,
                left: r.left,
                visible: true,
            },
            _ => ContentStyle {
                top: 0.0,
                left: 0.0,
                visible: false,
            },
        }
    }

    pub fn semantics(&self) -> Semantics {
        let mut s = Semantics::new(Role::Dialog);
        s.id = Some(self.popover.content_id());
        s.hidden = !self.style().visible;
        s
    }
}

/// Arrow style: its size plus the edge patch from resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowStyle {
    pub size: f32,
    pub patch: [(&'static str, f32); 2],
}

/// Decorative arrow pointing at the trigger.
pub struct PopoverArrow<'a, H: Host + 'static> {
    popover: &'a Popover<H>,
}

impl<H: Host + 'static> PopoverArrow<'_, H> {
    /// `None` when arrows are off, or the panel is closed or unplaced.
    pub fn style(&self) -> Option<ArrowStyle> {
        let settings = self.popover.settings();
        if !settings.with_arrow || !self.popover.is_open() {
            return None;
        }
        let arrow = self.popover.position()?.arrow?;
        Some(ArrowStyle {
            size: settings.arrow_size,
            patch: arrow.style(),
        })
    }

    pub fn semantics(&self) -> Semantics {
        let mut s = Semantics::new(Role::Presentation);
        s.hidden = true;
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessHost;
    use std::cell::RefCell;
    use tether_core::{Placement, Rect, Size};

    const TRIGGER: ElementId = ElementId(1);
    const CONTENT: ElementId = ElementId(2);
    const CONTENT_CHILD: ElementId = ElementId(3);
    const ELSEWHERE: ElementId = ElementId(9);

    fn host() -> Rc<HeadlessHost> {
        let host = Rc::new(HeadlessHost::new(Size::new(1024.0, 768.0)));
        host.set_rect(TRIGGER, Rect::new(100.0, 100.0, 50.0, 20.0));
        host.set_rect(CONTENT, Rect::new(0.0, 0.0, 80.0, 40.0));
        host.set_parent(CONTENT_CHILD, CONTENT);
        host
    }

    fn popover(host: &Rc<HeadlessHost>, settings: Settings) -> Popover<HeadlessHost> {
        Popover::new(
            host.clone(),
            TRIGGER,
            CONTENT,
            settings,
            Controllable::uncontrolled(false),
        )
    }

    #[test]
    fn click_toggles_and_places() {
        let host = host();
        let p = popover(&host, Settings::default());
        assert!(!p.content().style().visible);

        p.trigger().click();
        assert!(p.is_open());
        assert_eq!(
            p.content().style(),
            ContentStyle {
                top: 128.0,
                left: 85.0,
                visible: true
            }
        );
        // scroll, resize, pointer-down, key-down
        assert_eq!(host.listener_count(), 4);

        p.trigger().click();
        assert!(!p.is_open());
        assert!(!p.content().style().visible);
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn outside_pointer_down_closes() {
        let host = host();
        let p = popover(&host, Settings::default());
        p.set_open(true);

        host.dispatch(&HostEvent::pointer_down(CONTENT_CHILD));
        assert!(p.is_open());
        host.dispatch(&HostEvent::pointer_down(TRIGGER));
        assert!(p.is_open());

        host.dispatch(&HostEvent::pointer_down(ELSEWHERE));
        assert!(!p.is_open());
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn escape_closes_unless_disabled() {
        let host = host();
        let p = popover(&host, Settings::default());
        p.set_open(true);
        host.dispatch(&HostEvent::key_down(Key::Tab));
        assert!(p.is_open());
        host.dispatch(&HostEvent::key_down(Key::Escape));
        assert!(!p.is_open());

        let sticky = popover(
            &host,
            Settings::default()
                .close_on_escape(false)
                .close_on_outside_click(false),
        );
        sticky.set_open(true);
        assert_eq!(host.listener_count(), 2);
        host.dispatch(&HostEvent::key_down(Key::Escape));
        host.dispatch(&HostEvent::pointer_down(ELSEWHERE));
        assert!(sticky.is_open());
    }

    #[test]
    fn hover_mode_follows_the_pointer() {
        let host = host();
        let p = popover(&host, Settings::default().with_trigger(TriggerMode::Hover));
        p.trigger().click();
        assert!(!p.is_open());
        p.trigger().pointer_enter();
        assert!(p.is_open());
        p.trigger().pointer_leave();
        assert!(!p.is_open());

        assert!(p.trigger().key_down(&KeyEvent::new(Key::Enter)));
        assert!(p.is_open());
        assert!(!p.trigger().key_down(&KeyEvent::new(Key::ArrowDown)));
    }

    #[test]
    fn disabled_never_opens() {
        let host = host();
        let p = popover(&host, Settings::default().disabled(true));
        p.trigger().click();
        p.trigger().key_down(&KeyEvent::new(Key::Space));
        assert!(!p.is_open());
        assert_eq!(host.listener_count(), 0);
        assert!(p.trigger().semantics().disabled);
    }

    #[test]
    fn controlled_popover_waits_for_the_owner() {
        let host = host();
        let requests = Rc::new(RefCell::new(Vec::new()));
        let p = Popover::new(
            host.clone(),
            TRIGGER,
            CONTENT,
            Settings::default(),
            Controllable::controlled(false, {
                let requests = requests.clone();
                move |v: &bool| requests.borrow_mut().push(*v)
            }),
        );

        p.trigger().click();
        assert!(!p.is_open());
        assert_eq!(host.listener_count(), 0);

        p.sync_open(true);
        assert!(p.is_open());
        assert!(p.content().style().visible);

        host.dispatch(&HostEvent::pointer_down(ELSEWHERE));
        assert!(p.is_open());
        p.sync_open(false);
        assert!(!p.content().style().visible);
        assert_eq!(*requests.borrow(), vec![true, false]);
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn starts_open_when_initial_state_is_open() {
        let host = host();
        let p = Popover::new(
            host.clone(),
            TRIGGER,
            CONTENT,
            Settings::default(),
            Controllable::uncontrolled(true),
        );
        assert!(p.content().style().visible);
        assert_eq!(host.pending_timers(), 1);
    }

    #[test]
    fn unmount_while_open_leaves_no_listeners() {
        let host = host();
        let open = Controllable::uncontrolled(false);
        let p = Popover::new(
            host.clone(),
            TRIGGER,
            CONTENT,
            Settings::default().with_arrow(true),
            open.clone(),
        );
        open.set(true);
        assert_eq!(host.listener_count(), 4);
        assert_eq!(host.pending_timers(), 1);

        drop(p);
        assert_eq!(host.listener_count(), 0);
        assert_eq!(host.pending_timers(), 0);

        // The shared state outlives the popover without reaching it.
        open.set(false);
        open.set(true);
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn arrow_and_semantics() {
        let host = host();
        let p = popover(
            &host,
            Settings::default()
                .with_placement(Placement::TOP)
                .with_arrow(true)
                .with_arrow_size(10.0),
        );
        assert_eq!(p.arrow().style(), None);
        assert!(p.content().semantics().hidden);

        p.set_open(true);
        assert_eq!(
            p.arrow().style(),
            Some(ArrowStyle {
                size: 10.0,
                patch: [("bottom", -5.0), ("left", 35.0)],
            })
        );

        let trigger = p.trigger().semantics();
        assert_eq!(trigger.expanded, Some(true));
        assert_eq!(trigger.controls.as_deref(), Some("tether-popover-2"));
        let content = p.content().semantics();
        assert_eq!(content.role, Role::Dialog);
        assert_eq!(content.id.as_deref(), Some("tether-popover-2"));
        assert!(!content.hidden);
        assert!(p.arrow().semantics().hidden);
    }

    #[test]
    fn content_declarations() {
        let style = ContentStyle {
            top: 12.5,
            left: 4.0,
            visible: true,
        };
        assert_eq!(
            style.declarations(),
            vec![
                ("position", "fixed".to_string()),
                ("top", "12.5px".to_string()),
                ("left", "4px".to_string()),
                ("visibility", "visible".to_string()),
            ]
        );
    }
}
