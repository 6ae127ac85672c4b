//! Drives a popover through the headless host and prints where the panel
//! lands as the page scrolls and resizes.
//!
//! Run with `RUST_LOG=debug` to see the positioning lifecycle.

use std::rc::Rc;

use anyhow::Context;
use tether_core::*;
use tether_popover::headless::HeadlessHost;
use tether_popover::{ElementId, HostEvent, Popover, Settings};

const BUTTON: ElementId = ElementId(1);
const PANEL: ElementId = ElementId(2);
const OUTSIDE: ElementId = ElementId(3);

const SETTINGS: &str = r#"{
    "placement": "top-start",
    "gap": 6.0,
    "with_arrow": true,
    "offsets": { "left": 4.0 }
}"#;

fn report(step: &str, popover: &Popover<HeadlessHost>, host: &HeadlessHost) {
    let style = popover.content().style();
    let placed = popover
        .position()
        .map(|r| r.actual.to_string())
        .unwrap_or_else(|| "-".into());
    println!(
        "{step:<14} open={:<5} visible={:<5} top={:>7.1} left={:>7.1} side={placed:<12} listeners={} timers={}",
        popover.is_open(),
        style.visible,
        style.top,
        style.left,
        host.listener_count(),
        host.pending_timers(),
    );
    if let Some(arrow) = popover.arrow().style() {
        println!("{:<14} arrow {:?}", "", arrow.patch);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings: Settings =
        serde_json::from_str(SETTINGS).context("parsing popover settings")?;
    log::info!("placement {} with gap {}", settings.placement, settings.gap);

    let host = Rc::new(HeadlessHost::new(Size::new(640.0, 480.0)));
    host.set_rect(BUTTON, Rect::new(40.0, 120.0, 96.0, 32.0));
    host.set_rect(PANEL, Rect::new(0.0, 0.0, 220.0, 90.0));

    let open = Controllable::uncontrolled(false).with_on_change(|open: &bool| {
        log::info!("open -> {open}");
    });
    let popover = Popover::new(host.clone(), BUTTON, PANEL, settings, open);
    report("initial", &popover, &host);

    popover.trigger().click();
    report("clicked", &popover, &host);

    host.run_pending_timers();
    report("after tick", &popover, &host);

    // Scrolling down brings the button near the top; the panel flips below.
    host.scroll_by(0.0, 60.0);
    report("scrolled", &popover, &host);

    host.resize(Size::new(320.0, 240.0));
    report("resized", &popover, &host);

    host.dispatch(&HostEvent::pointer_down(OUTSIDE));
    report("outside click", &popover, &host);

    popover.trigger().click();
    host.dispatch(&HostEvent::key_down(Key::Escape));
    report("escape", &popover, &host);

    drop(popover);
    println!(
        "unmounted      listeners={} timers={}",
        host.listener_count(),
        host.pending_timers()
    );
    Ok(())
}
