//! Floating panels anchored to a trigger: placement resolution, the policy
//! that keeps a panel placed while the page moves, and the popover built on
//! top of both.

pub mod headless;
pub mod host;
pub mod popover;
pub mod positioner;
pub mod resolve;
pub mod settings;

pub use host::{
    ElementId, EventKind, Host, HostEvent, ListenOptions, ListenTarget, Listener, ListenerId,
    TimerId, listen, timeout,
};
pub use popover::{
    ArrowStyle, ContentStyle, Popover, PopoverArrow, PopoverContent, PopoverTrigger,
};
pub use positioner::Positioner;
pub use resolve::{
    ArrowPosition, HorizontalEdge, Offsets, PositionOptions, PositioningResult, VerticalEdge,
    resolve, try_resolve,
};
pub use settings::{Settings, TriggerMode};
