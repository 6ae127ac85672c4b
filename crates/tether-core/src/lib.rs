//! # Core vocabulary for floating panels
//!
//! `tether-core` holds the pieces every floating widget shares:
//!
//! - geometry value types (`Rect`, `Size`, `Vec2`, `Overflow`);
//! - the placement vocabulary (`Placement`, `Side`, `Align`);
//! - `Signal<T>` and the controlled/uncontrolled `Controllable<T>`;
//! - cleanup plumbing (`Dispose`, `Scope`);
//! - input and accessibility vocabulary (`Key`, `Role`, `Semantics`).
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use tether_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Cleanup
//!
//! Anything registered with the outside world (listeners, timers) is held as
//! a `Dispose` and tied to a `Scope`; disposing the scope releases it all:
//!
//! ```rust
//! use tether_core::*;
//!
//! let scope = Scope::new();
//! scope.adopt(on_unmount(|| println!("listener removed")));
//! scope.dispose();
//! assert_eq!(scope.pending(), 0);
//! ```

pub mod effects;
pub mod error;
pub mod geometry;
pub mod input;
pub mod placement;
pub mod prelude;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod state;
pub mod tests;

pub use effects::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use placement::*;
pub use prelude::*;
pub use scope::*;
pub use semantics::*;
pub use signal::*;
pub use state::*;
