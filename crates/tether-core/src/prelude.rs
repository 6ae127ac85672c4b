pub use crate::effects::{Dispose, on_unmount};
pub use crate::error::{ParsePlacementError, PlacementError};
pub use crate::geometry::{Overflow, Rect, Size, Vec2};
pub use crate::input::{Key, KeyEvent, Modifiers};
pub use crate::placement::{Align, Placement, Side};
pub use crate::scope::Scope;
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, signal};
pub use crate::state::Controllable;
