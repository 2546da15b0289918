//! Framework-independent logic for a reorderable icon dock.
//!
//! [`DockState`] owns the item order and the transient hover/drag state; the
//! host UI feeds it [`DockEvent`]s and renders from the [`ItemTransform`]s
//! produced by [`item_transforms`]. Icon growth and lift near the pointer
//! follow an exponential distance falloff ([`dock::scale`]). Rendering,
//! gesture detection, and animation belong to the host.

pub mod config;
pub mod dock;
pub mod events;

pub use config::{Config, DockTuning, Icon, ItemConfig, Label};
pub use dock::{DockItem, DockState, GestureAction, ItemTransform, item_transforms};
pub use events::{AppEvent, DockEvent};
